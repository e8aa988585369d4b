/// Property-based tests using proptest
/// Tests invariants of the prompt assembler that should hold for all inputs
use loan_risk_api::models::{
    AccountStatus, CustomerProfile, Nationality, PrStatus, ReportFormat,
};
use loan_risk_api::policy::PolicyDocuments;
use loan_risk_api::prompt::{assessment_prompt, customer_summary};
use proptest::prelude::*;

fn arb_nationality() -> impl Strategy<Value = Nationality> {
    prop_oneof![Just(Nationality::Local), Just(Nationality::NonLocal)]
}

fn arb_account_status() -> impl Strategy<Value = AccountStatus> {
    prop_oneof![
        Just(AccountStatus::GoodStanding),
        Just(AccountStatus::Closed),
        Just(AccountStatus::Delinquent),
    ]
}

fn arb_pr_status() -> impl Strategy<Value = PrStatus> {
    prop_oneof![
        Just(PrStatus::Held),
        Just(PrStatus::NotHeld),
        Just(PrStatus::NotApplicable),
    ]
}

fn arb_format() -> impl Strategy<Value = ReportFormat> {
    prop_oneof![Just(ReportFormat::Walkthrough), Just(ReportFormat::Summary)]
}

prop_compose! {
    fn arb_profile()(
        id in 1u32..100_000,
        name in "[A-Za-z]{1,20}",
        email in "[a-z]{1,10}@[a-z]{1,10}\\.com",
        credit_score in 300u16..=850,
        nationality in arb_nationality(),
        account_status in arb_account_status(),
        pr_status in arb_pr_status(),
    ) -> CustomerProfile {
        CustomerProfile {
            id,
            name,
            email,
            credit_score,
            nationality,
            account_status,
            pr_status,
        }
    }
}

// Property: assembly never panics and is deterministic
proptest! {
    #[test]
    fn prompt_assembly_never_panics(
        profile in arb_profile(),
        risk in "\\PC*",
        interest in "\\PC*",
        format in arb_format(),
    ) {
        let policies = PolicyDocuments { risk, interest };
        let _ = assessment_prompt(&profile, &policies, format);
        let _ = customer_summary(&profile, format);
    }

    #[test]
    fn prompt_assembly_is_idempotent(
        profile in arb_profile(),
        risk in "\\PC{0,200}",
        interest in "\\PC{0,200}",
        format in arb_format(),
    ) {
        let policies = PolicyDocuments { risk, interest };
        let first = assessment_prompt(&profile, &policies, format);
        let second = assessment_prompt(&profile, &policies, format);
        prop_assert_eq!(first, second);
    }
}

// Property: policy documents are embedded verbatim, never truncated
proptest! {
    #[test]
    fn prompt_embeds_policies_verbatim(
        profile in arb_profile(),
        risk in "\\PC{1,300}",
        interest in "\\PC{1,300}",
        format in arb_format(),
    ) {
        let policies = PolicyDocuments {
            risk: risk.clone(),
            interest: interest.clone(),
        };
        let prompt = assessment_prompt(&profile, &policies, format);
        prop_assert!(prompt.contains(&risk));
        prop_assert!(prompt.contains(&interest));
    }
}

// Property: the PR line tracks nationality, never a defaulted boolean
proptest! {
    #[test]
    fn local_output_never_mentions_pr_status(
        profile in arb_profile().prop_map(|mut p| {
            p.nationality = Nationality::Local;
            p.pr_status = PrStatus::NotApplicable;
            p
        }),
        format in arb_format(),
    ) {
        let policies = PolicyDocuments {
            risk: "risk".to_string(),
            interest: "interest".to_string(),
        };
        let prompt = assessment_prompt(&profile, &policies, format);
        let summary = customer_summary(&profile, format);
        prop_assert!(!prompt.contains("PR Status:"));
        prop_assert!(!summary.contains("PR Status"));
    }

    #[test]
    fn non_local_output_renders_three_way_pr_status(
        profile in arb_profile().prop_map(|mut p| {
            p.nationality = Nationality::NonLocal;
            p
        }),
        format in arb_format(),
    ) {
        let policies = PolicyDocuments {
            risk: "risk".to_string(),
            interest: "interest".to_string(),
        };
        let prompt = assessment_prompt(&profile, &policies, format);
        let expected = match profile.pr_status {
            PrStatus::Held => "PR Status: true",
            PrStatus::NotHeld => "PR Status: false",
            PrStatus::NotApplicable => "PR Status: not applicable",
        };
        prop_assert!(prompt.contains(expected));
    }
}
