/// Unit tests for the lookup-and-prompt assembler
/// Exercises every known customer identifier against the fixed record sets
use loan_risk_api::models::{PrStatus, ReportFormat};
use loan_risk_api::policy::PolicyDocuments;
use loan_risk_api::prompt::{assessment_prompt, customer_summary};
use loan_risk_api::records::CustomerDirectory;

fn policies() -> PolicyDocuments {
    PolicyDocuments {
        risk: "Overall risk policy.\nScores below 550 are weak.\nDelinquent accounts are high risk."
            .to_string(),
        interest: "Interest rate policy.\nlow risk: 3.5%\nmedium risk: 5.5%\nhigh risk: 8.5%"
            .to_string(),
    }
}

#[cfg(test)]
mod local_customer_tests {
    use super::*;

    #[test]
    fn id_1111_summary_omits_pr_status() {
        let dir = CustomerDirectory::seed();
        let profile = dir.profile(1111).unwrap();
        assert_eq!(profile.credit_score, 455);

        for format in [ReportFormat::Walkthrough, ReportFormat::Summary] {
            let summary = customer_summary(&profile, format);
            assert!(!summary.contains("PR Status"), "summary: {}", summary);
        }
    }

    #[test]
    fn id_1111_prompt_has_no_pr_status_line() {
        let dir = CustomerDirectory::seed();
        let profile = dir.profile(1111).unwrap();
        let policies = policies();

        for format in [ReportFormat::Walkthrough, ReportFormat::Summary] {
            let prompt = assessment_prompt(&profile, &policies, format);
            assert!(!prompt.contains("PR Status:"), "prompt: {}", prompt);
        }
    }

    #[test]
    fn ids_without_residency_rows_resolve_to_not_applicable() {
        let dir = CustomerDirectory::seed();
        for id in [3333, 5555] {
            let profile = dir.profile(id).unwrap();
            assert_eq!(
                profile.pr_status,
                PrStatus::NotApplicable,
                "id {} must never default to a boolean",
                id
            );
        }
    }
}

#[cfg(test)]
mod non_local_customer_tests {
    use super::*;

    #[test]
    fn id_2222_summary_pr_line_reads_true() {
        let dir = CustomerDirectory::seed();
        let profile = dir.profile(2222).unwrap();
        assert_eq!(profile.pr_status, PrStatus::Held);

        let summary = customer_summary(&profile, ReportFormat::Walkthrough);
        assert!(summary.contains("PR Status -> true"));
        assert!(!summary.contains("not applicable"));
    }

    #[test]
    fn id_2222_prompt_embeds_literal_pr_value() {
        let dir = CustomerDirectory::seed();
        let profile = dir.profile(2222).unwrap();
        let prompt = assessment_prompt(&profile, &policies(), ReportFormat::Walkthrough);

        assert!(prompt.contains("PR Status: true"));
        assert!(!prompt.contains("not applicable"));
    }

    #[test]
    fn id_4444_prompt_carries_non_recommendation_rule() {
        let dir = CustomerDirectory::seed();
        let profile = dir.profile(4444).unwrap();
        assert_eq!(profile.pr_status, PrStatus::NotHeld);

        for format in [ReportFormat::Walkthrough, ReportFormat::Summary] {
            let prompt = assessment_prompt(&profile, &policies(), format);
            assert!(prompt.contains("PR Status: false"));
            assert!(prompt.contains(
                "If the customer is non-local and PR status is false, do NOT recommend"
            ));
        }
    }
}

#[cfg(test)]
mod prompt_content_tests {
    use super::*;

    #[test]
    fn prompt_is_byte_identical_across_assemblies() {
        let dir = CustomerDirectory::seed();
        let policies = policies();

        for id in dir.ids() {
            for format in [ReportFormat::Walkthrough, ReportFormat::Summary] {
                let profile = dir.profile(id).unwrap();
                let first = assessment_prompt(&profile, &policies, format);
                let second = assessment_prompt(&profile, &policies, format);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn prompt_contains_both_policy_texts_verbatim() {
        let dir = CustomerDirectory::seed();
        let policies = policies();

        for id in dir.ids() {
            let profile = dir.profile(id).unwrap();
            for format in [ReportFormat::Walkthrough, ReportFormat::Summary] {
                let prompt = assessment_prompt(&profile, &policies, format);
                assert!(prompt.contains(&policies.risk));
                assert!(prompt.contains(&policies.interest));
            }
        }
    }

    #[test]
    fn walkthrough_template_uses_arrow_separators() {
        let dir = CustomerDirectory::seed();
        let profile = dir.profile(1111).unwrap();
        let prompt = assessment_prompt(&profile, &policies(), ReportFormat::Walkthrough);

        assert!(prompt.contains("-> overall risk: <low/medium/high>"));
        assert!(prompt.contains("overall risk: <risk> -> <interest rate>"));
        assert!(prompt.contains("Use arrows (->) exactly"));
    }

    #[test]
    fn summary_template_uses_three_fields() {
        let dir = CustomerDirectory::seed();
        let profile = dir.profile(1111).unwrap();
        let prompt = assessment_prompt(&profile, &policies(), ReportFormat::Summary);

        assert!(prompt.contains("Overall Risk: <low/medium/high>"));
        assert!(prompt.contains("Interest Rate: <interest rate>"));
        assert!(prompt.contains("Recommendation: <final recommendation sentence>"));
        assert!(!prompt.contains("Step 3."));
    }

    #[test]
    fn both_formats_demand_lowercase_risk() {
        let dir = CustomerDirectory::seed();
        let profile = dir.profile(2222).unwrap();

        for format in [ReportFormat::Walkthrough, ReportFormat::Summary] {
            let prompt = assessment_prompt(&profile, &policies(), format);
            assert!(prompt.contains("Use lowercase for risk"));
        }
    }
}
