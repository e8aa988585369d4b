//! Prompt and summary assembly.
//!
//! Everything here is a pure function over the joined customer profile, the
//! loaded policy documents, and the selected report format. Assembling the
//! same inputs twice yields byte-identical strings; nothing is mutated.

use crate::models::{CustomerProfile, Nationality, ReportFormat};
use crate::policy::PolicyDocuments;

/// Renders the human-readable attribute block shown to the user before the
/// model reply.
///
/// The PR line appears only for non-local customers; for local customers the
/// residency lookup is never surfaced at all.
pub fn customer_summary(profile: &CustomerProfile, format: ReportFormat) -> String {
    match format {
        ReportFormat::Walkthrough => walkthrough_summary(profile),
        ReportFormat::Summary => compact_summary(profile),
    }
}

fn walkthrough_summary(profile: &CustomerProfile) -> String {
    let mut text = format!(
        "Customer Information:\n\
         Name: {}\n\
         ID: {}\n\
         Email: {}\n\
         \n\
         Step 1. Retrieve customer information\n\
         Credit Score: {}, Account Status: {}, Nationality: {}\n",
        profile.name,
        profile.id,
        profile.email,
        profile.credit_score,
        profile.account_status,
        profile.nationality,
    );

    if profile.nationality == Nationality::NonLocal {
        text.push_str(&format!(
            "\nStep 2. Check PR Status (this extra step is needed for non-local customers)\n\
             PR Status -> {}\n",
            profile.pr_status
        ));
    }

    text
}

fn compact_summary(profile: &CustomerProfile) -> String {
    let mut text = format!(
        "Customer Information:\n\
         Name: {}\n\
         ID: {}\n\
         Email: {}\n\
         Credit Score: {}\n\
         Account Status: {}\n\
         Nationality: {}\n",
        profile.name,
        profile.id,
        profile.email,
        profile.credit_score,
        profile.account_status,
        profile.nationality,
    );

    if profile.nationality == Nationality::NonLocal {
        text.push_str(&format!("PR Status: {}\n", profile.pr_status));
    }

    text
}

/// Assembles the full prompt submitted to the external model.
///
/// Fixed order: role instruction, verbatim risk policy, verbatim interest
/// policy, customer attribute bundle, then the format-specific output
/// template with its enumerated rules. The PR line appears only for
/// non-local customers (three-way rendering) so the model can apply the
/// non-recommendation rule; local customers get no PR line at all.
pub fn assessment_prompt(
    profile: &CustomerProfile,
    policies: &PolicyDocuments,
    format: ReportFormat,
) -> String {
    let mut prompt = format!(
        "You are a bank loan officer.\n\
         {}\n\
         \n\
         Bank Loan Overall Risk Policy:\n\
         {}\n\
         \n\
         Bank Loan Interest Rate Policy:\n\
         {}\n\
         \n\
         Customer Details:\n\
         Credit Score: {}\n\
         Account Status: {}\n\
         Nationality: {}\n",
        role_instruction(format),
        policies.risk,
        policies.interest,
        profile.credit_score,
        profile.account_status,
        profile.nationality,
    );

    if profile.nationality == Nationality::NonLocal {
        prompt.push_str(&format!("PR Status: {}\n", profile.pr_status));
    }

    prompt.push('\n');
    prompt.push_str(output_template(format));
    prompt
}

fn role_instruction(format: ReportFormat) -> &'static str {
    match format {
        ReportFormat::Walkthrough => {
            "Follow the official workflow and continue from Step 3 onward."
        }
        ReportFormat::Summary => "Apply the official policies and report your assessment.",
    }
}

fn output_template(format: ReportFormat) -> &'static str {
    match format {
        ReportFormat::Walkthrough => {
            "Continue in this EXACT format:\n\
             \n\
             Step 3. Check Overall Risk\n\
             Credit Score: <value>, Account Status: <value> -> overall risk: <low/medium/high>\n\
             \n\
             Step 4. Check interest rate\n\
             overall risk: <risk> -> <interest rate>\n\
             \n\
             Step 5. Report\n\
             <Final recommendation sentence>\n\
             \n\
             Rules:\n\
             - Use lowercase for risk\n\
             - Use arrows (->) exactly\n\
             - If the customer is non-local and PR status is false, do NOT recommend\n\
             - Keep wording concise\n"
        }
        ReportFormat::Summary => {
            "Reply in this EXACT format:\n\
             \n\
             Overall Risk: <low/medium/high>\n\
             Interest Rate: <interest rate>\n\
             Recommendation: <final recommendation sentence>\n\
             \n\
             Rules:\n\
             - Use lowercase for risk\n\
             - Fill exactly the three fields above\n\
             - If the customer is non-local and PR status is false, do NOT recommend\n\
             - Keep wording concise\n"
        }
    }
}
