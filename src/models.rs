use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Record Set Models ============

/// Nationality classification distinguishing domestic from foreign customers.
///
/// Non-local customers require the additional permanent-residency lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Nationality {
    /// Domestic customer.
    Local,
    /// Foreign customer; PR status must be resolved for these.
    NonLocal,
}

impl fmt::Display for Nationality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nationality::Local => write!(f, "local"),
            Nationality::NonLocal => write!(f, "non-local"),
        }
    }
}

/// Standing of the customer's account with the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccountStatus {
    GoodStanding,
    Closed,
    Delinquent,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountStatus::GoodStanding => write!(f, "good-standing"),
            AccountStatus::Closed => write!(f, "closed"),
            AccountStatus::Delinquent => write!(f, "delinquent"),
        }
    }
}

/// Permanent-residency status, defined only for non-local customers.
///
/// This is a three-way value: a residency row may say true or false, and the
/// absence of a row means "not applicable". Collapsing `NotApplicable` into
/// `NotHeld` would change the non-recommendation rule embedded in the prompt,
/// so the three cases stay distinct everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrStatus {
    /// Residency row present with value true.
    Held,
    /// Residency row present with value false.
    NotHeld,
    /// No residency row for this customer.
    NotApplicable,
}

impl PrStatus {
    /// Resolves a residency lookup result to the three-way status.
    pub fn from_lookup(row: Option<bool>) -> Self {
        match row {
            Some(true) => PrStatus::Held,
            Some(false) => PrStatus::NotHeld,
            None => PrStatus::NotApplicable,
        }
    }
}

impl fmt::Display for PrStatus {
    /// Renders the status the way it appears in summaries and prompts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrStatus::Held => write!(f, "true"),
            PrStatus::NotHeld => write!(f, "false"),
            PrStatus::NotApplicable => write!(f, "not applicable"),
        }
    }
}

/// One row of the credit-score record set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditRecord {
    /// Unique customer identifier.
    pub id: u32,
    /// Customer's full name.
    pub name: String,
    /// Customer's email address.
    pub email: String,
    /// Credit score on the bureau scale.
    pub credit_score: u16,
}

/// One row of the account-status record set; joins to `CreditRecord` by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: u32,
    pub nationality: Nationality,
    pub account_status: AccountStatus,
}

/// One row of the residency record set.
///
/// Rows exist only for non-local customers; absence is meaningful, not an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResidencyRecord {
    pub id: u32,
    pub pr_status: bool,
}

/// The transient per-request attribute bundle joining all three record sets.
///
/// Built fresh on every assessment; the underlying record sets are never
/// mutated.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerProfile {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub credit_score: u16,
    pub nationality: Nationality,
    pub account_status: AccountStatus,
    /// Already resolved through the three-way derivation rule.
    pub pr_status: PrStatus,
}

// ============ API Models ============

/// Output format for the assessment report.
///
/// Both documented variants of the flow are exposed; they differ only in how
/// the model is told to shape its reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Step-by-step walkthrough with literal `->` separators.
    Walkthrough,
    /// Compact three-field summary (risk, interest rate, recommendation).
    Summary,
}

impl Default for ReportFormat {
    fn default() -> Self {
        ReportFormat::Walkthrough
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Walkthrough => write!(f, "walkthrough"),
            ReportFormat::Summary => write!(f, "summary"),
        }
    }
}

/// Request body for `POST /api/v1/assess`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessRequest {
    /// Identifier drawn from the known customer set.
    pub customer_id: u32,
    /// Report format; defaults to the walkthrough variant.
    #[serde(default)]
    pub format: ReportFormat,
}

/// Metadata attached to every assessment response.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentMetadata {
    /// Model that produced (or previously produced) the reply.
    pub model: String,
    /// Format the prompt requested.
    pub format: ReportFormat,
    /// Whether the reply was served from the response cache.
    pub cached: bool,
    /// When the model produced this reply. Preserved across cache hits, so
    /// a cached response carries the original assessment time.
    pub assessed_at: DateTime<Utc>,
}

/// Response body for `POST /api/v1/assess`.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    /// Human-readable summary of the customer's known attributes.
    pub customer_summary: String,
    /// The model's free-text reply, unparsed and unvalidated.
    pub model_reply: String,
    pub metadata: AssessmentMetadata,
}

/// Entry in the customer listing used to populate the dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerListEntry {
    pub id: u32,
    pub name: String,
}
