use crate::errors::AppError;
use crate::models::{
    AccountRecord, AccountStatus, CreditRecord, CustomerProfile, Nationality, PrStatus,
    ResidencyRecord,
};

/// The three fixed record sets, seeded once at startup and read-only after.
///
/// Stands in for a real customer database. Every id in the account set has
/// exactly one matching credit row; residency rows exist only for the
/// non-local subset of ids.
#[derive(Debug, Clone)]
pub struct CustomerDirectory {
    credit: Vec<CreditRecord>,
    accounts: Vec<AccountRecord>,
    residency: Vec<ResidencyRecord>,
}

impl CustomerDirectory {
    /// Builds the directory with the fixed demo rows.
    pub fn seed() -> Self {
        let credit = vec![
            CreditRecord {
                id: 1111,
                name: "Loren".to_string(),
                email: "loren@gmail.com".to_string(),
                credit_score: 455,
            },
            CreditRecord {
                id: 2222,
                name: "Matt".to_string(),
                email: "matt@yahoo.com".to_string(),
                credit_score: 685,
            },
            CreditRecord {
                id: 3333,
                name: "Hilda".to_string(),
                email: "halida@gmail.com".to_string(),
                credit_score: 825,
            },
            CreditRecord {
                id: 4444,
                name: "Andy".to_string(),
                email: "andy@gmail.com".to_string(),
                credit_score: 840,
            },
            CreditRecord {
                id: 5555,
                name: "Kit".to_string(),
                email: "kit@yahoo.com".to_string(),
                credit_score: 350,
            },
        ];

        let accounts = vec![
            AccountRecord {
                id: 1111,
                nationality: Nationality::Local,
                account_status: AccountStatus::GoodStanding,
            },
            AccountRecord {
                id: 2222,
                nationality: Nationality::NonLocal,
                account_status: AccountStatus::Closed,
            },
            AccountRecord {
                id: 3333,
                nationality: Nationality::Local,
                account_status: AccountStatus::Delinquent,
            },
            AccountRecord {
                id: 4444,
                nationality: Nationality::NonLocal,
                account_status: AccountStatus::GoodStanding,
            },
            AccountRecord {
                id: 5555,
                nationality: Nationality::Local,
                account_status: AccountStatus::Delinquent,
            },
        ];

        // Residency rows exist only for the non-local customers.
        let residency = vec![
            ResidencyRecord {
                id: 2222,
                pr_status: true,
            },
            ResidencyRecord {
                id: 4444,
                pr_status: false,
            },
        ];

        Self {
            credit,
            accounts,
            residency,
        }
    }

    /// The full ordered set of known customer identifiers.
    pub fn ids(&self) -> Vec<u32> {
        self.credit.iter().map(|r| r.id).collect()
    }

    /// Credit row for an identifier, if known.
    pub fn credit(&self, id: u32) -> Option<&CreditRecord> {
        self.credit.iter().find(|r| r.id == id)
    }

    /// Account row for an identifier, if known.
    pub fn account(&self, id: u32) -> Option<&AccountRecord> {
        self.accounts.iter().find(|r| r.id == id)
    }

    /// Residency row for an identifier. Absence is meaningful, not an error.
    pub fn residency(&self, id: u32) -> Option<&ResidencyRecord> {
        self.residency.iter().find(|r| r.id == id)
    }

    /// Joins the three record sets into the per-request attribute bundle.
    ///
    /// Derivation rule: the residency lookup only happens for non-local
    /// customers; a present row yields its boolean, an absent row yields
    /// `NotApplicable`. Local customers never trigger the lookup and resolve
    /// to `NotApplicable` as well.
    ///
    /// # Arguments
    ///
    /// * `id` - The customer identifier to resolve.
    ///
    /// # Returns
    ///
    /// * `Result<CustomerProfile, AppError>` - The joined bundle, or
    ///   `NotFound` when the identifier is outside the known set.
    pub fn profile(&self, id: u32) -> Result<CustomerProfile, AppError> {
        let credit = self
            .credit(id)
            .ok_or_else(|| AppError::NotFound(format!("Customer with id {} not found", id)))?;
        let account = self.account(id).ok_or_else(|| {
            AppError::NotFound(format!("Account record for customer {} not found", id))
        })?;

        let pr_status = match account.nationality {
            Nationality::NonLocal => {
                PrStatus::from_lookup(self.residency(id).map(|r| r.pr_status))
            }
            Nationality::Local => PrStatus::NotApplicable,
        };

        Ok(CustomerProfile {
            id: credit.id,
            name: credit.name.clone(),
            email: credit.email.clone(),
            credit_score: credit.credit_score,
            nationality: account.nationality,
            account_status: account.account_status,
            pr_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_exposes_all_five_ids() {
        let dir = CustomerDirectory::seed();
        assert_eq!(dir.ids(), vec![1111, 2222, 3333, 4444, 5555]);
    }

    #[test]
    fn every_account_row_has_a_credit_row() {
        let dir = CustomerDirectory::seed();
        for id in dir.ids() {
            assert!(dir.credit(id).is_some());
            assert!(dir.account(id).is_some());
        }
    }

    #[test]
    fn local_customer_resolves_to_not_applicable() {
        let dir = CustomerDirectory::seed();
        let profile = dir.profile(1111).unwrap();
        assert_eq!(profile.nationality, Nationality::Local);
        assert_eq!(profile.pr_status, PrStatus::NotApplicable);
    }

    #[test]
    fn non_local_with_residency_row_keeps_its_boolean() {
        let dir = CustomerDirectory::seed();

        let matt = dir.profile(2222).unwrap();
        assert_eq!(matt.pr_status, PrStatus::Held);

        let andy = dir.profile(4444).unwrap();
        assert_eq!(andy.pr_status, PrStatus::NotHeld);
    }

    #[test]
    fn absent_residency_row_never_defaults_to_a_boolean() {
        let dir = CustomerDirectory::seed();
        for id in [3333, 5555] {
            let profile = dir.profile(id).unwrap();
            assert!(dir.residency(id).is_none());
            assert_eq!(profile.pr_status, PrStatus::NotApplicable);
        }
    }

    #[test]
    fn unknown_id_is_not_found() {
        let dir = CustomerDirectory::seed();
        assert!(matches!(dir.profile(9999), Err(AppError::NotFound(_))));
    }
}
