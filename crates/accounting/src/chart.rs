//! In-memory chart of accounts.

use std::collections::HashMap;

use payflex_core::{DomainError, DomainResult};

use crate::account::AccountRecord;
use crate::lookup::{AccountLookup, AccountLookupError};

/// Chart of accounts keyed by account code.
///
/// Used as the default [`AccountLookup`] for embedded hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct ChartOfAccounts {
    accounts: HashMap<String, AccountRecord>,
}

impl ChartOfAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account. Codes are unique.
    pub fn insert(&mut self, account: AccountRecord) -> DomainResult<()> {
        if account.code.is_empty() {
            return Err(DomainError::validation("account code must not be empty"));
        }
        if self.accounts.contains_key(&account.code) {
            return Err(DomainError::invariant(format!(
                "account '{}' already exists",
                account.code
            )));
        }
        self.accounts.insert(account.code.clone(), account);
        Ok(())
    }

    pub fn get(&self, code: &str) -> Option<&AccountRecord> {
        self.accounts.get(code)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Load a chart from a JSON array of account records.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let records: Vec<AccountRecord> = serde_json::from_str(json)
            .map_err(|e| DomainError::configuration(format!("chart of accounts: {e}")))?;

        let mut chart = Self::new();
        for record in records {
            chart.insert(record)?;
        }
        Ok(chart)
    }
}

impl FromIterator<AccountRecord> for ChartOfAccounts {
    /// Later records with a duplicate code replace earlier ones.
    fn from_iter<I: IntoIterator<Item = AccountRecord>>(iter: I) -> Self {
        let accounts = iter
            .into_iter()
            .map(|account| (account.code.clone(), account))
            .collect();
        Self { accounts }
    }
}

impl AccountLookup for ChartOfAccounts {
    fn account_type(&self, account: &str) -> Result<Option<String>, AccountLookupError> {
        Ok(self
            .get(account)
            .and_then(|record| record.account_type.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountKind;
    use crate::lookup::is_cash_or_bank;

    fn chart() -> ChartOfAccounts {
        [
            AccountRecord::new("1110", "Cash", AccountKind::Asset).with_account_type("Cash"),
            AccountRecord::new("1200", "Bank", AccountKind::Asset).with_account_type("Bank"),
            AccountRecord::new("1300", "Debtors", AccountKind::Asset)
                .with_account_type("Receivable"),
            AccountRecord::new("5000", "Expenses", AccountKind::Expense),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn lookup_returns_category() {
        let chart = chart();
        assert_eq!(chart.account_type("1200").unwrap().as_deref(), Some("Bank"));
        assert_eq!(chart.account_type("5000").unwrap(), None);
        assert_eq!(chart.account_type("missing").unwrap(), None);
    }

    #[test]
    fn classifies_through_the_chart() {
        let chart = chart();
        assert!(is_cash_or_bank(&chart, Some("1110")).unwrap());
        assert!(is_cash_or_bank(&chart, Some("1200")).unwrap());
        assert!(!is_cash_or_bank(&chart, Some("1300")).unwrap());
        assert!(!is_cash_or_bank(&chart, Some("5000")).unwrap());
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let mut chart = chart();
        let err = chart
            .insert(AccountRecord::new("1110", "Petty cash", AccountKind::Asset))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(chart.len(), 4);
        assert_eq!(chart.get("1110").unwrap().name, "Cash");
    }

    #[test]
    fn empty_code_is_rejected() {
        let err = ChartOfAccounts::new()
            .insert(AccountRecord::new("", "Nameless", AccountKind::Asset))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn loads_from_json() {
        let json = r#"[
            {"code": "1200", "name": "Bank", "kind": "asset", "account_type": "Bank"},
            {"code": "2100", "name": "Creditors", "kind": "liability", "account_type": "Payable"}
        ]"#;
        let chart = ChartOfAccounts::from_json(json).unwrap();
        assert_eq!(chart.len(), 2);
        assert!(is_cash_or_bank(&chart, Some("1200")).unwrap());
        assert!(!is_cash_or_bank(&chart, Some("2100")).unwrap());
    }

    #[test]
    fn malformed_json_is_a_configuration_error() {
        let err = ChartOfAccounts::from_json("{").unwrap_err();
        assert!(matches!(err, DomainError::Configuration(_)));
    }
}
