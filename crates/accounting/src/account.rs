use serde::{Deserialize, Serialize};

/// Account category literal for physical cash accounts.
pub const CASH: &str = "Cash";

/// Account category literal for bank-held balances.
pub const BANK: &str = "Bank";

/// High-level account kind (determines normal balance side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

/// Account identifier + metadata.
///
/// `account_type` is an open set of category strings (`Cash`, `Bank`,
/// `Receivable`, `Payable`, `Tax`, ...). Only the exact `Cash` and `Bank`
/// literals mark a cash-equivalent account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountRecord {
    pub code: String, // e.g. "1110 - Cash - ACME"
    pub name: String,
    pub kind: AccountKind,
    #[serde(default)]
    pub account_type: Option<String>,
}

impl AccountRecord {
    pub fn new(code: impl Into<String>, name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            kind,
            account_type: None,
        }
    }

    pub fn with_account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = Some(account_type.into());
        self
    }
}

pub(crate) fn is_cash_or_bank_type(account_type: &str) -> bool {
    account_type == CASH || account_type == BANK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_literals_are_cash_or_bank() {
        assert!(is_cash_or_bank_type(CASH));
        assert!(is_cash_or_bank_type(BANK));
        assert!(!is_cash_or_bank_type("cash"));
        assert!(!is_cash_or_bank_type("Bank "));
        assert!(!is_cash_or_bank_type("Receivable"));
    }

    #[test]
    fn builder_sets_account_type() {
        let record = AccountRecord::new("1200", "Bank", AccountKind::Asset).with_account_type(BANK);
        assert_eq!(record.account_type.as_deref(), Some("Bank"));
    }

    #[test]
    fn account_type_defaults_when_absent_in_json() {
        let json = r#"{"code":"1300","name":"Debtors","kind":"asset"}"#;
        let record: AccountRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.account_type, None);
        assert_eq!(record.kind, AccountKind::Asset);
    }
}
