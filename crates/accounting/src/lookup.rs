//! Account metadata lookup and cash/bank classification.

use thiserror::Error;

use payflex_core::DomainError;

use crate::account::is_cash_or_bank_type;

/// Failure reported by an account metadata store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountLookupError {
    /// The backing store could not answer (connection lost, timeout, ...).
    #[error("account metadata unavailable: {0}")]
    Unavailable(String),
}

impl From<AccountLookupError> for DomainError {
    fn from(err: AccountLookupError) -> Self {
        DomainError::unavailable(err.to_string())
    }
}

/// Read-only access to the `account_type` attribute of an account.
///
/// This is the seam where a host plugs in its metadata store. Returning
/// `Ok(None)` means the account is unknown or has no category.
pub trait AccountLookup {
    fn account_type(&self, account: &str) -> Result<Option<String>, AccountLookupError>;
}

/// Plain functions and closures work as lookups too.
impl<F> AccountLookup for F
where
    F: Fn(&str) -> Result<Option<String>, AccountLookupError>,
{
    fn account_type(&self, account: &str) -> Result<Option<String>, AccountLookupError> {
        self(account)
    }
}

/// Classify an account as cash-equivalent or bank.
///
/// An absent or empty identifier is `false` without touching the store.
/// Otherwise exactly one lookup is made; no caching, no retry.
pub fn is_cash_or_bank<L: AccountLookup + ?Sized>(
    lookup: &L,
    account: Option<&str>,
) -> Result<bool, AccountLookupError> {
    let Some(account) = account.filter(|a| !a.is_empty()) else {
        return Ok(false);
    };

    let account_type = lookup.account_type(account)?;
    tracing::trace!(account, ?account_type, "classified account");

    Ok(account_type.as_deref().is_some_and(is_cash_or_bank_type))
}
