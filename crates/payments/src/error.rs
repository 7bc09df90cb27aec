use thiserror::Error;

use payflex_accounting::AccountLookupError;
use payflex_core::DomainError;

/// Hard failures of a payment lifecycle hook.
///
/// Anything not listed here (recalculation failures, unsupported party
/// types) is absorbed by the hook itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HookError {
    /// Payment type is neither `Pay` nor `Receive`. Shown to the user.
    #[error("Payment Type must be either 'Pay' or 'Receive'.")]
    InvalidPaymentType(String),

    #[error(transparent)]
    AccountLookup(#[from] AccountLookupError),

    #[error("invalid hook configuration: {0}")]
    Config(String),
}

impl From<HookError> for DomainError {
    fn from(err: HookError) -> Self {
        let message = err.to_string();
        match err {
            HookError::InvalidPaymentType(_) => DomainError::validation(message),
            HookError::AccountLookup(e) => e.into(),
            HookError::Config(msg) => DomainError::configuration(msg),
        }
    }
}
