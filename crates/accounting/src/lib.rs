//! Accounting module (account metadata and classification).
//!
//! Pure domain logic only: the metadata store is reached through the
//! injected [`AccountLookup`] capability, never a global handle.

pub mod account;
pub mod chart;
pub mod lookup;

pub use account::{AccountKind, AccountRecord, BANK, CASH};
pub use chart::ChartOfAccounts;
pub use lookup::{AccountLookup, AccountLookupError, is_cash_or_bank};
