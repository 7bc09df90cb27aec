//! Payments module: payment entry documents and their lifecycle hooks.
//!
//! The flexible payment hook lets a payment entry keep a party only when the
//! money goes through a receivable/payable account, keeps the paid and
//! received amounts in sync, and nudges the document to recalculate.

pub mod config;
pub mod entry;
pub mod error;
pub mod hook;
pub mod lifecycle;
pub mod recalc;

pub use config::{FLEXIBLE_PAYMENT_ENTRY, HookConfig};
pub use entry::{PartyType, PaymentDocument, PaymentEntry, PaymentEntryId, PaymentType};
pub use error::HookError;
pub use hook::{HookOutcome, allow_flexible_payment_entry};
pub use lifecycle::{DocEvent, DocHook, HookRegistry};
pub use recalc::{RecalcError, RecalcReport, RecalcStep, Recalculate, run_best_effort};
