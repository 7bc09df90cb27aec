//! Flexible payment entry validation hook.

use payflex_accounting::{AccountLookup, is_cash_or_bank};
use payflex_core::Entity;

use crate::entry::{PaymentDocument, PaymentEntry, PaymentType};
use crate::error::HookError;
use crate::lifecycle::DocEvent;
use crate::recalc::{RecalcStep, run_best_effort};

/// What the hook did to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// Party type is not one the hook handles; the document is untouched.
    Skipped,
    Applied {
        party_cleared: bool,
        steps_run: Vec<RecalcStep>,
        steps_failed: Vec<RecalcStep>,
    },
}

/// Relax party validation for payments booked straight through cash/bank.
///
/// - Unknown party types are skipped silently.
/// - Anything but `Pay`/`Receive` aborts with [`HookError::InvalidPaymentType`]
///   before the document is touched.
/// - When the cash side of the payment (`paid_to` on receive, `paid_from` on
///   pay) is a cash or bank account, the party is dropped.
/// - Missing amounts are filled from each other, then the document's
///   recalculation steps run best-effort.
///
/// Zero amounts count as missing: an explicit `0` is overwritten by the
/// other amount. Hosts depend on this, so it is kept.
pub fn allow_flexible_payment_entry<D>(
    doc: &mut D,
    lookup: &dyn AccountLookup,
    event: DocEvent,
) -> Result<HookOutcome, HookError>
where
    D: PaymentDocument + ?Sized,
{
    let span = tracing::info_span!(
        "payment_entry.validate",
        entry_id = %doc.entry().id(),
        event = %event,
    );
    let _enter = span.enter();

    let entry = doc.entry();
    if entry.party_type().is_err() {
        tracing::debug!(
            party_type = entry.party_type.as_deref(),
            "unsupported party type; skipping"
        );
        return Ok(HookOutcome::Skipped);
    }

    let payment_type = entry
        .payment_type()
        .map_err(|_| HookError::InvalidPaymentType(entry.payment_type.clone()))?;

    let entry = doc.entry_mut();
    let cash_side = match payment_type {
        PaymentType::Receive => entry.paid_to.as_deref(),
        PaymentType::Pay => entry.paid_from.as_deref(),
    };
    let party_cleared = is_cash_or_bank(lookup, cash_side)?;
    if party_cleared {
        tracing::debug!(account = cash_side, "cash/bank account; clearing party");
        entry.clear_party();
    }
    sync_amounts(entry, payment_type);

    let report = run_best_effort(doc);

    Ok(HookOutcome::Applied {
        party_cleared,
        steps_run: report.ran,
        steps_failed: report.failed,
    })
}

/// `value || fallback || 0`, where zero counts as unset.
fn coalesce(value: Option<i64>, fallback: Option<i64>) -> i64 {
    value
        .filter(|v| *v != 0)
        .or(fallback.filter(|v| *v != 0))
        .unwrap_or(0)
}

/// Fill the amount on the cash side first, then the other from the result.
fn sync_amounts(entry: &mut PaymentEntry, payment_type: PaymentType) {
    match payment_type {
        PaymentType::Receive => {
            entry.received_amount = Some(coalesce(entry.received_amount, entry.paid_amount));
            entry.paid_amount = Some(coalesce(entry.paid_amount, entry.received_amount));
        }
        PaymentType::Pay => {
            entry.paid_amount = Some(coalesce(entry.paid_amount, entry.received_amount));
            entry.received_amount = Some(coalesce(entry.received_amount, entry.paid_amount));
        }
    }
}
