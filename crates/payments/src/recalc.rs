//! Optional recalculation steps a document may expose.

use thiserror::Error;

/// Recalculations triggered after a hook has adjusted a payment document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecalcStep {
    SetMissingValues,
    SetExchangeRate,
    SetAmounts,
    SetDifferenceAmount,
}

impl RecalcStep {
    /// Invocation order.
    pub const ALL: [RecalcStep; 4] = [
        RecalcStep::SetMissingValues,
        RecalcStep::SetExchangeRate,
        RecalcStep::SetAmounts,
        RecalcStep::SetDifferenceAmount,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RecalcStep::SetMissingValues => "set_missing_values",
            RecalcStep::SetExchangeRate => "set_exchange_rate",
            RecalcStep::SetAmounts => "set_amounts",
            RecalcStep::SetDifferenceAmount => "set_difference_amount",
        }
    }
}

impl core::fmt::Display for RecalcStep {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure raised by a recalculation step.
#[derive(Debug, Error)]
#[error("{step} failed: {source}")]
pub struct RecalcError {
    pub step: RecalcStep,
    #[source]
    pub source: anyhow::Error,
}

impl RecalcError {
    pub fn new(step: RecalcStep, source: impl Into<anyhow::Error>) -> Self {
        Self {
            step,
            source: source.into(),
        }
    }
}

/// Capability: a document that can recompute derived fields.
///
/// A document exposes any subset of [`RecalcStep`]s. Callers must check
/// `supports` before calling `recalculate`; the defaults expose nothing.
pub trait Recalculate {
    fn supports(&self, _step: RecalcStep) -> bool {
        false
    }

    fn recalculate(&mut self, step: RecalcStep) -> Result<(), RecalcError> {
        Err(RecalcError::new(
            step,
            anyhow::anyhow!("{step} is not supported by this document"),
        ))
    }
}

/// Result of [`run_best_effort`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecalcReport {
    pub ran: Vec<RecalcStep>,
    pub failed: Vec<RecalcStep>,
}

/// Run every supported step in order, absorbing failures.
///
/// A failing step never stops the following ones. Failures are traced at
/// `debug` and listed in the report, nothing is returned as an error.
///
/// Only `Err` returns are absorbed. A step that panics unwinds through the
/// hook, so implementors must report failures as [`RecalcError`] and never
/// panic.
pub fn run_best_effort<R: Recalculate + ?Sized>(doc: &mut R) -> RecalcReport {
    let mut report = RecalcReport::default();

    for step in RecalcStep::ALL {
        if !doc.supports(step) {
            continue;
        }
        report.ran.push(step);
        if let Err(err) = doc.recalculate(step) {
            tracing::debug!(%step, error = %err, "recalculation failed; continuing");
            report.failed.push(step);
        }
    }

    report
}
