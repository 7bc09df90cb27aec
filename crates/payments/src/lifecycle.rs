//! Document lifecycle events and the hooks bound to them.

use core::str::FromStr;
use std::collections::HashMap;

use payflex_accounting::AccountLookup;
use payflex_core::DomainError;

use crate::config::{FLEXIBLE_PAYMENT_ENTRY, HookConfig};
use crate::entry::PaymentDocument;
use crate::error::HookError;
use crate::hook::{HookOutcome, allow_flexible_payment_entry};

/// Lifecycle points at which a host invokes document hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocEvent {
    BeforeValidate,
    Validate,
    BeforeSave,
    OnSubmit,
    OnCancel,
}

impl DocEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            DocEvent::BeforeValidate => "before_validate",
            DocEvent::Validate => "validate",
            DocEvent::BeforeSave => "before_save",
            DocEvent::OnSubmit => "on_submit",
            DocEvent::OnCancel => "on_cancel",
        }
    }
}

impl core::fmt::Display for DocEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocEvent {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before_validate" => Ok(DocEvent::BeforeValidate),
            "validate" => Ok(DocEvent::Validate),
            "before_save" => Ok(DocEvent::BeforeSave),
            "on_submit" => Ok(DocEvent::OnSubmit),
            "on_cancel" => Ok(DocEvent::OnCancel),
            other => Err(DomainError::configuration(format!(
                "unknown lifecycle event '{other}'"
            ))),
        }
    }
}

/// A hook invoked with the document, the account lookup and the event name.
pub type DocHook<D> = fn(&mut D, &dyn AccountLookup, DocEvent) -> Result<HookOutcome, HookError>;

/// Hooks bound to lifecycle events, run in registration order.
pub struct HookRegistry<D> {
    hooks: HashMap<DocEvent, Vec<(&'static str, DocHook<D>)>>,
}

impl<D> Default for HookRegistry<D> {
    fn default() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }
}

impl<D> core::fmt::Debug for HookRegistry<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let bound: HashMap<_, Vec<_>> = self
            .hooks
            .iter()
            .map(|(event, hooks)| (event, hooks.iter().map(|(name, _)| *name).collect()))
            .collect();
        f.debug_struct("HookRegistry").field("hooks", &bound).finish()
    }
}

impl<D> HookRegistry<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, event: DocEvent, name: &'static str, hook: DocHook<D>) {
        self.hooks.entry(event).or_default().push((name, hook));
    }

    /// Names of the hooks bound to `event`, in run order.
    pub fn bound(&self, event: DocEvent) -> Vec<&'static str> {
        self.hooks
            .get(&event)
            .map(|hooks| hooks.iter().map(|(name, _)| *name).collect())
            .unwrap_or_default()
    }

    /// Run every hook bound to `event`. Stops at the first hard error.
    ///
    /// Events with nothing bound are a no-op.
    pub fn run(
        &self,
        event: DocEvent,
        doc: &mut D,
        lookup: &dyn AccountLookup,
    ) -> Result<Vec<HookOutcome>, HookError> {
        let Some(hooks) = self.hooks.get(&event) else {
            return Ok(Vec::new());
        };

        let mut outcomes = Vec::with_capacity(hooks.len());
        for (name, hook) in hooks {
            tracing::debug!(hook = name, %event, "running document hook");
            match hook(&mut *doc, lookup, event) {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => {
                    tracing::warn!(hook = name, %event, error = %err, "document hook aborted");
                    return Err(err);
                }
            }
        }
        Ok(outcomes)
    }
}

impl<D: PaymentDocument> HookRegistry<D> {
    /// Build a registry from configuration.
    ///
    /// Unknown hook names or event names are configuration errors.
    pub fn from_config(config: &HookConfig) -> Result<Self, HookError> {
        let mut registry = Self::new();

        for (hook_name, events) in config.bindings() {
            let hook: (&'static str, DocHook<D>) = match hook_name.as_str() {
                FLEXIBLE_PAYMENT_ENTRY => {
                    (FLEXIBLE_PAYMENT_ENTRY, allow_flexible_payment_entry::<D>)
                }
                other => return Err(HookError::Config(format!("unknown hook '{other}'"))),
            };

            for event in events {
                let event: DocEvent = event
                    .parse()
                    .map_err(|e: DomainError| HookError::Config(e.to_string()))?;
                registry.register(event, hook.0, hook.1);
            }
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{PaymentEntry, PaymentEntryId};
    use payflex_accounting::ChartOfAccounts;
    use payflex_core::DocumentId;

    fn entry(payment_type: &str) -> PaymentEntry {
        PaymentEntry::new(PaymentEntryId::new(DocumentId::new()), payment_type)
    }

    fn mark_party(
        doc: &mut PaymentEntry,
        _: &dyn AccountLookup,
        _: DocEvent,
    ) -> Result<HookOutcome, HookError> {
        doc.party = Some(format!("{}+", doc.party.clone().unwrap_or_default()));
        Ok(HookOutcome::Skipped)
    }

    fn reject(
        doc: &mut PaymentEntry,
        _: &dyn AccountLookup,
        _: DocEvent,
    ) -> Result<HookOutcome, HookError> {
        Err(HookError::InvalidPaymentType(doc.payment_type.clone()))
    }

    #[test]
    fn event_names_parse_and_display() {
        for event in [
            DocEvent::BeforeValidate,
            DocEvent::Validate,
            DocEvent::BeforeSave,
            DocEvent::OnSubmit,
            DocEvent::OnCancel,
        ] {
            assert_eq!(event.as_str().parse::<DocEvent>().unwrap(), event);
        }
        assert!("on_update".parse::<DocEvent>().is_err());
    }

    #[test]
    fn hooks_run_in_registration_order() {
        let mut registry = HookRegistry::<PaymentEntry>::new();
        registry.register(DocEvent::Validate, "first", mark_party);
        registry.register(DocEvent::Validate, "second", mark_party);

        let mut doc = entry("Pay");
        let outcomes = registry
            .run(DocEvent::Validate, &mut doc, &ChartOfAccounts::new())
            .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(doc.party.as_deref(), Some("++"));
        assert_eq!(registry.bound(DocEvent::Validate), vec!["first", "second"]);
    }

    #[test]
    fn unbound_event_is_a_noop() {
        let mut registry = HookRegistry::<PaymentEntry>::new();
        registry.register(DocEvent::Validate, "mark", mark_party);

        let mut doc = entry("Pay");
        let before = doc.clone();
        let outcomes = registry
            .run(DocEvent::OnSubmit, &mut doc, &ChartOfAccounts::new())
            .unwrap();
        assert!(outcomes.is_empty());
        assert_eq!(doc, before);
    }

    #[test]
    fn first_error_stops_the_chain() {
        let mut registry = HookRegistry::<PaymentEntry>::new();
        registry.register(DocEvent::Validate, "reject", reject);
        registry.register(DocEvent::Validate, "mark", mark_party);

        let mut doc = entry("Transfer");
        let err = registry
            .run(DocEvent::Validate, &mut doc, &ChartOfAccounts::new())
            .unwrap_err();
        assert_eq!(err, HookError::InvalidPaymentType("Transfer".into()));
        assert_eq!(doc.party, None);
    }

    #[test]
    fn default_config_binds_validate() {
        let registry = HookRegistry::<PaymentEntry>::from_config(&HookConfig::default()).unwrap();
        assert_eq!(registry.bound(DocEvent::Validate), vec![FLEXIBLE_PAYMENT_ENTRY]);
        assert!(registry.bound(DocEvent::OnSubmit).is_empty());
    }

    #[test]
    fn unknown_names_in_config_are_rejected() {
        let config = HookConfig::from_json(r#"{"flexible_payment_entry": ["on_update"]}"#).unwrap();
        let err = HookRegistry::<PaymentEntry>::from_config(&config).unwrap_err();
        assert!(matches!(err, HookError::Config(msg) if msg.contains("on_update")));

        let config = HookConfig::from_json(r#"{"auto_reconcile": ["validate"]}"#).unwrap();
        let err = HookRegistry::<PaymentEntry>::from_config(&config).unwrap_err();
        assert!(matches!(err, HookError::Config(msg) if msg.contains("auto_reconcile")));
    }
}
