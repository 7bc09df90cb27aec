//! Hook bindings configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::HookError;

/// Registry name of the flexible payment entry hook.
pub const FLEXIBLE_PAYMENT_ENTRY: &str = "flexible_payment_entry";

/// Environment variable holding a JSON [`HookConfig`].
pub const HOOKS_ENV: &str = "PAYFLEX_HOOKS";

/// Which lifecycle events each hook is bound to.
///
/// JSON shape: `{"flexible_payment_entry": ["validate"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HookConfig {
    bindings: BTreeMap<String, Vec<String>>,
}

impl Default for HookConfig {
    fn default() -> Self {
        let mut bindings = BTreeMap::new();
        bindings.insert(FLEXIBLE_PAYMENT_ENTRY.to_string(), vec!["validate".to_string()]);
        Self { bindings }
    }
}

impl HookConfig {
    pub fn bindings(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.bindings.iter()
    }

    pub fn from_json(json: &str) -> Result<Self, HookError> {
        serde_json::from_str(json).map_err(|e| HookError::Config(format!("hook bindings: {e}")))
    }

    /// Read bindings from `PAYFLEX_HOOKS`, falling back to the default.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(HOOKS_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let Some(json) = value else {
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "{HOOKS_ENV} is invalid; using default hook bindings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_validate_only() {
        let config = HookConfig::default();
        let bindings: Vec<_> = config.bindings().collect();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].0, FLEXIBLE_PAYMENT_ENTRY);
        assert_eq!(bindings[0].1, &vec!["validate".to_string()]);
    }

    #[test]
    fn parses_json_bindings() {
        let config =
            HookConfig::from_json(r#"{"flexible_payment_entry": ["before_validate", "validate"]}"#)
                .unwrap();
        let events = config.bindings().next().unwrap().1;
        assert_eq!(events, &vec!["before_validate".to_string(), "validate".to_string()]);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = HookConfig::from_json("[]").unwrap_err();
        assert!(matches!(err, HookError::Config(_)));
    }

    #[test]
    fn env_value_falls_back_to_default() {
        assert_eq!(HookConfig::from_env_value(None), HookConfig::default());
        assert_eq!(HookConfig::from_env_value(Some("not json")), HookConfig::default());

        let custom = HookConfig::from_env_value(Some(r#"{"flexible_payment_entry": ["before_save"]}"#));
        assert_ne!(custom, HookConfig::default());
    }
}
