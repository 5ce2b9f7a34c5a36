//! Evaluation Context

use crate::PluginRegistry;
use mise_core::UnitSystem;
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::Arc;
use tracing::warn;

/// Environment variable selecting the display unit system
pub const UNIT_SYSTEM_VAR: &str = "MISE_UNIT_SYSTEM";
/// Environment variable holding the default serving multiplier
pub const SERVING_MULTIPLIER_VAR: &str = "MISE_SERVING_MULTIPLIER";

/// Display preferences a reader has chosen for a recipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub unit_system: UnitSystem,
    pub serving_multiplier: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Us,
            serving_multiplier: 1.0,
        }
    }
}

impl Preferences {
    /// Read `MISE_UNIT_SYSTEM` and `MISE_SERVING_MULTIPLIER`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build preferences from any key lookup; bad values keep the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut prefs = Self::default();

        if let Some(raw) = lookup(UNIT_SYSTEM_VAR) {
            match raw.parse::<UnitSystem>() {
                Ok(system) => prefs.unit_system = system,
                Err(e) => warn!(var = UNIT_SYSTEM_VAR, value = %raw, error = %e, "ignoring unit system"),
            }
        }

        if let Some(raw) = lookup(SERVING_MULTIPLIER_VAR) {
            match raw.trim().parse::<f64>() {
                Ok(m) if m.is_finite() && m > 0.0 => prefs.serving_multiplier = m,
                _ => warn!(var = SERVING_MULTIPLIER_VAR, value = %raw, "ignoring serving multiplier"),
            }
        }

        prefs
    }
}

/// Evaluation context passed to plugins
pub struct EvalContext {
    pub preferences: Preferences,
    pub registry: Arc<PluginRegistry>,
}

impl EvalContext {
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self {
            preferences: Preferences::default(),
            registry,
        }
    }

    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_unit_system(mut self, system: UnitSystem) -> Self {
        self.preferences.unit_system = system;
        self
    }

    pub fn with_serving_multiplier(mut self, multiplier: f64) -> Self {
        self.preferences.serving_multiplier = multiplier;
        self
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.preferences.unit_system
    }

    pub fn serving_multiplier(&self) -> f64 {
        self.preferences.serving_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let prefs = Preferences::from_lookup(|_| None);
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_reads_both_vars() {
        let prefs = Preferences::from_lookup(lookup_from(&[
            (UNIT_SYSTEM_VAR, "metric"),
            (SERVING_MULTIPLIER_VAR, "1.5"),
        ]));
        assert_eq!(prefs.unit_system, UnitSystem::Metric);
        assert_eq!(prefs.serving_multiplier, 1.5);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let prefs = Preferences::from_lookup(lookup_from(&[
            (UNIT_SYSTEM_VAR, "imperial"),
            (SERVING_MULTIPLIER_VAR, "-2"),
        ]));
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let prefs: Preferences = serde_json::from_str(r#"{"unitSystem": "metric"}"#).unwrap();
        assert_eq!(prefs.unit_system, UnitSystem::Metric);
        assert_eq!(prefs.serving_multiplier, 1.0);
    }

    #[test]
    fn test_context_builders() {
        let ctx = EvalContext::new(Arc::new(PluginRegistry::new()))
            .with_unit_system(UnitSystem::Metric)
            .with_serving_multiplier(2.0);
        assert_eq!(ctx.unit_system(), UnitSystem::Metric);
        assert_eq!(ctx.serving_multiplier(), 2.0);
    }
}
