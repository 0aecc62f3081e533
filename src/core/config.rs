//! Coercion configuration.
//!
//! A `Configuration` decides whether attribute writers coerce at all and
//! which coercer they use. There is one process-wide configuration, created
//! lazily on first access and never reset. Schemas can carry their own
//! configuration instead (see `Schema::with_config`).
//!
//! ## Usage
//!
//! ```
//! use attrkit::core::config::{self, Configuration};
//!
//! // A scoped configuration for one schema
//! let scoped = Configuration::default().with_coerce(false);
//! assert!(!scoped.coerce);
//!
//! // The process-wide configuration
//! config::configure_coercer(|rules| rules.true_values.push("yup".into()));
//! assert!(config::configuration().coercer.true_values.contains(&"yup".to_string()));
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coercion::{Coercer, CoercerConfig, StandardCoercer};

/// Coercion settings read when attributes are declared.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Whether writers coerce assigned values.
    pub coerce: bool,

    /// Settings for the standard coercer.
    pub coercer: CoercerConfig,

    /// Replaces the standard coercer when set.
    #[serde(skip)]
    custom_coercer: Option<Arc<dyn Coercer>>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            coerce: true,
            coercer: CoercerConfig::default(),
            custom_coercer: None,
        }
    }
}

impl Configuration {
    /// Set the coercion toggle.
    #[must_use]
    pub fn with_coerce(mut self, coerce: bool) -> Self {
        self.coerce = coerce;
        self
    }

    /// Set strict mode on the standard coercer.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.coercer.strict = strict;
        self
    }

    /// Replace the standard coercer settings.
    #[must_use]
    pub fn with_coercer_config(mut self, coercer: CoercerConfig) -> Self {
        self.coercer = coercer;
        self
    }

    /// Use a custom coercer instead of the standard one.
    #[must_use]
    pub fn with_coercer(mut self, coercer: Arc<dyn Coercer>) -> Self {
        self.custom_coercer = Some(coercer);
        self
    }

    /// The coercer attributes bind when declared.
    #[must_use]
    pub fn coercer(&self) -> Arc<dyn Coercer> {
        match &self.custom_coercer {
            Some(coercer) => Arc::clone(coercer),
            None => Arc::new(StandardCoercer::new(self.coercer.clone())),
        }
    }
}

static CONFIGURATION: Lazy<RwLock<Configuration>> = Lazy::new(|| {
    debug!("initializing global configuration");
    RwLock::new(Configuration::default())
});

/// Snapshot of the process-wide configuration.
#[must_use]
pub fn configuration() -> Configuration {
    CONFIGURATION
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Mutate the process-wide configuration.
pub fn configure(f: impl FnOnce(&mut Configuration)) {
    let mut config = CONFIGURATION
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut config);
    debug!(coerce = config.coerce, strict = config.coercer.strict, "global configuration updated");
}

/// The process-wide coercion toggle.
#[must_use]
pub fn coerce() -> bool {
    CONFIGURATION
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .coerce
}

/// Set the process-wide coercion toggle.
pub fn set_coerce(value: bool) {
    configure(|config| config.coerce = value);
}

/// Mutate the process-wide coercion rules.
pub fn configure_coercer(f: impl FnOnce(&mut CoercerConfig)) {
    configure(|config| f(&mut config.coercer));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coercion::CoercionMethod;
    use crate::core::Value;

    #[test]
    fn test_default_config() {
        let config = Configuration::default();
        assert!(config.coerce);
        assert!(!config.coercer.strict);
        assert!(config.coercer.true_values.contains(&"yes".to_string()));
    }

    #[test]
    fn test_builder_pattern() {
        let config = Configuration::default().with_coerce(false).with_strict(true);
        assert!(!config.coerce);
        assert!(config.coercer.strict);
    }

    #[test]
    fn test_custom_coercer_is_shared() {
        let custom: Arc<dyn Coercer> = Arc::new(StandardCoercer::default());
        let config = Configuration::default().with_coercer(Arc::clone(&custom));
        assert!(Arc::ptr_eq(&config.coercer(), &custom));
    }

    #[test]
    fn test_standard_coercer_uses_settings() {
        let config = Configuration::default().with_strict(true);
        let result = config.coercer().coerce(CoercionMethod::ToInteger, Value::from("x"));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialization() {
        let config = Configuration::default().with_coerce(false);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.coerce, false);
        assert_eq!(deserialized.coercer, config.coercer);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: Configuration = serde_json::from_str(r#"{"coercer": {"strict": true}}"#).unwrap();
        assert!(config.coerce);
        assert!(config.coercer.strict);
        assert!(!config.coercer.false_values.is_empty());
    }
}
