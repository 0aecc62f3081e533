//! Default-value strategies.
//!
//! A strategy decides how a declared default value becomes the value an
//! instance sees. Strategies are tried in order and the first one whose
//! `handles` returns true wins. `Verbatim` handles everything and is the
//! implicit last entry of every list, so selection always succeeds.
//!
//! ## Built-in strategies
//!
//! - `Clonable`: every value that is not value-like (nil, booleans, numbers,
//!   symbols). Resolves to a deep copy so instances never alias the
//!   declared default or each other.
//! - `Verbatim`: returns the declared value as is.
//!
//! Hosts add their own strategies with `DefaultStrategies::push_front` or
//! `DefaultStrategies::push`.

use std::fmt;
use std::sync::Arc;

use crate::attribute::Attribute;
use crate::core::Value;
use crate::host::Instance;

/// A host-provided default strategy.
pub trait CustomDefault: fmt::Debug + Send + Sync {
    /// Check if this strategy applies to a declared value.
    fn handles(&self, value: &Value) -> bool;

    /// Produce the default for one instance.
    fn resolve(&self, value: &Value, owner: &Instance, attribute: &Attribute) -> Value;
}

/// One entry in the ordered strategy list.
#[derive(Clone, Debug)]
pub enum DefaultStrategy {
    Clonable,
    Custom(Arc<dyn CustomDefault>),
    /// Catch-all fallback.
    Verbatim,
}

impl DefaultStrategy {
    /// Check if this strategy applies to a declared value.
    #[must_use]
    pub fn handles(&self, value: &Value) -> bool {
        match self {
            DefaultStrategy::Clonable => !value.is_value_like(),
            DefaultStrategy::Custom(strategy) => strategy.handles(value),
            DefaultStrategy::Verbatim => true,
        }
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DefaultStrategy::Clonable => "clonable",
            DefaultStrategy::Custom(_) => "custom",
            DefaultStrategy::Verbatim => "verbatim",
        }
    }
}

/// Ordered list of default strategies.
///
/// ```
/// use attrkit::core::Value;
/// use attrkit::defaults::{DefaultStrategies, DefaultStrategy};
///
/// let strategies = DefaultStrategies::new();
/// assert!(matches!(strategies.select(&Value::empty_map()), DefaultStrategy::Clonable));
/// assert!(matches!(strategies.select(&Value::Int(1)), DefaultStrategy::Verbatim));
/// ```
#[derive(Clone, Debug)]
pub struct DefaultStrategies {
    variants: Vec<DefaultStrategy>,
}

impl Default for DefaultStrategies {
    fn default() -> Self {
        Self {
            variants: vec![DefaultStrategy::Clonable],
        }
    }
}

impl DefaultStrategies {
    /// Create the standard list (`Clonable`, then the `Verbatim` fallback).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a strategy tried before all others.
    pub fn push_front(&mut self, strategy: Arc<dyn CustomDefault>) {
        self.variants.insert(0, DefaultStrategy::Custom(strategy));
    }

    /// Add a strategy tried after the existing ones.
    pub fn push(&mut self, strategy: Arc<dyn CustomDefault>) {
        self.variants.push(DefaultStrategy::Custom(strategy));
    }

    /// Select the first strategy that handles `value`.
    #[must_use]
    pub fn select(&self, value: &Value) -> DefaultStrategy {
        self.variants
            .iter()
            .find(|strategy| strategy.handles(value))
            .cloned()
            .unwrap_or(DefaultStrategy::Verbatim)
    }

    /// Iterate over the strategies in order, fallback excluded.
    pub fn iter(&self) -> impl Iterator<Item = &DefaultStrategy> {
        self.variants.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
