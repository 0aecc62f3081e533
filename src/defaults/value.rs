//! Default values bound to a strategy.
//!
//! `DefaultValue::build` runs once, when an attribute is declared: it picks
//! the strategy for the declared default and keeps the two together.
//! `DefaultValue::resolve` then runs once per instance.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::spec::{DefaultFn, DefaultSpec};
use super::strategy::{CustomDefault, DefaultStrategies, DefaultStrategy};
use crate::attribute::Attribute;
use crate::core::Value;
use crate::host::Instance;

/// A declared default together with the strategy that resolves it.
#[derive(Clone)]
pub enum DefaultValue {
    /// Call the function with the owning instance.
    FromCallable(DefaultFn),
    /// Deep copy the stored value.
    FromClonable(Value),
    /// Delegate to a host strategy.
    FromCustom {
        strategy: Arc<dyn CustomDefault>,
        value: Value,
    },
    /// Return the stored value as is.
    Verbatim(Value),
}

impl DefaultValue {
    /// Bind a declared default to its strategy.
    #[must_use]
    pub fn build(spec: DefaultSpec, strategies: &DefaultStrategies) -> Self {
        match spec {
            DefaultSpec::Callable(f) => DefaultValue::FromCallable(f),
            DefaultSpec::Value(value) => match strategies.select(&value) {
                DefaultStrategy::Clonable => DefaultValue::FromClonable(value),
                DefaultStrategy::Custom(strategy) => DefaultValue::FromCustom { strategy, value },
                DefaultStrategy::Verbatim => DefaultValue::Verbatim(value),
            },
        }
    }

    /// Produce the default for one instance.
    #[must_use]
    pub fn resolve(&self, owner: &Instance, attribute: &Attribute) -> Value {
        trace!(
            attribute = attribute.name(),
            strategy = self.strategy_name(),
            "resolving default"
        );
        match self {
            DefaultValue::FromCallable(f) => f(owner, attribute),
            DefaultValue::FromClonable(value) => value.deep_copy(),
            DefaultValue::FromCustom { strategy, value } => strategy.resolve(value, owner, attribute),
            DefaultValue::Verbatim(value) => value.clone(),
        }
    }

    /// The declared value, if the default is not a function.
    #[must_use]
    pub fn stored(&self) -> Option<&Value> {
        match self {
            DefaultValue::FromCallable(_) => None,
            DefaultValue::FromClonable(value)
            | DefaultValue::FromCustom { value, .. }
            | DefaultValue::Verbatim(value) => Some(value),
        }
    }

    /// Short name of the bound strategy.
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        match self {
            DefaultValue::FromCallable(_) => "callable",
            DefaultValue::FromClonable(_) => "clonable",
            DefaultValue::FromCustom { .. } => "custom",
            DefaultValue::Verbatim(_) => "verbatim",
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::FromCallable(_) => f.write_str("FromCallable(..)"),
            DefaultValue::FromClonable(v) => f.debug_tuple("FromClonable").field(v).finish(),
            DefaultValue::FromCustom { strategy, value } => f
                .debug_struct("FromCustom")
                .field("strategy", strategy)
                .field("value", value)
                .finish(),
            DefaultValue::Verbatim(v) => f.debug_tuple("Verbatim").field(v).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_selects_strategy() {
        let strategies = DefaultStrategies::new();

        let map = DefaultValue::build(Value::empty_map().into(), &strategies);
        assert_eq!(map.strategy_name(), "clonable");

        let number = DefaultValue::build(Value::Int(3).into(), &strategies);
        assert_eq!(number.strategy_name(), "verbatim");

        let callable = DefaultValue::build(DefaultSpec::callable(|_, _| Value::Nil), &strategies);
        assert_eq!(callable.strategy_name(), "callable");
        assert!(callable.stored().is_none());
    }

    #[test]
    fn test_stored_value() {
        let strategies = DefaultStrategies::new();
        let default = DefaultValue::build(Value::list([1, 2]).into(), &strategies);
        assert_eq!(default.stored(), Some(&Value::list([1, 2])));
    }
}
