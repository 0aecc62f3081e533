//! Coercers convert raw input values into an attribute's primitive.
//!
//! The engine only needs the `Coercer` trait. `StandardCoercer` is the
//! default implementation: one obvious conversion per method, configured by
//! `CoercerConfig`.
//!
//! ## Strictness
//!
//! A non-strict coercer returns values it cannot convert unchanged. A strict
//! coercer fails with `CoercionError::Unconvertible`. `Nil` always passes
//! through unchanged.

use std::fmt;

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::method::CoercionMethod;
use crate::core::{Symbol, Value};
use crate::error::CoercionError;

/// Converts values using a named coercion method.
pub trait Coercer: fmt::Debug + Send + Sync {
    /// Convert `value` with `method`.
    fn coerce(&self, method: CoercionMethod, value: Value) -> Result<Value, CoercionError>;
}

/// Settings for the standard coercer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoercerConfig {
    /// Fail on unconvertible values instead of passing them through.
    pub strict: bool,

    /// Strings (lowercase) that convert to `true`.
    pub true_values: Vec<String>,

    /// Strings (lowercase) that convert to `false`.
    pub false_values: Vec<String>,
}

impl Default for CoercerConfig {
    fn default() -> Self {
        Self {
            strict: false,
            true_values: ["1", "on", "t", "true", "y", "yes"].map(String::from).to_vec(),
            false_values: ["0", "off", "f", "false", "n", "no"].map(String::from).to_vec(),
        }
    }
}

impl CoercerConfig {
    /// Set strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Replace the string to boolean map.
    #[must_use]
    pub fn with_boolean_map<T, F>(mut self, true_values: T, false_values: F) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        self.true_values = true_values
            .into_iter()
            .map(|s| Into::<String>::into(s).to_lowercase())
            .collect();
        self.false_values = false_values
            .into_iter()
            .map(|s| Into::<String>::into(s).to_lowercase())
            .collect();
        self
    }
}

/// The default coercer.
#[derive(Clone, Debug, Default)]
pub struct StandardCoercer {
    config: CoercerConfig,
}

impl StandardCoercer {
    /// Create a coercer with the given settings.
    #[must_use]
    pub fn new(config: CoercerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &CoercerConfig {
        &self.config
    }

    fn convert(&self, method: CoercionMethod, value: &Value) -> Option<Value> {
        if value.is_nil() {
            return Some(Value::Nil);
        }

        match method {
            CoercionMethod::ToObject => Some(value.clone()),
            CoercionMethod::ToNumeric => match value {
                Value::Int(_) | Value::Float(_) => Some(value.clone()),
                Value::Str(s) => parse_int(s)
                    .map(Value::Int)
                    .or_else(|| parse_float(s).map(Value::Float)),
                _ => None,
            },
            CoercionMethod::ToInteger => match value {
                Value::Int(_) => Some(value.clone()),
                Value::Float(f) => float_to_int(*f).map(Value::Int),
                Value::Str(s) => parse_int(s)
                    .or_else(|| parse_float(s).and_then(float_to_int))
                    .map(Value::Int),
                _ => None,
            },
            CoercionMethod::ToFloat => match value {
                Value::Int(v) => Some(Value::Float(*v as f64)),
                Value::Float(_) => Some(value.clone()),
                Value::Str(s) => parse_float(s).map(Value::Float),
                _ => None,
            },
            CoercionMethod::ToString => match value {
                Value::Str(_) => Some(value.clone()),
                Value::Symbol(s) => Some(Value::Str(s.as_str().to_string())),
                Value::Int(v) => Some(Value::Str(v.to_string())),
                Value::Float(v) => Some(Value::Str(format!("{:?}", v))),
                Value::Bool(v) => Some(Value::Str(v.to_string())),
                _ => None,
            },
            CoercionMethod::ToSymbol => match value {
                Value::Symbol(_) => Some(value.clone()),
                Value::Str(s) => Some(Value::Symbol(Symbol::new(s.clone()))),
                _ => None,
            },
            CoercionMethod::ToBoolean => match value {
                Value::Bool(_) => Some(value.clone()),
                Value::Int(1) => Some(Value::Bool(true)),
                Value::Int(0) => Some(Value::Bool(false)),
                Value::Str(s) => self.parse_bool(s).map(Value::Bool),
                _ => None,
            },
            CoercionMethod::ToArray => match value {
                Value::List(_) => Some(value.clone()),
                Value::Map(entries) => Some(Value::List(
                    entries
                        .iter()
                        .map(|(k, v)| Value::list([k.clone(), v.clone()]))
                        .collect(),
                )),
                other => Some(Value::List(Vector::unit(other.clone()))),
            },
            CoercionMethod::ToHash => match value {
                Value::Map(_) => Some(value.clone()),
                Value::List(items) => pairs_to_map(items).map(Value::Map),
                Value::Object(object) => Some(Value::Map(
                    object
                        .fields
                        .iter()
                        .map(|(name, v)| (Value::symbol(name.clone()), v.clone()))
                        .collect(),
                )),
                _ => None,
            },
        }
    }

    fn parse_bool(&self, s: &str) -> Option<bool> {
        let needle = s.trim().to_lowercase();
        if self.config.true_values.contains(&needle) {
            Some(true)
        } else if self.config.false_values.contains(&needle) {
            Some(false)
        } else {
            None
        }
    }
}

impl Coercer for StandardCoercer {
    fn coerce(&self, method: CoercionMethod, value: Value) -> Result<Value, CoercionError> {
        match self.convert(method, &value) {
            Some(coerced) => Ok(coerced),
            None if self.config.strict => Err(CoercionError::Unconvertible {
                method,
                value: value.to_string(),
            }),
            None => {
                trace!(%method, kind = value.kind_name(), "value passed through uncoerced");
                Ok(value)
            }
        }
    }
}

fn parse_int(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

fn parse_float(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

fn float_to_int(f: f64) -> Option<i64> {
    if f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

fn pairs_to_map(items: &Vector<Value>) -> Option<OrdMap<Value, Value>> {
    items
        .iter()
        .map(|item| match item.as_list() {
            Some(pair) if pair.len() == 2 => Some((pair[0].clone(), pair[1].clone())),
            _ => None,
        })
        .collect()
}
