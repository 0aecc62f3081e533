//! Attribute writers.
//!
//! A writer turns an assigned value into the value stored on an instance.
//! Attribute types choose a `WriterKind`; the declared `Attribute` binds it
//! to concrete coercion methods as a `Writer`.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::coercion::{Coercer, CoercionMethod};
use crate::core::Value;
use crate::error::CoercionError;

/// Which writer an attribute uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WriterKind {
    /// Store values as assigned.
    Plain,
    /// Coerce with the attribute type's method.
    Default,
    /// Coerce the mapping, then each key and value with its sub-type's method.
    TypedMapping,
}

/// A writer bound to its coercion methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Writer {
    Plain,
    Coercing {
        method: CoercionMethod,
    },
    TypedMapping {
        method: CoercionMethod,
        key: CoercionMethod,
        value: CoercionMethod,
    },
}

impl Writer {
    #[must_use]
    pub fn kind(&self) -> WriterKind {
        match self {
            Writer::Plain => WriterKind::Plain,
            Writer::Coercing { .. } => WriterKind::Default,
            Writer::TypedMapping { .. } => WriterKind::TypedMapping,
        }
    }

    /// Produce the stored value for an assignment.
    ///
    /// Coercion errors are returned exactly as the coercer reported them.
    pub fn write(&self, coercer: &dyn Coercer, input: Value) -> Result<Value, CoercionError> {
        match *self {
            Writer::Plain => Ok(input),
            Writer::Coercing { method } => coercer.coerce(method, input),
            Writer::TypedMapping { method, key, value } => match coercer.coerce(method, input)? {
                Value::Map(entries) => entries
                    .into_iter()
                    .map(|(k, v)| Ok((coercer.coerce(key, k)?, coercer.coerce(value, v)?)))
                    .collect::<Result<OrdMap<Value, Value>, CoercionError>>()
                    .map(Value::Map),
                other => Ok(other),
            },
        }
    }
}
