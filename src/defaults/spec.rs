//! Declared default specifications.

use std::fmt;
use std::sync::Arc;

use crate::attribute::Attribute;
use crate::core::Value;
use crate::host::Instance;

/// A default-producing function, called with the owning instance.
pub type DefaultFn = Arc<dyn Fn(&Instance, &Attribute) -> Value + Send + Sync>;

/// A default as declared on an attribute or attribute type.
#[derive(Clone)]
pub enum DefaultSpec {
    /// A concrete value.
    Value(Value),
    /// A function producing the value per instance.
    Callable(DefaultFn),
}

impl DefaultSpec {
    /// Create a callable default.
    pub fn callable(f: impl Fn(&Instance, &Attribute) -> Value + Send + Sync + 'static) -> Self {
        DefaultSpec::Callable(Arc::new(f))
    }

    /// Get the declared value if this is a value default.
    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            DefaultSpec::Value(v) => Some(v),
            DefaultSpec::Callable(_) => None,
        }
    }
}

impl Default for DefaultSpec {
    fn default() -> Self {
        DefaultSpec::Value(Value::Nil)
    }
}

impl From<Value> for DefaultSpec {
    fn from(v: Value) -> Self {
        DefaultSpec::Value(v)
    }
}

impl fmt::Debug for DefaultSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultSpec::Value(v) => f.debug_tuple("Value").field(v).finish(),
            DefaultSpec::Callable(_) => f.write_str("Callable(..)"),
        }
    }
}
