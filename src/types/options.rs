//! Declaration options and type arguments.
//!
//! Options are an insertion-ordered map of option name to value. Each
//! attribute type says which option names affect its writer; the rest are
//! carried through untouched.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::attribute::Attribute;
use crate::core::{TypeName, Value};
use crate::defaults::DefaultSpec;
use crate::host::Instance;

/// Name of a declaration option.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OptionName(pub Cow<'static, str>);

impl OptionName {
    pub const PRIMITIVE: OptionName = OptionName::from_static("primitive");
    pub const COERCION_METHOD: OptionName = OptionName::from_static("coercion_method");
    pub const COERCE: OptionName = OptionName::from_static("coerce");
    pub const DEFAULT: OptionName = OptionName::from_static("default");
    pub const LAZY: OptionName = OptionName::from_static("lazy");
    pub const KEY_TYPE: OptionName = OptionName::from_static("key_type");
    pub const VALUE_TYPE: OptionName = OptionName::from_static("value_type");

    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OptionName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Option names that affect how values are written.
pub type WriterOptionNames = SmallVec<[OptionName; 6]>;

/// Value of a declaration option.
#[derive(Clone, Debug)]
pub enum OptionValue {
    Value(Value),
    /// A reference to another attribute type (e.g. `key_type`).
    Type(TypeName),
    Default(DefaultSpec),
}

impl OptionValue {
    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            OptionValue::Value(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_type(&self) -> Option<&TypeName> {
        match self {
            OptionValue::Type(t) => Some(t),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_value().and_then(Value::as_bool)
    }
}

impl From<Value> for OptionValue {
    fn from(v: Value) -> Self {
        OptionValue::Value(v)
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Value(Value::Bool(v))
    }
}

impl From<TypeName> for OptionValue {
    fn from(t: TypeName) -> Self {
        OptionValue::Type(t)
    }
}

impl From<DefaultSpec> for OptionValue {
    fn from(d: DefaultSpec) -> Self {
        OptionValue::Default(d)
    }
}

/// Declaration options for one attribute.
///
/// ```
/// use attrkit::types::{OptionName, Options};
///
/// let options = Options::new().with_lazy(true).with_default(3);
/// assert_eq!(options.get_bool(&OptionName::LAZY), Some(true));
/// assert!(options.contains(&OptionName::DEFAULT));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Options(IndexMap<OptionName, OptionValue>);

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option (builder pattern).
    #[must_use]
    pub fn with(mut self, name: impl Into<OptionName>, value: impl Into<OptionValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Declare a default value (builder pattern).
    #[must_use]
    pub fn with_default(self, value: impl Into<Value>) -> Self {
        self.with(OptionName::DEFAULT, DefaultSpec::Value(value.into()))
    }

    /// Declare a default function (builder pattern).
    #[must_use]
    pub fn with_default_fn(
        self,
        f: impl Fn(&Instance, &Attribute) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.with(OptionName::DEFAULT, DefaultSpec::callable(f))
    }

    /// Override the configuration's coercion toggle (builder pattern).
    #[must_use]
    pub fn with_coerce(self, coerce: bool) -> Self {
        self.with(OptionName::COERCE, coerce)
    }

    /// Materialize the default on first read (builder pattern).
    #[must_use]
    pub fn with_lazy(self, lazy: bool) -> Self {
        self.with(OptionName::LAZY, lazy)
    }

    /// Insert or replace an option.
    pub fn insert(&mut self, name: impl Into<OptionName>, value: impl Into<OptionValue>) {
        self.0.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &OptionName) -> Option<&OptionValue> {
        self.0.get(name)
    }

    #[must_use]
    pub fn get_type(&self, name: &OptionName) -> Option<&TypeName> {
        self.get(name).and_then(OptionValue::as_type)
    }

    #[must_use]
    pub fn get_bool(&self, name: &OptionName) -> Option<bool> {
        self.get(name).and_then(OptionValue::as_bool)
    }

    #[must_use]
    pub fn contains(&self, name: &OptionName) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&OptionName, &OptionValue)> {
        self.0.iter()
    }

    /// Option names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &OptionName> {
        self.0.keys()
    }
}

/// The type argument of a declaration.
///
/// Either a bare type name, or key/value type pairs (only one pair is
/// valid; more are rejected by `merge_options`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeArg {
    Type(TypeName),
    Pairs(Vec<(TypeName, TypeName)>),
}

impl TypeArg {
    /// A single key/value pairing.
    pub fn pair(key: impl Into<TypeName>, value: impl Into<TypeName>) -> Self {
        TypeArg::Pairs(vec![(key.into(), value.into())])
    }

    /// Number of pairs, or `None` for a bare type.
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        match self {
            TypeArg::Type(_) => None,
            TypeArg::Pairs(pairs) => Some(pairs.len()),
        }
    }
}

impl From<TypeName> for TypeArg {
    fn from(t: TypeName) -> Self {
        TypeArg::Type(t)
    }
}

impl From<&str> for TypeArg {
    fn from(s: &str) -> Self {
        TypeArg::Type(TypeName::new(s))
    }
}

impl fmt::Display for TypeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeArg::Type(t) => write!(f, "{}", t),
            TypeArg::Pairs(pairs) => {
                write!(f, "{{")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} => {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}
