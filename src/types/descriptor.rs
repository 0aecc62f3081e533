//! Attribute type descriptors.
//!
//! A `Descriptor` is the declarative record shared by every attribute type:
//! primitive, coercion method and default. The `AttributeType` trait adds
//! the behavior a type can customize. Its default methods run the base
//! behavior on the descriptor, so a type that overrides one can still call
//! the base version and extend its result.

use std::fmt;

use smallvec::smallvec;

use super::numeric::NumericType;
use super::options::{OptionName, Options, TypeArg, WriterOptionNames};
use crate::attribute::WriterKind;
use crate::coercion::CoercionMethod;
use crate::core::{Primitive, TypeName};
use crate::defaults::DefaultSpec;
use crate::error::DeclarationError;

/// Declarative record for one attribute type.
///
/// ## Example
///
/// ```
/// use attrkit::coercion::CoercionMethod;
/// use attrkit::core::{Primitive, TypeName, Value};
/// use attrkit::types::Descriptor;
///
/// let tags = Descriptor::new("Tags")
///     .with_primitive(Primitive::Array)
///     .with_coercion_method(CoercionMethod::ToArray)
///     .with_default(Value::list(["untagged"]));
///
/// assert_eq!(tags.name(), &TypeName::new("Tags"));
/// assert_eq!(tags.primitive(), Primitive::Array);
/// ```
#[derive(Clone, Debug)]
pub struct Descriptor {
    name: TypeName,
    primitive: Primitive,
    coercion_method: CoercionMethod,
    default: DefaultSpec,
}

impl Descriptor {
    /// Create a descriptor for a generic object type with a nil default.
    pub fn new(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            primitive: Primitive::Object,
            coercion_method: CoercionMethod::ToObject,
            default: DefaultSpec::default(),
        }
    }

    /// Set the nominal primitive (builder pattern).
    #[must_use]
    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitive = primitive;
        self
    }

    /// Set the coercion method (builder pattern).
    #[must_use]
    pub fn with_coercion_method(mut self, method: CoercionMethod) -> Self {
        self.coercion_method = method;
        self
    }

    /// Set the default specification (builder pattern).
    #[must_use]
    pub fn with_default(mut self, default: impl Into<DefaultSpec>) -> Self {
        self.default = default.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    #[must_use]
    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    #[must_use]
    pub fn coercion_method(&self) -> CoercionMethod {
        self.coercion_method
    }

    #[must_use]
    pub fn default(&self) -> &DefaultSpec {
        &self.default
    }

    /// Base option merge: validate the type argument, pass options through.
    pub fn merge_options(
        &self,
        type_arg: &TypeArg,
        options: &Options,
    ) -> Result<Options, DeclarationError> {
        ensure_single_pair(type_arg)?;
        Ok(options.clone())
    }

    /// Base writer option names.
    #[must_use]
    pub fn writer_option_names(&self) -> WriterOptionNames {
        smallvec![
            OptionName::PRIMITIVE,
            OptionName::COERCION_METHOD,
            OptionName::COERCE,
        ]
    }

    /// Base writer selection.
    #[must_use]
    pub fn coercible_writer_class(&self, _type_arg: &TypeArg, _options: &Options) -> WriterKind {
        WriterKind::Default
    }
}

/// Reject key/value pairings with more than one entry.
pub(crate) fn ensure_single_pair(type_arg: &TypeArg) -> Result<(), DeclarationError> {
    match type_arg.size() {
        Some(size) if size > 1 => Err(DeclarationError::AmbiguousPairs {
            declared: type_arg.to_string(),
        }),
        _ => Ok(()),
    }
}

/// An attribute type: a descriptor plus type-specific behavior.
///
/// Types are registered in a `TypeRegistry` and shared by every attribute
/// declared with them.
pub trait AttributeType: fmt::Debug + Send + Sync {
    /// The type's declarative record.
    fn descriptor(&self) -> &Descriptor;

    /// Registered name of the type.
    fn name(&self) -> &TypeName {
        self.descriptor().name()
    }

    /// Canonicalize a declaration's type argument and options.
    fn merge_options(
        &self,
        type_arg: &TypeArg,
        options: &Options,
    ) -> Result<Options, DeclarationError> {
        self.descriptor().merge_options(type_arg, options)
    }

    /// Option names that affect how values are written.
    fn writer_option_names(&self) -> WriterOptionNames {
        self.descriptor().writer_option_names()
    }

    /// Writer used when coercion is enabled.
    fn coercible_writer_class(&self, type_arg: &TypeArg, options: &Options) -> WriterKind {
        self.descriptor().coercible_writer_class(type_arg, options)
    }

    /// Downcast to a numeric type.
    fn as_numeric(&self) -> Option<&NumericType> {
        None
    }
}
