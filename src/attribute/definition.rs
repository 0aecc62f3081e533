//! Declared attributes.
//!
//! An `Attribute` is one named attribute of a host schema: its resolved
//! type, merged options, writer, default and coercer. It is built once per
//! declaration and shared by every instance of the host.

use std::sync::Arc;

use super::writer::{Writer, WriterKind};
use crate::coercion::{Coercer, CoercionMethod};
use crate::core::{Configuration, Value};
use crate::defaults::{DefaultSpec, DefaultValue};
use crate::error::{DeclarationError, Result};
use crate::host::Instance;
use crate::types::{AttributeType, OptionName, OptionValue, Options, TypeArg, TypeRegistry};

/// One declared attribute.
#[derive(Clone, Debug)]
pub struct Attribute {
    name: String,
    type_arg: TypeArg,
    attribute_type: Arc<dyn AttributeType>,
    options: Options,
    default: DefaultValue,
    writer: Writer,
    coercer: Arc<dyn Coercer>,
    lazy: bool,
}

impl Attribute {
    /// Build an attribute from a declaration.
    ///
    /// The coercion toggle is read from the `coerce` option, falling back to
    /// `config`. The coercer is taken from `config` and kept for the life of
    /// the attribute.
    pub fn build(
        name: impl Into<String>,
        type_arg: TypeArg,
        options: &Options,
        registry: &TypeRegistry,
        config: &Configuration,
    ) -> Result<Self> {
        let attribute_type = registry.determine(&type_arg)?;
        let options = attribute_type.merge_options(&type_arg, options)?;

        let coerce = options
            .get_bool(&OptionName::COERCE)
            .unwrap_or(config.coerce);
        let writer = if coerce {
            coercible_writer(registry, attribute_type.as_ref(), &type_arg, &options)?
        } else {
            Writer::Plain
        };

        let spec = match options.get(&OptionName::DEFAULT) {
            Some(OptionValue::Default(spec)) => spec.clone(),
            Some(OptionValue::Value(value)) => DefaultSpec::Value(value.clone()),
            Some(OptionValue::Type(_)) => {
                return Err(DeclarationError::InvalidOption {
                    option: OptionName::DEFAULT.to_string(),
                    expected: "a value or a default function".to_string(),
                }
                .into())
            }
            None => attribute_type.descriptor().default().clone(),
        };
        let default = DefaultValue::build(spec, registry.strategies());
        let lazy = options.get_bool(&OptionName::LAZY).unwrap_or(false);

        Ok(Self {
            name: name.into(),
            type_arg,
            attribute_type,
            options,
            default,
            writer,
            coercer: config.coercer(),
            lazy,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type argument as declared.
    #[must_use]
    pub fn type_arg(&self) -> &TypeArg {
        &self.type_arg
    }

    #[must_use]
    pub fn attribute_type(&self) -> &Arc<dyn AttributeType> {
        &self.attribute_type
    }

    /// Options after the type's merge.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn default_value(&self) -> &DefaultValue {
        &self.default
    }

    #[must_use]
    pub fn writer(&self) -> Writer {
        self.writer
    }

    #[must_use]
    pub fn writer_kind(&self) -> WriterKind {
        self.writer.kind()
    }

    #[must_use]
    pub fn is_lazy(&self) -> bool {
        self.lazy
    }

    /// Run a value through the writer.
    pub fn write(&self, value: Value) -> Result<Value> {
        Ok(self.writer.write(self.coercer.as_ref(), value)?)
    }

    /// Resolve the default for `owner` and run it through the writer.
    pub fn resolve_default(&self, owner: &Instance) -> Result<Value> {
        self.write(self.default.resolve(owner, self))
    }
}

fn coercible_writer(
    registry: &TypeRegistry,
    attribute_type: &dyn AttributeType,
    type_arg: &TypeArg,
    options: &Options,
) -> Result<Writer> {
    let method = attribute_type.descriptor().coercion_method();
    match attribute_type.coercible_writer_class(type_arg, options) {
        WriterKind::Plain => Ok(Writer::Plain),
        WriterKind::Default => Ok(Writer::Coercing { method }),
        WriterKind::TypedMapping => Ok(Writer::TypedMapping {
            method,
            key: sub_type_method(registry, options, &OptionName::KEY_TYPE)?,
            value: sub_type_method(registry, options, &OptionName::VALUE_TYPE)?,
        }),
    }
}

fn sub_type_method(
    registry: &TypeRegistry,
    options: &Options,
    option: &OptionName,
) -> Result<CoercionMethod> {
    match options.get_type(option) {
        Some(name) => Ok(registry.lookup(name)?.descriptor().coercion_method()),
        None => Ok(CoercionMethod::ToObject),
    }
}
