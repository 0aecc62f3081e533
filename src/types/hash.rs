//! Typed mapping attributes.
//!
//! A hash attribute is declared either with the bare `Hash` type or with a
//! single key/value type pairing:
//!
//! ```
//! use attrkit::core::TypeName;
//! use attrkit::attribute::WriterKind;
//! use attrkit::types::{AttributeType, HashType, OptionName, Options, TypeArg};
//!
//! let hash = HashType::new();
//! let arg = TypeArg::pair(TypeName::SYMBOL, TypeName::STRING);
//! let merged = hash.merge_options(&arg, &Options::new()).unwrap();
//!
//! assert_eq!(merged.get_type(&OptionName::KEY_TYPE), Some(&TypeName::SYMBOL));
//! assert_eq!(merged.get_type(&OptionName::VALUE_TYPE), Some(&TypeName::STRING));
//! assert_eq!(hash.coercible_writer_class(&arg, &merged), WriterKind::TypedMapping);
//! ```
//!
//! The default is an empty mapping created when the type is built. It is
//! mutable, so it resolves through the `Clonable` strategy: every instance
//! gets its own copy.

use super::descriptor::{ensure_single_pair, AttributeType, Descriptor};
use super::options::{OptionName, Options, TypeArg, WriterOptionNames};
use crate::attribute::WriterKind;
use crate::coercion::CoercionMethod;
use crate::core::{Primitive, TypeName, Value};
use crate::error::DeclarationError;

/// An attribute type for key/value mappings.
#[derive(Clone, Debug)]
pub struct HashType {
    descriptor: Descriptor,
}

impl Default for HashType {
    fn default() -> Self {
        Self::new()
    }
}

impl HashType {
    /// Create the hash type with a fresh empty default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptor: Descriptor::new(TypeName::HASH)
                .with_primitive(Primitive::Hash)
                .with_coercion_method(CoercionMethod::ToHash)
                .with_default(Value::empty_map()),
        }
    }
}

impl AttributeType for HashType {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn merge_options(
        &self,
        type_arg: &TypeArg,
        options: &Options,
    ) -> Result<Options, DeclarationError> {
        let mut merged = self.descriptor.merge_options(type_arg, options)?;

        if let TypeArg::Pairs(pairs) = type_arg {
            ensure_single_pair(type_arg)?;
            if let Some((key_type, value_type)) = pairs.first() {
                merged.insert(OptionName::KEY_TYPE, key_type.clone());
                merged.insert(OptionName::VALUE_TYPE, value_type.clone());
            }
        }

        for name in [OptionName::KEY_TYPE, OptionName::VALUE_TYPE] {
            if merged.get(&name).is_some_and(|value| value.as_type().is_none()) {
                return Err(DeclarationError::InvalidOption {
                    option: name.to_string(),
                    expected: "an attribute type".to_string(),
                });
            }
        }

        match (
            merged.get_type(&OptionName::KEY_TYPE).is_some(),
            merged.get_type(&OptionName::VALUE_TYPE).is_some(),
        ) {
            (true, false) => Err(incomplete_pair(OptionName::KEY_TYPE, OptionName::VALUE_TYPE)),
            (false, true) => Err(incomplete_pair(OptionName::VALUE_TYPE, OptionName::KEY_TYPE)),
            _ => Ok(merged),
        }
    }

    fn writer_option_names(&self) -> WriterOptionNames {
        let mut names = self.descriptor.writer_option_names();
        names.push(OptionName::KEY_TYPE);
        names.push(OptionName::VALUE_TYPE);
        names
    }

    fn coercible_writer_class(&self, type_arg: &TypeArg, options: &Options) -> WriterKind {
        if options.get_type(&OptionName::KEY_TYPE).is_some()
            && options.get_type(&OptionName::VALUE_TYPE).is_some()
        {
            WriterKind::TypedMapping
        } else {
            self.descriptor.coercible_writer_class(type_arg, options)
        }
    }
}

fn incomplete_pair(present: OptionName, missing: OptionName) -> DeclarationError {
    DeclarationError::IncompletePair {
        present: present.to_string(),
        missing: missing.to_string(),
    }
}
