//! Error types.
//!
//! - `DeclarationError`: a mistake in an attribute declaration. Raised while
//!   a schema or registry is being built, never recovered internally.
//! - `CoercionError`: a coercer could not convert a value. Passed through
//!   the writer chain untouched.
//! - `AttrError`: everything the public API can return.

use thiserror::Error;

use crate::coercion::CoercionMethod;
use crate::core::TypeName;

/// An invalid attribute or type declaration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    /// A key/value type pairing with more than one entry.
    #[error("more than one [key => value] pair in `{declared}`")]
    AmbiguousPairs { declared: String },

    /// Only one of the key and value types of a mapping declared.
    #[error("`{present}` declared without `{missing}`")]
    IncompletePair { present: String, missing: String },

    /// An option holding the wrong kind of value.
    #[error("option `{option}` must be {expected}")]
    InvalidOption { option: String, expected: String },

    /// A type name registered twice.
    #[error("attribute type `{0}` is already registered")]
    DuplicateType(TypeName),

    /// An attribute name declared twice on the same host.
    #[error("attribute `{attribute}` is already declared on `{host}`")]
    DuplicateAttribute { host: String, attribute: String },

    /// Something other than a module passed to `include`.
    #[error("`{0}` is not a module and cannot be included")]
    NotAModule(String),
}

/// A coercer failed to convert a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    #[error("cannot coerce {value} with `{method}`")]
    Unconvertible { method: CoercionMethod, value: String },
}

/// Errors returned by the attribute engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttrError {
    #[error("declaration error: {0}")]
    Declaration(#[from] DeclarationError),

    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error("unknown attribute type `{0}`")]
    UnknownType(TypeName),

    #[error("unknown attribute `{attribute}` on `{host}`")]
    UnknownAttribute { host: String, attribute: String },

    #[error("`{0}` is a module and cannot be instantiated")]
    NotInstantiable(String),
}

pub type Result<T> = std::result::Result<T, AttrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_message() {
        let err = DeclarationError::InvalidOption {
            option: "key_type".into(),
            expected: "an attribute type".into(),
        };
        assert_eq!(err.to_string(), "option `key_type` must be an attribute type");
    }

    #[test]
    fn test_ambiguous_pairs_message() {
        let err = DeclarationError::AmbiguousPairs {
            declared: "{Symbol => String, String => Integer}".into(),
        };
        assert_eq!(
            err.to_string(),
            "more than one [key => value] pair in `{Symbol => String, String => Integer}`"
        );
    }

    #[test]
    fn test_coercion_error_is_transparent() {
        let inner = CoercionError::Unconvertible {
            method: CoercionMethod::ToInteger,
            value: "\"abc\"".into(),
        };
        let err: AttrError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err, AttrError::Coercion(inner));
    }
}
