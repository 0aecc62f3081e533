//! # attrkit
//!
//! Declarative attribute types for host objects, with value coercion and
//! per-instance default values.
//!
//! ## Design Principles
//!
//! 1. **Declare Once**: Types, options, writers and defaults are resolved
//!    when an attribute is declared. Instances only run what was bound.
//!
//! 2. **No Shared Mutable Defaults**: Mutable default values are deep
//!    copied for every instance. Two instances never see each other's
//!    changes through a default.
//!
//! 3. **Frozen After Declaration**: Registries and schemas are shared as
//!    `Arc` once built, so type options and numeric bounds cannot change
//!    under existing instances.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Collection values use `im-rs`, so
//!   copying a value is cheap and never aliases mutable storage.
//!
//! - **Strategy List**: Default values pick their resolution strategy from
//!   an ordered list, with a verbatim fallback that always matches.
//!
//! ## Modules
//!
//! - `core`: Values, primitives, type names, configuration
//! - `coercion`: Coercion methods and coercers
//! - `types`: Attribute types, options, the type registry
//! - `defaults`: Default-value strategies
//! - `attribute`: Declared attributes and writers
//! - `host`: Schemas and instances

pub mod attribute;
pub mod coercion;
pub mod core;
pub mod defaults;
pub mod error;
pub mod host;
pub mod types;

// Re-export commonly used types
pub use crate::core::{Configuration, Number, Object, Primitive, Symbol, TypeName, Value};

pub use crate::coercion::{Coercer, CoercerConfig, CoercionMethod, StandardCoercer};

pub use crate::types::{
    AttributeType, Descriptor, HashType, NumericType, ObjectType,
    OptionName, OptionValue, Options, TypeArg, TypeRegistry,
};

pub use crate::defaults::{CustomDefault, DefaultSpec, DefaultStrategies, DefaultStrategy, DefaultValue};

pub use crate::attribute::{Attribute, Writer, WriterKind};

pub use crate::host::{HostKind, Instance, Schema};

pub use crate::error::{AttrError, CoercionError, DeclarationError, Result};
