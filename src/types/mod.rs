//! Attribute types: descriptors, type-specific behavior, registry.
//!
//! ## Key Types
//!
//! - `Descriptor`: Primitive, coercion method and default of a type
//! - `AttributeType`: Trait for type-specific option merging and writer selection
//! - `ObjectType`: Base behavior only (Object, String, Symbol, Boolean, Array)
//! - `NumericType`: Numbers with type-level `min`/`max` bounds
//! - `HashType`: Mappings with optional key/value sub-types
//! - `TypeRegistry`: Type name lookup and default strategies
//!
//! ## Declaration flow
//!
//! 1. The registry resolves the declaration's `TypeArg` to a type.
//! 2. The type's `merge_options` canonicalizes the options.
//! 3. The type's `coercible_writer_class` picks the writer.

pub mod descriptor;
pub mod hash;
pub mod numeric;
pub mod object;
pub mod options;
pub mod registry;

pub use descriptor::{AttributeType, Descriptor};
pub use hash::HashType;
pub use numeric::NumericType;
pub use object::ObjectType;
pub use options::{OptionName, OptionValue, Options, TypeArg, WriterOptionNames};
pub use registry::TypeRegistry;
