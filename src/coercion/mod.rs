//! Coercion: converting raw input values into an attribute's primitive.
//!
//! ## Key Types
//!
//! - `CoercionMethod`: Name of the conversion an attribute type asks for
//! - `Coercer`: Anything that can perform a named conversion
//! - `StandardCoercer`: Default coercer, configured by `CoercerConfig`
//!
//! The conversions themselves are deliberately small. Hosts that need
//! different rules plug in their own `Coercer` through the configuration.

pub mod coercer;
pub mod method;

pub use coercer::{Coercer, CoercerConfig, StandardCoercer};
pub use method::CoercionMethod;
