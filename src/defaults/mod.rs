//! Default-value resolution.
//!
//! ## Key Types
//!
//! - `DefaultSpec`: A default as declared (value or function)
//! - `DefaultStrategy`: One way of turning a declared value into an instance value
//! - `DefaultStrategies`: Ordered strategy list, first match wins
//! - `DefaultValue`: A declared default bound to its strategy
//!
//! ## Aliasing
//!
//! Mutable defaults (strings, lists, mappings, objects) go through the
//! `Clonable` strategy, which deep copies them for every instance. Two
//! instances never share a default, and mutating one never changes the
//! declared value.

pub mod spec;
pub mod strategy;
pub mod value;

pub use spec::{DefaultFn, DefaultSpec};
pub use strategy::{CustomDefault, DefaultStrategies, DefaultStrategy};
pub use value::DefaultValue;
