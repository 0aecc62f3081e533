//! Core types: values, primitives, configuration.
//!
//! This module contains the building blocks every other module uses.
//! Attribute types, defaults and writers all speak in terms of `Value`.

pub mod config;
pub mod primitive;
pub mod value;

pub use config::Configuration;
pub use primitive::{Primitive, TypeName};
pub use value::{Number, Object, Symbol, Value};
