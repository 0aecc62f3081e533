//! Declared attributes and their writers.
//!
//! ## Key Types
//!
//! - `Attribute`: One declared attribute of a host schema
//! - `WriterKind`: Writer chosen by an attribute type
//! - `Writer`: Writer bound to concrete coercion methods

pub mod definition;
pub mod writer;

pub use definition::Attribute;
pub use writer::{Writer, WriterKind};
