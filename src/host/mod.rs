//! Attribute hosts.
//!
//! ## Key Types
//!
//! - `Schema`: Attributes declared on an entity or module
//! - `HostKind`: Whether a schema can be instantiated
//! - `Instance`: Attribute values of one entity

pub mod instance;
pub mod schema;

pub use instance::Instance;
pub use schema::{HostKind, Schema};
