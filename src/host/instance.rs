//! Host instances.
//!
//! An `Instance` holds the attribute values of one entity. Non-lazy defaults
//! are materialized at construction, after any initial values are assigned,
//! so a callable default can read the values it was constructed with. Lazy
//! defaults are materialized on first read.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::trace;

use super::schema::{HostKind, Schema};
use crate::attribute::Attribute;
use crate::core::Value;
use crate::error::{AttrError, Result};

/// Attribute values of one entity.
#[derive(Clone, Debug)]
pub struct Instance {
    schema: Arc<Schema>,
    values: FxHashMap<String, Value>,
}

impl Instance {
    /// Create an instance with every non-lazy default resolved.
    pub fn new(schema: &Arc<Schema>) -> Result<Self> {
        Self::with_values(schema, std::iter::empty::<(String, Value)>())
    }

    /// Create an instance from initial values.
    ///
    /// Each value goes through its attribute's writer. Attributes left
    /// unassigned get their defaults afterwards.
    pub fn with_values<K, V>(
        schema: &Arc<Schema>,
        values: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        if schema.kind() == HostKind::Module {
            return Err(AttrError::NotInstantiable(schema.name().to_string()));
        }

        let mut instance = Self {
            schema: Arc::clone(schema),
            values: FxHashMap::default(),
        };
        for (name, value) in values {
            let name = name.into();
            instance.set(&name, value)?;
        }

        for attribute in schema.attributes() {
            if attribute.is_lazy() || instance.values.contains_key(attribute.name()) {
                continue;
            }
            let value = attribute.resolve_default(&instance)?;
            instance.values.insert(attribute.name().to_string(), value);
        }
        Ok(instance)
    }

    #[must_use]
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Read an attribute, materializing a lazy default first.
    pub fn get(&mut self, name: &str) -> Result<&Value> {
        self.materialize(name)?;
        Ok(&*self.values.entry(name.to_string()).or_default())
    }

    /// Mutable access to an attribute's stored value.
    ///
    /// Changes made through the reference bypass the writer.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Value> {
        self.materialize(name)?;
        Ok(self.values.entry(name.to_string()).or_default())
    }

    /// Read a stored value without materializing anything.
    #[must_use]
    pub fn peek(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Check whether a value is stored, either assigned or defaulted.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Assign a value through the attribute's writer.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let attribute = self.attribute(name)?;
        let value = attribute.write(value.into())?;
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Every attribute value in declaration order, lazy ones included.
    pub fn attribute_values(&mut self) -> Result<Vec<(String, Value)>> {
        let names: Vec<String> = self.schema.attribute_names().map(str::to_string).collect();
        names
            .into_iter()
            .map(|name| {
                let value = self.get(&name)?.clone();
                Ok((name, value))
            })
            .collect()
    }

    fn attribute(&self, name: &str) -> Result<Arc<Attribute>> {
        self.schema
            .get(name)
            .cloned()
            .ok_or_else(|| AttrError::UnknownAttribute {
                host: self.schema.name().to_string(),
                attribute: name.to_string(),
            })
    }

    fn materialize(&mut self, name: &str) -> Result<()> {
        let attribute = self.attribute(name)?;
        if !self.values.contains_key(name) {
            trace!(host = self.schema.name(), attribute = name, "materializing lazy default");
            let value = attribute.resolve_default(self)?;
            self.values.insert(name.to_string(), value);
        }
        Ok(())
    }
}
