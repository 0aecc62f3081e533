//! Host schemas.
//!
//! A `Schema` is the set of attributes declared on one host. Entity hosts
//! can be instantiated; module hosts only carry declarations that other
//! hosts pull in with `include`.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attribute::Attribute;
use crate::core::config::{self, Configuration};
use crate::error::{AttrError, DeclarationError, Result};
use crate::types::{Options, TypeArg, TypeRegistry};

/// What kind of host a schema describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostKind {
    /// Instantiable; holds attribute values.
    Entity,
    /// Declaration-only; shared by including hosts.
    Module,
}

/// A declaration as written, replayed when a module is included.
#[derive(Clone, Debug)]
struct Declaration {
    name: String,
    type_arg: TypeArg,
    options: Options,
}

/// Attributes declared on a host, in declaration order.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use attrkit::core::{TypeName, Value};
/// use attrkit::host::{Instance, Schema};
/// use attrkit::types::{Options, TypeArg};
///
/// let mut schema = Schema::entity("Page");
/// schema
///     .attribute("title", TypeName::STRING, Options::new())?
///     .attribute("tags", TypeArg::pair(TypeName::SYMBOL, TypeName::STRING), Options::new())?;
/// let schema = Arc::new(schema);
///
/// let mut page = Instance::new(&schema)?;
/// assert_eq!(page.get("tags")?, &Value::empty_map());
/// # Ok::<(), attrkit::AttrError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Schema {
    name: String,
    kind: HostKind,
    registry: Arc<TypeRegistry>,
    config: Option<Configuration>,
    attributes: IndexMap<String, Arc<Attribute>>,
    declarations: Vec<Declaration>,
}

impl Schema {
    /// Create an empty schema using the standard type registry.
    pub fn new(name: impl Into<String>, kind: HostKind) -> Self {
        Self {
            name: name.into(),
            kind,
            registry: TypeRegistry::standard(),
            config: None,
            attributes: IndexMap::new(),
            declarations: Vec::new(),
        }
    }

    pub fn entity(name: impl Into<String>) -> Self {
        Self::new(name, HostKind::Entity)
    }

    pub fn module(name: impl Into<String>) -> Self {
        Self::new(name, HostKind::Module)
    }

    /// Resolve types against `registry` instead of the standard one.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<TypeRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Use `config` for declarations instead of the process-wide settings.
    #[must_use]
    pub fn with_config(mut self, config: Configuration) -> Self {
        self.config = Some(config);
        self
    }

    /// Declare an attribute.
    ///
    /// Fails if the name is already declared on this host, if a type cannot
    /// be resolved, or if the type rejects the options. A failed declaration
    /// leaves the schema unchanged.
    pub fn attribute(
        &mut self,
        name: impl Into<String>,
        type_arg: impl Into<TypeArg>,
        options: Options,
    ) -> Result<&mut Self> {
        let declaration = Declaration {
            name: name.into(),
            type_arg: type_arg.into(),
            options,
        };
        self.ensure_undeclared(&declaration.name)?;
        let attribute = self.build(&declaration, &self.effective_config())?;
        self.commit(declaration, attribute);
        Ok(self)
    }

    /// Declare every attribute of `module` on this host.
    ///
    /// Declarations are replayed against this host's registry and
    /// configuration. Either all of them are declared or, on error, none.
    pub fn include(&mut self, module: &Schema) -> Result<&mut Self> {
        if module.kind != HostKind::Module {
            return Err(DeclarationError::NotAModule(module.name.clone()).into());
        }

        let config = self.effective_config();
        let mut built = Vec::with_capacity(module.declarations.len());
        for (index, declaration) in module.declarations.iter().enumerate() {
            self.ensure_undeclared(&declaration.name)?;
            if module.declarations[..index]
                .iter()
                .any(|earlier| earlier.name == declaration.name)
            {
                return Err(self.duplicate(&declaration.name));
            }
            let attribute = self.build(declaration, &config)?;
            built.push((declaration.clone(), attribute));
        }

        for (declaration, attribute) in built {
            self.commit(declaration, attribute);
        }
        Ok(self)
    }

    fn ensure_undeclared(&self, name: &str) -> Result<()> {
        if self.attributes.contains_key(name) {
            return Err(self.duplicate(name));
        }
        Ok(())
    }

    fn duplicate(&self, name: &str) -> AttrError {
        DeclarationError::DuplicateAttribute {
            host: self.name.clone(),
            attribute: name.to_string(),
        }
        .into()
    }

    fn build(&self, declaration: &Declaration, config: &Configuration) -> Result<Attribute> {
        Attribute::build(
            declaration.name.clone(),
            declaration.type_arg.clone(),
            &declaration.options,
            &self.registry,
            config,
        )
    }

    fn commit(&mut self, declaration: Declaration, attribute: Attribute) {
        debug!(
            host = %self.name,
            attribute = %declaration.name,
            type_name = %attribute.attribute_type().name(),
            writer = ?attribute.writer_kind(),
            default = attribute.default_value().strategy_name(),
            lazy = attribute.is_lazy(),
            "declared attribute"
        );
        self.attributes
            .insert(declaration.name.clone(), Arc::new(attribute));
        self.declarations.push(declaration);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> HostKind {
        self.kind
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// The configuration new declarations are built with.
    #[must_use]
    pub fn effective_config(&self) -> Configuration {
        self.config.clone().unwrap_or_else(config::configuration)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<Attribute>> {
        self.attributes.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Iterate over attributes in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = &Arc<Attribute>> {
        self.attributes.values()
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::WriterKind;
    use crate::core::TypeName;

    fn schema(name: &str, kind: HostKind) -> Schema {
        Schema::new(name, kind).with_config(Configuration::default())
    }

    #[test]
    fn test_declaration_order_kept() {
        let mut page = schema("Page", HostKind::Entity);
        page.attribute("title", TypeName::STRING, Options::new())
            .unwrap()
            .attribute("views", TypeName::INTEGER, Options::new())
            .unwrap()
            .attribute("meta", TypeName::HASH, Options::new())
            .unwrap();
        let names: Vec<_> = page.attribute_names().collect();
        assert_eq!(names, vec!["title", "views", "meta"]);
    }

    #[test]
    fn test_duplicate_attribute_fails() {
        let mut page = schema("Page", HostKind::Entity);
        page.attribute("title", TypeName::STRING, Options::new()).unwrap();
        let err = page
            .attribute("title", TypeName::INTEGER, Options::new())
            .unwrap_err();
        assert_eq!(
            err,
            AttrError::Declaration(DeclarationError::DuplicateAttribute {
                host: "Page".into(),
                attribute: "title".into(),
            })
        );
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_failed_declaration_leaves_schema_unchanged() {
        let mut page = schema("Page", HostKind::Entity);
        let arg = TypeArg::Pairs(vec![
            (TypeName::SYMBOL, TypeName::STRING),
            (TypeName::STRING, TypeName::STRING),
        ]);
        assert!(page.attribute("meta", arg, Options::new()).is_err());
        assert!(page.is_empty());
    }

    #[test]
    fn test_include_replays_module_declarations() {
        let mut timestamps = schema("Timestamps", HostKind::Module);
        timestamps
            .attribute("tags", TypeArg::pair(TypeName::SYMBOL, TypeName::INTEGER), Options::new())
            .unwrap();

        let mut page = schema("Page", HostKind::Entity).with_config(Configuration::default().with_coerce(false));
        page.include(&timestamps).unwrap();

        let tags = page.get("tags").unwrap();
        assert_eq!(tags.writer_kind(), WriterKind::Plain);
        assert_eq!(timestamps.get("tags").unwrap().writer_kind(), WriterKind::TypedMapping);
    }

    #[test]
    fn test_failed_include_leaves_schema_unchanged() {
        let mut shared = schema("Shared", HostKind::Module);
        shared
            .attribute("a", TypeName::STRING, Options::new())
            .unwrap()
            .attribute("b", TypeName::STRING, Options::new())
            .unwrap();

        let mut page = schema("Page", HostKind::Entity);
        page.attribute("b", TypeName::INTEGER, Options::new()).unwrap();
        assert!(page.include(&shared).is_err());

        assert_eq!(page.len(), 1);
        assert_eq!(page.attribute_names().collect::<Vec<_>>(), vec!["b"]);

        // the include can be retried once the conflict is gone
        let mut fresh = schema("Page", HostKind::Entity);
        fresh.include(&shared).unwrap();
        assert_eq!(fresh.attribute_names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_include_requires_module() {
        let other = schema("Other", HostKind::Entity);
        let mut page = schema("Page", HostKind::Entity);
        let err = page.include(&other).unwrap_err();
        assert_eq!(
            err,
            AttrError::Declaration(DeclarationError::NotAModule("Other".into()))
        );
    }

    #[test]
    fn test_custom_registry() {
        let registry = Arc::new(TypeRegistry::new());
        let mut page = schema("Page", HostKind::Entity).with_registry(registry);
        let err = page
            .attribute("title", TypeName::STRING, Options::new())
            .unwrap_err();
        assert_eq!(err, AttrError::UnknownType(TypeName::STRING));
    }
}
