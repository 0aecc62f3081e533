//! Host schema and instance integration tests.
//!
//! These tests verify declaration, module inclusion, lazy defaults and
//! mass assignment across whole host schemas.

use std::sync::Arc;

use attrkit::core::{Configuration, TypeName, Value};
use attrkit::error::{AttrError, DeclarationError};
use attrkit::host::{HostKind, Instance, Schema};
use attrkit::types::{Options, TypeArg};
use attrkit::WriterKind;

fn timestamps() -> Schema {
    let mut module = Schema::module("Timestamps").with_config(Configuration::default());
    module
        .attribute("created_at", TypeName::INTEGER, Options::new())
        .unwrap()
        .attribute("labels", TypeArg::pair(TypeName::SYMBOL, TypeName::STRING), Options::new())
        .unwrap();
    module
}

// =============================================================================
// Declaration Tests
// =============================================================================

/// Test that entity and module constructors set the host kind.
#[test]
fn test_host_kinds() {
    assert_eq!(Schema::entity("Page").kind(), HostKind::Entity);
    assert_eq!(Schema::module("Timestamps").kind(), HostKind::Module);
}

/// Test that an entity includes module attributes after its own.
#[test]
fn test_entity_includes_module_attributes() {
    let mut page = Schema::entity("Page").with_config(Configuration::default());
    page.attribute("title", TypeName::STRING, Options::new()).unwrap();
    page.include(&timestamps()).unwrap();
    let page = Arc::new(page);

    let names: Vec<_> = page.attribute_names().collect();
    assert_eq!(names, vec!["title", "created_at", "labels"]);
    assert_eq!(page.get("labels").unwrap().writer_kind(), WriterKind::TypedMapping);

    let mut instance = Instance::new(&page).unwrap();
    instance.set("created_at", "1700000000").unwrap();
    assert_eq!(instance.get("created_at").unwrap(), &Value::Int(1_700_000_000));
}

/// Test that a module can include another module.
#[test]
fn test_module_includes_module() {
    let mut audited = Schema::module("Audited").with_config(Configuration::default());
    audited.include(&timestamps()).unwrap();
    audited.attribute("editor", TypeName::STRING, Options::new()).unwrap();

    let mut page = Schema::entity("Page").with_config(Configuration::default());
    page.include(&audited).unwrap();
    assert_eq!(page.len(), 3);
}

/// Test that a conflicting include fails without declaring anything.
#[test]
fn test_include_conflicting_attribute_fails() {
    let mut page = Schema::entity("Page").with_config(Configuration::default());
    page.attribute("labels", TypeName::ARRAY, Options::new()).unwrap();
    let err = page.include(&timestamps()).unwrap_err();
    assert_eq!(
        err,
        AttrError::Declaration(DeclarationError::DuplicateAttribute {
            host: "Page".into(),
            attribute: "labels".into(),
        })
    );

    // created_at comes before the conflict but is not declared either
    assert_eq!(page.len(), 1);
    assert!(!page.contains("created_at"));
    assert_eq!(page.attribute_names().collect::<Vec<_>>(), vec!["labels"]);
}

// =============================================================================
// Instance Tests
// =============================================================================

/// Test that a module cannot be instantiated.
#[test]
fn test_module_cannot_be_instantiated() {
    let module = Arc::new(timestamps());
    assert_eq!(
        Instance::new(&module).unwrap_err(),
        AttrError::NotInstantiable("Timestamps".into())
    );
}

/// Test that a lazy default is resolved on first read.
#[test]
fn test_lazy_default_resolved_on_first_read() {
    let mut page = Schema::entity("Page").with_config(Configuration::default());
    page.attribute("title", TypeName::STRING, Options::new())
        .unwrap()
        .attribute(
            "summary",
            TypeName::STRING,
            Options::new().with_lazy(true).with_default_fn(|owner, _| {
                owner.peek("title").cloned().unwrap_or_default()
            }),
        )
        .unwrap();
    let page = Arc::new(page);

    let mut instance = Instance::new(&page).unwrap();
    assert!(!instance.is_set("summary"));

    // the default sees values assigned after construction
    instance.set("title", "Lazy").unwrap();
    assert_eq!(instance.get("summary").unwrap(), &Value::from("Lazy"));

    instance.set("title", "Changed").unwrap();
    assert_eq!(instance.get("summary").unwrap(), &Value::from("Lazy"));
}

/// Test that mass assignment rejects unknown names.
#[test]
fn test_with_values_rejects_unknown_names() {
    let mut page = Schema::entity("Page").with_config(Configuration::default());
    page.attribute("title", TypeName::STRING, Options::new()).unwrap();
    let page = Arc::new(page);

    let err = Instance::with_values(&page, [("title", "A"), ("author", "B")]).unwrap_err();
    assert_eq!(
        err,
        AttrError::UnknownAttribute {
            host: "Page".into(),
            attribute: "author".into(),
        }
    );
}

/// Test that mass assignment coerces through writers.
#[test]
fn test_with_values_coerces_through_writers() {
    let mut page = Schema::entity("Page").with_config(Configuration::default());
    page.attribute("views", TypeName::INTEGER, Options::new())
        .unwrap()
        .attribute("published", TypeName::BOOLEAN, Options::new())
        .unwrap()
        .attribute("slug", TypeName::SYMBOL, Options::new())
        .unwrap();
    let page = Arc::new(page);

    let mut instance = Instance::with_values(
        &page,
        [("views", "10"), ("published", "yes"), ("slug", "intro")],
    )
    .unwrap();
    assert_eq!(
        instance.attribute_values().unwrap(),
        vec![
            ("views".to_string(), Value::Int(10)),
            ("published".to_string(), Value::Bool(true)),
            ("slug".to_string(), Value::symbol("intro")),
        ]
    );
}

/// Test that the per-attribute coerce option beats the host configuration.
#[test]
fn test_per_attribute_coerce_option_wins() {
    let mut page = Schema::entity("Page").with_config(Configuration::default().with_coerce(false));
    page.attribute("raw", TypeName::INTEGER, Options::new())
        .unwrap()
        .attribute("cooked", TypeName::INTEGER, Options::new().with_coerce(true))
        .unwrap();
    let page = Arc::new(page);

    let mut instance = Instance::new(&page).unwrap();
    instance.set("raw", "1").unwrap();
    instance.set("cooked", "1").unwrap();
    assert_eq!(instance.get("raw").unwrap(), &Value::from("1"));
    assert_eq!(instance.get("cooked").unwrap(), &Value::Int(1));
}

/// Test that instances share one schema.
#[test]
fn test_instances_share_schema() {
    let mut page = Schema::entity("Page").with_config(Configuration::default());
    page.attribute("title", TypeName::STRING, Options::new()).unwrap();
    let page = Arc::new(page);

    let a = Instance::new(&page).unwrap();
    let b = Instance::new(&page).unwrap();
    assert!(Arc::ptr_eq(a.schema(), b.schema()));
}
