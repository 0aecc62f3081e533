//! Process-wide configuration tests.
//!
//! The global configuration is shared by every test in a binary, so all
//! checks that touch it run in order inside one test.

use std::sync::Arc;

use attrkit::coercion::{Coercer, CoercionMethod};
use attrkit::core::config;
use attrkit::core::{Configuration, TypeName, Value};
use attrkit::error::CoercionError;
use attrkit::host::{Instance, Schema};
use attrkit::types::Options;
use attrkit::WriterKind;

/// Coerces every string to its length.
#[derive(Debug)]
struct Lengths;

impl Coercer for Lengths {
    fn coerce(&self, _method: CoercionMethod, value: Value) -> Result<Value, CoercionError> {
        match value {
            Value::Str(s) => Ok(Value::Int(s.len() as i64)),
            other => Ok(other),
        }
    }
}

fn declare(name: &str) -> Arc<Schema> {
    let mut schema = Schema::entity(name);
    schema
        .attribute("count", TypeName::INTEGER, Options::new())
        .unwrap()
        .attribute("flag", TypeName::BOOLEAN, Options::new())
        .unwrap();
    Arc::new(schema)
}

// =============================================================================
// Global Configuration Tests
// =============================================================================

/// Test that the process-wide toggle, rules and coercer apply to later declarations only.
#[test]
fn test_global_configuration() {
    // defaults
    assert!(config::coerce());
    let defaults = config::configuration();
    assert!(!defaults.coercer.strict);

    let coercing = declare("Coercing");
    assert_eq!(coercing.get("count").unwrap().writer_kind(), WriterKind::Default);

    // toggled off: only declarations made afterwards are affected
    config::set_coerce(false);
    assert!(!config::coerce());
    let plain = declare("Plain");
    assert_eq!(plain.get("count").unwrap().writer_kind(), WriterKind::Plain);
    assert_eq!(coercing.get("count").unwrap().writer_kind(), WriterKind::Default);

    let mut instance = Instance::new(&plain).unwrap();
    instance.set("count", "3").unwrap();
    assert_eq!(instance.get("count").unwrap(), &Value::from("3"));

    // scoped configuration ignores the global toggle
    let mut scoped = Schema::entity("Scoped").with_config(Configuration::default());
    scoped.attribute("count", TypeName::INTEGER, Options::new()).unwrap();
    assert_eq!(scoped.get("count").unwrap().writer_kind(), WriterKind::Default);

    // coercion rules
    config::set_coerce(true);
    config::configure_coercer(|rules| rules.true_values.push("affirmative".to_string()));
    let rules = declare("Rules");
    let mut instance = Instance::new(&rules).unwrap();
    instance.set("flag", "affirmative").unwrap();
    assert_eq!(instance.get("flag").unwrap(), &Value::Bool(true));

    // strict mode
    config::configure(|config| config.coercer.strict = true);
    let strict = declare("Strict");
    let mut instance = Instance::new(&strict).unwrap();
    assert!(instance.set("count", "many").is_err());

    // custom coercer
    config::configure(|config| *config = Configuration::default().with_coercer(Arc::new(Lengths)));
    let custom = declare("Custom");
    let mut instance = Instance::new(&custom).unwrap();
    instance.set("count", "four").unwrap();
    assert_eq!(instance.get("count").unwrap(), &Value::Int(4));

    // schemas declared earlier keep the coercer they were built with
    let mut instance = Instance::new(&coercing).unwrap();
    instance.set("count", "12").unwrap();
    assert_eq!(instance.get("count").unwrap(), &Value::Int(12));
}
