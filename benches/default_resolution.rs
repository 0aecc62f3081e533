use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use attrkit::core::{Configuration, Object, TypeName, Value};
use attrkit::host::{Instance, Schema};
use attrkit::types::{Options, TypeArg};

fn schema(default: Value) -> Arc<Schema> {
    let mut schema = Schema::entity("Bench").with_config(Configuration::default());
    schema
        .attribute("slot", TypeName::OBJECT, Options::new().with_default(default))
        .unwrap();
    Arc::new(schema)
}

fn nested_map(width: i64) -> Value {
    Value::map((0..width).map(|i| {
        let inner = Value::map((0..width).map(|j| (Value::Int(j), Value::from(format!("v{}", j)))));
        (Value::Int(i), inner)
    }))
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let scalar = schema(Value::Int(42));
    c.bench_function("instance scalar default", |b| {
        b.iter(|| Instance::new(black_box(&scalar)).unwrap())
    });

    let empty = schema(Value::empty_map());
    c.bench_function("instance empty map default", |b| {
        b.iter(|| Instance::new(black_box(&empty)).unwrap())
    });

    let small = schema(nested_map(4));
    c.bench_function("instance nested map 4x4", |b| {
        b.iter(|| Instance::new(black_box(&small)).unwrap())
    });

    let large = schema(nested_map(32));
    c.bench_function("instance nested map 32x32", |b| {
        b.iter(|| Instance::new(black_box(&large)).unwrap())
    });

    let object = schema(Value::from(
        Object::new("Point").with_field("x", 1).with_field("y", 2),
    ));
    c.bench_function("instance object default", |b| {
        b.iter(|| Instance::new(black_box(&object)).unwrap())
    });

    let mut typed = Schema::entity("Typed").with_config(Configuration::default());
    typed
        .attribute("stock", TypeArg::pair(TypeName::SYMBOL, TypeName::INTEGER), Options::new())
        .unwrap();
    let typed = Arc::new(typed);
    let input = Value::map((0..64).map(|i| (format!("k{}", i), i.to_string())));
    c.bench_function("typed mapping write 64", |b| {
        let mut instance = Instance::new(&typed).unwrap();
        b.iter(|| instance.set("stock", black_box(input.clone())).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
