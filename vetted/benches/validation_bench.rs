//! Benchmarks for validators and the email predicate.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use vetted::predicates::{is_email, is_number, is_string, is_valid_email};
use vetted::validation::{validate_list, validate_record, RecordValidation};

fn validation_benchmark(c: &mut Criterion) {
    let person = validate_record(
        RecordValidation::new()
            .field("name", is_string)
            .field("age", is_number)
            .field("email", is_email),
    );
    let value = json!({"name": "Ada", "age": 36, "email": "ada@example.org"});
    c.bench_function("record", |b| b.iter(|| person.is_valid(black_box(&value))));

    let numbers = validate_list(is_number);
    let list = json!((0..1_000).collect::<Vec<i32>>());
    c.bench_function("list_1000", |b| b.iter(|| numbers.is_valid(black_box(&list))));

    c.bench_function("email", |b| {
        b.iter(|| is_valid_email(black_box("john__doe..123++Üübungs@doe.com")))
    });
}

criterion_group!(benches, validation_benchmark);
criterion_main!(benches);
