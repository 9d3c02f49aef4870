//! This bench evaluates a batch of raw form inputs, mixing valid entries,
//! comma separators and rejected fields.

#![allow(missing_docs)]

use bmi_calculator::{BmiForm, evaluate};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn inputs() -> Vec<(String, String)> {
    (1..=500)
        .map(|i| {
            let weight = match i % 5 {
                0 => String::new(),
                1 => format!("{},{}", 40 + i % 80, i % 10),
                2 => "0".to_string(),
                _ => format!("{}", 40 + i % 80),
            };
            let height = format!("1.{}", 50 + i % 50);
            (weight, height)
        })
        .collect()
}

fn evaluate_batch(c: &mut Criterion) {
    let inputs = inputs();
    c.bench_function("evaluate batch", |b| {
        b.iter(|| {
            for (weight, height) in &inputs {
                let _ = black_box(evaluate(black_box(weight), black_box(height)));
            }
        });
    });
}

fn form_round_trip(c: &mut Criterion) {
    let inputs = inputs();
    c.bench_function("form edit calculate reset", |b| {
        b.iter(|| {
            let mut form = BmiForm::new();
            for (weight, height) in &inputs {
                form.set_weight(weight.as_str());
                form.set_height(height.as_str());
                let _ = black_box(form.calculate());
                form.reset();
            }
        });
    });
}

criterion_group!(benches, evaluate_batch, form_round_trip);
criterion_main!(benches);
