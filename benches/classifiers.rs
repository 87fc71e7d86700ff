extern crate symscope;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use symscope::prelude::*;

const NAMES: &[&str] = &[
    "a",
    "Il1lI",
    "C0001b",
    "lambda$onCreate$0",
    "CheckoutActivity",
    "access$100",
    "xK9qZt2w",
    "getUserName",
    "O0O0O0",
    "m12345",
];

fn synthetic_app(classes: usize) -> SymbolSet {
    let letters = "abcdefghijklmnopqrstuvwxyz";
    SymbolSet::builder()
        .classes((0..classes).map(|i| {
            let short = letters.chars().nth(i % 26).map(String::from).unwrap_or_default();
            ClassSymbol::new(format!("com.bench.p{}.{short}", i / 26))
                .extends("android.app.Activity")
                .with_field(FieldSymbol::new("a", Some(TypeRef::Int)))
                .with_field(FieldSymbol::new("b", Some(TypeRef::object("java.lang.String"))))
                .with_method(MethodSymbol::new("a").returns(Some(TypeRef::Boolean)))
                .with_method(MethodSymbol::new("onResume").overriding())
        }))
        .build()
}

/// Benchmark the per-name classifiers on a mix of obfuscated and readable names
fn bench_classify(c: &mut Criterion) {
    let classifier = PatternClassifier::default();

    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Elements(NAMES.len() as u64));
    group.bench_function("pattern_classify", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(classifier.classify(black_box(name)));
            }
        });
    });
    group.bench_function("shannon_entropy", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(symscope::deobfuscation::shannon_entropy(black_box(name)));
            }
        });
    });
    group.finish();
}

/// Benchmark analysis and rename planning over a generated symbol set
fn bench_rename_pass(c: &mut Criterion) {
    let set = synthetic_app(520);
    let factory = ModeFactory::default();

    let mut group = c.benchmark_group("rename_pass");
    group.throughput(Throughput::Elements(set.class_count() as u64));
    group.bench_function("analyze", |b| {
        b.iter(|| {
            let analyzer = DeobfuscationAnalyzer::new(black_box(&set));
            black_box(analyzer.analyze().overall_rate)
        });
    });
    for mode in [DeobfuscationMode::Default, DeobfuscationMode::Enhanced] {
        group.bench_function(mode.to_string(), |b| {
            b.iter(|| black_box(RenamePass::new(black_box(&set), mode, &factory).run()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_rename_pass);
criterion_main!(benches);
