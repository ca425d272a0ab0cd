//! Benchmarks for the BUILD file parser.
//!
//! Covers the common shapes of real BUILD files: rule calls with keyword
//! arguments, list-heavy attributes, comprehensions, comment-dense files and
//! scaling with file size.
//!
//! Run with: `cargo bench --package bzl-parser`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const SIMPLE_RULE: &str = r#"
cc_library(
    name = "util",
    srcs = ["util.cc"],
    hdrs = ["util.h"],
)
"#;

const LIST_HEAVY: &str = r#"
filegroup(
    name = "srcs",
    srcs = [
        "a.cc",
        "b.cc",
        "c.cc",
        "d.cc",
        "e.cc",
    ] + select({
        "//conditions:linux": ["linux.cc"],
        "//conditions:default": [],
    }),
)
"#;

const COMPREHENSIONS: &str = r#"
names = [name + "_test" for name in tests if name not in excluded]
pairs = {key: value for (key, value) in items}
"#;

const COMMENT_DENSE: &str = r#"
# Top-of-file license header.
# Second header line.

load("//tools:defs.bzl", "my_rule")  # the macro

# Explains the rule below.
my_rule(
    name = "thing",  # the canonical name
    # Keep this list sorted.
    deps = [
        ":a",
        ":b",  # needed on mac only
    ],
)
"#;

/// Benchmark parsing a small rule call
fn bench_simple_rule(crit: &mut Criterion) {
    let _ = crit.bench_function("parse_simple_rule", |bencher| {
        bencher.iter(|| bzl_parser::parse(black_box(SIMPLE_RULE)));
    });
}

/// Benchmark parsing list-heavy attributes with select()
fn bench_list_heavy(crit: &mut Criterion) {
    let _ = crit.bench_function("parse_list_heavy", |bencher| {
        bencher.iter(|| bzl_parser::parse(black_box(LIST_HEAVY)));
    });
}

/// Benchmark parsing comprehensions
fn bench_comprehensions(crit: &mut Criterion) {
    let _ = crit.bench_function("parse_comprehensions", |bencher| {
        bencher.iter(|| bzl_parser::parse(black_box(COMPREHENSIONS)));
    });
}

/// Benchmark parsing a comment-dense file (comment attachment dominates)
fn bench_comment_dense(crit: &mut Criterion) {
    let mut group = crit.benchmark_group("parse_comment_dense");
    let _ = group.throughput(Throughput::Bytes(COMMENT_DENSE.len() as u64));
    let _ = group.bench_function("comment_dense", |bencher| {
        bencher.iter(|| bzl_parser::parse(black_box(COMMENT_DENSE)));
    });
    group.finish();
}

/// Benchmark parsing with varying file sizes
fn bench_scaling(crit: &mut Criterion) {
    let mut group = crit.benchmark_group("parse_scaling");

    for size in &[10, 50, 100, 500] {
        // Generate a file with N rules
        let code = (0..*size).fold(String::new(), |acc, idx| {
            format!("{acc}\ncc_library(\n    name = \"lib_{idx}\",\n    srcs = [\"{idx}.cc\"],\n)\n")
        });

        let _ = group.throughput(Throughput::Bytes(code.len() as u64));
        let _ = group.bench_with_input(BenchmarkId::from_parameter(size), &code, |bencher, code| {
            bencher.iter(|| bzl_parser::parse(black_box(code)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_simple_rule,
    bench_list_heavy,
    bench_comprehensions,
    bench_comment_dense,
    bench_scaling,
);
criterion_main!(benches);
