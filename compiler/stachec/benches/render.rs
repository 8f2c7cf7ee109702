//! Render benchmarks for stache.
//!
//! Parses once, then measures rendering against data of growing size.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use stachec::{IoSink, PartialMap, Renderer, Template, Value};
use std::hint::black_box;

const ROW: &str = "<tr><td>{{id}}</td><td>{{name}}</td><td>{{{html}}}</td>{{#admin}}<td>*</td>{{/admin}}</tr>\n";

fn table_template() -> Template {
    Template::new("<table>\n{{#rows}}{{> row}}{{/rows}}{{^rows}}empty{{/rows}}</table>\n")
}

fn rows(n: usize) -> Value {
    let rows: Value = (0..n)
        .map(|i| {
            Value::object()
                .with("id", i.to_string())
                .with("name", format!("user <{i}> & co"))
                .with("html", "<em>raw</em>")
                .with("admin", i % 3 == 0)
        })
        .collect();
    Value::object().with("rows", rows)
}

fn partials() -> PartialMap {
    let mut partials = PartialMap::new();
    if let Ok(tree) = Template::new(ROW).into_tree() {
        partials.insert("row", tree);
    }
    partials
}

fn bench_render_variables(c: &mut Criterion) {
    let template = Template::new("Hello {{first}} {{last}}, you have {{count}} new {{what}}.");
    let data = Value::object()
        .with("first", "Ann")
        .with("last", "O'Neil")
        .with("count", "3")
        .with("what", "<messages>");

    c.bench_function("render/variables", |b| {
        b.iter(|| black_box(template.render(black_box(&data))))
    });
}

fn bench_render_table(c: &mut Criterion) {
    let template = table_template();
    let partials = partials();
    let renderer = Renderer::new().with_partials(&partials);
    let mut group = c.benchmark_group("render/table");

    for n in [10, 100, 1_000] {
        let data = rows(n);
        group.bench_with_input(BenchmarkId::new("string", n), &data, |b, data| {
            b.iter(|| black_box(template.render_with(&renderer, data)))
        });
        group.bench_with_input(BenchmarkId::new("io_sink", n), &data, |b, data| {
            b.iter(|| {
                let sink = template.render_into_with(&renderer, data, IoSink::new(Vec::new()));
                black_box(sink.finish())
            })
        });
    }

    group.finish();
}

fn bench_render_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/nested");

    for depth in [10, 100, 1_000] {
        let source = format!("{}x{}", "{{#t}}".repeat(depth), "{{/t}}".repeat(depth));
        let template = Template::new(&source);
        let data = Value::object().with("t", true);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &data, |b, data| {
            b.iter(|| black_box(template.render(data)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_variables,
    bench_render_table,
    bench_render_nested
);
criterion_main!(benches);
