use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use nanomark_engine::{ContentConverter, ConvertOptions, HtmlConverter, MarkupParser};
use pulldown_cmark::{Parser, html};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.sample_size(20);

    let content = common::generate_markup_content(100);
    group.bench_function("markup_parser", |b| {
        b.iter(|| {
            let html = MarkupParser::new().parse(black_box(&content));
            black_box(html);
        });
    });

    // Baseline: a CommonMark renderer on comparable input
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let mut out = String::new();
            html::push_html(&mut out, Parser::new(black_box(&content)));
            black_box(out);
        });
    });

    group.finish();
}

fn bench_abbreviations(c: &mut Criterion) {
    let mut group = c.benchmark_group("abbreviations");
    group.sample_size(20);

    let content = common::generate_abbreviated_content(30, 200);
    group.bench_function("declared_terms", |b| {
        b.iter(|| {
            let html = MarkupParser::new().parse(black_box(&content));
            black_box(html);
        });
    });

    group.finish();
}

fn bench_converter(c: &mut Criterion) {
    let mut group = c.benchmark_group("converter");
    group.sample_size(10);

    let content = common::generate_large_document();
    let options = ConvertOptions::default();
    for xhtml in [false, true] {
        let converter = HtmlConverter::new().with_xhtml(xhtml);
        let name = if xhtml { "xhtml" } else { "html" };
        group.bench_function(name, |b| {
            b.iter(|| {
                let html = converter.convert(black_box(&content), &options).unwrap();
                black_box(html);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_abbreviations, bench_converter);
criterion_main!(benches);
