//! Performance benchmarks for seo-head.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks cover the two hot paths of a rendering pipeline: repeated
//! reconciliation against one live document, and the one-shot
//! parse-apply-serialize entry point.

use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dom_query::Document;
use seo_head::{apply_meta_tags, MetaTagSet, MetadataManager};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Page</title>
    <meta name="author" content="John Doe">
    <meta name="description" content="A sample page for benchmarking.">
</head>
<body>
    <article>
        <h1>Sample Page</h1>
        <p>Body content is irrelevant to head reconciliation but keeps the
        parse realistic.</p>
    </article>
</body>
</html>
"#;

fn sample_tags() -> MetaTagSet {
    MetaTagSet {
        title: Some("Benchmark Page".to_string()),
        description: Some("Reconciled description.".to_string()),
        keywords: Some("benchmark, seo".to_string()),
        image_url: Some("https://example.com/image.jpg".to_string()),
        url: Some("https://example.com/bench".to_string()),
        ..MetaTagSet::default()
    }
}

fn bench_repeated_upserts(c: &mut Criterion) {
    let doc = Rc::new(Document::from(SAMPLE_HTML));
    let seo = MetadataManager::for_document(&doc);
    let tags = sample_tags();

    c.bench_function("update_meta_tags_repeated", |b| {
        b.iter(|| seo.update_meta_tags(black_box(&tags)));
    });
}

fn bench_canonical_reconcile(c: &mut Criterion) {
    let doc = Rc::new(Document::from(SAMPLE_HTML));
    let seo = MetadataManager::for_document(&doc);

    c.bench_function("set_canonical_url", |b| {
        b.iter(|| seo.set_canonical_url(black_box("https://example.com/bench")));
    });
}

fn bench_one_shot(c: &mut Criterion) {
    let tags = sample_tags();

    c.bench_function("apply_meta_tags_one_shot", |b| {
        b.iter(|| apply_meta_tags(black_box(SAMPLE_HTML), black_box(&tags)));
    });
}

criterion_group!(
    benches,
    bench_repeated_upserts,
    bench_canonical_reconcile,
    bench_one_shot
);
criterion_main!(benches);
