use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fluent_url::UrlBuilder;

criterion_group!(benches, bench_chain, bench_assemble, bench_to_uri);
criterion_main!(benches);

fn typical_builder() -> UrlBuilder {
    UrlBuilder::initialize(["https://example.com", "search"])
        .unwrap()
        .add_path_part("results")
        .upsert_query_param("q", "ferris")
        .upsert_query_param("page", "2")
        .set_fragment("top")
}

fn bench_chain(c: &mut Criterion) {
    c.bench_function("chain", |b| b.iter(|| typical_builder()));
}

fn bench_assemble(c: &mut Criterion) {
    let builder = typical_builder();
    c.bench_function("assemble", |b| b.iter(|| black_box(&builder).to_string()));
}

fn bench_to_uri(c: &mut Criterion) {
    let builder = typical_builder();
    c.bench_function("to_uri", |b| b.iter(|| black_box(&builder).to_uri()));
}
