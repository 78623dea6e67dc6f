use criterion::{black_box, criterion_group, criterion_main, Criterion};
use search_core::{SearchEngine, TopKStrategy};

fn corpus_engine() -> SearchEngine {
    let mut engine = SearchEngine::new();
    engine.configure_stop_words("and the of");
    for id in 0..10_000u32 {
        let text = format!("common term{} bucket{} and the word{} of common", id % 97, id % 13, id % 1_009);
        engine.add_document(id, &text).expect("unique ids");
    }
    engine
}

fn bench_top_k(c: &mut Criterion) {
    let engine = corpus_engine();
    let query = "common bucket3 term5 -word7";
    c.bench_function("top_k_full_sort", |b| {
        b.iter(|| engine.find_top_documents_with(black_box(query), 5, TopKStrategy::FullSort))
    });
    c.bench_function("top_k_bounded_heap", |b| {
        b.iter(|| engine.find_top_documents_with(black_box(query), 5, TopKStrategy::BoundedHeap))
    });
}

criterion_group!(benches, bench_top_k);
criterion_main!(benches);
