use chart_scroll_sync::api::{ViewerEngine, ViewerEngineConfig};
use chart_scroll_sync::core::{Chapter, ChapterTable, ContainerMetrics, locate};
use chart_scroll_sync::host::HeadlessHost;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn chapter_table(len: usize, sorted: bool) -> ChapterTable {
    let chapters = (0..len)
        .map(|i| {
            let mut start = i as f64 / len as f64;
            if !sorted && i % 7 == 3 {
                start = (start - 0.01).max(0.0);
            }
            Chapter::new(start, i as f64 * 120.0, format!("chapter {i}"))
        })
        .collect();
    ChapterTable::from_chapters(chapters).expect("valid table")
}

fn bench_locate_sorted_10k(c: &mut Criterion) {
    let table = chapter_table(10_000, true);
    c.bench_function("locate_sorted_10k", |b| {
        b.iter(|| locate(black_box(0.734_521), black_box(&table)).expect("locate"))
    });
}

fn bench_locate_unsorted_10k(c: &mut Criterion) {
    let table = chapter_table(10_000, false);
    c.bench_function("locate_unsorted_10k", |b| {
        b.iter(|| locate(black_box(0.734_521), black_box(&table)).expect("locate"))
    });
}

fn bench_scroll_event_1k_chapters(c: &mut Criterion) {
    let host = HeadlessHost::new(ContainerMetrics::new(0.0, 250_000.0, 900.0));
    let mut engine = ViewerEngine::new(
        host,
        chapter_table(1_000, true),
        ViewerEngineConfig::default(),
    )
    .expect("engine init");

    let mut scroll_top = 0.0;
    c.bench_function("scroll_event_1k_chapters", |b| {
        b.iter(|| {
            scroll_top = (scroll_top + 137.0) % 249_100.0;
            engine
                .on_scroll(black_box(ContainerMetrics::new(scroll_top, 250_000.0, 900.0)))
                .expect("scroll")
        })
    });
}

criterion_group!(
    benches,
    bench_locate_sorted_10k,
    bench_locate_unsorted_10k,
    bench_scroll_event_1k_chapters
);
criterion_main!(benches);
