// SPDX-License-Identifier: MPL-2.0
use artwork_picker::domain::{ArtworkId, PageNumber, RowsPerPage, SelectionCount};
use artwork_picker::selection::{calculate_selected_ids, SelectionModel};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn page_ids(rows: u64) -> Vec<ArtworkId> {
    (1..=rows).map(|n| ArtworkId::new(n * 7919)).collect()
}

fn selection_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    let ids = page_ids(48);
    group.bench_function("toggle_all_on_page_48", |b| {
        let mut model = SelectionModel::new();
        b.iter(|| {
            model.toggle_all_on_page(black_box(&ids));
        });
    });

    group.bench_function("page_state_48", |b| {
        let mut model = SelectionModel::new();
        for id in ids.iter().step_by(2) {
            model.toggle_selection(*id);
        }
        b.iter(|| black_box(model.page_state(black_box(&ids))));
    });

    let count = SelectionCount::new(10_000).expect("non-zero count");
    group.bench_function("apply_custom_selection_10k", |b| {
        let mut model = SelectionModel::new();
        b.iter(|| {
            model.apply_custom_selection(
                black_box(count),
                RowsPerPage::FortyEight,
                PageNumber::FIRST,
            );
        });
    });

    group.bench_function("calculate_selected_ids_10k", |b| {
        b.iter(|| {
            black_box(calculate_selected_ids(
                black_box(count),
                RowsPerPage::Twelve,
                PageNumber::FIRST,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, selection_benchmark);
criterion_main!(benches);
