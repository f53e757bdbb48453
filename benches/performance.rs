//! Performance benchmarks for ASCIIboard.
//!
//! Run with: cargo bench
//!
//! The keyboard extension searches on every keystroke, so search and
//! favorites resolution must stay well under a frame.

use std::sync::Arc;

use asciiboard::library;
use asciiboard::storage::MemoryDomain;
use asciiboard::{Board, DomainScope, OpenedDomain};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn memory_board() -> Board {
    Board::with_domain(OpenedDomain {
        domain: Arc::new(MemoryDomain::new("bench")),
        scope: DomainScope::Memory,
    })
}

/// Benchmark library search with typical keyboard queries.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let queries = [
        ("empty", ""),
        ("single_char", "o"),
        ("word", "happy"),
        ("art_symbol", "♥"),
        ("no_match", "zzzz"),
    ];

    for (name, query) in queries {
        group.bench_with_input(BenchmarkId::from_parameter(name), &query, |b, query| {
            b.iter(|| black_box(library::search(black_box(query))))
        });
    }

    group.finish();
}

/// Benchmark combined search with custom items present.
fn bench_search_all(c: &mut Criterion) {
    let mut board = memory_board();
    for i in 0..200 {
        board.add(format!("Custom {}", i), format!("<{}>", i), "art");
    }

    c.bench_function("search_all_with_custom", |b| {
        b.iter(|| black_box(board.search_all(black_box("cus"))))
    });
}

/// Benchmark resolving favorites against the full catalog.
fn bench_favorite_items(c: &mut Criterion) {
    let mut board = memory_board();
    for item in library::iter_items().step_by(2) {
        board.toggle(&item.id);
    }
    for i in 0..50 {
        let item = board.add(format!("Custom {}", i), "x", "text");
        board.toggle(&item.id);
    }

    c.bench_function("favorite_items", |b| {
        b.iter(|| black_box(board.favorite_items()))
    });
}

criterion_group!(benches, bench_search, bench_search_all, bench_favorite_items);
criterion_main!(benches);
