//! Criterion benchmarks for move generation, the transition function,
//! and perft.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use castellan::{Board, GenMode};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let startpos = Board::new();
    for depth in 1..=4u32 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let kiwipete = Board::from_fen(KIWIPETE).unwrap();
    for depth in 1..=3u32 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(&startpos).legal_moves())
    });

    let kiwipete = Board::from_fen(KIWIPETE).unwrap();
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(&kiwipete).legal_moves())
    });
    group.bench_function("kiwipete_quiescence", |b| {
        b.iter(|| black_box(&kiwipete).generate_moves(GenMode::Quiescence))
    });

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    let kiwipete = Board::from_fen(KIWIPETE).unwrap();
    let moves = kiwipete.legal_moves();
    group.bench_function("kiwipete_all_moves", |b| {
        b.iter(|| {
            for &mv in &moves {
                black_box(kiwipete.apply(mv));
            }
        })
    });
    group.bench_function("kiwipete_key_after", |b| {
        b.iter(|| {
            for &mv in &moves {
                black_box(kiwipete.key_after(mv));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_apply);
criterion_main!(benches);
