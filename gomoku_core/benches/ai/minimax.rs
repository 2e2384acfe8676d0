//! `gomoku_core::ai::minimax` の性能計測（評価関数、1手選択）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use gomoku_core::ai::minimax::{self, SearchLimits};
use gomoku_core::engine;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 探索のショートカット（即勝ち・阻止）が発動しない序盤局面を返す。
fn opening_board() -> engine::Board {
    let mut board = engine::Board::new();
    let stones = [
        (4, 4, engine::Symbol::Black),
        (4, 5, engine::Symbol::White),
        (3, 4, engine::Symbol::Black),
        (5, 3, engine::Symbol::White),
    ];
    for (row, col, symbol) in stones {
        let _: bool = board.place(row, col, symbol);
    }
    board
}

/// `evaluate` を計測する。
fn bench_evaluate(criterion: &mut Criterion) {
    let board = opening_board();
    criterion.bench_function("ai/minimax/evaluate_opening", |bench| {
        bench.iter(|| {
            black_box(minimax::evaluate(
                &board,
                engine::Symbol::Black,
                engine::Symbol::White,
            ))
        });
    });
}

/// 深さ・枝刈りごとに `best_move_with_limits` を計測する。
fn bench_best_move(criterion: &mut Criterion) {
    let board = opening_board();
    let mut group = criterion.benchmark_group("ai/minimax/best_move");
    group.sample_size(10);

    for limits in [
        SearchLimits::new(1, false),
        SearchLimits::new(1, true),
        SearchLimits::new(2, false),
        SearchLimits::new(2, true),
    ] {
        let label = format!("depth{}_pruning{}", limits.depth(), limits.pruning());
        group.bench_with_input(BenchmarkId::from_parameter(label), &limits, |bench, input| {
            let mut scratch = board;
            bench.iter(|| {
                black_box(minimax::best_move_with_limits(
                    &mut scratch,
                    engine::Symbol::Black,
                    engine::Symbol::White,
                    *input,
                ))
            });
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_evaluate(&mut criterion);
    bench_best_move(&mut criterion);

    criterion.final_summary();
}
