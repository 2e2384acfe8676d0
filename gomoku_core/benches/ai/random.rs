//! `gomoku_core::ai::random` の性能計測（1手選択）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use gomoku_core::ai::types::Ai;
use gomoku_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手数だけ進めた局面を返す（途中で終局した場合はその時点で止める）。
fn board_after_plies(plies: u16) -> engine::Board {
    let mut black_agent = ai::random::Agent::new(u64::MIN);
    let mut game = engine::Game::new();
    let mut white_agent = ai::random::Agent::new(u64::MIN.wrapping_add(1));

    for _turn in u16::MIN..plies {
        let board = *game.board();
        let side = game.side_to_move();

        let mv = match side {
            engine::Symbol::Black => black_agent.select_move(&board, side),
            engine::Symbol::White => white_agent.select_move(&board, side),
            _ => None,
        };

        let square = match mv {
            Some(value) => value,
            None => break,
        };

        let status = match game.play_square(square) {
            Ok(value) => value,
            Err(_err) => break,
        };

        if status != engine::GameStatus::InProgress {
            break;
        }
    }

    *game.board()
}

/// ベンチ用に代表局面をいくつか用意する。
fn board_samples() -> [engine::Board; 3] {
    let b0 = engine::Board::new();
    let b1 = board_after_plies(8);
    let b2 = board_after_plies(24);
    [b0, b1, b2]
}

/// `random::Agent::select_move` を計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let samples = board_samples();
    let mut group = criterion.benchmark_group("ai/random/select_move");

    for (index, board) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("board", index);
        group.bench_with_input(bench_id, board, |bench, input| {
            bench.iter_batched(
                || ai::random::Agent::new(u64::MIN),
                |mut agent| black_box(agent.select_move(input, engine::Symbol::Black)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
