use crate::engine::board::Board;
use crate::engine::types::{Square, Symbol};
use crate::engine::win::{AXES, run_length};

/// 盤面の評価値（`ai` 視点、大きいほど `ai` に有利）を返す。
///
/// 石のある各マスについて4軸の連続数を求め、`連続数 - 1` を [`line_score`] で点数化する。
/// 同じ列の石はそれぞれが自分の連続数を加算するため、長い列ほど重く数えられる。
#[must_use]
pub fn evaluate(board: &Board, ai: Symbol, opponent: Symbol) -> i32 {
    let mut score: i32 = 0;

    for square in Square::all() {
        let Some(owner) = board.symbol_at(square) else {
            continue;
        };

        for axis in AXES {
            let run = run_length(board, square, axis, owner);
            let line = line_score(run.saturating_sub(1));
            if owner == ai {
                score = score.wrapping_add(line);
            } else if owner == opponent {
                score = score.wrapping_sub(line);
            } else {
                // no-op
            }
        }
    }

    score
}

/// `連続数 - 1` に対する点数。
const fn line_score(extra: u8) -> i32 {
    match extra {
        2 => 10,
        3 => 100,
        4 => 1000,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate, line_score};
    use crate::engine::board::Board;
    use crate::engine::types::Symbol;

    fn place_all(board: &mut Board, stones: &[(i32, i32)], symbol: Symbol) {
        for &(row, col) in stones {
            assert!(board.place(row, col, symbol));
        }
    }

    #[test]
    fn line_score_table() {
        assert_eq!(line_score(0), 0);
        assert_eq!(line_score(1), 0);
        assert_eq!(line_score(2), 10);
        assert_eq!(line_score(3), 100);
        assert_eq!(line_score(4), 1000);
        assert_eq!(line_score(5), 0);
        assert_eq!(line_score(u8::MAX), 0);
    }

    #[test]
    fn empty_and_sparse_boards_score_zero() {
        let mut board = Board::new();
        assert_eq!(evaluate(&board, Symbol::Black, Symbol::White), 0);

        place_all(&mut board, &[(0, 0), (4, 4)], Symbol::Black);
        place_all(&mut board, &[(4, 5)], Symbol::White);
        assert_eq!(evaluate(&board, Symbol::Black, Symbol::White), 0);
    }

    #[test]
    fn each_stone_of_a_line_adds_its_own_score() {
        let mut board = Board::new();
        place_all(&mut board, &[(2, 2), (2, 3), (2, 4)], Symbol::Black);
        assert_eq!(evaluate(&board, Symbol::Black, Symbol::White), 30);

        assert!(board.place(2, 5, Symbol::Black));
        assert_eq!(evaluate(&board, Symbol::Black, Symbol::White), 400);

        assert!(board.place(2, 6, Symbol::Black));
        assert_eq!(evaluate(&board, Symbol::Black, Symbol::White), 5000);

        assert!(board.place(2, 7, Symbol::Black));
        assert_eq!(evaluate(&board, Symbol::Black, Symbol::White), 0);
    }

    #[test]
    fn opponent_lines_are_subtracted() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (1, 1), (2, 2)], Symbol::White);
        place_all(&mut board, &[(5, 0), (6, 0), (7, 0), (8, 0)], Symbol::Black);

        assert_eq!(evaluate(&board, Symbol::Black, Symbol::White), 400 - 30);
        assert_eq!(evaluate(&board, Symbol::White, Symbol::Black), 30 - 400);
    }

    #[test]
    fn crossing_lines_count_on_both_axes() {
        let mut board = Board::new();
        place_all(
            &mut board,
            &[(4, 3), (4, 4), (4, 5), (3, 4), (5, 4)],
            Symbol::Black,
        );
        // 横3と縦3が中央の石で交差する（中央は両方の軸で加算される）。
        assert_eq!(evaluate(&board, Symbol::Black, Symbol::White), 60);
    }
}
