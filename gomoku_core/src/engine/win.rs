use crate::engine::board::Board;
use crate::engine::types::{Square, Symbol};

/// 勝利に必要な連続数。
pub const WIN_LENGTH: u8 = 5;

/// 判定する4軸（縦・横・2つの斜め）の方向ベクトル `(d_row, d_col)`。
pub const AXES: [(i8, i8); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// `square` を通る `axis` 方向の連続数を返す。
///
/// 起点のマス自体を1として数え、その両側に続く `symbol` の石を加える。
/// 起点に `symbol` が置かれているかは確認しない。
#[must_use]
pub fn run_length(board: &Board, square: Square, axis: (i8, i8), symbol: Symbol) -> u8 {
    let (d_row, d_col) = axis;
    let forward = count_direction(board, square, d_row, d_col, symbol);
    let backward = count_direction(
        board,
        square,
        d_row.wrapping_neg(),
        d_col.wrapping_neg(),
        symbol,
    );
    1_u8.saturating_add(forward).saturating_add(backward)
}

/// 起点から1方向へ続く `symbol` の石数を返す（起点は含まない）。
fn count_direction(board: &Board, origin: Square, d_row: i8, d_col: i8, symbol: Symbol) -> u8 {
    let mut count = u8::MIN;
    let mut cursor = origin.offset(d_row, d_col);
    while let Some(square) = cursor {
        if board.symbol_at(square) != Some(symbol) {
            break;
        }
        count = count.saturating_add(1);
        cursor = square.offset(d_row, d_col);
    }
    count
}

/// `square` を通るいずれかの軸で5つ以上並んでいるかを返す。
///
/// 6つ以上の長連も勝ちとして扱う。
#[inline]
#[must_use]
pub fn check_win(board: &Board, square: Square, symbol: Symbol) -> bool {
    AXES.iter()
        .any(|axis| run_length(board, square, *axis, symbol) >= WIN_LENGTH)
}

/// 盤面全体で `symbol` が5つ以上並んでいるかを返す。
///
/// `symbol` の石があるマスだけを起点に調べる。
#[inline]
#[must_use]
pub fn check_full_board_win(board: &Board, symbol: Symbol) -> bool {
    Square::all()
        .filter(|square| board.symbol_at(*square) == Some(symbol))
        .any(|square| check_win(board, square, symbol))
}
