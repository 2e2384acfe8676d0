use crate::engine::board::Board;
use crate::engine::types::{Square, Symbol};
use crate::engine::win::check_win;

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 引き分け（盤面が埋まり勝者なし）。
    Draw,
    /// 進行中。
    InProgress,
    /// 指定記号の勝ち。
    Won(Symbol),
}

/// 着手に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    GameOver,
    /// 指定マスに石が置かれている。
    Occupied,
    /// 指定座標が盤外。
    OutOfBounds,
}

/// 1ゲームの進行を管理する構造体。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
    /// 直前の着手。
    last_move: Option<Square>,
    /// 手番。
    side_to_move: Symbol,
    /// 現在の状態。
    status: Status,
}

impl Default for Game {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        !matches!(self.status, Status::InProgress)
    }

    /// 直前の着手を返す。
    #[inline]
    #[must_use]
    pub const fn last_move(&self) -> Option<Square> {
        self.last_move
    }

    /// 空の盤面・黒番からゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
            side_to_move: Symbol::Black,
            status: Status::InProgress,
        }
    }

    /// 手番の石を `(row, col)` に置く。
    ///
    /// 着手後に置いたマスで勝利判定、続いて引き分け判定を行い、手番を交代する。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::OutOfBounds`: 指定座標が盤外の場合
    /// - `PlayError::Occupied`: 指定マスに石がある場合
    ///
    #[inline]
    pub fn play(&mut self, row: i32, col: i32) -> Result<Status, PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        let Some(square) = Square::from_row_col(row, col) else {
            return Err(PlayError::OutOfBounds);
        };

        let symbol = self.side_to_move;
        if !self.board.place(row, col, symbol) {
            return Err(PlayError::Occupied);
        }

        self.last_move = Some(square);
        self.status = if check_win(&self.board, square, symbol) {
            Status::Won(symbol)
        } else if self.board.is_full() {
            Status::Draw
        } else {
            Status::InProgress
        };
        self.side_to_move = symbol.opponent();

        Ok(self.status)
    }

    /// `Square` を指定して手番の石を置く。
    ///
    /// # Errors
    ///
    /// [`Game::play`] と同じ。
    #[inline]
    pub fn play_square(&mut self, square: Square) -> Result<Status, PlayError> {
        self.play(i32::from(square.row()), i32::from(square.col()))
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Symbol {
        self.side_to_move
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }
}
