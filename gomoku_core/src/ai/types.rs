use crate::engine::board::Board;
use crate::engine::types::{Square, Symbol};

/// 手を選択するAI。
pub trait Ai {
    /// `symbol` の手番として次の手を選択する（空きマスが無ければ `None`）。
    ///
    /// 呼び出し側の盤面は変更しない。
    fn select_move(&mut self, board: &Board, symbol: Symbol) -> Option<Square>;
}
