use core::fmt;

use crate::engine::types::{Square, Symbol};

/// 盤面のマス数（`usize`）。
const CELL_COUNT: usize = Square::COUNT as usize;

/// 空きマスの表示文字。
const EMPTY_CHAR: char = '_';

/// 9×9 の盤面。各マスは空（`None`）か、どちらかの記号を持つ。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// 行優先で並べたマス。
    cells: [Option<Symbol>; CELL_COUNT],
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// 指定マスを空に戻す（探索の取り消し用）。
    #[inline]
    pub(crate) fn clear(&mut self, square: Square) {
        if let Some(cell) = self.cells.get_mut(usize::from(square.index())) {
            *cell = None;
        }
    }

    /// 指定記号の石数を返す。
    #[inline]
    #[must_use]
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Some(symbol))
            .count()
    }

    /// 空きマスを行優先の順で返す。
    #[inline]
    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(|square| self.symbol_at(*square).is_none())
    }

    /// 石が1つも置かれていないかを返す。
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// 空きマスが残っていないか（引き分け判定）を返す。
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// 盤内かつ空きマスであるかを返す。
    #[inline]
    #[must_use]
    pub fn is_valid_move(&self, row: i32, col: i32) -> bool {
        Square::from_row_col(row, col).is_some_and(|square| self.symbol_at(square).is_none())
    }

    /// 空の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// 石を置く。
    ///
    /// 盤外または埋まっているマスの場合は盤面を変更せず `false` を返す。
    #[inline]
    pub fn place(&mut self, row: i32, col: i32, symbol: Symbol) -> bool {
        let Some(square) = Square::from_row_col(row, col) else {
            return false;
        };
        self.place_at(square, symbol)
    }

    /// `Square` を指定して石を置く（空きマスでなければ `false`）。
    #[inline]
    pub fn place_at(&mut self, square: Square, symbol: Symbol) -> bool {
        match self.cells.get_mut(usize::from(square.index())) {
            Some(cell) if cell.is_none() => {
                *cell = Some(symbol);
                true
            }
            _ => false,
        }
    }

    /// 指定マスに記号を書き込む（探索の仮置き用、空き判定なし）。
    #[inline]
    pub(crate) fn set(&mut self, square: Square, symbol: Symbol) {
        if let Some(cell) = self.cells.get_mut(usize::from(square.index())) {
            *cell = Some(symbol);
        }
    }

    /// 指定マスの石を返す。
    #[inline]
    #[must_use]
    pub fn symbol_at(&self, square: Square) -> Option<Symbol> {
        self.cells
            .get(usize::from(square.index()))
            .copied()
            .flatten()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, " ")?;
        for col in u8::MIN..Square::BOARD_LEN {
            write!(formatter, " {col}")?;
        }
        writeln!(formatter)?;

        for row in u8::MIN..Square::BOARD_LEN {
            write!(formatter, "{row}")?;
            for col in u8::MIN..Square::BOARD_LEN {
                let ch = Square::new(row, col)
                    .and_then(|square| self.symbol_at(square))
                    .map_or(EMPTY_CHAR, Symbol::as_char);
                write!(formatter, " {ch}")?;
            }
            writeln!(formatter)?;
        }
        Ok(())
    }
}
