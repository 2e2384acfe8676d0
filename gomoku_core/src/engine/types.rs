use core::fmt;

/// 石の記号（プレイヤー）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Symbol {
    /// 先手（`B`）。
    Black,
    /// 後手（`W`）。
    White,
}

impl Symbol {
    /// 表示用の1文字を返す。
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Black => 'B',
            Self::White => 'W',
        }
    }

    /// 1文字（大文字小文字を問わない）から記号を生成する。
    #[inline]
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'B' => Some(Self::Black),
            'W' => Some(Self::White),
            _ => None,
        }
    }

    /// 相手側の記号を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl fmt::Display for Symbol {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.as_char())
    }
}

/// 盤面上のマス（0..=80のインデックス）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Square(
    /// `row * 9 + col` に対応する0..=80の値。
    u8,
);

impl Square {
    /// 盤の一辺の長さ。
    pub const BOARD_LEN: u8 = 9;

    /// 盤面のマス数。
    pub const COUNT: u8 = Self::BOARD_LEN * Self::BOARD_LEN;

    /// 全マスを行優先（row-major）の順で返す。
    #[inline]
    pub fn all() -> impl Iterator<Item = Self> {
        (u8::MIN..Self::COUNT).map(Self)
    }

    /// インデックスから `Square` を生成する（範囲チェックなし）。
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        Self(index)
    }

    /// 符号付きの行・列から `Square` を生成する（盤外なら `None`）。
    #[inline]
    #[must_use]
    pub fn from_row_col(row: i32, col: i32) -> Option<Self> {
        let row_u8 = u8::try_from(row).ok()?;
        let col_u8 = u8::try_from(col).ok()?;
        Self::new(row_u8, col_u8)
    }

    /// 0..=80 のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 盤面座標（row, col）から `Square` を生成する。
    #[inline]
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row >= Self::BOARD_LEN || col >= Self::BOARD_LEN {
            return None;
        }

        let idx = match row.checked_mul(Self::BOARD_LEN) {
            Some(value) => value,
            None => return None,
        };

        match idx.checked_add(col) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// `(d_row, d_col)` だけずらしたマスを返す（盤外なら `None`）。
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = i32::from(self.row()).wrapping_add(i32::from(d_row));
        let col = i32::from(self.col()).wrapping_add(i32::from(d_col));
        Self::from_row_col(row, col)
    }

    /// 列（0..=8）を返す。
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        match self.0.checked_rem(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// 行（0..=8）を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        match self.0.checked_div(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }
}

impl fmt::Display for Square {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row(), self.col())
    }
}
