use crate::ai::types::Ai;
use crate::engine::board::Board;
use crate::engine::types::{Square, Symbol};

/// 評価関数。
mod eval;
/// 探索制限・統計・コンテキスト。
mod limits;
/// 探索本体。
mod search;

pub use eval::evaluate;
pub use limits::SearchLimits;
pub use search::{Decision, SearchReport};

use limits::SearchContext;
use search::search_root;

/// 勝ち（5連完成）局面の評価値。
pub const SCORE_WIN: i32 = 10_000;

/// 標準の探索深さ（ルートの着手の後に読む ply 数）。
pub const DEFAULT_DEPTH: u8 = 2;

/// AIの強さ。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Difficulty {
    /// 浅い探索（深さ1）。
    Easy,
    /// 標準（深さ2、全幅探索）。
    #[default]
    Medium,
    /// 深い探索（深さ3、αβ枝刈り）。
    Hard,
}

impl Difficulty {
    /// すべての難易度（弱い順）。
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// 難易度に対応する探索制限を返す。
    #[inline]
    #[must_use]
    pub const fn limits(self) -> SearchLimits {
        match self {
            Self::Easy => SearchLimits::new(1, false),
            Self::Medium => SearchLimits::new(DEFAULT_DEPTH, false),
            Self::Hard => SearchLimits::new(3, true),
        }
    }

    /// 表示名を返す。
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// ミニマックス探索を行うAI。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// 探索制限。
    limits: SearchLimits,
}

impl Agent {
    /// 難易度を指定して初期化する。
    #[inline]
    #[must_use]
    pub const fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.limits())
    }

    /// 探索制限を返す。
    #[inline]
    #[must_use]
    pub const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// `limits` を指定して初期化する。
    #[inline]
    #[must_use]
    pub const fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl Default for Agent {
    #[inline]
    fn default() -> Self {
        Self::new(SearchLimits::default())
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: &Board, symbol: Symbol) -> Option<Square> {
        // 探索は盤面に仮置きして戻すので、作業用のコピーで行う。
        let mut scratch = *board;
        search_root(&mut scratch, symbol, symbol.opponent(), self.limits).best_move()
    }
}

/// 標準の探索制限（深さ2、全幅）で最善手を返す。
///
/// 1. 即勝ちできるマス（行優先で最初のもの）
/// 2. 相手の即勝ちを防ぐマス
/// 3. ミニマックスで評価値が最大のマス（同点なら先に見つけたもの）
///
/// 空きマスが無ければ `None`。戻った時点で `board` は呼び出し前と同一。
#[inline]
pub fn best_move(board: &mut Board, ai: Symbol, opponent: Symbol) -> Option<Square> {
    best_move_with_limits(board, ai, opponent, SearchLimits::default())
}

/// 探索制限を指定して最善手を返す。
#[inline]
pub fn best_move_with_limits(
    board: &mut Board,
    ai: Symbol,
    opponent: Symbol,
    limits: SearchLimits,
) -> Option<Square> {
    search_root(board, ai, opponent, limits).best_move()
}

/// 探索を行い、選んだ手と理由・統計をまとめて返す。
///
/// 戻った時点で `board` は呼び出し前と同一。
#[inline]
pub fn analyze(
    board: &mut Board,
    ai: Symbol,
    opponent: Symbol,
    limits: SearchLimits,
) -> SearchReport {
    search_root(board, ai, opponent, limits)
}

/// ミニマックス値（`ai` 視点）を返す。
///
/// 戻った時点で `board` は呼び出し前と同一。
#[inline]
pub fn minimax(
    board: &mut Board,
    depth: u8,
    maximizing: bool,
    ai: Symbol,
    opponent: Symbol,
) -> i32 {
    let mut ctx = SearchContext::new(SearchLimits::new(depth, false));
    search::minimax(board, depth, maximizing, ai, opponent, &mut ctx)
}
