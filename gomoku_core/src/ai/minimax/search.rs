use tracing::debug;

use crate::engine::board::Board;
use crate::engine::types::{Square, Symbol};
use crate::engine::win::check_full_board_win;

use super::SCORE_WIN;
use super::eval::evaluate;
use super::limits::{SearchContext, SearchLimits, SearchStats};

/// ルートで手を決めた理由。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Decision {
    /// 相手の即勝ちを防いだ。
    Block,
    /// 空きマスが無い。
    NoMove,
    /// ミニマックス探索で選んだ。
    Search,
    /// 即勝ちの手。
    Win,
}

/// 探索結果。
#[derive(Clone, Copy, Debug)]
pub struct SearchReport {
    /// ルートで選択した最善手。
    best_move: Option<Square>,
    /// `best_move` の評価値（探索で選んだ場合のみ）。
    best_score: Option<i32>,
    /// 手を決めた理由。
    decision: Decision,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchReport {
    /// ルートで選択した最善手を返す。
    #[inline]
    #[must_use]
    pub const fn best_move(&self) -> Option<Square> {
        self.best_move
    }

    /// `best_move` の評価値を返す（即勝ち・阻止の場合は `None`）。
    #[inline]
    #[must_use]
    pub const fn best_score(&self) -> Option<i32> {
        self.best_score
    }

    /// 枝刈りした回数を返す。
    #[inline]
    #[must_use]
    pub const fn cutoffs(&self) -> u64 {
        self.stats.cutoffs()
    }

    /// 手を決めた理由を返す。
    #[inline]
    #[must_use]
    pub const fn decision(&self) -> Decision {
        self.decision
    }

    /// 探索したノード数を返す。
    #[inline]
    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.stats.nodes()
    }

    /// 探索を伴わない結果を生成する。
    fn shortcut(best_move: Option<Square>, decision: Decision) -> Self {
        Self {
            best_move,
            best_score: None,
            decision,
            stats: SearchStats::default(),
        }
    }
}

/// ルート探索（即勝ち → 即負け阻止 → ミニマックス）。
///
/// 仮置きはすべて戻してから返すため、呼び出し後の `board` は呼び出し前と同一。
pub(super) fn search_root(
    board: &mut Board,
    ai: Symbol,
    opponent: Symbol,
    limits: SearchLimits,
) -> SearchReport {
    if board.is_full() {
        debug!(%ai, "no empty square left");
        return SearchReport::shortcut(None, Decision::NoMove);
    }

    if let Some(square) = find_winning_square(board, ai) {
        debug!(%ai, %square, "immediate win");
        return SearchReport::shortcut(Some(square), Decision::Win);
    }

    if let Some(square) = find_winning_square(board, opponent) {
        debug!(%ai, %square, "blocking opponent's immediate win");
        return SearchReport::shortcut(Some(square), Decision::Block);
    }

    let mut ctx = SearchContext::new(limits);
    let depth = limits.depth();
    let mut best_score = i32::MIN;
    let mut best_move: Option<Square> = None;

    for square in Square::all() {
        if board.symbol_at(square).is_some() {
            continue;
        }

        board.set(square, ai);
        let score = if ctx.limits().pruning() {
            alphabeta(board, depth, false, best_score, i32::MAX, ai, opponent, &mut ctx)
        } else {
            minimax(board, depth, false, ai, opponent, &mut ctx)
        };
        board.clear(square);

        if score > best_score {
            best_score = score;
            best_move = Some(square);
        }
    }

    let stats = ctx.stats();
    debug!(
        %ai,
        square = ?best_move,
        score = best_score,
        depth,
        pruning = limits.pruning(),
        nodes = stats.nodes(),
        cutoffs = stats.cutoffs(),
        "minimax search finished"
    );

    SearchReport {
        best_move,
        best_score: best_move.map(|_| best_score),
        decision: Decision::Search,
        stats,
    }
}

/// 置けば `symbol` が5連を完成させるマスを行優先で探す。
fn find_winning_square(board: &mut Board, symbol: Symbol) -> Option<Square> {
    for square in Square::all() {
        if board.symbol_at(square).is_some() {
            continue;
        }

        board.set(square, symbol);
        let wins = check_full_board_win(board, symbol);
        // 早期リターンの前に必ず戻す。
        board.clear(square);

        if wins {
            return Some(square);
        }
    }
    None
}

/// 勝敗が付いていればその評価値を返す（`ai` の勝ちを先に判定する）。
fn terminal_score(board: &Board, ai: Symbol, opponent: Symbol) -> Option<i32> {
    if check_full_board_win(board, ai) {
        return Some(SCORE_WIN);
    }
    if check_full_board_win(board, opponent) {
        return Some(SCORE_WIN.wrapping_neg());
    }
    None
}

/// ミニマックス（全幅）。
///
/// 空きマスが無い ply に到達した場合は評価関数の値を返す。
pub(super) fn minimax(
    board: &mut Board,
    depth: u8,
    maximizing: bool,
    ai: Symbol,
    opponent: Symbol,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.stats_mut().inc_nodes();

    if let Some(score) = terminal_score(board, ai, opponent) {
        return score;
    }
    if depth == u8::MIN {
        return evaluate(board, ai, opponent);
    }

    let symbol = if maximizing { ai } else { opponent };
    let next_depth = depth.saturating_sub(1);
    let mut best: Option<i32> = None;

    for square in Square::all() {
        if board.symbol_at(square).is_some() {
            continue;
        }

        board.set(square, symbol);
        let score = minimax(board, next_depth, !maximizing, ai, opponent, ctx);
        board.clear(square);

        best = Some(match best {
            None => score,
            Some(current) if maximizing => current.max(score),
            Some(current) => current.min(score),
        });
    }

    best.unwrap_or_else(|| evaluate(board, ai, opponent))
}

/// ミニマックス（αβ枝刈り付き、fail-soft）。
///
/// 窓の内側に入る値は [`minimax`] と一致し、窓の外の値は同じ側の境界を越える。
#[expect(clippy::too_many_arguments, reason = "minimax の引数に探索窓を加えたもの")]
pub(super) fn alphabeta(
    board: &mut Board,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    ai: Symbol,
    opponent: Symbol,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.stats_mut().inc_nodes();

    if let Some(score) = terminal_score(board, ai, opponent) {
        return score;
    }
    if depth == u8::MIN {
        return evaluate(board, ai, opponent);
    }

    let symbol = if maximizing { ai } else { opponent };
    let next_depth = depth.saturating_sub(1);
    let mut best: Option<i32> = None;

    for square in Square::all() {
        if board.symbol_at(square).is_some() {
            continue;
        }

        board.set(square, symbol);
        let score = alphabeta(
            board,
            next_depth,
            !maximizing,
            alpha,
            beta,
            ai,
            opponent,
            ctx,
        );
        board.clear(square);

        let current = match best {
            None => score,
            Some(value) if maximizing => value.max(score),
            Some(value) => value.min(score),
        };
        best = Some(current);

        if maximizing {
            alpha = alpha.max(current);
        } else {
            beta = beta.min(current);
        }
        if alpha >= beta {
            ctx.stats_mut().inc_cutoffs();
            break;
        }
    }

    best.unwrap_or_else(|| evaluate(board, ai, opponent))
}
