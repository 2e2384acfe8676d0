use super::DEFAULT_DEPTH;

/// 探索の制限。
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SearchLimits {
    /// ルートの着手の後に読む深さ（ply）。
    depth: u8,
    /// αβ枝刈りを使うかどうか。
    pruning: bool,
}

impl SearchLimits {
    /// ルートの着手の後に読む深さ（ply）を返す。
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// 探索制限を生成する。
    ///
    /// - `depth`: ルートの着手の後に読む深さ（ply）
    /// - `pruning`: αβ枝刈りを使うか（結果の手は全幅探索と同じ）
    #[inline]
    #[must_use]
    pub const fn new(depth: u8, pruning: bool) -> Self {
        Self { depth, pruning }
    }

    /// αβ枝刈りを使うかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn pruning(&self) -> bool {
        self.pruning
    }
}

impl Default for SearchLimits {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH, false)
    }
}

/// 探索統計。
#[derive(Default, Clone, Copy, Debug)]
pub(super) struct SearchStats {
    /// 枝刈りした回数。
    cutoffs: u64,
    /// 探索したノード数。
    nodes: u64,
}

impl SearchStats {
    /// 枝刈りの回数を返す。
    pub(super) const fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// 枝刈りの回数を加算する。
    pub(super) const fn inc_cutoffs(&mut self) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
    }

    /// 探索ノード数を加算する。
    pub(super) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }

    /// 探索ノード数を返す。
    pub(super) const fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// 探索実行に必要なコンテキスト。
pub(super) struct SearchContext {
    /// 探索制限。
    limits: SearchLimits,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchContext {
    /// 探索制限を返す。
    pub(super) const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// 探索コンテキストを生成する。
    pub(super) fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            stats: SearchStats::default(),
        }
    }

    /// 探索統計を返す。
    pub(super) const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 探索統計への可変参照を返す。
    pub(super) const fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }
}
