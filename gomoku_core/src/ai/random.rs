use crate::ai::types::Ai;
use crate::engine::board::Board;
use crate::engine::types::{Square, Symbol};

/// 64-bit 線形合同法 (LCG) の簡易 RNG。
/// - rand クレート不使用
/// - `seed` で決定的に再現可能
#[derive(Debug, Clone, Copy)]
struct Lcg64 {
    /// 内部状態。
    state: u64,
}

impl Lcg64 {
    /// LCG の内部状態を `seed` から初期化する。
    #[inline]
    const fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    /// 次の u32 を生成する（上位 32bit を返す）。
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // PCG 系で採用される LCG 定数
        const LCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
        const LCG_INCREMENT: u64 = 1_442_695_040_888_963_407;

        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);

        u32::try_from(self.state >> 32).unwrap_or(u32::MAX)
    }
}

/// 空きマスからランダムに1手を選択するAI。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// 乱数生成器。
    rng: Lcg64,
}

impl Agent {
    /// `seed` を用いて初期化する。
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Lcg64::new(seed),
        }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: &Board, _symbol: Symbol) -> Option<Square> {
        let count = board.empty_squares().count();
        if count == usize::MIN {
            return None;
        }

        let skip = scale(self.rng.next_u32(), count);
        board.empty_squares().nth(skip)
    }
}

/// `random` を `0..count` の範囲に写す（乗算して上位を取る）。
fn scale(random: u32, count: usize) -> usize {
    let count_u64 = u64::try_from(count).unwrap_or(u64::MAX);
    let product = u64::from(random).wrapping_mul(count_u64);
    usize::try_from(product.wrapping_shr(32)).unwrap_or(usize::MIN)
}
