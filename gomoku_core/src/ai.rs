/// ミニマックス探索AI。
pub mod minimax;
/// 空きマスからランダムに1手選ぶAI。
pub mod random;
pub mod types;

pub type Difficulty = minimax::Difficulty;
