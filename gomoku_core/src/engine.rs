/// 盤面（9×9 のマス目）と着手の実装。
pub mod board;
/// ゲーム進行（手番、終局判定など）の実装。
pub mod game;
pub mod types;
/// 五目並べの勝利判定。
pub mod win;

pub type Board = board::Board;
pub type Game = game::Game;
pub type Symbol = types::Symbol;
pub type Square = types::Square;
pub type GameStatus = game::Status;
pub type PlayError = game::PlayError;
