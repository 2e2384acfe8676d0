//! Gomoku (9×9, five in a row) core logic.
//!
//! このクレートは盤面・勝利判定・ゲーム進行を管理する `engine` と、手を選択する `ai` を提供します。
//! UI（`gomoku_cli`）から利用されることを想定しています。

#![forbid(unsafe_code)]

/// 盤面・勝利判定・ゲーム進行を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;
