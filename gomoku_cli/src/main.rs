//! 端末で遊ぶ 9×9 五目並べ。

mod app;
mod console;

use std::io;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use gomoku_core::ai::Difficulty;
use gomoku_core::ai::minimax::SearchLimits;
use gomoku_core::engine::Symbol;
use tracing_subscriber::EnvFilter;

use crate::app::{Engine, Mode, Options};
use crate::console::Console;

/// コマンドラインで選べる記号。
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum SymbolArg {
    #[value(name = "B", alias = "b")]
    Black,
    #[value(name = "W", alias = "w")]
    White,
}

impl From<SymbolArg> for Symbol {
    fn from(value: SymbolArg) -> Self {
        match value {
            SymbolArg::Black => Self::Black,
            SymbolArg::White => Self::White,
        }
    }
}

/// コマンドラインで選べる難易度。
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "gomoku")]
#[command(version, about = "Five in a row on a 9x9 board", long_about = None)]
struct Cli {
    /// Game mode; asked interactively when omitted
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Your symbol against the computer; asked interactively when omitted
    #[arg(long, value_enum)]
    symbol: Option<SymbolArg>,

    /// Strength of the computer player
    #[arg(long, value_enum, default_value_t = DifficultyArg::Medium)]
    difficulty: DifficultyArg,

    /// Search depth, overriding the difficulty
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    depth: Option<u8>,

    /// Enable alpha-beta pruning (same moves, fewer nodes)
    #[arg(long)]
    pruning: bool,

    /// Let the computer play uniformly random moves with this seed
    #[arg(long, value_name = "SEED")]
    random_seed: Option<u64>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn options(&self) -> Options {
        let engine = match self.random_seed {
            Some(seed) => Engine::Random(seed),
            None => {
                let base = Difficulty::from(self.difficulty).limits();
                let depth = self.depth.unwrap_or(base.depth());
                Engine::Minimax(SearchLimits::new(depth, base.pruning() || self.pruning))
            }
        };

        Options {
            engine,
            mode: self.mode,
            symbol: self.symbol.map(Symbol::from),
        }
    }
}

/// ログ出力を初期化する。`RUST_LOG` が無ければ warn 以上のみ。
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());
    app::play(&mut console, cli.options())?;
    Ok(())
}
