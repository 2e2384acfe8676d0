//! 対局の進行（手番の管理、人間とAIの着手、終局表示）。

use std::io::{BufRead, Write};

use anyhow::Result;
use gomoku_core::ai::types::Ai as _;
use gomoku_core::ai::{minimax, random};
use gomoku_core::engine::{Game, GameStatus, PlayError, Square, Symbol};
use tracing::{debug, info};

use crate::console::{Console, parse_move, parse_symbol};

/// 対局モード。
#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum Mode {
    /// 人間同士。
    TwoPlayers,
    /// 人間 対 コンピュータ。
    Computer,
}

/// コンピュータ側のAIの種類。
#[derive(Copy, Clone, Debug)]
pub enum Engine {
    /// ミニマックス探索。
    Minimax(minimax::SearchLimits),
    /// 空きマスからランダム。
    Random(u64),
}

/// 対局の設定（未指定の項目は対話で尋ねる）。
#[derive(Copy, Clone, Debug)]
pub struct Options {
    pub engine: Engine,
    pub mode: Option<Mode>,
    pub symbol: Option<Symbol>,
}

#[derive(Debug)]
enum Controller {
    Human,
    Minimax(minimax::Agent),
    Random(random::Agent),
}

impl Controller {
    fn from_engine(engine: Engine) -> Self {
        match engine {
            Engine::Minimax(limits) => Self::Minimax(minimax::Agent::new(limits)),
            Engine::Random(seed) => Self::Random(random::Agent::new(seed)),
        }
    }

    fn is_human(&self) -> bool {
        matches!(self, Self::Human)
    }

    fn select_move(&mut self, game: &Game) -> Option<Square> {
        let side = game.side_to_move();
        match self {
            Self::Minimax(agent) => agent.select_move(game.board(), side),
            Self::Random(agent) => agent.select_move(game.board(), side),
            Self::Human => None,
        }
    }
}

/// 1局分の状態。
#[derive(Debug)]
pub struct App {
    black: Controller,
    game: Game,
    mode: Mode,
    white: Controller,
}

impl App {
    pub fn new(mode: Mode, human: Symbol, engine: Engine) -> Self {
        let (black, white) = match (mode, human) {
            (Mode::TwoPlayers, _) => (Controller::Human, Controller::Human),
            (Mode::Computer, Symbol::White) => (Controller::from_engine(engine), Controller::Human),
            (Mode::Computer, _) => (Controller::Human, Controller::from_engine(engine)),
        };

        Self {
            black,
            game: Game::new(),
            mode,
            white,
        }
    }

    fn controller_for_mut(&mut self, symbol: Symbol) -> &mut Controller {
        match symbol {
            Symbol::White => &mut self.white,
            _ => &mut self.black,
        }
    }

    fn controller_for(&self, symbol: Symbol) -> &Controller {
        match symbol {
            Symbol::White => &self.white,
            _ => &self.black,
        }
    }

    /// 終局まで対局を進め、最終状態を返す。
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<GameStatus> {
        loop {
            console.say(self.game.board().to_string())?;

            let side = self.game.side_to_move();
            let status = if self.controller_for(side).is_human() {
                self.human_turn(console, side)?
            } else {
                self.computer_turn(console, side)?
            };

            if status != GameStatus::InProgress {
                console.say(self.game.board().to_string())?;
                console.say(self.result_text(status))?;
                info!(?status, "game over");
                return Ok(status);
            }
        }
    }

    fn human_turn<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        side: Symbol,
    ) -> Result<GameStatus> {
        let prompt = match self.mode {
            Mode::TwoPlayers => format!("Player {side}, enter move (row and column): "),
            Mode::Computer => "Your turn (row and column): ".to_owned(),
        };

        loop {
            let line = console.prompt(&prompt)?;
            let (row, col) = match parse_move(&line) {
                Ok(value) => value,
                Err(err) => {
                    console.say(err.message())?;
                    continue;
                }
            };

            match self.game.play(row, col) {
                Ok(status) => {
                    debug!(%side, row, col, "human move");
                    return Ok(status);
                }
                Err(PlayError::OutOfBounds | PlayError::Occupied) => {
                    console.say("Invalid move. Try again.")?;
                }
                Err(err) => anyhow::bail!("unexpected play error: {err:?}"),
            }
        }
    }

    fn computer_turn<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        side: Symbol,
    ) -> Result<GameStatus> {
        console.say("AI is thinking...")?;

        let game = self.game;
        let Some(square) = self.controller_for_mut(side).select_move(&game) else {
            anyhow::bail!("computer found no move on a board that is not full");
        };

        let status = match self.game.play_square(square) {
            Ok(value) => value,
            Err(err) => anyhow::bail!("computer chose {square}, which was rejected: {err:?}"),
        };
        console.say(format!("Computer placed at {square}"))?;
        debug!(%side, %square, "computer move");
        Ok(status)
    }

    fn result_text(&self, status: GameStatus) -> String {
        match status {
            GameStatus::Won(symbol) => match self.mode {
                Mode::TwoPlayers => format!("Player {symbol} won"),
                Mode::Computer if self.controller_for(symbol).is_human() => "You won".to_owned(),
                Mode::Computer => "Computer won".to_owned(),
            },
            GameStatus::Draw => "Draw.".to_owned(),
            _ => String::new(),
        }
    }
}

/// 未指定のモードを対話で尋ねる。
pub fn choose_mode<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Mode> {
    loop {
        console.say("Choose your game mode:")?;
        console.say("1. 2 Players")?;
        console.say("2. Player vs. Computer")?;
        let line = console.prompt("Enter your choice (1 or 2): ")?;
        match line.parse::<u8>() {
            Ok(1) => return Ok(Mode::TwoPlayers),
            Ok(2) => return Ok(Mode::Computer),
            Ok(_) => console.say("Invalid option. Try again.")?,
            Err(_) => console.say("Invalid input. Please enter a number.")?,
        }
    }
}

/// 未指定の記号を対話で尋ねる。
pub fn choose_symbol<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Symbol> {
    loop {
        let line = console.prompt("Choose your symbol black or white (B/W): ")?;
        match parse_symbol(&line) {
            Some(symbol) => return Ok(symbol),
            None => console.say("Invalid symbol. Please enter 'B' or 'W'.")?,
        }
    }
}

/// 設定に従って1局を行う。
pub fn play<R: BufRead, W: Write>(console: &mut Console<R, W>, options: Options) -> Result<GameStatus> {
    let mode = match options.mode {
        Some(mode) => mode,
        None => choose_mode(console)?,
    };
    let human = match (mode, options.symbol) {
        (Mode::TwoPlayers, _) => Symbol::Black,
        (Mode::Computer, Some(symbol)) => symbol,
        (Mode::Computer, None) => choose_symbol(console)?,
    };

    info!(?mode, %human, engine = ?options.engine, "starting game");
    App::new(mode, human, options.engine).run(console)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use gomoku_core::ai::minimax::SearchLimits;
    use gomoku_core::engine::{GameStatus, Symbol};

    use super::{Engine, Mode, Options, play};
    use crate::console::Console;

    fn run_script(script: &str, options: Options) -> (Option<GameStatus>, String) {
        let mut console = Console::new(Cursor::new(script.to_owned()), Vec::new());
        let status = play(&mut console, options).ok();
        let output = String::from_utf8_lossy(console.output()).into_owned();
        (status, output)
    }

    const EASY: Engine = Engine::Minimax(SearchLimits::new(1, false));

    #[test]
    fn two_players_black_wins_with_a_row() {
        let script = "0 0\n1 0\n0 1\n1 1\n0 2\n1 2\n0 3\n1 3\n0 4\n";
        let options = Options {
            engine: EASY,
            mode: Some(Mode::TwoPlayers),
            symbol: None,
        };

        let (status, output) = run_script(script, options);
        assert_eq!(status, Some(GameStatus::Won(Symbol::Black)));
        assert!(output.contains("Player B, enter move (row and column): "));
        assert!(output.contains("Player W, enter move (row and column): "));
        assert!(output.ends_with("Player B won\n"), "output={output}");
    }

    #[test]
    fn bad_input_is_reprompted() {
        let script = "9\nx\n1\n1 2 3\nfoo bar\n4 9\n-1 0\n0 0\n0 0\n";
        let (status, output) = run_script(
            script,
            Options {
                engine: EASY,
                mode: None,
                symbol: None,
            },
        );

        // 入力が尽きた時点でエラーになる。
        assert_eq!(status, None);
        assert!(output.contains("Invalid option. Try again."));
        assert!(output.contains("Invalid input. Please enter a number."));
        assert!(output.contains("Please enter exactly two numbers."));
        assert!(output.contains("Please enter valid numbers."));
        assert_eq!(output.matches("Invalid move. Try again.").count(), 3);
        assert!(output.contains("Player W, enter move (row and column): "));
    }

    #[test]
    fn computer_replies_after_human_move() {
        let options = Options {
            engine: EASY,
            mode: Some(Mode::Computer),
            symbol: Some(Symbol::Black),
        };

        let (status, output) = run_script("4 4\n", options);
        assert_eq!(status, None);
        assert_eq!(output.matches("AI is thinking...").count(), 1);
        assert_eq!(output.matches("Computer placed at (").count(), 1);
        assert_eq!(output.matches("Your turn (row and column): ").count(), 2);
    }

    #[test]
    fn computer_moves_first_when_human_is_white() {
        let options = Options {
            engine: Engine::Random(7),
            mode: None,
            symbol: None,
        };
        let (status, output) = run_script("2\nq\nw\n", options);

        assert_eq!(status, None);
        assert!(output.contains("Invalid symbol. Please enter 'B' or 'W'."));
        let thinking = output.find("AI is thinking...");
        let first_prompt = output.find("Your turn (row and column): ");
        assert!(thinking.is_some() && first_prompt.is_some());
        assert!(thinking < first_prompt, "computer must move first");
    }

    #[test]
    fn game_against_computer_runs_to_the_end() {
        // 人間は行優先で全マスを順に入力する（埋まったマスは打ち直し）。
        let script: String = (0..9)
            .flat_map(|row| (0..9).map(move |col| format!("{row} {col}\n")))
            .collect();

        for seed in [1_u64, 99] {
            let options = Options {
                engine: Engine::Random(seed),
                mode: Some(Mode::Computer),
                symbol: Some(Symbol::Black),
            };
            let (status, output) = run_script(&script, options);

            let expected = match status {
                Some(GameStatus::Won(Symbol::Black)) => "You won\n",
                Some(GameStatus::Won(_)) => "Computer won\n",
                Some(GameStatus::Draw) => "Draw.\n",
                other => panic!("game did not finish, status={other:?}"),
            };
            assert!(output.ends_with(expected), "seed={seed} output={output}");
        }
    }
}
