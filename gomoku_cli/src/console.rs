//! 端末入出力（プロンプト、入力の解釈）。

use std::io::{BufRead, Write};

use anyhow::{Context as _, Result, bail};
use gomoku_core::engine::Symbol;

/// 着手入力の解釈に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MoveInputError {
    /// 数値が2つではない。
    WrongCount,
    /// 数値として読めない。
    NotANumber,
}

impl MoveInputError {
    /// 利用者に表示するメッセージ。
    pub const fn message(self) -> &'static str {
        match self {
            Self::WrongCount => "Please enter exactly two numbers.",
            Self::NotANumber => "Please enter valid numbers.",
        }
    }
}

/// `"row col"` 形式（空白区切り）の入力を解釈する。
///
/// 範囲チェックは行わない（盤外は着手時に弾く）。
pub fn parse_move(line: &str) -> Result<(i32, i32), MoveInputError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(MoveInputError::WrongCount);
    };

    match (row.parse::<i32>(), col.parse::<i32>()) {
        (Ok(row), Ok(col)) => Ok((row, col)),
        _ => Err(MoveInputError::NotANumber),
    }
}

/// 記号の入力（`B` / `W`、大文字小文字は問わない）を解釈する。
pub fn parse_symbol(line: &str) -> Option<Symbol> {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Symbol::from_char(ch),
        _ => None,
    }
}

/// 入力と出力の組。
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 出力先を返す（テスト用）。
    #[cfg(test)]
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// 改行なしで表示してから1行読む。入力が閉じていればエラー。
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_owned())
    }

    /// 1行表示する。
    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref()).context("failed to write output")
    }
}
