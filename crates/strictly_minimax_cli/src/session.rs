//! Game loops driving the engine over text streams.

use crate::config::PlayConfig;
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::io::{BufRead, Write};
use strictly_minimax::{
    Action, Board, Game, GameStatus, Player, Value, optimal_move, optimal_move_with_value,
    turn_owner,
};
use tracing::{debug, info, instrument, warn};

/// Parses a human move: `row col`, `row,col`, or a row-major index `0`-`8`.
#[instrument(level = "debug")]
pub fn parse_move(input: &str) -> Option<Action> {
    let parts: Vec<usize> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    match parts.as_slice() {
        [index] => Action::from_index(*index),
        [row, col] => Some(Action::new(*row, *col)),
        _ => None,
    }
}

fn legend() -> &'static str {
    "0|1|2\n3|4|5\n6|7|8"
}

fn describe(status: GameStatus) -> String {
    match status {
        GameStatus::Won(player) => format!("{} wins.", player),
        GameStatus::Draw => "Draw.".to_string(),
        GameStatus::InProgress => "Game in progress.".to_string(),
    }
}

/// Plays a human against the engine until the game ends.
///
/// Unparseable or illegal input is reported and the human is asked again.
/// Running out of input ends the session with an error.
#[instrument(skip(input, output))]
pub fn play<R: BufRead, W: Write>(
    config: &PlayConfig,
    mut input: R,
    mut output: W,
) -> Result<GameStatus> {
    let human = *config.human();
    let mut game = Game::new();
    info!(%human, "Starting interactive game");

    while game.status() == GameStatus::InProgress {
        writeln!(output, "{}\n", game.board())?;

        if game.to_move() == human {
            if *config.show_hints() {
                writeln!(output, "Squares:\n{}\n", legend())?;
            }
            write!(output, "{} to move (row col): ", human)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line).context("Failed to read move")? == 0 {
                bail!("Input closed before the game finished");
            }

            let Some(action) = parse_move(&line) else {
                writeln!(output, "Could not read {:?}; enter a row and column 0-2.", line.trim())?;
                continue;
            };
            if let Err(e) = game.play(action) {
                warn!(error = %e, "Rejected human move");
                writeln!(output, "Illegal move {}: {}.", e.action, e.kind)?;
            }
        } else {
            let Some(action) = optimal_move(game.board()) else {
                break;
            };
            game.play(action)?;
            writeln!(output, "Engine plays {}.", action)?;
        }
    }

    let status = game.status();
    writeln!(output, "{}\n\n{}", game.board(), describe(status))?;
    Ok(status)
}

/// Lets the engine play both sides, printing every position.
#[instrument(skip(output))]
pub fn selfplay<W: Write>(mut output: W) -> Result<GameStatus> {
    let mut game = Game::new();
    writeln!(output, "{}\n", game.board())?;

    while let Some(action) = optimal_move(game.board()) {
        let player = game.to_move();
        game.play(action)?;
        writeln!(output, "{} plays {}\n{}\n", player, action, game.board())?;
    }

    let status = game.status();
    writeln!(output, "{}", describe(status))?;
    Ok(status)
}

/// Result of analysing one board, as printed by `best --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The analysed board.
    pub board: Board,
    /// Side to move.
    pub to_move: Player,
    /// Optimal action, absent when the game is over.
    pub action: Option<Action>,
    /// Value of the board under optimal play.
    pub value: Value,
}

impl Analysis {
    /// Runs the search on `board`.
    #[instrument(skip(board))]
    pub fn of(board: Board) -> Self {
        let (action, value) = match optimal_move_with_value(&board) {
            Some((action, value)) => (Some(action), value),
            None => (None, strictly_minimax::utility(&board)),
        };
        debug!(?action, value, "Analysis complete");
        Self {
            board,
            to_move: turn_owner(&board),
            action,
            value,
        }
    }
}

/// Prints the optimal move for the board given in text form.
#[instrument(skip(output))]
pub fn best<W: Write>(board: &str, json: bool, mut output: W) -> Result<Analysis> {
    let board: Board = board.parse().context("Invalid board")?;
    let analysis = Analysis::of(board);

    if json {
        writeln!(output, "{}", serde_json::to_string(&analysis)?)?;
        return Ok(analysis);
    }

    writeln!(output, "{}\n", analysis.board)?;
    match analysis.action {
        Some(action) => writeln!(
            output,
            "{} to move: best is {} (value {})",
            analysis.to_move, action, analysis.value
        )?,
        None => writeln!(output, "{}", describe(GameStatus::of(&analysis.board)))?,
    }
    Ok(analysis)
}
