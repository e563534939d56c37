//! Universal Chess Interface (UCI) front end.
//!
//! Reads commands line by line, keeps one board and one engine, and answers
//! on the given writer. Bad input is logged and answered with an
//! `info string` line; the loop keeps running.

use std::io::{self, BufRead, Write};

use log::{debug, warn};
use thiserror::Error;

use crate::board::{Board, Color, FenError, MoveParseError};
use crate::engine::time::split_millis;
use crate::engine::{Difficulty, Engine, EngineConfig, SearchLimits};

pub mod command;
pub mod report;

pub use command::{parse_uci_command, GoParams, UciCommand};
use report::format_info;

/// Largest accepted `Hash` option, in megabytes
pub const MAX_HASH_MB: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UciError {
    #[error("Invalid FEN: {0}")]
    InvalidFen(#[from] FenError),
    #[error("Invalid move '{move_str}': {error}")]
    InvalidMove {
        move_str: String,
        #[source]
        error: MoveParseError,
    },
    #[error("Missing required parts in position command")]
    MissingParts,
    #[error("Unknown option '{0}'")]
    UnknownOption(String),
    #[error("Invalid value '{value}' for option '{name}'")]
    InvalidOptionValue { name: String, value: String },
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
}

/// Build the board described by the tokens after `position`:
/// `startpos | fen <6 fields>`, optionally followed by `moves ...`.
///
/// Nothing is returned unless every move applies.
pub fn try_parse_position_command(args: &[&str]) -> Result<Board, UciError> {
    let (mut board, rest) = match args.split_first() {
        Some((&"startpos", rest)) => (Board::new(), rest),
        Some((&"fen", rest)) => {
            if rest.len() < 6 {
                return Err(UciError::MissingParts);
            }
            (Board::from_fen(&rest[..6].join(" "))?, &rest[6..])
        }
        _ => return Err(UciError::MissingParts),
    };

    match rest.split_first() {
        None => {}
        Some((&"moves", moves)) => {
            for move_str in moves {
                board
                    .make_move_uci(move_str)
                    .map_err(|error| UciError::InvalidMove {
                        move_str: (*move_str).to_string(),
                        error,
                    })?;
            }
        }
        Some(_) => return Err(UciError::MissingParts),
    }

    Ok(board)
}

/// One GUI connection: current position, engine and playing strength.
pub struct UciSession {
    board: Board,
    engine: Engine,
    difficulty: Difficulty,
}

impl Default for UciSession {
    fn default() -> Self {
        UciSession::new(EngineConfig::default())
    }
}

impl UciSession {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        UciSession {
            board: Board::new(),
            engine: Engine::new(config),
            difficulty: Difficulty::default(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Search bounds for a `go` command.
    ///
    /// `movetime` wins; otherwise the mover's clock is split as
    /// `remaining / moves_to_go + increment`. Without either, only the depth
    /// (or the difficulty's depth) limits the search.
    #[must_use]
    pub fn limits_for(&self, params: &GoParams) -> SearchLimits {
        let max_depth = params
            .depth
            .unwrap_or_else(|| self.difficulty.search_depth());
        let config = self.engine.config();

        let (remaining, increment) = match self.board.side_to_move() {
            Color::White => (params.wtime, params.winc),
            Color::Black => (params.btime, params.binc),
        };

        let move_time = params.movetime.or_else(|| {
            remaining.map(|left| {
                let budget =
                    split_millis(left, config.moves_to_go) + increment.unwrap_or_default();
                budget.max(config.min_move_time)
            })
        });

        SearchLimits {
            max_depth,
            move_time,
        }
    }

    /// Apply one command. Returns `Ok(false)` on `quit`.
    pub fn handle<W: Write>(&mut self, cmd: UciCommand, out: &mut W) -> io::Result<bool> {
        match cmd {
            UciCommand::Uci => {
                writeln!(out, "id name chess_core {}", env!("CARGO_PKG_VERSION"))?;
                writeln!(out, "id author chess_core developers")?;
                writeln!(
                    out,
                    "option name Hash type spin default {} min 1 max {MAX_HASH_MB}",
                    self.engine.config().tt_size_mb
                )?;
                let vars: Vec<String> = Difficulty::ALL
                    .iter()
                    .map(|d| format!("var {}", d.name()))
                    .collect();
                writeln!(
                    out,
                    "option name Difficulty type combo default {} {}",
                    self.difficulty,
                    vars.join(" ")
                )?;
                writeln!(out, "option name Clear Hash type button")?;
                writeln!(out, "uciok")?;
            }
            UciCommand::IsReady => writeln!(out, "readyok")?,
            UciCommand::UciNewGame => {
                self.board = Board::new();
                self.engine.new_game();
            }
            UciCommand::Position(tokens) => {
                let args: Vec<&str> = tokens.iter().map(String::as_str).collect();
                match try_parse_position_command(&args) {
                    Ok(board) => self.board = board,
                    Err(e) => report_error(out, &e)?,
                }
            }
            UciCommand::Go(params) => self.go(&params, out)?,
            UciCommand::Perft(depth) => {
                let divide = self.board.perft_divide(depth);
                let mut total = if depth == 0 { 1 } else { 0 };
                for (mv, count) in divide {
                    writeln!(out, "{mv}: {count}")?;
                    total += count;
                }
                writeln!(out)?;
                writeln!(out, "Nodes searched: {total}")?;
            }
            UciCommand::SetOption { name, value } => {
                if let Err(e) = self.set_option(&name, value.as_deref()) {
                    report_error(out, &e)?;
                }
            }
            UciCommand::Display => {
                write!(out, "{}", self.board)?;
                writeln!(out, "Fen: {}", self.board.to_fen())?;
                writeln!(out, "Key: {:016x}", self.board.hash())?;
                writeln!(out, "Result: {}", self.board.game_result())?;
            }
            // searches are synchronous, so there is never anything to stop
            UciCommand::Stop => {}
            UciCommand::Quit => return Ok(false),
            UciCommand::Unknown(line) => report_error(out, &UciError::UnknownCommand(line))?,
        }
        out.flush()?;
        Ok(true)
    }

    fn go<W: Write>(&mut self, params: &GoParams, out: &mut W) -> io::Result<()> {
        let limits = self.limits_for(params);
        debug!("go with {limits:?}");

        let mut written = Ok(());
        let result = self.engine.search_with_info(&self.board, limits, |info| {
            if written.is_ok() {
                written = writeln!(out, "{}", format_info(info)).and_then(|()| out.flush());
            }
        });
        written?;

        writeln!(out, "bestmove {}", result.best_move)
    }

    fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), UciError> {
        let invalid = || UciError::InvalidOptionValue {
            name: name.to_string(),
            value: value.unwrap_or_default().to_string(),
        };
        match name.to_ascii_lowercase().as_str() {
            "hash" => {
                let mb: usize = value.and_then(|v| v.trim().parse().ok()).ok_or_else(invalid)?;
                self.engine.set_hash_size(mb.clamp(1, MAX_HASH_MB));
            }
            "difficulty" => {
                self.difficulty = value.ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
            }
            "clear hash" => self.engine.new_game(),
            _ => return Err(UciError::UnknownOption(name.to_string())),
        }
        Ok(())
    }
}

fn report_error<W: Write>(out: &mut W, err: &UciError) -> io::Result<()> {
    warn!("{err}");
    writeln!(out, "info string error: {err}")
}

/// Drive a session from `input` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    let mut session = UciSession::default();
    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_uci_command(&line) else {
            continue;
        };
        if !session.handle(cmd, out)? {
            break;
        }
    }
    Ok(())
}

/// Run the UCI protocol on stdin/stdout.
pub fn run_uci_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(stdin.lock(), &mut stdout)
}
