//! Line-oriented text protocol for driver programs.
//!
//! Commands arrive one per line on stdin; replies go to stdout. Columns in
//! move lists are letters `a` to `g`, and chosen moves are reported as cells
//! such as `d1`.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::board::{
    column_from_char, Board, BoardError, LogLogger, NotationError, Piece, SearchError, SearchInfo,
    Searcher,
};

pub mod command;
pub mod options;
pub mod report;

use command::{parse_command, Command};

/// Error type for protocol command parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Invalid board notation
    InvalidNotation(NotationError),
    /// Move list entry is not a column letter
    InvalidColumn { move_str: String },
    /// Move list entry could not be played
    InvalidMove { move_str: String, error: BoardError },
    /// `go` argument could not be parsed
    InvalidArgument { name: String, value: String },
    /// Missing required parts in the command
    MissingParts,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::InvalidNotation(e) => write!(f, "Invalid notation: {e}"),
            ProtocolError::InvalidColumn { move_str } => {
                write!(f, "Invalid column '{move_str}'")
            }
            ProtocolError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            ProtocolError::InvalidArgument { name, value } => {
                write!(f, "Invalid value '{value}' for '{name}'")
            }
            ProtocolError::MissingParts => write!(f, "Missing required parts in command"),
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<NotationError> for ProtocolError {
    fn from(e: NotationError) -> Self {
        ProtocolError::InvalidNotation(e)
    }
}

/// Parse a `position` command into a board.
///
/// Supports `position empty` and `position grid <notation>`, optionally
/// followed by `moves <column> <column> ...`. Each move is played by the
/// side to move at that point.
pub fn try_parse_position_command(parts: &[&str]) -> Result<Board, ProtocolError> {
    let mut i = 1;

    let mut board = match parts.get(i) {
        Some(&"empty") => {
            i += 1;
            Board::new()
        }
        Some(&"grid") => {
            let notation = parts.get(i + 1).ok_or(ProtocolError::MissingParts)?;
            i += 2;
            Board::try_from_notation(notation)?
        }
        _ => return Err(ProtocolError::MissingParts),
    };

    if parts.get(i) == Some(&"moves") {
        for &move_str in &parts[i + 1..] {
            let mut chars = move_str.chars();
            let column = match (chars.next(), chars.next()) {
                (Some(c), None) => column_from_char(c),
                _ => None,
            }
            .ok_or_else(|| ProtocolError::InvalidColumn {
                move_str: move_str.to_string(),
            })?;
            let piece = board.side_to_move();
            board
                .drop_piece(column, piece)
                .map_err(|error| ProtocolError::InvalidMove {
                    move_str: move_str.to_string(),
                    error,
                })?;
        }
    }

    Ok(board)
}

/// Arguments of a `go` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GoArgs {
    pub ply: Option<u32>,
    pub piece: Option<Piece>,
}

pub fn parse_go_command(parts: &[&str]) -> Result<GoArgs, ProtocolError> {
    let mut args = GoArgs::default();
    let mut i = 1;
    while i < parts.len() {
        let name = parts[i];
        let value = parts.get(i + 1).copied();
        let invalid = || ProtocolError::InvalidArgument {
            name: name.to_string(),
            value: value.unwrap_or_default().to_string(),
        };
        match name {
            "ply" => {
                args.ply = Some(value.and_then(|v| v.parse().ok()).ok_or_else(invalid)?);
                i += 2;
            }
            "piece" => {
                let piece = value
                    .filter(|v| v.chars().count() == 1)
                    .and_then(|v| v.chars().next())
                    .and_then(Piece::from_char)
                    .ok_or_else(invalid)?;
                args.piece = Some(piece);
                i += 2;
            }
            _ => {
                log::warn!("ignoring go argument '{name}'");
                i += 1;
            }
        }
    }
    Ok(args)
}

/// Protocol state: the current board and the searcher.
pub struct Session {
    board: Board,
    searcher: Searcher,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Session {
            board: Board::new(),
            searcher: Searcher::default().with_logger(Box::new(LogLogger)),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Handle one input line. Returns `Ok(false)` once `quit` is received.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let Some(cmd) = parse_command(line) else {
            return Ok(true);
        };

        match cmd {
            Command::Hello => options::print_options(out, &self.searcher)?,
            Command::IsReady => report::print_ready(out)?,
            Command::NewGame => {
                self.board = Board::new();
                self.searcher.new_game();
            }
            Command::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                match try_parse_position_command(&parts) {
                    Ok(board) => self.board = board,
                    Err(e) => report::print_error(out, &e)?,
                }
            }
            Command::Go(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                match parse_go_command(&parts) {
                    Ok(args) => self.go(args, out)?,
                    Err(e) => report::print_error(out, &e)?,
                }
            }
            Command::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                if let Some((name, value)) = options::parse_setoption(&parts) {
                    options::apply_setoption(&mut self.searcher, &name, value.as_deref());
                } else {
                    log::warn!("malformed setoption");
                }
            }
            Command::Display => writeln!(out, "{}", self.board)?,
            Command::Quit => return Ok(false),
            Command::Unknown(text) => log::warn!("unknown command '{text}'"),
        }

        Ok(true)
    }

    fn go<W: Write>(&mut self, args: GoArgs, out: &mut W) -> io::Result<()> {
        let piece = args.piece.unwrap_or_else(|| self.board.side_to_move());
        let ply = args.ply.unwrap_or(self.searcher.params().max_ply);

        let start = Instant::now();
        match self.searcher.search_with_ply(&self.board, piece, ply) {
            Ok(result) => {
                let elapsed = start.elapsed().as_millis();
                let info = SearchInfo::new(ply, &result, self.searcher.cache().len(), elapsed);
                report::print_info(out, &info)?;
                report::print_bestmove(out, Some(result.best_move))
            }
            Err(SearchError::NoLegalMoves) => report::print_bestmove(out, None),
            Err(e) => {
                report::print_error(out, &e)?;
                report::print_bestmove(out, None)
            }
        }
    }
}

/// Run the protocol on stdin/stdout until `quit` or end of input.
pub fn run_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let keep_going = session.handle_line(&line, &mut stdout)?;
        stdout.flush()?;
        if !keep_going {
            break;
        }
    }

    Ok(())
}
