//! Error types for board, notation and search operations.

use std::fmt;

use super::Position;

/// Error type for piece placement failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Column index outside the board
    ColumnOutOfRange { column: usize },
    /// Column has no empty cell left
    ColumnFull { column: usize },
    /// Cell coordinates outside the board
    CellOutOfRange { row: usize, column: usize },
    /// Cell already holds a piece
    CellOccupied { position: Position },
    /// Cell is empty but is not the lowest empty cell of its column
    NotPlayable { position: Position },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::ColumnOutOfRange { column } => {
                write!(f, "Column {column} is outside the board")
            }
            BoardError::ColumnFull { column } => write!(f, "Column {column} is full"),
            BoardError::CellOutOfRange { row, column } => {
                write!(f, "Cell ({row}, {column}) is outside the board")
            }
            BoardError::CellOccupied { position } => {
                write!(f, "Cell {position} is already occupied")
            }
            BoardError::NotPlayable { position } => {
                write!(f, "Cell {position} has no piece below it")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for board notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Wrong number of `/`-separated rows
    WrongRowCount { found: usize },
    /// A row with the wrong number of cells
    WrongRowLength { row: usize, found: usize },
    /// Unknown cell character
    InvalidCell { char: char },
    /// A piece with an empty cell below it
    FloatingPiece { position: Position },
    /// Piece counts no game can reach (A moves first)
    BadPieceCounts { a: u32, b: u32 },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::WrongRowCount { found } => {
                write!(f, "Board notation must have 6 rows, found {found}")
            }
            NotationError::WrongRowLength { row, found } => {
                write!(f, "Row {row} must have 7 cells, found {found}")
            }
            NotationError::InvalidCell { char } => {
                write!(f, "Invalid cell character '{char}' in board notation")
            }
            NotationError::FloatingPiece { position } => {
                write!(f, "Piece on {position} has an empty cell below it")
            }
            NotationError::BadPieceCounts { a, b } => {
                write!(f, "Unreachable piece counts: {a} x, {b} o")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for cell notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Invalid cell notation (expected e.g. `d1`)
    InvalidNotation { notation: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::InvalidNotation { notation } => {
                write!(f, "Invalid cell notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for invalid search parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// Search depth must be at least one ply
    ZeroPly,
    /// Run weights must grow strictly with run length
    RunWeightsNotIncreasing { two: i32, three: i32, four: i32 },
    /// Column weights must mirror around the central column
    ColumnWeightsNotSymmetric { column: usize },
    /// Column weights must not grow away from the centre
    ColumnWeightsNotCentred { column: usize },
    /// Heuristic scores could reach the win sentinel range
    WeightsTooLarge { bound: i64 },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::ZeroPly => write!(f, "Search depth must be at least 1 ply"),
            ParamsError::RunWeightsNotIncreasing { two, three, four } => write!(
                f,
                "Run weights must be strictly increasing, got {two}/{three}/{four}"
            ),
            ParamsError::ColumnWeightsNotSymmetric { column } => {
                write!(f, "Column weight {column} does not mirror its partner")
            }
            ParamsError::ColumnWeightsNotCentred { column } => {
                write!(f, "Column weight {column} exceeds the weight nearer the centre")
            }
            ParamsError::WeightsTooLarge { bound } => {
                write!(f, "Evaluation bound {bound} overlaps the win score range")
            }
        }
    }
}

impl std::error::Error for ParamsError {}

/// Error type for search requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The board is full, so there is nothing to play
    NoLegalMoves,
    /// The search parameters were rejected
    InvalidParams(ParamsError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoLegalMoves => write!(f, "No legal moves: the board is full"),
            SearchError::InvalidParams(e) => write!(f, "Invalid search parameters: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::InvalidParams(e) => Some(e),
            SearchError::NoLegalMoves => None,
        }
    }
}

impl From<ParamsError> for SearchError {
    fn from(e: ParamsError) -> Self {
        SearchError::InvalidParams(e)
    }
}
