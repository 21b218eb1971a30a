//! Common types for the game: coordinates and the error enums shared by
//! the board, the input client and the game loop.

#[cfg(feature = "std")]
use std::io;

/// A 1-based `(row, column)` pair addressing one of the board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

impl core::fmt::Display for Coord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column outside `1..=BOARD_SIZE`.
    OutOfBounds { row: usize, col: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate out of bounds: row={}, col={}", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned while capturing player input.
#[cfg(feature = "std")]
#[derive(Debug)]
pub enum ClientError {
    /// The input stream failed to read.
    Io(io::Error),
    /// The input stream was exhausted before a line was available.
    EndOfInput,
    /// `last_input` was called before anything was captured.
    NoInput,
}

#[cfg(feature = "std")]
impl From<io::Error> for ClientError {
    fn from(err: io::Error) -> Self {
        ClientError::Io(err)
    }
}

#[cfg(feature = "std")]
impl core::fmt::Display for ClientError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ClientError::Io(e) => write!(f, "Input error: {}", e),
            ClientError::EndOfInput => write!(f, "Input ended before a line was read"),
            ClientError::NoInput => write!(f, "No input has been captured yet"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors returned by the game loop.
#[cfg(feature = "std")]
#[derive(Debug)]
pub enum GameError {
    /// A player failed to provide input.
    Client(ClientError),
    /// Writing a prompt to the output sink failed.
    Io(io::Error),
}

#[cfg(feature = "std")]
impl From<ClientError> for GameError {
    fn from(err: ClientError) -> Self {
        GameError::Client(err)
    }
}

#[cfg(feature = "std")]
impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        GameError::Io(err)
    }
}

#[cfg(feature = "std")]
impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::Client(e) => write!(f, "Client error: {}", e),
            GameError::Io(e) => write!(f, "Output error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Client(e) => Some(e),
            GameError::Io(e) => Some(e),
        }
    }
}
