//! Crate error type
//!
//! Every variant is a caller contract violation, not a recoverable
//! runtime condition: the console layer validates input before the core
//! is called, and the game loop checks for terminal positions before
//! asking for a move.

use crate::board::Cell;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A coordinate outside the cube or a malformed `zyx` string
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
    /// `Board::apply` was called on an occupied cell
    #[error("cell {0} is already occupied")]
    OccupiedCell(Cell),
    /// `select_move` was called on a full board
    #[error("no legal move: board is full")]
    NoLegalMove,
}
