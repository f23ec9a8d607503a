//! 4x4x4 Tic-Tac-Toe move-selection engine
//!
//! An engine for three-dimensional tic-tac-toe on a 4x4x4 cube:
//! - 64 cells addressed as `(x, y, z)` triples, each coordinate 0..4
//! - 76 winning lines: rows, columns, pillars, face diagonals and
//!   space diagonals
//! - First player to complete a line wins; a full board is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`geometry`]: The 76-line table and cell tiers
//! - [`rules`]: Win detection and line bookkeeping
//! - [`eval`]: Positional evaluation over line signatures
//! - [`search`]: Forced-win search over live pairs
//! - [`engine`]: Main engine integrating all components
//! - [`ui`]: Console rendering and move parsing
//!
//! # Quick Start
//!
//! ```
//! use cubic::{Board, Cell, Engine, Mark};
//!
//! let mut board = Board::new();
//! let mut engine = Engine::new();
//!
//! // Human opens in a corner
//! board = board.apply(Cell::new(0, 0, 0), Mark::X).unwrap();
//!
//! // Engine responds as O
//! let result = engine.select_move(&board, Mark::O).unwrap();
//! board = board.apply(result.cell, Mark::O).unwrap();
//! println!("Engine plays {}", result.cell);
//! ```
//!
//! # Search Priority
//!
//! Each turn the engine works down a fixed ladder:
//! 1. Immediate winning move
//! 2. Forced win proven over live pairs
//! 3. Block of an opponent threat or forced win
//! 4. Positional evaluation with tier tie-breaking

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod geometry;
pub mod rules;
pub mod search;
pub mod ui;

pub use board::{Board, Cell, Mark, SIZE, TOTAL_CELLS};
pub use engine::{Engine, MoveResult, SearchType};
pub use error::Error;
pub use geometry::{all_lines, lines_through, Line, Tier, LINE_COUNT};
pub use search::{ForcedOutcome, ForcedWinSearcher};
