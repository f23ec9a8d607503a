//! Game rules for 4x4x4 tic-tac-toe
//!
//! Win and draw detection plus the line-signature helpers shared by the
//! search and the evaluator.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, count_marks, is_dead, is_full, line_empties, signature};
