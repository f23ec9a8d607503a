//! Search module for the 4x4x4 engine
//!
//! Contains the forced-outcome search: a depth-bounded branch-and-bound
//! over live pairs that proves or disproves forced wins.

pub mod forced;

pub use forced::{ForcedOutcome, ForcedWinSearcher, FORCED_LOSS, NO_FORCED_WIN};
