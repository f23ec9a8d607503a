//! Fixed cube geometry: winning lines and cell tiers
//!
//! Everything in this module is computed once and immutable afterwards.
//! Search and evaluation thread it through as shared read-only data;
//! per-search pruning works on filtered copies, never on the table.

pub mod lines;
pub mod tier;

// Re-exports
pub use lines::{all_lines, lines_through, Line, LineId, LINE_COUNT};
pub use tier::{tier, Tier};
