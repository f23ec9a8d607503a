//! Forced-outcome search over live pairs
//!
//! Proves forced wins without full game-tree search by only expanding
//! moves on live pairs: lines holding exactly two of the searcher's marks
//! and none of the defender's. Playing one empty cell of such a line makes
//! a three-threat the defender must answer, and the modeled defender
//! always answers on the same line (the original engine's approximation;
//! a real opponent may play elsewhere, so a proven depth is a lower bound
//! on resistance, not a game-theoretic certainty).
//!
//! Depth values partition three ways:
//! - `< FORCED_LOSS`: proven win in that many additional searcher moves
//! - `FORCED_LOSS..NO_FORCED_WIN`: the defender is one cell from a
//!   completed line; the searcher can do nothing but block
//! - `NO_FORCED_WIN`: nothing proven within the bound

use tracing::trace;

use crate::board::{Board, Cell, Mark};
use crate::geometry::all_lines;
use crate::rules::{line_empties, signature};

/// Depths at or above this (and below [`NO_FORCED_WIN`]) mean the
/// defender threatens to complete a line first
pub const FORCED_LOSS: u8 = 100;

/// Initial search bound: larger than any reachable ply count
pub const NO_FORCED_WIN: u8 = 200;

/// Result of a forced-outcome search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForcedOutcome {
    /// Ply depth found, or a sentinel per the module-level partition
    pub depth: u8,
    /// First searcher move of the proven sequence, or the cell the
    /// searcher must block with when `depth` is in the blocking band
    pub cell: Option<Cell>,
}

impl ForcedOutcome {
    #[inline]
    fn not_found(bound: u8) -> Self {
        Self {
            depth: bound,
            cell: None,
        }
    }

    /// A win was proven within the bound
    #[inline]
    pub fn is_win(&self) -> bool {
        self.depth < FORCED_LOSS
    }

    /// The searcher cannot safely do anything except block
    #[inline]
    pub fn must_block(&self) -> bool {
        (FORCED_LOSS..NO_FORCED_WIN).contains(&self.depth)
    }
}

/// Searcher for forced outcomes, with node accounting
pub struct ForcedWinSearcher {
    /// Node counter for statistics
    nodes: u64,
}

impl ForcedWinSearcher {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Search for a forced win for `side` on `board`.
    ///
    /// Every hypothetical position is a fresh board copy; the caller's
    /// board is never touched.
    pub fn search(&mut self, board: &Board, side: Mark) -> ForcedOutcome {
        self.nodes = 0;
        let outcome = self.search_inner(board, side, 0, NO_FORCED_WIN);
        trace!(
            side = ?side,
            depth = outcome.depth,
            cell = ?outcome.cell,
            nodes = self.nodes,
            "forced search finished"
        );
        outcome
    }

    /// Recursive branch-and-bound step.
    ///
    /// `ply` counts searcher moves committed so far; `bound` is the best
    /// proven depth in any sibling branch, and branches are cut as soon
    /// as they can no longer beat it.
    fn search_inner(&mut self, board: &Board, side: Mark, ply: u8, bound: u8) -> ForcedOutcome {
        self.nodes += 1;
        let rival = side.opponent();

        // The defender one cell from completion overrides everything:
        // the searcher cannot commit to a plan of its own here.
        for line in all_lines() {
            let (mine, theirs) = signature(board, line, side);
            if theirs == 3 && mine == 0 {
                return ForcedOutcome {
                    depth: FORCED_LOSS.saturating_add(ply),
                    cell: line_empties(board, line).first().copied(),
                };
            }
        }

        // Immediate win: our own line one cell from completion
        for line in all_lines() {
            let (mine, theirs) = signature(board, line, side);
            if mine == 3 && theirs == 0 {
                return ForcedOutcome {
                    depth: ply,
                    cell: line_empties(board, line).first().copied(),
                };
            }
        }

        let mut best = ForcedOutcome::not_found(bound);

        // Expand only live pairs: each gives a three-threat whose forced
        // reply is the line's other empty cell.
        for line in all_lines() {
            let (mine, theirs) = signature(board, line, side);
            if mine != 2 || theirs != 0 {
                continue;
            }
            let empties = line_empties(board, line);
            debug_assert_eq!(empties.len(), 2);

            for (mv, reply) in [(empties[0], empties[1]), (empties[1], empties[0])] {
                // Branch cannot beat the best depth already proven
                if ply + 1 >= best.depth {
                    continue;
                }

                let next = match board.apply(mv, side).and_then(|b| b.apply(reply, rival)) {
                    Ok(b) => b,
                    Err(_) => continue,
                };

                let sub = self.search_inner(&next, side, ply + 1, best.depth);
                if sub.is_win() && sub.depth < best.depth {
                    best = ForcedOutcome {
                        depth: sub.depth,
                        cell: Some(mv),
                    };
                }
            }
        }

        best
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Default for ForcedWinSearcher {
    fn default() -> Self {
        Self::new()
    }
}
