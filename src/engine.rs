//! Main engine integrating search and evaluation
//!
//! Move selection runs a fixed priority ladder each turn:
//!
//! 1. **Forced win**: prove a win for the side to move and play its
//!    first cell
//! 2. **Block**: the search reported an opponent line one cell from
//!    completion, or the opponent has a provable forced win; take the
//!    cell it needs
//! 3. **Heuristic with post-check**: take the evaluator's cell, unless
//!    simulating it hands the opponent a forced win, in which case take
//!    that win's first cell instead
//!
//! The engine holds no game state; each call is a pure function of the
//! board passed in.

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Cell, Mark};
use crate::error::Error;
use crate::eval::best_cell;
use crate::rules::is_full;
use crate::search::ForcedWinSearcher;

/// Which phase of the ladder produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// A line of ours was one cell from completion
    ImmediateWin,
    /// Forced win proven by the live-pair search
    ForcedWin,
    /// Defensive move denying the opponent a win
    Block,
    /// Positional evaluator fallback
    Heuristic,
}

/// A selected move with search statistics
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// The cell to play
    pub cell: Cell,
    /// Which phase found it
    pub search_type: SearchType,
    /// Proven win depth in searcher moves, when one exists
    pub depth: Option<u8>,
    /// Nodes visited across all searches this turn
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Move-selection engine for 4x4x4 tic-tac-toe
pub struct Engine {
    searcher: ForcedWinSearcher,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: ForcedWinSearcher::new(),
        }
    }

    /// Select a move for `side`.
    ///
    /// The only failure is calling on a full board, which the caller is
    /// expected to rule out via [`is_full`] beforehand.
    pub fn select_move(&mut self, board: &Board, side: Mark) -> Result<MoveResult, Error> {
        if is_full(board) {
            return Err(Error::NoLegalMove);
        }

        let start = Instant::now();
        let mut nodes = 0u64;
        let rival = side.opponent();

        // 1. Forced win for the side to move
        let own = self.searcher.search(board, side);
        nodes += self.searcher.nodes();
        if own.is_win() {
            if let Some(cell) = own.cell {
                let search_type = if own.depth == 0 {
                    SearchType::ImmediateWin
                } else {
                    SearchType::ForcedWin
                };
                debug!(?side, %cell, depth = own.depth, "playing proven win");
                return Ok(MoveResult {
                    cell,
                    search_type,
                    depth: Some(own.depth),
                    nodes,
                    time_ms: start.elapsed().as_millis() as u64,
                });
            }
        }

        // 2a. The search itself found an opponent line one cell from
        // completion: nothing but the block is safe.
        if own.must_block() {
            if let Some(cell) = own.cell {
                debug!(?side, %cell, "blocking completed-line threat");
                return Ok(MoveResult {
                    cell,
                    search_type: SearchType::Block,
                    depth: None,
                    nodes,
                    time_ms: start.elapsed().as_millis() as u64,
                });
            }
        }

        // 2b. Opponent forced win from the current position: deny its
        // first cell.
        let theirs = self.searcher.search(board, rival);
        nodes += self.searcher.nodes();
        if theirs.is_win() {
            if let Some(cell) = theirs.cell {
                debug!(?side, %cell, depth = theirs.depth, "blocking opponent forced win");
                return Ok(MoveResult {
                    cell,
                    search_type: SearchType::Block,
                    depth: None,
                    nodes,
                    time_ms: start.elapsed().as_millis() as u64,
                });
            }
        }

        // 3. Heuristic cell, re-checked: simulating it must not leave
        // the opponent a provable win.
        let candidate = best_cell(board, side).ok_or(Error::NoLegalMove)?;
        let after = board.apply(candidate, side)?;
        let counter = self.searcher.search(&after, rival);
        nodes += self.searcher.nodes();
        if counter.is_win() {
            if let Some(block) = counter.cell {
                if block != candidate && board.is_empty(block) {
                    debug!(?side, %block, "substituting block for heuristic cell");
                    return Ok(MoveResult {
                        cell: block,
                        search_type: SearchType::Block,
                        depth: None,
                        nodes,
                        time_ms: start.elapsed().as_millis() as u64,
                    });
                }
            }
        }

        debug!(?side, cell = %candidate, "playing heuristic cell");
        Ok(MoveResult {
            cell: candidate,
            search_type: SearchType::Heuristic,
            depth: None,
            nodes,
            time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
