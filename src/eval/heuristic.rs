//! Heuristic cell scoring for positions without a provable forced win
//!
//! Each empty cell is scored by the signatures of the live lines through
//! it. The counters compare lexicographically in declaration order:
//! fresh lines first, then own singles, own pairs, rival pairs, rival
//! singles; a pair of our own outranks a rival pair to block. Dead lines
//! contribute nothing. Ties break by cell tier (corners and the inner
//! core first), then by lowest cell index.

use crate::board::{Board, Cell, Mark};
use crate::geometry::{all_lines, lines_through, tier};
use crate::rules::{is_dead, signature};

/// Five-counter signature of an empty cell over its live lines.
///
/// Field order is comparison order; the derived `Ord` is the whole
/// ranking rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CellScore {
    /// Live lines through the cell with no marks at all
    pub free: u8,
    /// Lines with exactly one of our marks (and none of theirs)
    pub mine_one: u8,
    /// Lines with exactly two of our marks: extending one makes a threat
    pub mine_two: u8,
    /// Lines with exactly two rival marks: taking the cell blocks them
    pub rival_two: u8,
    /// Lines with exactly one rival mark
    pub rival_one: u8,
}

/// Score one empty cell for `side`
pub fn score(board: &Board, cell: Cell, side: Mark) -> CellScore {
    let lines = all_lines();
    let mut s = CellScore::default();
    for &id in lines_through(cell) {
        let line = &lines[id];
        if is_dead(board, line) {
            continue;
        }
        match signature(board, line, side) {
            (0, 0) => s.free += 1,
            (1, 0) => s.mine_one += 1,
            (2, 0) => s.mine_two += 1,
            (0, 2) => s.rival_two += 1,
            (0, 1) => s.rival_one += 1,
            _ => {}
        }
    }
    s
}

/// Pick the best empty cell for `side`, or `None` on a full board.
///
/// Iterates cells in ascending index order with strict comparison, so
/// the lowest index wins among full ties.
pub fn best_cell(board: &Board, side: Mark) -> Option<Cell> {
    let mut best: Option<(CellScore, crate::geometry::Tier, Cell)> = None;

    for cell in board.empty_cells() {
        let key = (score(board, cell, side), tier(cell));
        let improves = best
            .as_ref()
            .map_or(true, |&(bs, bt, _)| key > (bs, bt));
        if improves {
            best = Some((key.0, key.1, cell));
        }
    }

    best.map(|(_, _, cell)| cell)
}
