//! Board structure with per-side move history

use crate::error::Error;

use super::bitboard::Bitboard;
use super::{Cell, Mark, TOTAL_CELLS};

/// Game board: two disjoint occupancy sets plus move order per side.
///
/// The history records the order cells were taken in; it only matters for
/// rendering the last move, never for search. Search works on transient
/// copies produced by [`Board::apply`], so the live game board is never
/// mutated mid-search.
#[derive(Debug, Clone, Default)]
pub struct Board {
    /// X occupancy
    x: Bitboard,
    /// O occupancy
    o: Bitboard,
    /// Cells taken by X, in move order
    x_moves: Vec<Cell>,
    /// Cells taken by O, in move order
    o_moves: Vec<Cell>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
            x_moves: Vec::with_capacity(TOTAL_CELLS / 2),
            o_moves: Vec::with_capacity(TOTAL_CELLS / 2),
        }
    }

    /// Get the mark at a cell, if any
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        if self.x.get(cell) {
            Some(Mark::X)
        } else if self.o.get(cell) {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Check if a cell is unoccupied
    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        !self.x.get(cell) && !self.o.get(cell)
    }

    /// Pure state transition: a new board with `cell` taken by `side`.
    ///
    /// Rejects occupied cells; the caller validates user input before
    /// calling, so hitting the error is a caller contract violation.
    pub fn apply(&self, cell: Cell, side: Mark) -> Result<Board, Error> {
        if !self.is_empty(cell) {
            return Err(Error::OccupiedCell(cell));
        }
        let mut next = self.clone();
        match side {
            Mark::X => {
                next.x.set(cell);
                next.x_moves.push(cell);
            }
            Mark::O => {
                next.o.set(cell);
                next.o_moves.push(cell);
            }
        }
        Ok(next)
    }

    /// Occupancy set for a side
    #[inline]
    pub fn marks(&self, side: Mark) -> &Bitboard {
        match side {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Number of marks of a side on a cell set given as a slice
    #[inline]
    pub fn count_on(&self, cells: &[Cell], side: Mark) -> u8 {
        let bb = self.marks(side);
        cells.iter().filter(|&&c| bb.get(c)).count() as u8
    }

    /// Last cell taken by a side, if it has moved
    #[inline]
    pub fn last_move(&self, side: Mark) -> Option<Cell> {
        match side {
            Mark::X => self.x_moves.last().copied(),
            Mark::O => self.o_moves.last().copied(),
        }
    }

    /// Total occupied cells
    #[inline]
    pub fn occupied(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    /// Iterate over all empty cells in ascending index order
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..TOTAL_CELLS)
            .map(Cell::from_index)
            .filter(move |&c| self.is_empty(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sets_mark() {
        let board = Board::new();
        let c = Cell::new(0, 0, 0);
        let board = board.apply(c, Mark::X).unwrap();
        assert_eq!(board.get(c), Some(Mark::X));
        assert_eq!(board.occupied(), 1);
        assert_eq!(board.last_move(Mark::X), Some(c));
        assert_eq!(board.last_move(Mark::O), None);
    }

    #[test]
    fn test_apply_rejects_occupied() {
        let board = Board::new().apply(Cell::new(1, 1, 1), Mark::X).unwrap();
        let err = board.apply(Cell::new(1, 1, 1), Mark::O).unwrap_err();
        assert!(matches!(err, Error::OccupiedCell(_)));
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let board = Board::new();
        let _next = board.apply(Cell::new(2, 2, 2), Mark::O).unwrap();
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_sides_stay_disjoint() {
        let mut board = Board::new();
        for idx in 0..10 {
            let side = if idx % 2 == 0 { Mark::X } else { Mark::O };
            board = board.apply(Cell::from_index(idx), side).unwrap();
        }
        for idx in 0..10 {
            let c = Cell::from_index(idx);
            let expect = if idx % 2 == 0 { Mark::X } else { Mark::O };
            assert_eq!(board.get(c), Some(expect));
        }
        assert_eq!(board.occupied(), 10);
    }

    #[test]
    fn test_empty_cells_iteration() {
        let board = Board::new().apply(Cell::from_index(0), Mark::X).unwrap();
        let empties: Vec<Cell> = board.empty_cells().collect();
        assert_eq!(empties.len(), 63);
        assert!(!empties.contains(&Cell::from_index(0)));
    }

    #[test]
    fn test_count_on_slice() {
        let board = Board::new()
            .apply(Cell::from_index(0), Mark::X)
            .unwrap()
            .apply(Cell::from_index(1), Mark::X)
            .unwrap()
            .apply(Cell::from_index(2), Mark::O)
            .unwrap();
        let cells = [
            Cell::from_index(0),
            Cell::from_index(1),
            Cell::from_index(2),
            Cell::from_index(3),
        ];
        assert_eq!(board.count_on(&cells, Mark::X), 2);
        assert_eq!(board.count_on(&cells, Mark::O), 1);
    }
}
