//! Bitboard implementation for fast occupancy tests

use super::{Cell, TOTAL_CELLS};

/// Occupancy set for one side. The 64-cell cube fits a single `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set the bit for a cell
    #[inline]
    pub fn set(&mut self, cell: Cell) {
        self.bits |= 1u64 << cell.index();
    }

    /// Clear the bit for a cell
    #[inline]
    pub fn clear(&mut self, cell: Cell) {
        self.bits &= !(1u64 << cell.index());
    }

    /// Check whether the cell's bit is set
    #[inline]
    pub fn get(&self, cell: Cell) -> bool {
        (self.bits >> cell.index()) & 1 == 1
    }

    /// Count occupied cells (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over occupied cells in ascending index order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        debug_assert!(idx < TOTAL_CELLS);
        Some(Cell::from_index(idx))
    }
}
