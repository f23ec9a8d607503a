//! Board representation for 4x4x4 tic-tac-toe

pub mod bitboard;
pub mod board;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Cube side length
pub const SIZE: usize = 4;
pub const TOTAL_CELLS: usize = SIZE * SIZE * SIZE; // 64

/// Player marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character label used in rendering
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A cell of the cube, packed as `x * 16 + y * 4 + z`.
///
/// The packing is a total bijection with (x, y, z) triples in [0,4)^3;
/// the inverse is plain bit-masking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(u8);

impl Cell {
    #[inline]
    pub fn new(x: u8, y: u8, z: u8) -> Self {
        debug_assert!(x < SIZE as u8 && y < SIZE as u8 && z < SIZE as u8);
        Self(x * 16 + y * 4 + z)
    }

    /// Build from a raw index in [0, 64)
    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < TOTAL_CELLS);
        Self(idx as u8)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn x(self) -> u8 {
        (self.0 >> 4) & 3
    }

    #[inline]
    pub fn y(self) -> u8 {
        (self.0 >> 2) & 3
    }

    #[inline]
    pub fn z(self) -> u8 {
        self.0 & 3
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl std::fmt::Display for Cell {
    /// Renders in the human-facing `zyx` digit order
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.z(), self.y(), self.x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_packing_round_trip() {
        for idx in 0..TOTAL_CELLS {
            let c = Cell::from_index(idx);
            assert_eq!(Cell::new(c.x(), c.y(), c.z()), c);
            assert_eq!(c.index(), idx);
        }
    }

    #[test]
    fn test_cell_packing_bijective() {
        let mut seen = [false; TOTAL_CELLS];
        for x in 0..4 {
            for y in 0..4 {
                for z in 0..4 {
                    let idx = Cell::new(x, y, z).index();
                    assert!(!seen[idx], "two triples map to index {}", idx);
                    seen[idx] = true;
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_cell_coordinates() {
        let c = Cell::new(2, 1, 3);
        assert_eq!(c.index(), 2 * 16 + 1 * 4 + 3);
        assert_eq!((c.x(), c.y(), c.z()), (2, 1, 3));
    }

    #[test]
    fn test_mark_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_cell_display_zyx_order() {
        assert_eq!(Cell::new(3, 1, 0).to_string(), "013");
    }
}
