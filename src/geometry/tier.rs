//! Static cell-importance classification
//!
//! Used only to break ties in the positional evaluator. The ranking is
//! Corner > InnerCore > Edge > Surface, encoded in the variant order so
//! the derived `Ord` matches.

use crate::board::Cell;

/// Structural importance of a cell, by position in the cube.
///
/// Corners and inner-core cells each sit on 7 winning lines, edge and
/// surface cells on 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Outer-face cell away from any cube edge (one coordinate at 0 or 3)
    Surface,
    /// Cell on a cube edge, corners excluded (two extreme coordinates)
    Edge,
    /// One of the 8 interior cells (no extreme coordinate)
    InnerCore,
    /// One of the 8 cube corners (all coordinates extreme)
    Corner,
}

/// Classify a cell by how many of its coordinates are extreme (0 or 3)
#[inline]
pub fn tier(cell: Cell) -> Tier {
    let extremes = [cell.x(), cell.y(), cell.z()]
        .iter()
        .filter(|&&v| v == 0 || v == 3)
        .count();
    match extremes {
        3 => Tier::Corner,
        2 => Tier::Edge,
        1 => Tier::Surface,
        _ => Tier::InnerCore,
    }
}
