//! Winning-line table for the 4x4x4 cube
//!
//! A winning line is 4 cells in a straight row along one of the 13
//! direction classes through the lattice: 3 axis-aligned, 6 face-diagonal
//! and 4 space-diagonal. For a 4-wide cube that enumeration yields exactly
//! 76 lines. The table is derived once, on first use, and never mutated.

use std::sync::OnceLock;

use crate::board::{Cell, SIZE, TOTAL_CELLS};

/// Number of winning lines in the 4x4x4 cube
pub const LINE_COUNT: usize = 76;

/// Index of a line within [`all_lines`]
pub type LineId = usize;

/// An unordered set of 4 distinct cells on a common straight line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    cells: [Cell; 4],
}

impl Line {
    #[inline]
    pub fn cells(&self) -> &[Cell; 4] {
        &self.cells
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

struct Geometry {
    lines: Vec<Line>,
    /// For every cell, the ids of the lines passing through it
    through: Vec<Vec<LineId>>,
}

static GEOMETRY: OnceLock<Geometry> = OnceLock::new();

/// The 76 winning lines, sorted by their (sorted) cell indices.
///
/// The sort makes iteration order stable across runs; callers must not
/// read any semantic meaning into it.
pub fn all_lines() -> &'static [Line] {
    &table().lines
}

/// Ids of the lines passing through a cell (7 for corner and inner-core
/// cells, 4 for edge and surface cells)
pub fn lines_through(cell: Cell) -> &'static [LineId] {
    &table().through[cell.index()]
}

fn table() -> &'static Geometry {
    GEOMETRY.get_or_init(build)
}

fn build() -> Geometry {
    let mut lines = generate_lines();
    lines.sort_by_key(|line| {
        let mut idx: [usize; 4] = [0; 4];
        for (slot, cell) in idx.iter_mut().zip(line.cells.iter()) {
            *slot = cell.index();
        }
        idx.sort_unstable();
        idx
    });
    debug_assert_eq!(lines.len(), LINE_COUNT);

    let mut through: Vec<Vec<LineId>> = vec![Vec::new(); TOTAL_CELLS];
    for (id, line) in lines.iter().enumerate() {
        for &cell in line.cells() {
            through[cell.index()].push(id);
        }
    }

    Geometry { lines, through }
}

/// Enumerate lines by walking each canonical direction from every start
/// point whose 4-step run stays inside the cube.
///
/// A direction is canonical when its first non-zero component is positive,
/// so each geometric line is produced exactly once.
fn generate_lines() -> Vec<Line> {
    let side = SIZE as i32;
    let mut lines = Vec::with_capacity(LINE_COUNT);

    for dir in canonical_directions() {
        for start_idx in 0..TOTAL_CELLS {
            let start = Cell::from_index(start_idx);
            let origin = [start.x() as i32, start.y() as i32, start.z() as i32];

            // Reject starts whose far end falls outside the cube
            let fits = origin
                .iter()
                .zip(dir.iter())
                .all(|(&o, &d)| (0..side).contains(&(o + d * (side - 1))));
            if !fits {
                continue;
            }

            let mut cells = [start; 4];
            for (step, slot) in cells.iter_mut().enumerate() {
                let p: Vec<i32> = origin
                    .iter()
                    .zip(dir.iter())
                    .map(|(&o, &d)| o + d * step as i32)
                    .collect();
                *slot = Cell::new(p[0] as u8, p[1] as u8, p[2] as u8);
            }
            lines.push(Line { cells });
        }
    }

    lines
}

/// The 13 canonical direction vectors: each component in {-1, 0, 1},
/// not all zero, first non-zero component positive.
fn canonical_directions() -> Vec<[i32; 3]> {
    let mut dirs = Vec::with_capacity(13);
    for dx in -1..=1 {
        for dy in -1..=1 {
            for dz in -1..=1 {
                let dir = [dx, dy, dz];
                let first = dir.iter().find(|&&d| d != 0);
                if first == Some(&1) {
                    dirs.push(dir);
                }
            }
        }
    }
    dirs
}
