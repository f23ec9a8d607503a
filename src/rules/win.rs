//! Win condition checking over the fixed line table
//!
//! A side wins by holding all 4 cells of one of the 76 winning lines.
//! Lines holding marks of both sides are dead: they can never complete,
//! and both the search and the evaluator skip them.

use crate::board::{Board, Cell, Mark, TOTAL_CELLS};
use crate::geometry::{all_lines, Line};

/// Number of `side` marks on a line
#[inline]
pub fn count_marks(board: &Board, line: &Line, side: Mark) -> u8 {
    board.count_on(line.cells(), side)
}

/// Line signature: (marks of `side`, marks of its opponent)
#[inline]
pub fn signature(board: &Board, line: &Line, side: Mark) -> (u8, u8) {
    (
        count_marks(board, line, side),
        count_marks(board, line, side.opponent()),
    )
}

/// A line with marks of both sides can never be completed
#[inline]
pub fn is_dead(board: &Board, line: &Line) -> bool {
    count_marks(board, line, Mark::X) > 0 && count_marks(board, line, Mark::O) > 0
}

/// Empty cells of a line, in ascending index order (at most 4)
pub fn line_empties(board: &Board, line: &Line) -> Vec<Cell> {
    line.cells()
        .iter()
        .copied()
        .filter(|&c| board.is_empty(c))
        .collect()
}

/// Check for a completed line.
///
/// Returns the winning side and its line, or `None` when no line is
/// complete. At most one side can have a completed line in a reachable
/// position, so the first hit is returned.
pub fn check_winner(board: &Board) -> Option<(Mark, Line)> {
    for line in all_lines() {
        for side in [Mark::X, Mark::O] {
            if count_marks(board, line, side) == 4 {
                return Some((side, *line));
            }
        }
    }
    None
}

/// Check if every cell is occupied
#[inline]
pub fn is_full(board: &Board) -> bool {
    board.occupied() as usize == TOTAL_CELLS
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Place the given cells for one side on an otherwise untouched board
    fn setup_board(cells: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(idx, side) in cells {
            board = board.apply(Cell::from_index(idx), side).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        assert!(check_winner(&Board::new()).is_none());
    }

    #[test]
    fn test_winner_z_pillar() {
        let board = setup_board(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
            (16, Mark::O),
            (17, Mark::O),
            (18, Mark::O),
        ]);
        let (side, line) = check_winner(&board).unwrap();
        assert_eq!(side, Mark::X);
        let mut idx: Vec<usize> = line.cells().iter().map(|c| c.index()).collect();
        idx.sort_unstable();
        assert_eq!(idx, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_winner_space_diagonal() {
        let board = setup_board(&[(0, Mark::O), (21, Mark::O), (42, Mark::O), (63, Mark::O)]);
        let (side, line) = check_winner(&board).unwrap();
        assert_eq!(side, Mark::O);
        assert!(line.contains(Cell::from_index(21)));
    }

    #[test]
    fn test_three_marks_no_winner() {
        let board = setup_board(&[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
        assert!(check_winner(&board).is_none());
    }

    #[test]
    fn test_signature_and_dead() {
        let board = setup_board(&[(0, Mark::X), (1, Mark::O)]);
        let line = *all_lines()
            .iter()
            .find(|l| l.contains(Cell::from_index(0)) && l.contains(Cell::from_index(1)))
            .unwrap();
        assert_eq!(signature(&board, &line, Mark::X), (1, 1));
        assert!(is_dead(&board, &line));

        // A line untouched by O stays live
        let diag = *all_lines()
            .iter()
            .find(|l| l.contains(Cell::from_index(0)) && l.contains(Cell::from_index(63)))
            .unwrap();
        assert!(!is_dead(&board, &diag));
    }

    #[test]
    fn test_line_empties() {
        let board = setup_board(&[(0, Mark::X), (2, Mark::X)]);
        let line = *all_lines()
            .iter()
            .find(|l| {
                let mut idx: Vec<usize> = l.cells().iter().map(|c| c.index()).collect();
                idx.sort_unstable();
                idx == vec![0, 1, 2, 3]
            })
            .unwrap();
        let empties = line_empties(&board, &line);
        assert_eq!(
            empties,
            vec![Cell::from_index(1), Cell::from_index(3)]
        );
    }

    #[test]
    fn test_full_board_draw() {
        // Fill all 64 cells with an XOR coloring chosen so that no axis,
        // face-diagonal or space-diagonal run stays single-sided.
        const P: [u8; 4] = [0, 0, 0, 1];
        const Q: [u8; 4] = [0, 0, 1, 1];
        const R: [u8; 4] = [0, 1, 0, 1];
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            let cell = Cell::from_index(idx);
            let bit = P[cell.x() as usize] ^ Q[cell.y() as usize] ^ R[cell.z() as usize];
            let side = if bit == 0 { Mark::X } else { Mark::O };
            board = board.apply(cell, side).unwrap();
        }
        assert!(is_full(&board));
        assert!(check_winner(&board).is_none());
    }
}
