use std::fmt::Write;

use crossterm::style::Stylize;

use crate::board::{Board, Cell, SIZE};
use crate::geometry::Line;

/// Render the board as four z-layers side by side.
///
/// The header rows give the z (layer) and y (column) indices; each body
/// row is prefixed with its x index. The last human and engine moves
/// are highlighted green and red, and a completed winning line yellow.
pub fn render_board(
    board: &Board,
    last_human: Option<Cell>,
    last_engine: Option<Cell>,
    winning_line: Option<&Line>,
) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "          0                1                2                3"
    );
    let _ = writeln!(
        out,
        "    0   1   2   3    0   1   2   3    0   1   2   3    0   1   2   3"
    );

    for x in 0..SIZE as u8 {
        let mut parts = vec![format!("{x}")];
        for z in 0..SIZE as u8 {
            let mut row = Vec::with_capacity(SIZE);
            for y in 0..SIZE as u8 {
                let cell = Cell::new(x, y, z);
                let glyph = match board.get(cell) {
                    Some(mark) => mark.glyph(),
                    None => ' ',
                };
                let styled = if winning_line.is_some_and(|line| line.contains(cell)) {
                    format!(" {} ", glyph.yellow())
                } else if last_human == Some(cell) {
                    format!(" {} ", glyph.green())
                } else if last_engine == Some(cell) {
                    format!(" {} ", glyph.red())
                } else {
                    format!(" {glyph} ")
                };
                row.push(styled);
            }
            parts.push(row.join("|"));
        }
        let _ = writeln!(out, "{}", parts.join("  "));
        if x < SIZE as u8 - 1 {
            let rule = ["---"; 4].join("+");
            let _ = writeln!(out, "   {}", [rule.as_str(); 4].join("  "));
        }
    }
    out.push('\n');
    out
}

/// Announce the engine's move in `zyx` form.
pub fn describe_move(cell: Cell) -> String {
    format!("Computer's move: {} ({})", cell, cell.index())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;
    use crate::geometry::all_lines;

    #[test]
    fn test_render_empty_board_shape() {
        let out = render_board(&Board::new(), None, None, None);
        // 2 header rows, 4 body rows, 3 separators, trailing blank line
        assert_eq!(out.lines().count(), 9);
        assert!(!out.contains('X'));
        assert!(!out.contains('O'));
    }

    #[test]
    fn test_render_shows_marks() {
        let board = Board::new()
            .apply(Cell::new(0, 0, 0), Mark::X)
            .unwrap()
            .apply(Cell::new(3, 3, 3), Mark::O)
            .unwrap();
        let out = render_board(&board, None, None, None);
        assert!(out.contains('X'));
        assert!(out.contains('O'));
    }

    #[test]
    fn test_render_highlights_last_moves() {
        let cell = Cell::new(1, 2, 3);
        let board = Board::new().apply(cell, Mark::X).unwrap();
        let plain = render_board(&board, None, None, None);
        let colored = render_board(&board, Some(cell), None, None);
        assert_ne!(plain, colored);
    }

    #[test]
    fn test_render_highlights_winning_line() {
        let line = &all_lines()[0];
        let mut board = Board::new();
        for &cell in line.cells() {
            board = board.apply(cell, Mark::O).unwrap();
        }
        let plain = render_board(&board, None, None, None);
        let colored = render_board(&board, None, None, Some(line));
        assert_ne!(plain, colored);
    }

    #[test]
    fn test_describe_move_uses_zyx() {
        assert_eq!(describe_move(Cell::new(3, 1, 0)), "Computer's move: 013 (52)");
    }
}
