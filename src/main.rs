//! Console front-end for 4x4x4 tic-tac-toe
//!
//! The human plays X and moves first; the engine answers as O.

use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use cubic::ui::{describe_move, parse_move, render_board};
use cubic::{Board, Engine, Mark};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Welcome to 4x4x4 Tic-Tac-Toe!");
    println!("Enter moves as three digits (zyx, e.g., 000 or 333).");
    println!("The top most row of numbers (over the planes) are z.");
    println!("The row of numbers over the columns are y.");
    println!("The numbers at the start of each row are x.");
    println!("You are 'X', computer is 'O'.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut board = Board::new();
    let mut engine = Engine::new();

    loop {
        // Human turn
        loop {
            print!("{}", render_board(&board, board.last_move(Mark::X), board.last_move(Mark::O), None));
            print!("Your move (zyx): ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            match parse_move(&line?).and_then(|cell| board.apply(cell, Mark::X)) {
                Ok(next) => {
                    board = next;
                    break;
                }
                Err(err) => {
                    println!("Invalid move ({err}). Use three digits (0-3 each), e.g., '123' for layer 1, row 2, column 3.");
                }
            }
        }

        if let Some((_, line)) = cubic::rules::check_winner(&board) {
            println!("You win!");
            print!("{}", render_board(&board, board.last_move(Mark::X), board.last_move(Mark::O), Some(&line)));
            break;
        }
        if cubic::rules::is_full(&board) {
            println!("It's a tie!");
            print!("{}", render_board(&board, board.last_move(Mark::X), board.last_move(Mark::O), None));
            break;
        }

        // Engine turn
        let result = engine
            .select_move(&board, Mark::O)
            .map_err(|err| io::Error::other(err.to_string()))?;
        info!(
            cell = %result.cell,
            search_type = ?result.search_type,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "engine move"
        );
        board = board
            .apply(result.cell, Mark::O)
            .map_err(|err| io::Error::other(err.to_string()))?;
        println!("{}", describe_move(result.cell));

        if let Some((_, line)) = cubic::rules::check_winner(&board) {
            println!("Computer wins!");
            print!("{}", render_board(&board, board.last_move(Mark::X), board.last_move(Mark::O), Some(&line)));
            break;
        }
        if cubic::rules::is_full(&board) {
            println!("It's a tie!");
            print!("{}", render_board(&board, board.last_move(Mark::X), board.last_move(Mark::O), None));
            break;
        }
    }

    Ok(())
}
