//! Console front-end for the 4x4x4 game
//!
//! Renders the four z-layers side by side and reads moves as
//! three-digit `zyx` strings.

mod input;
mod render;

pub use input::parse_move;
pub use render::{describe_move, render_board};
