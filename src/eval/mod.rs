//! Position evaluation for the fallback move choice

pub mod heuristic;

pub use heuristic::{best_cell, score, CellScore};
