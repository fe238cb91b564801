//! Shortest-path puzzle solving over implicit state spaces.
//!
//! A puzzle state implements [`Configuration`]: it knows whether it is a
//! solution and which states one move away. [`solve`] runs a breadth-first
//! search from a start state and returns a minimal sequence of states ending
//! in a solution, or an empty vector if none is reachable.
//!
//! Four puzzles ship with the crate: a clock, water buckets, tip-over and
//! lunar landing. The grid puzzles can be loaded from board files with the
//! [`loader`] module.

pub mod configuration;
pub mod coordinates;
pub mod error;
pub mod grid;
pub mod loader;
pub mod puzzles;
pub mod solver;

// Re-export main types
pub use configuration::Configuration;
pub use coordinates::{Coordinates, Direction};
pub use error::PuzzleError;
pub use grid::Grid;
pub use puzzles::{
    ClockConfig, ClockPuzzle, LunarConfig, LunarPuzzle, TipOverConfig, TipOverPuzzle, WaterConfig,
    WaterPuzzle,
};
pub use solver::{next_step, solve, solve_with_stats, SearchStats, SolverResult};
