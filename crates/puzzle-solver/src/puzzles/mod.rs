//! Concrete puzzles. Each pairs an immutable definition, shared by every
//! state of one run, with a configuration type that implements the move rule.

pub mod clock;
pub mod lunar;
pub mod tipover;
pub mod water;

pub use clock::{ClockConfig, ClockPuzzle};
pub use lunar::{LunarConfig, LunarPuzzle};
pub use tipover::{TipOverConfig, TipOverPuzzle};
pub use water::{WaterConfig, WaterPuzzle};
