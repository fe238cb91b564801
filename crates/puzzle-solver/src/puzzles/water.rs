//! Water buckets: fill, empty or pour between buckets of fixed capacity until
//! one of them holds the target amount.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::configuration::Configuration;
use crate::error::PuzzleError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterPuzzle {
    pub capacities: Vec<u32>,
    pub target: u32,
}

impl WaterPuzzle {
    pub fn new(capacities: Vec<u32>, target: u32) -> Result<Self, PuzzleError> {
        if capacities.is_empty() {
            return Err(PuzzleError::invalid("at least one bucket is required"));
        }
        if capacities.contains(&0) {
            return Err(PuzzleError::invalid("bucket capacities must be positive"));
        }
        Ok(Self { capacities, target })
    }

    /// The configuration with every bucket empty
    pub fn start_empty(self: &Arc<Self>) -> WaterConfig {
        WaterConfig::new(Arc::clone(self), vec![0; self.capacities.len()])
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WaterConfig {
    #[serde(skip)]
    puzzle: Arc<WaterPuzzle>,
    levels: Vec<u32>,
}

impl WaterConfig {
    /// `levels` must have one entry per bucket, each within its capacity.
    pub fn new(puzzle: Arc<WaterPuzzle>, levels: Vec<u32>) -> Self {
        Self { puzzle, levels }
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    pub fn puzzle(&self) -> &WaterPuzzle {
        &self.puzzle
    }

    fn with_levels(&self, levels: Vec<u32>) -> Self {
        Self {
            puzzle: Arc::clone(&self.puzzle),
            levels,
        }
    }

    /// Bucket `i` filled to capacity
    pub fn fill(&self, i: usize) -> Self {
        let mut levels = self.levels.clone();
        levels[i] = self.puzzle.capacities[i];
        self.with_levels(levels)
    }

    /// Bucket `i` poured out
    pub fn empty(&self, i: usize) -> Self {
        let mut levels = self.levels.clone();
        levels[i] = 0;
        self.with_levels(levels)
    }

    /// Pour from `from` into `to` until `from` is empty or `to` is full.
    pub fn transfer(&self, from: usize, to: usize) -> Self {
        let room = self.puzzle.capacities[to] - self.levels[to];
        let amount = self.levels[from].min(room);
        let mut levels = self.levels.clone();
        levels[from] -= amount;
        levels[to] += amount;
        self.with_levels(levels)
    }
}

impl Configuration for WaterConfig {
    fn is_solution(&self) -> bool {
        self.levels.contains(&self.puzzle.target)
    }

    fn neighbors(&self) -> Vec<Self> {
        let count = self.levels.len();
        let mut neighbors: Vec<Self> = Vec::new();
        let mut push = |candidate: Self| {
            if candidate != *self && !neighbors.contains(&candidate) {
                neighbors.push(candidate);
            }
        };

        for i in 0..count {
            if self.levels[i] < self.puzzle.capacities[i] {
                push(self.fill(i));
            }
            if self.levels[i] > 0 {
                push(self.empty(i));
            }
            for j in 0..count {
                // pouring between equal levels never produces a new state
                if i != j && self.levels[i] != self.levels[j] {
                    push(self.transfer(i, j));
                }
            }
        }
        neighbors
    }
}

impl PartialEq for WaterConfig {
    fn eq(&self, other: &Self) -> bool {
        self.levels == other.levels
            && (Arc::ptr_eq(&self.puzzle, &other.puzzle) || self.puzzle == other.puzzle)
    }
}

impl Eq for WaterConfig {}

impl Hash for WaterConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.levels.hash(state);
    }
}

impl fmt::Display for WaterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.levels)
    }
}
