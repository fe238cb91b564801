//! Tip-over: a tipper walks across the tops of crate stacks toward a goal.
//!
//! Standing on a stack of height 1 the tipper steps to any adjacent non-empty
//! cell. Standing on a taller stack it can only tip that stack over: the stack
//! lies down along the chosen direction, turning the `height` cells beyond it
//! into height-1 crates and leaving an empty cell behind. Tipping needs every
//! one of those cells on the board and empty.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::configuration::Configuration;
use crate::coordinates::{Coordinates, Direction};
use crate::grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipOverPuzzle {
    pub goal: Coordinates,
}

#[derive(Debug, Clone, Serialize)]
pub struct TipOverConfig {
    #[serde(skip)]
    puzzle: Arc<TipOverPuzzle>,
    heights: Grid<u32>,
    actor: Coordinates,
    /// Height of the stack under the actor
    height: u32,
    /// Whether the move that produced this configuration tipped a stack
    tipped: bool,
}

impl TipOverConfig {
    pub fn new(puzzle: Arc<TipOverPuzzle>, heights: Grid<u32>, actor: Coordinates) -> Self {
        let height = heights.get(actor).copied().unwrap_or(0);
        Self {
            puzzle,
            heights,
            actor,
            height,
            tipped: false,
        }
    }

    pub fn heights(&self) -> &Grid<u32> {
        &self.heights
    }

    pub fn actor(&self) -> Coordinates {
        self.actor
    }

    pub fn goal(&self) -> Coordinates {
        self.puzzle.goal
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tipped(&self) -> bool {
        self.tipped
    }

    /// The configuration after one move in a cardinal `direction`, if legal.
    pub fn step(&self, direction: Direction) -> Option<Self> {
        if !direction.is_cardinal() {
            return None;
        }
        if self.height <= 1 {
            self.walk(direction)
        } else {
            self.tip(direction)
        }
    }

    fn walk(&self, direction: Direction) -> Option<Self> {
        let destination = self.actor.step(direction, 1);
        let height = *self.heights.get(destination)?;
        if height == 0 {
            return None;
        }
        Some(Self {
            puzzle: Arc::clone(&self.puzzle),
            heights: self.heights.clone(),
            actor: destination,
            height,
            tipped: false,
        })
    }

    fn tip(&self, direction: Direction) -> Option<Self> {
        // a stack longer than the board can never lie down on it
        let span = self.heights.rows().max(self.heights.cols());
        if self.height as usize > span {
            return None;
        }
        let reach = i32::try_from(self.height).ok()?;
        if !self.heights.contains(self.actor.step(direction, reach)) {
            return None;
        }

        let trail: SmallVec<[Coordinates; 8]> = (1..=reach)
            .map(|distance| self.actor.step(direction, distance))
            .collect();
        if !trail.iter().all(|&cell| self.heights.get(cell) == Some(&0)) {
            return None;
        }

        let mut heights = self.heights.with(self.actor, 0);
        for &cell in &trail {
            heights.set(cell, 1);
        }
        Some(Self {
            puzzle: Arc::clone(&self.puzzle),
            heights,
            actor: trail[0],
            height: 1,
            tipped: true,
        })
    }
}

impl Configuration for TipOverConfig {
    fn is_solution(&self) -> bool {
        self.actor == self.puzzle.goal
    }

    fn neighbors(&self) -> Vec<Self> {
        Direction::CARDINAL
            .iter()
            .filter_map(|&direction| self.step(direction))
            .filter(|next| next.height > 0)
            .collect()
    }
}

// `height` is derived from the grid and `tipped` never affects later moves,
// so neither takes part in equality.
impl PartialEq for TipOverConfig {
    fn eq(&self, other: &Self) -> bool {
        self.actor == other.actor
            && self.heights == other.heights
            && (Arc::ptr_eq(&self.puzzle, &other.puzzle) || self.puzzle == other.puzzle)
    }
}

impl Eq for TipOverConfig {}

impl Hash for TipOverConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.actor.hash(state);
        self.heights.hash(state);
    }
}

impl fmt::Display for TipOverConfig {
    /// Column header, then one line per row. `*` marks the tipper, `!` the
    /// goal and `_` an empty cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for c in 0..self.heights.cols() {
            write!(f, "{:>3}", c)?;
        }
        write!(f, "\n    {}", "___".repeat(self.heights.cols()))?;

        for (r, row) in self.heights.iter_rows().enumerate() {
            write!(f, "\n{:>2} |", r)?;
            for (c, height) in row.iter().enumerate() {
                let here = Coordinates::new(r as i32, c as i32);
                let marker = if here == self.actor {
                    '*'
                } else if here == self.puzzle.goal {
                    '!'
                } else {
                    ' '
                };
                if *height == 0 {
                    write!(f, " {}_", marker)?;
                } else {
                    write!(f, " {}{}", marker, height)?;
                }
            }
        }
        Ok(())
    }
}
