//! Lunar landing: figures slide in a straight line until they bump into
//! another figure. The explorer has to come to rest on the landing pad.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::configuration::Configuration;
use crate::coordinates::{Coordinates, Direction};
use crate::grid::Grid;

/// Name given to the explorer by the board files
pub const DEFAULT_EXPLORER: &str = "E";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarPuzzle {
    pub rows: usize,
    pub cols: usize,
    /// Landing pad the explorer must reach
    pub goal: Coordinates,
    #[serde(default = "default_explorer")]
    pub explorer: String,
}

fn default_explorer() -> String {
    DEFAULT_EXPLORER.to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct LunarConfig {
    #[serde(skip)]
    puzzle: Arc<LunarPuzzle>,
    figures: BTreeMap<String, Coordinates>,
}

impl LunarConfig {
    pub fn new(puzzle: Arc<LunarPuzzle>, figures: BTreeMap<String, Coordinates>) -> Self {
        Self { puzzle, figures }
    }

    pub fn figures(&self) -> &BTreeMap<String, Coordinates> {
        &self.figures
    }

    pub fn puzzle(&self) -> &LunarPuzzle {
        &self.puzzle
    }

    pub fn explorer(&self) -> Option<Coordinates> {
        self.figures.get(&self.puzzle.explorer).copied()
    }

    /// Where `name` would stop sliding in `direction`, or `None` if nothing
    /// lies in its way before the edge of the board.
    pub fn slide_target(&self, name: &str, direction: Direction) -> Option<Coordinates> {
        if !direction.is_cardinal() {
            return None;
        }
        let start = *self.figures.get(name)?;
        let delta = direction.delta();

        // nearest figure strictly ahead on the same line
        let blocker = self
            .figures
            .iter()
            .filter(|(other, _)| other.as_str() != name)
            .filter_map(|(_, &pos)| {
                let offset = start.difference(pos);
                let aligned = if delta.row == 0 {
                    offset.row == 0
                } else {
                    offset.col == 0
                };
                let distance = offset.row * delta.row + offset.col * delta.col;
                (aligned && distance > 0).then_some(distance)
            })
            .min()?;

        // already touching, so there is no room to move
        if blocker == 1 {
            return None;
        }
        Some(start.step(direction, blocker - 1))
    }

    /// The configuration after sliding `name` in `direction`, if it moves.
    pub fn slide(&self, name: &str, direction: Direction) -> Option<Self> {
        let target = self.slide_target(name, direction)?;
        let mut figures = self.figures.clone();
        figures.insert(name.to_string(), target);
        Some(Self {
            puzzle: Arc::clone(&self.puzzle),
            figures,
        })
    }

    fn board(&self) -> Grid<char> {
        let mut board = Grid::new('_', self.puzzle.rows, self.puzzle.cols);
        board.set(self.puzzle.goal, '!');
        for (name, &pos) in &self.figures {
            board.set(pos, name.chars().next().unwrap_or('?'));
        }
        board
    }
}

impl Configuration for LunarConfig {
    fn is_solution(&self) -> bool {
        self.explorer() == Some(self.puzzle.goal)
    }

    fn neighbors(&self) -> Vec<Self> {
        let mut neighbors = Vec::new();
        for name in self.figures.keys() {
            for direction in Direction::CARDINAL {
                if let Some(next) = self.slide(name, direction) {
                    neighbors.push(next);
                }
            }
        }
        neighbors
    }
}

impl PartialEq for LunarConfig {
    fn eq(&self, other: &Self) -> bool {
        self.figures == other.figures
            && (Arc::ptr_eq(&self.puzzle, &other.puzzle) || self.puzzle == other.puzzle)
    }
}

impl Eq for LunarConfig {}

impl Hash for LunarConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.figures.hash(state);
    }
}

impl fmt::Display for LunarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.board();
        write!(f, "    ")?;
        for c in 0..board.cols() {
            write!(f, "{:>3}", c)?;
        }
        write!(f, "\n    {}", "___".repeat(board.cols()))?;
        for (r, row) in board.iter_rows().enumerate() {
            write!(f, "\n{:>2} |", r)?;
            for cell in row {
                write!(f, "{:>3}", cell)?;
            }
            write!(f, " |")?;
        }
        Ok(())
    }
}
