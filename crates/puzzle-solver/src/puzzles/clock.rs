//! A clock face with `hours` positions; each move turns the hand one hour
//! forwards or backwards.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::configuration::Configuration;
use crate::error::PuzzleError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockPuzzle {
    pub hours: u32,
    pub target: u32,
}

impl ClockPuzzle {
    pub fn new(hours: u32, target: u32) -> Result<Self, PuzzleError> {
        if hours == 0 {
            return Err(PuzzleError::invalid("a clock needs at least one hour"));
        }
        if !(1..=hours).contains(&target) {
            return Err(PuzzleError::invalid(format!(
                "target hour {} is not on a {}-hour clock",
                target, hours
            )));
        }
        Ok(Self { hours, target })
    }

    /// The configuration with the hand at `hour`
    pub fn start(self: &Arc<Self>, hour: u32) -> Result<ClockConfig, PuzzleError> {
        if !(1..=self.hours).contains(&hour) {
            return Err(PuzzleError::invalid(format!(
                "start hour {} is not on a {}-hour clock",
                hour, self.hours
            )));
        }
        Ok(ClockConfig::new(Arc::clone(self), hour))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClockConfig {
    #[serde(skip)]
    puzzle: Arc<ClockPuzzle>,
    hour: u32,
}

impl ClockConfig {
    pub fn new(puzzle: Arc<ClockPuzzle>, hour: u32) -> Self {
        Self { puzzle, hour }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn puzzle(&self) -> &ClockPuzzle {
        &self.puzzle
    }

    fn with_hour(&self, hour: u32) -> Self {
        Self {
            puzzle: Arc::clone(&self.puzzle),
            hour,
        }
    }
}

impl Configuration for ClockConfig {
    fn is_solution(&self) -> bool {
        self.hour == self.puzzle.target
    }

    fn neighbors(&self) -> Vec<Self> {
        let hours = self.puzzle.hours;
        let back = if self.hour <= 1 { hours } else { self.hour - 1 };
        let forward = if self.hour >= hours { 1 } else { self.hour + 1 };

        // one- and two-hour clocks fold both moves onto the same hour
        let mut neighbors = Vec::with_capacity(2);
        if back != self.hour {
            neighbors.push(self.with_hour(back));
        }
        if forward != self.hour && forward != back {
            neighbors.push(self.with_hour(forward));
        }
        neighbors
    }
}

impl PartialEq for ClockConfig {
    fn eq(&self, other: &Self) -> bool {
        self.hour == other.hour
            && (Arc::ptr_eq(&self.puzzle, &other.puzzle) || self.puzzle == other.puzzle)
    }
}

impl Eq for ClockConfig {}

impl Hash for ClockConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hour.hash(state);
    }
}

impl fmt::Display for ClockConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn clock(hours: u32, start: u32, target: u32) -> ClockConfig {
        let puzzle = Arc::new(ClockPuzzle::new(hours, target).unwrap());
        puzzle.start(start).unwrap()
    }

    fn hours_of(path: &[ClockConfig]) -> Vec<u32> {
        path.iter().map(ClockConfig::hour).collect()
    }

    #[test]
    fn test_twelve_hour_clock() {
        let path = solve(&clock(12, 7, 12));
        assert_eq!(hours_of(&path), vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_wraps_backwards_when_shorter() {
        let path = solve(&clock(12, 2, 11));
        assert_eq!(hours_of(&path), vec![2, 1, 12, 11]);
    }

    #[test]
    fn test_neighbors_wrap_at_both_ends() {
        let mut top = hours_of(&clock(12, 12, 3).neighbors());
        top.sort();
        assert_eq!(top, vec![1, 11]);

        let mut bottom = hours_of(&clock(12, 1, 3).neighbors());
        bottom.sort();
        assert_eq!(bottom, vec![2, 12]);
    }

    #[test]
    fn test_small_clocks_have_no_self_or_duplicate_neighbors() {
        assert!(clock(1, 1, 1).neighbors().is_empty());
        assert_eq!(hours_of(&clock(2, 1, 2).neighbors()), vec![2]);
    }

    #[test]
    fn test_independent_definitions_compare_equal() {
        let a = clock(12, 5, 9);
        let b = clock(12, 5, 9);
        assert_eq!(a, b);
        assert_ne!(a, clock(12, 6, 9));
        assert_ne!(a, clock(10, 5, 9));
    }

    #[test]
    fn test_invalid_definitions() {
        assert!(ClockPuzzle::new(0, 1).is_err());
        assert!(ClockPuzzle::new(12, 13).is_err());
        let puzzle = Arc::new(ClockPuzzle::new(12, 3).unwrap());
        assert!(puzzle.start(0).is_err());
    }

    proptest! {
        #[test]
        fn prop_path_length_is_circular_distance(
            hours in 1u32..40,
            start_seed in 0u32..40,
            target_seed in 0u32..40,
        ) {
            let start = start_seed % hours + 1;
            let target = target_seed % hours + 1;
            let diff = start.abs_diff(target);
            let expected = diff.min(hours - diff) as usize;

            let path = solve(&clock(hours, start, target));
            prop_assert_eq!(path.len(), expected + 1);
            prop_assert_eq!(path[0].hour(), start);
            prop_assert_eq!(path[expected].hour(), target);
        }

        #[test]
        fn prop_rebuilt_configs_share_a_set_slot(hours in 1u32..40, seed in 0u32..40) {
            let hour = seed % hours + 1;
            let set: HashSet<ClockConfig> =
                [clock(hours, hour, 1), clock(hours, hour, 1)].into_iter().collect();
            prop_assert_eq!(set.len(), 1);
        }
    }
}
