//! Breadth-first search over any [`Configuration`].
//!
//! Edges are single moves and all cost the same, so the first solution
//! dequeued is a shortest one. The predecessor map doubles as the visited
//! set: a configuration is recorded the first time it is discovered and
//! never enqueued again.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::configuration::Configuration;

/// Counters collected during one search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every neighbor produced, duplicates included
    pub configs_generated: usize,
    /// Distinct configurations discovered, the start included
    pub configs_unique: usize,
    pub elapsed: Duration,
}

impl SearchStats {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}

/// Result of a search
#[derive(Debug, Clone)]
pub struct SolverResult<C> {
    /// Start to solution inclusive, or empty if no solution is reachable
    pub path: Vec<C>,
    pub stats: SearchStats,
}

impl<C> SolverResult<C> {
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves on the path
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Find a shortest path from `start` to any solution.
///
/// Returns an empty vector when the reachable state space holds no solution.
pub fn solve<C: Configuration>(start: &C) -> Vec<C> {
    solve_with_stats(start).path
}

/// Like [`solve`], but also reports how much of the state space was explored.
pub fn solve_with_stats<C: Configuration>(start: &C) -> SolverResult<C> {
    let start_time = Instant::now();
    let mut stats = SearchStats::default();

    let mut predecessors: HashMap<C, Option<C>> = HashMap::new();
    let mut queue: VecDeque<C> = VecDeque::new();

    predecessors.insert(start.clone(), None);
    queue.push_back(start.clone());
    debug!("search started");

    while let Some(current) = queue.pop_front() {
        if current.is_solution() {
            let path = reconstruct_path(&predecessors, current);
            stats.configs_unique = predecessors.len();
            stats.elapsed = start_time.elapsed();
            debug!(
                "solution found: moves={} generated={} unique={} elapsed_ms={}",
                path.len() - 1,
                stats.configs_generated,
                stats.configs_unique,
                stats.elapsed_ms()
            );
            return SolverResult { path, stats };
        }

        let neighbors = current.neighbors();
        trace!(
            "expanded configuration: neighbors={} queued={}",
            neighbors.len(),
            queue.len()
        );
        for neighbor in neighbors {
            stats.configs_generated += 1;
            if !predecessors.contains_key(&neighbor) {
                predecessors.insert(neighbor.clone(), Some(current.clone()));
                queue.push_back(neighbor);
            }
        }
    }

    stats.configs_unique = predecessors.len();
    stats.elapsed = start_time.elapsed();
    debug!(
        "search exhausted without solution: generated={} unique={} elapsed_ms={}",
        stats.configs_generated,
        stats.configs_unique,
        stats.elapsed_ms()
    );
    SolverResult {
        path: Vec::new(),
        stats,
    }
}

/// The configuration one move along a shortest route from `current`.
///
/// Re-solves from scratch every call. `None` if `current` is already a
/// solution or no solution is reachable.
pub fn next_step<C: Configuration>(current: &C) -> Option<C> {
    solve(current).into_iter().nth(1)
}

/// Walk the predecessor chain back to the start, then reverse it.
fn reconstruct_path<C: Configuration>(predecessors: &HashMap<C, Option<C>>, end: C) -> Vec<C> {
    let mut path = Vec::new();
    let mut node = Some(end);
    while let Some(config) = node {
        node = predecessors.get(&config).cloned().flatten();
        path.push(config);
    }
    path.reverse();
    path
}

/// Number of moves to the nearest solution, found by expanding whole layers
/// of the state space. Independent of `solve` so tests can compare the two.
#[cfg(test)]
pub(crate) fn layered_distance<C: Configuration>(start: &C) -> Option<usize> {
    use std::collections::HashSet;

    let mut seen: HashSet<C> = HashSet::from([start.clone()]);
    let mut layer = vec![start.clone()];
    let mut depth = 0;
    while !layer.is_empty() {
        if layer.iter().any(|config| config.is_solution()) {
            return Some(depth);
        }
        let mut next = Vec::new();
        for config in &layer {
            for neighbor in config.neighbors() {
                if seen.insert(neighbor.clone()) {
                    next.push(neighbor);
                }
            }
        }
        layer = next;
        depth += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A line graph 0..len where only `goal` is a solution
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Line {
        pos: u32,
        len: u32,
        goal: Option<u32>,
    }

    impl Configuration for Line {
        fn is_solution(&self) -> bool {
            self.goal == Some(self.pos)
        }

        fn neighbors(&self) -> Vec<Self> {
            let mut out = Vec::new();
            if self.pos > 0 {
                out.push(Line {
                    pos: self.pos - 1,
                    ..self.clone()
                });
            }
            if self.pos + 1 < self.len {
                out.push(Line {
                    pos: self.pos + 1,
                    ..self.clone()
                });
            }
            out
        }
    }

    #[test]
    fn test_path_runs_from_start_to_solution() {
        let start = Line {
            pos: 2,
            len: 10,
            goal: Some(7),
        };
        let result = solve_with_stats(&start);

        assert!(result.is_solved());
        assert_eq!(result.moves(), 5);
        assert_eq!(result.path.first(), Some(&start));
        assert!(result.path.last().unwrap().is_solution());
        for pair in result.path.windows(2) {
            assert!(pair[0].neighbors().contains(&pair[1]));
        }
    }

    #[test]
    fn test_start_already_solved() {
        let start = Line {
            pos: 3,
            len: 5,
            goal: Some(3),
        };
        let result = solve_with_stats(&start);

        assert_eq!(result.path, vec![start.clone()]);
        assert_eq!(result.stats.configs_generated, 0);
        assert_eq!(result.stats.configs_unique, 1);
        assert_eq!(next_step(&start), None);
    }

    #[test]
    fn test_unsolvable_exhausts_reachable_states() {
        let start = Line {
            pos: 0,
            len: 6,
            goal: None,
        };
        let result = solve_with_stats(&start);

        assert!(result.path.is_empty());
        assert_eq!(result.moves(), 0);
        assert_eq!(result.stats.configs_unique, 6);
        // end points have one neighbor, inner points two
        assert_eq!(result.stats.configs_generated, 10);
        assert!(solve(&start).is_empty());
    }

    #[test]
    fn test_next_step_moves_toward_goal() {
        let start = Line {
            pos: 4,
            len: 8,
            goal: Some(1),
        };
        let next = next_step(&start).unwrap();
        assert_eq!(next.pos, 3);
    }

    #[test]
    fn test_layered_distance_matches_line_length() {
        let start = Line {
            pos: 6,
            len: 9,
            goal: Some(2),
        };
        assert_eq!(layered_distance(&start), Some(4));
        assert_eq!(solve(&start).len(), 5);

        let nowhere = Line { goal: None, ..start };
        assert_eq!(layered_distance(&nowhere), None);
    }
}
