//! The contract every puzzle state implements so the solver can search it.

use std::hash::Hash;

/// One immutable point in a puzzle's state space.
///
/// Equality and hashing must cover every field that influences
/// [`is_solution`](Configuration::is_solution) or
/// [`neighbors`](Configuration::neighbors). Two states built along different
/// move sequences but with the same observable contents must compare equal,
/// otherwise the solver revisits them and its visited set is corrupted.
pub trait Configuration: Clone + Eq + Hash {
    /// Whether this state satisfies the puzzle's goal. Called once per
    /// dequeued state, so it should be cheap.
    fn is_solution(&self) -> bool;

    /// Every state reachable in exactly one legal move.
    ///
    /// Must not contain `self` and should not contain duplicates. The order
    /// only decides which of several shortest paths the solver returns.
    fn neighbors(&self) -> Vec<Self>;
}
