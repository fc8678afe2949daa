//! Bounded transition history.
//!
//! The arbiter records every change of active pair here so diagnostics can
//! show how the intersection got where it is. The engine runs for the life
//! of the process, so the history keeps only the most recent entries.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of transitions retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use signalbox::core::StateTransition;
/// use signalbox::IntersectionState;
///
/// let transition = StateTransition {
///     from: IntersectionState::Off,
///     to: IntersectionState::NorthSouth,
///     at_ms: 1_000,
/// };
/// assert_eq!(transition.at_ms, 1_000);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Caller-supplied millisecond counter at the time of the transition
    pub at_ms: u64,
}

/// Ordered, bounded history of state transitions.
///
/// Once `capacity` entries are held, recording a new transition drops the
/// oldest one.
///
/// # Example
///
/// ```rust
/// use signalbox::core::{StateTransition, TransitionHistory};
/// use signalbox::IntersectionState;
///
/// let mut history = TransitionHistory::with_capacity(2);
/// history.record(StateTransition {
///     from: IntersectionState::Off,
///     to: IntersectionState::NorthSouth,
///     at_ms: 0,
/// });
/// history.record(StateTransition {
///     from: IntersectionState::NorthSouth,
///     to: IntersectionState::EastWest,
///     at_ms: 11_000,
/// });
///
/// let path = history.path();
/// assert_eq!(path.len(), 3); // Off -> NorthSouth -> EastWest
/// assert_eq!(history.duration_ms(), Some(11_000));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionHistory<S: State> {
    capacity: usize,
    transitions: VecDeque<StateTransition<S>>,
}

impl<S: State> Default for TransitionHistory<S> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl<S: State> TransitionHistory<S> {
    /// Create an empty history retaining at most `capacity` transitions.
    ///
    /// A capacity of zero is bumped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            transitions: VecDeque::with_capacity(capacity),
        }
    }

    /// Record a transition, evicting the oldest entry when full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if self.transitions.len() == self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// States traversed: the `from` of the oldest retained transition, then
    /// the `to` of each transition.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Milliseconds between the oldest and newest retained transitions.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration_ms(&self) -> Option<u64> {
        match (self.transitions.front(), self.transitions.back()) {
            (Some(first), Some(last)) => Some(last.at_ms.saturating_sub(first.at_ms)),
            _ => None,
        }
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Iterate transitions oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }
}
