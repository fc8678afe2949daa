//! Core state vocabulary.
//!
//! This module contains the pieces shared by every layer of the engine:
//! - The `State` trait implemented by step labels and intersection states
//! - Bounded transition history for diagnostics
//!
//! Nothing in here has side effects.

mod history;
mod state;

pub use history::{StateTransition, TransitionHistory, DEFAULT_HISTORY_CAPACITY};
pub use state::State;
