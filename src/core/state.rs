//! Core State trait shared by the engine's state enums.
//!
//! Both the per-step illumination label and the intersection's arbitration
//! state implement this trait, which gives logging and history a uniform,
//! side-effect free way to describe them.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for engine states.
///
/// All methods are pure. States are small values that describe a position
/// in a state machine.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: transitions compare the requested and current state
/// - `Debug`: states show up in logs
/// - `Serialize` + `Deserialize`: history can be exported for diagnostics
///
/// # Example
///
/// ```rust
/// use signalbox::core::State;
/// use signalbox::light::StepLabel;
/// use signalbox::IntersectionState;
///
/// assert_eq!(StepLabel::End.name(), "end");
/// assert!(StepLabel::End.is_final());
/// assert!(IntersectionState::Error.is_error());
/// assert!(!IntersectionState::NorthSouth.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// For a pattern this is the step that never expires.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
