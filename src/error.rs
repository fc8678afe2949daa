//! Steady-state engine errors.

use crate::arbiter::IntersectionState;
use thiserror::Error;

/// Errors raised while sequencing or arbitrating.
///
/// Configuration problems have their own types, [`crate::pattern::FormatError`]
/// and [`crate::config::ConfigError`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SignalError {
    #[error("light set handle missing for the requested pair")]
    NullReference,

    #[error("state '{requested:?}' cannot be selected directly")]
    InvalidStateRequest { requested: IntersectionState },
}
