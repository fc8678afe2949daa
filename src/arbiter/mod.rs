//! Intersection arbitration.
//!
//! The arbiter decides which pair of opposing approaches holds the right of
//! way, swaps pairs when a cycle finishes, and degrades to a flashing
//! fail-safe when a swap cannot be made.
//!
//! # Key Concepts
//!
//! - **Pairs**: north with south, east with west, resolved through a
//!   [`PairResolver`]
//! - **Time**: either passed to [`Arbiter::tick`] or read from the injected
//!   [`TimeSource`] by [`Arbiter::poll`]
//! - **Fail-safe**: a one-way degradation that reprograms every direction

mod clock;
mod machine;
mod pairs;

pub use clock::{ManualClock, SystemClock, TimeSource};
pub use machine::{Arbiter, Intersection};
pub use pairs::{PairResolver, StandardPairs};

use crate::core::State;
use serde::{Deserialize, Serialize};

/// Arbitration state of the whole intersection.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum IntersectionState {
    /// North and south approaches active
    NorthSouth,
    /// East and west approaches active
    EastWest,
    /// Fail-safe requested
    Error,
    /// Nothing active yet
    Off,
}

impl IntersectionState {
    /// The opposing pair, for the two pair states.
    pub fn other_pair(&self) -> Option<Self> {
        match self {
            Self::NorthSouth => Some(Self::EastWest),
            Self::EastWest => Some(Self::NorthSouth),
            Self::Error | Self::Off => None,
        }
    }

    pub fn is_pair(&self) -> bool {
        self.other_pair().is_some()
    }
}

impl State for IntersectionState {
    fn name(&self) -> &str {
        match self {
            Self::NorthSouth => "NorthSouth",
            Self::EastWest => "EastWest",
            Self::Error => "Error",
            Self::Off => "Off",
        }
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}
