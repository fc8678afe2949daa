//! Signalbox: a traffic signal sequencing and arbitration engine
//!
//! Signalbox drives the lights of a four-way intersection. Each approach owns
//! a light set running a timed pattern of steps; opposing approaches run as a
//! pair, and an arbiter hands the right of way from one pair to the other when
//! both members finish their cycle. If a handover cannot be made the
//! intersection degrades to a flashing fail-safe.
//!
//! # Core Concepts
//!
//! - **Step labels**: what every light in a set shows, see [`light::StepLabel`]
//! - **Patterns**: compiled from JSON configuration by [`pattern`]
//! - **Sequencing**: one step per tick per set, see [`sequencing`]
//! - **Arbitration**: pair selection and fail-safe, see [`arbiter`]
//!
//! The engine never reads the clock or sleeps on its own. Time is either
//! passed to [`Arbiter::tick`] or read through an injected
//! [`arbiter::TimeSource`].
//!
//! # Example
//!
//! ```rust
//! use signalbox::arbiter::{Arbiter, ManualClock, StandardPairs};
//! use signalbox::config::ConfigSource;
//! use signalbox::{Direction, IntersectionState};
//!
//! let mut arbiter = Arbiter::new(ManualClock::new(0), StandardPairs);
//! arbiter.init(&ConfigSource::Defaults).unwrap();
//!
//! arbiter.clock().advance(10);
//! assert_eq!(arbiter.poll(), IntersectionState::NorthSouth);
//! assert_eq!(
//!     arbiter.active_pair(),
//!     Some((Direction::North, Direction::South))
//! );
//! ```

pub mod arbiter;
pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod light;
pub mod observability;
pub mod pattern;
pub mod sequencing;
pub mod table;

// Re-export commonly used types
pub use arbiter::{Arbiter, Intersection, IntersectionState};
pub use core::State;
pub use error::SignalError;
pub use light::StepLabel;
pub use table::{Direction, LightSetTable};
