//! Physical lights, step labels and per-direction light sets.
//!
//! Everything in here is plain data. The only code that mutates a light's
//! colour is the stepper in [`crate::sequencing`].

mod label;
mod set;

pub use label::StepLabel;
pub use set::{LightSet, Step, MAX_LIGHTS_IN_SET, MAX_STEPS_IN_PATTERN, NEVER_EXPIRES};

use serde::{Deserialize, Serialize};

/// How a signal head displays its go indication.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum LightDisplay {
    /// Slot not populated
    #[default]
    Unused,
    /// Round solid lamp for through traffic
    Solid,
    /// Left-turn arrow lamp
    Arrow,
}

impl LightDisplay {
    /// Map a configuration token to a display kind.
    ///
    /// Only the first character is significant. Anything unrecognised is
    /// treated as an unused slot rather than rejected.
    pub fn from_token(token: &str) -> Self {
        match token.chars().next() {
            Some('o' | 'O' | '0') => Self::Solid,
            Some('<') => Self::Arrow,
            _ => Self::Unused,
        }
    }
}

/// Current illumination of a single light.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum LightColor {
    Green,
    YellowArrow,
    Yellow,
    #[default]
    Red,
    Off,
}

/// A physical signal head.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Light {
    pub display: LightDisplay,
    pub color: LightColor,
}

impl Light {
    /// A configured light, starting out red.
    pub const fn new(display: LightDisplay) -> Self {
        Self {
            display,
            color: LightColor::Red,
        }
    }

    pub const fn unused() -> Self {
        Self::new(LightDisplay::Unused)
    }

    /// Repaint this light for `label`. Returns `false` for an unused slot,
    /// which is left untouched.
    pub fn repaint(&mut self, label: StepLabel) -> bool {
        match self.display {
            LightDisplay::Solid => self.color = label.solid_color(),
            LightDisplay::Arrow => self.color = label.arrow_color(),
            LightDisplay::Unused => return false,
        }
        true
    }
}
