//! Step labels and their light colour mappings.
//!
//! A [`StepLabel`] names the combined illumination of a direction: how the
//! left turn is treated and what colour the through traffic sees. Labels are
//! declared in canonical precedence order, so the derived `Ord` is the
//! ordering the synchronizer reduces by.

use super::LightColor;
use crate::core::State;
use serde::{Deserialize, Serialize};

/// Illumination state of a whole light set for one pattern step.
///
/// Variant order matters: protected-left states sort before unprotected,
/// before yellow-left, before red-left, before the sentinels.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum StepLabel {
    /// Left protected, through green
    Lpsg,
    /// Left protected, through yellow
    Lpsy,
    /// Left protected, through red
    Lpsr,
    /// Left unprotected, through green
    Lusg,
    /// Left unprotected, through yellow
    Lusy,
    /// Left unprotected, through red
    Lusr,
    /// Left yellow, through green
    Lysg,
    /// Left yellow, through yellow
    Lysy,
    /// Left yellow, through red
    Lysr,
    /// Left red, through green
    Lrsg,
    /// Left red, through yellow
    Lrsy,
    /// Left red, through red
    Lrsr,
    /// All lights dark, no timing restriction
    Disabled,
    /// Terminal step: all lights red, never expires
    End,
    /// Placeholder for an unpopulated pattern slot
    Unused,
}

impl StepLabel {
    /// Every label in precedence order.
    pub const ALL: [StepLabel; 15] = [
        Self::Lpsg,
        Self::Lpsy,
        Self::Lpsr,
        Self::Lusg,
        Self::Lusy,
        Self::Lusr,
        Self::Lysg,
        Self::Lysy,
        Self::Lysr,
        Self::Lrsg,
        Self::Lrsy,
        Self::Lrsr,
        Self::Disabled,
        Self::End,
        Self::Unused,
    ];

    /// Parse a configuration token, ignoring ASCII case.
    ///
    /// `Unused` has no token: it is never something a user configures.
    ///
    /// ```rust
    /// use signalbox::light::StepLabel;
    ///
    /// assert_eq!(StepLabel::from_token("lpsr"), Some(StepLabel::Lpsr));
    /// assert_eq!(StepLabel::from_token("END"), Some(StepLabel::End));
    /// assert_eq!(StepLabel::from_token("unused"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|label| *label != Self::Unused)
            .find(|label| label.token().eq_ignore_ascii_case(token))
    }

    /// Canonical configuration token for this label.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Lpsg => "LPSG",
            Self::Lpsy => "LPSY",
            Self::Lpsr => "LPSR",
            Self::Lusg => "LUSG",
            Self::Lusy => "LUSY",
            Self::Lusr => "LUSR",
            Self::Lysg => "LYSG",
            Self::Lysy => "LYSY",
            Self::Lysr => "LYSR",
            Self::Lrsg => "LRSG",
            Self::Lrsy => "LRSY",
            Self::Lrsr => "LRSR",
            Self::Disabled => "disable",
            Self::End => "end",
            Self::Unused => "unused",
        }
    }

    /// Colour shown by an arrow (left-turn) light under this label.
    pub fn arrow_color(&self) -> LightColor {
        match self {
            Self::Lpsg | Self::Lpsy | Self::Lpsr => LightColor::Green,
            Self::Lusg | Self::Lusy | Self::Lusr => LightColor::YellowArrow,
            Self::Lysg | Self::Lysy | Self::Lysr => LightColor::Yellow,
            Self::Lrsg | Self::Lrsy | Self::Lrsr | Self::End => LightColor::Red,
            Self::Disabled | Self::Unused => LightColor::Off,
        }
    }

    /// Colour shown by a solid (through) light under this label.
    pub fn solid_color(&self) -> LightColor {
        match self {
            Self::Lpsg | Self::Lusg | Self::Lysg | Self::Lrsg => LightColor::Green,
            Self::Lpsy | Self::Lusy | Self::Lysy | Self::Lrsy => LightColor::Yellow,
            Self::Lpsr | Self::Lusr | Self::Lysr | Self::Lrsr | Self::End => LightColor::Red,
            Self::Disabled | Self::Unused => LightColor::Off,
        }
    }
}

impl State for StepLabel {
    fn name(&self) -> &str {
        self.token()
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::End)
    }
}
