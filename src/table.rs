//! Directions and the table of light sets they index.

use crate::light::LightSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of approaches to the intersection.
pub const INT_DIRECTIONS: usize = 4;

/// Compass heading of an approach.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; INT_DIRECTIONS] =
        [Self::North, Self::East, Self::South, Self::West];

    /// Parse a configuration name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.name().eq_ignore_ascii_case(name))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four light sets of the intersection, indexed by [`Direction`].
///
/// This is the single owner of all light set state. Everything else refers
/// to a set by its direction.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct LightSetTable {
    sets: [LightSet; INT_DIRECTIONS],
}

impl LightSetTable {
    /// A table with every direction disabled.
    pub fn unused() -> Self {
        Self::default()
    }

    pub fn from_sets(sets: [LightSet; INT_DIRECTIONS]) -> Self {
        Self { sets }
    }

    pub fn get(&self, direction: Direction) -> &LightSet {
        &self.sets[direction.index()]
    }

    pub fn get_mut(&mut self, direction: Direction) -> &mut LightSet {
        &mut self.sets[direction.index()]
    }

    pub(crate) fn set(&mut self, direction: Direction, set: LightSet) {
        self.sets[direction.index()] = set;
    }

    /// Iterate sets in direction order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &LightSet)> {
        Direction::ALL.into_iter().zip(self.sets.iter())
    }

    /// Step cursor of every direction, for change detection.
    pub fn step_indices(&self) -> [usize; INT_DIRECTIONS] {
        let mut indices = [0; INT_DIRECTIONS];
        for (slot, set) in indices.iter_mut().zip(self.sets.iter()) {
            *slot = set.current_step();
        }
        indices
    }
}
