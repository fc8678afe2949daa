//! Mapping from an active-pair state to the light sets it drives.

use super::IntersectionState;
use crate::table::Direction;

/// Resolves which two light sets an arbitration state activates.
///
/// A missing handle makes the synchronizer refuse the pair, which the
/// arbiter treats as a failed transition.
pub trait PairResolver {
    fn resolve(&self, state: IntersectionState) -> [Option<Direction>; 2];
}

/// North with south, east with west.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardPairs;

impl PairResolver for StandardPairs {
    fn resolve(&self, state: IntersectionState) -> [Option<Direction>; 2] {
        match state {
            IntersectionState::NorthSouth => [Some(Direction::North), Some(Direction::South)],
            IntersectionState::EastWest => [Some(Direction::East), Some(Direction::West)],
            IntersectionState::Error | IntersectionState::Off => [None, None],
        }
    }
}

impl<F> PairResolver for F
where
    F: Fn(IntersectionState) -> [Option<Direction>; 2],
{
    fn resolve(&self, state: IntersectionState) -> [Option<Direction>; 2] {
        self(state)
    }
}
