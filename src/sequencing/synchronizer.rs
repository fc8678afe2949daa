//! Keeps the two light sets of the active pair on one cycle.

use super::advance;
use crate::error::SignalError;
use crate::light::StepLabel;
use crate::table::{Direction, LightSetTable};

/// Tracks which pair of light sets is active and steps them together.
///
/// The synchronizer only holds handles; the sets themselves live in the
/// [`LightSetTable`] passed to each call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Synchronizer {
    active: [Option<Direction>; 2],
}

impl Synchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active pair, if both handles are present.
    pub fn active(&self) -> Option<(Direction, Direction)> {
        match self.active {
            [Some(first), Some(second)] => Some((first, second)),
            _ => None,
        }
    }

    /// Install two light sets as the active pair and arm their cycle.
    ///
    /// If either handle is missing [`SignalError::NullReference`] is returned
    /// and the running pair keeps going untouched. Otherwise both sets are
    /// rewound to their first step with `cycle_start_ms = start_ms`.
    pub fn assign(
        &mut self,
        table: &mut LightSetTable,
        first: Option<Direction>,
        second: Option<Direction>,
        start_ms: u64,
    ) -> Result<(), SignalError> {
        let (Some(first), Some(second)) = (first, second) else {
            return Err(SignalError::NullReference);
        };

        self.install(table, first, second, start_ms);
        Ok(())
    }

    /// Like [`Synchronizer::assign`] with both handles known to be present.
    pub fn install(
        &mut self,
        table: &mut LightSetTable,
        first: Direction,
        second: Direction,
        start_ms: u64,
    ) {
        self.active = [Some(first), Some(second)];
        table.get_mut(first).restart_cycle(start_ms);
        table.get_mut(second).restart_cycle(start_ms);
    }

    /// Step both active sets and reduce their labels to one.
    ///
    /// The lower of the two labels in precedence order wins, so the pair
    /// only reports [`StepLabel::End`] once both members have finished.
    pub fn tick(&self, table: &mut LightSetTable, now_ms: u64) -> StepLabel {
        let mut overall = StepLabel::End;
        for slot in self.active {
            let label = advance(slot.map(|dir| table.get_mut(dir)), now_ms);
            overall = overall.min(label);
        }
        overall
    }
}
