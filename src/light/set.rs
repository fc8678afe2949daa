//! Pattern steps and the per-direction light set.

use super::{Light, StepLabel};
use serde::{Deserialize, Serialize};

/// Capacity of a light set's light array.
pub const MAX_LIGHTS_IN_SET: usize = 5;

/// Capacity of a light set's pattern.
pub const MAX_STEPS_IN_PATTERN: usize = 10;

/// Expiration offset of the terminal step.
pub const NEVER_EXPIRES: u64 = u64::MAX;

/// One entry of an illumination pattern.
///
/// `offset_ms` is measured from the pair's cycle start and marks when this
/// step ends, not when it begins.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Step {
    pub label: StepLabel,
    pub offset_ms: u64,
}

impl Step {
    pub const fn new(label: StepLabel, offset_ms: u64) -> Self {
        Self { label, offset_ms }
    }

    /// Terminal step that never expires.
    pub const fn end() -> Self {
        Self::new(StepLabel::End, NEVER_EXPIRES)
    }

    /// Unpopulated slot.
    pub const fn unused() -> Self {
        Self::new(StepLabel::Unused, 0)
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::unused()
    }
}

/// One direction's lights, timing pattern and runtime cursor.
///
/// A set whose first step is [`StepLabel::Unused`] is disabled as a whole.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LightSet {
    pub(crate) lights: [Light; MAX_LIGHTS_IN_SET],
    pub(crate) steps: [Step; MAX_STEPS_IN_PATTERN],
    pub(crate) current_step: usize,
    pub(crate) cycle_start_ms: u64,
}

impl Default for LightSet {
    fn default() -> Self {
        Self::unused()
    }
}

impl LightSet {
    /// Build an idle set from its lights and pattern.
    ///
    /// The cursor is parked on the terminal step with every light red, so the
    /// set stays dark-red until a pair arms it.
    pub fn new(lights: [Light; MAX_LIGHTS_IN_SET], steps: [Step; MAX_STEPS_IN_PATTERN]) -> Self {
        let mut set = Self {
            lights,
            steps,
            current_step: 0,
            cycle_start_ms: 0,
        };
        set.park();
        set
    }

    /// A disabled set with no lights and no pattern.
    pub fn unused() -> Self {
        Self::new(
            [Light::unused(); MAX_LIGHTS_IN_SET],
            [Step::unused(); MAX_STEPS_IN_PATTERN],
        )
    }

    pub fn is_unused(&self) -> bool {
        self.steps[0].label == StepLabel::Unused
    }

    pub fn lights(&self) -> &[Light; MAX_LIGHTS_IN_SET] {
        &self.lights
    }

    pub fn steps(&self) -> &[Step; MAX_STEPS_IN_PATTERN] {
        &self.steps
    }

    /// Index of the active step. Display code polls this to detect changes.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn current_label(&self) -> StepLabel {
        self.steps[self.current_step].label
    }

    pub fn cycle_start_ms(&self) -> u64 {
        self.cycle_start_ms
    }

    /// Absolute time at which the active step ends. Saturates, so the
    /// terminal step never expires.
    pub fn expires_at_ms(&self) -> u64 {
        self.cycle_start_ms
            .saturating_add(self.steps[self.current_step].offset_ms)
    }

    /// Index of the next populated step after `from`, wrapping at capacity.
    ///
    /// Returns `None` only when every slot is unused.
    pub fn next_populated(&self, from: usize) -> Option<usize> {
        (1..=MAX_STEPS_IN_PATTERN)
            .map(|delta| (from + delta) % MAX_STEPS_IN_PATTERN)
            .find(|&idx| self.steps[idx].label != StepLabel::Unused)
    }

    /// Recolour every configured light for `label`.
    ///
    /// Lights are contiguous from index 0, so the first unused slot ends the
    /// loop.
    pub(crate) fn repaint(&mut self, label: StepLabel) {
        for light in self.lights.iter_mut() {
            if !light.repaint(label) {
                break;
            }
        }
    }

    /// Re-arm the cycle timer, rewind the cursor to the first step and show
    /// its label.
    ///
    /// This is the only way a set leaves its terminal step.
    pub fn restart_cycle(&mut self, start_ms: u64) {
        self.cycle_start_ms = start_ms;
        self.current_step = 0;
        if !self.is_unused() {
            let label = self.steps[0].label;
            self.repaint(label);
        }
    }

    /// Replace the pattern in place, keeping the lights, and park the set.
    pub(crate) fn install_pattern(&mut self, steps: [Step; MAX_STEPS_IN_PATTERN]) {
        self.steps = steps;
        self.park();
    }

    /// Move the cursor to the terminal step and paint it. A set without one
    /// is disabled and keeps its cursor on step 0.
    fn park(&mut self) {
        match self.steps.iter().position(|step| step.label == StepLabel::End) {
            Some(end) => {
                self.current_step = end;
                self.repaint(StepLabel::End);
            }
            None => self.current_step = 0,
        }
    }
}
