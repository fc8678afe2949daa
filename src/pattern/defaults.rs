//! Built-in patterns: the default configuration and the fail-safe flash.

use crate::light::{
    Light, LightDisplay, LightSet, Step, StepLabel, MAX_LIGHTS_IN_SET, MAX_STEPS_IN_PATTERN,
};
use crate::table::{LightSetTable, INT_DIRECTIONS};

/// Dark phase of the fail-safe flash, in milliseconds.
pub const FAIL_SAFE_FLASH_MS: u64 = 1000;

/// Advanced-green pattern used for every direction when no valid
/// configuration is available. Offsets are already expirations.
pub fn default_pattern() -> [Step; MAX_STEPS_IN_PATTERN] {
    let mut steps = [Step::unused(); MAX_STEPS_IN_PATTERN];
    steps[0] = Step::new(StepLabel::Lpsr, 3000);
    steps[1] = Step::new(StepLabel::Lysr, 5000);
    steps[2] = Step::new(StepLabel::Lusg, 7000);
    steps[3] = Step::new(StepLabel::Lysy, 9000);
    steps[4] = Step::new(StepLabel::Lrsr, 11000);
    steps[5] = Step::end();
    steps
}

/// Dark for [`FAIL_SAFE_FLASH_MS`], then all red until the pair swaps.
pub fn fail_safe_pattern() -> [Step; MAX_STEPS_IN_PATTERN] {
    let mut steps = [Step::unused(); MAX_STEPS_IN_PATTERN];
    steps[0] = Step::new(StepLabel::Disabled, FAIL_SAFE_FLASH_MS);
    steps[1] = Step::end();
    steps
}

/// One arrow head and one solid head running [`default_pattern`].
pub fn default_set() -> LightSet {
    let mut lights = [Light::unused(); MAX_LIGHTS_IN_SET];
    lights[0] = Light::new(LightDisplay::Arrow);
    lights[1] = Light::new(LightDisplay::Solid);
    LightSet::new(lights, default_pattern())
}

/// Every direction running the default set.
pub fn default_table() -> LightSetTable {
    LightSetTable::from_sets(std::array::from_fn::<_, INT_DIRECTIONS, _>(|_| default_set()))
}

/// Overwrite the pattern of every direction with the fail-safe flash.
///
/// Lights are kept so the heads still render; only timing changes.
pub fn install_fail_safe(table: &mut LightSetTable) {
    for direction in crate::table::Direction::ALL {
        table.get_mut(direction).install_pattern(fail_safe_pattern());
    }
}
