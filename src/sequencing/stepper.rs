//! Light-set stepper.

use crate::light::{LightSet, StepLabel};

/// Advance one light set to `now_ms` and return its current label.
///
/// A missing or disabled set reports [`StepLabel::End`], as though it had
/// already finished. If the active step has not expired nothing changes.
/// Otherwise the cursor moves to the next populated step, wrapping at
/// capacity, and every configured light is recoloured.
///
/// At most one transition happens per call. A caller that polls late
/// catches up one step at a time on following calls.
///
/// ```rust
/// use signalbox::light::{Light, LightColor, LightDisplay, LightSet, Step, StepLabel};
/// use signalbox::sequencing::advance;
///
/// let mut steps = [Step::unused(); 10];
/// steps[0] = Step::new(StepLabel::Lpsg, 1000);
/// steps[1] = Step::end();
/// let mut lights = [Light::unused(); 5];
/// lights[0] = Light::new(LightDisplay::Solid);
/// let mut set = LightSet::new(lights, steps);
/// set.restart_cycle(0);
///
/// assert_eq!(advance(Some(&mut set), 999), StepLabel::Lpsg);
/// assert_eq!(advance(Some(&mut set), 1000), StepLabel::End);
/// assert_eq!(set.lights()[0].color, LightColor::Red);
/// ```
pub fn advance(set: Option<&mut LightSet>, now_ms: u64) -> StepLabel {
    let Some(set) = set else {
        return StepLabel::End;
    };
    if set.is_unused() {
        return StepLabel::End;
    }
    if now_ms < set.expires_at_ms() {
        return set.current_label();
    }

    // A used set always has step 0 populated, so the scan finds something.
    let Some(next) = set.next_populated(set.current_step) else {
        return StepLabel::End;
    };
    let label = set.steps[next].label;
    set.repaint(label);
    set.current_step = next;

    tracing::debug!(step = next, label = label.token(), now_ms, "light set advanced");
    label
}
