//! Per-tick sequencing: the light-set stepper and the pair synchronizer.

mod stepper;
mod synchronizer;

pub use stepper::advance;
pub use synchronizer::Synchronizer;
