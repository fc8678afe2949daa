//! Configuration records consumed by the pattern compiler.
//!
//! Values are kept as raw JSON so the compiler, not serde, decides which
//! type mismatches are format errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level configuration document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IntersectionConfig {
    #[serde(default)]
    pub intersection: Vec<DirectionConfig>,
}

/// One approach's light kinds and timing entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionConfig {
    #[serde(default)]
    pub direction: Value,
    #[serde(default)]
    pub lights: Vec<Value>,
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

/// A user-entered step: a label token and the time the step starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepConfig {
    #[serde(default)]
    pub state: Value,
    #[serde(default)]
    pub time: Value,
}

impl DirectionConfig {
    /// Build a record from well-typed parts.
    pub fn new(direction: &str, lights: &[&str], steps: &[(&str, u64)]) -> Self {
        Self {
            direction: Value::from(direction),
            lights: lights.iter().map(|light| Value::from(*light)).collect(),
            steps: steps
                .iter()
                .map(|(state, time)| StepConfig::new(state, *time))
                .collect(),
        }
    }
}

impl StepConfig {
    pub fn new(state: &str, time: u64) -> Self {
        Self {
            state: Value::from(state),
            time: Value::from(time),
        }
    }
}
