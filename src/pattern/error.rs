//! Pattern compiler errors.

use crate::table::Direction;
use thiserror::Error;

/// Malformed or out-of-range configuration input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("direction value is not a string")]
    DirectionNotString,

    #[error("unknown direction '{0}'")]
    UnknownDirection(String),

    #[error("direction '{0}' configured more than once")]
    DuplicateDirection(Direction),

    #[error("only {max} lights are supported per set")]
    TooManyLights { max: usize },

    #[error("light {index} is not a string")]
    LightNotString { index: usize },

    #[error("light {index} follows an unused light")]
    DiscontiguousLights { index: usize },

    #[error("only {max} steps are supported per pattern")]
    TooManySteps { max: usize },

    #[error("step {index} state is not a string")]
    LabelNotString { index: usize },

    #[error("step {index} has unknown state '{token}'")]
    UnknownLabel { index: usize, token: String },

    #[error("step {index} time is not a non-negative millisecond count below u64::MAX")]
    TimeNotNumber { index: usize },

    #[error("pattern has no terminating 'end' step")]
    MissingEnd,

    #[error("step {index} follows the 'end' step")]
    StepsAfterEnd { index: usize },

    #[error("{direction}: {source}")]
    InDirection {
        direction: Direction,
        #[source]
        source: Box<FormatError>,
    },
}
