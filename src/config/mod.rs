//! Configuration loading.
//!
//! Reads the JSON configuration document and hands the per-direction
//! records to the pattern compiler. Any failure is reported to the caller,
//! which is expected to fall back to [`crate::pattern::default_table`].

mod schema;

pub use schema::{DirectionConfig, IntersectionConfig, StepConfig};

use crate::pattern::{compile_config, default_table, FormatError};
use crate::table::LightSetTable;
use std::borrow::Cow;
use std::path::PathBuf;
use thiserror::Error;

/// Where the intersection configuration comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in default patterns
    #[default]
    Defaults,
    /// JSON document on disk
    File(PathBuf),
    /// JSON document already in memory
    Json(String),
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Format(#[from] FormatError),
}

/// Load and compile a light set table from `source`.
///
/// [`ConfigSource::Defaults`] yields [`default_table`] without parsing
/// anything. Directions missing from a document are left unused.
pub fn load_table(source: &ConfigSource) -> Result<LightSetTable, ConfigError> {
    let json = match source {
        ConfigSource::Defaults => return Ok(default_table()),
        ConfigSource::File(path) => {
            Cow::Owned(
                std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?,
            )
        }
        ConfigSource::Json(json) => Cow::Borrowed(json.as_str()),
    };

    let document: IntersectionConfig = serde_json::from_str(&json)?;
    Ok(compile_config(&document.intersection)?)
}
