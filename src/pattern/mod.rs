//! Pattern compilation and built-in patterns.
//!
//! The compiler runs only when configuration is loaded; the fail-safe
//! pattern is installed only when the arbiter degrades. Neither runs on the
//! per-tick path.

mod compiler;
mod defaults;
mod error;

pub use compiler::{compile_config, compile_into, compile_lights, compile_steps};
pub use defaults::{
    default_pattern, default_set, default_table, fail_safe_pattern, install_fail_safe,
    FAIL_SAFE_FLASH_MS,
};
pub use error::FormatError;
