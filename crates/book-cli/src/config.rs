//! Configuration for the book CLI.
//!
//! Intentionally simple: defaults, overridable via environment.
//!
//! - `BOOK_INPUT_FILE` (default: unset, which runs the built-in scenario)

use std::env;
use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Command file to replay. When unset the CLI runs its built-in
    /// demonstration scenario instead.
    pub input_file: Option<PathBuf>,
}

impl Config {
    /// Construct a `Config` from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        Config {
            input_file: env::var_os("BOOK_INPUT_FILE").map(PathBuf::from),
        }
    }
}
