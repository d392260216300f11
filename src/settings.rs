//! Shell settings
//!
//! A plain struct with serde derives so host applications can deserialize it
//! from their own configuration files; the core itself never loads one.

use serde::{Deserialize, Serialize};

/// Default interactive prompt.
pub const DEFAULT_PROMPT: &str = "> ";

/// Default cap on unknown-command suggestions.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Tunable behavior of a [`crate::Shell`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Interactive prompt string
    pub prompt: String,
    /// Show usage help after validation and execution failures
    pub auto_help: bool,
    /// Print a failure hint line in interactive mode
    pub verbose_errors: bool,
    /// Colored diagnostics (NO_COLOR et al. still apply)
    pub color_output: bool,
    /// Cap on unknown-command suggestions
    pub max_suggestions: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            auto_help: true,
            verbose_errors: true,
            color_output: true,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}
