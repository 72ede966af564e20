//! Settings loading.
//!
//! Settings live in an optional `patch-issue.toml` next to the project's
//! `package.json`. Every key has a default, so an absent file is valid.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{IssueSettings, DEFAULT_DIFF_LENGTH_LIMIT, SETTINGS_FILE_NAME};
