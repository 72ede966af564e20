//! Drafting an issue and opening it in the browser.

mod browser;
mod error;
mod issue_launcher;

pub use browser::{BrowserOpener, NoopBrowser, SystemBrowser};
pub use error::LaunchError;
pub use issue_launcher::{trim_trailing_newline, IssueLauncher, PatchSubmission};
