//! Issue drafting error types.

use thiserror::Error;

/// Errors that can occur while drafting an issue.
#[derive(Debug, Error)]
pub enum IssueError {
    /// Template rendering error.
    #[error(transparent)]
    TemplateError(#[from] crate::templates::TemplateError),

    /// The issue URL could not be formed.
    #[error("Invalid issue URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
