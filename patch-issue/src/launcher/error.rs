//! Launch error types.

use thiserror::Error;

use crate::issues::IssueError;
use crate::vcs::UnresolvedVcs;

/// Errors that can occur while launching an issue draft.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The package has no usable repository, so there is nothing to link to.
    #[error("Couldn't find VCS details for {path_specifier}")]
    VcsNotFound {
        path_specifier: String,
        #[source]
        reason: UnresolvedVcs,
    },

    /// Drafting the issue failed.
    #[error(transparent)]
    Issue(#[from] IssueError),

    /// Writing console output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
