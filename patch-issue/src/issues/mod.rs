//! Pre-filled "new issue" URLs.
//!
//! The issue body embeds the patch diff. Diffs too long to fit a URL are
//! replaced by a placeholder and the user is told which file to paste.

mod draft;
mod error;
mod url_builder;

pub use draft::{IssueDraft, IssueUrlRequest, PatchCopyNotice};
pub use error::IssueError;
pub use url_builder::{new_issue_url, IssueUrlBuilder};
