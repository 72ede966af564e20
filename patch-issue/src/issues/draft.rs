//! Issue draft types.

use std::fmt;
use url::Url;

use crate::vcs::VcsIdentity;

/// Inputs for drafting one issue.
#[derive(Debug, Clone)]
pub struct IssueUrlRequest<'a> {
    /// Repository the issue is filed against.
    pub vcs: &'a VcsIdentity,

    /// Name of the patched package.
    pub package_name: &'a str,

    /// Installed version of the patched package.
    pub package_version: &'a str,

    /// Diff that fixed the problem.
    pub diff: &'a str,

    /// Path of the patch file the diff came from.
    pub patch_path: &'a str,
}

/// Tells the user to paste a patch file by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchCopyNotice {
    /// Path of the patch file to copy from.
    pub patch_path: String,
}

impl PatchCopyNotice {
    /// Returns the last `/`-separated segment of the patch path.
    #[must_use]
    pub fn file_name(&self) -> &str {
        patch_file_name(&self.patch_path)
    }
}

impl fmt::Display for PatchCopyNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "📋 Copy the contents in [ {} ] and paste it in the new issue's diff section.",
            self.patch_path
        )
    }
}

pub(super) fn patch_file_name(patch_path: &str) -> &str {
    patch_path.rsplit('/').next().unwrap_or(patch_path)
}

/// A drafted issue, ready to open.
#[derive(Debug, Clone)]
pub struct IssueDraft {
    /// Pre-filled "new issue" URL.
    pub url: Url,

    /// Issue body encoded in the URL.
    pub body: String,

    /// Set when the diff was too long to embed.
    pub notice: Option<PatchCopyNotice>,
}

impl IssueDraft {
    /// Returns whether the diff was embedded in the body.
    #[must_use]
    pub fn diff_embedded(&self) -> bool {
        self.notice.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_message_names_patch_path() {
        let notice = PatchCopyNotice {
            patch_path: "patches/left-pad+1.3.0.patch".to_string(),
        };
        assert_eq!(
            notice.to_string(),
            "📋 Copy the contents in [ patches/left-pad+1.3.0.patch ] and paste it in the new issue's diff section."
        );
        assert_eq!(notice.file_name(), "left-pad+1.3.0.patch");
    }

    #[test]
    fn file_name_without_directory() {
        assert_eq!(patch_file_name("react+18.2.0.patch"), "react+18.2.0.patch");
        assert_eq!(patch_file_name("a/b/c.patch"), "c.patch");
    }
}
