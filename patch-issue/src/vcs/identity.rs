//! VCS identity types.

use serde::Serialize;
use std::fmt;

/// A hosting provider that issues can be drafted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Provider {
    /// github.com
    GitHub,
}

impl Provider {
    /// Every supported provider, in matching order.
    pub const ALL: &'static [Provider] = &[Provider::GitHub];

    /// Returns the web host of the provider.
    #[must_use]
    pub fn host(self) -> &'static str {
        match self {
            Self::GitHub => "github.com",
        }
    }

    /// Returns the `<prefix>:org/repo` shorthand prefix used in manifests.
    #[must_use]
    pub fn shorthand_prefix(self) -> &'static str {
        match self {
            Self::GitHub => "github:",
        }
    }

    /// Returns the display name of the provider.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a package's source lives.
///
/// Both name segments are non-empty and consist of ASCII word characters,
/// dots and hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VcsIdentity {
    /// Repository owner (user or organization).
    pub organization: String,

    /// Repository name.
    pub repository: String,

    /// Hosting provider.
    pub provider: Provider,
}

impl VcsIdentity {
    /// Returns the repository name in "organization/repository" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.organization, self.repository)
    }
}
