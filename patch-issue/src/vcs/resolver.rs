//! Resolution of a manifest `repository` field.

use serde::Deserialize;
use tracing::debug;

use super::{parse_repository, UnresolvedVcs, VcsIdentity};

/// The `repository` field of a `package.json`.
///
/// npm accepts either a shorthand string or an object with a `url`.
/// Any other JSON value is kept so it can be reported as unsupported.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RepositoryField {
    /// `"repository": "github:org/repo"`
    Shorthand(String),

    /// `"repository": { "type": "git", "url": "..." }`
    Detailed {
        #[serde(default)]
        url: Option<String>,
    },

    /// Anything else.
    Other(serde_json::Value),
}

/// Resolves a package's VCS identity from its `repository` field.
///
/// # Errors
///
/// Returns [`UnresolvedVcs`] describing why no identity could be found.
pub fn resolve_vcs(field: Option<&RepositoryField>) -> Result<VcsIdentity, UnresolvedVcs> {
    let repository = match field {
        None => return Err(UnresolvedVcs::Missing),
        Some(RepositoryField::Shorthand(repository)) => repository,
        Some(RepositoryField::Detailed { url: Some(url) }) => url,
        Some(RepositoryField::Detailed { url: None } | RepositoryField::Other(_)) => {
            return Err(UnresolvedVcs::UnsupportedShape)
        }
    };

    match parse_repository(repository) {
        Some(vcs) => {
            debug!(repository = %repository, vcs = %vcs.full_name(), "Resolved VCS identity");
            Ok(vcs)
        }
        None => {
            debug!(repository = %repository, "Unrecognised repository descriptor");
            Err(UnresolvedVcs::Unrecognized {
                repository: repository.clone(),
            })
        }
    }
}
