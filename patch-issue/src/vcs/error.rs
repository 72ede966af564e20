//! Unresolved VCS reasons.

use thiserror::Error;

/// Why a package's VCS identity could not be determined.
///
/// All variants mean "nothing to link to". The variant only matters for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnresolvedVcs {
    /// The manifest has no `repository` field.
    #[error("no repository field in package manifest")]
    Missing,

    /// The `repository` field is neither a string nor an object with a string `url`.
    #[error("repository field has an unsupported shape")]
    UnsupportedShape,

    /// The repository descriptor is not a recognised provider format.
    #[error("unrecognised repository '{repository}'")]
    Unrecognized { repository: String },
}
