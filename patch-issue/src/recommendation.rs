//! Decides whether drafting an issue is worth recommending.

use std::collections::BTreeSet;

use crate::vcs::VcsIdentity;

/// Repositories issues are never recommended for, as `(organization, repository)`.
///
/// Issues against the aggregate type definitions repository are not actionable.
pub const DEFAULT_EXCLUDED_REPOSITORIES: &[(&str, &str)] =
    &[("DefinitelyTyped", "DefinitelyTyped")];

/// Recommendation policy with a set of excluded repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationPolicy {
    excluded: BTreeSet<(String, String)>,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXCLUDED_REPOSITORIES
                .iter()
                .map(|(org, repo)| ((*org).to_string(), (*repo).to_string())),
        )
    }
}

impl RecommendationPolicy {
    /// Creates a policy excluding the given `(organization, repository)` pairs.
    pub fn new(excluded: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            excluded: excluded.into_iter().collect(),
        }
    }

    /// Returns whether `organization/repository` is excluded.
    #[must_use]
    pub fn is_excluded(&self, organization: &str, repository: &str) -> bool {
        self.excluded
            .contains(&(organization.to_string(), repository.to_string()))
    }

    /// Returns whether drafting an issue should be recommended.
    ///
    /// An unresolved identity is still "recommended"; callers that need a
    /// link check for the identity themselves.
    #[must_use]
    pub fn should_recommend(&self, vcs: Option<&VcsIdentity>) -> bool {
        match vcs {
            None => true,
            Some(vcs) => !self.is_excluded(&vcs.organization, &vcs.repository),
        }
    }
}
