//! Issue drafting settings.

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use super::ConfigError;
use crate::recommendation::{RecommendationPolicy, DEFAULT_EXCLUDED_REPOSITORIES};
use crate::vcs::parse_repository;

/// Default settings file name, looked up in the project root.
pub const SETTINGS_FILE_NAME: &str = "patch-issue.toml";

/// Diffs longer than this many characters are not embedded in the issue URL.
///
/// Compared with the raw diff, not the encoded URL, so it only approximates
/// browser URL length limits.
pub const DEFAULT_DIFF_LENGTH_LIMIT: usize = 1950;

/// Parsed contents of a `patch-issue.toml` file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct IssueSettings {
    /// Maximum diff length (in characters) embedded in a drafted issue.
    pub diff_length_limit: usize,

    /// Repositories never recommended for issues, as `org/repo`.
    pub excluded_repositories: Vec<String>,
}

impl Default for IssueSettings {
    fn default() -> Self {
        Self {
            diff_length_limit: DEFAULT_DIFF_LENGTH_LIMIT,
            excluded_repositories: DEFAULT_EXCLUDED_REPOSITORIES
                .iter()
                .map(|(org, repo)| format!("{org}/{repo}"))
                .collect(),
        }
    }
}

impl IssueSettings {
    /// Loads and validates settings from `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        settings.validate(path)?;
        debug!(
            path = %path.display(),
            diff_length_limit = settings.diff_length_limit,
            excluded = settings.excluded_repositories.len(),
            "Loaded settings"
        );
        Ok(settings)
    }

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for a zero diff length limit
    /// or an excluded repository that is not a recognised repository descriptor.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if self.diff_length_limit == 0 {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: "diff-length-limit must be greater than zero".to_string(),
            });
        }

        if let Some(entry) = self
            .excluded_repositories
            .iter()
            .find(|entry| parse_repository(entry).is_none())
        {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: format!("excluded repository '{entry}' is not in 'org/repo' format"),
            });
        }

        Ok(())
    }

    /// Builds the recommendation policy from the excluded repositories.
    #[must_use]
    pub fn policy(&self) -> RecommendationPolicy {
        RecommendationPolicy::new(
            self.excluded_repositories
                .iter()
                .filter_map(|entry| parse_repository(entry))
                .map(|vcs| (vcs.organization, vcs.repository)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_reference_behaviour() {
        let settings = IssueSettings::default();
        assert_eq!(settings.diff_length_limit, 1950);
        assert_eq!(
            settings.excluded_repositories,
            vec!["DefinitelyTyped/DefinitelyTyped".to_string()]
        );
        assert_eq!(settings.policy(), RecommendationPolicy::default());
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = IssueSettings::load(&temp.path().join(SETTINGS_FILE_NAME)).unwrap();
        assert_eq!(settings, IssueSettings::default());
    }

    #[test]
    fn load_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "diff-length-limit = 4000\n").unwrap();

        let settings = IssueSettings::load(&path).unwrap();
        assert_eq!(settings.diff_length_limit, 4000);
        assert_eq!(
            settings.excluded_repositories,
            IssueSettings::default().excluded_repositories
        );
    }

    #[test]
    fn load_custom_exclusions() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SETTINGS_FILE_NAME);
        fs::write(
            &path,
            r#"
excluded-repositories = ["acme/monorepo", "github:acme/types"]
"#,
        )
        .unwrap();

        let policy = IssueSettings::load(&path).unwrap().policy();
        assert!(policy.is_excluded("acme", "monorepo"));
        assert!(policy.is_excluded("acme", "types"));
        assert!(!policy.is_excluded("DefinitelyTyped", "DefinitelyTyped"));
    }

    #[test]
    fn load_rejects_zero_limit() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "diff-length-limit = 0\n").unwrap();

        let result = IssueSettings::load(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn load_rejects_malformed_exclusion() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "excluded-repositories = [\"not a repo\"]\n").unwrap();

        let result = IssueSettings::load(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "diff-length-limit = \"many\"\n").unwrap();

        let result = IssueSettings::load(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }
}
