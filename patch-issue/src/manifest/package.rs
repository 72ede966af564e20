//! Installed package descriptors.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::ManifestError;
use crate::vcs::RepositoryField;

/// File name of a package manifest.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// The subset of `package.json` this crate reads.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageManifest {
    /// Package name.
    #[serde(default)]
    pub name: Option<String>,

    /// Installed version.
    #[serde(default)]
    pub version: Option<String>,

    /// Declared source repository.
    #[serde(default)]
    pub repository: Option<RepositoryField>,
}

impl PackageManifest {
    /// Loads `package.json` from a package directory.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] if the file can't be read or parsed.
    pub fn load(package_dir: &Path) -> Result<Self, ManifestError> {
        let path = package_dir.join(MANIFEST_FILE_NAME);
        debug!(path = %path.display(), "Loading package manifest");

        let content = std::fs::read_to_string(&path).map_err(|e| ManifestError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| ManifestError::JsonError {
            path: path.display().to_string(),
            source: e,
        })
    }
}

/// A patched dependency, as installed in a project.
#[derive(Debug, Clone)]
pub struct PackageDescriptor {
    /// Package name.
    pub name: String,

    /// Human-readable locator within the dependency tree (e.g. `a/b` or `@types/node`).
    pub path_specifier: String,

    /// Directory the package is installed in.
    pub path: PathBuf,

    /// Installed version, if the manifest declares one.
    pub version: Option<String>,

    /// Declared source repository.
    pub repository: Option<RepositoryField>,
}

impl PackageDescriptor {
    /// Loads the package installed for `path_specifier` under `app_root`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] if the manifest can't be loaded.
    pub fn load(app_root: &Path, path_specifier: &str) -> Result<Self, ManifestError> {
        Self::from_dir(package_dir_for(app_root, path_specifier), path_specifier)
    }

    /// Loads the package installed in `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] if the manifest can't be loaded.
    pub fn from_dir(path: PathBuf, path_specifier: &str) -> Result<Self, ManifestError> {
        let manifest = PackageManifest::load(&path)?;
        let name = manifest
            .name
            .unwrap_or_else(|| last_package_name(path_specifier));

        Ok(Self {
            name,
            path_specifier: path_specifier.to_string(),
            path,
            version: manifest.version,
            repository: manifest.repository,
        })
    }

    /// Returns the installed version.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::MissingField`] if the manifest has no version.
    pub fn require_version(&self) -> Result<&str, ManifestError> {
        self.version
            .as_deref()
            .ok_or_else(|| ManifestError::MissingField {
                path: self.path.join(MANIFEST_FILE_NAME).display().to_string(),
                field: "version",
            })
    }
}

/// Returns the install directory for a path specifier.
///
/// `a/b` is `b` nested in `a`'s own `node_modules`; scoped names such as
/// `@types/node` stay one package.
#[must_use]
pub fn package_dir_for(app_root: &Path, path_specifier: &str) -> PathBuf {
    package_names(path_specifier)
        .iter()
        .fold(app_root.to_path_buf(), |dir, name| {
            dir.join("node_modules").join(name)
        })
}

/// Splits a path specifier into package names.
fn package_names(path_specifier: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut segments = path_specifier.split('/').filter(|s| !s.is_empty());

    while let Some(segment) = segments.next() {
        if segment.starts_with('@') {
            if let Some(name) = segments.next() {
                names.push(format!("{segment}/{name}"));
                continue;
            }
        }
        names.push(segment.to_string());
    }

    names
}

fn last_package_name(path_specifier: &str) -> String {
    package_names(path_specifier).pop().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn package_dir_for_plain_and_scoped() {
        let root = Path::new("/app");
        assert_eq!(
            package_dir_for(root, "left-pad"),
            PathBuf::from("/app/node_modules/left-pad")
        );
        assert_eq!(
            package_dir_for(root, "@types/node"),
            PathBuf::from("/app/node_modules/@types/node")
        );
    }

    #[test]
    fn package_dir_for_nested() {
        let root = Path::new("/app");
        assert_eq!(
            package_dir_for(root, "a/@scope/b/c"),
            PathBuf::from("/app/node_modules/a/node_modules/@scope/b/node_modules/c")
        );
    }

    #[test]
    fn last_package_name_keeps_scope() {
        assert_eq!(last_package_name("left-pad"), "left-pad");
        assert_eq!(last_package_name("a/b"), "b");
        assert_eq!(last_package_name("@types/node"), "@types/node");
        assert_eq!(last_package_name("a/@types/node"), "@types/node");
    }

    #[test]
    fn load_descriptor_from_manifest() {
        let temp = TempDir::new().unwrap();
        let dir = package_dir_for(temp.path(), "react");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(MANIFEST_FILE_NAME),
            r#"{ "name": "react", "version": "18.2.0", "repository": "github:facebook/react" }"#,
        )
        .unwrap();

        let package = PackageDescriptor::load(temp.path(), "react").unwrap();
        assert_eq!(package.name, "react");
        assert_eq!(package.path_specifier, "react");
        assert_eq!(package.path, dir);
        assert_eq!(package.require_version().unwrap(), "18.2.0");
        assert_eq!(
            package.repository,
            Some(RepositoryField::Shorthand("github:facebook/react".to_string()))
        );
    }

    #[test]
    fn load_descriptor_without_name_uses_specifier() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(MANIFEST_FILE_NAME), "{}").unwrap();

        let package = PackageDescriptor::from_dir(temp.path().to_path_buf(), "a/b").unwrap();
        assert_eq!(package.name, "b");
        assert!(package.repository.is_none());
        assert!(matches!(
            package.require_version(),
            Err(ManifestError::MissingField { field: "version", .. })
        ));
    }

    #[test]
    fn load_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let result = PackageDescriptor::load(temp.path(), "missing");
        assert!(matches!(result, Err(ManifestError::IoError { .. })));
    }

    #[test]
    fn load_invalid_manifest() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(MANIFEST_FILE_NAME), "{ not json").unwrap();

        let result = PackageManifest::load(temp.path());
        assert!(matches!(result, Err(ManifestError::JsonError { .. })));
    }
}
