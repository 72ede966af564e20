//! Suggesting the issue drafting command after a patch is made.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::manifest::PackageDescriptor;
use crate::recommendation::RecommendationPolicy;
use crate::templates::PATCH_TOOL;
use crate::vcs::{resolve_vcs, Provider};

/// Package manager used by the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    /// npm with `package-lock.json` (or no lockfile).
    #[default]
    Npm,
    /// Yarn.
    Yarn,
    /// npm with `npm-shrinkwrap.json`.
    NpmShrinkwrap,
}

impl PackageManager {
    /// Detects the package manager from lockfiles in `app_root`.
    #[must_use]
    pub fn detect(app_root: &Path) -> Self {
        if app_root.join("yarn.lock").exists() {
            Self::Yarn
        } else if app_root.join("npm-shrinkwrap.json").exists() {
            Self::NpmShrinkwrap
        } else {
            Self::Npm
        }
    }

    /// Returns the command that runs a locally installed binary.
    #[must_use]
    pub fn invoker(self) -> &'static str {
        match self {
            Self::Yarn => "yarn",
            Self::Npm | Self::NpmShrinkwrap => "npx",
        }
    }

    /// Returns the package manager name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::NpmShrinkwrap => "npm-shrinkwrap",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "npm-shrinkwrap" => Ok(Self::NpmShrinkwrap),
            other => Err(format!("unknown package manager '{other}'")),
        }
    }
}

/// Renders the suggestion to draft an issue for `package`.
#[must_use]
pub fn render_issue_creation_prompt(
    package: &PackageDescriptor,
    package_manager: PackageManager,
    provider: Provider,
) -> String {
    format!(
        "💡 {} is on {}! To draft an issue based on your patch run\n\n    {} {} {} --create-issue\n",
        package.name,
        provider,
        package_manager.invoker(),
        PATCH_TOOL,
        package.path_specifier
    )
}

/// Writes the issue drafting suggestion if the package has a recommendable repository.
///
/// Returns whether anything was written.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn maybe_print_issue_creation_prompt(
    package: &PackageDescriptor,
    package_manager: PackageManager,
    policy: &RecommendationPolicy,
    out: &mut impl Write,
) -> io::Result<bool> {
    let vcs = match resolve_vcs(package.repository.as_ref()) {
        Ok(vcs) => vcs,
        Err(reason) => {
            debug!(package = %package.path_specifier, %reason, "No issue prompt");
            return Ok(false);
        }
    };

    if !policy.should_recommend(Some(&vcs)) {
        debug!(package = %package.path_specifier, vcs = %vcs.full_name(), "Repository excluded from issue prompts");
        return Ok(false);
    }

    writeln!(
        out,
        "{}",
        render_issue_creation_prompt(package, package_manager, vcs.provider)
    )?;
    Ok(true)
}
