//! Orchestrates issue drafting for a patched package.

use std::io::Write;

use tracing::{info, info_span};

use super::{BrowserOpener, LaunchError};
use crate::config::IssueSettings;
use crate::issues::{IssueDraft, IssueUrlBuilder, IssueUrlRequest};
use crate::manifest::PackageDescriptor;
use crate::templates::TemplateRenderer;
use crate::vcs::resolve_vcs;

/// A freshly created patch to draft an issue from.
#[derive(Debug, Clone)]
pub struct PatchSubmission<'a> {
    /// The patched package.
    pub package: &'a PackageDescriptor,

    /// Installed version of the patched package.
    pub package_version: &'a str,

    /// Contents of the patch file.
    pub patch_contents: &'a str,

    /// Path of the patch file, shown to the user when the diff can't be embedded.
    pub patch_path: &'a str,
}

/// Removes exactly one trailing `\n`.
///
/// The issue template already ends the diff block with a newline.
#[must_use]
pub fn trim_trailing_newline(contents: &str) -> &str {
    contents.strip_suffix('\n').unwrap_or(contents)
}

/// Drafts issues and opens them with a [`BrowserOpener`].
pub struct IssueLauncher<B> {
    settings: IssueSettings,
    renderer: TemplateRenderer,
    browser: B,
}

impl<B: BrowserOpener> IssueLauncher<B> {
    /// Creates a launcher.
    pub fn new(settings: IssueSettings, browser: B) -> Self {
        Self {
            settings,
            renderer: TemplateRenderer::new(),
            browser,
        }
    }

    /// Returns the browser the launcher opens drafts with.
    pub fn browser(&self) -> &B {
        &self.browser
    }

    /// Drafts an issue for `submission` and opens it.
    ///
    /// When the diff is too long to embed, a copy instruction is written to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::VcsNotFound`] if the package has no usable
    /// repository, or another [`LaunchError`] if drafting or writing fails.
    pub fn open_issue_creation_link(
        &self,
        submission: &PatchSubmission<'_>,
        out: &mut impl Write,
    ) -> Result<IssueDraft, LaunchError> {
        let package = submission.package;
        let _span = info_span!("open_issue", package = %package.path_specifier).entered();

        let vcs = resolve_vcs(package.repository.as_ref()).map_err(|reason| {
            LaunchError::VcsNotFound {
                path_specifier: package.path_specifier.clone(),
                reason,
            }
        })?;

        let builder = IssueUrlBuilder::new(&self.renderer, self.settings.diff_length_limit);
        let draft = builder.build(&IssueUrlRequest {
            vcs: &vcs,
            package_name: &package.name,
            package_version: submission.package_version,
            diff: trim_trailing_newline(submission.patch_contents),
            patch_path: submission.patch_path,
        })?;

        if let Some(notice) = &draft.notice {
            writeln!(out, "{notice}")?;
        }

        info!(vcs = %vcs.full_name(), embedded = draft.diff_embedded(), "Opening issue draft");
        self.browser.open(draft.url.as_str());

        Ok(draft)
    }
}
