//! Issue URL construction.

use tracing::{debug, info};
use url::Url;

use super::draft::patch_file_name;
use super::{IssueDraft, IssueError, IssueUrlRequest, PatchCopyNotice};
use crate::templates::{generate_diff_placeholder, IssueBodyData, TemplateRenderer};
use crate::vcs::VcsIdentity;

/// Builds `https://<host>/<org>/<repo>/issues/new?title=&body=<body>`.
///
/// The title is left empty. Query values are form-encoded.
///
/// # Errors
///
/// Returns [`IssueError::InvalidUrl`] if the base URL can't be parsed.
pub fn new_issue_url(vcs: &VcsIdentity, body: &str) -> Result<Url, IssueError> {
    let base = format!(
        "https://{}/{}/{}/issues/new",
        vcs.provider.host(),
        vcs.organization,
        vcs.repository
    );
    let mut url = Url::parse(&base).map_err(|e| IssueError::InvalidUrl {
        url: base.clone(),
        source: e,
    })?;

    url.query_pairs_mut()
        .append_pair("title", "")
        .append_pair("body", body);

    Ok(url)
}

/// Drafts issue URLs, falling back to a placeholder for long diffs.
pub struct IssueUrlBuilder<'a> {
    renderer: &'a TemplateRenderer,
    diff_length_limit: usize,
}

impl<'a> IssueUrlBuilder<'a> {
    /// Creates a builder.
    ///
    /// Diffs longer than `diff_length_limit` characters are not embedded.
    #[must_use]
    pub fn new(renderer: &'a TemplateRenderer, diff_length_limit: usize) -> Self {
        Self {
            renderer,
            diff_length_limit,
        }
    }

    /// Drafts the issue for `request`.
    ///
    /// The limit is checked against the raw diff length, not the encoded
    /// URL, so the resulting URL may still be longer than the limit.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError`] if rendering the body or forming the URL fails.
    pub fn build(&self, request: &IssueUrlRequest<'_>) -> Result<IssueDraft, IssueError> {
        let body = self.render_body(request, request.diff)?;
        let url = new_issue_url(request.vcs, &body)?;

        let diff_length = request.diff.chars().count();
        if diff_length <= self.diff_length_limit {
            debug!(diff_length, url_length = url.as_str().len(), "Embedded diff in issue");
            return Ok(IssueDraft {
                url,
                body,
                notice: None,
            });
        }

        info!(
            diff_length,
            limit = self.diff_length_limit,
            patch = %request.patch_path,
            "Diff too long to embed, using placeholder"
        );
        let placeholder = generate_diff_placeholder(patch_file_name(request.patch_path));
        let body = self.render_body(request, &placeholder)?;
        let url = new_issue_url(request.vcs, &body)?;

        Ok(IssueDraft {
            url,
            body,
            notice: Some(PatchCopyNotice {
                patch_path: request.patch_path.to_string(),
            }),
        })
    }

    fn render_body(&self, request: &IssueUrlRequest<'_>, diff: &str) -> Result<String, IssueError> {
        Ok(self.renderer.render_issue_body(&IssueBodyData {
            package_name: request.package_name,
            package_version: request.package_version,
            diff,
        })?)
    }
}
