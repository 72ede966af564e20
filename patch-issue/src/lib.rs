#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod issues;
pub mod launcher;
pub mod manifest;
pub mod prompt;
pub mod recommendation;
pub mod templates;
pub mod vcs;

pub use config::{ConfigError, IssueSettings, DEFAULT_DIFF_LENGTH_LIMIT, SETTINGS_FILE_NAME};
pub use issues::{new_issue_url, IssueDraft, IssueError, IssueUrlBuilder, IssueUrlRequest, PatchCopyNotice};
pub use launcher::{
    trim_trailing_newline, BrowserOpener, IssueLauncher, LaunchError, NoopBrowser, PatchSubmission,
    SystemBrowser,
};
pub use manifest::{package_dir_for, ManifestError, PackageDescriptor, PackageManifest};
pub use prompt::{maybe_print_issue_creation_prompt, render_issue_creation_prompt, PackageManager};
pub use recommendation::RecommendationPolicy;
pub use templates::{IssueBodyData, TemplateError, TemplateRenderer};
pub use vcs::{parse_repository, resolve_vcs, Provider, RepositoryField, UnresolvedVcs, VcsIdentity};
