//! Issue body rendering using Handlebars.
//!
//! The body is Markdown, so HTML escaping is disabled and missing variables
//! are treated as errors.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, IssueBodyData, TemplateRenderer};

/// Name of the tool credited in drafted issues and suggested commands.
pub const PATCH_TOOL: &str = "patch-package";

/// Markdown body of a drafted issue.
///
/// The first two lines carry trailing whitespace on purpose; bodies stay
/// byte-identical to the ones `patch-package` drafts.
pub const ISSUE_BODY_TEMPLATE: &str = concat!(
    "Hi! 👋 \n",
    "      \n",
    "Firstly, thanks for your work on this project! 🙂\n",
    "\n",
    "Today I used [patch-package](https://github.com/ds300/patch-package) to patch ",
    "`{{package_name}}@{{package_version}}` for the project I'm working on.\n",
    "\n",
    "<!-- 🔺️🔺️🔺️ PLEASE REPLACE THIS BLOCK with a description of your problem, ",
    "and any other relevant context 🔺️🔺️🔺️ -->\n",
    "\n",
    "Here is the diff that solved my problem:\n",
    "\n",
    "```diff\n",
    "{{diff}}\n",
    "```\n",
    "\n",
    "<em>This issue body was [partially generated by patch-package]",
    "(https://github.com/ds300/patch-package/issues/296).</em>\n",
);

/// Generates the comment that stands in for a diff too large to embed.
///
/// Format: `<!-- 🔺️🔺️🔺️ PLEASE REPLACE THIS BLOCK with the diff contents of {file_name}. 🔺️🔺️🔺️ -->`
#[must_use]
pub fn generate_diff_placeholder(file_name: &str) -> String {
    format!("<!-- 🔺️🔺️🔺️ PLEASE REPLACE THIS BLOCK with the diff contents of {file_name}. 🔺️🔺️🔺️ -->")
}
