//! Template renderer.

use handlebars::{no_escape, Handlebars};
use serde::Serialize;

use super::ISSUE_BODY_TEMPLATE;

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Values substituted into the issue body template.
#[derive(Debug, Clone, Serialize)]
pub struct IssueBodyData<'a> {
    /// Name of the patched package.
    pub package_name: &'a str,

    /// Installed version of the patched package.
    pub package_version: &'a str,

    /// Diff text, or the placeholder that replaces it.
    pub diff: &'a str,
}

/// Template renderer for issue bodies.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
    issue_template: String,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a renderer using [`ISSUE_BODY_TEMPLATE`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_issue_template(ISSUE_BODY_TEMPLATE)
    }

    /// Creates a renderer with a custom issue body template.
    #[must_use]
    pub fn with_issue_template(issue_template: impl Into<String>) -> Self {
        Self {
            handlebars: create_handlebars_registry(),
            issue_template: issue_template.into(),
        }
    }

    /// Renders the issue body.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_issue_body(&self, data: &IssueBodyData<'_>) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(&self.issue_template, data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TemplateError;

    fn sample_data() -> IssueBodyData<'static> {
        IssueBodyData {
            package_name: "left-pad",
            package_version: "1.3.0",
            diff: "-a\n+b",
        }
    }

    #[test]
    fn test_render_default_body() {
        let renderer = TemplateRenderer::new();
        let body = renderer.render_issue_body(&sample_data()).unwrap();

        assert!(body.starts_with("Hi! 👋 \n      \n"));
        assert!(body.contains("to patch `left-pad@1.3.0` for the project"));
        assert!(body.contains("```diff\n-a\n+b\n```\n"));
        assert!(body.ends_with(
            "<em>This issue body was [partially generated by patch-package](https://github.com/ds300/patch-package/issues/296).</em>\n"
        ));
    }

    #[test]
    fn test_render_custom_template() {
        let renderer = TemplateRenderer::with_issue_template("{{package_name}}@{{package_version}}");
        let body = renderer.render_issue_body(&sample_data()).unwrap();

        assert_eq!(body, "left-pad@1.3.0");
    }

    #[test]
    fn test_no_html_escaping() {
        let renderer = TemplateRenderer::with_issue_template("{{diff}}");
        let data = IssueBodyData {
            diff: "-<div class=\"a\">&amp;</div>",
            ..sample_data()
        };

        // Should NOT escape HTML entities
        assert_eq!(
            renderer.render_issue_body(&data).unwrap(),
            "-<div class=\"a\">&amp;</div>"
        );
    }

    #[test]
    fn test_diff_is_not_interpreted_as_template() {
        let renderer = TemplateRenderer::new();
        let data = IssueBodyData {
            diff: "+const t = \"{{missing}}\";",
            ..sample_data()
        };

        let body = renderer.render_issue_body(&data).unwrap();
        assert!(body.contains("+const t = \"{{missing}}\";"));
    }

    #[test]
    fn test_strict_mode_rejects_unknown_variables() {
        let renderer = TemplateRenderer::with_issue_template("{{unknown}}");
        let result = renderer.render_issue_body(&sample_data());

        assert!(matches!(result, Err(TemplateError::RenderError(_))));
    }
}
