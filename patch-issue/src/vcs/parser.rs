//! Repository descriptor parsing.
//!
//! Accepted forms, tried in order:
//! - `github:org/repo` shorthand
//! - hosted URLs such as `https://github.com/org/repo.git`,
//!   `git+ssh://git@github.com/org/repo` or `git@github.com:org/repo`
//! - bare `org/repo`
//!
//! Anything else is unparseable. Parsing never fails loudly.

use super::{Provider, VcsIdentity};

/// Parses a repository descriptor into a [`VcsIdentity`].
///
/// Returns `None` when the descriptor is not a recognised format.
#[must_use]
pub fn parse_repository(repository: &str) -> Option<VcsIdentity> {
    let (prefixed, rest) = strip_shorthand_prefix(repository);
    let (hosted, spec) = match find_hosted_spec(rest) {
        Some((provider, spec)) => (Some(provider), spec),
        None => (None, rest),
    };

    let (organization, name) = split_spec(spec)?;

    Some(VcsIdentity {
        organization: organization.to_string(),
        repository: name.to_string(),
        provider: hosted.or(prefixed).unwrap_or(Provider::GitHub),
    })
}

/// Removes a `<provider>:` shorthand prefix, if any.
fn strip_shorthand_prefix(repository: &str) -> (Option<Provider>, &str) {
    for provider in Provider::ALL {
        if let Some(rest) = repository.strip_prefix(provider.shorthand_prefix()) {
            return (Some(*provider), rest);
        }
    }
    (None, repository)
}

/// Finds `<host>:org/repo` or `<host>/org/repo` and returns the `org/repo` part.
///
/// The repo segment may be followed by nothing, a `.git` suffix (dropped),
/// or a `/...` path suffix.
fn find_hosted_spec(input: &str) -> Option<(Provider, &str)> {
    for provider in Provider::ALL {
        let host = provider.host();
        for (index, _) in input.match_indices(host) {
            let after_host = &input[index + host.len()..];
            let Some(path) = after_host.strip_prefix(|c: char| c == ':' || c == '/') else {
                continue;
            };
            if let Some(spec) = leading_spec(path) {
                return Some((*provider, spec));
            }
        }
    }
    None
}

/// Matches `org/repo` at the start of `path`, followed by end of input,
/// a `.git` suffix, or a `/`.
fn leading_spec(path: &str) -> Option<&str> {
    let organization = segment_len(path);
    if organization == 0 || !path[organization..].starts_with('/') {
        return None;
    }

    let repo_start = organization + 1;
    let repo_len = segment_len(&path[repo_start..]);
    if repo_len == 0 {
        return None;
    }

    let mut end = repo_start + repo_len;
    let remainder = &path[end..];
    if remainder.is_empty() {
        // `org/repo.git` keeps `.git` only when nothing else would be left.
        if path[repo_start..end].len() > 4 && path[..end].ends_with(".git") {
            end -= 4;
        }
    } else if !remainder.starts_with('/') {
        return None;
    }

    Some(&path[..end])
}

/// Splits a strict `org/repo` shorthand.
fn split_spec(spec: &str) -> Option<(&str, &str)> {
    let (organization, name) = spec.split_once('/')?;
    if is_segment(organization) && is_segment(name) {
        Some((organization, name))
    } else {
        None
    }
}

fn is_segment(value: &str) -> bool {
    !value.is_empty() && segment_len(value) == value.len()
}

/// Byte length of the leading run of `[A-Za-z0-9_.-]`.
fn segment_len(value: &str) -> usize {
    value
        .find(|c: char| !is_segment_char(c))
        .unwrap_or(value.len())
}

fn is_segment_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github(organization: &str, repository: &str) -> Option<VcsIdentity> {
        Some(VcsIdentity {
            organization: organization.to_string(),
            repository: repository.to_string(),
            provider: Provider::GitHub,
        })
    }

    #[test]
    fn parses_supported_forms() {
        let inputs = [
            "github:org/repo",
            "https://github.com/org/repo",
            "https://github.com/org/repo.git",
            "git@github.com:org/repo",
            "git+ssh://git@github.com/org/repo.git",
            "git+https://github.com/org/repo.git",
            "org/repo",
        ];

        for input in inputs {
            assert_eq!(parse_repository(input), github("org", "repo"), "{input}");
        }
    }

    #[test]
    fn parses_url_with_path_suffix() {
        assert_eq!(
            parse_repository("https://github.com/facebook/react/tree/main/packages/react"),
            github("facebook", "react")
        );
    }

    #[test]
    fn keeps_dots_and_hyphens_in_names() {
        assert_eq!(
            parse_repository("https://github.com/lodash-archive/lodash.custom.git"),
            github("lodash-archive", "lodash.custom")
        );
        assert_eq!(parse_repository("github:vercel/next.js"), github("vercel", "next.js"));
    }

    #[test]
    fn rejects_unrecognised_input() {
        assert_eq!(parse_repository("not a repo"), None);
        assert_eq!(parse_repository(""), None);
        assert_eq!(parse_repository("https://gitlab.com/org/repo"), None);
        assert_eq!(parse_repository("https://bitbucket.org/org/repo.git"), None);
        assert_eq!(parse_repository("org/repo/extra"), None);
        assert_eq!(parse_repository("github:"), None);
        assert_eq!(parse_repository("/repo"), None);
    }

    #[test]
    fn rejects_hosted_url_with_query_suffix() {
        assert_eq!(parse_repository("https://github.com/org/repo#readme"), None);
    }

    #[test]
    fn keeps_git_suffix_before_path() {
        assert_eq!(
            parse_repository("https://github.com/org/repo.git/tree/main"),
            github("org", "repo.git")
        );
    }
}
