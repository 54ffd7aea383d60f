//! Hosted-repository reference extraction.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Hosting convention: the `github.com` marker followed by `:` or `/`, a
/// user segment, and a repository segment terminating the URL. An optional
/// trailing `.git` suffix and trailing slash are stripped. The marker match
/// is case-insensitive, and the scp-style `git@github.com:user/repo` form is
/// accepted alongside URL forms.
static HOSTING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)github\.com[:/]+([^/\s]+)/([^/\s]+?)(?:\.git)?/?$")
        .expect("hosting pattern regex is valid")
});

/// A user/repository pair extracted from a hosted-repository remote URL.
///
/// Either both fields are populated or the reference is absent as a whole;
/// partial references are never produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoReference {
    /// Repository owner (user or organization).
    pub user: String,

    /// Repository name, without any `.git` suffix.
    pub repo: String,
}

impl RepoReference {
    /// Extracts a reference from a remote URL.
    ///
    /// Returns `None` when the URL does not follow the
    /// `github.com/<user>/<repo>[.git]` hosting convention.
    #[must_use]
    pub fn from_remote_url(url: &str) -> Option<Self> {
        let captures = HOSTING_PATTERN.captures(url)?;
        Some(Self {
            user: captures.get(1)?.as_str().to_string(),
            repo: captures.get(2)?.as_str().to_string(),
        })
    }
}
