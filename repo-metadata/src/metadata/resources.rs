//! Resource mapping types for the package manifest.

use serde::Serialize;

/// Top-level mapping handed back to the host packaging tool.
///
/// Serializes to `{"resources": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    /// Resolved resource links.
    pub resources: Resources,
}

/// Resource links derived from a resolved repository reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resources {
    /// Project homepage.
    pub homepage: String,

    /// Source repository.
    pub repository: Repository,

    /// Issue tracker, present only when enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bugtracker: Option<BugTracker>,
}

/// Source repository entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    /// Version-control system kind.
    #[serde(rename = "type")]
    pub kind: String,

    /// Checkout URL.
    pub url: String,

    /// Browsable URL.
    pub web: String,
}

/// Issue tracker entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BugTracker {
    /// Browsable issue tracker URL.
    pub web: String,
}
