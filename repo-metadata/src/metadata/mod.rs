//! Package manifest resource construction.
//!
//! Pure formatting of a resolved repository reference into the resource
//! mapping consumed by the host packaging tool. No I/O happens here.

mod resources;

pub use resources::{BugTracker, PackageMetadata, Repository, Resources};

use crate::resolver::RepoReference;

/// Hosting domain used for derived URLs.
pub const REPOSITORY_HOST: &str = "github.com";

/// Builds the resource mapping for a resolved repository reference.
///
/// The repository URL is `http://github.com/<user>/<repo>`; the homepage
/// falls back to it when no override is given, and the bug tracker entry is
/// included only when `issues` is set.
///
/// Returns `None` when `reference` is absent, regardless of the other
/// arguments; partial metadata is never produced.
#[must_use]
pub fn build_resources(
    reference: Option<&RepoReference>,
    homepage: Option<&str>,
    issues: bool,
) -> Option<Resources> {
    let reference = reference?;
    let repository_url = format!(
        "http://{}/{}/{}",
        REPOSITORY_HOST, reference.user, reference.repo
    );

    let homepage = homepage
        .map(str::to_string)
        .unwrap_or_else(|| repository_url.clone());

    let bugtracker = issues.then(|| BugTracker {
        web: format!("{repository_url}/issues"),
    });

    Some(Resources {
        homepage,
        repository: Repository {
            kind: "git".to_string(),
            url: repository_url.clone(),
            web: repository_url,
        },
        bugtracker,
    })
}
