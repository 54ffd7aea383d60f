//! Repository reference resolution.
//!
//! Probes a repository's configured remotes in priority order and extracts a
//! hosted user/repository pair from the first URL matching the hosting
//! convention. Also hosts the full best-effort pipeline from a starting
//! directory to the final resource mapping.

mod reference;

pub use reference::RepoReference;

use crate::config::MetadataConfig;
use crate::git::{locate_vcs_root, GitError, SystemGit, VersionControl};
use crate::metadata::{build_resources, PackageMetadata};
use std::path::Path;
use tracing::{debug, info, warn};

/// Resolves a repository reference from the given remote candidates.
///
/// Candidates are probed in order and the first URL matching the hosting
/// pattern wins. A remote that is unresolved, fails to resolve, or resolves
/// to a non-matching URL is skipped; a missing git executable aborts the
/// whole probe.
///
/// # Arguments
///
/// * `vcs` - Version-control client
/// * `dir` - Repository root directory
/// * `candidates` - Remote names in priority order
pub async fn resolve_repo_reference<V: VersionControl>(
    vcs: &V,
    dir: &Path,
    candidates: &[String],
) -> Option<RepoReference> {
    for name in candidates {
        let url = match vcs.remote_url(dir, name).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                debug!(remote = %name, "Remote has no configured URL");
                continue;
            }
            Err(GitError::NotInstalled { .. }) => {
                warn!("git executable not found, skipping repository metadata");
                return None;
            }
            Err(e) => {
                warn!(remote = %name, error = %e, "Failed to query remote");
                continue;
            }
        };

        match RepoReference::from_remote_url(&url) {
            Some(reference) => {
                info!(
                    remote = %name,
                    user = %reference.user,
                    repo = %reference.repo,
                    "Resolved hosted repository"
                );
                return Some(reference);
            }
            None => {
                debug!(remote = %name, url = %url, "Remote URL does not match hosting pattern");
            }
        }
    }

    None
}

/// Resolves package metadata for the project containing `start_dir`.
///
/// The full pipeline: locate the version-control root, probe the configured
/// remotes, and format the resulting resources. Every failure degrades to
/// `None`; no error is surfaced to the caller.
pub async fn resolve_metadata_with<V: VersionControl>(
    vcs: &V,
    start_dir: &Path,
    config: &MetadataConfig,
) -> Option<PackageMetadata> {
    let root = match locate_vcs_root(start_dir) {
        Some(root) => root,
        None => {
            debug!(start = %start_dir.display(), "No version-control root found");
            return None;
        }
    };

    let reference = resolve_repo_reference(vcs, &root, &config.remote).await?;
    let resources = build_resources(Some(&reference), config.homepage.as_deref(), config.issues)?;

    Some(PackageMetadata { resources })
}

/// Resolves package metadata using the system git executable.
pub async fn resolve_metadata(
    start_dir: &Path,
    config: &MetadataConfig,
) -> Option<PackageMetadata> {
    resolve_metadata_with(&SystemGit::new(), start_dir, config).await
}
