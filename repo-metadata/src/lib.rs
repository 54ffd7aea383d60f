#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod git;
pub mod metadata;
pub mod resolver;

pub use config::{ConfigError, MetadataConfig};
pub use git::{locate_vcs_root, GitError, SystemGit, VersionControl};
pub use metadata::{build_resources, BugTracker, PackageMetadata, Repository, Resources};
pub use resolver::{
    resolve_metadata, resolve_metadata_with, resolve_repo_reference, RepoReference,
};
