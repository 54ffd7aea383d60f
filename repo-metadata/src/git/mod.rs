//! Version-control access.
//!
//! Root discovery is a pure path walk; remote queries shell out to the git
//! executable behind the [`VersionControl`] trait so tests can substitute an
//! in-memory implementation.

mod error;

pub use error::GitError;

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Default bound on a single git invocation, in seconds.
pub const DEFAULT_GIT_TIMEOUT_SECS: u64 = 5;

/// Capability interface over the version-control tool.
///
/// The single operation reads the configured URL of a named remote for the
/// repository at `dir`. [`SystemGit`] is the real implementation; tests
/// substitute in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait VersionControl {
    /// Returns the configured URL for remote `name`, or `None` if the remote
    /// is missing or has no URL.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotInstalled`] when the version-control tool
    /// itself is unavailable, which callers treat as fatal for the whole
    /// resolution rather than as an unresolved remote.
    async fn remote_url(&self, dir: &Path, name: &str) -> Result<Option<String>, GitError>;
}

/// Finds the enclosing version-control root.
///
/// Walks upward from `start` toward the filesystem root and returns the
/// first directory containing a `.git` marker directory. Operates purely on
/// path values; the process working directory is neither read nor changed.
#[must_use]
pub fn locate_vcs_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").is_dir())
        .map(Path::to_path_buf)
}

/// Queries remotes by invoking the `git` executable.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
    timeout: Duration,
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemGit {
    /// Creates a client invoking `git` with the default timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
            timeout: Duration::from_secs(DEFAULT_GIT_TIMEOUT_SECS),
        }
    }

    /// Sets the bound on a single git invocation.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the executable name or path.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl VersionControl for SystemGit {
    async fn remote_url(&self, dir: &Path, name: &str) -> Result<Option<String>, GitError> {
        debug!(remote = name, dir = %dir.display(), "Querying remote URL");

        let args = format!("remote show -n {name}");

        // `-n` keeps git offline; the remote is read from local config only.
        let invocation = Command::new(&self.program)
            .args(["remote", "show", "-n", name])
            .current_dir(dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = match tokio::time::timeout(self.timeout, invocation).await {
            Err(_) => {
                return Err(GitError::Timeout {
                    args,
                    timeout_secs: self.timeout.as_secs(),
                })
            }
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(GitError::NotInstalled {
                    program: self.program.clone(),
                })
            }
            Ok(Err(e)) => return Err(GitError::Io { args, source: e }),
            Ok(Ok(output)) => output,
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(remote = name, stderr = %stderr.trim(), "git remote show failed");
            return Ok(None);
        }

        Ok(parse_remote_show(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Extracts the remote URL from `git remote show -n` output.
///
/// Takes the remainder of the first line containing `URL:`, which covers
/// both the bare `URL:` form and modern git's `Fetch URL:`.
fn parse_remote_show(output: &str) -> Option<String> {
    for line in output.lines() {
        if let Some((_, value)) = line.split_once("URL:") {
            let url = value.trim();
            if !url.is_empty() {
                return Some(url.to_string());
            }
        }
    }
    None
}
