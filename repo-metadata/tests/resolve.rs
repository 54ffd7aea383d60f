use repo_metadata::{
    resolve_metadata_with, GitError, MetadataConfig, VersionControl,
};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct FakeGit {
    remotes: HashMap<String, String>,
}

impl FakeGit {
    fn single(name: &str, url: &str) -> Self {
        Self {
            remotes: HashMap::from([(name.to_string(), url.to_string())]),
        }
    }
}

impl VersionControl for FakeGit {
    async fn remote_url(&self, _dir: &Path, name: &str) -> Result<Option<String>, GitError> {
        Ok(self.remotes.get(name).cloned())
    }
}

fn git_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".git")).unwrap();
    fs::create_dir_all(temp.path().join("src/nested")).unwrap();
    temp
}

#[tokio::test]
async fn resolves_metadata_end_to_end() {
    let temp = git_project();
    let fake = FakeGit::single("origin", "git@github.com:alice/widget.git");
    let config = MetadataConfig {
        homepage: None,
        remote: vec!["origin".to_string()],
        issues: true,
    };

    let metadata = resolve_metadata_with(&fake, &temp.path().join("src/nested"), &config)
        .await
        .unwrap();

    let value = serde_json::to_value(&metadata).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "resources": {
                "homepage": "http://github.com/alice/widget",
                "repository": {
                    "type": "git",
                    "url": "http://github.com/alice/widget",
                    "web": "http://github.com/alice/widget"
                },
                "bugtracker": {
                    "web": "http://github.com/alice/widget/issues"
                }
            }
        })
    );
}

#[tokio::test]
async fn homepage_override_is_used() {
    let temp = git_project();
    let fake = FakeGit::single("origin", "https://github.com/alice/widget");
    let config = MetadataConfig {
        homepage: Some("https://widget.example.com".to_string()),
        remote: vec!["origin".to_string()],
        issues: false,
    };

    let metadata = resolve_metadata_with(&fake, temp.path(), &config)
        .await
        .unwrap();

    assert_eq!(metadata.resources.homepage, "https://widget.example.com");
    assert_eq!(
        metadata.resources.repository.web,
        "http://github.com/alice/widget"
    );
    assert!(metadata.resources.bugtracker.is_none());
}

#[tokio::test]
async fn probes_candidates_in_priority_order() {
    let temp = git_project();
    let fake = FakeGit {
        remotes: HashMap::from([
            (
                "mirror".to_string(),
                "https://backup.example.com/widget.git".to_string(),
            ),
            (
                "origin".to_string(),
                "https://github.com/alice/widget.git".to_string(),
            ),
        ]),
    };
    let config = MetadataConfig {
        homepage: None,
        remote: vec!["mirror".to_string(), "origin".to_string()],
        issues: false,
    };

    let metadata = resolve_metadata_with(&fake, temp.path(), &config)
        .await
        .unwrap();

    assert_eq!(
        metadata.resources.repository.url,
        "http://github.com/alice/widget"
    );
}

#[tokio::test]
async fn outside_version_control_yields_nothing_and_keeps_cwd() {
    let temp = TempDir::new().unwrap();
    let before = std::env::current_dir().unwrap();
    let fake = FakeGit::single("origin", "https://github.com/alice/widget.git");

    let metadata = resolve_metadata_with(&fake, temp.path(), &MetadataConfig::default()).await;

    assert!(metadata.is_none());
    assert_eq!(std::env::current_dir().unwrap(), before);
}

#[tokio::test]
async fn unmatched_remotes_yield_nothing() {
    let temp = git_project();
    let fake = FakeGit::single("origin", "https://gitlab.com/alice/widget.git");

    let metadata = resolve_metadata_with(&fake, temp.path(), &MetadataConfig::default()).await;

    assert!(metadata.is_none());
}
