//! Default port implementations.

use crate::ports::{RepoLister, RepoListing, WritePort};
use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use std::process::Command;
use tracing::debug;

/// Lists repositories via `gh repo list <org> --json name,isArchived`.
#[derive(Debug, Clone)]
pub struct GhRepoLister {
    pub org: String,
    pub limit: u32,
}

impl GhRepoLister {
    pub const DEFAULT_LIMIT: u32 = 100;

    pub fn new(org: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

impl RepoLister for GhRepoLister {
    fn list_repos(&self) -> anyhow::Result<Vec<RepoListing>> {
        let limit = self.limit.to_string();
        debug!(org = %self.org, limit = self.limit, "listing repositories via gh");

        let output = Command::new("gh")
            .args([
                "repo",
                "list",
                self.org.as_str(),
                "--limit",
                limit.as_str(),
                "--json",
                "name,isArchived",
            ])
            .output()
            .context("run gh repo list")?;

        if !output.status.success() {
            anyhow::bail!(
                "gh repo list {} failed: {}",
                self.org,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let stdout = String::from_utf8(output.stdout).context("gh output is not UTF-8")?;
        parse_gh_listing(&stdout)
    }
}

/// Parse the JSON array printed by `gh repo list --json name,isArchived`.
pub fn parse_gh_listing(raw: &str) -> anyhow::Result<Vec<RepoListing>> {
    serde_json::from_str(raw).context("parse gh repo list output")
}

/// Fixed repository list, for `--repo` overrides and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticRepoLister {
    repos: Vec<RepoListing>,
}

impl StaticRepoLister {
    pub fn new(repos: Vec<RepoListing>) -> Self {
        Self { repos }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            names
                .into_iter()
                .map(|name| RepoListing {
                    name: name.into(),
                    is_archived: false,
                })
                .collect(),
        )
    }
}

impl RepoLister for StaticRepoLister {
    fn list_repos(&self) -> anyhow::Result<Vec<RepoListing>> {
        Ok(self.repos.clone())
    }
}

/// Filesystem write operations.
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create parent dir for {}", path))?;
        }
        fs::write(path, contents).with_context(|| format!("write {}", path))
    }
}
