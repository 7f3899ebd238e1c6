//! Port traits abstracting external I/O away from the pipelines.

use camino::Utf8Path;
use serde::Deserialize;

/// One repository as reported by the hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoListing {
    pub name: String,
    #[serde(rename = "isArchived", default)]
    pub is_archived: bool,
}

/// Source of the organization's repository list.
pub trait RepoLister {
    fn list_repos(&self) -> anyhow::Result<Vec<RepoListing>>;
}

/// File-system write operations. Implementations create missing parent directories.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
}

/// Names of non-archived repositories, sorted.
pub fn active_repo_names(listings: &[RepoListing]) -> Vec<String> {
    let mut names: Vec<String> = listings
        .iter()
        .filter(|r| !r.is_archived)
        .map(|r| r.name.clone())
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(name: &str, is_archived: bool) -> RepoListing {
        RepoListing {
            name: name.to_string(),
            is_archived,
        }
    }

    #[test]
    fn archived_repos_are_dropped_and_rest_sorted() {
        let names = active_repo_names(&[
            listing("zeta", false),
            listing("old", true),
            listing("alpha", false),
        ]);
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
