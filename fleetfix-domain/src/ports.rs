use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use std::collections::{BTreeMap, BTreeSet};

/// Read-only access to one repository checkout.
///
/// The classifier and auditor only ever look at marker files and two small JSON documents, so
/// this stays narrow enough to back with an in-memory listing in tests.
pub trait RepoView {
    fn root(&self) -> &Utf8Path;

    /// Whether the repository is present at all (i.e. cloned).
    fn is_present(&self) -> bool;

    fn read_to_string(&self, rel: &Utf8Path) -> anyhow::Result<String>;

    fn exists(&self, rel: &Utf8Path) -> bool;

    fn is_dir(&self, rel: &Utf8Path) -> bool;

    /// Directory name of the checkout, used for name-based rules.
    fn dir_name(&self) -> &str {
        self.root().file_name().unwrap_or_default()
    }
}

/// File-system backed `RepoView`.
#[derive(Debug, Clone)]
pub struct FsRepoView {
    root: Utf8PathBuf,
}

impl FsRepoView {
    pub fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    fn abs(&self, rel: &Utf8Path) -> Utf8PathBuf {
        if rel.is_absolute() {
            rel.to_path_buf()
        } else {
            self.root.join(rel)
        }
    }
}

impl RepoView for FsRepoView {
    fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn is_present(&self) -> bool {
        self.root.exists()
    }

    fn read_to_string(&self, rel: &Utf8Path) -> anyhow::Result<String> {
        let abs = self.abs(rel);
        fs::read_to_string(&abs).with_context(|| format!("read {}", abs))
    }

    fn exists(&self, rel: &Utf8Path) -> bool {
        self.abs(rel).exists()
    }

    fn is_dir(&self, rel: &Utf8Path) -> bool {
        self.abs(rel).is_dir()
    }
}

/// In-memory `RepoView` built from an explicit listing.
#[derive(Debug, Clone, Default)]
pub struct MemRepoView {
    root: Utf8PathBuf,
    present: bool,
    files: BTreeMap<Utf8PathBuf, String>,
    dirs: BTreeSet<Utf8PathBuf>,
}

impl MemRepoView {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: root.into(),
            present: true,
            ..Self::default()
        }
    }

    /// A repository that was never cloned.
    pub fn absent(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: root.into(),
            present: false,
            ..Self::default()
        }
    }

    pub fn with_file(mut self, rel: impl Into<Utf8PathBuf>, contents: impl Into<String>) -> Self {
        let rel = rel.into();
        let mut parent = rel.parent();
        while let Some(p) = parent.filter(|p| !p.as_str().is_empty()) {
            self.dirs.insert(p.to_path_buf());
            parent = p.parent();
        }
        self.files.insert(rel, contents.into());
        self
    }

    pub fn with_dir(mut self, rel: impl Into<Utf8PathBuf>) -> Self {
        self.dirs.insert(rel.into());
        self
    }
}

impl RepoView for MemRepoView {
    fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn is_present(&self) -> bool {
        self.present
    }

    fn read_to_string(&self, rel: &Utf8Path) -> anyhow::Result<String> {
        self.files
            .get(rel)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("read {}: no such file", self.root.join(rel)))
    }

    fn exists(&self, rel: &Utf8Path) -> bool {
        self.files.contains_key(rel) || self.dirs.contains(rel)
    }

    fn is_dir(&self, rel: &Utf8Path) -> bool {
        self.dirs.contains(rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mem_view_registers_parent_dirs() {
        let repo = MemRepoView::new("/fleet/a").with_file(".claude/project.json", "{}");
        assert!(repo.is_dir(Utf8Path::new(".claude")));
        assert!(repo.exists(Utf8Path::new(".claude/project.json")));
        assert!(!repo.is_dir(Utf8Path::new(".claude/project.json")));
    }

    #[test]
    fn dir_name_is_last_component() {
        let repo = MemRepoView::new("/fleet/dgx-trainer");
        assert_eq!(repo.dir_name(), "dgx-trainer");
    }

    #[test]
    fn fs_view_reports_missing_root() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(temp.path().join("missing")).expect("utf8");
        let repo = FsRepoView::new(root);
        assert!(!repo.is_present());
        assert!(repo.read_to_string(Utf8Path::new("Cargo.toml")).is_err());
    }
}
