//! BDD harness (cucumber-rs).
//!
//! Scenario tests live in `tests/cucumber.rs`; this crate only provides the on-disk fleet
//! fixture they share.

use camino::{Utf8Path, Utf8PathBuf};
use fleetfix_types::consts::CONFIG_REL_PATH;
use fs_err as fs;
use std::io;
use tempfile::TempDir;

/// A throwaway workspace directory holding one checkout per repository.
#[derive(Debug)]
pub struct FleetFixture {
    _temp: TempDir,
    root: Utf8PathBuf,
}

impl FleetFixture {
    pub fn new() -> io::Result<Self> {
        let temp = tempfile::tempdir()?;
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).map_err(|p| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("non-UTF-8 temp dir {}", p.display()),
            )
        })?;
        Ok(Self { _temp: temp, root })
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Create an empty checkout for `name`.
    pub fn add_repo(&self, name: &str) -> io::Result<Utf8PathBuf> {
        let dir = self.root.join(name);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Write `contents` to `rel` inside the checkout for `name`, creating parents.
    pub fn write(&self, name: &str, rel: &str, contents: &str) -> io::Result<()> {
        let path = self.root.join(name).join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)
    }

    pub fn config_path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name).join(CONFIG_REL_PATH)
    }

    /// Raw config text of `name`, or `None` when it has no config.
    pub fn read_config(&self, name: &str) -> io::Result<Option<String>> {
        let path = self.config_path(name);
        if !path.is_file() {
            return Ok(None);
        }
        fs::read_to_string(path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_config_reads_back() {
        let fleet = FleetFixture::new().unwrap();
        fleet.add_repo("foo").unwrap();
        assert_eq!(fleet.read_config("foo").unwrap(), None);

        fleet.write("foo", CONFIG_REL_PATH, "{}").unwrap();
        assert_eq!(fleet.read_config("foo").unwrap().as_deref(), Some("{}"));
    }
}
