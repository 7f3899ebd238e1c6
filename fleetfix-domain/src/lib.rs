//! Domain logic: turn repository directories into classifications and audit records.
//!
//! This crate owns *what* is wrong with a repository's config and what a correct one looks
//! like. It does not own *how* configs are rewritten; that's the `fleetfix-edit` crate.

mod audit;
mod classify;
mod extends;
mod ports;
mod template;

pub use audit::{audit_all, audit_one, audit_view, issues};
pub use classify::{classify, ManifestError, PackageManifest};
pub use extends::{is_base_reference, read_extends, ConfigShapeError};
pub use ports::{FsRepoView, MemRepoView, RepoView};
pub use template::{build_config, ConfigTemplate};
