//! Embeddable core library for fleetfix.
//!
//! Provides a clap-free entry point for the two fleet passes, suitable for linking into other
//! host processes.
//!
//! # Port traits
//!
//! I/O outside the repositories themselves is abstracted behind port traits in [`ports`]:
//! - [`RepoLister`](ports::RepoLister): enumerate the organization's repositories
//! - [`WritePort`](ports::WritePort): persist the audit report
//!
//! The [`adapters`] module provides default implementations (`gh` CLI, filesystem).
//!
//! # Entry points
//!
//! - [`run_audit`](pipeline::run_audit): audit every active repository
//! - [`run_fix`](pipeline::run_fix): apply fixes from a persisted audit report

pub mod adapters;
pub mod pipeline;
pub mod ports;
pub mod settings;

// Re-export so embedders don't need the lower crates directly.
pub use fleetfix_domain::{ConfigTemplate, FsRepoView, RepoView, classify};
