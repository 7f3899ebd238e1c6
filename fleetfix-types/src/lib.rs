//! Shared DTOs (schemas-as-code) for the fleetfix workspace.
//!
//! # Design constraints
//! - The audit report is written by one run and read back by another, so field names and
//!   enum spellings are part of the on-disk contract.
//! - Prefer adding optional fields over changing semantics.

pub mod audit;
pub mod config;
pub mod fix;
pub mod repo;

/// Well-known names and locations shared by the auditor and the fixer.
pub mod consts {
    /// Canonical base configuration every repository config must extend.
    pub const BASE_CONFIG_URL: &str =
        "https://raw.githubusercontent.com/raibid-labs/workspace/main/.claude/base-project.json";

    /// Organization whose repositories make up the fleet.
    pub const DEFAULT_ORG: &str = "raibid-labs";

    /// Repository that hosts the base config; exempt from the `extends` rule.
    pub const WORKSPACE_REPO: &str = "workspace";

    /// Repository name prefix reserved for ML workloads.
    pub const ML_REPO_PREFIX: &str = "dgx-";

    /// Config path relative to a repository root.
    pub const CONFIG_REL_PATH: &str = ".claude/project.json";

    /// Report file name, stored inside the workspace repository checkout.
    pub const REPORT_FILE: &str = "claude-config-audit-report.json";

    pub const CONFIG_SCHEMA_URL: &str = "https://claude.ai/schemas/project-config.json";
    pub const CONFIG_VERSION: &str = "1.0.0";
}
