//! Clap-free settings for the audit and fix pipelines.

use camino::{Utf8Path, Utf8PathBuf};
use fleetfix_domain::ConfigTemplate;
use fleetfix_types::consts::{DEFAULT_ORG, REPORT_FILE, WORKSPACE_REPO};

/// Where the audit report lives when not configured: inside the workspace repository checkout.
pub fn default_report_path(workspace_dir: &Utf8Path) -> Utf8PathBuf {
    workspace_dir.join(WORKSPACE_REPO).join(REPORT_FILE)
}

/// Settings for the audit pipeline.
#[derive(Debug, Clone)]
pub struct AuditSettings {
    /// Directory holding one checkout per repository.
    pub workspace_dir: Utf8PathBuf,
    pub report_path: Utf8PathBuf,
    pub org: String,
}

impl Default for AuditSettings {
    fn default() -> Self {
        let workspace_dir = Utf8PathBuf::from(".");
        Self {
            report_path: default_report_path(&workspace_dir),
            workspace_dir,
            org: DEFAULT_ORG.to_string(),
        }
    }
}

/// Settings for the fix pipeline.
#[derive(Debug, Clone)]
pub struct FixSettings {
    pub workspace_dir: Utf8PathBuf,
    pub report_path: Utf8PathBuf,
    pub dry_run: bool,
    pub template: ConfigTemplate,
}

impl Default for FixSettings {
    fn default() -> Self {
        let workspace_dir = Utf8PathBuf::from(".");
        Self {
            report_path: default_report_path(&workspace_dir),
            workspace_dir,
            dry_run: false,
            template: ConfigTemplate::default(),
        }
    }
}
