//! Core audit and fix pipelines, extracted from the CLI.
//!
//! Repository enumeration and report persistence go through the port traits; the per-repository
//! work reads checkouts under the workspace directory.

use crate::ports::{RepoLister, WritePort, active_repo_names};
use crate::settings::{AuditSettings, FixSettings};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fleetfix_domain::audit_all;
use fleetfix_edit::{FixOptions, fix_all};
use fleetfix_types::audit::AuditReport;
use fleetfix_types::fix::FixSummary;
use fs_err as fs;
use tracing::{debug, info};

/// Error type for pipeline results. Every variant maps to exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("audit report not found at {path}")]
    MissingReport { path: Utf8PathBuf },
    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

impl ToolError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ToolError::MissingReport { .. } | ToolError::Internal(_) => 1,
        }
    }
}

/// Enumerate the organization's active repositories and audit each checkout.
pub fn run_audit(
    settings: &AuditSettings,
    lister: &dyn RepoLister,
) -> Result<AuditReport, ToolError> {
    let listings = lister.list_repos().context("list repositories")?;
    let names = active_repo_names(&listings);
    info!(
        org = %settings.org,
        listed = listings.len(),
        active = names.len(),
        "auditing repositories"
    );

    Ok(audit_all(names, &settings.workspace_dir))
}

/// Persist the report as 2-space-indented JSON.
pub fn write_audit_report(
    report: &AuditReport,
    path: &Utf8Path,
    writer: &dyn WritePort,
) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize audit report")?;
    writer.write_file(path, json.as_bytes())?;
    debug!(path = %path, "wrote audit report");
    Ok(())
}

/// Load a previously written audit report.
pub fn load_audit_report(path: &Utf8Path) -> Result<AuditReport, ToolError> {
    if !path.is_file() {
        return Err(ToolError::MissingReport {
            path: path.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    let report = serde_json::from_str(&raw).with_context(|| format!("parse {}", path))?;
    Ok(report)
}

/// Load the audit report and repair every cloned repository it flags.
pub fn run_fix(settings: &FixSettings) -> Result<FixSummary, ToolError> {
    let report = load_audit_report(&settings.report_path)?;
    let opts = FixOptions {
        dry_run: settings.dry_run,
        template: settings.template.clone(),
    };

    debug!(
        report = %settings.report_path,
        flagged = report.needs_fix().count(),
        "loaded audit report"
    );
    Ok(fix_all(&report, &settings.workspace_dir, &opts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FsWritePort, StaticRepoLister};
    use fleetfix_types::audit::AuditStatus;

    fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        (temp, root)
    }

    #[test]
    fn missing_report_is_distinct_error() {
        let (_temp, root) = temp_root();
        let err = load_audit_report(&root.join("nope.json")).expect_err("missing");
        assert!(matches!(err, ToolError::MissingReport { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn malformed_report_is_internal_error() {
        let (_temp, root) = temp_root();
        let path = root.join("report.json");
        std::fs::write(&path, "{ nope").expect("write");

        let err = load_audit_report(&path).expect_err("malformed");
        assert!(matches!(err, ToolError::Internal(_)));
    }

    #[test]
    fn audit_report_survives_disk() {
        let (_temp, root) = temp_root();
        std::fs::create_dir_all(root.join("svc")).expect("mkdir");

        let settings = AuditSettings {
            workspace_dir: root.clone(),
            report_path: root.join("workspace").join("report.json"),
            ..AuditSettings::default()
        };
        let lister = StaticRepoLister::from_names(["svc", "ghost"]);
        let report = run_audit(&settings, &lister).expect("audit");
        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.not_cloned, 1);
        assert_eq!(report.summary.missing_config, 1);

        write_audit_report(&report, &settings.report_path, &FsWritePort).expect("write");
        let raw = std::fs::read_to_string(&settings.report_path).expect("read");
        assert!(raw.starts_with("{\n  \"summary\""));

        let loaded = load_audit_report(&settings.report_path).expect("load");
        assert_eq!(loaded, report);
    }

    #[test]
    fn fix_pass_repairs_flagged_repos() {
        let (_temp, root) = temp_root();
        std::fs::create_dir_all(root.join("svc")).expect("mkdir");
        let report_path = root.join("report.json");

        let report = audit_all(["svc"], &root);
        assert_eq!(report.results[0].status, AuditStatus::MissingConfig);
        write_audit_report(&report, &report_path, &FsWritePort).expect("write");

        let settings = FixSettings {
            workspace_dir: root.clone(),
            report_path,
            ..FixSettings::default()
        };
        let summary = run_fix(&settings).expect("fix");
        assert_eq!(summary.created, 1);
        assert!(root.join("svc/.claude/project.json").is_file());
    }
}
