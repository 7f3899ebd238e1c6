use crate::classify::classify;
use crate::extends::{is_base_reference, read_extends};
use crate::ports::{FsRepoView, RepoView};
use camino::Utf8Path;
use fleetfix_types::audit::{AuditReport, AuditStatus, RepositoryRecord};
use fleetfix_types::consts::{CONFIG_REL_PATH, WORKSPACE_REPO};
use tracing::{debug, info};

/// Fixed issue texts written into audit records.
pub mod issues {
    pub const WORKSPACE: &str = "This is the base config repository";
    pub const MISSING_CONFIG: &str = "No .claude/project.json found";
    pub const INVALID_JSON: &str = "Invalid JSON in config file";
    pub const NO_EXTENDS: &str = "No 'extends' field";
}

/// Audit the repository checked out at `dir`.
pub fn audit_one(name: &str, dir: &Utf8Path) -> RepositoryRecord {
    audit_view(name, &FsRepoView::new(dir.to_path_buf()))
}

/// Audit any repository view. Identical views always yield identical records.
pub fn audit_view(name: &str, repo: &dyn RepoView) -> RepositoryRecord {
    let config_path = Utf8Path::new(CONFIG_REL_PATH);
    let mut record = RepositoryRecord::new(name, AuditStatus::NotCloned);
    record.cloned = repo.is_present();
    record.has_config = record.cloned && repo.exists(config_path);

    if !record.cloned {
        debug!(repo = name, "not cloned");
        return record;
    }

    if name == WORKSPACE_REPO {
        record.status = AuditStatus::Workspace;
        record.issue = Some(issues::WORKSPACE.to_string());
        return record;
    }

    record.repo_type = Some(classify(repo));

    if !record.has_config {
        record.status = AuditStatus::MissingConfig;
        record.issue = Some(issues::MISSING_CONFIG.to_string());
        return record;
    }

    let raw = match repo.read_to_string(config_path) {
        Ok(raw) => raw,
        Err(e) => {
            record.status = AuditStatus::Error;
            record.issue = Some(format!("{e:#}"));
            return record;
        }
    };

    let doc: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(doc) => doc,
        Err(e) => {
            debug!(repo = name, error = %e, "config is not valid JSON");
            record.status = AuditStatus::InvalidJson;
            record.issue = Some(issues::INVALID_JSON.to_string());
            return record;
        }
    };

    match read_extends(&doc) {
        Ok(extends) if is_base_reference(extends) => {
            record.extends_base = true;
            record.status = AuditStatus::Ok;
        }
        Ok("") => {
            record.status = AuditStatus::NoExtends;
            record.issue = Some(issues::NO_EXTENDS.to_string());
        }
        Ok(extends) => {
            record.status = AuditStatus::WrongExtends;
            record.issue = Some(format!("Extends: {extends}"));
        }
        Err(e) => {
            record.status = AuditStatus::Error;
            record.issue = Some(e.to_string());
        }
    }

    record
}

/// Audit every named repository under `workspace_dir`, preserving the given order.
pub fn audit_all<I, S>(names: I, workspace_dir: &Utf8Path) -> AuditReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let results: Vec<RepositoryRecord> = names
        .into_iter()
        .map(|name| {
            let name = name.as_ref();
            let record = audit_one(name, &workspace_dir.join(name));
            debug!(repo = name, status = record.status.as_str(), "audited");
            record
        })
        .collect();

    let report = AuditReport::from_results(results);
    info!(
        total = report.summary.total,
        ok = report.summary.ok,
        needs_fix = report.summary.needs_fix(),
        errors = report.summary.errors,
        "audit complete"
    );
    report
}
