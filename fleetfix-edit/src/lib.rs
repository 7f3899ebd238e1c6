//! Edit engine for fleetfix.
//!
//! Responsibilities:
//! - Decide, per audited repository, whether its config must be created or patched.
//! - Write the result to disk unless running dry.
//! - Produce a unified diff of the intended change for operator review.

mod error;

pub use error::{EditError, EditResult};

use camino::{Utf8Path, Utf8PathBuf};
use diffy::PatchFormatter;
use fleetfix_domain::{
    classify, is_base_reference, read_extends, ConfigShapeError, ConfigTemplate, FsRepoView,
    RepoView,
};
use fleetfix_types::audit::{AuditReport, RepositoryRecord};
use fleetfix_types::consts::{CONFIG_REL_PATH, WORKSPACE_REPO};
use fleetfix_types::fix::{FixOutcome, FixResult, FixSummary};
use fs_err as fs;
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct FixOptions {
    pub dry_run: bool,
    pub template: ConfigTemplate,
}

/// A config change computed in memory, not yet written.
#[derive(Debug, Clone)]
struct PendingWrite {
    outcome: FixOutcome,
    path: Utf8PathBuf,
    before: String,
    after: String,
}

enum Decision {
    Done(FixOutcome),
    Write(PendingWrite),
}

/// Fix one repository and return what was (or would be) done.
pub fn fix_one(record: &RepositoryRecord, dir: &Utf8Path, opts: &FixOptions) -> FixOutcome {
    fix_repository(record, dir, opts).outcome
}

/// Fix one repository, keeping the diff and any error message for reporting.
pub fn fix_repository(record: &RepositoryRecord, dir: &Utf8Path, opts: &FixOptions) -> FixResult {
    let name = record.name.as_str();
    let mut result = FixResult {
        name: record.name.clone(),
        outcome: FixOutcome::Error,
        repo_type: record.repo_type,
        issue: record.issue.clone(),
        message: None,
        patch: None,
    };

    let pending = match decide(name, dir, opts) {
        Ok(Decision::Done(outcome)) => {
            result.outcome = outcome;
            return result;
        }
        Ok(Decision::Write(pending)) => pending,
        Err(e) => {
            warn!(repo = name, error = %e, "cannot fix config");
            result.message = Some(e.to_string());
            return result;
        }
    };

    let patch = render_patch(&Utf8Path::new(name).join(CONFIG_REL_PATH), &pending);

    if opts.dry_run {
        debug!(repo = name, outcome = pending.outcome.as_str(), "dry-run; not writing");
    } else if let Err(e) = write_config(&pending) {
        warn!(repo = name, error = %e, "config write failed");
        result.message = Some(e.to_string());
        return result;
    } else {
        info!(repo = name, outcome = pending.outcome.as_str(), path = %pending.path, "wrote config");
    }

    result.outcome = pending.outcome;
    result.patch = Some(patch);
    result
}

fn decide(name: &str, dir: &Utf8Path, opts: &FixOptions) -> EditResult<Decision> {
    if name == WORKSPACE_REPO {
        return Ok(Decision::Done(FixOutcome::Skipped));
    }

    let repo = FsRepoView::new(dir.to_path_buf());
    if !repo.is_present() {
        return Ok(Decision::Done(FixOutcome::NotCloned));
    }

    // The filesystem may have moved on since the audit; classify again.
    let repo_type = classify(&repo);
    let rel = Utf8Path::new(CONFIG_REL_PATH);
    let path = dir.join(rel);

    if !repo.exists(rel) {
        let doc = opts.template.build(name, repo_type);
        return Ok(Decision::Write(PendingWrite {
            outcome: FixOutcome::Created,
            path,
            before: String::new(),
            after: to_config_json(&doc)?,
        }));
    }

    let before = repo.read_to_string(rel).map_err(|e| EditError::Read {
        path: path.clone(),
        message: format!("{e:#}"),
    })?;
    let mut doc: serde_json::Value =
        serde_json::from_str(&before).map_err(|source| EditError::InvalidJson {
            path: path.clone(),
            source,
        })?;

    match read_extends(&doc) {
        Ok(extends) if is_base_reference(extends) => return Ok(Decision::Done(FixOutcome::Ok)),
        Ok(_) | Err(ConfigShapeError::ExtendsNotString) => {}
        Err(source) => return Err(EditError::Shape { path, source }),
    }

    if let Some(obj) = doc.as_object_mut() {
        obj.insert(
            "extends".to_string(),
            serde_json::Value::String(opts.template.base_config_url.clone()),
        );
    }

    Ok(Decision::Write(PendingWrite {
        outcome: FixOutcome::Fixed,
        path,
        before,
        after: to_config_json(&doc)?,
    }))
}

fn write_config(pending: &PendingWrite) -> EditResult<()> {
    let write_err = |e: std::io::Error| EditError::Write {
        path: pending.path.clone(),
        message: e.to_string(),
    };
    if let Some(parent) = pending.path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(&pending.path, &pending.after).map_err(write_err)
}

/// Two-space pretty JSON with a trailing newline.
pub fn to_config_json<T: Serialize>(value: &T) -> EditResult<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

fn render_patch(display_path: &Utf8Path, pending: &PendingWrite) -> String {
    let mut out = String::new();
    out.push_str(&format!("diff --git a/{0} b/{0}\n", display_path));
    if pending.before.is_empty() {
        out.push_str("new file\n");
    }

    let patch = diffy::create_patch(&pending.before, &pending.after);
    let formatter = PatchFormatter::new();
    out.push_str(&formatter.fmt_patch(&patch).to_string());
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Fix every repository the audit flagged as fixable, in report order.
///
/// Repositories are resolved as `workspace_dir/<name>`. Records that were `ok`, not cloned,
/// the workspace itself, or already erroring are left alone.
pub fn fix_all(report: &AuditReport, workspace_dir: &Utf8Path, opts: &FixOptions) -> FixSummary {
    let mut summary = FixSummary::default();
    for record in report.needs_fix() {
        let dir = workspace_dir.join(&record.name);
        summary.record(fix_repository(record, &dir, opts));
    }

    info!(
        attempted = summary.attempted,
        created = summary.created,
        fixed = summary.fixed,
        errors = summary.errors,
        dry_run = opts.dry_run,
        "fix pass complete"
    );
    summary
}
