//! Rendering helpers (plain text) for operator-facing summaries.

use fleetfix_types::audit::{AuditReport, AuditStatus};
use fleetfix_types::fix::{FixOutcome, FixSummary};

const RULE: &str =
    "======================================================================";

fn banner(out: &mut String, title: &str) {
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("  {}\n", title));
    out.push_str(RULE);
    out.push_str("\n\n");
}

pub fn render_audit_summary(report: &AuditReport) -> String {
    let s = &report.summary;
    let workspace = report.with_status(AuditStatus::Workspace).count();

    let mut out = String::new();
    banner(&mut out, "Summary");
    out.push_str(&format!("Total repositories: {}\n", s.total));
    out.push_str(&format!("✓ Correct configuration: {}\n", s.ok));
    out.push_str(&format!("⚠ Missing .claude/project.json: {}\n", s.missing_config));
    out.push_str(&format!("⚠ Wrong 'extends' value: {}\n", s.wrong_extends));
    out.push_str(&format!("⚠ No 'extends' field: {}\n", s.no_extends));
    out.push_str(&format!("ℹ  Not cloned locally: {}\n", s.not_cloned));
    out.push_str(&format!("ℹ  Workspace repository: {}\n", workspace));
    out.push_str(&format!("✗ Errors: {}\n\n", s.errors));

    let missing: Vec<_> = report.with_status(AuditStatus::MissingConfig).collect();
    if !missing.is_empty() {
        out.push_str("Repositories missing .claude/project.json:\n");
        for r in missing {
            let repo_type = r.repo_type.map(|t| t.as_str()).unwrap_or("-");
            out.push_str(&format!("  - {} ({})\n", r.name, repo_type));
        }
        out.push('\n');
    }

    let incorrect: Vec<_> = report
        .with_status(AuditStatus::WrongExtends)
        .chain(report.with_status(AuditStatus::NoExtends))
        .collect();
    if !incorrect.is_empty() {
        out.push_str("Repositories with incorrect extends:\n");
        for r in incorrect {
            out.push_str(&format!(
                "  - {}: {}\n",
                r.name,
                r.issue.as_deref().unwrap_or("-")
            ));
        }
        out.push('\n');
    }

    let errors: Vec<_> = report
        .results
        .iter()
        .filter(|r| r.status.is_error())
        .collect();
    if !errors.is_empty() {
        out.push_str("Repositories with errors:\n");
        for r in errors {
            out.push_str(&format!(
                "  - {}: {}\n",
                r.name,
                r.issue.as_deref().unwrap_or("-")
            ));
        }
        out.push('\n');
    }

    let ok: Vec<_> = report.with_status(AuditStatus::Ok).collect();
    if !ok.is_empty() {
        out.push_str("Repositories with correct configuration:\n");
        for r in ok {
            out.push_str(&format!("  - {}\n", r.name));
        }
        out.push('\n');
    }

    let needs_fix = s.needs_fix();
    if needs_fix > 0 {
        out.push_str(&format!(
            "{} repositories need configuration updates\n\nTo apply fixes, run:\n  fleetfix fix\n",
            needs_fix
        ));
    }

    out
}

/// Per-item progress lines followed by totals.
pub fn render_fix_summary(summary: &FixSummary, dry_run: bool, verbose: bool) -> String {
    let mut out = String::new();
    if dry_run {
        out.push_str("Running in DRY RUN mode - no changes will be made\n\n");
    }

    let n = summary.results.len();
    out.push_str(&format!("Found {} repositories that need fixing\n\n", n));
    if n == 0 {
        out.push_str("✓ All repositories are correctly configured!\n");
        return out;
    }

    for (i, r) in summary.results.iter().enumerate() {
        out.push_str(&format!(
            "[{}/{}] {}... {}\n",
            i + 1,
            n,
            r.name,
            outcome_label(r.outcome)
        ));
        if !verbose {
            continue;
        }
        match r.outcome {
            FixOutcome::Created => {
                let repo_type = r.repo_type.map(|t| t.as_str()).unwrap_or("-");
                out.push_str(&format!("       Type: {}\n", repo_type));
            }
            FixOutcome::Fixed => {
                out.push_str(&format!(
                    "       Issue: {}\n",
                    r.issue.as_deref().unwrap_or("Unknown")
                ));
            }
            FixOutcome::Error => {
                if let Some(msg) = &r.message {
                    out.push_str(&format!("       Error: {}\n", msg));
                }
            }
            _ => {}
        }
        if dry_run && r.outcome.writes() && let Some(patch) = &r.patch {
            for line in patch.lines() {
                out.push_str(&format!("       {}\n", line));
            }
        }
    }

    out.push('\n');
    banner(&mut out, "Summary");
    out.push_str(&format!("✓ Configurations created: {}\n", summary.created));
    out.push_str(&format!("✓ Configurations fixed: {}\n", summary.fixed));
    if summary.errors > 0 {
        out.push_str(&format!("✗ Errors: {}\n", summary.errors));
    }
    if summary.skipped > 0 {
        out.push_str(&format!("ℹ  Skipped: {}\n", summary.skipped));
    }

    if dry_run {
        out.push_str("\nDry run complete - no changes were made\n\nTo apply changes, run:\n  fleetfix fix\n");
    } else {
        out.push_str("\n✓ All changes have been applied\n\nNext steps:\n");
        out.push_str("  1. Run audit again to verify: fleetfix audit\n");
        out.push_str("  2. Review changes in each repository\n");
        out.push_str("  3. Commit changes to each repository\n");
    }

    out
}

fn outcome_label(o: FixOutcome) -> &'static str {
    match o {
        FixOutcome::Created => "✓ Created",
        FixOutcome::Fixed => "✓ Fixed",
        FixOutcome::Ok => "✓ Already OK",
        FixOutcome::Error => "✗ Error",
        FixOutcome::NotCloned => "ℹ Skipped (not cloned)",
        FixOutcome::Skipped => "ℹ Skipped",
    }
}
