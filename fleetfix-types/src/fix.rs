use crate::repo::RepoType;
use serde::{Deserialize, Serialize};

/// What the fixer did (or, in dry-run mode, would do) for one repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixOutcome {
    Skipped,
    NotCloned,
    Created,
    Fixed,
    Ok,
    Error,
}

impl FixOutcome {
    /// True when the outcome corresponds to a file write.
    pub fn writes(self) -> bool {
        matches!(self, FixOutcome::Created | FixOutcome::Fixed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FixOutcome::Skipped => "skipped",
            FixOutcome::NotCloned => "not_cloned",
            FixOutcome::Created => "created",
            FixOutcome::Fixed => "fixed",
            FixOutcome::Ok => "ok",
            FixOutcome::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixResult {
    pub name: String,
    pub outcome: FixOutcome,

    /// Repository type recorded by the audit (the fixer re-classifies on its own).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_type: Option<RepoType>,

    /// Issue text carried over from the audit record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Unified diff of the config change for `created`/`fixed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixSummary {
    pub attempted: u64,
    pub created: u64,
    pub fixed: u64,
    pub ok: u64,
    pub errors: u64,
    /// `skipped` plus `not_cloned`.
    pub skipped: u64,

    #[serde(default)]
    pub results: Vec<FixResult>,
}

impl FixSummary {
    pub fn record(&mut self, result: FixResult) {
        self.attempted += 1;
        match result.outcome {
            FixOutcome::Created => self.created += 1,
            FixOutcome::Fixed => self.fixed += 1,
            FixOutcome::Ok => self.ok += 1,
            FixOutcome::Error => self.errors += 1,
            FixOutcome::Skipped | FixOutcome::NotCloned => self.skipped += 1,
        }
        self.results.push(result);
    }
}
