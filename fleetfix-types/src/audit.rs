use crate::repo::RepoType;
use serde::{Deserialize, Serialize};

/// Compliance status assigned to a repository by one audit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Ok,
    MissingConfig,
    WrongExtends,
    NoExtends,
    NotCloned,
    Workspace,
    InvalidJson,
    Error,
}

impl AuditStatus {
    /// Statuses the fixer knows how to correct.
    pub fn is_fixable(self) -> bool {
        matches!(
            self,
            AuditStatus::MissingConfig | AuditStatus::WrongExtends | AuditStatus::NoExtends
        )
    }

    /// Statuses tallied under the `errors` bucket.
    pub fn is_error(self) -> bool {
        matches!(self, AuditStatus::InvalidJson | AuditStatus::Error)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AuditStatus::Ok => "ok",
            AuditStatus::MissingConfig => "missing_config",
            AuditStatus::WrongExtends => "wrong_extends",
            AuditStatus::NoExtends => "no_extends",
            AuditStatus::NotCloned => "not_cloned",
            AuditStatus::Workspace => "workspace",
            AuditStatus::InvalidJson => "invalid_json",
            AuditStatus::Error => "error",
        }
    }
}

/// Per-repository audit outcome. Field order is the on-disk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub cloned: bool,
    pub has_config: bool,
    pub extends_base: bool,
    pub repo_type: Option<RepoType>,
    pub status: AuditStatus,
    pub issue: Option<String>,
}

impl RepositoryRecord {
    pub fn new(name: impl Into<String>, status: AuditStatus) -> Self {
        Self {
            name: name.into(),
            cloned: false,
            has_config: false,
            extends_base: false,
            repo_type: None,
            status,
            issue: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: u64,
    pub ok: u64,
    pub missing_config: u64,
    pub wrong_extends: u64,
    pub no_extends: u64,
    pub not_cloned: u64,
    /// `invalid_json` plus `error`.
    pub errors: u64,
}

impl ReportSummary {
    pub fn tally(results: &[RepositoryRecord]) -> Self {
        let mut s = Self {
            total: results.len() as u64,
            ..Self::default()
        };
        for r in results {
            match r.status {
                AuditStatus::Ok => s.ok += 1,
                AuditStatus::MissingConfig => s.missing_config += 1,
                AuditStatus::WrongExtends => s.wrong_extends += 1,
                AuditStatus::NoExtends => s.no_extends += 1,
                AuditStatus::NotCloned => s.not_cloned += 1,
                AuditStatus::InvalidJson | AuditStatus::Error => s.errors += 1,
                AuditStatus::Workspace => {}
            }
        }
        s
    }

    /// Number of repositories the fixer would act on.
    pub fn needs_fix(&self) -> u64 {
        self.missing_config + self.wrong_extends + self.no_extends
    }
}

/// Snapshot produced by one audit run and consumed wholesale by one fix run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub summary: ReportSummary,
    #[serde(default)]
    pub results: Vec<RepositoryRecord>,
}

impl AuditReport {
    pub fn from_results(results: Vec<RepositoryRecord>) -> Self {
        Self {
            summary: ReportSummary::tally(&results),
            results,
        }
    }

    /// Records the fixer will process, in report order.
    pub fn needs_fix(&self) -> impl Iterator<Item = &RepositoryRecord> {
        self.results
            .iter()
            .filter(|r| r.cloned && r.status.is_fixable())
    }

    pub fn with_status(&self, status: AuditStatus) -> impl Iterator<Item = &RepositoryRecord> {
        self.results.iter().filter(move |r| r.status == status)
    }
}
