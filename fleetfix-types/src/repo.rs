use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of repository classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepoType {
    RustService,
    McpIntegration,
    TypescriptDocs,
    PythonMl,
    Library,
    IacK8s,
    Docs,
}

impl RepoType {
    pub const ALL: [RepoType; 7] = [
        RepoType::RustService,
        RepoType::McpIntegration,
        RepoType::TypescriptDocs,
        RepoType::PythonMl,
        RepoType::Library,
        RepoType::IacK8s,
        RepoType::Docs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RepoType::RustService => "rust-service",
            RepoType::McpIntegration => "mcp-integration",
            RepoType::TypescriptDocs => "typescript-docs",
            RepoType::PythonMl => "python-ml",
            RepoType::Library => "library",
            RepoType::IacK8s => "iac-k8s",
            RepoType::Docs => "docs",
        }
    }

    /// Primary language implied by the repository type.
    pub fn primary_language(self) -> PrimaryLanguage {
        match self {
            RepoType::RustService => PrimaryLanguage::Rust,
            RepoType::PythonMl => PrimaryLanguage::Python,
            RepoType::TypescriptDocs | RepoType::McpIntegration => PrimaryLanguage::Typescript,
            RepoType::IacK8s => PrimaryLanguage::Hcl,
            RepoType::Docs => PrimaryLanguage::Markdown,
            RepoType::Library => PrimaryLanguage::Unknown,
        }
    }
}

impl fmt::Display for RepoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryLanguage {
    Rust,
    Python,
    Typescript,
    Hcl,
    Markdown,
    Unknown,
}

impl PrimaryLanguage {
    pub fn as_str(self) -> &'static str {
        match self {
            PrimaryLanguage::Rust => "rust",
            PrimaryLanguage::Python => "python",
            PrimaryLanguage::Typescript => "typescript",
            PrimaryLanguage::Hcl => "hcl",
            PrimaryLanguage::Markdown => "markdown",
            PrimaryLanguage::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PrimaryLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
