use crate::ports::RepoView;
use camino::Utf8Path;
use fleetfix_types::consts::ML_REPO_PREFIX;
use fleetfix_types::repo::RepoType;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

const MCP_SDK: &str = "@modelcontextprotocol/sdk";
const DOCS_GENERATORS: [&str; 2] = ["vitepress", "docusaurus"];

type Rule = fn(&dyn RepoView) -> Option<RepoType>;

/// Ordered classification rules. The first rule returning `Some` decides; several markers may
/// coexist in one repository, so order is significant.
const RULES: [(&str, Rule); 5] = [
    ("cargo-manifest", cargo_manifest),
    ("package-manifest", package_manifest),
    ("python-project", python_project),
    ("infra-dir", infra_dir),
    ("mkdocs", mkdocs),
];

/// Classify a repository from its top-level markers.
pub fn classify(repo: &dyn RepoView) -> RepoType {
    for (rule_id, rule) in RULES {
        if let Some(repo_type) = rule(repo) {
            debug!(repo = %repo.root(), rule = rule_id, repo_type = %repo_type, "classified");
            return repo_type;
        }
    }
    debug!(repo = %repo.root(), "no marker matched; defaulting to library");
    RepoType::Library
}

fn cargo_manifest(repo: &dyn RepoView) -> Option<RepoType> {
    repo.exists(Utf8Path::new("Cargo.toml"))
        .then_some(RepoType::RustService)
}

fn package_manifest(repo: &dyn RepoView) -> Option<RepoType> {
    if !repo.exists(Utf8Path::new(PackageManifest::FILE)) {
        return None;
    }

    let manifest = match PackageManifest::load(repo) {
        Ok(m) => m,
        Err(e) => {
            debug!(repo = %repo.root(), error = %e, "unreadable package.json; no special dependencies");
            PackageManifest::default()
        }
    };

    let repo_type = if manifest.depends_on(MCP_SDK) {
        RepoType::McpIntegration
    } else if DOCS_GENERATORS.iter().any(|d| manifest.depends_on(d)) {
        RepoType::TypescriptDocs
    } else {
        RepoType::Library
    };
    Some(repo_type)
}

fn python_project(repo: &dyn RepoView) -> Option<RepoType> {
    let has_project = ["pyproject.toml", "setup.py"]
        .iter()
        .any(|f| repo.exists(Utf8Path::new(f)));
    if !has_project {
        return None;
    }

    if repo.dir_name().starts_with(ML_REPO_PREFIX) {
        Some(RepoType::PythonMl)
    } else {
        Some(RepoType::Library)
    }
}

fn infra_dir(repo: &dyn RepoView) -> Option<RepoType> {
    ["terraform", "k8s"]
        .iter()
        .any(|d| repo.is_dir(Utf8Path::new(d)))
        .then_some(RepoType::IacK8s)
}

fn mkdocs(repo: &dyn RepoView) -> Option<RepoType> {
    repo.exists(Utf8Path::new("mkdocs.yml"))
        .then_some(RepoType::Docs)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManifestError {
    #[error("io error: {message}")]
    Io { message: String },

    #[error("json parse error: {message}")]
    Json { message: String },
}

/// The parts of a Node `package.json` that matter for classification.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, serde_json::Value>,

    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, serde_json::Value>,
}

impl PackageManifest {
    pub const FILE: &'static str = "package.json";

    pub fn load(repo: &dyn RepoView) -> Result<Self, ManifestError> {
        let raw = repo
            .read_to_string(Utf8Path::new(Self::FILE))
            .map_err(|e| ManifestError::Io {
                message: format!("{e:#}"),
            })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(raw).map_err(|e| ManifestError::Json {
            message: e.to_string(),
        })
    }

    /// Direct or development dependency.
    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }
}
