use crate::repo::{PrimaryLanguage, RepoType};
use serde::{Deserialize, Serialize};

/// The `.claude/project.json` document written for repositories that have none.
///
/// Existing configs are edited as raw JSON so unknown keys survive; this type only describes
/// what fleetfix itself generates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub version: String,
    pub extends: String,
    pub description: String,
    pub project: ProjectSection,
    pub language: LanguageSection,
    pub customization: Customization,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: String,
    #[serde(rename = "type")]
    pub repo_type: RepoType,
    pub repository: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSection {
    pub primary: PrimaryLanguage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customization {
    #[serde(rename = "mcpServers", default)]
    pub mcp_servers: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub workflows: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub agents: Vec<serde_json::Value>,
}
