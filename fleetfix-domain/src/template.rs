use fleetfix_types::config::{ConfigDocument, Customization, LanguageSection, ProjectSection};
use fleetfix_types::consts::{BASE_CONFIG_URL, CONFIG_SCHEMA_URL, CONFIG_VERSION, DEFAULT_ORG};
use fleetfix_types::repo::RepoType;

/// Fleet-wide inputs to the generated config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigTemplate {
    pub org: String,
    pub base_config_url: String,
}

impl Default for ConfigTemplate {
    fn default() -> Self {
        Self {
            org: DEFAULT_ORG.to_string(),
            base_config_url: BASE_CONFIG_URL.to_string(),
        }
    }
}

impl ConfigTemplate {
    pub fn build(&self, name: &str, repo_type: RepoType) -> ConfigDocument {
        ConfigDocument {
            schema: CONFIG_SCHEMA_URL.to_string(),
            version: CONFIG_VERSION.to_string(),
            extends: self.base_config_url.clone(),
            description: format!("Claude Code configuration for {name}"),
            project: ProjectSection {
                name: name.to_string(),
                repo_type,
                repository: format!("https://github.com/{}/{}", self.org, name),
            },
            language: LanguageSection {
                primary: repo_type.primary_language(),
            },
            customization: Customization::default(),
        }
    }
}

/// Build the default config for `name` using the canonical base config.
pub fn build_config(name: &str, repo_type: RepoType) -> ConfigDocument {
    ConfigTemplate::default().build(name, repo_type)
}
