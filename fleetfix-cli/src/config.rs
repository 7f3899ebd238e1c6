//! Configuration file loading for fleetfix.
//!
//! Discovers and loads `fleetfix.toml` from the current directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fleetfix_core::adapters::GhRepoLister;
use fleetfix_core::settings::default_report_path;
use fleetfix_types::consts::{BASE_CONFIG_URL, DEFAULT_ORG};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "fleetfix.toml";

/// Top-level configuration from fleetfix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FleetfixConfig {
    pub fleet: FleetConfig,
    pub base: BaseConfig,
    pub report: ReportConfig,
}

/// Which organization to scan and where its checkouts live.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    pub org: Option<String>,

    /// Directory holding one checkout per repository.
    pub workspace_dir: Option<Utf8PathBuf>,

    /// Maximum number of repositories requested from `gh`.
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BaseConfig {
    /// Base config URL written into `extends`.
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub path: Option<Utf8PathBuf>,
}

/// Discover the fleetfix.toml config file in `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a fleetfix.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<FleetfixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

pub fn parse_config(contents: &str) -> anyhow::Result<FleetfixConfig> {
    let config: FleetfixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load the explicit config path if given, else discover one in `dir`, else defaults.
pub fn load_or_default(
    explicit: Option<&Utf8Path>,
    dir: &Utf8Path,
) -> anyhow::Result<FleetfixConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(FleetfixConfig::default()),
    }
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub org: Option<String>,
    pub workspace_dir: Option<Utf8PathBuf>,
    pub limit: Option<u32>,
    pub report: Option<Utf8PathBuf>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    pub org: String,
    pub workspace_dir: Utf8PathBuf,
    pub limit: u32,
    pub base_url: String,
    pub report_path: Utf8PathBuf,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: FleetfixConfig,
}

impl ConfigMerger {
    pub fn new(config: FleetfixConfig) -> Self {
        Self { config }
    }

    /// CLI values win over the file, the file wins over built-in defaults.
    ///
    /// The report path defaults relative to the *merged* workspace directory.
    pub fn merge(self, cli: CliOverrides) -> MergedConfig {
        let FleetfixConfig {
            fleet,
            base,
            report,
        } = self.config;

        let workspace_dir = cli
            .workspace_dir
            .or(fleet.workspace_dir)
            .unwrap_or_else(|| Utf8PathBuf::from("."));
        let report_path = cli
            .report
            .or(report.path)
            .unwrap_or_else(|| default_report_path(&workspace_dir));

        MergedConfig {
            org: cli
                .org
                .or(fleet.org)
                .unwrap_or_else(|| DEFAULT_ORG.to_string()),
            limit: cli
                .limit
                .or(fleet.limit)
                .unwrap_or(GhRepoLister::DEFAULT_LIMIT),
            base_url: base.url.unwrap_or_else(|| BASE_CONFIG_URL.to_string()),
            workspace_dir,
            report_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_example_config() {
        let contents = r#"
[fleet]
org = "acme"
workspace_dir = "/srv/acme"
limit = 250

[base]
url = "https://example.com/acme/workspace/base-project.json"

[report]
path = "/tmp/audit.json"
"#;

        let config = parse_config(contents).unwrap();
        assert_eq!(config.fleet.org.as_deref(), Some("acme"));
        assert_eq!(
            config.fleet.workspace_dir,
            Some(Utf8PathBuf::from("/srv/acme"))
        );
        assert_eq!(config.fleet.limit, Some(250));
        assert_eq!(
            config.base.url.as_deref(),
            Some("https://example.com/acme/workspace/base-project.json")
        );
        assert_eq!(config.report.path, Some(Utf8PathBuf::from("/tmp/audit.json")));
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert!(config.fleet.org.is_none());
        assert!(config.base.url.is_none());
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(parse_config("[fleet\norg = 1").is_err());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = parse_config("[fleet]\nmirror = true\n").unwrap();
        assert!(config.fleet.limit.is_none());
    }

    #[test]
    fn test_defaults_without_file_or_flags() {
        let merged = ConfigMerger::new(FleetfixConfig::default()).merge(CliOverrides::default());
        assert_eq!(merged.org, DEFAULT_ORG);
        assert_eq!(merged.limit, 100);
        assert_eq!(merged.base_url, BASE_CONFIG_URL);
        assert_eq!(
            merged.report_path,
            Utf8PathBuf::from("./workspace/claude-config-audit-report.json")
        );
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = parse_config(
            r#"
[fleet]
org = "acme"
workspace_dir = "/srv/acme"
limit = 5
"#,
        )
        .unwrap();

        let merged = ConfigMerger::new(config).merge(CliOverrides {
            org: Some("other".to_string()),
            limit: Some(7),
            ..CliOverrides::default()
        });
        assert_eq!(merged.org, "other");
        assert_eq!(merged.limit, 7);
        assert_eq!(merged.workspace_dir, Utf8PathBuf::from("/srv/acme"));
        assert_eq!(
            merged.report_path,
            Utf8PathBuf::from("/srv/acme/workspace/claude-config-audit-report.json")
        );
    }

    #[test]
    fn test_report_path_follows_cli_workspace_dir() {
        let config = parse_config("[fleet]\nworkspace_dir = \"/srv/acme\"\n").unwrap();
        let merged = ConfigMerger::new(config).merge(CliOverrides {
            workspace_dir: Some(Utf8PathBuf::from("/work")),
            ..CliOverrides::default()
        });
        assert_eq!(
            merged.report_path,
            Utf8PathBuf::from("/work/workspace/claude-config-audit-report.json")
        );
    }

    #[test]
    fn test_discover_and_explicit_config() {
        let temp = tempfile::tempdir().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        assert!(discover_config(&dir).is_none());

        std::fs::write(dir.join(CONFIG_FILE_NAME), "[fleet]\norg = \"found\"\n").unwrap();
        let found = load_or_default(None, &dir).unwrap();
        assert_eq!(found.fleet.org.as_deref(), Some("found"));

        let explicit = dir.join("alt.toml");
        std::fs::write(&explicit, "[fleet]\norg = \"explicit\"\n").unwrap();
        let loaded = load_or_default(Some(&explicit), &dir).unwrap();
        assert_eq!(loaded.fleet.org.as_deref(), Some("explicit"));
    }

    #[test]
    fn test_missing_explicit_config_errors() {
        let temp = tempfile::tempdir().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let err = load_or_default(Some(&dir.join("nope.toml")), &dir).unwrap_err();
        assert!(format!("{err:#}").contains("read config file"));
    }
}
