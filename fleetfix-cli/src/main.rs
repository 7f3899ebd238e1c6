mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use config::{CliOverrides, ConfigMerger, MergedConfig};
use fleetfix_core::adapters::{FsWritePort, GhRepoLister, StaticRepoLister};
use fleetfix_core::pipeline::{ToolError, run_audit, run_fix, write_audit_report};
use fleetfix_core::ports::RepoLister;
use fleetfix_core::settings::{AuditSettings, FixSettings};
use fleetfix_core::{ConfigTemplate, FsRepoView, classify};
use fleetfix_render::{render_audit_summary, render_fix_summary};
use fs_err as fs;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "fleetfix",
    version,
    about = "Audit and repair .claude/project.json across an organization's repositories."
)]
struct Cli {
    /// Config file (default: ./fleetfix.toml if present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Inspect every repository checkout and write the audit report.
    Audit(AuditArgs),
    /// Create or repair configs for the repositories flagged by the last audit.
    Fix(FixArgs),
    /// Print the detected repository type and language for one directory.
    Classify(ClassifyArgs),
}

#[derive(Debug, Parser)]
struct AuditArgs {
    /// Directory containing one checkout per repository (default: current directory).
    #[arg(long)]
    workspace_dir: Option<Utf8PathBuf>,

    /// GitHub organization to enumerate.
    #[arg(long)]
    org: Option<String>,

    /// Audit report path (default: <workspace_dir>/workspace/claude-config-audit-report.json).
    #[arg(long)]
    report: Option<Utf8PathBuf>,

    /// Audit these repositories instead of asking `gh` for the organization's list.
    #[arg(long = "repo", value_name = "NAME")]
    repos: Vec<String>,

    /// Maximum number of repositories requested from `gh`.
    #[arg(long)]
    limit: Option<u32>,
}

#[derive(Debug, Parser)]
struct FixArgs {
    /// Directory containing one checkout per repository (default: current directory).
    #[arg(long)]
    workspace_dir: Option<Utf8PathBuf>,

    /// Audit report path (default: <workspace_dir>/workspace/claude-config-audit-report.json).
    #[arg(long)]
    report: Option<Utf8PathBuf>,

    /// Show what would change without writing anything.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Print repository type, issue, and diff details per repository.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Debug, Parser)]
struct ClassifyArgs {
    /// Repository directory to classify.
    dir: Utf8PathBuf,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        match e.downcast_ref::<ToolError>() {
            Some(ToolError::MissingReport { path }) => {
                eprintln!("Error: Audit report not found at {path}. Run audit first:");
                eprintln!("  fleetfix audit");
            }
            Some(tool_err) => {
                error!("{:?}", e);
                return ExitCode::from(tool_err.exit_code());
            }
            None => error!("{:?}", e),
        }
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Audit(args) => cmd_audit(cli.config, args),
        Command::Fix(args) => cmd_fix(cli.config, args),
        Command::Classify(args) => cmd_classify(args),
    }
}

fn merged_config(
    config_path: Option<Utf8PathBuf>,
    cli: CliOverrides,
) -> anyhow::Result<MergedConfig> {
    let file_config = config::load_or_default(config_path.as_deref(), Utf8Path::new("."))
        .context("load fleetfix.toml config")?;
    let merged = ConfigMerger::new(file_config).merge(cli);
    debug!("merged config: {:?}", merged);
    Ok(merged)
}

fn cmd_audit(config_path: Option<Utf8PathBuf>, args: AuditArgs) -> anyhow::Result<()> {
    let merged = merged_config(
        config_path,
        CliOverrides {
            org: args.org,
            workspace_dir: args.workspace_dir,
            limit: args.limit,
            report: args.report,
        },
    )?;

    let lister: Box<dyn RepoLister> = if args.repos.is_empty() {
        Box::new(GhRepoLister {
            org: merged.org.clone(),
            limit: merged.limit,
        })
    } else {
        Box::new(StaticRepoLister::from_names(args.repos))
    };

    let settings = AuditSettings {
        workspace_dir: merged.workspace_dir,
        report_path: merged.report_path,
        org: merged.org,
    };

    let report = run_audit(&settings, lister.as_ref())?;
    println!("Found {} active repositories\n", report.summary.total);
    print!("{}", render_audit_summary(&report));

    write_audit_report(&report, &settings.report_path, &FsWritePort)
        .with_context(|| format!("write audit report {}", settings.report_path))?;
    println!("\n✓ Detailed report saved to: {}", settings.report_path);

    info!(
        total = report.summary.total,
        needs_fix = report.summary.needs_fix(),
        "audit complete"
    );
    Ok(())
}

fn cmd_fix(config_path: Option<Utf8PathBuf>, args: FixArgs) -> anyhow::Result<()> {
    let merged = merged_config(
        config_path,
        CliOverrides {
            workspace_dir: args.workspace_dir,
            report: args.report,
            ..CliOverrides::default()
        },
    )?;

    let settings = FixSettings {
        workspace_dir: merged.workspace_dir,
        report_path: merged.report_path,
        dry_run: args.dry_run,
        template: ConfigTemplate {
            org: merged.org,
            base_config_url: merged.base_url,
        },
    };

    let summary = run_fix(&settings)?;
    print!(
        "{}",
        render_fix_summary(&summary, settings.dry_run, args.verbose)
    );
    Ok(())
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    // Name-based rules need the real directory name, which `.` and `..` don't carry.
    let resolved = fs::canonicalize(&args.dir).with_context(|| format!("resolve {}", args.dir))?;
    let dir = Utf8PathBuf::try_from(resolved)
        .with_context(|| format!("{} is not valid UTF-8", args.dir))?;
    if !dir.is_dir() {
        anyhow::bail!("{} is not a directory", args.dir);
    }

    let repo = FsRepoView::new(dir);

    let repo_type = classify(&repo);
    println!("type: {}", repo_type);
    println!("language: {}", repo_type.primary_language());
    Ok(())
}
