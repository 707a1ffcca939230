use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use millprep::{check_file, init_logging_with, Config, LogFormat, BUILD_DATE, VERSION};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};

/// Mesh preparation for CNC milling
#[derive(Parser)]
#[command(name = "millprep")]
#[command(about = "Import, repair and validate meshes for CNC milling", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import, repair and validate mesh files
    Check {
        /// Configuration file (.toml or .json); defaults to the user config
        #[arg(long)]
        config: Option<PathBuf>,

        /// Validate as imported, without repair
        #[arg(long)]
        no_repair: bool,

        /// Mesh files to check
        #[arg(name = "FILES", required = true)]
        files: Vec<PathBuf>,
    },

    /// Write the default configuration
    InitConfig {
        /// Destination; defaults to the user config path
        #[arg(name = "PATH")]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_logging_with(format)?;
    debug!(version = VERSION, built = BUILD_DATE, "millprep starting");

    match cli.command {
        Commands::Check {
            config,
            no_repair,
            files,
        } => run_check(config, !no_repair, &files),
        Commands::InitConfig { path } => run_init_config(path),
    }
}

fn run_check(config: Option<PathBuf>, repair: bool, files: &[PathBuf]) -> Result<ExitCode> {
    let config = match config {
        Some(path) => Config::load_from_file(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load_or_default(&Config::default_path())
            .context("Failed to load user config")?,
    };

    let mut failed = 0usize;
    for path in files {
        match check_file(path, &config, repair) {
            Ok(report) => {
                println!("{report}");
                if let Some(summary) = &report.repair {
                    println!("  {summary}");
                }
                if !report.is_valid() {
                    failed += 1;
                }
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Import failed");
                println!("{}: FAILED: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    info!(checked = files.len(), failed, "Check complete");
    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_init_config(path: Option<PathBuf>) -> Result<ExitCode> {
    let path = path.unwrap_or_else(Config::default_path);
    Config::default()
        .save_to_file(&path)
        .with_context(|| format!("Failed to write config {}", path.display()))?;
    println!("Wrote default configuration to {}", path.display());
    Ok(ExitCode::SUCCESS)
}
