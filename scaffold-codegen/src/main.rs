//! CLI entry point for scaffold-codegen

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scaffold_codegen::{Namespace, ScaffoldConfig, ScaffoldRequest};

#[derive(Parser)]
#[command(name = "scaffold-codegen")]
#[command(about = "Generate entity, DTO, mapper, DAO, service and controller sources for one class")]
#[command(version)]
struct Cli {
    /// Module directory (e.g. `core`)
    module: String,

    /// PascalCase class name (e.g. `UserAccount`)
    class_name: String,

    /// Feature package below the namespace (e.g. `accounts`)
    package: String,

    /// Dot-separated namespace (defaults to the configured one, `com.example`)
    namespace: Option<String>,

    /// Path to configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base directory the module directory is created in (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Dry run - show what would be generated without writing files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprintln!("error: {}", err.kind());
            println!("{}", Cli::command().render_usage());
            std::process::exit(1);
        }
    };

    // Load configuration first (before logging, so we can use config.log_level)
    let mut config = ScaffoldConfig::load(cli.config.as_deref())?;

    // Initialize logging
    // Priority: RUST_LOG env var > config.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = config.log_level.as_deref().unwrap_or(default_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Apply CLI overrides
    if let Some(output) = cli.output {
        config.output_dir = output;
    }
    if cli.dry_run {
        config.dry_run = true;
    }

    // Validate configuration and inputs before touching the file system
    config.validate()?;
    let namespace = Namespace::parse(cli.namespace.as_deref().unwrap_or(&config.namespace))?;
    let request = ScaffoldRequest::new(cli.module, cli.class_name, cli.package, namespace)?;

    info!(
        "Scaffolding {} in package {} of module {}",
        request.class_name, request.package, request.module
    );

    let files = scaffold_codegen::generate(&request, &config)?;

    if config.dry_run {
        for file in &files {
            println!("Would create {}", file.path.display());
        }
        return Ok(());
    }

    for file in &files {
        println!(
            "{} has been created in {}",
            file.file_name(),
            file.directory().display()
        );
    }

    Ok(())
}
