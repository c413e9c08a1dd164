// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cmd::commands::{check_command, list_command, show_command};
use cmd::config::{AuditConfig, resolve_root};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "auditor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Repository root (defaults to $AUDITOR_ROOT)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// YAML config file naming the collections to check
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse every record and report malformed entries
    Check,
    /// Print the id and checksum of each record in a collection
    List {
        /// Collection name, e.g. "talks"
        collection: String,
    },
    /// Print one record as it would be written back
    Show {
        /// Collection name, e.g. "speakers"
        collection: String,
        /// Record id (the file name without extension)
        id: String,
    },
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => AuditConfig::load(path)?,
        None => AuditConfig::default(),
    };
    let root = resolve_root(cli.root, &config)?;
    let repo = cmd::open_repository(&root)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match cli.command {
        Commands::Check => {
            let report = check_command(&repo, &config.collections, &mut out).await?;
            if report.is_clean() {
                ExitCode::SUCCESS
            } else {
                writeln!(out, "{} malformed entries", report.malformed_count())?;
                ExitCode::FAILURE
            }
        }
        Commands::List { collection } => {
            list_command(&repo, &collection, &mut out).await?;
            ExitCode::SUCCESS
        }
        Commands::Show { collection, id } => {
            if show_command(&repo, &collection, &id, &mut out).await? {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    };
    out.flush()?;
    Ok(code)
}

#[tokio::main]
async fn main() -> ExitCode {
    diagnostics::init_diagnostics();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            diagnostics::log_error!("Command failed: {error}", error: format!("{e:#}"));
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
