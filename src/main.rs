//! CLI glue: argument parsing, log sink setup, and exit-status mapping.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use project_organizer::pipeline::{self, RunOptions};

#[derive(Parser, Debug)]
#[command(name = "project-organizer", version, about = "Classify and organize a project tree")]
struct Cli {
    /// Root directory to scan.
    #[arg(default_value = ".")]
    root: PathBuf,

    /// JSON configuration document.
    #[arg(long, default_value = "organizer.json")]
    config: PathBuf,

    /// Report destination (overrides the config).
    #[arg(long)]
    report: Option<PathBuf>,

    /// Physically relocate files into the canonical layout. Destructive: no
    /// dry-run, no undo, existing destination files are overwritten.
    #[arg(long)]
    organize: bool,

    /// Log destination (append-only, timestamped, leveled).
    #[arg(long, default_value = "project_organization.log")]
    log_file: PathBuf,
}

fn init_logging(path: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(e) => {
            eprintln!(
                "warning: cannot open log file {}: {e}; logging to stderr",
                path.display()
            );
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_file);

    let options = RunOptions {
        root: cli.root,
        config_path: cli.config,
        report_path: cli.report,
        organize: cli.organize,
    };

    match pipeline::run(&options) {
        Ok(result) => {
            // Per-item failures stay in the log; the console stays quiet on
            // the normal path.
            println!("Project organization completed successfully");
            println!(
                "Check {} for detailed report",
                result.data.report_path.display()
            );
        }
        Err(e) => {
            tracing::error!("critical error during project organization: {}", e);
            eprintln!("Error during project organization: {e}");
            std::process::exit(1);
        }
    }
}
