use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use generics_report::{ConfigError, OutputFormat, Report, ReportConfig};

/// Build products and books from a TOML catalog and print them
#[derive(Parser)]
#[command(name = "report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog file; the built-in walkthrough catalog is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format, overriding the catalog's `format`
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Reject entries with unset name or author
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .without_time()
        .init();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", error_line(&err).red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };
    config.apply_overrides(cli.format, cli.strict);

    let report = Report::from_config(&config)?;
    let rendered = report.render(config.format)?;

    Ok(match config.format {
        OutputFormat::Text => format!(
            "{}\n{}\n{}",
            "=== Catalog ===".bold(),
            rendered,
            format!("✓ {} item(s) built", report.items().len()).green()
        ),
        OutputFormat::Json => rendered,
    })
}

fn error_line(err: &ConfigError) -> String {
    format!("✗ {err}")
}
