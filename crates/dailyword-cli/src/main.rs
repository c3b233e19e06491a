mod commands;
mod logging;
mod settings;

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use commands::{run_regenerate, run_show, run_update};
use dailyword_publish::PublishError;
use logging::{LoggingError, init_logging};
use settings::{PublishStrategy, Settings, SettingsError, load_settings};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("publish error: {0}")]
    Publish(#[from] PublishError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "dailyword", version, about = "Publish a deterministic word of the day")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// Settings file (TOML). Defaults apply when it does not exist.
    #[arg(long, global = true, default_value = "dailyword.toml")]
    config: PathBuf,
    /// Override the dataset path.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,
    /// Override the host document path.
    #[arg(long, global = true)]
    document: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Patch the marked region of the document.
    Update(UpdateArgs),
    /// Regenerate the whole document (legacy).
    Regenerate(DateArgs),
    /// Print the block for the day without writing.
    Show(ShowArgs),
}

#[derive(Args, Debug, Default)]
struct DateArgs {
    /// Date to select for (YYYY-MM-DD). Defaults to the local date.
    #[arg(long, value_name = "DATE")]
    date: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
struct UpdateArgs {
    #[command(flatten)]
    date: DateArgs,
    /// Print the region instead of writing the document.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[derive(Args, Debug)]
struct ShowArgs {
    #[command(flatten)]
    date: DateArgs,
    /// Print the selected record as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let (mut settings, settings_error) = settings_or_default(&cli.config);
    if let Some(dataset) = cli.dataset {
        settings.dataset_path = dataset;
    }
    if let Some(document) = cli.document {
        settings.document_path = document;
    }

    if let Err(err) = init_logging(&settings.log) {
        eprintln!("{}", CliError::from(err));
    }
    if let Some(err) = settings_error {
        tracing::warn!(
            event = "settings_invalid",
            path = %cli.config.display(),
            error = %err,
            "using default settings"
        );
    }

    let now = Local::now().naive_local();
    tracing::info!(
        event = "run_started",
        dataset = %settings.dataset_path.display(),
        document = %settings.document_path.display()
    );

    let timer = Instant::now();
    let outcome = run(cli.command, &settings, now);
    let duration_ms = timer.elapsed().as_millis();

    // Failures are reported, never turned into a non-zero exit.
    match outcome {
        Ok(()) => tracing::info!(event = "run_finished", status = "success", duration_ms = duration_ms),
        Err(err) => tracing::error!(
            event = "run_finished",
            status = "failed",
            duration_ms = duration_ms,
            error = %err
        ),
    }
}

/// Load settings, falling back to defaults when the file cannot be used.
fn settings_or_default(path: &Path) -> (Settings, Option<CliError>) {
    match load_settings(path) {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(CliError::from(err))),
    }
}

fn run(
    command: Option<Command>,
    settings: &Settings,
    now: NaiveDateTime,
) -> Result<(), CliError> {
    let command = command.unwrap_or_else(|| match settings.strategy {
        PublishStrategy::Region => Command::Update(UpdateArgs::default()),
        PublishStrategy::Full => Command::Regenerate(DateArgs::default()),
    });

    match command {
        Command::Update(args) => run_update(settings, resolve_date(&args.date, now), args.dry_run),
        Command::Regenerate(args) => {
            let date = resolve_date(&args, now);
            run_regenerate(settings, date.and_time(now.time()))
        }
        Command::Show(args) => run_show(settings, resolve_date(&args.date, now), args.json),
    }
}

fn resolve_date(args: &DateArgs, now: NaiveDateTime) -> NaiveDate {
    args.date.unwrap_or_else(|| now.date())
}
