use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use account_form::prelude::*;
use clap::Parser;
use log::{SetLoggerError, debug, error};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

/// Validate an account form snapshot and report per-field feedback.
#[derive(Debug, Parser)]
#[command(name = "account-form-cli", version)]
struct Cli {
    /// JSON form config (e.g. {"minPasswordLength": 8}).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read the snapshot from a file instead of the argument.
    #[arg(short = 'f', long = "file", conflicts_with = "snapshot")]
    file: Option<PathBuf>,

    /// Log widget activity to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Snapshot JSON. Read from stdin when neither this nor --file is given.
    snapshot: Option<String>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read snapshot: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Widget(#[from] WidgetError),
}

fn read_snapshot(cli: &Cli) -> Result<String, CliError> {
    match (&cli.snapshot, &cli.file) {
        (Some(json), _) => Ok(json.clone()),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => {
            let mut json = String::new();
            io::stdin().read_to_string(&mut json)?;
            Ok(json)
        }
    }
}

fn report(widget: &NewAccountForm, update: &WidgetUpdate) {
    if let Some(form) = widget.form() {
        for (name, field) in form.iter() {
            if field.is_valid() {
                println!("{name}: ok");
            } else {
                let failing: Vec<&str> = field.failing().collect();
                println!("{name}: invalid ({})", failing.join(", "));
            }
        }
    }

    for field in FieldName::ALL {
        if let Some(message) = update.feedback.message(field) {
            println!("  {field}: {message}");
        }
    }
    for (label, error) in update.feedback.password.items() {
        let mark = if error { "x" } else { "ok" };
        println!("  password [{mark}] {label}");
    }

    if update.accepted.is_some() {
        println!("accepted");
    } else {
        println!("blocked");
    }
}

fn run(cli: &Cli) -> Result<bool, CliError> {
    let config = match &cli.config {
        Some(path) => FormConfig::load(path)?,
        None => FormConfig::default(),
    };
    debug!("Using {:?}", config);
    let json = read_snapshot(cli)?;

    let mut widget = NewAccountForm::new(config);
    widget.set_value(&json)?;
    widget.init()?;

    let accepted = match widget.dispatch(FormEvent::Submit)? {
        Some(update) => {
            report(&widget, &update);
            update.accepted.is_some()
        }
        None => false,
    };

    widget.dispose();
    Ok(accepted)
}

fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

fn init_logging(verbose: bool) -> Result<(), SetLoggerError> {
    WriteLogger::init(level_filter(verbose), Config::default(), io::stderr())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("account-form-cli failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
