//! Command-line entry point for taskbook.
//!
//! Usage:
//!
//! ```text
//! taskbook [--database <path>] [--lenient] [--locale en|vi] add \
//!     --title <title> [--description <text>] --due <YYYY-MM-DD> --priority <label>
//! taskbook demo
//! ```
//!
//! `add` prints the created record as JSON on stdout. A rejection is printed
//! on stderr and the process exits with status 1.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use mockable::DefaultClock;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use taskbook::task::{
    adapters::json_file::{DEFAULT_DATABASE_PATH, JsonFileTaskStore},
    domain::{Priority, TaskLocale, TaskRecord},
    ports::TaskStore,
    services::{
        CreateTaskRequest, StoragePolicy, TaskCreationConfig, TaskCreationResult,
        TaskCreationService,
    },
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[cfg(test)]
#[path = "taskbook/tests.rs"]
mod tests;

/// Taskbook - validated task tracking in a JSON file
#[derive(Debug, Parser)]
#[command(name = "taskbook", author, version, about, long_about = None)]
struct Cli {
    /// Path of the JSON task database
    #[arg(long, env = "TASKBOOK_DATABASE", default_value = DEFAULT_DATABASE_PATH, global = true)]
    database: Utf8PathBuf,

    /// Continue when the database is unreadable and ignore failed writes
    #[arg(long, env = "TASKBOOK_LENIENT", global = true)]
    lenient: bool,

    /// Locale of accepted priority labels (en, vi)
    #[arg(long, env = "TASKBOOK_LOCALE", default_value = "en", global = true)]
    locale: TaskLocale,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    const fn creation_config(&self) -> TaskCreationConfig {
        let storage_policy = if self.lenient {
            StoragePolicy::Lenient
        } else {
            StoragePolicy::Strict
        };
        TaskCreationConfig {
            storage_policy,
            locale: self.locale,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a new task
    Add {
        /// Task title
        #[arg(long)]
        title: String,

        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,

        /// Due date formatted YYYY-MM-DD
        #[arg(long)]
        due: String,

        /// Priority label in the selected locale
        #[arg(long)]
        priority: String,
    },
    /// Replay a valid, a duplicate, and an untitled task creation
    Demo,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let service = TaskCreationService::with_config(
        Arc::new(JsonFileTaskStore::new(cli.database.clone())),
        Arc::new(DefaultClock),
        cli.creation_config(),
    );

    let mut out = io::stdout();
    let mut err = io::stderr();
    let succeeded = match cli.command {
        Command::Add {
            title,
            description,
            due,
            priority,
        } => {
            let request = CreateTaskRequest::new(title, description, due, priority);
            report(service.create_task(request).await, &mut out, &mut err)
        }
        Command::Demo => run_demo(&service, &mut out, &mut err).await,
    };

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Writes the created record to `out` or the rejection to `err`.
///
/// Returns `true` when a task was created and printed.
fn report(
    result: TaskCreationResult<TaskRecord>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> bool {
    match result {
        Ok(record) => {
            let written = serde_json::to_string_pretty(&record)
                .map_err(io::Error::other)
                .and_then(|encoded| writeln!(out, "{encoded}"));
            if let Err(write_err) = written {
                tracing::error!(error = %write_err, "failed to print created task");
                return false;
            }
            true
        }
        Err(rejection) => {
            // Nothing useful remains to do if stderr is gone.
            let _written = writeln!(err, "error: {rejection}");
            false
        }
    }
}

/// Always succeeds; rejections are part of the walkthrough.
async fn run_demo<S: TaskStore>(
    service: &TaskCreationService<S, DefaultClock>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> bool {
    let locale = service.config().locale;
    let high = locale.priority_label(Priority::High);
    let low = locale.priority_label(Priority::Low);
    let steps = [
        (
            "valid task",
            CreateTaskRequest::new("Buy book", "Software engineering book.", "2025-07-20", high),
        ),
        (
            "duplicate task",
            CreateTaskRequest::new("Buy book", "Software engineering book.", "2025-07-20", high),
        ),
        (
            "task with empty title",
            CreateTaskRequest::new("", "Task without a title.", "2025-07-22", low),
        ),
    ];

    for (label, request) in steps {
        tracing::info!(step = label, "demo");
        let _created = report(service.create_task(request).await, &mut *out, &mut *err);
    }
    true
}
