//! Unit tests for the taskbook command-line entry point.

use super::{Cli, Command, report, run_demo};
use clap::Parser;
use mockable::DefaultClock;
use rstest::rstest;
use std::env;
use std::ffi::OsString;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use taskbook::task::{
    adapters::{json_file::DEFAULT_DATABASE_PATH, memory::InMemoryTaskStore},
    domain::{TaskLocale, TaskValidationError},
    services::{
        CreateTaskRequest, StoragePolicy, TaskCreationConfig, TaskCreationError,
        TaskCreationService,
    },
};

const CLI_ENV_KEYS: [&str; 3] = ["TASKBOOK_DATABASE", "TASKBOOK_LENIENT", "TASKBOOK_LOCALE"];

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Serializes environment access and restores the taskbook variables on drop.
struct EnvVarGuard {
    previous: Vec<(OsString, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Clears every taskbook variable, then applies `changes`.
    fn with(changes: &[(&str, &str)]) -> Self {
        let lock = ENV_MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let previous = CLI_ENV_KEYS
            .iter()
            .map(|key| (OsString::from(key), env::var_os(key)))
            .collect();

        unsafe {
            // SAFETY: the global mutex serializes environment mutations in tests.
            for key in CLI_ENV_KEYS {
                env::remove_var(key);
            }
            for (key, value) in changes {
                env::set_var(key, value);
            }
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(previous) => env::set_var(&key, &previous),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("arguments should parse")
}

#[rstest]
fn add_uses_strict_english_defaults() {
    let _env = EnvVarGuard::with(&[]);

    let cli = parse(&[
        "taskbook", "add", "--title", "Buy book", "--due", "2025-07-20", "--priority", "High",
    ]);

    assert_eq!(cli.database.as_str(), DEFAULT_DATABASE_PATH);
    assert_eq!(cli.creation_config(), TaskCreationConfig::default());
    let Command::Add {
        title,
        description,
        due,
        priority,
    } = cli.command
    else {
        panic!("expected the add command");
    };
    assert_eq!(title, "Buy book");
    assert_eq!(description, "");
    assert_eq!(due, "2025-07-20");
    assert_eq!(priority, "High");
}

#[rstest]
fn global_flags_are_accepted_after_the_subcommand() {
    let _env = EnvVarGuard::with(&[]);

    let cli = parse(&[
        "taskbook", "add", "--title", "Mua sách", "--due", "2025-07-20", "--priority", "Cao",
        "--locale", "vi", "--lenient", "--database", "data/tasks.json",
    ]);

    assert_eq!(cli.database.as_str(), "data/tasks.json");
    assert_eq!(
        cli.creation_config(),
        TaskCreationConfig::lenient().with_locale(TaskLocale::Vietnamese)
    );
}

#[rstest]
fn environment_supplies_database_policy_and_locale() {
    let _env = EnvVarGuard::with(&[
        ("TASKBOOK_DATABASE", "/tmp/taskbook.json"),
        ("TASKBOOK_LENIENT", "true"),
        ("TASKBOOK_LOCALE", "vietnamese"),
    ]);

    let cli = parse(&["taskbook", "demo"]);

    assert!(matches!(cli.command, Command::Demo));
    assert_eq!(cli.database.as_str(), "/tmp/taskbook.json");
    let config = cli.creation_config();
    assert_eq!(config.storage_policy, StoragePolicy::Lenient);
    assert_eq!(config.locale, TaskLocale::Vietnamese);
}

#[rstest]
#[case(&["taskbook"])]
#[case(&["taskbook", "add", "--title", "Buy book", "--priority", "High"])]
#[case(&["taskbook", "--locale", "fr", "demo"])]
fn invalid_invocations_are_rejected(#[case] args: &[&str]) {
    let _env = EnvVarGuard::with(&[]);

    assert!(Cli::try_parse_from(args).is_err());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn report_prints_created_record_on_stdout() {
    let service = TaskCreationService::new(Arc::new(InMemoryTaskStore::new()), Arc::new(DefaultClock));
    let result = service
        .create_task(CreateTaskRequest::new("Buy book", "desc", "2025-07-20", "High"))
        .await;
    let mut out = Vec::new();
    let mut err = Vec::new();

    assert!(report(result, &mut out, &mut err));

    let printed: serde_json::Value = serde_json::from_slice(&out).expect("stdout holds JSON");
    assert_eq!(printed.get("title"), Some(&serde_json::json!("Buy book")));
    assert_eq!(printed.get("status"), Some(&serde_json::json!("Not completed")));
    assert!(err.is_empty());
}

#[rstest]
fn report_prints_rejection_on_stderr() {
    let mut out = Vec::new();
    let mut err = Vec::new();

    let printed = report(
        Err(TaskCreationError::Validation(TaskValidationError::EmptyTitle)),
        &mut out,
        &mut err,
    );

    assert!(!printed);
    assert!(out.is_empty());
    let message = String::from_utf8(err).expect("stderr is UTF-8");
    assert!(message.starts_with("error: "), "unexpected stderr: {message}");
}

#[rstest]
#[case(TaskLocale::English)]
#[case(TaskLocale::Vietnamese)]
#[tokio::test(flavor = "multi_thread")]
async fn demo_succeeds_and_reports_each_step(#[case] locale: TaskLocale) {
    let store = InMemoryTaskStore::new();
    let service = TaskCreationService::with_config(
        Arc::new(store.clone()),
        Arc::new(DefaultClock),
        TaskCreationConfig::default().with_locale(locale),
    );
    let mut out = Vec::new();
    let mut err = Vec::new();

    assert!(run_demo(&service, &mut out, &mut err).await);

    let printed: serde_json::Value = serde_json::from_slice(&out).expect("one record on stdout");
    assert_eq!(printed.get("title"), Some(&serde_json::json!("Buy book")));
    let rejections = String::from_utf8(err).expect("stderr is UTF-8");
    assert_eq!(rejections.lines().count(), 2);
    assert_eq!(store.snapshot().expect("snapshot should succeed").len(), 1);
}
