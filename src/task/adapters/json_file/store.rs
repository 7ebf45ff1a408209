//! Task store backed by a single JSON array file.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::{self, Write};
use tracing::{debug, warn};

use crate::task::{
    domain::StoredTask,
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Well-known database file used when no path is configured.
pub const DEFAULT_DATABASE_PATH: &str = "tasks_database.json";

/// Task store persisting the whole collection to one JSON file.
///
/// The file holds a JSON array. Elements that are not recognised task
/// records are preserved as [`StoredTask::Foreign`].
///
/// Saves write a sibling temporary file and rename it over the target, so
/// readers observe either the previous or the new collection. The temporary
/// file name is fixed, so concurrent saves from separate processes to the
/// same database can clobber each other.
#[derive(Debug, Clone)]
pub struct JsonFileTaskStore {
    path: Utf8PathBuf,
}

impl JsonFileTaskStore {
    /// Creates a store for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the database file path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Runs blocking filesystem work off the async executor.
    async fn run_blocking<F, T>(
        &self,
        f: F,
        on_join_error: fn(io::Error) -> TaskStoreError,
    ) -> TaskStoreResult<T>
    where
        F: FnOnce(&Utf8Path) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || f(&path))
            .await
            .map_err(|err| on_join_error(io::Error::other(format!("task join error: {err}"))))?
    }
}

impl Default for JsonFileTaskStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_PATH)
    }
}

#[async_trait]
impl TaskStore for JsonFileTaskStore {
    async fn load_all(&self) -> TaskStoreResult<Vec<StoredTask>> {
        self.run_blocking(read_entries, |err| TaskStoreError::read(err))
            .await
    }

    async fn save_all(&self, entries: &[StoredTask]) -> TaskStoreResult<()> {
        let encoded = serde_json::to_vec_pretty(entries).map_err(TaskStoreError::write)?;
        self.run_blocking(
            move |path| write_entries(path, &encoded),
            |err| TaskStoreError::write(err),
        )
        .await
    }
}

fn read_entries(path: &Utf8Path) -> TaskStoreResult<Vec<StoredTask>> {
    let (dir, file_name) = match open_parent_dir(path) {
        Ok(opened) => opened,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(TaskStoreError::read(err)),
    };
    let contents = match dir.read_to_string(file_name) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path, "task database does not exist yet");
            return Ok(Vec::new());
        }
        Err(err) => return Err(TaskStoreError::read(err)),
    };
    let entries: Vec<StoredTask> =
        serde_json::from_str(&contents).map_err(TaskStoreError::corrupt)?;
    let foreign = entries.iter().filter(|entry| entry.as_record().is_none()).count();
    if foreign > 0 {
        warn!(path = %path, foreign, "task database holds unrecognised entries, keeping them as-is");
    }
    Ok(entries)
}

fn write_entries(path: &Utf8Path, encoded: &[u8]) -> TaskStoreResult<()> {
    let (dir, file_name) = open_parent_dir(path).map_err(TaskStoreError::write)?;
    let temp_name = format!(".{file_name}.tmp");

    let written = write_synced(&dir, &temp_name, encoded)
        .and_then(|()| dir.rename(&temp_name, &dir, file_name));
    if let Err(err) = written {
        // Best effort: the temporary file may not exist.
        let _cleanup = dir.remove_file(&temp_name);
        return Err(TaskStoreError::write(err));
    }

    debug!(path = %path, bytes = encoded.len(), "task database written");
    Ok(())
}

fn write_synced(dir: &Dir, file_name: &str, contents: &[u8]) -> io::Result<()> {
    let mut file = dir.create(file_name)?;
    file.write_all(contents)?;
    file.sync_all()
}

fn open_parent_dir(path: &Utf8Path) -> io::Result<(Dir, &str)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("database path '{path}' has no file name")))?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}
