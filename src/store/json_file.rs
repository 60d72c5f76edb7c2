//! JSON file summary store.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::SummaryRow;

use super::SummaryStore;

/// Keeps rows as a JSON array in a single file.
///
/// Every operation reads the file and mutations rewrite it whole; the
/// mutex serialises access from one process.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::store::{JsonFileSummaryStore, SummaryStore};
///
/// let store = JsonFileSummaryStore::open("./data/summaries.json")?;
/// println!("{} saved summaries", store.list()?.len());
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct JsonFileSummaryStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileSummaryStore {
    /// Opens the store at `path`, creating an empty file (and parent
    /// directories) when none exists.
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| store_error(&path, e))?;
            }
            fs::write(&path, "[]").map_err(|e| store_error(&path, e))?;
            debug!(path = %path.display(), "Created summary store file");
        }

        let store = Self {
            path,
            lock: Mutex::new(()),
        };
        // Fail early on a corrupt file.
        store.read_rows()?;
        Ok(store)
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_rows(&self) -> EngineResult<Vec<SummaryRow>> {
        let content = fs::read_to_string(&self.path).map_err(|e| store_error(&self.path, e))?;
        serde_json::from_str(&content).map_err(|e| store_error(&self.path, e))
    }

    fn write_rows(&self, rows: &[SummaryRow]) -> EngineResult<()> {
        let content = serde_json::to_string_pretty(rows).map_err(|e| store_error(&self.path, e))?;
        fs::write(&self.path, content).map_err(|e| store_error(&self.path, e))
    }

    fn with_lock<T>(&self, f: impl FnOnce() -> EngineResult<T>) -> EngineResult<T> {
        let _guard = self.lock.lock().map_err(|_| EngineError::StoreError {
            message: "summary store lock poisoned".to_string(),
        })?;
        f()
    }
}

fn store_error(path: &Path, err: impl std::fmt::Display) -> EngineError {
    EngineError::StoreError {
        message: format!("{}: {}", path.display(), err),
    }
}

impl SummaryStore for JsonFileSummaryStore {
    fn save(&self, row: SummaryRow) -> EngineResult<SummaryRow> {
        self.with_lock(|| {
            let mut rows = self.read_rows()?;
            rows.push(row.clone());
            self.write_rows(&rows)?;
            Ok(row)
        })
    }

    fn list(&self) -> EngineResult<Vec<SummaryRow>> {
        self.with_lock(|| self.read_rows())
    }

    fn get(&self, id: Uuid) -> EngineResult<SummaryRow> {
        self.with_lock(|| {
            self.read_rows()?
                .into_iter()
                .find(|row| row.id == id)
                .ok_or_else(|| EngineError::SummaryNotFound { id: id.to_string() })
        })
    }

    fn delete(&self, id: Uuid) -> EngineResult<()> {
        self.with_lock(|| {
            let mut rows = self.read_rows()?;
            let before = rows.len();
            rows.retain(|row| row.id != id);
            if rows.len() == before {
                return Err(EngineError::SummaryNotFound { id: id.to_string() });
            }
            self.write_rows(&rows)
        })
    }
}
