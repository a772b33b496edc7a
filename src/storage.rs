//! Persistence Bridge
//!
//! Stores the whole task list as one JSON array under a fixed key.
//! Backends are raw key/value stores so tests can inspect exact payloads.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::STORAGE_KEY;
use crate::models::Task;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("task list codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

impl StorageError {
    fn from_js(value: JsValue) -> Self {
        StorageError::Backend(format!("{:?}", value))
    }
}

/// Raw key/value storage
pub trait StorageBackend: Send + Sync {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Browser `localStorage` for the current origin
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(StorageError::from_js)?
            .ok_or(StorageError::Unavailable)
    }

    /// Whether `localStorage` can be reached at all
    pub fn is_available() -> bool {
        Self::storage().is_ok()
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(StorageError::from_js)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?.set_item(key, value).map_err(StorageError::from_js)
    }
}

/// In-process storage, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> StorageResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Backend("memory storage lock poisoned".to_string()))
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load/Save of the task list under one key
#[derive(Clone)]
pub struct TaskRepository {
    backend: Arc<dyn StorageBackend>,
    key: String,
}

impl TaskRepository {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Repository over browser storage, or over memory when the browser has none
    pub fn browser() -> Self {
        if LocalStorageBackend::is_available() {
            Self::new(Arc::new(LocalStorageBackend))
        } else {
            tracing::warn!("local storage unavailable, reminders will not survive a reload");
            Self::new(Arc::new(MemoryBackend::new()))
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read and decode the stored list; `None` when nothing is stored
    pub fn try_load(&self) -> StorageResult<Option<Vec<Task>>> {
        match self.backend.get_item(&self.key)? {
            Some(raw) => Ok(Some(decode_tasks(&raw)?)),
            None => Ok(None),
        }
    }

    /// Stored list, or an empty list when absent or unreadable
    pub fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(Some(tasks)) => {
                tracing::info!(count = tasks.len(), key = %self.key, "loaded reminders");
                tasks
            }
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!(%error, key = %self.key, "discarding unreadable reminders");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored value with the full list
    pub fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        let json = encode_tasks(tasks)?;
        self.backend.set_item(&self.key, &json)
    }
}

pub fn encode_tasks(tasks: &[Task]) -> StorageResult<String> {
    Ok(serde_json::to_string(tasks)?)
}

pub fn decode_tasks(raw: &str) -> StorageResult<Vec<Task>> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (MemoryBackend, TaskRepository) {
        let backend = MemoryBackend::new();
        let repo = TaskRepository::new(Arc::new(backend.clone()));
        (backend, repo)
    }

    fn make_tasks(count: usize) -> Vec<Task> {
        (0..count)
            .map(|i| {
                let mut task = Task::new(format!("id-{i}"), format!("task {i}"), 1_700_000_000_000 + i as i64);
                task.completed = i % 3 == 0;
                task
            })
            .collect()
    }

    #[test]
    fn test_load_missing_is_empty() {
        let (_, repo) = setup();
        assert!(repo.try_load().unwrap().is_none());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (_, repo) = setup();
        for count in [0, 1, 37, 500] {
            let tasks = make_tasks(count);
            repo.save(&tasks).expect("save failed");
            assert_eq!(repo.load(), tasks);
        }
    }

    #[test]
    fn test_save_writes_exact_payload() {
        let (backend, repo) = setup();
        let mut task = Task::new("abc".to_string(), "walk dog".to_string(), 42);
        task.completed = true;

        repo.save(&[task]).unwrap();

        let stored = backend.get_item(STORAGE_KEY).unwrap().unwrap();
        assert_eq!(
            stored,
            r#"[{"id":"abc","text":"walk dog","completed":true,"createdAt":42}]"#
        );
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let (backend, repo) = setup();
        repo.save(&make_tasks(3)).unwrap();
        repo.save(&[]).unwrap();
        assert_eq!(backend.get_item(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_corrupt_storage_loads_empty() {
        let (backend, repo) = setup();
        for raw in ["not json", "{\"id\":1}", "[{\"text\":\"missing fields\"}]", ""] {
            backend.set_item(STORAGE_KEY, raw).unwrap();
            assert!(matches!(repo.try_load(), Err(StorageError::Codec(_))));
            assert!(repo.load().is_empty());
        }
    }

    #[test]
    fn test_reads_existing_blob() {
        let (backend, repo) = setup();
        backend
            .set_item(
                STORAGE_KEY,
                r#"[{"id":"1700000000001","text":"b","completed":false,"createdAt":1700000000001},
                    {"id":"1700000000000","text":"a","completed":true,"createdAt":1700000000000}]"#,
            )
            .unwrap();

        let tasks = repo.load();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].text, "b");
        assert!(tasks[1].completed);
        assert_eq!(tasks[1].created_at, 1_700_000_000_000);
    }

    #[test]
    fn test_keys_are_isolated() {
        let backend = MemoryBackend::new();
        let first = TaskRepository::with_key(Arc::new(backend.clone()), "first");
        let second = TaskRepository::with_key(Arc::new(backend.clone()), "second");

        first.save(&make_tasks(2)).unwrap();
        assert_eq!(first.load().len(), 2);
        assert!(second.load().is_empty());
        assert_eq!(second.key(), "second");
    }
}
