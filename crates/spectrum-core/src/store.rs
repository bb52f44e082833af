//! Best-effort key/value persistence for the last assessment result and captured leads.

use crate::assessment::{ASSESSMENT_VERSION, AssessmentResult};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Storage key of the persisted assessment record.
pub const ASSESSMENT_KEY: &str = "ai-maturity-assessment";

/// String-keyed string storage, shaped after browser local storage.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside `dir`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
                _ => '_',
            })
            .collect();
        self.dir.join(format!("{file}.json"))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(Error::StorageIo {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let io_err = |source| Error::StorageIo {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io_err)?;

        // Write a sibling temp file and rename so readers never see a torn record.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value.as_bytes()).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(Error::StorageIo {
                key: key.to_string(),
                source,
            }),
        }
    }
}

/// In-process storage; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_items<T>(&self, f: impl FnOnce(&mut BTreeMap<String, String>) -> T) -> T {
        let mut guard = match self.items.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.with_items(|items| items.get(key).cloned()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.with_items(|items| items.insert(key.to_string(), value.to_string()));
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.with_items(|items| items.remove(key));
        Ok(())
    }
}

/// Persisted assessment record. All three fields are set together or cleared together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAssessment {
    pub result: Option<AssessmentResult>,
    pub completed_at: Option<String>,
    pub framework_version: Option<String>,
}

impl StoredAssessment {
    pub fn is_current(&self) -> bool {
        self.framework_version.as_deref() == Some(ASSESSMENT_VERSION)
    }
}

/// Last assessment result, cached under [`ASSESSMENT_KEY`].
///
/// Reads and writes never fail the caller: storage and decode errors are logged and treated as
/// "nothing stored".
pub struct AssessmentStore<S> {
    storage: S,
    state: StoredAssessment,
}

impl<S: Storage> AssessmentStore<S> {
    /// Loads the stored record. A record written by another questionnaire version is cleared and
    /// the cleared record written back.
    pub fn load(storage: S) -> Self {
        let mut store = Self {
            storage,
            state: StoredAssessment::default(),
        };

        let raw = match store.storage.get_item(ASSESSMENT_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read stored assessment");
                None
            }
        };
        let Some(raw) = raw else {
            return store;
        };

        match serde_json::from_str::<StoredAssessment>(&raw) {
            Ok(state) if state.is_current() => store.state = state,
            Ok(state) => {
                tracing::debug!(
                    stored = state.framework_version.as_deref().unwrap_or("-"),
                    current = ASSESSMENT_VERSION,
                    "stored assessment version mismatch; clearing"
                );
                store.clear_result();
            }
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable stored assessment");
                store.clear_result();
            }
        }
        store
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.state.result.as_ref()
    }

    pub fn completed_at(&self) -> Option<&str> {
        self.state.completed_at.as_deref()
    }

    pub fn framework_version(&self) -> Option<&str> {
        self.state.framework_version.as_deref()
    }

    pub fn state(&self) -> &StoredAssessment {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn set_result(&mut self, result: AssessmentResult) {
        self.state = StoredAssessment {
            result: Some(result),
            completed_at: Some(crate::time::now_rfc3339()),
            framework_version: Some(ASSESSMENT_VERSION.to_string()),
        };
        self.persist();
    }

    pub fn clear_result(&mut self) {
        self.state = StoredAssessment::default();
        self.persist();
    }

    fn persist(&self) {
        let written = serde_json::to_string(&self.state)
            .map_err(Error::from)
            .and_then(|json| self.storage.set_item(ASSESSMENT_KEY, &json));
        if let Err(err) = written {
            tracing::warn!(error = %err, "failed to persist assessment");
        }
    }
}
