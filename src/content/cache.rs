//! Best-effort persisted content cache.
//!
//! One JSON record per concrete category, capped at [`CACHE_CAP`] items with
//! the newest kept at the tail, plus a scalar record for the last-selected
//! subject. Reads treat missing or corrupt records as empty; writes never
//! block the deck — failures are logged and swallowed.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::{Category, Item, Subject};

/// Maximum cached items per category.
pub const CACHE_CAP: usize = 40;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CacheRecord {
    items: Vec<Item>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LastSubjectRecord {
    subject: String,
}

/// On-disk cache rooted at a data directory.
pub struct CacheStore {
    base_dir: PathBuf,
}

impl CacheStore {
    pub fn new(base_dir: PathBuf) -> Result<Self, CacheError> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Default cache directory under the platform data dir.
    pub fn default_data_dir() -> Result<PathBuf, CacheError> {
        dirs::data_local_dir()
            .map(|p| p.join("factdeck").join("cache"))
            .ok_or(CacheError::DataDirNotFound)
    }

    fn category_path(&self, category: Category) -> PathBuf {
        self.base_dir.join(format!("{}.json", category.key()))
    }

    fn last_subject_path(&self) -> PathBuf {
        self.base_dir.join("last_subject.json")
    }

    fn read_record(&self, category: Category) -> Result<Vec<Item>, CacheError> {
        let path = self.category_path(category);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path)?;
        let record: CacheRecord = serde_json::from_str(&content)?;
        Ok(record.items)
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), CacheError> {
        let content = serde_json::to_string_pretty(value)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Cached items for a category, oldest first. Missing or corrupt
    /// records read as empty.
    pub fn load(&self, category: Category) -> Vec<Item> {
        match self.read_record(category) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("cache read failed for {}: {}", category.key(), e);
                Vec::new()
            }
        }
    }

    /// Merge freshly fetched items into the category record, keeping the
    /// newest [`CACHE_CAP`] entries. Best-effort: failures are logged only.
    pub fn append(&self, category: Category, new_items: &[Item]) {
        let mut items = self.load(category);
        items.extend_from_slice(new_items);
        if items.len() > CACHE_CAP {
            items.drain(..items.len() - CACHE_CAP);
        }
        let record = CacheRecord {
            items,
            updated_at: Utc::now(),
        };
        if let Err(e) = self.write_json(&self.category_path(category), &record) {
            log::warn!("cache write failed for {}: {}", category.key(), e);
        }
    }

    /// The subject selected in the previous session; unknown or unreadable
    /// records fall back to [`Subject::All`].
    pub fn last_subject(&self) -> Subject {
        let path = self.last_subject_path();
        if !path.exists() {
            return Subject::All;
        }
        let record: Option<LastSubjectRecord> = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok());
        match record {
            Some(record) => Subject::from_key(&record.subject).unwrap_or(Subject::All),
            None => {
                log::warn!("last-subject record unreadable; defaulting to all");
                Subject::All
            }
        }
    }

    /// Persist the selected subject, best-effort.
    pub fn set_last_subject(&self, subject: Subject) {
        let record = LastSubjectRecord {
            subject: subject.key().to_string(),
        };
        if let Err(e) = self.write_json(&self.last_subject_path(), &record) {
            log::warn!("failed to persist subject selection: {}", e);
        }
    }
}
