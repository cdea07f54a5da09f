//! Entry store backed by a single JSON document file.
//!
//! Layout: `{"_default": {"1": {...}, "2": {...}}}`. Other top-level tables
//! found in the file are carried through untouched on rewrite.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::{EntryStore, Table, next_id, owned_by, replace_fields};
use crate::entry::{Entry, EntryFields, EntryId, NewEntry};
use crate::error::{PlanCalError, PlanCalResult};

#[derive(Serialize, Deserialize, Default)]
struct DbFile {
    #[serde(rename = "_default", default)]
    table: Table,

    #[serde(flatten)]
    other_tables: serde_json::Map<String, serde_json::Value>,
}

pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating the file and its directory if absent.
    pub fn open(path: impl Into<PathBuf>) -> PlanCalResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        if !path.exists() {
            write_db(&path, &DbFile::default())?;
            tracing::info!(path = %path.display(), "created entry store");
        }

        Ok(JsonFileStore {
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read(&self) -> PlanCalResult<DbFile> {
        read_db(&self.path)
    }

    fn write(&self, db: &DbFile) -> PlanCalResult<()> {
        write_db(&self.path, db)
    }
}

fn read_db(path: &Path) -> PlanCalResult<DbFile> {
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(DbFile::default());
    }
    serde_json::from_str(&content).map_err(|e| {
        PlanCalError::Serialization(format!("Failed to parse {}: {e}", path.display()))
    })
}

fn write_db(path: &Path, db: &DbFile) -> PlanCalResult<()> {
    let content = serde_json::to_string(db)?;
    std::fs::write(path, content)?;
    Ok(())
}

impl EntryStore for JsonFileStore {
    fn insert(&self, entry: &NewEntry) -> PlanCalResult<EntryId> {
        let _guard = self.guard();
        let mut db = self.read()?;

        let id = next_id(&db.table);
        db.table.insert(id, entry.clone());
        self.write(&db)?;

        tracing::debug!(id, "inserted entry");
        Ok(id)
    }

    fn find_by_owner(&self, owner_id: &str) -> PlanCalResult<Vec<Entry>> {
        let _guard = self.guard();
        Ok(owned_by(&self.read()?.table, owner_id))
    }

    fn get(&self, id: EntryId) -> PlanCalResult<Option<Entry>> {
        let _guard = self.guard();
        let mut db = self.read()?;
        Ok(db.table.remove(&id).map(|doc| Entry::from_document(id, doc)))
    }

    fn update_by_id(&self, id: EntryId, fields: &EntryFields) -> PlanCalResult<bool> {
        let _guard = self.guard();
        let mut db = self.read()?;

        if !replace_fields(&mut db.table, id, fields) {
            return Ok(false);
        }
        self.write(&db)?;

        tracing::debug!(id, "updated entry");
        Ok(true)
    }

    fn delete_by_id(&self, id: EntryId) -> PlanCalResult<bool> {
        let _guard = self.guard();
        let mut db = self.read()?;

        if db.table.remove(&id).is_none() {
            return Ok(false);
        }
        self.write(&db)?;

        tracing::debug!(id, "deleted entry");
        Ok(true)
    }
}
