//! In-memory entry store.

use std::sync::{Mutex, MutexGuard};

use super::{EntryStore, Table, next_id, owned_by, replace_fields};
use crate::entry::{Entry, EntryFields, EntryId, NewEntry};
use crate::error::PlanCalResult;

/// Entry store held entirely in memory. Used in tests and as a scratch store.
#[derive(Default)]
pub struct MemoryStore {
    table: Mutex<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EntryStore for MemoryStore {
    fn insert(&self, entry: &NewEntry) -> PlanCalResult<EntryId> {
        let mut table = self.table();
        let id = next_id(&table);
        table.insert(id, entry.clone());
        Ok(id)
    }

    fn find_by_owner(&self, owner_id: &str) -> PlanCalResult<Vec<Entry>> {
        Ok(owned_by(&self.table(), owner_id))
    }

    fn get(&self, id: EntryId) -> PlanCalResult<Option<Entry>> {
        Ok(self
            .table()
            .get(&id)
            .map(|doc| Entry::from_document(id, doc.clone())))
    }

    fn update_by_id(&self, id: EntryId, fields: &EntryFields) -> PlanCalResult<bool> {
        Ok(replace_fields(&mut self.table(), id, fields))
    }

    fn delete_by_id(&self, id: EntryId) -> PlanCalResult<bool> {
        Ok(self.table().remove(&id).is_some())
    }
}
