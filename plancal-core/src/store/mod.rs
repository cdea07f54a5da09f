//! Entry persistence.
//!
//! Entries are schema-less documents keyed by a store-assigned integer id.
//! Callers depend on the [`EntryStore`] trait; the server injects a
//! [`JsonFileStore`] and tests use a [`MemoryStore`].

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use std::collections::BTreeMap;

use crate::entry::{Entry, EntryFields, EntryId, NewEntry};
use crate::error::PlanCalResult;

/// Document collection operations used by the form controller and the page.
pub trait EntryStore: Send + Sync {
    /// Append a document and return its new id.
    fn insert(&self, entry: &NewEntry) -> PlanCalResult<EntryId>;

    /// All documents owned by `owner_id`, in ascending id order.
    fn find_by_owner(&self, owner_id: &str) -> PlanCalResult<Vec<Entry>>;

    fn get(&self, id: EntryId) -> PlanCalResult<Option<Entry>>;

    /// Replace the editable fields of a document. `id` and `owner_id` are kept.
    /// Returns false if no document has this id.
    fn update_by_id(&self, id: EntryId, fields: &EntryFields) -> PlanCalResult<bool>;

    /// Remove a document. Returns false if no document has this id.
    fn delete_by_id(&self, id: EntryId) -> PlanCalResult<bool>;
}

/// In-memory form of one document table, shared by both backends.
pub(crate) type Table = BTreeMap<EntryId, NewEntry>;

/// Next id: one past the highest id in use, starting at 1.
pub(crate) fn next_id(table: &Table) -> EntryId {
    table.keys().next_back().map_or(1, |last| last + 1)
}

pub(crate) fn owned_by(table: &Table, owner_id: &str) -> Vec<Entry> {
    table
        .iter()
        .filter(|(_, doc)| doc.owner_id == owner_id)
        .map(|(id, doc)| Entry::from_document(*id, doc.clone()))
        .collect()
}

pub(crate) fn replace_fields(table: &mut Table, id: EntryId, fields: &EntryFields) -> bool {
    match table.get_mut(&id) {
        Some(doc) => {
            doc.fields = fields.clone();
            true
        }
        None => false,
    }
}
