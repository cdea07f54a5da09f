//! Card list: the identity's entries sorted by start date.

use serde::Serialize;

use crate::dates::format_long;
use crate::entry::{Entry, EntryId};
use crate::error::PlanCalResult;
use crate::store::EntryStore;

/// Load the entries of `owner_id`, sorted ascending by start date.
/// The sort is stable, so entries starting on the same day keep store order.
pub fn load_entries(store: &dyn EntryStore, owner_id: &str) -> PlanCalResult<Vec<Entry>> {
    let mut entries = store.find_by_owner(owner_id)?;
    entries.sort_by_key(|entry| entry.fields.start_date);
    Ok(entries)
}

/// Delete entry `id` if it belongs to `owner_id`. Returns whether anything was removed.
pub fn delete_entry(store: &dyn EntryStore, owner_id: &str, id: EntryId) -> PlanCalResult<bool> {
    match store.get(id)? {
        Some(entry) if entry.owner_id == owner_id => {
            let deleted = store.delete_by_id(id)?;
            if deleted {
                tracing::info!(id, "deleted entry");
            }
            Ok(deleted)
        }
        _ => {
            tracing::warn!(id, "delete requested for unknown entry");
            Ok(false)
        }
    }
}

/// Display model for one entry card.
///
/// `id` is captured when the card is built and is what the edit/delete
/// actions act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: EntryId,
    pub content_type: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub num_days: u32,
}

impl Card {
    pub fn from_entry(entry: &Entry) -> Self {
        Card {
            id: entry.id,
            content_type: entry.fields.content_type.clone(),
            title: entry.fields.title.clone(),
            start: format_long(entry.fields.start_date),
            end: format_long(entry.fields.end_date),
            num_days: entry.fields.num_days,
        }
    }

    /// "Saturday, June 01, 2024 to Monday, June 03, 2024 (3 days)"
    pub fn date_line(&self) -> String {
        format!("{} to {} ({} days)", self.start, self.end, self.num_days)
    }

    pub fn edit_action(&self) -> String {
        format!("/entries/{}/edit", self.id)
    }

    pub fn delete_action(&self) -> String {
        format!("/entries/{}/delete", self.id)
    }
}

pub fn cards(entries: &[Entry]) -> Vec<Card> {
    entries.iter().map(Card::from_entry).collect()
}
