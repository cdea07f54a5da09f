//! The planned content entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dates;

/// Store-assigned document id.
pub type EntryId = u64;

/// The editable part of an entry.
///
/// `end_date` is always derived from `start_date` and `num_days`; build
/// values with [`EntryFields::new`] rather than by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFields {
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_days: u32,
}

impl EntryFields {
    pub fn new(
        title: impl Into<String>,
        content_type: impl Into<String>,
        start_date: NaiveDate,
        num_days: u32,
    ) -> Self {
        let num_days = dates::clamp_days(i64::from(num_days));
        EntryFields {
            title: title.into(),
            content_type: content_type.into(),
            start_date,
            end_date: dates::end_date_for(start_date, num_days),
            num_days,
        }
    }

    /// "type: title", the label used on cards and calendar events.
    pub fn label(&self) -> String {
        format!("{}: {}", self.content_type, self.title)
    }
}

/// A document about to be inserted (no id yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    /// Earlier files name this field `user_id`.
    #[serde(alias = "user_id")]
    pub owner_id: String,
    #[serde(flatten)]
    pub fields: EntryFields,
}

/// A stored entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub owner_id: String,
    #[serde(flatten)]
    pub fields: EntryFields,
}

impl Entry {
    pub fn from_document(id: EntryId, doc: NewEntry) -> Self {
        Entry {
            id,
            owner_id: doc.owner_id,
            fields: doc.fields,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.fields.label())
    }
}
