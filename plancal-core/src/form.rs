//! Add/edit form controller.
//!
//! The form has two modes. In add mode a valid submit inserts a new entry;
//! in edit mode it updates the staged entry and returns to add mode. Edit
//! state is an explicit value threaded through every call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::entry::{Entry, EntryFields, EntryId, NewEntry};
use crate::error::PlanCalResult;
use crate::store::EntryStore;

/// Fields of the entry being edited, captured when the edit began.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedEntry {
    pub id: EntryId,
    pub title: String,
    pub content_type: String,
    pub start_date: NaiveDate,
    pub num_days: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditState {
    #[default]
    None,
    Staged(StagedEntry),
}

impl EditState {
    /// Stage `entry` for editing.
    pub fn begin_edit(entry: &Entry) -> Self {
        EditState::Staged(StagedEntry {
            id: entry.id,
            title: entry.fields.title.clone(),
            content_type: entry.fields.content_type.clone(),
            start_date: entry.fields.start_date,
            num_days: entry.fields.num_days,
        })
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Staged(_))
    }

    pub fn staged_id(&self) -> Option<EntryId> {
        match self {
            EditState::Staged(staged) => Some(staged.id),
            EditState::None => None,
        }
    }

    /// Drop the staged edit if it refers to `id` (e.g. after a delete).
    pub fn forget(self, id: EntryId) -> Self {
        match self.staged_id() {
            Some(staged) if staged == id => EditState::None,
            _ => self,
        }
    }
}

/// Values submitted from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub title: String,
    pub content_type: String,
    pub start_date: NaiveDate,
    pub num_days: u32,
}

impl FormInput {
    /// Title and type must both contain something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content_type.trim().is_empty()
    }

    /// Entry fields with `end_date` derived from the submitted values.
    pub fn to_fields(&self) -> EntryFields {
        EntryFields::new(
            self.title.clone(),
            self.content_type.clone(),
            self.start_date,
            self.num_days,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Inserted(EntryId),
    Updated(EntryId),
    /// The staged entry no longer exists; nothing was written.
    Missing(EntryId),
    /// Title or type was empty; nothing was written.
    Rejected,
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Inserted(_) | SubmitOutcome::Updated(_))
    }
}

/// Handle a form submit. Returns the edit state to keep and what happened.
pub fn submit(
    store: &dyn EntryStore,
    owner_id: &str,
    state: EditState,
    input: &FormInput,
) -> PlanCalResult<(EditState, SubmitOutcome)> {
    if !input.is_complete() {
        tracing::debug!("form submit rejected: title or type empty");
        return Ok((state, SubmitOutcome::Rejected));
    }

    dates::check_range(input.start_date, input.num_days)?;
    let fields = input.to_fields();

    match state {
        EditState::Staged(staged) => {
            if store.update_by_id(staged.id, &fields)? {
                tracing::info!(id = staged.id, "updated entry");
                Ok((EditState::None, SubmitOutcome::Updated(staged.id)))
            } else {
                tracing::warn!(id = staged.id, "staged entry no longer exists");
                Ok((EditState::None, SubmitOutcome::Missing(staged.id)))
            }
        }
        EditState::None => {
            let id = store.insert(&NewEntry {
                owner_id: owner_id.to_string(),
                fields,
            })?;
            tracing::info!(id, "added entry");
            Ok((EditState::None, SubmitOutcome::Inserted(id)))
        }
    }
}

/// Stage the entry `id` for editing if it exists and belongs to `owner_id`.
/// Otherwise the current state is returned unchanged.
pub fn edit(
    store: &dyn EntryStore,
    owner_id: &str,
    state: EditState,
    id: EntryId,
) -> PlanCalResult<EditState> {
    match store.get(id)? {
        Some(entry) if entry.owner_id == owner_id => Ok(EditState::begin_edit(&entry)),
        _ => {
            tracing::warn!(id, "edit requested for unknown entry");
            Ok(state)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

/// What the form shows: heading and pre-filled values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub mode: FormMode,
    pub heading: &'static str,
    pub title: String,
    pub content_type: String,
    pub start_date: NaiveDate,
    pub num_days: u32,
}

impl FormView {
    pub fn for_state(state: &EditState, today: NaiveDate) -> Self {
        match state {
            EditState::Staged(staged) => FormView {
                mode: FormMode::Edit,
                heading: "Edit Content",
                title: staged.title.clone(),
                content_type: staged.content_type.clone(),
                start_date: staged.start_date,
                num_days: staged.num_days,
            },
            EditState::None => FormView {
                mode: FormMode::Add,
                heading: "Add New Content",
                title: String::new(),
                content_type: String::new(),
                start_date: today,
                num_days: 1,
            },
        }
    }

    /// Keep the mode but show the values from a rejected submit.
    pub fn with_input(self, input: &FormInput) -> Self {
        FormView {
            title: input.title.clone(),
            content_type: input.content_type.clone(),
            start_date: input.start_date,
            num_days: input.num_days,
            ..self
        }
    }
}
