//! Core types for plancal, a local content-planning calendar.
//!
//! - `entry` / `dates`: the planned entry and its derived date range
//! - `store`: document persistence (`EntryStore` trait, JSON file and memory backends)
//! - `form`: the add/edit form controller and its `EditState`
//! - `cards`, `calendar`, `export`: projections used to render the page

pub mod calendar;
pub mod cards;
pub mod config;
pub mod dates;
pub mod entry;
pub mod error;
pub mod export;
pub mod form;
pub mod identity;
pub mod store;

pub use entry::{Entry, EntryFields, EntryId, NewEntry};
pub use error::{PlanCalError, PlanCalResult};
pub use form::{EditState, FormInput, StagedEntry, SubmitOutcome};
pub use store::EntryStore;
