//! Read-only JSON endpoints

use axum::{Json, Router, extract::State, routing::get};
use plancal_core::Entry;
use plancal_core::calendar::{CalendarEvent, CalendarOptions, to_calendar_events};
use plancal_core::cards::load_entries;
use serde::Serialize;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/entries", get(list_entries))
        .route("/api/events", get(list_events))
}

/// GET /api/entries - The session's entries, sorted by start date
async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<Entry>>, AppError> {
    Ok(Json(load_entries(state.store(), state.owner_id())?))
}

/// Calendar feed for a month-view widget
#[derive(Serialize)]
pub struct EventsResponse {
    pub events: Vec<CalendarEvent>,
    pub options: CalendarOptions,
}

/// GET /api/events - Calendar events with half-open date ranges
async fn list_events(State(state): State<AppState>) -> Result<Json<EventsResponse>, AppError> {
    let entries = load_entries(state.store(), state.owner_id())?;

    Ok(Json(EventsResponse {
        events: to_calendar_events(&entries),
        options: CalendarOptions::default(),
    }))
}
