//! CSV download

use axum::{
    Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
};
use plancal_core::cards::load_entries;
use plancal_core::export::{CSV_FILENAME, entries_to_csv};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/export.csv", get(download_csv))
}

/// GET /export.csv - All of the session's entries, sorted by start date
async fn download_csv(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entries = load_entries(state.store(), state.owner_id())?;
    let csv = entries_to_csv(&entries);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CSV_FILENAME}\""),
            ),
        ],
        csv,
    ))
}
