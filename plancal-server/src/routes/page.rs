//! The planning page

use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use chrono::{Local, NaiveDate};
use plancal_core::PlanCalResult;
use plancal_core::calendar::{MonthGrid, to_calendar_events};
use plancal_core::cards::{cards, load_entries};
use plancal_core::dates;
use plancal_core::form::FormView;
use serde::Deserialize;

use crate::render::{self, Notice, PageView};
use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(show_page))
}

#[derive(Deserialize, Default)]
pub struct PageQuery {
    /// Month shown in the calendar grid (YYYY-MM)
    pub month: Option<String>,
    pub notice: Option<String>,
}

/// GET / - Form, cards, month grid and download link
async fn show_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let today = Local::now().date_naive();
    let month = match query.month.as_deref() {
        Some(month) => dates::parse_month(month)?,
        None => today,
    };
    let form = FormView::for_state(&state.edit_state(), today);
    let notice = query.notice.as_deref().and_then(Notice::parse);

    Ok(Html(build_page(&state, form, month, notice)?))
}

/// Reload the session's entries and render the whole page.
pub(crate) fn build_page(
    state: &AppState,
    form: FormView,
    month: NaiveDate,
    notice: Option<Notice>,
) -> PlanCalResult<String> {
    let entries = load_entries(state.store(), state.owner_id())?;
    let events = to_calendar_events(&entries);

    Ok(render::page(&PageView {
        form,
        cards: cards(&entries),
        grid: MonthGrid::build(month, &events),
        notice,
    }))
}
