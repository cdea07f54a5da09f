//! Form submit and card actions. Every action ends in a redirect to `/`
//! so the page is rebuilt from a fresh load of the store.

use axum::{
    Form, Router,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::post,
};
use chrono::Local;
use plancal_core::cards::delete_entry;
use plancal_core::form::{self, FormView};
use plancal_core::{EditState, EntryId, FormInput, PlanCalResult, SubmitOutcome, dates};
use serde::Deserialize;

use crate::render::Notice;
use crate::routes::{AppError, page};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/entries", post(submit_entry))
        .route("/entries/cancel-edit", post(cancel_edit))
        .route("/entries/{id}/edit", post(edit_entry))
        .route("/entries/{id}/delete", post(delete))
}

/// Urlencoded body of the add/edit form
#[derive(Deserialize, Default)]
pub struct EntryForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub num_days: String,
}

impl EntryForm {
    fn parse(&self) -> PlanCalResult<FormInput> {
        let start_date = dates::parse_date(&self.start_date)?;
        let num_days = dates::parse_days(&self.num_days)?;
        dates::check_range(start_date, num_days)?;

        Ok(FormInput {
            title: self.title.clone(),
            content_type: self.content_type.clone(),
            start_date,
            num_days,
        })
    }
}

fn redirect_home(notice: Option<Notice>) -> Redirect {
    match notice {
        Some(notice) => Redirect::to(&format!("/?notice={}", notice.as_query())),
        None => Redirect::to("/"),
    }
}

/// POST /entries - Save the form (insert in add mode, update in edit mode)
async fn submit_entry(
    State(state): State<AppState>,
    Form(body): Form<EntryForm>,
) -> Result<Response, AppError> {
    let input = body.parse()?;

    let outcome = state.update_edit_state(|edit| {
        form::submit(state.store(), state.owner_id(), edit, &input)
    })?;

    let response = match outcome {
        SubmitOutcome::Inserted(_) => redirect_home(Some(Notice::Added)).into_response(),
        SubmitOutcome::Updated(_) => redirect_home(Some(Notice::Updated)).into_response(),
        SubmitOutcome::Missing(_) => redirect_home(None).into_response(),
        SubmitOutcome::Rejected => {
            // Redisplay the form with what was typed; nothing was saved
            let today = Local::now().date_naive();
            let view = FormView::for_state(&state.edit_state(), today).with_input(&input);
            Html(page::build_page(&state, view, today, None)?).into_response()
        }
    };

    Ok(response)
}

/// POST /entries/{id}/edit - Stage an entry in the form
async fn edit_entry(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
) -> Result<Redirect, AppError> {
    state.update_edit_state(|edit| {
        Ok((form::edit(state.store(), state.owner_id(), edit, id)?, ()))
    })?;

    Ok(redirect_home(None))
}

/// POST /entries/{id}/delete - Remove an entry immediately
async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
) -> Result<Redirect, AppError> {
    let deleted = delete_entry(state.store(), state.owner_id(), id)?;
    state.update_edit_state(|edit| Ok((edit.forget(id), ())))?;

    Ok(redirect_home(deleted.then_some(Notice::Deleted)))
}

/// POST /entries/cancel-edit - Abandon a staged edit and return to add mode
async fn cancel_edit(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.update_edit_state(|_| Ok((EditState::None, ())))?;
    Ok(redirect_home(None))
}
