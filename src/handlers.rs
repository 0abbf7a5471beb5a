use crate::controller::{EntriesController, FlowError, Submission};
use crate::errors::AppError;
use crate::flash::{self, Notice};
use crate::models::{Activity, EntriesResponse, EntryForm};
use crate::repository::EntryStore;
use crate::state::AppState;
use crate::storage::persist_store;
use crate::ui::{render_delete, render_form, render_list};
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::Local;

const LIST_PATH: &str = "/entries";

pub async fn root() -> Redirect {
    Redirect::to(LIST_PATH)
}

pub async fn list(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let controller = EntriesController::new(&state.catalog);
    let view = {
        let store = state.store.lock().await;
        controller.list(&store)
    };

    let notice = flash::pending(&headers);
    let page = Html(render_list(&view, &state.catalog, notice));
    match notice {
        Some(_) => ([(header::SET_COOKIE, flash::clear_cookie())], page).into_response(),
        None => page.into_response(),
    }
}

pub async fn add_form(State(state): State<AppState>) -> Html<String> {
    let controller = EntriesController::new(&state.catalog);
    Html(render_form(&controller.create_show(today())))
}

pub async fn add_submit(
    State(state): State<AppState>,
    Form(form): Form<EntryForm>,
) -> Result<Response, AppError> {
    let controller = EntriesController::new(&state.catalog);
    let mut store = state.store.lock().await;
    let mut draft = store.clone();
    match controller.create_submit(&mut draft, form)? {
        Submission::Redirect(notice) => {
            commit(&state, &mut store, draft).await?;
            Ok(redirect_to_list(notice))
        }
        Submission::Redisplay(view) => Ok(Html(render_form(&view)).into_response()),
    }
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let controller = EntriesController::new(&state.catalog);
    let store = state.store.lock().await;
    let view = controller.update_show(&store, Some(&id))?;
    Ok(Html(render_form(&view)))
}

pub async fn edit_submit(
    State(state): State<AppState>,
    Form(form): Form<EntryForm>,
) -> Result<Response, AppError> {
    apply_update(&state, form).await
}

pub async fn edit_submit_with_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(mut form): Form<EntryForm>,
) -> Result<Response, AppError> {
    let form_id = form.id.take().filter(|value| !value.trim().is_empty());
    if form_id.is_some_and(|value| value.trim() != id.trim()) {
        return Err(AppError::bad_request("entry id in path and form do not match"));
    }
    form.id = Some(id);
    apply_update(&state, form).await
}

async fn apply_update(state: &AppState, form: EntryForm) -> Result<Response, AppError> {
    let controller = EntriesController::new(&state.catalog);
    let mut store = state.store.lock().await;
    let mut draft = store.clone();
    match controller.update_submit(&mut draft, form)? {
        Submission::Redirect(notice) => {
            commit(state, &mut store, draft).await?;
            Ok(redirect_to_list(notice))
        }
        Submission::Redisplay(view) => Ok(Html(render_form(&view)).into_response()),
    }
}

pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let controller = EntriesController::new(&state.catalog);
    let store = state.store.lock().await;
    let entry = controller.delete_show(&store, Some(&id))?;
    Ok(Html(render_delete(&entry, &state.catalog)))
}

pub async fn delete_submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let controller = EntriesController::new(&state.catalog);
    let mut store = state.store.lock().await;
    let mut draft = store.clone();
    let notice = controller.delete_submit(&mut draft, Some(&id))?;
    commit(&state, &mut store, draft).await?;
    Ok(redirect_to_list(notice))
}

/// Flows mutate a copy of the store; it replaces the live one only once it is on disk.
async fn commit(state: &AppState, store: &mut EntryStore, draft: EntryStore) -> Result<(), AppError> {
    persist_store(&state.data_path, &draft).await?;
    *store = draft;
    Ok(())
}

/// Routes that need an id but were requested without one.
pub async fn missing_id() -> AppError {
    FlowError::BadRequest("entry id is required".to_string()).into()
}

pub async fn api_entries(State(state): State<AppState>) -> Json<EntriesResponse> {
    let controller = EntriesController::new(&state.catalog);
    let view = {
        let store = state.store.lock().await;
        controller.list(&store)
    };
    Json(EntriesResponse {
        entries: view.entries,
        summary: view.summary,
    })
}

pub async fn api_activities(State(state): State<AppState>) -> Json<Vec<Activity>> {
    Json(state.catalog.list().to_vec())
}

fn redirect_to_list(notice: Notice) -> Response {
    ([(header::SET_COOKIE, notice.set_cookie())], Redirect::to(LIST_PATH)).into_response()
}

fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}
