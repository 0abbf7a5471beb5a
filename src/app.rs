use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/entries", get(handlers::list))
        .route("/entries/add", get(handlers::add_form).post(handlers::add_submit))
        .route("/entries/edit", get(handlers::missing_id).post(handlers::edit_submit))
        .route("/entries/edit/:id", get(handlers::edit_form).post(handlers::edit_submit_with_id))
        .route("/entries/delete", get(handlers::missing_id).post(handlers::missing_id))
        .route("/entries/delete/:id", get(handlers::delete_form).post(handlers::delete_submit))
        .route("/api/entries", get(handlers::api_entries))
        .route("/api/activities", get(handlers::api_activities))
        .with_state(state)
}
