use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::modules::issues::controller::{
    create_issue, delete_issue, get_issue, list_issues, update_issue_status,
};
use crate::state::AppState;

pub fn init_issues_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_issues))
        .route("/", post(create_issue))
        .route("/{id}", get(get_issue))
        .route("/{id}", patch(update_issue_status))
        .route("/{id}", delete(delete_issue))
}
