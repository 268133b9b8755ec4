use axum::{Json, extract::State};
use serde::Serialize;

use civitrack_core::AppError;

use crate::modules::issues::model::IssueStatus;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct IssueStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

/// Admin-only summary. The `require_admin` route layer has already done
/// the gating; by the time this runs the caller is a verified admin.
pub async fn stats(State(state): State<AppState>) -> Result<Json<IssueStats>, AppError> {
    let store = state
        .issues
        .read()
        .map_err(|_| AppError::internal("issue store lock poisoned"))?;

    let count = |status: IssueStatus| store.values().filter(|i| i.status == status).count();

    Ok(Json(IssueStats {
        total: store.len(),
        open: count(IssueStatus::Open),
        in_progress: count(IssueStatus::InProgress),
        resolved: count(IssueStatus::Resolved),
    }))
}
