//! Capability-gated CRUD over the issue store.
//!
//! The route layer has already verified the credential; each handler only
//! checks the capability its operation needs against the permission table.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

use civitrack_core::{AppError, Capability};

use crate::middleware::auth::{AuthUser, require_capability};
use crate::modules::issues::model::{
    CreateIssueRequest, Issue, IssueStatus, UpdateIssueStatusRequest,
};
use crate::state::AppState;

pub async fn list_issues(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
) -> Result<Json<Vec<Issue>>, AppError> {
    require_capability(&principal, Capability::Read)?;

    let store = state
        .issues
        .read()
        .map_err(|_| AppError::internal("issue store lock poisoned"))?;

    let mut issues: Vec<Issue> = store.values().cloned().collect();
    issues.sort_by_key(|i| i.created_at);
    Ok(Json(issues))
}

pub async fn get_issue(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Issue>, AppError> {
    require_capability(&principal, Capability::Read)?;

    let store = state
        .issues
        .read()
        .map_err(|_| AppError::internal("issue store lock poisoned"))?;

    store
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found("Issue not found"))
}

pub async fn create_issue(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(body): Json<CreateIssueRequest>,
) -> Result<(StatusCode, Json<Issue>), AppError> {
    require_capability(&principal, Capability::Create)?;

    let issue = Issue {
        id: Uuid::new_v4(),
        title: body.title,
        description: body.description,
        status: IssueStatus::Open,
        reported_by: principal.id.clone(),
        created_at: Utc::now(),
    };

    let mut store = state
        .issues
        .write()
        .map_err(|_| AppError::internal("issue store lock poisoned"))?;
    store.insert(issue.id, issue.clone());

    Ok((StatusCode::CREATED, Json(issue)))
}

pub async fn update_issue_status(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateIssueStatusRequest>,
) -> Result<Json<Issue>, AppError> {
    require_capability(&principal, Capability::Update)?;

    let mut store = state
        .issues
        .write()
        .map_err(|_| AppError::internal("issue store lock poisoned"))?;

    let issue = store
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found("Issue not found"))?;
    issue.status = body.status;

    Ok(Json(issue.clone()))
}

pub async fn delete_issue(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    require_capability(&principal, Capability::Delete)?;

    let mut store = state
        .issues
        .write()
        .map_err(|_| AppError::internal("issue store lock poisoned"))?;

    store
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| AppError::not_found("Issue not found"))
}
