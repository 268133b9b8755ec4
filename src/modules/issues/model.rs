use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Open,
    InProgress,
    Resolved,
}

/// A reported municipal issue (pothole, broken street light, ...).
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    /// Subject id of the reporting principal.
    pub reported_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateIssueRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateIssueStatusRequest {
    pub status: IssueStatus,
}

/// In-process store standing in for the excluded data layer.
pub type IssueStore = Arc<RwLock<HashMap<Uuid, Issue>>>;
