use axum::{Router, routing::get};

use crate::modules::admin::controller::stats;
use crate::state::AppState;

pub fn init_admin_router() -> Router<AppState> {
    Router::new().route("/stats", get(stats))
}
