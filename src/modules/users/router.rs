use axum::{Router, routing::get};

use crate::modules::users::controller::me;
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/me", get(me))
}
