use axum::{Router, middleware};

use crate::logging::logging_middleware;
use crate::middleware::auth::{require_admin, require_auth};
use crate::middleware::cors::cors_middleware;
use crate::middleware::headers::{self, https_redirect};
use crate::modules::admin::router::init_admin_router;
use crate::modules::health::router::init_health_router;
use crate::modules::issues::router::init_issues_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

/// Build the application router.
///
/// Layer order matters: layers added later wrap everything added before,
/// so at run time a request passes through the security-header applier and
/// HTTPS redirect first, then CORS negotiation (where preflights stop),
/// then request logging, and only then the per-nest authorization gates.
/// Rejections from the gates travel back out through CORS and the header
/// applier, which keeps error responses browser-readable.
pub fn init_router(state: AppState) -> Router {
    let production = state.server_config.production;

    let router = Router::new()
        .merge(init_health_router())
        .nest(
            "/api",
            Router::new()
                .nest(
                    "/issues",
                    init_issues_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
                )
                .nest(
                    "/users",
                    init_users_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
                )
                .nest(
                    "/admin",
                    init_admin_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                ),
        )
        .with_state(state.clone())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            cors_middleware,
        ))
        .layer(middleware::from_fn_with_state(state, https_redirect));

    headers::apply(router, production)
}
