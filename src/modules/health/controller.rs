use axum::Json;
use serde_json::{Value, json};

/// Public liveness probe. No auth, no principal.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "success": true,
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
