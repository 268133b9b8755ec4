use axum::Json;
use serde_json::{Value, json};

use crate::middleware::auth::AuthUser;

/// Echo the identity the gate attached to the request. Downstream services
/// read the same values from the `x-auth-*` context headers.
pub async fn me(AuthUser(principal): AuthUser) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "id": principal.id,
            "email": principal.email,
            "role": principal.role,
        }
    }))
}
