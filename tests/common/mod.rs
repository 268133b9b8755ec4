#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;

use civitrack::modules::issues::model::IssueStore;
use civitrack::router::init_router;
use civitrack::state::AppState;
use civitrack_auth::{Claims, issue_access_token};
use civitrack_config::{CorsConfig, JwtConfig, ServerConfig};
use civitrack_core::Role;

pub const TEST_SECRET: &str = "integration-test-secret-32-chars-long";
pub const ALLOWED_ORIGIN: &str = "https://app.city.gov";
pub const SECOND_ORIGIN: &str = "https://staff.city.gov";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_cors_config() -> CorsConfig {
    CorsConfig {
        allowed_origins: vec![ALLOWED_ORIGIN.to_string(), SECOND_ORIGIN.to_string()],
        default_origin: ALLOWED_ORIGIN.to_string(),
    }
}

pub fn test_state(production: bool) -> AppState {
    AppState {
        jwt_config: test_jwt_config(),
        cors_config: test_cors_config(),
        server_config: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            production,
        },
        issues: IssueStore::default(),
    }
}

pub fn test_app() -> Router {
    init_router(test_state(false))
}

pub fn production_app() -> Router {
    init_router(test_state(true))
}

pub fn app_with_cors(cors_config: CorsConfig) -> Router {
    let mut state = test_state(false);
    state.cors_config = cors_config;
    init_router(state)
}

pub fn token_for(subject: &str, role: Option<Role>) -> String {
    issue_access_token(
        subject,
        Some(&format!("{}@test.city.gov", subject)),
        role,
        &test_jwt_config(),
    )
    .unwrap()
}

pub fn bearer(role: Role) -> String {
    format!("Bearer {}", token_for("test-user", Some(role)))
}

/// A structurally valid token whose `exp` is well in the past.
pub fn expired_bearer() -> String {
    let now = chrono_timestamp();
    let claims = Claims {
        sub: "test-user".to_string(),
        email: None,
        role: Some("admin".to_string()),
        exp: now - 7200,
        iat: now - 10800,
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();
    format!("Bearer {}", token)
}

/// A token signed with a secret the server does not know.
pub fn foreign_bearer() -> String {
    let foreign = JwtConfig {
        secret: "some-other-secret-key-32-chars-long!!".to_string(),
        access_token_expiry: 3600,
    };
    let token = issue_access_token("test-user", None, Some(Role::Admin), &foreign).unwrap();
    format!("Bearer {}", token)
}

fn chrono_timestamp() -> usize {
    chrono::Utc::now().timestamp() as usize
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn authed_get(uri: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
