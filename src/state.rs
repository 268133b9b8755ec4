use civitrack_config::{AppConfig, CorsConfig, JwtConfig, ServerConfig};

use crate::modules::issues::model::IssueStore;

/// Shared application state: configuration loaded once at startup (read-only
/// afterwards, no locking needed) plus the in-memory issue store that stands
/// in for the real data layer.
#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub server_config: ServerConfig,
    pub issues: IssueStore,
}

pub fn init_app_state() -> AppState {
    let config = AppConfig::from_env();
    AppState {
        jwt_config: config.jwt,
        cors_config: config.cors,
        server_config: config.server,
        issues: IssueStore::default(),
    }
}
