//! # CiviTrack Config
//!
//! Configuration types for the CiviTrack API.
//!
//! Every struct here is loaded once from environment variables before the
//! first request and is immutable afterwards. Nothing in the request path
//! reads ambient process state; components receive these structs by value
//! so tests can substitute arbitrary fixtures.
//!
//! - [`jwt`]: signing secret and token lifetime
//! - [`cors`]: origin allow-list and fallback origin
//! - [`server`]: bind address and production designation
//!
//! # Example
//!
//! ```ignore
//! use civitrack_config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! println!("binding on {}:{}", config.server.host, config.server.port);
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// All configuration the application consumes, loaded in one place.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            jwt: JwtConfig::from_env(),
            cors: CorsConfig::from_env(),
            server: ServerConfig::from_env(),
        }
    }
}
