use std::env;

/// Origin allow-list plus the fallback origin used when a caller's origin
/// is not allowed. The fallback is only ever honored if it is itself a
/// member of the allow-list; the negotiation logic lives in the CORS
/// middleware, this struct just carries the configured values.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub default_origin: String,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let default_origin = env::var("DEFAULT_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self {
            allowed_origins,
            default_origin,
        }
    }
}
