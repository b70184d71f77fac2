//! Server Configuration
//!
//! Read from the environment (after `.env` has been loaded).

use std::path::PathBuf;

const DEFAULT_PORT: &str = "5000";
pub const DEV_JWT_SECRET: &str = "dev_smartvestor_secret_change_me";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_addr: String,

    /// HS256 signing secret for session tokens
    pub jwt_secret: String,

    /// Directory holding `smartvestor.json`
    pub data_dir: PathBuf,

    /// Built web client, served when present
    pub client_build_dir: PathBuf,
}

impl ServerConfig {
    /// Create from environment variables
    ///
    /// - `BIND_ADDR` (else `0.0.0.0:$PORT`, `PORT` defaulting to 5000)
    /// - `JWT_SECRET`
    /// - `DATA_DIR` (default `data`)
    /// - `CLIENT_BUILD_DIR` (default `client/build`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| {
            let port = get("PORT").unwrap_or_else(|| DEFAULT_PORT.into());
            format!("0.0.0.0:{port}")
        });

        let jwt_secret = get("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("⚠ JWT_SECRET not set - using development secret");
            DEV_JWT_SECRET.into()
        });

        Self {
            bind_addr,
            jwt_secret,
            data_dir: get("DATA_DIR").map_or_else(|| PathBuf::from("data"), PathBuf::from),
            client_build_dir: get("CLIENT_BUILD_DIR")
                .map_or_else(|| PathBuf::from("client").join("build"), PathBuf::from),
        }
    }
}
