use rand::Rng;
use thiserror::Error;

/// Default HTTP port
const DEFAULT_PORT: u16 = 8000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Process configuration, loaded from the environment (and `.env` if present)
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the movie metadata API
    pub tmdb_token: String,
    /// API key for the GIF search API
    pub giphy_api_key: String,
    /// Key signing the session cookie
    pub session_secret: String,
    /// Port to listen on
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// `TMDB_TOKEN` and `GIPHY_API_KEY` are required; the caller is expected
    /// to exit with status 1 when they are absent. `SESSION_SECRET_KEY` is
    /// optional: without it a random per-process key is generated, so
    /// sessions do not survive a restart.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVar` naming the first absent required
    /// variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let tmdb_token = require_var("TMDB_TOKEN")?;
        let giphy_api_key = require_var("GIPHY_API_KEY")?;

        let session_secret = match std::env::var("SESSION_SECRET_KEY") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ => {
                tracing::warn!(
                    "SESSION_SECRET_KEY not set; using a random per-process key, \
                     in-progress games will not survive a restart"
                );
                generate_secret_key()
            }
        };

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            tmdb_token,
            giphy_api_key,
            session_secret,
            port,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

/// Generate a random signing key (64 alphanumeric characters = 32+ bytes)
fn generate_secret_key() -> String {
    rand::thread_rng()
        .sample_iter(rand::distributions::Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
