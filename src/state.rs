use std::sync::Arc;
use tokio::sync::RwLock;

use crate::clients::{GiphyClient, TmdbClient};
use crate::config::Config;
use crate::core::GameRegistry;

/// Shared application state, injected into every request handler
#[derive(Clone)]
pub struct AppState {
    /// Store of finished games, guarded for concurrent handlers
    pub registry: Arc<RwLock<GameRegistry>>,
    /// Movie metadata client
    pub tmdb: Arc<TmdbClient>,
    /// GIF search client
    pub giphy: Arc<GiphyClient>,
    /// Key signing the session cookie
    pub secret_key: String,
}

impl AppState {
    /// Build the state from process configuration
    pub fn new(config: &Config) -> Self {
        Self::with_clients(
            TmdbClient::new(config.tmdb_token.clone()),
            GiphyClient::new(config.giphy_api_key.clone()),
            config.session_secret.clone(),
        )
    }

    /// Build the state from pre-configured clients (tests point these at
    /// local doubles)
    pub fn with_clients(tmdb: TmdbClient, giphy: GiphyClient, secret_key: String) -> Self {
        Self {
            registry: Arc::new(RwLock::new(GameRegistry::new())),
            tmdb: Arc::new(tmdb),
            giphy: Arc::new(giphy),
            secret_key,
        }
    }
}
