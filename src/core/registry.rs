use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use thiserror::Error;

use super::game::GameRecord;

/// Length of generated game ids (62^12 possibilities, ~71 bits of entropy)
const GAME_ID_LEN: usize = 12;

/// Errors from registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The id is already taken. Should not occur with random ids, but the
    /// insert path checks rather than silently overwriting a finished game.
    #[error("game id {0} already exists")]
    DuplicateId(String),
}

/// Process-wide store of finished games
///
/// Keyed by a random URL-safe id. Records are immutable once inserted and
/// live until process shutdown; there is no update or delete. The registry
/// is wrapped in `Arc<RwLock<_>>` by `AppState` and shared across request
/// handlers.
#[derive(Debug, Default)]
pub struct GameRegistry {
    /// Map of game_id to GameRecord
    games: HashMap<String, GameRecord>,
}

impl GameRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            games: HashMap::new(),
        }
    }

    /// Generate a fresh game id not present in the registry
    ///
    /// Collisions are vanishingly unlikely, but the id is re-rolled until it
    /// is unique so the subsequent insert cannot fail on a fresh id.
    pub fn create_id(&self) -> String {
        let mut game_id = Self::generate_game_id();

        while self.games.contains_key(&game_id) {
            game_id = Self::generate_game_id();
        }

        game_id
    }

    /// Generate a cryptographically secure URL-safe random game id
    fn generate_game_id() -> String {
        use rand::rngs::OsRng;

        OsRng
            .sample_iter(&Alphanumeric)
            .take(GAME_ID_LEN)
            .map(char::from)
            .collect()
    }

    /// Insert a finished game under the given id
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateId` if the id is already present;
    /// the existing record is kept.
    pub fn insert(&mut self, game_id: String, record: GameRecord) -> Result<(), RegistryError> {
        if self.games.contains_key(&game_id) {
            return Err(RegistryError::DuplicateId(game_id));
        }

        self.games.insert(game_id, record);
        Ok(())
    }

    /// Look up a game by id
    pub fn get(&self, game_id: &str) -> Option<&GameRecord> {
        self.games.get(game_id)
    }

    /// Number of stored games
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
