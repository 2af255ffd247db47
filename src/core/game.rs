use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One actor/GIF pair chosen by the game creator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Actor's display name
    pub actor_name: String,
    /// URL of the reaction GIF attached to the actor
    pub gif_url: String,
}

impl Selection {
    pub fn new(actor_name: String, gif_url: String) -> Self {
        Self {
            actor_name,
            gif_url,
        }
    }
}

/// A finalized game, immutable once inserted into the registry
///
/// The movie title is the answer players guess against. An empty title means
/// the metadata lookup failed during creation; such a game is still playable
/// but no guess will ever match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Title of the movie to be guessed
    pub movie_title: String,
    /// Poster path for display, when the metadata lookup returned one
    pub poster_path: Option<String>,
    /// The two actor/GIF clues, in the order they were chosen
    pub selections: Vec<Selection>,
    /// When the game was finalized
    pub created_at: OffsetDateTime,
}

impl GameRecord {
    /// Create a new record from a finalized selection set
    pub fn new(
        movie_title: String,
        poster_path: Option<String>,
        selections: Vec<Selection>,
    ) -> Self {
        Self {
            movie_title,
            poster_path,
            selections,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
