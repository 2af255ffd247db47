use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::game::{GameRecord, Selection};

/// Maximum number of actor/GIF selections per game
pub const MAX_SELECTIONS: usize = 2;

/// Errors from the selection workflow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A third selection was attempted while two are already recorded
    #[error("game already has {MAX_SELECTIONS} selections")]
    SessionFull,

    /// Finalization was attempted before both selections were recorded
    #[error("game requires exactly {MAX_SELECTIONS} selections before it can be created")]
    Incomplete,

    /// Finalization was attempted before any movie was chosen
    #[error("no movie has been chosen for this game")]
    MissingMovieContext,
}

/// Per-browser staging area for an in-progress game
///
/// Accumulates up to two selections plus the movie they belong to, then
/// finalizes into an immutable [`GameRecord`]. The whole struct is serialized
/// into a signed cookie between requests, so every mutation is a
/// read-modify-write round trip (last writer wins on a double submit).
///
/// States: empty -> one selection -> two selections -> empty (after
/// [`finalize`](Self::finalize) or [`reset`](Self::reset)).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionSession {
    /// Ordered actor/GIF pairs, never more than `MAX_SELECTIONS`
    pub selections: Vec<Selection>,
    /// Id of the movie the selections belong to, set by the first selection
    pub movie_id: Option<String>,
    /// Movie title, backfilled from the metadata provider
    pub movie_title: Option<String>,
    /// Movie poster path, backfilled alongside the title
    pub poster_path: Option<String>,
}

impl SelectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one actor/GIF selection
    ///
    /// The first selection pins the session to `movie_id`; later selections
    /// keep the original movie.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SessionFull` if two selections are already
    /// recorded. The existing selections are left unchanged.
    pub fn record_selection(
        &mut self,
        actor_name: String,
        gif_url: String,
        movie_id: &str,
    ) -> Result<(), SessionError> {
        if self.selections.len() >= MAX_SELECTIONS {
            return Err(SessionError::SessionFull);
        }

        if self.movie_id.is_none() {
            self.movie_id = Some(movie_id.to_string());
        }

        self.selections.push(Selection::new(actor_name, gif_url));
        Ok(())
    }

    /// Movie id still needing a title/poster lookup, if any
    ///
    /// Returns `None` once the title is cached so the lookup runs at most
    /// once per session.
    pub fn needs_movie_lookup(&self) -> Option<&str> {
        if self.movie_title.is_some() {
            return None;
        }
        self.movie_id.as_deref()
    }

    /// Cache the movie title and poster fetched from the metadata provider
    ///
    /// Idempotent: once a title is cached, later calls are ignored.
    pub fn set_movie_details(&mut self, title: String, poster_path: Option<String>) {
        if self.movie_title.is_some() {
            return;
        }
        self.movie_title = Some(title);
        self.poster_path = poster_path;
    }

    /// Whether both selections have been recorded
    pub fn is_complete(&self) -> bool {
        self.selections.len() == MAX_SELECTIONS
    }

    /// Turn the completed session into a [`GameRecord`] and reset to empty
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Incomplete` unless exactly two selections are
    /// present, or `SessionError::MissingMovieContext` if no movie was ever
    /// chosen. The session is left untouched on error.
    ///
    /// A session whose title lookup failed finalizes with an empty title
    /// rather than aborting the game.
    pub fn finalize(&mut self) -> Result<GameRecord, SessionError> {
        if self.selections.len() != MAX_SELECTIONS {
            return Err(SessionError::Incomplete);
        }
        if self.movie_id.is_none() {
            return Err(SessionError::MissingMovieContext);
        }

        let record = GameRecord::new(
            self.movie_title.take().unwrap_or_default(),
            self.poster_path.take(),
            std::mem::take(&mut self.selections),
        );
        self.reset();
        Ok(record)
    }

    /// Clear the session back to empty
    ///
    /// Clears the selections and the cached movie context, so a fresh game
    /// can start on a different movie without inheriting a stale title.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
