use serde::{Deserialize, Serialize};

use crate::core::GuessOutcome;

/// Result of a guess, returned by `POST /submit_guess/:game_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessResponse {
    /// Whether the guess matched the movie title
    pub correct: bool,
    /// The actual title, disclosed regardless of outcome
    pub correct_answer: String,
}

impl From<GuessOutcome> for GuessResponse {
    fn from(outcome: GuessOutcome) -> Self {
        Self {
            correct: outcome.correct,
            correct_answer: outcome.correct_answer,
        }
    }
}
