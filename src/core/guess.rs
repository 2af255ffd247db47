use serde::{Deserialize, Serialize};

use super::game::GameRecord;

/// Result of comparing a guess against a game's movie title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    /// Whether the guess matched the title
    pub correct: bool,
    /// The stored title, disclosed regardless of outcome
    pub correct_answer: String,
}

/// Compare a guess against the record's stored title
///
/// Matching is case-insensitive and ignores surrounding whitespace. The
/// stored title is the only source of truth and is always returned.
pub fn evaluate_guess(record: &GameRecord, guess: &str) -> GuessOutcome {
    let correct = guess.trim().to_lowercase() == record.movie_title.trim().to_lowercase();

    GuessOutcome {
        correct,
        correct_answer: record.movie_title.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::Selection;

    fn inception_game() -> GameRecord {
        GameRecord::new(
            "Inception".to_string(),
            None,
            vec![
                Selection::new("Tom Hanks".to_string(), "http://img/1".to_string()),
                Selection::new("Leonardo DiCaprio".to_string(), "http://img/2".to_string()),
            ],
        )
    }

    #[test]
    fn test_guess_is_case_insensitive() {
        let record = inception_game();

        for guess in ["Inception", "inception", "INCEPTION"] {
            let outcome = evaluate_guess(&record, guess);
            assert!(outcome.correct, "expected {guess:?} to match");
        }
    }

    #[test]
    fn test_guess_ignores_surrounding_whitespace() {
        let record = inception_game();

        let outcome = evaluate_guess(&record, "  inception  ");
        assert!(outcome.correct);
    }

    #[test]
    fn test_wrong_guess_still_discloses_answer() {
        let record = inception_game();

        let outcome = evaluate_guess(&record, "Interstellar");

        assert!(!outcome.correct);
        assert_eq!(outcome.correct_answer, "Inception");
    }
}
