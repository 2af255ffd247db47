use serde::Deserialize;

use crate::clients::DEFAULT_GIF_LIMIT;
use crate::error::ApiError;

/// Query parameters for `GET /movies`
#[derive(Debug, Clone, Deserialize)]
pub struct MovieSearchQuery {
    pub query: Option<String>,
}

impl MovieSearchQuery {
    /// The movie title to search for
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingParameter` when absent or blank.
    pub fn query(&self) -> Result<&str, ApiError> {
        require_present(self.query.as_deref(), "query")
    }
}

/// Query parameters for `GET /gifs`
#[derive(Debug, Clone, Deserialize)]
pub struct GifSearchQuery {
    pub query: Option<String>,
    pub movie_id: Option<String>,
    pub limit: Option<usize>,
}

impl GifSearchQuery {
    pub fn query(&self) -> Result<&str, ApiError> {
        require_present(self.query.as_deref(), "query")
    }

    pub fn movie_id(&self) -> Result<&str, ApiError> {
        require_present(self.movie_id.as_deref(), "movie_id")
    }

    /// Requested result count, defaulting when absent
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_GIF_LIMIT)
    }
}

/// Query parameters for `GET /select_second_actor`
#[derive(Debug, Clone, Deserialize)]
pub struct SecondActorQuery {
    pub movie_id: Option<String>,
}

impl SecondActorQuery {
    pub fn movie_id(&self) -> Result<&str, ApiError> {
        require_present(self.movie_id.as_deref(), "movie_id")
    }
}

/// Form data for `POST /gifs/submit`
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitGifForm {
    pub gif_url: Option<String>,
    pub actor_name: Option<String>,
    pub movie_id: Option<String>,
}

impl SubmitGifForm {
    /// Check all three fields are present and non-blank
    ///
    /// # Returns
    ///
    /// `(gif_url, actor_name, movie_id)` with surrounding whitespace kept
    /// as submitted.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingParameter` naming the first absent field.
    pub fn validated(self) -> Result<(String, String, String), ApiError> {
        let gif_url = require_present(self.gif_url.as_deref(), "gif_url")?.to_string();
        let actor_name = require_present(self.actor_name.as_deref(), "actor_name")?.to_string();
        let movie_id = require_present(self.movie_id.as_deref(), "movie_id")?.to_string();

        Ok((gif_url, actor_name, movie_id))
    }
}

/// Form data for `POST /submit_guess/:game_id`
#[derive(Debug, Clone, Deserialize)]
pub struct GuessForm {
    pub guess: Option<String>,
}

impl GuessForm {
    /// The guessed title
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingParameter` when absent or blank.
    pub fn guess(&self) -> Result<&str, ApiError> {
        require_present(self.guess.as_deref(), "guess")
    }
}

fn require_present<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::MissingParameter(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_search_query_present() {
        let query = MovieSearchQuery {
            query: Some("Inception".to_string()),
        };
        assert_eq!(query.query().unwrap(), "Inception");
    }

    #[test]
    fn test_movie_search_query_missing_or_blank() {
        assert!(MovieSearchQuery { query: None }.query().is_err());
        assert!(MovieSearchQuery {
            query: Some("   ".to_string())
        }
        .query()
        .is_err());
    }

    #[test]
    fn test_gif_search_query_limit_default() {
        let query = GifSearchQuery {
            query: Some("Tom Hanks".to_string()),
            movie_id: Some("27205".to_string()),
            limit: None,
        };

        assert_eq!(query.limit(), DEFAULT_GIF_LIMIT);

        let query = GifSearchQuery {
            limit: Some(3),
            ..query
        };
        assert_eq!(query.limit(), 3);
    }

    #[test]
    fn test_submit_gif_form_validated() {
        let form = SubmitGifForm {
            gif_url: Some("http://img/1".to_string()),
            actor_name: Some("Tom Hanks".to_string()),
            movie_id: Some("27205".to_string()),
        };

        let (gif_url, actor_name, movie_id) = form.validated().unwrap();
        assert_eq!(gif_url, "http://img/1");
        assert_eq!(actor_name, "Tom Hanks");
        assert_eq!(movie_id, "27205");
    }

    #[test]
    fn test_submit_gif_form_missing_field() {
        let form = SubmitGifForm {
            gif_url: Some("http://img/1".to_string()),
            actor_name: None,
            movie_id: Some("27205".to_string()),
        };

        assert!(form.validated().is_err());
    }

    #[test]
    fn test_guess_form() {
        let form = GuessForm {
            guess: Some("Inception".to_string()),
        };
        assert_eq!(form.guess().unwrap(), "Inception");

        assert!(GuessForm { guess: None }.guess().is_err());
        assert!(GuessForm {
            guess: Some("".to_string())
        }
        .guess()
        .is_err());
    }
}
