use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};

use crate::{
    clients::{tmdb::IMAGE_BASE, ActorSummary, MovieSummary, DEFAULT_CAST_LIMIT},
    error::ApiError,
    models::MovieSearchQuery,
    state::AppState,
};

/// Template for the movie search form
#[derive(Template)]
#[template(path = "movie_search.html")]
struct MovieSearchTemplate {}

/// One movie in the selection list
struct MovieRow {
    pub id: u64,
    pub title: String,
    pub release_date: String,
    /// Absolute poster URL, empty when the movie has no poster
    pub poster_url: String,
}

impl From<MovieSummary> for MovieRow {
    fn from(movie: MovieSummary) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            release_date: movie.release_date,
            poster_url: movie
                .poster_path
                .map(|path| format!("{IMAGE_BASE}{path}"))
                .unwrap_or_default(),
        }
    }
}

/// Template for the ranked movie list
#[derive(Template)]
#[template(path = "select_movie.html")]
struct SelectMovieTemplate {
    movies: Vec<MovieRow>,
}

/// One cast member in the actor list
struct ActorRow {
    pub name: String,
    pub character: String,
    /// Absolute profile URL, empty when the actor has no profile image
    pub profile_url: String,
}

impl From<ActorSummary> for ActorRow {
    fn from(actor: ActorSummary) -> Self {
        Self {
            name: actor.name,
            character: actor.character,
            profile_url: actor.profile_path.unwrap_or_default(),
        }
    }
}

/// Template for the ranked cast list
#[derive(Template)]
#[template(path = "select_actors.html")]
struct SelectActorsTemplate {
    actors: Vec<ActorRow>,
    movie_id: String,
}

/// Show the movie search form
pub async fn search_form() -> impl IntoResponse {
    MovieSearchTemplate {}
}

/// Search movies by title, ranked by popularity
///
/// # Returns
///
/// Rendered movie list, or 400 when the query is missing
pub async fn search_movies(
    State(state): State<AppState>,
    Query(query): Query<MovieSearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let title = query.query()?;

    let movies = state.tmdb.search_movies_by_title(title).await?;

    Ok(SelectMovieTemplate {
        movies: movies.into_iter().map(MovieRow::from).collect(),
    })
}

/// Show a movie's cast, ranked by popularity
pub async fn movie_actors(
    Path(movie_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let actors = state
        .tmdb
        .get_cast_by_movie_id(&movie_id, DEFAULT_CAST_LIMIT)
        .await?;

    Ok(SelectActorsTemplate {
        actors: actors.into_iter().map(ActorRow::from).collect(),
        movie_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_row_builds_poster_url() {
        let row = MovieRow::from(MovieSummary {
            id: 27205,
            title: "Inception".to_string(),
            popularity: 91.5,
            poster_path: Some("/poster.jpg".to_string()),
            release_date: "2010-07-15".to_string(),
        });

        assert_eq!(row.poster_url, format!("{IMAGE_BASE}/poster.jpg"));
    }

    #[test]
    fn test_movie_row_without_poster() {
        let row = MovieRow::from(MovieSummary {
            id: 27205,
            title: "Inception".to_string(),
            popularity: 91.5,
            poster_path: None,
            release_date: "2010-07-15".to_string(),
        });

        assert_eq!(row.poster_url, "");
    }
}
