//! Client for the TMDB movie metadata API.
//!
//! Wraps the three endpoints the game needs (movie search, credits, movie
//! details) behind typed, popularity-ranked responses. Successful lookups
//! are memoized per exact call arguments for the lifetime of the process.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::cache::ResponseCache;
use super::GatewayError;

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Fixed base for TMDB images (profiles and posters), including the width
/// segment
pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w200";

/// Default number of cast entries returned per movie
pub const DEFAULT_CAST_LIMIT: usize = 10;

/// A movie search result, projected down to the fields the game uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub popularity: f64,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
}

/// A cast entry, projected down to the fields the game uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorSummary {
    pub id: u64,
    #[serde(default)]
    pub character: String,
    pub name: String,
    #[serde(default)]
    pub popularity: f64,
    /// Absolute profile image URL after [`TmdbClient::get_cast_by_movie_id`]
    /// rewrites the provider-relative path
    pub profile_path: Option<String>,
}

/// Details for a single movie, used to backfill the session's movie context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
}

#[derive(Deserialize)]
struct SearchMoviesResponse {
    #[serde(default)]
    results: Vec<MovieSummary>,
}

#[derive(Deserialize)]
struct CreditsResponse {
    #[serde(default)]
    cast: Vec<ActorSummary>,
}

/// Client for the TMDB REST API
#[derive(Debug)]
pub struct TmdbClient {
    http: Client,
    token: String,
    base_url: String,
    search_cache: ResponseCache<String, Vec<MovieSummary>>,
    cast_cache: ResponseCache<(String, usize), Vec<ActorSummary>>,
    movie_cache: ResponseCache<String, MovieDetails>,
}

impl TmdbClient {
    /// Create a client authenticating with the given bearer token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            search_cache: ResponseCache::default(),
            cast_cache: ResponseCache::default(),
            movie_cache: ResponseCache::default(),
        }
    }

    /// Override the API base URL (used by tests to point at a local double)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Search movies by title, most popular first
    ///
    /// # Errors
    ///
    /// `GatewayError::EmptyQuery` when the title is blank, `Upstream` on a
    /// non-success provider response.
    pub async fn search_movies_by_title(
        &self,
        title: &str,
    ) -> Result<Vec<MovieSummary>, GatewayError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(GatewayError::EmptyQuery);
        }

        let key = title.to_string();
        if let Some(hit) = self.search_cache.get(&key).await {
            return Ok(hit);
        }

        let response = self
            .http
            .get(format!("{}/search/movie", self.base_url))
            .bearer_auth(&self.token)
            .query(&[("query", title)])
            .send()
            .await?;

        let data: SearchMoviesResponse = read_json(response).await?;
        let mut movies = data.results;
        sort_by_popularity_desc(&mut movies, |m| m.popularity);

        self.search_cache.insert(key, movies.clone()).await;
        Ok(movies)
    }

    /// Fetch a movie's cast, most popular first, truncated to `limit`
    ///
    /// Profile image paths are rewritten into absolute URLs before return.
    pub async fn get_cast_by_movie_id(
        &self,
        movie_id: &str,
        limit: usize,
    ) -> Result<Vec<ActorSummary>, GatewayError> {
        let key = (movie_id.to_string(), limit);
        if let Some(hit) = self.cast_cache.get(&key).await {
            return Ok(hit);
        }

        let response = self
            .http
            .get(format!("{}/movie/{}/credits", self.base_url, movie_id))
            .bearer_auth(&self.token)
            .send()
            .await?;

        let data: CreditsResponse = read_json(response).await?;
        let mut cast = data.cast;
        sort_by_popularity_desc(&mut cast, |a| a.popularity);
        cast.truncate(limit);

        for actor in &mut cast {
            if let Some(path) = actor.profile_path.take() {
                actor.profile_path = Some(format!("{IMAGE_BASE}{path}"));
            }
        }

        self.cast_cache.insert(key, cast.clone()).await;
        Ok(cast)
    }

    /// Fetch title and poster for a single movie
    pub async fn get_movie_by_id(&self, movie_id: &str) -> Result<MovieDetails, GatewayError> {
        let key = movie_id.to_string();
        if let Some(hit) = self.movie_cache.get(&key).await {
            return Ok(hit);
        }

        let response = self
            .http
            .get(format!("{}/movie/{}", self.base_url, movie_id))
            .bearer_auth(&self.token)
            .send()
            .await?;

        let details: MovieDetails = read_json(response).await?;

        self.movie_cache.insert(key, details.clone()).await;
        Ok(details)
    }
}

/// Turn a provider response into typed data, surfacing non-success statuses
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GatewayError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response.json().await?)
}

fn sort_by_popularity_desc<T>(items: &mut [T], popularity: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| {
        popularity(b)
            .partial_cmp(&popularity(a))
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_popularity_desc() {
        let mut movies = vec![
            MovieSummary {
                id: 1,
                title: "B".to_string(),
                popularity: 3.2,
                poster_path: None,
                release_date: String::new(),
            },
            MovieSummary {
                id: 2,
                title: "A".to_string(),
                popularity: 91.5,
                poster_path: None,
                release_date: String::new(),
            },
            MovieSummary {
                id: 3,
                title: "C".to_string(),
                popularity: 47.0,
                poster_path: None,
                release_date: String::new(),
            },
        ];

        sort_by_popularity_desc(&mut movies, |m| m.popularity);

        let popularity: Vec<f64> = movies.iter().map(|m| m.popularity).collect();
        assert_eq!(popularity, vec![91.5, 47.0, 3.2]);
    }

    #[tokio::test]
    async fn test_blank_title_is_rejected_without_a_request() {
        let client = TmdbClient::new("token");

        assert!(matches!(
            client.search_movies_by_title("   ").await,
            Err(GatewayError::EmptyQuery)
        ));
    }
}
