//! Shared test doubles for the upstream search providers.
//!
//! Spins up real axum servers on ephemeral ports so the clients exercise
//! their full request path. The movie-details route counts calls so tests
//! can observe memoization.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{extract::Path, routing::get, Json, Router};
use serde_json::json;

use reelguess::clients::{GiphyClient, TmdbClient};
use reelguess::state::AppState;

pub struct MockProviders {
    pub tmdb_base: String,
    pub giphy_base: String,
    /// Number of requests served by the movie-details route
    pub movie_detail_calls: Arc<AtomicUsize>,
}

/// Start a fake TMDB and Giphy on ephemeral ports
pub async fn spawn_mock_providers() -> MockProviders {
    let movie_detail_calls = Arc::new(AtomicUsize::new(0));
    let calls = movie_detail_calls.clone();

    let app = Router::new()
        .route(
            "/3/search/movie",
            get(|| async {
                // Deliberately unsorted; the client ranks by popularity
                Json(json!({
                    "results": [
                        {
                            "id": 902,
                            "title": "The Cove",
                            "popularity": 3.2,
                            "poster_path": null,
                            "release_date": "2009-07-31"
                        },
                        {
                            "id": 27205,
                            "title": "Inception",
                            "popularity": 91.5,
                            "poster_path": "/inception.jpg",
                            "release_date": "2010-07-15"
                        },
                        {
                            "id": 157336,
                            "title": "Interstellar",
                            "popularity": 47.0,
                            "poster_path": "/interstellar.jpg",
                            "release_date": "2014-11-05"
                        }
                    ]
                }))
            }),
        )
        .route(
            "/3/movie/:id/credits",
            get(|Path(_id): Path<String>| async {
                Json(json!({
                    "cast": [
                        {
                            "id": 24045,
                            "character": "Arthur",
                            "name": "Joseph Gordon-Levitt",
                            "popularity": 60.0,
                            "profile_path": null
                        },
                        {
                            "id": 6193,
                            "character": "Dom Cobb",
                            "name": "Leonardo DiCaprio",
                            "popularity": 95.0,
                            "profile_path": "/leo.jpg"
                        },
                        {
                            "id": 2524,
                            "character": "Eames",
                            "name": "Tom Hardy",
                            "popularity": 80.0,
                            "profile_path": "/hardy.jpg"
                        }
                    ]
                }))
            }),
        )
        .route(
            "/3/movie/:id",
            get(move |Path(_id): Path<String>| {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Json(json!({
                        "id": 27205,
                        "title": "Inception",
                        "poster_path": "/inception.jpg"
                    }))
                }
            }),
        )
        .route(
            "/v1/gifs/search",
            get(|| async {
                Json(json!({
                    "data": [
                        {
                            "id": "g1",
                            "title": "excited gif",
                            "images": { "original": { "url": "https://gifs.test/g1.gif" } }
                        },
                        {
                            "id": "g2",
                            "title": "mind blown gif",
                            "images": { "original": { "url": "https://gifs.test/g2.gif" } }
                        }
                    ]
                }))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock provider");
    let addr = listener.local_addr().expect("Mock provider address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock provider error");
    });

    MockProviders {
        tmdb_base: format!("http://{}/3", addr),
        giphy_base: format!("http://{}/v1", addr),
        movie_detail_calls,
    }
}

/// A TMDB double whose search endpoint always fails
pub async fn spawn_failing_tmdb() -> String {
    use axum::http::StatusCode;

    let app = Router::new().route(
        "/3/search/movie",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "provider down") }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock provider");
    let addr = listener.local_addr().expect("Mock provider address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock provider error");
    });

    format!("http://{}/3", addr)
}

/// Application state wired to the mock providers
pub async fn test_state() -> (AppState, Arc<AtomicUsize>) {
    let mocks = spawn_mock_providers().await;

    let state = AppState::with_clients(
        TmdbClient::new("test-token").with_base_url(mocks.tmdb_base),
        GiphyClient::new("test-key").with_base_url(mocks.giphy_base),
        "integration_test_secret_key".to_string(),
    );

    (state, mocks.movie_detail_calls)
}
