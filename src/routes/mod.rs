pub mod game;
pub mod gifs;
pub mod health;
pub mod search;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Build the application router
///
/// Shared between `main` and the integration tests so both exercise the
/// same route table and middleware stack.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health and root
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // Movie selection
        .route("/search", get(search::search_form))
        .route("/movies", get(search::search_movies))
        .route("/movies/actors/:movie_id", get(search::movie_actors))
        // GIF selection
        .route("/gifs", get(gifs::search_gifs))
        .route("/gifs/submit", post(gifs::submit_gif))
        .route("/select_second_actor", get(gifs::select_second_actor))
        // Game creation and guessing
        .route("/submit_game", get(game::submit_game))
        .route("/game/:game_id", get(game::show_game))
        .route("/submit_guess/:game_id", post(game::submit_guess))
        .route("/reset_game", get(game::reset_game))
        // Static files
        .nest_service("/static", ServeDir::new("static"))
        // Add state
        .with_state(state.clone())
        // Add middleware layers (applied in reverse order)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(state)),
        )
}
