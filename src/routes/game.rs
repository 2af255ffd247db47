use askama::Template;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    core::{evaluate_guess, Selection},
    error::ApiError,
    models::{GuessForm, GuessResponse},
    session::{removal_cookie, SessionCookie},
    state::AppState,
};

/// Template for the creator's game summary, shown once after finalization
#[derive(Template)]
#[template(path = "submit_game.html")]
struct SubmitGameTemplate {
    game_link: String,
    movie_title: String,
    selections: Vec<Selection>,
}

/// Template for the guesser's view of a stored game
///
/// Deliberately omits the title and poster; the clues are the answer's only
/// giveaway.
#[derive(Template)]
#[template(path = "game_details.html")]
struct GameDetailsTemplate {
    game_id: String,
    selections: Vec<Selection>,
}

/// Finalize the session into a stored game
///
/// Generates the game id, inserts the record into the registry, clears the
/// session cookie, and shows the shareable link.
///
/// # Returns
///
/// Rendered summary, or 400 when fewer than two selections are recorded
pub async fn submit_game(
    State(state): State<AppState>,
    jar: CookieJar,
    SessionCookie(mut session): SessionCookie,
) -> Result<impl IntoResponse, ApiError> {
    let record = session.finalize()?;

    let game_id = {
        let mut registry = state.registry.write().await;
        let game_id = registry.create_id();
        registry.insert(game_id.clone(), record.clone())?;
        game_id
    };

    tracing::info!(%game_id, movie = %record.movie_title, "game created");

    // The session is spent; clear the cookie so a new game starts empty
    let jar = jar.remove(removal_cookie());

    Ok((
        jar,
        SubmitGameTemplate {
            game_link: format!("/game/{}", game_id),
            movie_title: record.movie_title,
            selections: record.selections,
        },
    ))
}

/// Show a stored game to a guesser
///
/// # Returns
///
/// Rendered clues and guess form, or 404 when the id is unknown
pub async fn show_game(
    Path(game_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let registry = state.registry.read().await;
    let record = registry.get(&game_id).ok_or(ApiError::GameNotFound)?;

    Ok(GameDetailsTemplate {
        game_id,
        selections: record.selections.clone(),
    })
}

/// Evaluate a guess against a stored game
///
/// # Returns
///
/// JSON with the verdict and the correct title; 404 when the id is unknown,
/// 400 when the guess is missing
pub async fn submit_guess(
    Path(game_id): Path<String>,
    State(state): State<AppState>,
    Form(form): Form<GuessForm>,
) -> Result<Json<GuessResponse>, ApiError> {
    let registry = state.registry.read().await;
    let record = registry.get(&game_id).ok_or(ApiError::GameNotFound)?;

    let guess = form.guess()?;
    let outcome = evaluate_guess(record, guess);

    Ok(Json(outcome.into()))
}

/// Abandon the in-progress game and start over
pub async fn reset_game(jar: CookieJar) -> impl IntoResponse {
    (jar.remove(removal_cookie()), Redirect::to("/search"))
}
