use askama::Template;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Form,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    clients::GifSummary,
    error::ApiError,
    models::{GifSearchQuery, SecondActorQuery, SubmitGifForm},
    session::{session_cookie, SessionCookie},
    state::AppState,
};

/// Template for the GIF picker
#[derive(Template)]
#[template(path = "select_gif.html")]
struct SelectGifTemplate {
    gifs: Vec<GifSummary>,
    actor_name: String,
    movie_id: String,
}

/// Search GIFs for the chosen actor
///
/// # Returns
///
/// Rendered GIF picker, or 400 when query or movie_id is missing
pub async fn search_gifs(
    State(state): State<AppState>,
    Query(query): Query<GifSearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let actor_name = query.query()?.to_string();
    let movie_id = query.movie_id()?.to_string();

    let gifs = state.giphy.search_gifs(&actor_name, query.limit()).await?;

    Ok(SelectGifTemplate {
        gifs,
        actor_name,
        movie_id,
    })
}

/// Record one actor/GIF selection into the session cookie
///
/// The first selection also backfills the movie title and poster from the
/// metadata provider; a failed lookup is logged and the selection proceeds
/// without them. Redirects to the second-actor flow, or to game submission
/// once both selections are in.
///
/// # Returns
///
/// 303 redirect carrying the updated session cookie; 400 on a missing form
/// field, 409 when two selections are already recorded.
pub async fn submit_gif(
    State(state): State<AppState>,
    jar: CookieJar,
    SessionCookie(mut session): SessionCookie,
    Form(form): Form<SubmitGifForm>,
) -> Result<impl IntoResponse, ApiError> {
    let (gif_url, actor_name, movie_id) = form.validated()?;

    session.record_selection(actor_name, gif_url, &movie_id)?;

    let pending_lookup = session.needs_movie_lookup().map(str::to_string);
    if let Some(id) = pending_lookup {
        match state.tmdb.get_movie_by_id(&id).await {
            Ok(details) => session.set_movie_details(details.title, details.poster_path),
            Err(error) => {
                tracing::warn!(%error, movie_id = %id, "movie lookup failed, continuing without title");
            }
        }
    }

    let target = if session.is_complete() {
        "/submit_game".to_string()
    } else {
        format!("/select_second_actor?movie_id={}", movie_id)
    };

    let cookie = session_cookie(&session, &state.secret_key).map_err(ApiError::Internal)?;

    Ok((jar.add(cookie), Redirect::to(&target)))
}

/// Send the creator back to the cast list for the same movie
///
/// # Returns
///
/// 303 redirect to the cast lookup, or 400 when movie_id is missing
pub async fn select_second_actor(
    Query(query): Query<SecondActorQuery>,
) -> Result<Redirect, ApiError> {
    let movie_id = query.movie_id()?;

    Ok(Redirect::to(&format!("/movies/actors/{}", movie_id)))
}
