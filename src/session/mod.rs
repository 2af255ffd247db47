pub mod codec;
pub mod extractor;

pub use codec::{decode_session, encode_session};
pub use extractor::SessionCookie;

use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::core::SelectionSession;

/// Name of the cookie carrying the signed selection session
pub const SESSION_COOKIE: &str = "reelguess_session";

const SESSION_COOKIE_HOURS: i64 = 24;

/// Build the signed session cookie for a response
///
/// # Errors
///
/// Returns an error string if serialization or signing fails.
pub fn session_cookie(
    session: &SelectionSession,
    secret_key: &str,
) -> Result<Cookie<'static>, String> {
    let token = encode_session(session, secret_key)?;

    // Determine if we're in development mode (allow HTTP cookies)
    let is_development = std::env::var("ENVIRONMENT")
        .unwrap_or_default()
        .eq_ignore_ascii_case("development");

    Ok(Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(!is_development)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(SESSION_COOKIE_HOURS))
        .build())
}

/// Build a cookie matching the session cookie's name and path, for removal
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}
