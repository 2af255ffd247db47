use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use axum_extra::extract::cookie::CookieJar;

use crate::core::SelectionSession;
use crate::state::AppState;

use super::{decode_session, SESSION_COOKIE};

/// The caller's selection session, decoded from the signed cookie
///
/// A missing, tampered, or otherwise invalid cookie yields a fresh empty
/// session rather than an error; session integrity only guards against
/// forged state, not against starting over.
#[derive(Debug, Clone)]
pub struct SessionCookie(pub SelectionSession);

#[async_trait]
impl<S> FromRequestParts<S> for SessionCookie
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to extract cookies",
                )
            })?;

        // Get secret key from extensions (set as a layer in main)
        let app_state = parts
            .extensions
            .get::<AppState>()
            .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "App state not found"))?;

        let session = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| decode_session(Some(cookie.value()), &app_state.secret_key))
            .unwrap_or_default();

        Ok(SessionCookie(session))
    }
}
