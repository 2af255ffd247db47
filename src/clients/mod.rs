pub mod cache;
pub mod giphy;
pub mod tmdb;

pub use cache::ResponseCache;
pub use giphy::{GifSummary, GiphyClient, DEFAULT_GIF_LIMIT};
pub use tmdb::{ActorSummary, MovieDetails, MovieSummary, TmdbClient, DEFAULT_CAST_LIMIT};

use thiserror::Error;

/// Errors from the upstream search providers
///
/// Any non-success upstream response is surfaced as a single opaque
/// `Upstream` error; there are no retries and no backoff.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The caller passed a blank query
    #[error("query must not be empty")]
    EmptyQuery,

    /// The provider answered with a non-success status
    #[error("upstream request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The request never produced a response (DNS, connect, decode, ...)
    #[error("upstream transport error: {0}")]
    Http(#[from] reqwest::Error),
}
