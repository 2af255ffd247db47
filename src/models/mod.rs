pub mod requests;
pub mod responses;

pub use requests::{GifSearchQuery, GuessForm, MovieSearchQuery, SecondActorQuery, SubmitGifForm};
pub use responses::GuessResponse;
