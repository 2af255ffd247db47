pub mod game;
pub mod guess;
pub mod registry;
pub mod selection;

pub use game::{GameRecord, Selection};
pub use guess::{evaluate_guess, GuessOutcome};
pub use registry::{GameRegistry, RegistryError};
pub use selection::{SelectionSession, SessionError, MAX_SELECTIONS};
