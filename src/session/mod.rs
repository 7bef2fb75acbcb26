//! Game sessions: setting up a table and playing it out.
//!
//! A [`GameSession`] owns one game end to end: board, hidden solution,
//! seats, checklists, RNG seed and history. Nothing is shared between
//! sessions, so several can run side by side.

mod game;

pub use game::{acquire_catalogue, GameSession};
