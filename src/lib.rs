//! # rust-clue
//!
//! Engine for a Clue-style deduction game for 2-6 local players.
//!
//! ## Design Principles
//!
//! 1. **One owner per game**: a [`GameSession`] owns the board, the hidden
//!    solution, every seat and its checklist. There is no global state, so
//!    sessions can run side by side.
//!
//! 2. **Rejections are outcomes**: an illegal move or a malformed suggestion
//!    comes back as an [`ActionOutcome`]; only setup problems and acting out
//!    of turn are errors.
//!
//! 3. **Deterministic from a seed**: shuffling and dealing use a seeded
//!    ChaCha RNG, so a logged seed replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: seats, players, RNG, configuration, errors
//! - `cards`: catalogue, deck construction, solution, dealing
//! - `board`: graph and grid topologies behind one `Topology` trait
//! - `checklist`: per-seat knowledge sheet
//! - `rules`: turn state machine, actions and outcomes
//! - `session`: game setup and the play loop
//! - `collab`: name generation and card artwork collaborators
//! - `console`: text front end

pub mod board;
pub mod cards;
pub mod checklist;
pub mod collab;
pub mod console;
pub mod core;
pub mod rules;
pub mod session;

pub use crate::core::{GameConfig, GameError, GameRng, Layout, Player, SeatId, SeatMap};

pub use crate::cards::{Card, Catalogue, Category, Deck, Guess, Solution};

pub use crate::board::{Board, GraphBoard, GridBoard, GridPos, LocationKey, LocationKind, Topology};

pub use crate::checklist::{Checklist, ChecklistSnapshot};

pub use crate::rules::{
    Action, ActionOutcome, GameResult, GameState, TurnEngine, TurnInput, TurnState, TurnView,
    WinReason,
};

pub use crate::session::{acquire_catalogue, GameSession};

pub use crate::collab::{CatalogueSource, FixedCatalogue, LogRenderer, Renderer, RetryingSource};
