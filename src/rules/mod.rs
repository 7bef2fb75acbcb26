//! Game rules: the turn state machine and the actions it accepts.
//!
//! [`TurnEngine`] applies [`Action`]s to a [`GameState`] and reports an
//! [`ActionOutcome`] for each. Decisions come from a [`TurnInput`]; the
//! engine itself never blocks.

pub mod action;
pub mod engine;
pub mod input;
pub mod state;

pub use action::{
    Action, ActionOutcome, ActionRecord, Disproof, Event, MoveRejection, SuggestionRejection,
};
pub use engine::TurnEngine;
pub use input::{FirstMatch, TurnInput, TurnView};
pub use state::{GameResult, GameState, TurnFlags, TurnState, WinReason};
