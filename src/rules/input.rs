//! The decision boundary between the engine and whoever plays a seat.
//!
//! A console, a scripted test or a bot all implement [`TurnInput`]. The
//! engine hands over a read-only [`TurnView`] and gets an [`Action`] back;
//! it never blocks anywhere else.

use super::action::{Action, ActionOutcome};
use super::state::GameState;
use crate::board::{Board, LocationKey, Topology};
use crate::cards::{Card, Catalogue};
use crate::checklist::Checklist;
use crate::core::{Player, SeatId};

/// What the acting seat may look at when choosing an action.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    pub seat: SeatId,
    pub state: &'a GameState,
    pub board: &'a Board,
    pub catalogue: &'a Catalogue,
}

impl<'a> TurnView<'a> {
    #[must_use]
    pub fn player(&self) -> &'a Player {
        &self.state.players[self.seat]
    }

    #[must_use]
    pub fn checklist(&self) -> &'a Checklist {
        &self.state.checklists[self.seat]
    }

    /// Whether a move is still available this turn.
    #[must_use]
    pub fn can_move(&self) -> bool {
        !self.state.flags.moved
    }

    #[must_use]
    pub fn can_suggest(&self) -> bool {
        !self.state.flags.suggested
    }

    /// Destinations one move away, excluding staying put.
    #[must_use]
    pub fn reachable(&self) -> Vec<LocationKey> {
        self.board.neighbors(&self.player().location)
    }
}

/// Supplies decisions for seats.
pub trait TurnInput {
    /// Pick the next action for `view.seat`.
    fn choose_action(&mut self, view: &TurnView<'_>) -> Action;

    /// `revealer` must show `suggester` one of `matching` (never empty).
    /// Returns an index into `matching`; out-of-range picks fall back to 0.
    fn choose_reveal(&mut self, revealer: SeatId, suggester: SeatId, matching: &[Card]) -> usize {
        let _ = (revealer, suggester, matching);
        0
    }

    /// Called after every applied action.
    fn observe(&mut self, seat: SeatId, outcome: &ActionOutcome) {
        let _ = (seat, outcome);
    }
}

/// Always shows the first matching card; never chooses actions itself.
///
/// Used by [`GameSession::step`](crate::session::GameSession::step), where
/// the action comes from the caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMatch;

impl TurnInput for FirstMatch {
    fn choose_action(&mut self, _view: &TurnView<'_>) -> Action {
        Action::EndTurn
    }
}
