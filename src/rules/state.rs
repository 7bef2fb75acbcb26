//! Table state: everything that changes while a game is played.
//!
//! ## GameState
//!
//! - Seats: players (hand, location, elimination) and their checklists
//! - Turn progression: whose turn, turn number, per-turn flags
//! - Public history of moves, suggestions and accusations
//!
//! The immutable parts of a game (board, solution, catalogue) live on the
//! [`TurnEngine`](super::TurnEngine).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use crate::checklist::Checklist;
use crate::core::{Player, SeatId, SeatMap};

/// Final result of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Winner { seat: SeatId, reason: WinReason },
    /// Every seat was eliminated.
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, seat: SeatId) -> bool {
        self.winner() == Some(seat)
    }

    #[must_use]
    pub fn winner(&self) -> Option<SeatId> {
        match self {
            GameResult::Winner { seat, .. } => Some(*seat),
            GameResult::Draw => None,
        }
    }
}

/// How a winner won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// Named the solution exactly.
    Accusation,
    /// Every other seat was eliminated by wrong accusations.
    LastStanding,
}

/// Where the turn state machine stands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    AwaitingAction(SeatId),
    GameOver(GameResult),
}

/// Per-turn flags, cleared at every hand-off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnFlags {
    pub moved: bool,
    pub suggested: bool,
}

/// Mutable state of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub players: SeatMap<Player>,
    pub checklists: SeatMap<Checklist>,
    pub turn: TurnState,
    /// Starts at 1; incremented at every hand-off.
    pub turn_number: u32,
    pub flags: TurnFlags,
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Fresh state with seat 0 to act.
    ///
    /// # Panics
    ///
    /// If `players` and `checklists` disagree on seat count.
    #[must_use]
    pub fn new(players: SeatMap<Player>, checklists: SeatMap<Checklist>) -> Self {
        assert_eq!(
            players.seat_count(),
            checklists.seat_count(),
            "Every seat needs a checklist"
        );
        Self {
            players,
            checklists,
            turn: TurnState::AwaitingAction(SeatId::new(0)),
            turn_number: 1,
            flags: TurnFlags::default(),
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.players.seat_count()
    }

    /// Seat whose turn it is, `None` once the game is over.
    #[must_use]
    pub fn current_seat(&self) -> Option<SeatId> {
        match self.turn {
            TurnState::AwaitingAction(seat) => Some(seat),
            TurnState::GameOver(_) => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        match &self.turn {
            TurnState::GameOver(result) => Some(result),
            TurnState::AwaitingAction(_) => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    /// Seats not yet eliminated, in seat order.
    pub fn active_seats(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.players
            .iter()
            .filter(|(_, p)| p.is_active())
            .map(|(seat, _)| seat)
    }

    /// Seat playing `character`, if any.
    #[must_use]
    pub fn seat_of_character(&self, character: &str) -> Option<SeatId> {
        self.players
            .iter()
            .find(|(_, p)| p.character == character)
            .map(|(seat, _)| seat)
    }

    pub(crate) fn record(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::LocationKey;
    use crate::cards::Catalogue;

    fn state(n: usize) -> GameState {
        let catalogue = Catalogue::default();
        let players = SeatMap::new(n, |seat| {
            Player::new(
                format!("P{}", seat.0),
                catalogue.characters[seat.index()].clone(),
                LocationKey::named("Hall-Lounge"),
            )
        });
        let checklists = SeatMap::new(n, |_| Checklist::new(&catalogue));
        GameState::new(players, checklists)
    }

    #[test]
    fn test_initial_state() {
        let s = state(3);
        assert_eq!(s.current_seat(), Some(SeatId::new(0)));
        assert_eq!(s.turn_number, 1);
        assert!(!s.is_over());
        assert_eq!(s.active_seats().count(), 3);
        assert!(s.history.is_empty());
    }

    #[test]
    fn test_active_seats_skip_eliminated() {
        let mut s = state(4);
        s.players[SeatId::new(1)].eliminate();
        let active: Vec<_> = s.active_seats().collect();
        assert_eq!(active, vec![SeatId::new(0), SeatId::new(2), SeatId::new(3)]);
    }

    #[test]
    fn test_seat_of_character() {
        let s = state(3);
        assert_eq!(s.seat_of_character("Colonel Mustard"), Some(SeatId::new(1)));
        assert_eq!(s.seat_of_character("Professor Plum"), None);
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner {
            seat: SeatId::new(1),
            reason: WinReason::Accusation,
        };
        assert!(!result.is_winner(SeatId::new(0)));
        assert!(result.is_winner(SeatId::new(1)));
        assert!(!GameResult::Draw.is_winner(SeatId::new(0)));
        assert_eq!(GameResult::Draw.winner(), None);
    }
}
