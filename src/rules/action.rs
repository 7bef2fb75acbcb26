//! Actions a seat can take and what came of them.
//!
//! The menu a seat picks from is fixed: move, suggest, accuse, look at the
//! checklist, end the turn. Rejections (an unreachable destination, a second
//! suggestion in one turn) are ordinary outcomes, not errors; the seat simply
//! picks again.

use serde::{Deserialize, Serialize};

use crate::board::LocationKey;
use crate::cards::{Card, Category, Guess};
use crate::checklist::ChecklistSnapshot;
use crate::core::SeatId;

/// One choice from the turn menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Move(LocationKey),
    Suggest(Guess),
    Accuse(Guess),
    ViewChecklist,
    EndTurn,
}

impl Action {
    /// Menu label, matching the console's 1-5 numbering.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Action::Move(_) => "Move",
            Action::Suggest(_) => "Make a suggestion",
            Action::Accuse(_) => "Make an accusation",
            Action::ViewChecklist => "Show checklist",
            Action::EndTurn => "End turn",
        }
    }
}

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    /// Destination is not one legal step away (or does not exist).
    NotReachable,
    /// One move per turn.
    AlreadyMoved,
}

/// Why a suggestion was refused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionRejection {
    /// A named card is not in the catalogue under that category.
    UnknownCard { category: Category, name: String },
    /// Only one suggestion per turn.
    AlreadySuggested,
}

/// A card shown privately to the suggester.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disproof {
    pub by: SeatId,
    pub card: Card,
}

/// Result of applying one action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Moved { to: LocationKey },
    MoveRejected { to: LocationKey, reason: MoveRejection },
    /// `disproof` is `None` when no other seat held any named card.
    Suggested { guess: Guess, disproof: Option<Disproof> },
    SuggestionRejected(SuggestionRejection),
    AccusationCorrect,
    /// The seat is out and play has passed on, or the game ended.
    AccusationWrong,
    Checklist(ChecklistSnapshot),
    TurnEnded,
}

impl ActionOutcome {
    /// Whether the action was refused and the seat should choose again.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ActionOutcome::MoveRejected { .. } | ActionOutcome::SuggestionRejected(_)
        )
    }
}

/// Public record of something that happened. Revealed cards are private to
/// the suggester and never appear here; only who disproved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Moved { to: LocationKey },
    Suggested { guess: Guess, disproved_by: Option<SeatId> },
    Accused { guess: Guess, correct: bool },
    EndedTurn,
}

/// An event with the seat and turn it happened on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: SeatId,
    pub turn: u32,
    pub event: Event,
}

impl ActionRecord {
    #[must_use]
    pub fn new(seat: SeatId, turn: u32, event: Event) -> Self {
        Self { seat, turn, event }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections() {
        let moved = ActionOutcome::Moved { to: LocationKey::named("Hall") };
        assert!(!moved.is_rejection());

        let refused = ActionOutcome::MoveRejected {
            to: LocationKey::named("Hall"),
            reason: MoveRejection::NotReachable,
        };
        assert!(refused.is_rejection());
        assert!(ActionOutcome::SuggestionRejected(SuggestionRejection::AlreadySuggested).is_rejection());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Action::EndTurn.label(), "End turn");
        assert_eq!(Action::Accuse(Guess::new("a", "b", "c")).label(), "Make an accusation");
    }

    #[test]
    fn test_record_serde() {
        let record = ActionRecord::new(
            SeatId::new(1),
            4,
            Event::Suggested {
                guess: Guess::new("Mr. Green", "Rope", "Hall"),
                disproved_by: Some(SeatId::new(2)),
            },
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
