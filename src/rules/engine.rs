//! Turn state machine.
//!
//! `TurnEngine` owns the parts of a game that never change once it starts
//! (board, solution, catalogue) and applies actions to a [`GameState`].
//!
//! ## Turn flow
//!
//! A seat in `AwaitingAction` may move once, suggest once, view its
//! checklist any number of times, and then either accuse or end the turn.
//! Rejected moves and suggestions leave the seat where it was, still to act.
//!
//! ## Hand-off
//!
//! Ending a turn or accusing wrongly passes play to the next active seat in
//! seat order. At every hand-off the engine checks how many seats remain:
//! one means that seat wins by default, none means a draw.

use tracing::{debug, info, instrument};

use super::action::{
    Action, ActionOutcome, ActionRecord, Disproof, Event, MoveRejection, SuggestionRejection,
};
use super::input::{TurnInput, TurnView};
use super::state::{GameResult, GameState, TurnFlags, TurnState, WinReason};
use crate::board::{Board, LocationKey, Topology};
use crate::cards::{Card, Catalogue, Category, Guess, Solution};
use crate::core::{GameError, SeatId};

/// Applies actions for one game.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    board: Board,
    solution: Solution,
    catalogue: Catalogue,
}

impl TurnEngine {
    #[must_use]
    pub fn new(board: Board, solution: Solution, catalogue: Catalogue) -> Self {
        Self {
            board,
            solution,
            catalogue,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Read-only view for the seat whose turn it is.
    #[must_use]
    pub fn view<'a>(&'a self, state: &'a GameState, seat: SeatId) -> TurnView<'a> {
        TurnView {
            seat,
            state,
            board: &self.board,
            catalogue: &self.catalogue,
        }
    }

    /// Apply `action` for `seat`.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the game has a result
    /// - [`GameError::NotYourTurn`] when `seat` is not the seat to act
    pub fn apply_action<I: TurnInput + ?Sized>(
        &self,
        state: &mut GameState,
        seat: SeatId,
        action: Action,
        input: &mut I,
    ) -> Result<ActionOutcome, GameError> {
        match state.turn {
            TurnState::GameOver(_) => Err(GameError::GameOver),
            TurnState::AwaitingAction(current) if current != seat => {
                Err(GameError::NotYourTurn(seat))
            }
            TurnState::AwaitingAction(_) => Ok(self.resolve(state, seat, action, input)),
        }
    }

    /// Apply an action already known to belong to the seat to act.
    #[instrument(skip_all, fields(seat = %seat, action = action.label()))]
    pub(crate) fn resolve<I: TurnInput + ?Sized>(
        &self,
        state: &mut GameState,
        seat: SeatId,
        action: Action,
        input: &mut I,
    ) -> ActionOutcome {
        match action {
            Action::Move(to) => self.move_seat(state, seat, to),
            Action::Suggest(guess) => self.suggest(state, seat, guess, input),
            Action::Accuse(guess) => self.accuse(state, seat, guess),
            Action::ViewChecklist => ActionOutcome::Checklist(state.checklists[seat].snapshot()),
            Action::EndTurn => {
                state.record(ActionRecord::new(seat, state.turn_number, Event::EndedTurn));
                self.hand_off(state, seat);
                ActionOutcome::TurnEnded
            }
        }
    }

    fn move_seat(&self, state: &mut GameState, seat: SeatId, to: LocationKey) -> ActionOutcome {
        if state.flags.moved {
            return ActionOutcome::MoveRejected {
                to,
                reason: MoveRejection::AlreadyMoved,
            };
        }

        let from = &state.players[seat].location;
        if !self.board.is_legal_move(from, &to) {
            debug!(from = %from, to = %to, "move rejected");
            return ActionOutcome::MoveRejected {
                to,
                reason: MoveRejection::NotReachable,
            };
        }

        debug!(from = %from, to = %to, "moved");
        state.players[seat].location = to.clone();
        state.flags.moved = true;
        state.record(ActionRecord::new(
            seat,
            state.turn_number,
            Event::Moved { to: to.clone() },
        ));
        ActionOutcome::Moved { to }
    }

    fn suggest<I: TurnInput + ?Sized>(
        &self,
        state: &mut GameState,
        seat: SeatId,
        guess: Guess,
        input: &mut I,
    ) -> ActionOutcome {
        if state.flags.suggested {
            return ActionOutcome::SuggestionRejected(SuggestionRejection::AlreadySuggested);
        }
        if let Some(rejection) = self.unknown_card(&guess) {
            return ActionOutcome::SuggestionRejected(rejection);
        }
        state.flags.suggested = true;

        // The named character's token is summoned into the named room.
        if let Some(summoned) = state.seat_of_character(&guess.character) {
            if let Some(room) = self.board.room_location(&guess.room) {
                debug!(summoned = %summoned, room = %room, "token moved by suggestion");
                state.players[summoned].location = room;
            }
        }

        let disproof = find_disproof(state, seat, &guess, input);
        if let Some(Disproof { card, .. }) = &disproof {
            state.checklists[seat].mark_known(&card.name);
        }
        debug!(
            guess = %guess,
            disproved_by = ?disproof.as_ref().map(|d| d.by),
            "suggestion resolved"
        );

        state.record(ActionRecord::new(
            seat,
            state.turn_number,
            Event::Suggested {
                guess: guess.clone(),
                disproved_by: disproof.as_ref().map(|d| d.by),
            },
        ));
        ActionOutcome::Suggested { guess, disproof }
    }

    fn accuse(&self, state: &mut GameState, seat: SeatId, guess: Guess) -> ActionOutcome {
        let correct = self.solution.matches(&guess);
        state.record(ActionRecord::new(
            seat,
            state.turn_number,
            Event::Accused {
                guess: guess.clone(),
                correct,
            },
        ));

        if correct {
            info!(seat = %seat, guess = %guess, "accusation correct");
            state.turn = TurnState::GameOver(GameResult::Winner {
                seat,
                reason: WinReason::Accusation,
            });
            return ActionOutcome::AccusationCorrect;
        }

        info!(seat = %seat, guess = %guess, "accusation wrong, seat eliminated");
        state.players[seat].eliminate();
        self.hand_off(state, seat);
        ActionOutcome::AccusationWrong
    }

    fn unknown_card(&self, guess: &Guess) -> Option<SuggestionRejection> {
        Category::ALL.into_iter().find_map(|category| {
            let name = guess.name_for(category);
            (!self.catalogue.contains(category, name)).then(|| SuggestionRejection::UnknownCard {
                category,
                name: name.to_string(),
            })
        })
    }

    /// Pass play on from `from`, or end the game if at most one seat remains.
    fn hand_off(&self, state: &mut GameState, from: SeatId) {
        let active: Vec<SeatId> = state.active_seats().collect();
        let result = match active.as_slice() {
            [] => Some(GameResult::Draw),
            [last] => Some(GameResult::Winner {
                seat: *last,
                reason: WinReason::LastStanding,
            }),
            _ => None,
        };
        if let Some(result) = result {
            info!(result = ?result, "game over");
            state.turn = TurnState::GameOver(result);
            return;
        }

        let next = from
            .others_in_order(state.seat_count())
            .find(|s| active.contains(s))
            .unwrap_or(from);
        state.turn = TurnState::AwaitingAction(next);
        state.turn_number += 1;
        state.flags = TurnFlags::default();
        debug!(next = %next, turn = state.turn_number, "turn passed");
    }
}

/// First seat after the suggester, in seat order, holding a named card.
/// Eliminated seats still answer.
fn find_disproof<I: TurnInput + ?Sized>(
    state: &GameState,
    suggester: SeatId,
    guess: &Guess,
    input: &mut I,
) -> Option<Disproof> {
    let names = guess.names();
    suggester
        .others_in_order(state.seat_count())
        .find_map(|other| {
            let matching: Vec<Card> = state.players[other].matching(&names).cloned().collect();
            if matching.is_empty() {
                return None;
            }
            let pick = input.choose_reveal(other, suggester, &matching);
            let card = matching.get(pick).unwrap_or(&matching[0]).clone();
            Some(Disproof { by: other, card })
        })
}
