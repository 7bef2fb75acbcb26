//! Game setup and the play loop.
//!
//! [`GameSession::initialize`] turns a catalogue and a config into a dealt
//! table; [`GameSession::run`] then hands turns to a [`TurnInput`] until the
//! game has a result.

use im::Vector;
use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Topology};
use crate::cards::{
    build_deck, deal, Catalogue, Category, Solution, DEFAULT_CHARACTER_COUNT,
    DEFAULT_ROOM_COUNT, DEFAULT_WEAPON_COUNT,
};
use crate::checklist::Checklist;
use crate::collab::{CatalogueSource, RetryingSource};
use crate::core::{GameConfig, GameError, GameRng, Player, SeatId, SeatMap};
use crate::rules::{
    Action, ActionOutcome, ActionRecord, FirstMatch, GameResult, GameState, TurnEngine,
    TurnInput, TurnView,
};

/// One game from deal to result.
#[derive(Clone, Debug)]
pub struct GameSession {
    engine: TurnEngine,
    state: GameState,
    seed: u64,
}

impl GameSession {
    /// Validate inputs, build the board and deck, seat the players and deal.
    ///
    /// Seat `i` plays character `i` (wrapping if there are more seats than
    /// characters) and starts on the board's `i`th starting location. Every
    /// dealt card is marked known on its holder's checklist.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidPlayerCount`] outside 2-6 seats
    /// - [`GameError::DuplicateCard`] for repeated or blank names
    /// - [`GameError::InsufficientRooms`] / [`GameError::UnsupportedRoomCount`]
    ///   when the board cannot hold the rooms
    /// - [`GameError::InsufficientCards`] for an empty category
    #[instrument(skip_all, fields(players = config.player_count, layout = config.layout.name()))]
    pub fn initialize(catalogue: Catalogue, config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        catalogue.validate()?;

        let board = Board::build(config.layout, &catalogue.rooms)?;

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let seed = rng.seed();
        info!(seed, "game seed");

        let (deck, solution) = build_deck(&catalogue, &mut rng)?;
        let hands = deal(deck, config.player_count);

        let starts = board.starting_locations();
        let characters = catalogue.names(Category::Character);
        let mut players = SeatMap::new(config.player_count, |seat| {
            let i = seat.index();
            Player::new(
                config.player_name(i),
                characters[i % characters.len()].clone(),
                starts[i % starts.len()].clone(),
            )
        });
        let mut checklists = SeatMap::new(config.player_count, |_| Checklist::new(&catalogue));

        for (seat, hand) in hands.iter() {
            for card in hand {
                checklists[seat].mark_known(&card.name);
                players[seat].receive(card.clone());
            }
            debug!(seat = %seat, cards = hand.len(), "dealt");
        }

        let engine = TurnEngine::new(board, solution, catalogue);
        let state = GameState::new(players, checklists);
        info!(seats = state.seat_count(), "game ready");

        Ok(Self {
            engine,
            state,
            seed,
        })
    }

    /// Play until someone wins or every seat is out.
    #[instrument(skip_all, fields(seed = self.seed))]
    pub fn run<I: TurnInput + ?Sized>(&mut self, input: &mut I) -> GameResult {
        while let Some(seat) = self.state.current_seat() {
            let action = input.choose_action(&self.engine.view(&self.state, seat));
            let outcome = self.engine.resolve(&mut self.state, seat, action, input);
            input.observe(seat, &outcome);
        }

        let result = self.state.result().cloned().unwrap_or(GameResult::Draw);
        info!(result = ?result, turns = self.state.turn_number, "game finished");
        result
    }

    /// Apply one action for the seat to act; disproofs show the first match.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] once the game has a result.
    pub fn step(&mut self, action: Action) -> Result<ActionOutcome, GameError> {
        self.step_with(action, &mut FirstMatch)
    }

    /// Like [`step`](Self::step), asking `input` which card to reveal.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] once the game has a result.
    pub fn step_with<I: TurnInput + ?Sized>(
        &mut self,
        action: Action,
        input: &mut I,
    ) -> Result<ActionOutcome, GameError> {
        let seat = self.state.current_seat().ok_or(GameError::GameOver)?;
        self.engine.apply_action(&mut self.state, seat, action, input)
    }

    /// Apply an action on behalf of a specific seat.
    ///
    /// # Errors
    ///
    /// [`GameError::NotYourTurn`] unless `seat` is the seat to act,
    /// [`GameError::GameOver`] once the game has a result.
    pub fn act(&mut self, seat: SeatId, action: Action) -> Result<ActionOutcome, GameError> {
        self.engine
            .apply_action(&mut self.state, seat, action, &mut FirstMatch)
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.state.result()
    }

    #[must_use]
    pub fn current_seat(&self) -> Option<SeatId> {
        self.state.current_seat()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.state.turn_number
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn players(&self) -> &SeatMap<Player> {
        &self.state.players
    }

    #[must_use]
    pub fn player(&self, seat: SeatId) -> Option<&Player> {
        self.state.players.get(seat)
    }

    #[must_use]
    pub fn checklists(&self) -> &SeatMap<Checklist> {
        &self.state.checklists
    }

    #[must_use]
    pub fn checklist(&self, seat: SeatId) -> Option<&Checklist> {
        self.state.checklists.get(seat)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        self.engine.catalogue()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.state.history
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// View for the seat to act, `None` once the game is over.
    #[must_use]
    pub fn view(&self) -> Option<TurnView<'_>> {
        let seat = self.state.current_seat()?;
        Some(self.engine.view(&self.state, seat))
    }

    /// The case file. For tests and the post-game reveal.
    #[must_use]
    pub fn solution(&self) -> &Solution {
        self.engine.solution()
    }
}

/// Ask `source` for a full catalogue, falling back to the built-in one.
///
/// Each category is tried up to `retries` times. If any category cannot be
/// filled, or the combined names collide, the classic catalogue is used
/// instead and a warning is logged.
#[instrument(skip(source))]
pub fn acquire_catalogue<S: CatalogueSource + ?Sized>(source: &mut S, retries: u32) -> Catalogue {
    let fetched = fetch_catalogue(&mut RetryingSource::new(source, retries));
    match fetched {
        Ok(catalogue) => {
            info!(cards = catalogue.len(), "catalogue acquired");
            catalogue
        }
        Err(e) => {
            warn!(error = %e, "catalogue source unavailable, using the classic catalogue");
            Catalogue::default()
        }
    }
}

fn fetch_catalogue<S: CatalogueSource>(source: &mut S) -> Result<Catalogue, GameError> {
    let catalogue = Catalogue::new(
        source.characters(DEFAULT_CHARACTER_COUNT)?,
        source.weapons(DEFAULT_WEAPON_COUNT)?,
        source.rooms(DEFAULT_ROOM_COUNT)?,
    );
    catalogue.validate()?;
    Ok(catalogue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::LocationKey;
    use crate::cards::Guess;
    use crate::collab::FixedCatalogue;
    use crate::rules::WinReason;

    fn session(players: usize, seed: u64) -> GameSession {
        GameSession::initialize(Catalogue::default(), &GameConfig::new(players).with_seed(seed))
            .unwrap()
    }

    #[test]
    fn test_initialize_deals_and_marks_checklists() {
        let s = session(3, 7);
        for (seat, player) in s.players().iter() {
            assert_eq!(player.hand().len(), 6);
            let sheet = s.checklist(seat).unwrap();
            assert_eq!(sheet.known_count(), 6);
            assert!(player.hand().iter().all(|c| sheet.is_known(&c.name)));
        }
        assert_eq!(s.current_seat(), Some(SeatId::new(0)));
        assert_eq!(s.seed(), 7);
    }

    #[test]
    fn test_initialize_seats_and_starts() {
        let s = session(4, 1);
        let p0 = s.player(SeatId::new(0)).unwrap();
        assert_eq!(p0.name, "Player 1");
        assert_eq!(p0.character, "Miss Scarlet");
        assert_eq!(p0.location, LocationKey::named("Hall-Lounge"));
        assert_eq!(s.player(SeatId::new(3)).unwrap().character, "Mr. Green");
    }

    #[test]
    fn test_invalid_player_count() {
        for n in [0, 1, 7] {
            assert!(matches!(
                GameSession::initialize(Catalogue::default(), &GameConfig::new(n)),
                Err(GameError::InvalidPlayerCount { found, .. }) if found == n
            ));
        }
    }

    #[test]
    fn test_duplicate_card_rejected() {
        let mut catalogue = Catalogue::default();
        catalogue.weapons[0] = "Hall".into();
        assert!(matches!(
            GameSession::initialize(catalogue, &GameConfig::new(3)),
            Err(GameError::DuplicateCard { .. })
        ));
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = session(3, 99);
        let b = session(3, 99);
        assert_eq!(a.solution(), b.solution());
        assert_eq!(a.players(), b.players());
    }

    #[test]
    fn test_step_accusation_and_game_over() {
        let mut s = session(3, 5);
        let answer = s.solution().as_guess();
        assert_eq!(s.step(Action::Accuse(answer)).unwrap(), ActionOutcome::AccusationCorrect);
        assert_eq!(
            s.result(),
            Some(&GameResult::Winner { seat: SeatId::new(0), reason: WinReason::Accusation })
        );
        assert!(matches!(s.step(Action::EndTurn), Err(GameError::GameOver)));
        assert!(s.view().is_none());
    }

    #[test]
    fn test_act_out_of_turn() {
        let mut s = session(3, 5);
        assert!(matches!(
            s.act(SeatId::new(1), Action::ViewChecklist),
            Err(GameError::NotYourTurn(_))
        ));
        assert!(s.act(SeatId::new(0), Action::ViewChecklist).is_ok());
    }

    #[test]
    fn test_wrong_accusations_leave_one_winner() {
        let mut s = session(3, 5);
        let wrong = Guess::new("Nobody", "Nothing", "Nowhere");
        s.step(Action::Accuse(wrong.clone())).unwrap();
        s.step(Action::Accuse(wrong)).unwrap();
        assert_eq!(
            s.result(),
            Some(&GameResult::Winner { seat: SeatId::new(2), reason: WinReason::LastStanding })
        );
    }

    #[test]
    fn test_acquire_from_fixed_source() {
        let mut source = FixedCatalogue::default();
        assert_eq!(acquire_catalogue(&mut source, 2), Catalogue::default());
    }

    #[test]
    fn test_acquire_falls_back_on_failure() {
        let short = Catalogue::new(["A"], ["B"], ["C"]);
        let mut source = FixedCatalogue::new(short);
        assert_eq!(acquire_catalogue(&mut source, 2), Catalogue::default());
    }
}
