//! Deck construction, the hidden solution, and dealing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card::{Card, Category};
use super::catalogue::Catalogue;
use crate::core::{GameError, GameRng, SeatId, SeatMap};

/// A character/weapon/room triple named by a suggestion or accusation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guess {
    pub character: String,
    pub weapon: String,
    pub room: String,
}

impl Guess {
    #[must_use]
    pub fn new(character: impl Into<String>, weapon: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            weapon: weapon.into(),
            room: room.into(),
        }
    }

    /// The three names in category order.
    #[must_use]
    pub fn names(&self) -> [&str; 3] {
        [self.character.as_str(), self.weapon.as_str(), self.room.as_str()]
    }

    /// The name this guess gives for `category`.
    #[must_use]
    pub fn name_for(&self, category: Category) -> &str {
        match category {
            Category::Character => self.character.as_str(),
            Category::Weapon => self.weapon.as_str(),
            Category::Room => self.room.as_str(),
        }
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with the {} in the {}", self.character, self.weapon, self.room)
    }
}

/// The hidden case file. Fixed for the lifetime of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    character: Card,
    weapon: Card,
    room: Card,
}

impl Solution {
    /// Fix a solution directly, e.g. to replay a known case file.
    #[must_use]
    pub fn new(character: Card, weapon: Card, room: Card) -> Self {
        debug_assert_eq!(character.category, Category::Character);
        debug_assert_eq!(weapon.category, Category::Weapon);
        debug_assert_eq!(room.category, Category::Room);
        Self {
            character,
            weapon,
            room,
        }
    }

    #[must_use]
    pub fn character(&self) -> &Card {
        &self.character
    }

    #[must_use]
    pub fn weapon(&self) -> &Card {
        &self.weapon
    }

    #[must_use]
    pub fn room(&self) -> &Card {
        &self.room
    }

    #[must_use]
    pub fn cards(&self) -> [&Card; 3] {
        [&self.character, &self.weapon, &self.room]
    }

    /// Exact match on all three names.
    #[must_use]
    pub fn matches(&self, guess: &Guess) -> bool {
        self.character.name == guess.character
            && self.weapon.name == guess.weapon
            && self.room.name == guess.room
    }

    #[must_use]
    pub fn as_guess(&self) -> Guess {
        Guess::new(&self.character.name, &self.weapon.name, &self.room.name)
    }
}

/// Shuffled cards left after the solution was drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

/// Shuffle the whole catalogue and draw the solution from it.
///
/// After an unbiased shuffle the first character, first weapon and first
/// room in shuffled order become the solution, so each card of a category
/// is equally likely to be picked. The rest stay in shuffled order.
pub fn build_deck(catalogue: &Catalogue, rng: &mut GameRng) -> Result<(Deck, Solution), GameError> {
    for category in Category::ALL {
        if catalogue.names(category).is_empty() {
            return Err(GameError::InsufficientCards { category });
        }
    }

    let mut cards: Vec<Card> = catalogue.cards().collect();
    rng.shuffle(&mut cards);

    let mut draw = |category: Category| -> Result<Card, GameError> {
        let pos = cards
            .iter()
            .position(|c| c.category == category)
            .ok_or(GameError::InsufficientCards { category })?;
        Ok(cards.remove(pos))
    };

    let solution = Solution {
        character: draw(Category::Character)?,
        weapon: draw(Category::Weapon)?,
        room: draw(Category::Room)?,
    };
    debug!(remaining = cards.len(), "solution drawn");

    Ok((Deck { cards }, solution))
}

/// Deal round-robin from seat 0 until the deck runs out.
#[must_use]
pub fn deal(deck: Deck, seat_count: usize) -> SeatMap<Vec<Card>> {
    let mut hands: SeatMap<Vec<Card>> = SeatMap::with_default(seat_count);
    for (i, card) in deck.cards.into_iter().enumerate() {
        hands[SeatId::new((i % seat_count) as u8)].push(card);
    }
    hands
}
