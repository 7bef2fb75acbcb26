//! Card catalogue: the names available for one game.
//!
//! A catalogue comes either from the built-in classic set or from an
//! external generator (see [`crate::collab`]). The session validates it once
//! before anything is built from it.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, Category};
use crate::core::GameError;

/// Rooms the built-in catalogue and the canonical board expect.
pub const DEFAULT_ROOM_COUNT: usize = 9;
/// Weapons in the built-in catalogue.
pub const DEFAULT_WEAPON_COUNT: usize = 6;
/// Characters in the built-in catalogue.
pub const DEFAULT_CHARACTER_COUNT: usize = 6;

const CLASSIC_CHARACTERS: [&str; DEFAULT_CHARACTER_COUNT] = [
    "Miss Scarlet",
    "Colonel Mustard",
    "Mrs. White",
    "Mr. Green",
    "Mrs. Peacock",
    "Professor Plum",
];

const CLASSIC_WEAPONS: [&str; DEFAULT_WEAPON_COUNT] =
    ["Candlestick", "Dagger", "Lead Pipe", "Revolver", "Rope", "Wrench"];

const CLASSIC_ROOMS: [&str; DEFAULT_ROOM_COUNT] = [
    "Hall",
    "Lounge",
    "Dining Room",
    "Kitchen",
    "Ballroom",
    "Conservatory",
    "Billiard Room",
    "Library",
    "Study",
];

/// Ordered name lists per category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    pub characters: Vec<String>,
    pub weapons: Vec<String>,
    pub rooms: Vec<String>,
}

impl Default for Catalogue {
    /// The classic six suspects, six weapons and nine rooms.
    fn default() -> Self {
        Self::new(CLASSIC_CHARACTERS, CLASSIC_WEAPONS, CLASSIC_ROOMS)
    }
}

impl Catalogue {
    pub fn new<C, W, R>(characters: C, weapons: W, rooms: R) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            characters: characters.into_iter().map(Into::into).collect(),
            weapons: weapons.into_iter().map(Into::into).collect(),
            rooms: rooms.into_iter().map(Into::into).collect(),
        }
    }

    /// Names for one category.
    #[must_use]
    pub fn names(&self, category: Category) -> &[String] {
        match category {
            Category::Character => &self.characters,
            Category::Weapon => &self.weapons,
            Category::Room => &self.rooms,
        }
    }

    /// Replace one category's names.
    pub fn set_names(&mut self, category: Category, names: Vec<String>) {
        match category {
            Category::Character => self.characters = names,
            Category::Weapon => self.weapons = names,
            Category::Room => self.rooms = names,
        }
    }

    /// Every card, characters first, then weapons, then rooms.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        Category::ALL
            .into_iter()
            .flat_map(move |cat| self.names(cat).iter().map(move |n| Card::new(cat, n.as_str())))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len() + self.weapons.len() + self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.names(category).iter().any(|n| n == name)
    }

    /// Category of a card name, if it belongs to this catalogue.
    #[must_use]
    pub fn category_of(&self, name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|&cat| self.contains(cat, name))
    }

    /// Reject duplicate and blank names. Names double as checklist keys, so
    /// they must be unique across categories, not just within one.
    pub fn validate(&self) -> Result<(), GameError> {
        let mut seen = FxHashSet::default();
        for card in self.cards() {
            if card.name.trim().is_empty() || !seen.insert(card.name.clone()) {
                return Err(GameError::DuplicateCard { name: card.name });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        let cat = Catalogue::default();
        assert_eq!(cat.characters.len(), 6);
        assert_eq!(cat.weapons.len(), 6);
        assert_eq!(cat.rooms.len(), 9);
        assert_eq!(cat.len(), 21);
        assert!(cat.validate().is_ok());
    }

    #[test]
    fn test_cards_in_category_order() {
        let cat = Catalogue::new(["A"], ["B"], ["C", "D"]);
        let cards: Vec<_> = cat.cards().collect();
        assert_eq!(cards[0], Card::new(Category::Character, "A"));
        assert_eq!(cards[1], Card::new(Category::Weapon, "B"));
        assert_eq!(cards[3], Card::new(Category::Room, "D"));
    }

    #[test]
    fn test_category_lookup() {
        let cat = Catalogue::default();
        assert_eq!(cat.category_of("Rope"), Some(Category::Weapon));
        assert_eq!(cat.category_of("Study"), Some(Category::Room));
        assert_eq!(cat.category_of("Spoon"), None);
        assert!(cat.contains(Category::Character, "Mr. Green"));
        assert!(!cat.contains(Category::Room, "Mr. Green"));
    }

    #[test]
    fn test_duplicate_across_categories_rejected() {
        let cat = Catalogue::new(["Plum"], ["Plum"], ["Hall"]);
        assert!(matches!(
            cat.validate(),
            Err(GameError::DuplicateCard { name }) if name == "Plum"
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        let cat = Catalogue::new(["A"], [" "], ["Hall"]);
        assert!(cat.validate().is_err());
    }

    #[test]
    fn test_set_names() {
        let mut cat = Catalogue::default();
        cat.set_names(Category::Weapon, vec!["Spoon".into()]);
        assert_eq!(cat.names(Category::Weapon), ["Spoon".to_string()]);
    }
}
