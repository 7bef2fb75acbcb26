//! Per-seat player state.

use serde::{Deserialize, Serialize};

use crate::board::LocationKey;
use crate::cards::Card;

/// One seat at the table.
///
/// `location` and `hand` change during play. `eliminated` only ever goes
/// from false to true: an eliminated seat takes no more turns but keeps its
/// hand, which still answers other seats' suggestions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Character card name this seat plays as.
    pub character: String,
    hand: Vec<Card>,
    eliminated: bool,
    pub location: LocationKey,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, character: impl Into<String>, location: LocationKey) -> Self {
        Self {
            name: name.into(),
            character: character.into(),
            hand: Vec::new(),
            eliminated: false,
            location,
        }
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    #[must_use]
    pub fn holds(&self, name: &str) -> bool {
        self.hand.iter().any(|c| c.name == name)
    }

    /// Cards in hand whose names appear in `names`, in hand order.
    pub fn matching<'a>(&'a self, names: &'a [&'a str]) -> impl Iterator<Item = &'a Card> + 'a {
        self.hand.iter().filter(move |c| names.contains(&c.name.as_str()))
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.eliminated
    }

    pub fn eliminate(&mut self) {
        self.eliminated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;

    fn sample() -> Player {
        let mut p = Player::new("Ann", "Miss Scarlet", LocationKey::named("Hall-Lounge"));
        p.receive(Card::new(Category::Weapon, "Rope"));
        p.receive(Card::new(Category::Room, "Study"));
        p
    }

    #[test]
    fn test_hand_queries() {
        let p = sample();
        assert_eq!(p.hand().len(), 2);
        assert!(p.holds("Rope"));
        assert!(!p.holds("Dagger"));

        let names = ["Study", "Dagger", "Rope"];
        let matched: Vec<_> = p.matching(&names).map(|c| c.name.as_str()).collect();
        assert_eq!(matched, vec!["Rope", "Study"]);
    }

    #[test]
    fn test_elimination_is_one_way() {
        let mut p = sample();
        assert!(p.is_active());
        p.eliminate();
        p.eliminate();
        assert!(p.is_eliminated());
        assert_eq!(p.hand().len(), 2);
    }
}
