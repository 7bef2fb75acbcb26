//! Cards and card categories.

use serde::{Deserialize, Serialize};

/// The three kinds of card in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Character,
    Weapon,
    Room,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Character, Category::Weapon, Category::Room];

    /// Plural heading used by checklists and menus.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Category::Character => "Characters",
            Category::Weapon => "Weapons",
            Category::Room => "Rooms",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Category::Character => "character",
            Category::Weapon => "weapon",
            Category::Room => "room",
        };
        f.write_str(s)
    }
}

/// A single card. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub category: Category,
    pub name: String,
}

impl Card {
    #[must_use]
    pub fn new(category: Category, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let card = Card::new(Category::Weapon, "Lead Pipe");
        assert_eq!(card.to_string(), "Lead Pipe (weapon)");
        assert_eq!(Category::Room.heading(), "Rooms");
    }

    #[test]
    fn test_category_serde_is_lowercase() {
        let json = serde_json::to_string(&Category::Character).unwrap();
        assert_eq!(json, "\"character\"");
    }
}
