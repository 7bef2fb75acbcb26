//! Card system: categories, catalogue, deck and solution.
//!
//! ## Key Types
//!
//! - `Card`: a category plus a name
//! - `Catalogue`: ordered names per category for one game
//! - `Deck` / `Solution`: the shuffled dealing deck and the hidden case file
//! - `Guess`: a character/weapon/room triple named by a player

pub mod card;
pub mod catalogue;
pub mod deck;

pub use card::{Card, Category};
pub use catalogue::{Catalogue, DEFAULT_CHARACTER_COUNT, DEFAULT_ROOM_COUNT, DEFAULT_WEAPON_COUNT};
pub use deck::{build_deck, deal, Deck, Guess, Solution};
