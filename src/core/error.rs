//! Error taxonomy.
//!
//! Initialization errors (`InsufficientRooms`, `InsufficientCards`, ...) mean
//! no valid game can be built and surface to the operator. In-turn problems
//! such as an illegal move are not errors at all; they come back as rejected
//! outcomes from the turn engine.

use thiserror::Error;

use crate::cards::Category;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("at least {required} rooms are needed to build the board, got {found}")]
    InsufficientRooms { found: usize, required: usize },

    #[error("the {layout} layout cannot place {found} rooms")]
    UnsupportedRoomCount { layout: &'static str, found: usize },

    #[error("the {category} list is empty, cannot draw a solution card")]
    InsufficientCards { category: Category },

    #[error("card name [{name}] appears more than once in the catalogue")]
    DuplicateCard { name: String },

    #[error("player count must be between {min} and {max}, got {found}")]
    InvalidPlayerCount { found: usize, min: usize, max: usize },

    #[error("catalogue source gave up on {category} after {attempts} attempts")]
    CatalogueUnavailable { category: Category, attempts: u32 },

    #[error("collaborator failed: {0}")]
    Collaborator(String),

    #[error("{0} cannot act, it is not their turn")]
    NotYourTurn(crate::core::SeatId),

    #[error("the game is already over")]
    GameOver,

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
