//! Core engine types: seats, players, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod seat;

pub use config::{GameConfig, Layout, MAX_PLAYERS, MIN_PLAYERS};
pub use error::GameError;
pub use player::Player;
pub use rng::GameRng;
pub use seat::{SeatId, SeatMap};
