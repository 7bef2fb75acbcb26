//! Game configuration.
//!
//! `GameConfig` collects everything a session needs besides the card
//! catalogue: seat count and names, board layout, RNG seed and how hard to
//! try the external catalogue source. It can be built in code with the
//! `with_*` methods or loaded from TOML:
//!
//! ```
//! use rust_clue::core::{GameConfig, Layout};
//!
//! let config = GameConfig::from_toml_str(r#"
//!     player_count = 3
//!     player_names = ["Ann", "Bo", "Cy"]
//!     seed = 9
//!     [layout]
//!     kind = "grid"
//!     room_rows = 3
//!     room_cols = 4
//! "#).unwrap();
//!
//! assert_eq!(config.player_count, 3);
//! assert_eq!(config.layout, Layout::Grid { room_rows: 3, room_cols: 4 });
//! ```

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Fewest seats a game can have.
pub const MIN_PLAYERS: usize = 2;
/// Most seats a game can have.
pub const MAX_PLAYERS: usize = 6;

/// Which board flavor to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Layout {
    /// Canonical named-room ring joined by named hallways.
    #[default]
    Graph,
    /// Coordinate grid; each room is a `room_rows` x `room_cols` block.
    Grid { room_rows: u16, room_cols: u16 },
}

impl Layout {
    /// Grid layout with 3x4 room blocks.
    #[must_use]
    pub const fn default_grid() -> Self {
        Layout::Grid {
            room_rows: 3,
            room_cols: 4,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Layout::Graph => "graph",
            Layout::Grid { .. } => "grid",
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of seats (2-6).
    pub player_count: usize,

    /// Display names by seat. Missing names become `Player N`.
    pub player_names: Vec<String>,

    pub layout: Layout,

    /// RNG seed. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Attempts per category before falling back to the built-in catalogue.
    pub catalogue_retries: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 3,
            player_names: Vec::new(),
            layout: Layout::Graph,
            seed: None,
            catalogue_retries: 3,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Parse a TOML document. Absent keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, GameError> {
        Ok(toml::from_str(text)?)
    }

    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_catalogue_retries(mut self, retries: u32) -> Self {
        self.catalogue_retries = retries;
        self
    }

    /// Check the seat count is playable.
    pub fn validate(&self) -> Result<(), GameError> {
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            Ok(())
        } else {
            Err(GameError::InvalidPlayerCount {
                found: self.player_count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            })
        }
    }

    /// Display name for a seat index.
    #[must_use]
    pub fn player_name(&self, index: usize) -> String {
        self.player_names
            .get(index)
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map_or_else(|| format!("Player {}", index + 1), str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = GameConfig::new(4)
            .with_names(["Ann", "Bo"])
            .with_layout(Layout::default_grid())
            .with_seed(11)
            .with_catalogue_retries(1);

        assert_eq!(config.player_count, 4);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.catalogue_retries, 1);
        assert_eq!(config.layout.name(), "grid");
        assert_eq!(config.player_name(1), "Bo");
        assert_eq!(config.player_name(3), "Player 4");
    }

    #[test]
    fn test_blank_name_falls_back() {
        let config = GameConfig::new(2).with_names(["  ", "Zed"]);
        assert_eq!(config.player_name(0), "Player 1");
        assert_eq!(config.player_name(1), "Zed");
    }

    #[test]
    fn test_validate_player_count() {
        assert!(GameConfig::new(2).validate().is_ok());
        assert!(GameConfig::new(6).validate().is_ok());
        assert!(matches!(
            GameConfig::new(1).validate(),
            Err(GameError::InvalidPlayerCount { found: 1, .. })
        ));
        assert!(GameConfig::new(7).validate().is_err());
    }

    #[test]
    fn test_toml_defaults() {
        let config = GameConfig::from_toml_str("player_count = 5").unwrap();
        assert_eq!(config.player_count, 5);
        assert_eq!(config.layout, Layout::Graph);
        assert_eq!(config.catalogue_retries, 3);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_toml_rejects_garbage() {
        assert!(matches!(
            GameConfig::from_toml_str("player_count = \"many\""),
            Err(GameError::Config(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig::new(3).with_layout(Layout::default_grid());
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
