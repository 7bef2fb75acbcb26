//! Location keys and kinds.

use serde::{Deserialize, Serialize};

/// A cell on a grid board (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub row: u16,
    pub col: u16,
}

impl GridPos {
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two cells.
    #[must_use]
    pub fn distance(self, other: GridPos) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }

    /// Parse `"row,col"` (spaces allowed around either number).
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let (row, col) = text.split_once(',').or_else(|| text.trim().split_once(' '))?;
        Some(Self::new(row.trim().parse().ok()?, col.trim().parse().ok()?))
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Stable identifier of a place on the board.
///
/// Graph boards name their locations; grid boards address cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocationKey {
    Named(String),
    Cell(GridPos),
}

impl LocationKey {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        LocationKey::Named(name.into())
    }

    #[must_use]
    pub const fn cell(row: u16, col: u16) -> Self {
        LocationKey::Cell(GridPos::new(row, col))
    }

    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            LocationKey::Named(name) => Some(name),
            LocationKey::Cell(_) => None,
        }
    }

    #[must_use]
    pub fn as_cell(&self) -> Option<GridPos> {
        match self {
            LocationKey::Cell(pos) => Some(*pos),
            LocationKey::Named(_) => None,
        }
    }
}

impl std::fmt::Display for LocationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationKey::Named(name) => f.write_str(name),
            LocationKey::Cell(pos) => write!(f, "({pos})"),
        }
    }
}

/// What kind of place a location is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    /// Part of the room with this room-card name.
    Room(String),
    /// A hallway square or hallway edge.
    Connector,
}

impl LocationKind {
    #[must_use]
    pub fn room_name(&self) -> Option<&str> {
        match self {
            LocationKind::Room(name) => Some(name),
            LocationKind::Connector => None,
        }
    }

    #[must_use]
    pub fn is_connector(&self) -> bool {
        matches!(self, LocationKind::Connector)
    }
}
