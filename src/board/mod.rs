//! Board topology.
//!
//! Two flavors sit behind one [`Topology`] contract so the turn engine never
//! needs to know which is active:
//!
//! - [`GraphBoard`]: nine rooms on a fixed ring joined by named hallways
//! - [`GridBoard`]: rooms as rectangular blocks on a cell grid
//!
//! Unknown locations are never an error. They simply have no neighbors and
//! every move to or from them is illegal.

pub mod graph;
pub mod grid;
pub mod location;

pub use graph::{GraphBoard, GRAPH_ROOM_SLOTS};
pub use grid::{GridBoard, GRID_MIN_ROOMS};
pub use location::{GridPos, LocationKey, LocationKind};

use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::debug;

use crate::core::{GameError, Layout};

/// Connectivity and move legality over a set of locations.
///
/// ## Implementation Notes
///
/// - `neighbors` never contains the location itself and has no duplicates
/// - `is_adjacent` must be symmetric
/// - `is_legal_move` may allow moves beyond `neighbors` (a grid room allows
///   staying put), never fewer
pub trait Topology {
    /// Short flavor name for logs and errors.
    fn layout_name(&self) -> &'static str;

    /// Every passable location.
    fn locations(&self) -> Vec<LocationKey>;

    /// Room or connector. `None` for unknown locations.
    fn kind(&self, loc: &LocationKey) -> Option<LocationKind>;

    /// Locations one move away. Empty for unknown locations.
    fn neighbors(&self, loc: &LocationKey) -> Vec<LocationKey>;

    fn is_adjacent(&self, a: &LocationKey, b: &LocationKey) -> bool {
        self.neighbors(a).contains(b)
    }

    fn is_legal_move(&self, from: &LocationKey, to: &LocationKey) -> bool;

    /// Where a token summoned into `room` by a suggestion is placed.
    fn room_location(&self, room: &str) -> Option<LocationKey>;

    /// Fixed starting places; seat `i` starts at `starts[i % starts.len()]`.
    fn starting_locations(&self) -> Vec<LocationKey>;

    /// Resolve a destination typed by a player.
    fn locate(&self, input: &str) -> Option<LocationKey>;

    /// Name of the room `loc` belongs to, if it is a room.
    fn room_at(&self, loc: &LocationKey) -> Option<String> {
        match self.kind(loc)? {
            LocationKind::Room(name) => Some(name),
            LocationKind::Connector => None,
        }
    }
}

/// Breadth-first check that every location reaches every other.
pub fn is_connected<T: Topology + ?Sized>(topology: &T) -> bool {
    let all = topology.locations();
    let Some(first) = all.first() else {
        return true;
    };

    let mut seen: FxHashSet<LocationKey> = FxHashSet::default();
    let mut queue = VecDeque::from([first.clone()]);
    seen.insert(first.clone());

    while let Some(loc) = queue.pop_front() {
        for next in topology.neighbors(&loc) {
            if seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }
    seen.len() == all.len()
}

/// The active board, whichever flavor was configured.
#[derive(Clone, Debug)]
pub enum Board {
    Graph(GraphBoard),
    Grid(GridBoard),
}

impl Board {
    /// Build the configured flavor from an ordered list of room names.
    pub fn build(layout: Layout, rooms: &[String]) -> Result<Self, GameError> {
        let board = match layout {
            Layout::Graph => Board::Graph(GraphBoard::build(rooms)?),
            Layout::Grid {
                room_rows,
                room_cols,
            } => Board::Grid(GridBoard::build(rooms, room_rows, room_cols)?),
        };
        debug_assert!(is_connected(&board), "board must be connected");
        debug!(layout = board.layout_name(), rooms = rooms.len(), "board built");
        Ok(board)
    }

    fn inner(&self) -> &dyn Topology {
        match self {
            Board::Graph(b) => b,
            Board::Grid(b) => b,
        }
    }
}

impl Topology for Board {
    fn layout_name(&self) -> &'static str {
        self.inner().layout_name()
    }

    fn locations(&self) -> Vec<LocationKey> {
        self.inner().locations()
    }

    fn kind(&self, loc: &LocationKey) -> Option<LocationKind> {
        self.inner().kind(loc)
    }

    fn neighbors(&self, loc: &LocationKey) -> Vec<LocationKey> {
        self.inner().neighbors(loc)
    }

    fn is_adjacent(&self, a: &LocationKey, b: &LocationKey) -> bool {
        self.inner().is_adjacent(a, b)
    }

    fn is_legal_move(&self, from: &LocationKey, to: &LocationKey) -> bool {
        self.inner().is_legal_move(from, to)
    }

    fn room_location(&self, room: &str) -> Option<LocationKey> {
        self.inner().room_location(room)
    }

    fn starting_locations(&self) -> Vec<LocationKey> {
        self.inner().starting_locations()
    }

    fn locate(&self, input: &str) -> Option<LocationKey> {
        self.inner().locate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Catalogue;

    #[test]
    fn test_build_both_flavors() {
        let rooms = Catalogue::default().rooms;

        let graph = Board::build(Layout::Graph, &rooms).unwrap();
        assert_eq!(graph.layout_name(), "graph");
        assert!(is_connected(&graph));

        let grid = Board::build(Layout::default_grid(), &rooms).unwrap();
        assert_eq!(grid.layout_name(), "grid");
        assert!(is_connected(&grid));
    }

    #[test]
    fn test_room_at() {
        let board = Board::build(Layout::Graph, &Catalogue::default().rooms).unwrap();
        assert_eq!(board.room_at(&LocationKey::named("Kitchen")), Some("Kitchen".into()));
        assert_eq!(board.room_at(&LocationKey::named("Kitchen-Ballroom")), None);
        assert_eq!(board.room_at(&LocationKey::named("Nowhere")), None);
    }

    #[test]
    fn test_insufficient_rooms_for_either_flavor() {
        let rooms: Vec<String> = vec!["Only".into()];
        for layout in [Layout::Graph, Layout::default_grid()] {
            assert!(matches!(
                Board::build(layout, &rooms),
                Err(GameError::InsufficientRooms { found: 1, required: 9 })
            ));
        }
    }
}
