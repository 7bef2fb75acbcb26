//! Canonical graph board.
//!
//! Nine room slots joined by named hallways. A hallway connects exactly two
//! rooms and is named `"<room a>-<room b>"` after them, so the same layout
//! works for any nine room names. A room already called that keeps the name
//! and the hallway gets a numbered suffix.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::location::{LocationKey, LocationKind};
use super::Topology;
use crate::core::GameError;

/// Room slots on the canonical board.
pub const GRAPH_ROOM_SLOTS: usize = 9;

// Slot order: Hall, Lounge, Dining Room, Kitchen, Ballroom, Conservatory,
// Billiard Room, Library, Study.
const HALLWAYS: [(usize, usize); 12] = [
    (0, 1),
    (0, 8),
    (0, 6),
    (1, 2),
    (2, 3),
    (2, 6),
    (3, 4),
    (4, 5),
    (4, 6),
    (6, 7),
    (7, 8),
    (5, 7),
];

/// Hallways seats start on, as indices into `HALLWAYS`.
const STARTS: [usize; 6] = [0, 3, 6, 11, 10, 1];

type Neighbors = SmallVec<[String; 4]>;

/// Fixed named-hallway board.
#[derive(Clone, Debug)]
pub struct GraphBoard {
    adjacency: FxHashMap<String, Neighbors>,
    kinds: FxHashMap<String, LocationKind>,
    /// Rooms in slot order, then hallways in table order.
    order: Vec<String>,
    starts: Vec<String>,
}

impl GraphBoard {
    /// Lay out exactly nine rooms on the canonical ring.
    pub fn build(rooms: &[String]) -> Result<Self, GameError> {
        if rooms.len() < GRAPH_ROOM_SLOTS {
            return Err(GameError::InsufficientRooms {
                found: rooms.len(),
                required: GRAPH_ROOM_SLOTS,
            });
        }
        if rooms.len() > GRAPH_ROOM_SLOTS {
            return Err(GameError::UnsupportedRoomCount {
                layout: "graph",
                found: rooms.len(),
            });
        }

        let mut adjacency: FxHashMap<String, Neighbors> = FxHashMap::default();
        let mut kinds = FxHashMap::default();
        let mut order = Vec::with_capacity(GRAPH_ROOM_SLOTS + HALLWAYS.len());

        for room in rooms {
            adjacency.insert(room.clone(), Neighbors::new());
            kinds.insert(room.clone(), LocationKind::Room(room.clone()));
            order.push(room.clone());
        }

        let mut hallway_names = Vec::with_capacity(HALLWAYS.len());
        for &(a, b) in &HALLWAYS {
            let (a, b) = (&rooms[a], &rooms[b]);
            let hallway = hallway_name(a, b, &kinds);

            adjacency.entry(a.clone()).or_default().push(hallway.clone());
            adjacency.entry(b.clone()).or_default().push(hallway.clone());
            adjacency.insert(hallway.clone(), SmallVec::from_vec(vec![a.clone(), b.clone()]));
            kinds.insert(hallway.clone(), LocationKind::Connector);
            order.push(hallway.clone());
            hallway_names.push(hallway);
        }

        let starts = STARTS.iter().map(|&i| hallway_names[i].clone()).collect();

        Ok(Self {
            adjacency,
            kinds,
            order,
            starts,
        })
    }

    fn lookup(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        self.order
            .iter()
            .find(|name| name.as_str() == input)
            .or_else(|| self.order.iter().find(|name| name.eq_ignore_ascii_case(input)))
            .map(String::as_str)
    }
}

/// `"<a>-<b>"`, suffixed until it clears every name already on the board.
fn hallway_name(a: &str, b: &str, taken: &FxHashMap<String, LocationKind>) -> String {
    let base = format!("{a}-{b}");
    if !taken.contains_key(&base) {
        return base;
    }
    (1..)
        .map(|n| format!("{base} hallway {n}"))
        .find(|name| !taken.contains_key(name))
        .unwrap_or(base)
}

impl Topology for GraphBoard {
    fn layout_name(&self) -> &'static str {
        "graph"
    }

    fn locations(&self) -> Vec<LocationKey> {
        self.order.iter().map(LocationKey::named).collect()
    }

    fn kind(&self, loc: &LocationKey) -> Option<LocationKind> {
        self.kinds.get(loc.as_name()?).cloned()
    }

    fn neighbors(&self, loc: &LocationKey) -> Vec<LocationKey> {
        loc.as_name()
            .and_then(|name| self.adjacency.get(name))
            .map(|ns| ns.iter().map(LocationKey::named).collect())
            .unwrap_or_default()
    }

    fn is_legal_move(&self, from: &LocationKey, to: &LocationKey) -> bool {
        match (from.as_name(), to.as_name()) {
            (Some(from), Some(to)) => self
                .adjacency
                .get(from)
                .is_some_and(|ns| ns.iter().any(|n| n == to)),
            _ => false,
        }
    }

    fn room_location(&self, room: &str) -> Option<LocationKey> {
        match self.kinds.get(room)? {
            LocationKind::Room(_) => Some(LocationKey::named(room)),
            LocationKind::Connector => None,
        }
    }

    fn starting_locations(&self) -> Vec<LocationKey> {
        self.starts.iter().map(LocationKey::named).collect()
    }

    fn locate(&self, input: &str) -> Option<LocationKey> {
        self.lookup(input).map(LocationKey::named)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::is_connected;
    use crate::cards::Catalogue;

    fn board() -> GraphBoard {
        GraphBoard::build(&Catalogue::default().rooms).unwrap()
    }

    #[test]
    fn test_classic_layout() {
        let b = board();
        assert_eq!(b.locations().len(), 9 + 12);

        let hall = LocationKey::named("Hall");
        let mut ns: Vec<_> = b.neighbors(&hall).iter().map(ToString::to_string).collect();
        ns.sort();
        assert_eq!(ns, vec!["Hall-Billiard Room", "Hall-Lounge", "Hall-Study"]);

        let hallway = LocationKey::named("Library-Study");
        assert_eq!(b.kind(&hallway), Some(LocationKind::Connector));
        assert_eq!(b.neighbors(&hallway).len(), 2);
    }

    #[test]
    fn test_moves_follow_hallways() {
        let b = board();
        let hall = LocationKey::named("Hall");
        let lounge = LocationKey::named("Lounge");
        let hl = LocationKey::named("Hall-Lounge");

        assert!(b.is_legal_move(&hall, &hl));
        assert!(b.is_legal_move(&hl, &lounge));
        assert!(!b.is_legal_move(&hall, &lounge));
        assert!(!b.is_legal_move(&hall, &hall));
        assert!(!b.is_legal_move(&hall, &LocationKey::named("Attic")));
        assert!(!b.is_legal_move(&hall, &LocationKey::cell(0, 0)));
    }

    #[test]
    fn test_unknown_location_has_no_neighbors() {
        let b = board();
        assert!(b.neighbors(&LocationKey::named("Attic")).is_empty());
        assert!(b.kind(&LocationKey::named("Attic")).is_none());
    }

    #[test]
    fn test_starts_are_connectors() {
        let b = board();
        let starts = b.starting_locations();
        assert_eq!(starts.len(), 6);
        assert_eq!(starts[0], LocationKey::named("Hall-Lounge"));
        assert_eq!(starts[5], LocationKey::named("Hall-Study"));
        for s in &starts {
            assert_eq!(b.kind(s), Some(LocationKind::Connector));
        }
    }

    #[test]
    fn test_custom_room_names() {
        let rooms: Vec<String> = (1..=9).map(|i| format!("Vault {i}")).collect();
        let b = GraphBoard::build(&rooms).unwrap();
        assert!(b.is_legal_move(&LocationKey::named("Vault 1"), &LocationKey::named("Vault 1-Vault 2")));
    }

    #[test]
    fn test_room_named_like_a_hallway_stays_a_room() {
        let mut rooms = Catalogue::default().rooms;
        rooms[7] = "Hall-Lounge".to_string();
        let b = GraphBoard::build(&rooms).unwrap();

        let room = LocationKey::named("Hall-Lounge");
        assert_eq!(b.kind(&room), Some(LocationKind::Room("Hall-Lounge".into())));
        assert_eq!(b.locations().len(), 9 + 12);
        assert!(is_connected(&b));

        let hallway = LocationKey::named("Hall-Lounge hallway 1");
        assert_eq!(b.kind(&hallway), Some(LocationKind::Connector));
        assert!(b.is_legal_move(&LocationKey::named("Hall"), &hallway));
        assert!(!b.is_legal_move(&LocationKey::named("Hall"), &room));
        assert_eq!(b.starting_locations()[0], hallway);
    }

    #[test]
    fn test_room_count_limits() {
        let eight: Vec<String> = (0..8).map(|i| i.to_string()).collect();
        assert!(matches!(
            GraphBoard::build(&eight),
            Err(GameError::InsufficientRooms { found: 8, required: 9 })
        ));

        let ten: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        assert!(matches!(
            GraphBoard::build(&ten),
            Err(GameError::UnsupportedRoomCount { found: 10, .. })
        ));
    }

    #[test]
    fn test_locate_is_case_insensitive() {
        let b = board();
        assert_eq!(b.locate(" dining room "), Some(LocationKey::named("Dining Room")));
        assert_eq!(b.locate("Hall-Study"), Some(LocationKey::named("Hall-Study")));
        assert_eq!(b.locate("Attic"), None);
        assert_eq!(b.room_location("Study"), Some(LocationKey::named("Study")));
        assert_eq!(b.room_location("Hall-Study"), None);
    }
}
