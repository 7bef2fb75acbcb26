//! Coordinate grid board.
//!
//! Rooms are rectangular blocks placed three to a band, separated from each
//! other and from the edge by one-cell corridors. Every corridor cell is a
//! connector. The four outer corners are impassable.
//!
//! ```text
//!   ..............
//!  .AAAA.BBBB.CCCC.
//!  .AAAA.BBBB.CCCC.
//!  ................
//! ```
//!
//! Movement is one orthogonal step at a time, except that all cells of a
//! room count as one place: moving anywhere inside the same room is legal.
//! Two different rooms never connect directly.

use super::location::{GridPos, LocationKey, LocationKind};
use super::Topology;
use crate::core::GameError;

/// Fewest rooms a grid board accepts.
pub const GRID_MIN_ROOMS: usize = 9;

const ROOMS_PER_BAND: u16 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cell {
    Blocked,
    Corridor,
    Room(u16),
}

/// Parametric grid board.
#[derive(Clone, Debug)]
pub struct GridBoard {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
    rooms: Vec<String>,
    /// Top-left corner of each room block.
    origins: Vec<GridPos>,
    room_rows: u16,
    room_cols: u16,
}

impl GridBoard {
    /// Lay out `rooms` as `room_rows` x `room_cols` blocks.
    pub fn build(rooms: &[String], room_rows: u16, room_cols: u16) -> Result<Self, GameError> {
        if rooms.len() < GRID_MIN_ROOMS {
            return Err(GameError::InsufficientRooms {
                found: rooms.len(),
                required: GRID_MIN_ROOMS,
            });
        }
        let bands = u16::try_from(rooms.len().div_ceil(usize::from(ROOMS_PER_BAND)))
            .map_err(|_| GameError::UnsupportedRoomCount {
                layout: "grid",
                found: rooms.len(),
            })?;

        let (h, w) = (room_rows.max(1), room_cols.max(1));
        let too_big = || GameError::UnsupportedRoomCount {
            layout: "grid",
            found: rooms.len(),
        };
        let span = |blocks: u16, size: u16| u16::try_from(u32::from(blocks) * (u32::from(size) + 1) + 1);
        let rows = span(bands, h).map_err(|_| too_big())?;
        let cols = span(ROOMS_PER_BAND, w).map_err(|_| too_big())?;

        let mut board = Self {
            rows,
            cols,
            cells: vec![Cell::Corridor; usize::from(rows) * usize::from(cols)],
            rooms: rooms.to_vec(),
            origins: Vec::with_capacity(rooms.len()),
            room_rows: h,
            room_cols: w,
        };

        for index in 0..rooms.len() as u16 {
            let origin = GridPos::new(
                1 + (index / ROOMS_PER_BAND) * (h + 1),
                1 + (index % ROOMS_PER_BAND) * (w + 1),
            );
            for row in origin.row..origin.row + h {
                for col in origin.col..origin.col + w {
                    let i = board.offset(GridPos::new(row, col));
                    board.cells[i] = Cell::Room(index);
                }
            }
            board.origins.push(origin);
        }

        for corner in [
            GridPos::new(0, 0),
            GridPos::new(0, cols - 1),
            GridPos::new(rows - 1, 0),
            GridPos::new(rows - 1, cols - 1),
        ] {
            let i = board.offset(corner);
            board.cells[i] = Cell::Blocked;
        }

        Ok(board)
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Room names in placement order.
    #[must_use]
    pub fn rooms(&self) -> &[String] {
        &self.rooms
    }

    /// Index into `rooms()` of the room covering `pos`.
    #[must_use]
    pub fn room_index_at(&self, pos: GridPos) -> Option<usize> {
        match self.cell(pos)? {
            Cell::Room(i) => Some(usize::from(i)),
            _ => None,
        }
    }

    /// Whether `pos` is inside the grid and not blocked.
    #[must_use]
    pub fn is_passable(&self, pos: GridPos) -> bool {
        matches!(self.cell(pos), Some(Cell::Corridor | Cell::Room(_)))
    }

    fn offset(&self, pos: GridPos) -> usize {
        usize::from(pos.row) * usize::from(self.cols) + usize::from(pos.col)
    }

    fn cell(&self, pos: GridPos) -> Option<Cell> {
        (pos.row < self.rows && pos.col < self.cols).then(|| self.cells[self.offset(pos)])
    }

    fn room_cells(&self, index: usize) -> impl Iterator<Item = GridPos> + '_ {
        let origin = self.origins[index];
        (origin.row..origin.row + self.room_rows)
            .flat_map(move |r| (origin.col..origin.col + self.room_cols).map(move |c| GridPos::new(r, c)))
    }

    fn orthogonal(&self, pos: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        let GridPos { row, col } = pos;
        [
            row.checked_sub(1).map(|r| GridPos::new(r, col)),
            row.checked_add(1).map(|r| GridPos::new(r, col)),
            col.checked_sub(1).map(|c| GridPos::new(row, c)),
            col.checked_add(1).map(|c| GridPos::new(row, c)),
        ]
        .into_iter()
        .flatten()
        .filter(|p| self.is_passable(*p))
    }

    fn step_is_legal(&self, from: GridPos, to: GridPos) -> bool {
        let (Some(a), Some(b)) = (self.cell(from), self.cell(to)) else {
            return false;
        };
        match (a, b) {
            (Cell::Blocked, _) | (_, Cell::Blocked) => false,
            (Cell::Room(x), Cell::Room(y)) if x == y => true,
            _ if from.distance(to) != 1 => false,
            (Cell::Room(_), Cell::Room(_)) => false,
            _ => true,
        }
    }
}

impl Topology for GridBoard {
    fn layout_name(&self) -> &'static str {
        "grid"
    }

    fn locations(&self) -> Vec<LocationKey> {
        (0..self.rows)
            .flat_map(|r| (0..self.cols).map(move |c| GridPos::new(r, c)))
            .filter(|p| self.is_passable(*p))
            .map(LocationKey::Cell)
            .collect()
    }

    fn kind(&self, loc: &LocationKey) -> Option<LocationKind> {
        match self.cell(loc.as_cell()?)? {
            Cell::Blocked => None,
            Cell::Corridor => Some(LocationKind::Connector),
            Cell::Room(i) => Some(LocationKind::Room(self.rooms[usize::from(i)].clone())),
        }
    }

    fn neighbors(&self, loc: &LocationKey) -> Vec<LocationKey> {
        let Some(pos) = loc.as_cell().filter(|p| self.is_passable(*p)) else {
            return Vec::new();
        };

        let mut out: Vec<LocationKey> = Vec::new();
        if let Some(room) = self.room_index_at(pos) {
            out.extend(self.room_cells(room).filter(|p| *p != pos).map(LocationKey::Cell));
        }
        out.extend(
            self.orthogonal(pos)
                .filter(|p| self.room_index_at(*p).is_none() || self.room_index_at(*p) != self.room_index_at(pos))
                .filter(|p| self.step_is_legal(pos, *p))
                .map(LocationKey::Cell),
        );
        out
    }

    fn is_adjacent(&self, a: &LocationKey, b: &LocationKey) -> bool {
        a != b && self.is_legal_move(a, b)
    }

    fn is_legal_move(&self, from: &LocationKey, to: &LocationKey) -> bool {
        match (from.as_cell(), to.as_cell()) {
            (Some(from), Some(to)) => self.step_is_legal(from, to),
            _ => false,
        }
    }

    fn room_location(&self, room: &str) -> Option<LocationKey> {
        let index = self.rooms.iter().position(|r| r == room)?;
        let origin = self.origins[index];
        Some(LocationKey::cell(
            origin.row + self.room_rows / 2,
            origin.col + self.room_cols / 2,
        ))
    }

    fn starting_locations(&self) -> Vec<LocationKey> {
        let left = 1 + self.room_cols / 2;
        let right = self.cols - 2 - self.room_cols / 2;
        let middle = self.rows / 2;
        vec![
            LocationKey::cell(0, left),
            LocationKey::cell(0, right),
            LocationKey::cell(middle, self.cols - 1),
            LocationKey::cell(self.rows - 1, right),
            LocationKey::cell(self.rows - 1, left),
            LocationKey::cell(middle, 0),
        ]
    }

    fn locate(&self, input: &str) -> Option<LocationKey> {
        if let Some(pos) = GridPos::parse(input) {
            return self.is_passable(pos).then_some(LocationKey::Cell(pos));
        }
        let input = input.trim();
        let room = self.rooms.iter().find(|r| r.eq_ignore_ascii_case(input))?;
        self.room_location(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Catalogue;

    fn board() -> GridBoard {
        GridBoard::build(&Catalogue::default().rooms, 3, 4).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let b = board();
        assert_eq!(b.rows(), 3 * 4 + 1);
        assert_eq!(b.cols(), 3 * 5 + 1);
        assert_eq!(b.room_index_at(GridPos::new(1, 1)), Some(0));
        assert_eq!(b.room_index_at(GridPos::new(1, 6)), Some(1));
        assert_eq!(b.room_index_at(GridPos::new(5, 1)), Some(3));
        assert_eq!(b.room_index_at(GridPos::new(0, 1)), None);
        assert!(!b.is_passable(GridPos::new(0, 0)));
        assert!(!b.is_passable(GridPos::new(99, 0)));
    }

    #[test]
    fn test_room_transitions() {
        let b = board();
        let hall_a = LocationKey::cell(1, 1);
        let hall_b = LocationKey::cell(3, 4);
        let corridor = LocationKey::cell(0, 1);
        let corridor_next = LocationKey::cell(0, 2);
        let lounge = LocationKey::cell(1, 6);
        let gap = LocationKey::cell(1, 5);

        // within a room, any distance
        assert!(b.is_legal_move(&hall_a, &hall_b));
        assert!(b.is_legal_move(&hall_a, &hall_a));
        // room <-> corridor, one step
        assert!(b.is_legal_move(&hall_a, &corridor));
        assert!(b.is_legal_move(&corridor, &hall_a));
        // corridor <-> corridor
        assert!(b.is_legal_move(&corridor, &corridor_next));
        assert!(!b.is_legal_move(&corridor, &corridor));
        // two steps is too far
        assert!(!b.is_legal_move(&corridor, &LocationKey::cell(0, 3)));
        // room to different room through the gap only
        assert!(!b.is_legal_move(&hall_a, &lounge));
        assert!(b.is_legal_move(&LocationKey::cell(1, 4), &gap));
        assert!(b.is_legal_move(&gap, &lounge));
    }

    #[test]
    fn test_blocked_and_out_of_bounds() {
        let b = board();
        assert!(!b.is_legal_move(&LocationKey::cell(0, 1), &LocationKey::cell(0, 0)));
        assert!(!b.is_legal_move(&LocationKey::cell(12, 15), &LocationKey::cell(13, 15)));
        assert!(!b.is_legal_move(&LocationKey::cell(0, 1), &LocationKey::named("Hall")));
        assert!(b.neighbors(&LocationKey::cell(0, 0)).is_empty());
        assert!(b.neighbors(&LocationKey::cell(500, 500)).is_empty());
        assert!(b.kind(&LocationKey::cell(0, 0)).is_none());
    }

    #[test]
    fn test_room_neighbors_include_whole_room() {
        let b = board();
        let ns = b.neighbors(&LocationKey::cell(1, 1));
        // 11 other hall cells, plus corridor cells (0,1) and (1,0)
        assert_eq!(ns.len(), 11 + 2);
        assert!(ns.contains(&LocationKey::cell(3, 4)));
        assert!(ns.contains(&LocationKey::cell(1, 0)));
        assert!(!ns.contains(&LocationKey::cell(1, 1)));
    }

    #[test]
    fn test_more_than_nine_rooms() {
        let rooms: Vec<String> = (0..11).map(|i| format!("R{i}")).collect();
        let b = GridBoard::build(&rooms, 2, 2).unwrap();
        assert_eq!(b.rows(), 4 * 3 + 1);
        assert_eq!(b.room_location("R10"), Some(LocationKey::cell(10 + 1, 4 + 1)));
        assert_eq!(
            b.kind(&LocationKey::cell(10, 7)),
            Some(LocationKind::Connector),
            "unused block in the last band is corridor"
        );
    }

    #[test]
    fn test_too_few_rooms() {
        let rooms: Vec<String> = (0..3).map(|i| i.to_string()).collect();
        assert!(matches!(
            GridBoard::build(&rooms, 3, 4),
            Err(GameError::InsufficientRooms { found: 3, .. })
        ));
    }

    #[test]
    fn test_starts_are_corridors() {
        let b = board();
        for s in b.starting_locations() {
            assert_eq!(b.kind(&s), Some(LocationKind::Connector), "{s}");
        }
    }

    #[test]
    fn test_locate() {
        let b = board();
        assert_eq!(b.locate("0, 1"), Some(LocationKey::cell(0, 1)));
        assert_eq!(b.locate("0,0"), None);
        assert_eq!(b.locate("kitchen"), b.room_location("Kitchen"));
    }
}
