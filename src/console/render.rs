//! Plain-text views of the table.

use std::fmt::Write as _;

use crate::board::{Board, GridBoard, GridPos, LocationKind, Topology};
use crate::core::{Player, SeatMap};
use crate::rules::{ActionOutcome, GameResult, WinReason};

/// Board with every seat's position.
#[must_use]
pub fn render_board(board: &Board, players: &SeatMap<Player>) -> String {
    match board {
        Board::Graph(_) => render_locations(board, players),
        Board::Grid(grid) => render_grid(grid, players),
    }
}

fn render_locations(board: &Board, players: &SeatMap<Player>) -> String {
    let mut out = String::from("--- Board ---\n");
    for loc in board.locations() {
        let here: Vec<&str> = players
            .values()
            .filter(|p| p.location == loc)
            .map(|p| p.name.as_str())
            .collect();
        let is_room = matches!(board.kind(&loc), Some(LocationKind::Room(_)));
        if !is_room && here.is_empty() {
            continue;
        }
        let _ = write!(out, "  {loc}");
        if !here.is_empty() {
            let _ = write!(out, ": {}", here.join(", "));
        }
        out.push('\n');
    }
    out
}

fn room_glyph(index: usize) -> char {
    const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    GLYPHS.get(index).map_or('*', |&b| char::from(b))
}

/// Rooms as letters, corridors as `.`, blocked corners as space, seats as
/// their 1-based number.
fn render_grid(grid: &GridBoard, players: &SeatMap<Player>) -> String {
    let mut out = String::from("--- Board ---\n");
    for row in 0..grid.rows() {
        out.push_str("  ");
        for col in 0..grid.cols() {
            let pos = GridPos::new(row, col);
            let seat = players
                .iter()
                .find(|(_, p)| p.location.as_cell() == Some(pos))
                .map(|(seat, _)| seat);
            let glyph = match (seat, grid.room_index_at(pos)) {
                (Some(seat), _) => char::from_digit(u32::from(seat.0) + 1, 10).unwrap_or('@'),
                (None, Some(room)) => room_glyph(room),
                (None, None) if grid.is_passable(pos) => '.',
                (None, None) => ' ',
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    for (i, room) in grid.rooms().iter().enumerate() {
        let _ = writeln!(out, "  {} = {room}", room_glyph(i));
    }
    for (seat, player) in players.iter() {
        let _ = writeln!(out, "  {} = {} at {}", seat.0 + 1, player.name, player.location);
    }
    out
}

/// The seat's own cards.
#[must_use]
pub fn render_hand(player: &Player) -> String {
    let mut out = format!("{}'s cards:\n", player.name);
    for card in player.hand() {
        let _ = writeln!(out, "  {card}");
    }
    out
}

/// The turn menu.
#[must_use]
pub fn render_menu() -> &'static str {
    "1. Move\n2. Make a suggestion\n3. Make an accusation\n4. Show checklist\n5. End turn\n"
}

/// What the acting seat is told after an action.
#[must_use]
pub fn describe_outcome(outcome: &ActionOutcome, players: &SeatMap<Player>) -> String {
    match outcome {
        ActionOutcome::Moved { to } => format!("You moved to {to}."),
        ActionOutcome::MoveRejected { to, reason } => {
            format!("You cannot move to {to} ({reason:?}).")
        }
        ActionOutcome::Suggested { guess, disproof: Some(d) } => {
            let by = players.get(d.by).map_or("Someone", |p| p.name.as_str());
            format!("You suggested {guess}.\n{by} showed you: {}", d.card)
        }
        ActionOutcome::Suggested { guess, disproof: None } => {
            format!("You suggested {guess}.\nNo one could disprove it.")
        }
        ActionOutcome::SuggestionRejected(reason) => format!("Suggestion not allowed: {reason:?}"),
        ActionOutcome::AccusationCorrect => "Correct! You solved the case.".to_string(),
        ActionOutcome::AccusationWrong => "Wrong. You are out of the game.".to_string(),
        ActionOutcome::Checklist(snapshot) => snapshot.to_string(),
        ActionOutcome::TurnEnded => "Turn over.".to_string(),
    }
}

/// Final announcement.
#[must_use]
pub fn describe_result(result: &GameResult, players: &SeatMap<Player>) -> String {
    match result {
        GameResult::Winner { seat, reason } => {
            let name = players.get(*seat).map_or("Unknown", |p| p.name.as_str());
            match reason {
                WinReason::Accusation => format!("{name} wins by solving the case!"),
                WinReason::LastStanding => format!("{name} wins as the last detective standing!"),
            }
        }
        GameResult::Draw => "Everyone was eliminated. Nobody wins.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::LocationKey;
    use crate::cards::{Card, Catalogue, Category};
    use crate::core::{Layout, SeatId};

    fn players(locations: &[LocationKey]) -> SeatMap<Player> {
        SeatMap::new(locations.len(), |seat| {
            Player::new(format!("P{}", seat.0 + 1), "Mr. Green", locations[seat.index()].clone())
        })
    }

    #[test]
    fn test_graph_board_lists_rooms_and_occupied_hallways() {
        let board = Board::build(Layout::Graph, &Catalogue::default().rooms).unwrap();
        let text = render_board(
            &board,
            &players(&[LocationKey::named("Hall"), LocationKey::named("Library-Study")]),
        );
        assert!(text.contains("  Hall: P1\n"));
        assert!(text.contains("  Library-Study: P2\n"));
        assert!(text.contains("  Kitchen\n"));
        assert!(!text.contains("Kitchen-Ballroom"));
    }

    #[test]
    fn test_grid_board_glyphs() {
        let board = Board::build(Layout::Grid { room_rows: 1, room_cols: 1 }, &Catalogue::default().rooms)
            .unwrap();
        let text = render_board(&board, &players(&[LocationKey::cell(0, 1)]));
        let lines: Vec<&str> = text.lines().collect();
        // 3 bands of 1-row rooms: 7 rows, 7 cols.
        assert_eq!(lines[1], "   1.... ");
        assert_eq!(lines[2], "  .A.B.C.");
        assert!(text.contains("  A = Hall\n"));
        assert!(text.contains(&format!("  1 = P1 at {}\n", LocationKey::cell(0, 1))));
    }

    #[test]
    fn test_hand_and_outcome_text() {
        let mut p = Player::new("Ann", "Miss Scarlet", LocationKey::named("Hall"));
        p.receive(Card::new(Category::Weapon, "Rope"));
        assert_eq!(render_hand(&p), "Ann's cards:\n  Rope (weapon)\n");

        let seats = players(&[LocationKey::named("Hall")]);
        let result = GameResult::Winner { seat: SeatId::new(0), reason: WinReason::LastStanding };
        assert_eq!(describe_result(&result, &seats), "P1 wins as the last detective standing!");
        assert!(describe_outcome(&ActionOutcome::TurnEnded, &seats).contains("Turn over"));
    }
}
