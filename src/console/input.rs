//! Hot-seat console player: every seat types at the same terminal.

use std::io::{BufRead, Write};

use tracing::warn;

use super::render::{describe_outcome, render_board, render_hand, render_menu};
use crate::board::Topology;
use crate::cards::{Card, Catalogue, Category, Guess};
use crate::core::{Player, SeatId, SeatMap};
use crate::rules::{Action, ActionOutcome, TurnInput, TurnView};

/// Reads menu choices from `input` and writes prompts to `output`.
///
/// Closing the input forfeits: every remaining seat makes an empty
/// accusation, which eliminates it and lets the game finish.
pub struct ConsoleInput<R, W> {
    input: R,
    output: W,
    /// Copy of the seat table taken at each prompt, for naming seats in
    /// messages printed from `observe`.
    players: Option<SeatMap<Player>>,
    closed: bool,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            players: None,
            closed: false,
        }
    }

    /// Give back the output, e.g. to inspect what a test run printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = write!(self.output, "{text}").and_then(|()| self.output.flush()) {
            warn!(error = %e, "console write failed");
        }
    }

    /// Next trimmed line, `None` once input is closed.
    fn read_line(&mut self) -> Option<String> {
        if self.closed {
            return None;
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                self.closed = true;
                None
            }
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                warn!(error = %e, "console read failed");
                self.closed = true;
                None
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Option<String> {
        self.say(text);
        self.read_line()
    }

    /// Pick a name from `category`, by number or by (case-insensitive) name.
    fn pick_name(&mut self, catalogue: &Catalogue, category: Category) -> Option<String> {
        let names = catalogue.names(category).to_vec();
        let mut listing = format!("{}:\n", category.heading());
        for (i, name) in names.iter().enumerate() {
            listing.push_str(&format!("  {}. {name}\n", i + 1));
        }
        self.say(&listing);

        loop {
            let answer = self.prompt(&format!("Choose a {category}: "))?;
            let picked = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| names.get(i))
                .or_else(|| names.iter().find(|n| n.eq_ignore_ascii_case(&answer)));
            match picked {
                Some(name) => return Some(name.clone()),
                None => self.say("Not on the list, try again.\n"),
            }
        }
    }

    fn pick_guess(&mut self, catalogue: &Catalogue) -> Option<Guess> {
        Some(Guess::new(
            self.pick_name(catalogue, Category::Character)?,
            self.pick_name(catalogue, Category::Weapon)?,
            self.pick_name(catalogue, Category::Room)?,
        ))
    }

    fn pick_destination(&mut self, view: &TurnView<'_>) -> Option<Action> {
        let reachable = view.reachable();
        let mut listing = String::from("You can move to:\n");
        for loc in &reachable {
            listing.push_str(&format!("  {loc}\n"));
        }
        self.say(&listing);

        let answer = self.prompt("Destination (name or row,col): ")?;
        match view.board.locate(&answer) {
            Some(to) => Some(Action::Move(to)),
            None => {
                self.say(&format!("There is no place called [{answer}].\n"));
                None
            }
        }
    }

    fn forfeit() -> Action {
        Action::Accuse(Guess::new("", "", ""))
    }
}

impl<R: BufRead, W: Write> TurnInput for ConsoleInput<R, W> {
    fn choose_action(&mut self, view: &TurnView<'_>) -> Action {
        self.players = Some(view.state.players.clone());
        let player = view.player();
        let header = format!(
            "\n=== Turn {}: {} ({}) at {} ===\n",
            view.state.turn_number, player.name, player.character, player.location
        );
        self.say(&header);
        self.say(&render_board(view.board, &view.state.players));
        self.say(&render_hand(player));

        loop {
            if self.closed {
                return Self::forfeit();
            }
            let Some(choice) = self.prompt(&format!("{}> ", render_menu())) else {
                return Self::forfeit();
            };
            let action = match choice.as_str() {
                "1" => self.pick_destination(view),
                "2" => self.pick_guess(view.catalogue).map(Action::Suggest),
                "3" => self.pick_guess(view.catalogue).map(Action::Accuse),
                "4" => Some(Action::ViewChecklist),
                "5" => Some(Action::EndTurn),
                _ => {
                    self.say("Please enter a number from 1 to 5.\n");
                    None
                }
            };
            if let Some(action) = action {
                return action;
            }
        }
    }

    fn choose_reveal(&mut self, revealer: SeatId, suggester: SeatId, matching: &[Card]) -> usize {
        let (from, to) = match &self.players {
            Some(players) => (
                players[revealer].name.clone(),
                players[suggester].name.clone(),
            ),
            None => (revealer.to_string(), suggester.to_string()),
        };
        if matching.len() == 1 {
            self.say(&format!("{from} must show {to} a card.\n"));
            return 0;
        }

        let mut listing = format!("{from}, choose a card to show {to}:\n");
        for (i, card) in matching.iter().enumerate() {
            listing.push_str(&format!("  {}. {card}\n", i + 1));
        }
        self.say(&listing);
        loop {
            let Some(answer) = self.prompt("> ") else {
                return 0;
            };
            match answer.parse::<usize>() {
                Ok(n) if (1..=matching.len()).contains(&n) => return n - 1,
                _ => self.say("Pick one of the numbers shown.\n"),
            }
        }
    }

    fn observe(&mut self, _seat: SeatId, outcome: &ActionOutcome) {
        let text = match &self.players {
            Some(players) => describe_outcome(outcome, players),
            None => return,
        };
        self.say(&text);
        self.say("\n");
    }
}
