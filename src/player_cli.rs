use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::debug;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{parse_coordinate, Coordinate, HitOutcome, PlacementError},
    grid::{CellGrid, CellState},
    ui::{describe_outcome, render_enemy_view, render_own_board, LEGEND},
};

use crate::player::Player;

/// Human player typing commands on a line based terminal.
pub struct CliPlayer<R, W> {
    name: String,
    input: R,
    output: W,
    colored: bool,
    auto_place: bool,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player reading stdin and writing stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            name: "You".to_string(),
            input,
            output,
            colored: false,
            auto_place: false,
        }
    }

    /// Draw own ships in their colors.
    pub fn with_colors(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Skip interactive placement and scatter the fleet randomly.
    pub fn with_auto_place(mut self, auto_place: bool) -> Self {
        self.auto_place = auto_place;
        self
    }

    /// Recover the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) {
        self.write_text(text, true);
    }

    fn prompt(&mut self, text: &str) {
        self.write_text(text, false);
    }

    fn write_text(&mut self, text: &str, newline: bool) {
        let written = if newline {
            writeln!(self.output, "{text}")
        } else {
            write!(self.output, "{text}").and_then(|_| self.output.flush())
        };
        if let Err(e) = written {
            debug!("terminal write failed: {e}");
        }
    }

    /// Next input line, `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), PlacementError> {
        if self.auto_place {
            return board.populate(rng);
        }
        self.say("Place your ships. Type a cell (e.g. B7) to move the ship, r to rotate,");
        self.say("ok or enter to confirm, random to place the whole fleet randomly.");
        board.reset_fleet();
        while let Some(class) = board.next_pending_class() {
            let mut ship = match board.spawn_ship(class) {
                Ok(ship) => ship,
                Err(e) => {
                    self.say(&format!(
                        "Your layout leaves no room: {e}. Placing the whole fleet randomly."
                    ));
                    return board.populate(rng);
                }
            };
            loop {
                let view = render_own_board(board, Some(&ship), self.colored);
                self.say(&view);
                self.prompt(&format!(
                    "{} ({} cells) at {}: ",
                    class,
                    ship.length(),
                    ship.position()
                ));
                let Some(line) = self.read_line() else {
                    return board.populate(rng);
                };
                match line.to_ascii_lowercase().as_str() {
                    "" | "ok" => match board.add_ship(ship) {
                        Ok(_) => break,
                        Err(e) => {
                            self.say(&format!("Cannot place it here: {e}"));
                            ship = e.into_ship();
                        }
                    },
                    "r" | "rotate" => {
                        if !board.placement().rotate(&mut ship) {
                            self.say("There is no room to rotate here.");
                        }
                    }
                    "random" => return board.populate(rng),
                    _ => match parse_coordinate(&line, board.width(), board.height()) {
                        Ok(c) => {
                            if !board.placement().move_to(&mut ship, c.x, c.y) {
                                self.say("The ship would leave the board.");
                            }
                        }
                        Err(e) => self.say(&format!("Invalid input: {e}")),
                    },
                }
            }
        }
        Ok(())
    }

    fn select_target(&mut self, _rng: &mut SmallRng, enemy: &CellGrid) -> Option<Coordinate> {
        loop {
            self.say("Enemy waters:");
            self.say(&render_enemy_view(enemy));
            self.say(LEGEND);
            self.prompt("Your shot: ");
            let line = self.read_line()?;
            match parse_coordinate(&line, enemy.width(), enemy.height()) {
                Ok(c) if enemy[c] != CellState::Empty => {
                    self.say(&format!("{c} was already struck, pick another cell."));
                }
                Ok(c) => return Some(c),
                Err(e) => self.say(&format!("Invalid coordinate: {e}")),
            }
        }
    }

    fn shot_result(&mut self, target: Coordinate, outcome: HitOutcome) {
        self.say(&format!("You fired at {target}: {}", describe_outcome(outcome)));
    }

    fn opponent_shot(&mut self, target: Coordinate, outcome: HitOutcome) {
        self.say(&format!(
            "Enemy fired at {target}: {}",
            describe_outcome(outcome)
        ));
    }

    fn start_game(&mut self) {
        self.say("All ships are placed. Let the battle begin!");
    }
}
