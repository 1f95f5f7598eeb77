//! Text rendering of boards for the terminal front end.

use std::fmt::Write;

use crate::board::Board;
use crate::common::{coordinate_label, HitOutcome};
use crate::config::Color;
use crate::grid::{CellGrid, CellState};
use crate::ship::Ship;

const INTACT: char = '#';
const HIT: char = 'X';
const DESTROYED: char = 'S';
const MISSED: char = '-';
const PENDING: char = '*';
const EMPTY: char = ' ';

/// Legend explaining the glyphs used by the renderers.
pub const LEGEND: &str = "# ship  X hit  S destroyed  - miss  * ship being placed";

fn glyph(state: CellState) -> char {
    match state {
        CellState::Empty => EMPTY,
        CellState::Hit => HIT,
        CellState::Missed => MISSED,
        CellState::Destroyed => DESTROYED,
    }
}

fn paint(out: &mut String, ch: char, color: Option<Color>) {
    match color {
        Some(color) => {
            let _ = write!(out, "\x1b[{}m{}\x1b[0m", color.ansi_code(), ch);
        }
        None => out.push(ch),
    }
}

fn header(out: &mut String, width: usize) {
    out.push_str("   ");
    for x in 0..width {
        // The label starts with the column letter.
        let letter = coordinate_label(x, 0).chars().next().unwrap_or('?');
        let _ = write!(out, "  {letter} ");
    }
    out.push('\n');
    border(out, width);
}

fn border(out: &mut String, width: usize) {
    out.push_str("   ");
    for _ in 0..width {
        out.push_str("+---");
    }
    out.push_str("+\n");
}

fn render<F>(width: usize, height: usize, mut cell: F) -> String
where
    F: FnMut(&mut String, usize, usize),
{
    let mut out = String::new();
    header(&mut out, width);
    for y in 0..height {
        let _ = write!(out, "{:>2} ", y + 1);
        for x in 0..width {
            out.push_str("| ");
            cell(&mut out, x, y);
            out.push(' ');
        }
        out.push_str("|\n");
        border(&mut out, width);
    }
    out
}

/// Draw a player's own board with its ships visible. `pending` is a ship being
/// positioned that is not on the board yet. With `colored`, intact ship cells
/// use the ship's color.
pub fn render_own_board(board: &Board, pending: Option<&Ship>, colored: bool) -> String {
    render(board.width(), board.height(), |out, x, y| {
        if pending.is_some_and(|p| p.contains(x, y)) {
            out.push(PENDING);
            return;
        }
        match (board.grid().get(x, y), board.ship_at(x, y)) {
            (CellState::Empty, Some(ship)) => {
                paint(out, INTACT, colored.then(|| ship.color()));
            }
            (state, _) => out.push(glyph(state)),
        }
    })
}

/// Draw what an attacker knows of the enemy board.
pub fn render_enemy_view(grid: &CellGrid) -> String {
    render(grid.width(), grid.height(), |out, x, y| {
        out.push(glyph(grid.get(x, y)));
    })
}

/// Short description of a strike for turn messages.
pub fn describe_outcome(outcome: HitOutcome) -> &'static str {
    match outcome {
        HitOutcome::Missed => "miss",
        HitOutcome::AlreadyStruck => "already struck",
        HitOutcome::Hit(_) => "hit",
        HitOutcome::Destroyed(_) => "ship destroyed",
        HitOutcome::Lost(_) => "last ship destroyed",
    }
}
