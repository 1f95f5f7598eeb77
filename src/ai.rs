// Hunt/target search used by the computer opponent.
// Works purely on the attacker's view of the enemy grid.

use log::{debug, warn};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::Coordinate;
use crate::config::FleetCounts;
use crate::fleet::Fleet;
use crate::grid::{CellGrid, CellState};
use crate::ship::Ship;

/// Direction of a line of hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// State of the hunt/target search for one attacker.
///
/// Without a pending hit the search hunts: any untouched cell that can still
/// hold a ship is picked at random. After a hit it targets the neighborhood of
/// that hit, following a line of hits once two are adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetingHeuristic {
    last_hit: Option<Coordinate>,
    recessed: Fleet,
}

impl TargetingHeuristic {
    /// `enemy_counts` sizes the record of destroyed enemy ships.
    pub fn new(enemy_counts: FleetCounts) -> Self {
        Self {
            last_hit: None,
            recessed: Fleet::new(enemy_counts),
        }
    }

    /// Most recent hit not yet followed by a destruction.
    pub fn last_hit(&self) -> Option<Coordinate> {
        self.last_hit
    }

    /// Enemy ships destroyed so far.
    pub fn recessed(&self) -> &Fleet {
        &self.recessed
    }

    /// A cell worth shooting: untouched and not next to a destroyed ship.
    pub fn is_legal_target(&self, grid: &CellGrid, c: Coordinate) -> bool {
        grid.try_get(c.x, c.y) == Some(CellState::Empty)
            && !self
                .recessed
                .ships()
                .iter()
                .any(|ship| ship.is_adjacent_or_overlapping(c.x, c.y))
    }

    /// Every legal cell, row by row.
    pub fn hunt_candidates(&self, grid: &CellGrid) -> Vec<Coordinate> {
        grid.coordinates()
            .filter(|c| self.is_legal_target(grid, *c))
            .collect()
    }

    /// Cells to try around `hit`. When a neighbor is also a hit, this is the
    /// single open end of the line (lower end first); otherwise every legal
    /// neighbor.
    pub fn target_candidates(&self, grid: &CellGrid, hit: Coordinate) -> Vec<Coordinate> {
        let line = grid
            .neighbors(hit)
            .find(|n| grid.try_get(n.x, n.y) == Some(CellState::Hit))
            .map(|n| {
                if n.x == hit.x {
                    Axis::Vertical
                } else {
                    Axis::Horizontal
                }
            });
        if let Some(axis) = line {
            for backwards in [true, false] {
                if let Some(end) = line_end(grid, hit, axis, backwards) {
                    if self.is_legal_target(grid, end) {
                        debug!("following {axis:?} line from {hit} to {end}");
                        return vec![end];
                    }
                }
            }
        }
        grid.neighbors(hit)
            .filter(|n| self.is_legal_target(grid, *n))
            .collect()
    }

    /// Pick the next cell to shoot, or `None` when no legal cell is left.
    pub fn next_target<R: Rng + ?Sized>(&self, grid: &CellGrid, rng: &mut R) -> Option<Coordinate> {
        if let Some(hit) = self.last_hit {
            let candidates = self.target_candidates(grid, hit);
            if let Some(c) = candidates.choose(rng) {
                debug!("target mode around {hit}: {} candidates, picked {c}", candidates.len());
                return Some(*c);
            }
            debug!("no target left around {hit}, hunting");
        }
        let candidates = self.hunt_candidates(grid);
        let pick = candidates.choose(rng).copied();
        if let Some(c) = pick {
            debug!("hunt mode: {} candidates, picked {c}", candidates.len());
        }
        pick
    }

    /// The last shot hit a ship at `c`.
    pub fn got_hit(&mut self, c: Coordinate) {
        self.last_hit = Some(c);
    }

    /// The last shot destroyed `ship`.
    pub fn ship_recessed(&mut self, ship: &Ship) {
        self.last_hit = None;
        if let Err(e) = self.recessed.add_ship(ship.clone()) {
            warn!("destroyed ship not recorded: {e}");
        }
    }

    /// Forget everything, sizing the record for a new enemy fleet.
    pub fn reset(&mut self, enemy_counts: FleetCounts) {
        self.last_hit = None;
        self.recessed.reset(enemy_counts);
    }
}

/// First non-hit cell reached from `from` along `axis`, walking towards lower
/// coordinates when `backwards`. `None` when the walk leaves the grid.
fn line_end(grid: &CellGrid, from: Coordinate, axis: Axis, backwards: bool) -> Option<Coordinate> {
    let step = |c: Coordinate| -> Option<Coordinate> {
        let (x, y) = match (axis, backwards) {
            (Axis::Horizontal, true) => (c.x.checked_sub(1)?, c.y),
            (Axis::Horizontal, false) => (c.x + 1, c.y),
            (Axis::Vertical, true) => (c.x, c.y.checked_sub(1)?),
            (Axis::Vertical, false) => (c.x, c.y + 1),
        };
        grid.in_bounds(x, y).then(|| Coordinate::new(x, y))
    };
    let mut cur = step(from)?;
    while grid.get(cur.x, cur.y) == CellState::Hit {
        cur = step(cur)?;
    }
    Some(cur)
}
