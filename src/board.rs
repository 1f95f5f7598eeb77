//! Game board state: the cell grid, the fleet on it and the rules it was built
//! from.

use core::fmt;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::{AddShipError, ConfigError, HitOutcome, PlacementError, ShipId};
use crate::config::{
    validate_counts, validate_lengths, validate_size, FleetCounts, GameConfig, ShipColors,
    ShipLengths,
};
use crate::fleet::Fleet;
use crate::grid::{CellGrid, CellState};
use crate::placement::PlacementEngine;
use crate::ship::{Ship, ShipClass};

/// One player's board.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    grid: CellGrid,
    fleet: Fleet,
    counts: FleetCounts,
    lengths: ShipLengths,
    colors: ShipColors,
}

impl Board {
    /// Create an empty board (no ships placed) following `config`.
    ///
    /// Only the size being non-zero is checked here; use
    /// [`GameConfig::validate`] for the rule limits.
    pub fn new(config: &GameConfig) -> Self {
        assert!(
            config.width > 0 && config.height > 0,
            "board dimensions must be positive"
        );
        Board {
            width: config.width,
            height: config.height,
            grid: CellGrid::new(config.width, config.height),
            fleet: Fleet::new(config.counts),
            counts: config.counts,
            lengths: config.lengths,
            colors: config.colors,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Strike state of every cell.
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn counts(&self) -> &FleetCounts {
        &self.counts
    }

    pub fn lengths(&self) -> &ShipLengths {
        &self.lengths
    }

    pub fn colors(&self) -> &ShipColors {
        &self.colors
    }

    /// Rules this board is built from.
    pub fn config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            counts: self.counts,
            lengths: self.lengths,
            colors: self.colors,
        }
    }

    /// Collision view over the ships already on the board.
    pub fn placement(&self) -> PlacementEngine<'_> {
        PlacementEngine::new(self.width, self.height, self.fleet.ships())
    }

    /// Ship covering `(x, y)`.
    pub fn ship_at(&self, x: usize, y: usize) -> Option<&Ship> {
        self.fleet.ship_id_at(x, y).and_then(|id| self.fleet.get(id))
    }

    pub fn ship_id_at(&self, x: usize, y: usize) -> Option<ShipId> {
        self.fleet.ship_id_at(x, y)
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.fleet.get(id)
    }

    /// `true` once the board holds ships and every one of them is destroyed.
    pub fn all_destroyed(&self) -> bool {
        !self.fleet.is_empty() && self.fleet.all_destroyed()
    }

    /// Strike the cell at `(x, y)`.
    ///
    /// A struck cell never changes again except for `Hit` turning into
    /// `Destroyed` when its ship sinks. Panics if the cell is off the board.
    pub fn hit_at_point(&mut self, x: usize, y: usize) -> HitOutcome {
        let state = self.grid.get(x, y);
        if state != CellState::Empty {
            return HitOutcome::AlreadyStruck;
        }
        let Some(id) = self.fleet.ship_id_at(x, y) else {
            self.grid.set(x, y, CellState::Missed);
            return HitOutcome::Missed;
        };
        let destroyed = match self.fleet.get_mut(id) {
            Some(ship) => {
                ship.hit_at_point(x, y);
                ship.is_destroyed()
            }
            None => false,
        };
        if !destroyed {
            self.grid.set(x, y, CellState::Hit);
            return HitOutcome::Hit(id);
        }
        if let Some(ship) = self.fleet.get(id) {
            for cell in ship.cells() {
                self.grid.set(cell.x, cell.y, CellState::Destroyed);
            }
            debug!("{} destroyed", ship);
        }
        if self.fleet.all_destroyed() {
            HitOutcome::Lost(id)
        } else {
            HitOutcome::Destroyed(id)
        }
    }

    /// Empty the fleet with new per-class capacities and clear every cell.
    pub fn reset_fleet_with(&mut self, counts: FleetCounts) {
        self.counts = counts;
        self.fleet.reset(counts);
        self.grid.clear();
    }

    /// Empty the fleet and clear every cell.
    pub fn reset_fleet(&mut self) {
        self.reset_fleet_with(self.counts);
    }

    fn push_ship(&mut self, ship: Ship) {
        let added = self.fleet.add_ship(ship);
        debug_assert!(added.is_ok(), "fleet capacity follows the board counts");
    }

    /// Build the whole fleet class by class, every ship at the first free
    /// spot. On failure the fleet is left empty.
    pub fn generate_fleet(&mut self) -> Result<(), PlacementError> {
        self.reset_fleet();
        for class in ShipClass::ALL {
            for _ in 0..self.counts[class] {
                let placed =
                    self.placement()
                        .place_new(class, self.lengths[class], self.colors[class]);
                match placed {
                    Ok(ship) => self.push_ship(ship),
                    Err(e) => {
                        self.reset_fleet();
                        return Err(e);
                    }
                }
            }
        }
        Ok(())
    }

    /// Re-place the current ships in a random order at random free spots.
    /// When a ship finds no room the whole fleet is regenerated with
    /// [`Board::generate_fleet`] instead.
    pub fn randomize_placement<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), PlacementError> {
        let mut ships = self.fleet.take_ships();
        self.grid.clear();
        ships.shuffle(rng);
        for mut ship in ships {
            let found = self.placement().find_random_position(&mut ship, rng);
            match found {
                Ok(_) => self.push_ship(ship),
                Err(e) => {
                    warn!("random placement failed ({e}); falling back to first-fit placement");
                    return self.generate_fleet();
                }
            }
        }
        Ok(())
    }

    /// Generate the fleet and scatter it randomly.
    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PlacementError> {
        self.generate_fleet()?;
        self.randomize_placement(rng)
    }

    /// A new ship of `class` at its first legal spot, not yet on the board.
    pub fn spawn_ship(&self, class: ShipClass) -> Result<Ship, PlacementError> {
        self.placement()
            .place_new(class, self.lengths[class], self.colors[class])
    }

    /// Class of the next ship still missing from the fleet.
    pub fn next_pending_class(&self) -> Option<ShipClass> {
        self.fleet.next_pending_class()
    }

    /// Put a positioned ship on the board. The ship must fit where it is.
    pub fn add_ship(&mut self, ship: Ship) -> Result<ShipId, AddShipError> {
        if !self.placement().fits(&ship, ship.x(), ship.y()) {
            return Err(AddShipError::Misplaced(ship));
        }
        let id = self.fleet.add_ship(ship)?;
        Ok(id)
    }

    /// Resize the board. Out-of-range sizes are refused and change nothing;
    /// otherwise the fleet and the grid are reset.
    pub fn set_size(&mut self, width: usize, height: usize) -> bool {
        if validate_size(width, height).is_err() {
            return false;
        }
        self.width = width;
        self.height = height;
        self.grid = CellGrid::new(width, height);
        self.fleet.reset(self.counts);
        true
    }

    /// Change the number of ships per class. Resets the fleet.
    pub fn set_ship_counts(&mut self, counts: FleetCounts) -> Result<(), ConfigError> {
        validate_counts(&counts)?;
        self.reset_fleet_with(counts);
        Ok(())
    }

    /// Change the ship lengths per class. Resets the fleet.
    pub fn set_ship_lengths(&mut self, lengths: ShipLengths) -> Result<(), ConfigError> {
        validate_lengths(&lengths)?;
        self.lengths = lengths;
        self.reset_fleet();
        Ok(())
    }

    /// Change the ship colors per class, recoloring ships already placed.
    pub fn set_ship_colors(&mut self, colors: ShipColors) {
        self.colors = colors;
        for ship in self.fleet.ships_mut() {
            ship.set_color(colors[ship.class()]);
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.width, self.height)?;
        for ship in self.fleet.ships() {
            writeln!(f, "  {} hits: {}", ship, ship.hits())?;
        }
        for row in self.grid.rows() {
            let line: String = row
                .iter()
                .map(|c| match c {
                    CellState::Empty => '.',
                    CellState::Hit => 'X',
                    CellState::Missed => 'o',
                    CellState::Destroyed => '#',
                })
                .collect();
            writeln!(f, "  {line}")?;
        }
        write!(f, "}}")
    }
}
