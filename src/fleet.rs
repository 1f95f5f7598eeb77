//! Bounded, per-class collection of ships.

use crate::common::{FleetFullError, ShipId};
use crate::config::FleetCounts;
use crate::ship::{Ship, ShipClass};

/// The ships of one board. Each class holds at most `capacity[class]` ships;
/// a ship's [`ShipId`] is its index in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fleet {
    capacity: FleetCounts,
    filled: FleetCounts,
    ships: Vec<Ship>,
}

impl Fleet {
    /// An empty fleet with the given per-class capacity.
    pub fn new(capacity: FleetCounts) -> Self {
        Self {
            capacity,
            filled: FleetCounts::default(),
            ships: Vec::with_capacity(capacity.total()),
        }
    }

    /// Drop every ship and adopt new capacities.
    pub fn reset(&mut self, capacity: FleetCounts) {
        self.capacity = capacity;
        self.filled = FleetCounts::default();
        self.ships.clear();
    }

    /// Add a ship if its class has room. A full class hands the ship back
    /// without touching the fleet.
    pub fn add_ship(&mut self, ship: Ship) -> Result<ShipId, FleetFullError> {
        let class = ship.class();
        if self.filled[class] >= self.capacity[class] {
            return Err(FleetFullError::new(ship));
        }
        self.filled[class] += 1;
        self.ships.push(ship);
        Ok(ShipId(self.ships.len() - 1))
    }

    /// Remove every ship, keeping the capacities.
    pub(crate) fn take_ships(&mut self) -> Vec<Ship> {
        self.filled = FleetCounts::default();
        std::mem::take(&mut self.ships)
    }

    pub fn capacity(&self) -> &FleetCounts {
        &self.capacity
    }

    /// Ships added per class.
    pub fn filled(&self) -> &FleetCounts {
        &self.filled
    }

    /// Room left for `class`.
    pub fn remaining(&self, class: ShipClass) -> usize {
        self.capacity[class] - self.filled[class]
    }

    /// Every class filled to capacity.
    pub fn is_complete(&self) -> bool {
        ShipClass::ALL
            .iter()
            .all(|c| self.filled[*c] == self.capacity[*c])
    }

    /// First class, in build order, that still has room.
    pub fn next_pending_class(&self) -> Option<ShipClass> {
        ShipClass::ALL.into_iter().find(|c| self.remaining(*c) > 0)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.get_mut(id.0)
    }

    pub(crate) fn ships_mut(&mut self) -> &mut [Ship] {
        &mut self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Id of the ship covering `(x, y)`.
    pub fn ship_id_at(&self, x: usize, y: usize) -> Option<ShipId> {
        self.ships
            .iter()
            .position(|s| s.contains(x, y))
            .map(ShipId)
    }

    /// Whether every ship is destroyed. An empty fleet counts as destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.ships.iter().all(Ship::is_destroyed)
    }

    /// Ships not yet destroyed.
    pub fn afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_destroyed()).count()
    }
}
