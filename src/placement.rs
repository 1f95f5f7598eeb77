//! Collision checks and free-position search for ships being placed.

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::{Coordinate, PlacementError};
use crate::config::Color;
use crate::ship::{Footprint, Ship, ShipClass};

/// Borrowed view of a board used to position one ship at a time.
///
/// `placed` holds the ships already on the board. The ship being positioned
/// is passed separately and is never part of `placed`.
#[derive(Debug, Clone, Copy)]
pub struct PlacementEngine<'a> {
    width: usize,
    height: usize,
    placed: &'a [Ship],
}

impl<'a> PlacementEngine<'a> {
    pub fn new(width: usize, height: usize, placed: &'a [Ship]) -> Self {
        Self {
            width,
            height,
            placed,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn footprint_off_board(&self, fp: &Footprint) -> bool {
        fp.x + fp.width > self.width || fp.y + fp.height > self.height
    }

    fn footprint_hits_fleet(&self, fp: &Footprint) -> bool {
        self.placed
            .iter()
            .any(|other| fp.collides_with(&other.footprint()))
    }

    fn footprint_fits(&self, fp: &Footprint) -> bool {
        !self.footprint_off_board(fp) && !self.footprint_hits_fleet(fp)
    }

    /// Whether `ship` would stick out of the board with its origin at `(x, y)`.
    pub fn collides_with_board(&self, ship: &Ship, x: usize, y: usize) -> bool {
        self.footprint_off_board(&ship.footprint_at(x, y))
    }

    /// Whether `ship` at `(x, y)` would overlap `other` or touch it by an edge.
    pub fn collides_with_ship(&self, ship: &Ship, x: usize, y: usize, other: &Ship) -> bool {
        ship.collides_with_ship_at(x, y, other)
    }

    /// Whether `ship` fits at `(x, y)` as it is oriented now.
    pub fn fits(&self, ship: &Ship, x: usize, y: usize) -> bool {
        self.footprint_fits(&ship.footprint_at(x, y))
    }

    /// Whether `ship` fits at `(x, y)` after a rotation.
    pub fn can_rotate_at(&self, ship: &Ship, x: usize, y: usize) -> bool {
        self.footprint_fits(&ship.rotated_footprint_at(x, y))
    }

    /// Every origin where the ship fits as is or rotated, row by row.
    pub fn find_empty_positions(&self, ship: &Ship) -> Vec<Coordinate> {
        let mut positions = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.fits(ship, x, y) || self.can_rotate_at(ship, x, y) {
                    positions.push(Coordinate::new(x, y));
                }
            }
        }
        positions
    }

    fn no_space(ship: &Ship) -> PlacementError {
        PlacementError::NoPlacementSpace {
            class: ship.class(),
            length: ship.length(),
        }
    }

    /// Move the ship to the first free origin, rotating it when only the
    /// rotation fits there.
    pub fn find_new_position(&self, ship: &mut Ship) -> Result<Coordinate, PlacementError> {
        let first = self
            .find_empty_positions(ship)
            .into_iter()
            .next()
            .ok_or_else(|| Self::no_space(ship))?;
        if self.set_position(ship, first.x, first.y) || self.rotate_at(ship, first.x, first.y) {
            debug!("{} placed at first free cell {}", ship.class(), first);
            Ok(first)
        } else {
            Err(Self::no_space(ship))
        }
    }

    /// Move the ship to a uniformly chosen free origin. Where both
    /// orientations fit, the orientation is a coin flip.
    pub fn find_random_position<R: Rng + ?Sized>(
        &self,
        ship: &mut Ship,
        rng: &mut R,
    ) -> Result<Coordinate, PlacementError> {
        let positions = self.find_empty_positions(ship);
        let pick = *positions.choose(rng).ok_or_else(|| Self::no_space(ship))?;
        debug!(
            "{}: {} free origins, picked {}",
            ship.class(),
            positions.len(),
            pick
        );
        if self.can_rotate_at(ship, pick.x, pick.y) && rng.random_bool(0.5) {
            if self.rotate_at(ship, pick.x, pick.y) {
                return Ok(pick);
            }
        }
        if self.set_position(ship, pick.x, pick.y) || self.rotate_at(ship, pick.x, pick.y) {
            Ok(pick)
        } else {
            Err(Self::no_space(ship))
        }
    }

    /// Rotate the ship with its origin at `(x, y)`. Nothing changes when the
    /// rotated ship would not fit there.
    pub fn rotate_at(&self, ship: &mut Ship, x: usize, y: usize) -> bool {
        if !self.can_rotate_at(ship, x, y) {
            return false;
        }
        ship.transpose();
        ship.set_origin(x, y);
        true
    }

    /// Rotate the ship around its current origin.
    pub fn rotate(&self, ship: &mut Ship) -> bool {
        let (x, y) = (ship.x(), ship.y());
        self.rotate_at(ship, x, y)
    }

    /// Move the ship, checking only that it stays on the board. Used while a
    /// player drags a ship around before confirming it.
    pub fn move_to(&self, ship: &mut Ship, x: usize, y: usize) -> bool {
        if self.collides_with_board(ship, x, y) {
            return false;
        }
        ship.set_origin(x, y);
        true
    }

    /// Move the ship if it fits on the board without touching another ship.
    pub fn set_position(&self, ship: &mut Ship, x: usize, y: usize) -> bool {
        if !self.fits(ship, x, y) {
            return false;
        }
        ship.set_origin(x, y);
        true
    }

    /// Create a ship and give it its first legal position: the top-left corner
    /// if free, otherwise the first free origin.
    pub fn place_new(
        &self,
        class: ShipClass,
        length: usize,
        color: Color,
    ) -> Result<Ship, PlacementError> {
        let mut ship = Ship::new(class, length, color);
        if !self.set_position(&mut ship, 0, 0) {
            self.find_new_position(&mut ship)?;
        }
        Ok(ship)
    }
}
