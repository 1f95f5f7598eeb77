use log::debug;
use rand::rngs::SmallRng;

use crate::{
    ai::TargetingHeuristic,
    board::Board,
    common::{Coordinate, PlacementError},
    config::FleetCounts,
    grid::CellGrid,
    ship::Ship,
};

use crate::player::Player;

/// Computer player driven by [`TargetingHeuristic`].
pub struct AiPlayer {
    name: String,
    heuristic: TargetingHeuristic,
}

impl AiPlayer {
    /// `enemy_counts` is the opponent's fleet, used to size the record of
    /// destroyed ships.
    pub fn new(enemy_counts: FleetCounts) -> Self {
        Self::with_name("Computer", enemy_counts)
    }

    pub fn with_name(name: impl Into<String>, enemy_counts: FleetCounts) -> Self {
        Self {
            name: name.into(),
            heuristic: TargetingHeuristic::new(enemy_counts),
        }
    }

    pub fn heuristic(&self) -> &TargetingHeuristic {
        &self.heuristic
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), PlacementError> {
        board.populate(rng)
    }

    fn select_target(&mut self, rng: &mut SmallRng, enemy: &CellGrid) -> Option<Coordinate> {
        let target = self.heuristic.next_target(enemy, rng);
        debug!("{} aims at {:?}", self.name, target);
        target
    }

    fn got_hit(&mut self, target: Coordinate) {
        self.heuristic.got_hit(target);
    }

    fn ship_recessed(&mut self, ship: &Ship) {
        self.heuristic.ship_recessed(ship);
    }

    fn reset(&mut self, enemy_counts: FleetCounts) {
        self.heuristic.reset(enemy_counts);
    }
}
