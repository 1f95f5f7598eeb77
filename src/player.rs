use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Coordinate, HitOutcome, PlacementError},
    config::FleetCounts,
    grid::CellGrid,
    ship::Ship,
};

/// Interface implemented by different player types.
pub trait Player {
    /// Name shown in turn messages.
    fn name(&self) -> &str;

    /// Fill the provided board with the whole fleet.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), PlacementError>;

    /// Choose the next cell to shoot on the enemy grid. `None` means the
    /// player has nothing left to shoot or gave up.
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &CellGrid) -> Option<Coordinate>;

    /// The last shot hit a ship at `target`.
    fn got_hit(&mut self, _target: Coordinate) {}

    /// The last shot destroyed `ship`.
    fn ship_recessed(&mut self, _ship: &Ship) {}

    /// Inform the player of the full result of its last shot.
    fn shot_result(&mut self, _target: Coordinate, _outcome: HitOutcome) {}

    /// Inform the player of an opponent shot against its board.
    fn opponent_shot(&mut self, _target: Coordinate, _outcome: HitOutcome) {}

    /// Forget the previous game. `enemy_counts` is the opponent's fleet.
    fn reset(&mut self, _enemy_counts: FleetCounts) {}

    /// Both fleets are placed and shooting starts.
    fn start_game(&mut self) {}
}
