use core::fmt;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::Rng;
use thiserror::Error;

use crate::{
    board::Board,
    common::{ConfigError, Coordinate, HitOutcome, PlacementError, ShipId},
    config::GameConfig,
    player::Player,
    player_ai::AiPlayer,
};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.pad("first player"),
            Side::Second => f.pad("second player"),
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Fleets are being placed.
    Setup,
    InProgress,
    Won(Side),
}

/// What happened on one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Side that fired.
    pub side: Side,
    pub target: Coordinate,
    pub outcome: HitOutcome,
    /// A new hit on a ship. The shooter keeps the turn.
    pub hit: bool,
    pub ship_destroyed: Option<ShipId>,
    pub game_over: bool,
}

/// Errors raised by [`GameSession`].
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("the game has not started")]
    NotStarted,
    #[error("the game has already started")]
    AlreadyStarted,
    #[error("the game is already over")]
    GameOver,
    #[error("the {0} has not placed its whole fleet")]
    FleetIncomplete(Side),
    #[error("the {0} chose no target")]
    NoTarget(Side),
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Both boards and both players of one game, with the turn state.
pub struct GameSession {
    config: GameConfig,
    boards: [Board; 2],
    players: [Box<dyn Player>; 2],
    status: GameStatus,
    current: Side,
    shots: [usize; 2],
}

impl GameSession {
    /// Create a session after checking `config` against the rule limits.
    pub fn new(
        config: GameConfig,
        first: Box<dyn Player>,
        second: Box<dyn Player>,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        let mut players = [first, second];
        for p in players.iter_mut() {
            p.reset(config.counts);
        }
        Ok(Self {
            boards: [Board::new(&config), Board::new(&config)],
            config,
            players,
            status: GameStatus::Setup,
            current: Side::First,
            shots: [0; 2],
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side whose turn it is.
    pub fn current_side(&self) -> Side {
        self.current
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Won(side) => Some(side),
            _ => None,
        }
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn player(&self, side: Side) -> &dyn Player {
        self.players[side.index()].as_ref()
    }

    /// Shots fired by `side` so far.
    pub fn shots(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Let every player place its fleet on its own board.
    pub fn setup(&mut self, rng: &mut SmallRng) -> Result<(), SessionError> {
        for side in [Side::First, Side::Second] {
            let i = side.index();
            self.players[i].place_ships(rng, &mut self.boards[i])?;
            info!(
                "{} placed {} ships",
                self.players[i].name(),
                self.boards[i].fleet().len()
            );
        }
        Ok(())
    }

    /// Start shooting. Both fleets must be complete; the side to move first
    /// is chosen at random.
    pub fn start(&mut self, rng: &mut SmallRng) -> Result<Side, SessionError> {
        match self.status {
            GameStatus::InProgress => return Err(SessionError::AlreadyStarted),
            GameStatus::Won(_) => return Err(SessionError::GameOver),
            GameStatus::Setup => {}
        }
        for side in [Side::First, Side::Second] {
            if !self.boards[side.index()].fleet().is_complete() {
                return Err(SessionError::FleetIncomplete(side));
            }
        }
        for p in self.players.iter_mut() {
            p.start_game();
        }
        self.current = if rng.random_bool(0.5) {
            Side::First
        } else {
            Side::Second
        };
        self.status = GameStatus::InProgress;
        info!(
            "game started, {} moves first",
            self.players[self.current.index()].name()
        );
        Ok(self.current)
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        match self.status {
            GameStatus::Setup => Err(SessionError::NotStarted),
            GameStatus::Won(_) => Err(SessionError::GameOver),
            GameStatus::InProgress => Ok(()),
        }
    }

    /// The current side shoots at `target` on the opposing board. A new hit
    /// keeps the turn, anything else passes it.
    ///
    /// Panics if `target` is off the board.
    pub fn fire(&mut self, target: Coordinate) -> Result<TurnOutcome, SessionError> {
        self.ensure_in_progress()?;
        let side = self.current;
        let (att, def) = (side.index(), side.opponent().index());
        let outcome = self.boards[def].hit_at_point(target.x, target.y);
        self.shots[att] += 1;

        if outcome.is_hit() {
            self.players[att].got_hit(target);
        }
        let ship_destroyed = outcome.destroyed_ship();
        if let Some(ship) = ship_destroyed.and_then(|id| self.boards[def].ship(id)) {
            self.players[att].ship_recessed(ship);
        }
        self.players[att].shot_result(target, outcome);
        self.players[def].opponent_shot(target, outcome);
        debug!(
            "{} fired at {}: {:?}",
            self.players[att].name(),
            target,
            outcome
        );

        let game_over = outcome.is_board_lost();
        if game_over {
            self.status = GameStatus::Won(side);
            info!(
                "{} won after {} shots",
                self.players[att].name(),
                self.shots[att]
            );
        } else if !outcome.is_hit() {
            self.current = side.opponent();
        }
        Ok(TurnOutcome {
            side,
            target,
            outcome,
            hit: outcome.is_hit(),
            ship_destroyed,
            game_over,
        })
    }

    /// Ask the current player for a target and fire at it.
    pub fn play_move(&mut self, rng: &mut SmallRng) -> Result<TurnOutcome, SessionError> {
        self.ensure_in_progress()?;
        let side = self.current;
        let enemy = self.boards[side.opponent().index()].grid();
        let target = self.players[side.index()]
            .select_target(rng, enemy)
            .ok_or(SessionError::NoTarget(side))?;
        self.fire(target)
    }

    /// Play moves until one side wins.
    pub fn play_to_end(&mut self, rng: &mut SmallRng) -> Result<Side, SessionError> {
        loop {
            if self.play_move(rng)?.game_over {
                return Ok(self.current);
            }
        }
    }

    /// Back to setup: players forget the last game and both fleets are
    /// emptied.
    pub fn reset(&mut self) {
        for p in self.players.iter_mut() {
            p.reset(self.config.counts);
        }
        for b in self.boards.iter_mut() {
            b.reset_fleet();
        }
        self.status = GameStatus::Setup;
        self.current = Side::First;
        self.shots = [0; 2];
    }
}

/// Result of one computer-vs-computer game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimSummary {
    pub winner: Side,
    /// Side that moved first.
    pub opener: Side,
    /// Shots fired by the first and second side.
    pub shots: [usize; 2],
    /// Ships still afloat on the winner's board.
    pub winner_ships_left: usize,
}

/// Play a full game between two [`AiPlayer`]s.
pub fn simulate(config: &GameConfig, rng: &mut SmallRng) -> Result<SimSummary, SessionError> {
    let first = Box::new(AiPlayer::with_name("Computer 1", config.counts));
    let second = Box::new(AiPlayer::with_name("Computer 2", config.counts));
    let mut session = GameSession::new(config.clone(), first, second)?;
    session.setup(rng)?;
    let opener = session.start(rng)?;
    let winner = session.play_to_end(rng)?;
    Ok(SimSummary {
        winner,
        opener,
        shots: [session.shots(Side::First), session.shots(Side::Second)],
        winner_ships_left: session.board(winner).fleet().afloat(),
    })
}
