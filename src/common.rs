//! Common types for the game: coordinates, shot outcomes and errors.

use core::fmt;

use thiserror::Error;

use crate::ship::ShipClass;

/// Column letters used for labelling board columns.
const COLUMN_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Position of a single cell. `x` is the column, `y` the row, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&coordinate_label(self.x, self.y))
    }
}

/// Display label of a cell, e.g. `"C : 4"` for `(2, 3)`.
///
/// Panics if `x` is beyond the last column letter.
pub fn coordinate_label(x: usize, y: usize) -> String {
    format!("{} : {}", COLUMN_LETTERS[x] as char, y + 1)
}

/// Reasons a typed coordinate could not be understood.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseCoordinateError {
    #[error("empty input")]
    Empty,
    #[error("'{0}' is not a column letter")]
    InvalidColumn(char),
    #[error("column {column} is outside the board (last column is {last})")]
    ColumnOutOfBounds { column: char, last: char },
    #[error("'{0}' is not a row number")]
    InvalidRow(String),
    #[error("row {row} is outside the board (rows are 1-{height})")]
    RowOutOfBounds { row: usize, height: usize },
}

/// Parse a typed cell such as `B7`, `b 7` or `B : 7` against a board of the
/// given dimensions.
pub fn parse_coordinate(
    input: &str,
    width: usize,
    height: usize,
) -> Result<Coordinate, ParseCoordinateError> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or(ParseCoordinateError::Empty)?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return Err(ParseCoordinateError::InvalidColumn(col_ch));
    }
    let x = (col_ch as u8 - b'A') as usize;
    if x >= width {
        return Err(ParseCoordinateError::ColumnOutOfBounds {
            column: col_ch,
            last: COLUMN_LETTERS[width.min(COLUMN_LETTERS.len()) - 1] as char,
        });
    }
    let row_str = chars.as_str().trim_start_matches([' ', ':']).trim();
    let row: usize = row_str
        .parse()
        .map_err(|_| ParseCoordinateError::InvalidRow(row_str.to_string()))?;
    if row == 0 || row > height {
        return Err(ParseCoordinateError::RowOutOfBounds { row, height });
    }
    Ok(Coordinate::new(x, row - 1))
}

/// Index of a ship within its board's fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(pub usize);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of striking a single cell of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// No ship occupies the cell.
    Missed,
    /// The cell was struck before; nothing changed.
    AlreadyStruck,
    /// A ship was hit but still floats.
    Hit(ShipId),
    /// The hit destroyed the ship, others remain.
    Destroyed(ShipId),
    /// The hit destroyed the last ship of the board.
    Lost(ShipId),
}

impl HitOutcome {
    /// `true` only for a new hit on a ship.
    pub fn is_hit(&self) -> bool {
        matches!(
            self,
            HitOutcome::Hit(_) | HitOutcome::Destroyed(_) | HitOutcome::Lost(_)
        )
    }

    /// The ship destroyed by this strike, if any.
    pub fn destroyed_ship(&self) -> Option<ShipId> {
        match self {
            HitOutcome::Destroyed(id) | HitOutcome::Lost(id) => Some(*id),
            _ => None,
        }
    }

    /// Whether this strike sank the last ship of the board.
    pub fn is_board_lost(&self) -> bool {
        matches!(self, HitOutcome::Lost(_))
    }
}

/// Errors raised while searching room for a ship.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The board has no legal cell left for the ship.
    #[error("there is no place left for another {class} of length {length}")]
    NoPlacementSpace { class: ShipClass, length: usize },
}

/// Returned when a fleet has no room left for a ship of its class. Carries the
/// rejected ship back to the caller.
#[derive(Error)]
#[error("the fleet has no room left for another {}", .ship.class())]
pub struct FleetFullError {
    ship: crate::ship::Ship,
}

impl FleetFullError {
    pub(crate) fn new(ship: crate::ship::Ship) -> Self {
        Self { ship }
    }

    /// The ship that was not added.
    pub fn ship(&self) -> &crate::ship::Ship {
        &self.ship
    }

    /// Take the rejected ship back.
    pub fn into_ship(self) -> crate::ship::Ship {
        self.ship
    }
}

impl fmt::Debug for FleetFullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Reasons a board refused a ship. Both variants carry the ship back.
#[derive(Debug, Error)]
pub enum AddShipError {
    #[error(transparent)]
    FleetFull(#[from] FleetFullError),
    #[error("{0} is off the board or touches another ship")]
    Misplaced(crate::ship::Ship),
}

impl AddShipError {
    /// Take the rejected ship back.
    pub fn into_ship(self) -> crate::ship::Ship {
        match self {
            AddShipError::FleetFull(e) => e.into_ship(),
            AddShipError::Misplaced(ship) => ship,
        }
    }
}

/// Rule settings outside of the supported ranges.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board width {width} is outside {min}..={max}")]
    WidthOutOfRange { width: usize, min: usize, max: usize },
    #[error("board height {height} is outside {min}..={max}")]
    HeightOutOfRange { height: usize, min: usize, max: usize },
    #[error("{count} ships of class {class} is outside {min}..={max}")]
    CountOutOfRange {
        class: ShipClass,
        count: usize,
        min: usize,
        max: usize,
    },
    #[error("length {length} for class {class} is outside {min}..={max}")]
    LengthOutOfRange {
        class: ShipClass,
        length: usize,
        min: usize,
        max: usize,
    },
}
