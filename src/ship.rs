//! Ship definitions: classes, footprint geometry and hit tracking.

use core::fmt;

use crate::common::Coordinate;
use crate::config::{ClassRules, Color, CLASS_RULES};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Class of a ship. Lengths, counts and default colors come from
/// [`CLASS_RULES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipClass {
    BattleCruiser,
    Cruiser,
    Destroyer,
    Submarine,
}

impl ShipClass {
    /// Every class, in the order fleets are built.
    pub const ALL: [ShipClass; 4] = [
        ShipClass::BattleCruiser,
        ShipClass::Cruiser,
        ShipClass::Destroyer,
        ShipClass::Submarine,
    ];

    /// Position of this class in [`ShipClass::ALL`].
    pub fn index(self) -> usize {
        match self {
            ShipClass::BattleCruiser => 0,
            ShipClass::Cruiser => 1,
            ShipClass::Destroyer => 2,
            ShipClass::Submarine => 3,
        }
    }

    /// Limits and defaults of this class.
    pub fn rules(self) -> &'static ClassRules {
        &CLASS_RULES[self.index()]
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        self.rules().name
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Axis aligned rectangle covered by a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Footprint {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point lies inside the rectangle.
    pub fn contains(&self, px: usize, py: usize) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Whether the point lies inside the rectangle grown by one cell in every
    /// direction, not counting the four corners of the grown rectangle.
    pub fn is_adjacent_or_overlapping(&self, px: usize, py: usize) -> bool {
        let right = self.x + self.width;
        let bottom = self.y + self.height;
        if px + 1 < self.x || px > right || py + 1 < self.y || py > bottom {
            return false;
        }
        let corner_x = px + 1 == self.x || px == right;
        let corner_y = py + 1 == self.y || py == bottom;
        !(corner_x && corner_y)
    }

    /// Whether any cell of `self` touches or overlaps `other` by an edge.
    pub fn collides_with(&self, other: &Footprint) -> bool {
        self.cells()
            .any(|c| other.is_adjacent_or_overlapping(c.x, c.y))
    }

    /// Cells of the rectangle, row by row.
    pub fn cells(self) -> impl Iterator<Item = Coordinate> {
        let Footprint {
            x,
            y,
            width,
            height,
        } = self;
        (y..y + height).flat_map(move |y| (x..x + width).map(move |x| Coordinate::new(x, y)))
    }
}

/// A one cell thick ship with its own hit mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    orientation: Orientation,
    color: Color,
    /// Struck flags, `width * height` entries in row-major order.
    mask: Vec<bool>,
}

impl Ship {
    /// A horizontal ship of `length` cells at the origin. Positioning it on a
    /// board is the job of [`crate::PlacementEngine`].
    pub fn new(class: ShipClass, length: usize, color: Color) -> Self {
        assert!(length > 0, "ship length must be positive");
        Self {
            class,
            x: 0,
            y: 0,
            width: length,
            height: 1,
            orientation: Orientation::Horizontal,
            color,
            mask: vec![false; length],
        }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Number of cells of the ship.
    pub fn length(&self) -> usize {
        self.mask.len()
    }

    /// Top-left cell.
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Rectangle currently covered.
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.x, self.y, self.width, self.height)
    }

    /// Rectangle the ship would cover with its origin at `(x, y)`.
    pub fn footprint_at(&self, x: usize, y: usize) -> Footprint {
        Footprint::new(x, y, self.width, self.height)
    }

    /// Rectangle the ship would cover rotated, with its origin at `(x, y)`.
    pub fn rotated_footprint_at(&self, x: usize, y: usize) -> Footprint {
        Footprint::new(x, y, self.height, self.width)
    }

    /// Whether the ship covers the cell.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.footprint().contains(x, y)
    }

    /// Whether the cell touches this ship by an edge or lies on it.
    pub fn is_adjacent_or_overlapping(&self, x: usize, y: usize) -> bool {
        self.footprint().is_adjacent_or_overlapping(x, y)
    }

    /// Whether this ship, moved to `(x, y)`, would touch `other`.
    pub fn collides_with_ship_at(&self, x: usize, y: usize, other: &Ship) -> bool {
        self.footprint_at(x, y).collides_with(&other.footprint())
    }

    /// Cells covered by the ship.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        self.footprint().cells()
    }

    fn mask_index(&self, x: usize, y: usize) -> Option<usize> {
        self.contains(x, y)
            .then(|| (y - self.y) * self.width + (x - self.x))
    }

    /// Whether the ship's cell at `(x, y)` has been struck. `false` off-ship.
    pub fn is_struck(&self, x: usize, y: usize) -> bool {
        self.mask_index(x, y).is_some_and(|i| self.mask[i])
    }

    /// Record a strike. Returns `true` only for a new hit on an intact cell.
    pub fn hit_at_point(&mut self, x: usize, y: usize) -> bool {
        match self.mask_index(x, y) {
            Some(i) if !self.mask[i] => {
                self.mask[i] = true;
                true
            }
            _ => false,
        }
    }

    /// Number of struck cells.
    pub fn hits(&self) -> usize {
        self.mask.iter().filter(|struck| **struck).count()
    }

    /// All cells struck.
    pub fn is_destroyed(&self) -> bool {
        self.mask.iter().all(|struck| *struck)
    }

    /// Flags of every cell in row-major order over the footprint.
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    pub(crate) fn set_origin(&mut self, x: usize, y: usize) {
        self.x = x;
        self.y = y;
    }

    /// Swap width and height, transpose the mask and flip the orientation.
    pub(crate) fn transpose(&mut self) {
        let (w, h) = (self.width, self.height);
        let mut mask = vec![false; self.mask.len()];
        for dy in 0..h {
            for dx in 0..w {
                // (dx, dy) becomes (dy, dx) in a grid that is `h` wide.
                mask[dx * h + dy] = self.mask[dy * w + dx];
            }
        }
        self.mask = mask;
        self.width = h;
        self.height = w;
        self.orientation = self.orientation.flipped();
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} cells, {:?}) at {}",
            self.class,
            self.length(),
            self.orientation,
            self.position()
        )
    }
}
