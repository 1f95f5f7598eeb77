//! Rule limits and the adjustable game configuration.

use core::ops::{Index, IndexMut};
use core::ops::RangeInclusive;

use crate::common::ConfigError;
use crate::ship::ShipClass;

pub const MIN_WIDTH: usize = 10;
pub const MAX_WIDTH: usize = 26;
pub const MIN_HEIGHT: usize = 10;
pub const MAX_HEIGHT: usize = 18;

/// Terminal colors a ship can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl Color {
    /// ANSI SGR foreground code for this color.
    pub fn ansi_code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::DarkRed => 31,
            Color::DarkGreen => 32,
            Color::DarkYellow => 33,
            Color::DarkBlue => 34,
            Color::DarkMagenta => 35,
            Color::DarkCyan => 36,
            Color::Gray => 37,
            Color::DarkGray => 90,
            Color::Red => 91,
            Color::Green => 92,
            Color::Yellow => 93,
            Color::Blue => 94,
            Color::Magenta => 95,
            Color::Cyan => 96,
            Color::White => 97,
        }
    }
}

/// Fixed limits and defaults of one ship class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRules {
    pub name: &'static str,
    pub lengths: RangeInclusive<usize>,
    pub counts: RangeInclusive<usize>,
    pub default_color: Color,
}

/// Limits per class, in [`ShipClass::ALL`] order.
pub static CLASS_RULES: [ClassRules; 4] = [
    ClassRules {
        name: "battle cruiser",
        lengths: 5..=10,
        counts: 1..=4,
        default_color: Color::White,
    },
    ClassRules {
        name: "cruiser",
        lengths: 4..=8,
        counts: 2..=8,
        default_color: Color::White,
    },
    ClassRules {
        name: "destroyer",
        lengths: 3..=6,
        counts: 3..=10,
        default_color: Color::White,
    },
    ClassRules {
        name: "submarine",
        lengths: 2..=4,
        counts: 5..=12,
        default_color: Color::White,
    },
];

/// One value per ship class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassTable<T> {
    pub battle_cruiser: T,
    pub cruiser: T,
    pub destroyer: T,
    pub submarine: T,
}

impl<T> ClassTable<T> {
    pub const fn new(battle_cruiser: T, cruiser: T, destroyer: T, submarine: T) -> Self {
        Self {
            battle_cruiser,
            cruiser,
            destroyer,
            submarine,
        }
    }

    /// Build a table by evaluating `f` for every class.
    pub fn from_fn(mut f: impl FnMut(ShipClass) -> T) -> Self {
        Self {
            battle_cruiser: f(ShipClass::BattleCruiser),
            cruiser: f(ShipClass::Cruiser),
            destroyer: f(ShipClass::Destroyer),
            submarine: f(ShipClass::Submarine),
        }
    }

    /// Iterate `(class, value)` pairs in class order.
    pub fn iter(&self) -> impl Iterator<Item = (ShipClass, &T)> {
        ShipClass::ALL.into_iter().map(move |class| (class, &self[class]))
    }
}

impl<T> Index<ShipClass> for ClassTable<T> {
    type Output = T;

    fn index(&self, class: ShipClass) -> &T {
        match class {
            ShipClass::BattleCruiser => &self.battle_cruiser,
            ShipClass::Cruiser => &self.cruiser,
            ShipClass::Destroyer => &self.destroyer,
            ShipClass::Submarine => &self.submarine,
        }
    }
}

impl<T> IndexMut<ShipClass> for ClassTable<T> {
    fn index_mut(&mut self, class: ShipClass) -> &mut T {
        match class {
            ShipClass::BattleCruiser => &mut self.battle_cruiser,
            ShipClass::Cruiser => &mut self.cruiser,
            ShipClass::Destroyer => &mut self.destroyer,
            ShipClass::Submarine => &mut self.submarine,
        }
    }
}

/// Number of ships per class.
pub type FleetCounts = ClassTable<usize>;
/// Ship length per class.
pub type ShipLengths = ClassTable<usize>;
/// Drawing color per class.
pub type ShipColors = ClassTable<Color>;

impl FleetCounts {
    /// Total number of ships over all classes.
    pub fn total(&self) -> usize {
        self.iter().map(|(_, n)| *n).sum()
    }

    /// Minimal count for every class.
    pub fn minimal() -> Self {
        Self::from_fn(|class| *class.rules().counts.start())
    }
}

/// Adjustable rules of a game: board size and the fleet to place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub counts: FleetCounts,
    pub lengths: ShipLengths,
    pub colors: ShipColors,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: MIN_WIDTH,
            height: MIN_HEIGHT,
            counts: FleetCounts::minimal(),
            lengths: ShipLengths::from_fn(|class| *class.rules().lengths.start()),
            colors: ShipColors::from_fn(|class| class.rules().default_color),
        }
    }
}

impl GameConfig {
    /// Same rules on a board of another size. Does not validate.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Check every setting against the rule limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_size(self.width, self.height)?;
        validate_counts(&self.counts)?;
        validate_lengths(&self.lengths)
    }
}

/// Check a board size against [`MIN_WIDTH`]..=[`MAX_WIDTH`] and
/// [`MIN_HEIGHT`]..=[`MAX_HEIGHT`].
pub fn validate_size(width: usize, height: usize) -> Result<(), ConfigError> {
    if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
        return Err(ConfigError::WidthOutOfRange {
            width,
            min: MIN_WIDTH,
            max: MAX_WIDTH,
        });
    }
    if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&height) {
        return Err(ConfigError::HeightOutOfRange {
            height,
            min: MIN_HEIGHT,
            max: MAX_HEIGHT,
        });
    }
    Ok(())
}

pub fn validate_counts(counts: &FleetCounts) -> Result<(), ConfigError> {
    for (class, &count) in counts.iter() {
        let allowed = &class.rules().counts;
        if !allowed.contains(&count) {
            return Err(ConfigError::CountOutOfRange {
                class,
                count,
                min: *allowed.start(),
                max: *allowed.end(),
            });
        }
    }
    Ok(())
}

pub fn validate_lengths(lengths: &ShipLengths) -> Result<(), ConfigError> {
    for (class, &length) in lengths.iter() {
        let allowed = &class.rules().lengths;
        if !allowed.contains(&length) {
            return Err(ConfigError::LengthOutOfRange {
                class,
                length,
                min: *allowed.start(),
                max: *allowed.end(),
            });
        }
    }
    Ok(())
}
