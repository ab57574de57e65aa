//! Grid geometry: the room, compass orientation and the robot pose.

use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular room of `width × depth` unit cells.
///
/// Cells are addressed by zero-based column (along `width`) and row (along `depth`).
/// Row 0 is the northern wall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    pub width: i64,
    pub depth: i64,
}

impl Room {
    pub fn new(width: i64, depth: i64) -> Self {
        Self { width, depth }
    }

    /// A room needs at least one cell along each axis to hold a robot.
    pub fn is_usable(&self) -> bool {
        self.width >= 1 && self.depth >= 1
    }

    /// Returns true if `position` (`x` = column, `y` = row) lies on a cell of the room.
    pub fn contains(&self, position: I64Vec2) -> bool {
        (0..self.width).contains(&position.x) && (0..self.depth).contains(&position.y)
    }
}

/// Compass facing of the robot.
///
/// The cyclic order `N → E → S → W → N` is held in [`Orientation::ALL`]; rotations are
/// index arithmetic over that table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Orientation {
    /// All orientations in clockwise order, starting at North.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    fn index(self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// The next orientation clockwise (a quarter turn right).
    pub fn turned_right(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The next orientation counter-clockwise (a quarter turn left).
    pub fn turned_left(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Unit grid offset of one forward step. Rows grow southwards.
    pub fn step(self) -> I64Vec2 {
        match self {
            Orientation::North => I64Vec2::NEG_Y,
            Orientation::East => I64Vec2::X,
            Orientation::South => I64Vec2::Y,
            Orientation::West => I64Vec2::NEG_X,
        }
    }

    /// Single-letter wire symbol (`N`, `E`, `S`, `W`).
    pub fn symbol(self) -> &'static str {
        match self {
            Orientation::North => "N",
            Orientation::East => "E",
            Orientation::South => "S",
            Orientation::West => "W",
        }
    }

    /// Parses the case-sensitive single-letter symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.symbol() == symbol)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Position and facing of the robot at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    /// `x` is the column, `y` is the row.
    pub position: I64Vec2,
    pub orientation: Orientation,
}

impl Pose {
    pub fn new(column: i64, row: i64, orientation: Orientation) -> Self {
        Self {
            position: I64Vec2::new(column, row),
            orientation,
        }
    }

    pub fn column(&self) -> i64 {
        self.position.x
    }

    pub fn row(&self) -> i64 {
        self.position.y
    }

    /// Rotates a quarter turn counter-clockwise in place.
    pub fn rotate_left(&mut self) {
        self.orientation = self.orientation.turned_left();
    }

    /// Rotates a quarter turn clockwise in place.
    pub fn rotate_right(&mut self) {
        self.orientation = self.orientation.turned_right();
    }

    /// Cell directly in front of the robot. May lie outside any room.
    pub fn ahead(&self) -> I64Vec2 {
        self.position + self.orientation.step()
    }

    /// Steps one cell forward if that cell is inside `room`.
    ///
    /// Returns `false` and leaves the pose untouched when the step is blocked by a wall.
    pub fn advance(&mut self, room: &Room) -> bool {
        let target = self.ahead();
        if room.contains(target) {
            self.position = target;
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column(), self.row(), self.orientation)
    }
}
