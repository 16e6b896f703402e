//! The eight octilinear routing directions and their algebra.

use naiad_smt::SolverEnum;
use serde::{Deserialize, Serialize};

/// A channel segment direction: four axis-aligned, four diagonal at 45°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// +y.
    Up,
    /// −y.
    Down,
    /// −x.
    Left,
    /// +x.
    Right,
    /// +x, +y.
    UpRight,
    /// +x, −y.
    DownRight,
    /// −x, +y.
    UpLeft,
    /// −x, −y.
    DownLeft,
}

/// The slope sign of a diagonal direction: `/` or `\`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slope {
    /// Rising left to right (`/`): UpRight, DownLeft.
    Positive,
    /// Falling left to right (`\`): UpLeft, DownRight.
    Negative,
}

impl SolverEnum for Direction {
    const ALL: &'static [Self] = &[
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpRight,
        Direction::DownRight,
        Direction::UpLeft,
        Direction::DownLeft,
    ];

    fn index(self) -> u32 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
            Direction::UpRight => 4,
            Direction::DownRight => 5,
            Direction::UpLeft => 6,
            Direction::DownLeft => 7,
        }
    }
}

impl Direction {
    /// Whether this direction is horizontal or vertical.
    pub fn is_axis_aligned(self) -> bool {
        matches!(
            self,
            Direction::Up | Direction::Down | Direction::Left | Direction::Right
        )
    }

    /// Whether this direction is one of the four diagonals.
    pub fn is_diagonal(self) -> bool {
        !self.is_axis_aligned()
    }

    /// The slope sign, for diagonal directions.
    pub fn slope(self) -> Option<Slope> {
        match self {
            Direction::UpRight | Direction::DownLeft => Some(Slope::Positive),
            Direction::UpLeft | Direction::DownRight => Some(Slope::Negative),
            _ => None,
        }
    }

    /// The sign of motion along x: −1, 0, or +1.
    pub fn dx(self) -> i64 {
        match self {
            Direction::Left | Direction::UpLeft | Direction::DownLeft => -1,
            Direction::Up | Direction::Down => 0,
            Direction::Right | Direction::UpRight | Direction::DownRight => 1,
        }
    }

    /// The sign of motion along y: −1, 0, or +1.
    pub fn dy(self) -> i64 {
        match self {
            Direction::Down | Direction::DownLeft | Direction::DownRight => -1,
            Direction::Left | Direction::Right => 0,
            Direction::Up | Direction::UpLeft | Direction::UpRight => 1,
        }
    }

    /// The opposite direction.
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::UpLeft => Direction::DownRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }

    /// Position on the 45°-step compass, counterclockwise from Right.
    fn compass(self) -> u32 {
        match self {
            Direction::Right => 0,
            Direction::UpRight => 1,
            Direction::Up => 2,
            Direction::UpLeft => 3,
            Direction::Left => 4,
            Direction::DownLeft => 5,
            Direction::Down => 6,
            Direction::DownRight => 7,
        }
    }

    fn from_compass(step: u32) -> Direction {
        match step % 8 {
            0 => Direction::Right,
            1 => Direction::UpRight,
            2 => Direction::Up,
            3 => Direction::UpLeft,
            4 => Direction::Left,
            5 => Direction::DownLeft,
            6 => Direction::Down,
            _ => Direction::DownRight,
        }
    }

    /// Whether `next` may follow this direction on consecutive active segments.
    ///
    /// A direction may not be followed by itself (two segments in a row would
    /// be one longer segment), by its reverse, or by either direction within
    /// 45° of its reverse. Soft-corners mode additionally forbids the 45°
    /// transitions between an axis-aligned and a diagonal direction, leaving
    /// only 90° turns.
    pub fn may_precede(self, next: Direction, soft_corners: bool) -> bool {
        let here = self.compass();
        let there = next.compass();
        let step = (there + 8 - here) % 8;
        match step {
            0 => false,         // same direction
            3 | 4 | 5 => false, // reverse and its 45° neighbors
            1 | 7 => !soft_corners,
            _ => true,
        }
    }

    /// The directions that may follow this one.
    pub fn successors(self, soft_corners: bool) -> Vec<Direction> {
        (0..8)
            .map(Direction::from_compass)
            .filter(|next| self.may_precede(*next, soft_corners))
            .collect()
    }
}
