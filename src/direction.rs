use std::{array, fmt::Display};

use int_enum::IntEnum;

use crate::Error;

/// Displacement between two cells, y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector(isize, isize);

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.dx(), self.dy())
    }
}

impl Vector {
    pub fn new(dx: isize, dy: isize) -> Self {
        Self(dx, dy)
    }

    pub fn dx(&self) -> isize {
        self.0
    }

    pub fn dy(&self) -> isize {
        self.1
    }
}

// Discriminants index the rotation in `priority_order`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntEnum)]
pub enum Direction {
    Left = 0,
    Down = 1,
    Right = 2,
    Up = 3,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
            Direction::Up => "up",
        };

        write!(f, "{}", name)
    }
}

impl TryFrom<Vector> for Direction {
    type Error = Error;

    fn try_from(value: Vector) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .copied()
            .find(|dir| dir.vector() == value)
            .ok_or(Error::NotAUnitVector(value))
    }
}

impl Direction {
    pub fn all() -> &'static [Direction; 4] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Left,
            Direction::Down,
            Direction::Right,
            Direction::Up,
        ];

        &ALL_DIRECTIONS
    }

    /// Preference for a walker with no heading yet.
    pub fn initial_priority() -> &'static [Direction; 4] {
        static BASE_PRIORITY: [Direction; 4] = [
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Right,
        ];

        &BASE_PRIORITY
    }

    pub fn vector(&self) -> Vector {
        match self {
            Direction::Left => Vector::new(-1, 0),
            Direction::Down => Vector::new(0, 1),
            Direction::Right => Vector::new(1, 0),
            Direction::Up => Vector::new(0, -1),
        }
    }

    /// Preference for the next move after moving along `self`.
    ///
    /// The base priority list rotated to start at this direction's index,
    /// which ranks the turn towards the followed wall first, then straight
    /// ahead, then the opposite turn and finally going back.
    pub fn priority_order(&self) -> [Direction; 4] {
        let base = Self::initial_priority();
        let start = usize::from(self.int_value());
        array::from_fn(|ind| base[(start + ind) % base.len()])
    }
}
