use std::{
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub use direction::{Direction, Vector};
pub use maze::{walker::Walk, walker::WalkEnd, walker::Walker, Cell, Maze, MazeBuilder};

pub mod direction;
pub mod maze;
pub mod route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyMaze,
    InvalidCharInMaze(char, Position),
    InconsistentRow {
        row: usize,
        expect: usize,
        given: usize,
    },
    MazeTooSmall(usize, usize), // (width, height)
    NoEntrance,
    NoExit,
    MultipleEntrances(Position, Position),
    MultipleExits(Position, Position),
    NotOnBorder(Cell, Position),
    Blocked(Cell, Position),
    OpenBorder(Position),
    NotAUnitVector(Vector),
    StepLimitExceeded(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyMaze => write!(f, "No row in given maze."),
            Error::InvalidCharInMaze(c, pos) => {
                write!(f, "Invalid character({:?}) at {} in maze.", c, pos)
            }
            Error::InconsistentRow { row, expect, given } => write!(
                f,
                "Expect {} column(s) in each row, given {} in row {}.",
                expect, given, row
            ),
            Error::MazeTooSmall(width, height) => write!(
                f,
                "Maze should be at least 3x3, given {}x{}.",
                width, height
            ),
            Error::NoEntrance => write!(f, "No entrance in maze."),
            Error::NoExit => write!(f, "No exit in maze."),
            Error::MultipleEntrances(last_pos, pos) => write!(
                f,
                "Expect only one entrance, given two({}, {}).",
                last_pos, pos
            ),
            Error::MultipleExits(last_pos, pos) => write!(
                f,
                "Expect only one exit, given two({}, {}).",
                last_pos, pos
            ),
            Error::NotOnBorder(cell, pos) => {
                write!(f, "The {} at {} isn't on the maze border.", cell, pos)
            }
            Error::Blocked(cell, pos) => write!(
                f,
                "The {} at {} has no passable neighbor.",
                cell, pos
            ),
            Error::OpenBorder(pos) => write!(
                f,
                "Maze should be surrounded by wall, found an opening at {}.",
                pos
            ),
            Error::NotAUnitVector(v) => {
                write!(f, "Vector{} doesn't match any direction.", v)
            }
            Error::StepLimitExceeded(limit) => write!(
                f,
                "Walker didn't finish within {} steps, the maze may trap it in a cycle.",
                limit
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
#[command(about = "Walk through a maze along its wall and print the route without dead ends.")]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Also print the walk before loops are pruned
    #[arg(long)]
    pub raw: bool,
    /// Print the maze with the route drawn on it
    #[arg(long)]
    pub render: bool,
    /// Give up after this many moves
    #[arg(long)]
    pub max_steps: Option<usize>,
    /// Only check characters and row lengths before walking
    #[arg(long)]
    pub skip_validation: bool,
    /// More output on stderr, repeat for a step by step trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Cell coordinate as (column, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(usize, usize);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self(x, y)
    }

    pub fn x(&self) -> usize {
        self.0
    }

    pub fn y(&self) -> usize {
        self.1
    }

    /// None if the offset leaves the non-negative quadrant.
    pub fn offset(&self, v: Vector) -> Option<Self> {
        Some(Self::new(
            self.x().checked_add_signed(v.dx())?,
            self.y().checked_add_signed(v.dy())?,
        ))
    }

    pub fn move_along(&self, dir: Direction) -> Option<Self> {
        self.offset(dir.vector())
    }

    pub fn vector_from(&self, other: &Position) -> Vector {
        Vector::new(
            self.x() as isize - other.x() as isize,
            self.y() as isize - other.y() as isize,
        )
    }
}

pub fn read_maze<P: AsRef<Path>>(path: P) -> Result<Maze> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;

    Maze::parse(&text).with_context(|| {
        format!(
            "Failed to parse maze in given file({}).",
            path.as_ref().display()
        )
    })
}
