use std::{collections::HashSet, fmt::Display, str::FromStr};

use log::debug;
use once_cell::unsync::OnceCell;

use crate::{Direction, Error, Position, Vector};

use walker::{Walk, Walker};

pub mod walker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Wall,
    Entrance,
    Exit,
}

impl TryFrom<char> for Cell {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            ' ' => Ok(Cell::Empty),
            'X' => Ok(Cell::Wall),
            'I' => Ok(Cell::Entrance),
            'O' => Ok(Cell::Exit),
            other => Err(other),
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Cell::Empty => "empty cell",
            Cell::Wall => "wall",
            Cell::Entrance => "entrance",
            Cell::Exit => "exit",
        };

        write!(f, "{}", name)
    }
}

impl Cell {
    pub fn can_pass(&self) -> bool {
        !matches!(self, Cell::Wall)
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => 'X',
            Cell::Entrance => 'I',
            Cell::Exit => 'O',
        }
    }
}

#[derive(Debug)]
pub struct Maze {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    start_pos: OnceCell<Position>,
}

impl FromStr for Maze {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.width) {
            writeln!(f, "{}", row.iter().map(Cell::symbol).collect::<String>())?;
        }

        Ok(())
    }
}

impl Maze {
    /// Reads one row per non-blank line, surrounding whitespace ignored.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut builder = MazeBuilder::new();
        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            builder.add_row(line)?;
        }

        builder.build()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, pos: &Position) -> Option<Cell> {
        if pos.x() < self.width && pos.y() < self.height {
            self.cells.get(pos.y() * self.width + pos.x()).copied()
        } else {
            None
        }
    }

    /// Cell at `pos` moved by `v`, None if that falls outside the maze on any side.
    pub fn probe(&self, pos: &Position, v: Vector) -> Option<Cell> {
        pos.offset(v).and_then(|next_pos| self.cell(&next_pos))
    }

    /// Directions leading to a passable cell, in declaration order of `Direction`.
    pub fn possible_dirs(&self, pos: &Position) -> Vec<Direction> {
        Direction::all()
            .iter()
            .copied()
            .filter(|dir| {
                self.probe(pos, dir.vector())
                    .is_some_and(|cell| cell.can_pass())
            })
            .collect()
    }

    /// Position of the entrance, searched on the border first.
    ///
    /// The first search is cached for the lifetime of the maze.
    pub fn start_pos(&self) -> Result<Position, Error> {
        self.start_pos
            .get_or_try_init(|| {
                let pos = self.find_cell(Cell::Entrance).ok_or(Error::NoEntrance)?;
                debug!("Found entrance at {}.", pos);
                Ok(pos)
            })
            .copied()
    }

    pub fn exit_pos(&self) -> Option<Position> {
        self.find_cell(Cell::Exit)
    }

    pub fn is_on_border(&self, pos: &Position) -> bool {
        pos.x() == 0 || pos.y() == 0 || pos.x() + 1 == self.width || pos.y() + 1 == self.height
    }

    /// Checks the maze is something a walker can go through from the entrance to the exit.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width < 3 || self.height < 3 {
            return Err(Error::MazeTooSmall(self.width, self.height));
        }

        let entrance_pos = self.unique_cell(Cell::Entrance)?;
        let exit_pos = self.unique_cell(Cell::Exit)?;
        for (cell, pos) in [(Cell::Entrance, entrance_pos), (Cell::Exit, exit_pos)] {
            if !self.is_on_border(&pos) {
                return Err(Error::NotOnBorder(cell, pos));
            }

            if !Direction::all()
                .iter()
                .any(|dir| self.probe(&pos, dir.vector()) == Some(Cell::Empty))
            {
                return Err(Error::Blocked(cell, pos));
            }
        }

        if let Some(open_pos) = self
            .border_positions()
            .find(|pos| self.cell(pos) == Some(Cell::Empty))
        {
            return Err(Error::OpenBorder(open_pos));
        }

        Ok(())
    }

    pub fn walk(&self) -> Result<Walk, Error> {
        Walker::new(self).walk()
    }

    /// Route from the entrance to the exit with dead ends pruned, None if the walker can't get out.
    pub fn solve(&self) -> Result<Option<Vec<Position>>, Error> {
        Ok(self.walk()?.solution())
    }

    /// The maze text with every empty cell on `route` drawn as '.'.
    pub fn render_route(&self, route: &[Position]) -> String {
        let on_route = route.iter().collect::<HashSet<_>>();
        let mut text = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Position::new(x, y);
                let cell = self.cells[y * self.width + x];
                if cell == Cell::Empty && on_route.contains(&pos) {
                    text.push('.');
                } else {
                    text.push(cell.symbol());
                }
            }
            text.push('\n');
        }

        text
    }

    fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    // Top row, then both sides of each middle row, then bottom row.
    fn border_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| {
            let xs = if y == 0 || y + 1 == self.height || self.width <= 2 {
                (0..self.width).collect::<Vec<_>>()
            } else {
                vec![0, self.width - 1]
            };
            xs.into_iter().map(move |x| Position::new(x, y))
        })
    }

    fn find_cell(&self, target: Cell) -> Option<Position> {
        self.border_positions()
            .find(|pos| self.cell(pos) == Some(target))
            .or_else(|| self.positions().find(|pos| self.cell(pos) == Some(target)))
    }

    fn unique_cell(&self, target: Cell) -> Result<Position, Error> {
        let mut found = self.positions().filter(|pos| self.cell(pos) == Some(target));
        let first_pos = found.next().ok_or(match target {
            Cell::Exit => Error::NoExit,
            _ => Error::NoEntrance,
        })?;
        if let Some(second_pos) = found.next() {
            return Err(match target {
                Cell::Exit => Error::MultipleExits(first_pos, second_pos),
                _ => Error::MultipleEntrances(first_pos, second_pos),
            });
        }

        Ok(first_pos)
    }
}

/// Collects rows of a maze, checking every row has a known character set and the same length.
#[derive(Debug)]
pub struct MazeBuilder {
    cells: Vec<Cell>,
    height: usize,
    width: Option<usize>,
}

impl MazeBuilder {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            height: 0,
            width: None,
        }
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_width = text.chars().count();
        let width = *self.width.get_or_insert(this_width);
        if width != this_width {
            return Err(Error::InconsistentRow {
                row: self.height,
                expect: width,
                given: this_width,
            });
        }

        for (ind, c) in text.chars().enumerate() {
            let cell = Cell::try_from(c)
                .map_err(|c| Error::InvalidCharInMaze(c, Position::new(ind, self.height)))?;
            self.cells.push(cell);
        }
        self.height += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Maze, Error> {
        let Some(width) = self.width.filter(|width| *width > 0) else {
            return Err(Error::EmptyMaze);
        };

        Ok(Maze {
            cells: self.cells,
            width,
            height: self.height,
            start_pos: OnceCell::new(),
        })
    }
}

impl Default for MazeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
