use std::fmt::Display;

use log::{debug, trace};

use crate::{route, Direction, Error, Position};

use super::{Cell, Maze};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEnd {
    ReachedExit,
    Stuck(Position), // No passable neighbor around this position.
    Blocked(Position, Cell), // Walked onto a cell that is neither empty nor the exit.
}

impl Display for WalkEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalkEnd::ReachedExit => write!(f, "reached the exit"),
            WalkEnd::Stuck(pos) => write!(f, "got stuck at {}", pos),
            WalkEnd::Blocked(pos, cell) => write!(f, "ended on the {} at {}", cell, pos),
        }
    }
}

/// Everything a walker went through, loops included.
#[derive(Debug, Clone)]
pub struct Walk {
    path: Vec<Position>,
    end: WalkEnd,
}

impl Walk {
    fn new(path: Vec<Position>, end: WalkEnd) -> Self {
        Self { path, end }
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn end(&self) -> WalkEnd {
        self.end
    }

    pub fn is_solved(&self) -> bool {
        self.end == WalkEnd::ReachedExit
    }

    pub fn solution(&self) -> Option<Vec<Position>> {
        self.is_solved().then(|| route::prune_loops(&self.path))
    }
}

/// Walks a maze cell by cell keeping one hand on the wall.
#[derive(Debug, Clone)]
pub struct Walker<'a> {
    maze: &'a Maze,
    step_limit: usize,
}

impl<'a> Walker<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        // The next move only depends on the cell and the heading, so any walk longer than
        // this has entered a cycle.
        let step_limit = 4 * maze.width() * maze.height();
        Self { maze, step_limit }
    }

    pub fn with_step_limit(mut self, step_limit: usize) -> Self {
        self.step_limit = step_limit;
        self
    }

    pub fn step_limit(&self) -> usize {
        self.step_limit
    }

    pub fn walk(&self) -> Result<Walk, Error> {
        let mut cur_pos = self.maze.start_pos()?;
        let mut path = vec![cur_pos];
        loop {
            let dirs = self.maze.possible_dirs(&cur_pos);
            trace!("At {}, possible directions: {:?}.", cur_pos, dirs);
            let Some(next_pos) = self
                .next_dir(&path, &dirs)
                .and_then(|dir| cur_pos.move_along(dir))
            else {
                debug!(
                    "Walker got stuck at {} after {} step(s).",
                    cur_pos,
                    path.len() - 1
                );
                return Ok(Walk::new(path, WalkEnd::Stuck(cur_pos)));
            };

            if path.len() > self.step_limit {
                return Err(Error::StepLimitExceeded(self.step_limit));
            }

            trace!("Move from {} to {}.", cur_pos, next_pos);
            cur_pos = next_pos;
            path.push(cur_pos);
            match self.maze.cell(&cur_pos).unwrap_or(Cell::Wall) {
                Cell::Empty => (),
                Cell::Exit => {
                    debug!(
                        "Walker reached exit at {} after {} step(s).",
                        cur_pos,
                        path.len() - 1
                    );
                    return Ok(Walk::new(path, WalkEnd::ReachedExit));
                }
                other => {
                    debug!(
                        "Walker stopped on {} at {} after {} step(s).",
                        other,
                        cur_pos,
                        path.len() - 1
                    );
                    return Ok(Walk::new(path, WalkEnd::Blocked(cur_pos, other)));
                }
            }
        }
    }

    fn next_dir(&self, path: &[Position], dirs: &[Direction]) -> Option<Direction> {
        // In a corridor there's nothing to choose.
        if let [dir] = dirs {
            return Some(*dir);
        }

        let heading = match path {
            [.., last_pos, cur_pos] => Direction::try_from(cur_pos.vector_from(last_pos)).ok(),
            _ => None,
        };
        let priority = heading
            .map(|dir| dir.priority_order())
            .unwrap_or(*Direction::initial_priority());
        trace!("Heading {:?}, priority {:?}.", heading, priority);

        priority.into_iter().find(|dir| dirs.contains(dir))
    }
}
