use std::collections::{HashMap, HashSet};

use log::debug;

use crate::Position;

/// Removes every loop from a walked path.
///
/// The cursor keeps a position, then jumps to the last time that position was visited, so
/// whatever the walk did in between (a dead end, a circle around an island) is dropped. The
/// result starts and ends where `path` does, is a subsequence of it and visits every position
/// once. Consecutive positions in the result were consecutive in `path`.
pub fn prune_loops(path: &[Position]) -> Vec<Position> {
    let mut last_visit_inds = HashMap::with_capacity(path.len());
    for (ind, pos) in path.iter().enumerate() {
        last_visit_inds.insert(pos, ind);
    }

    let mut route = Vec::with_capacity(last_visit_inds.len());
    let mut ind = 0;
    while let Some(pos) = path.get(ind) {
        route.push(*pos);
        ind = last_visit_inds[pos] + 1;
    }

    if route.len() < path.len() {
        debug!(
            "Pruned {} position(s) on loops from a walk of {}.",
            path.len() - route.len(),
            path.len()
        );
    }

    route
}

pub fn has_revisits(path: &[Position]) -> bool {
    let mut visited = HashSet::with_capacity(path.len());
    !path.iter().all(|pos| visited.insert(pos))
}
