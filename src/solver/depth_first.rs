use fxhash::FxHashSet;
use log::info;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::area::Area;
use crate::coord::Coord;
use crate::solver::GridSolver;

/// Recursive backtracking solver.
///
/// The visited set grows monotonically across the whole search and is never
/// reset on backtrack: a cell entered down one branch is never re-entered
/// down another, so the route found is first-fit rather than shortest, and
/// branches sealed off by earlier exploration stay unexplored.
///
/// The undirected variant takes neighbour batches in the canonical order;
/// [directed](DepthFirstSolver::directed) stably sorts each batch by
/// Euclidean distance to the destination first, a greedy ordering with no
/// optimality guarantee.
#[derive(Clone, Copy, Debug)]
pub struct DepthFirstSolver {
    directed: bool,
}

impl DepthFirstSolver {
    /// Neighbour batches in canonical order.
    pub fn new() -> DepthFirstSolver {
        DepthFirstSolver { directed: false }
    }

    /// Neighbour batches sorted nearest-the-destination first.
    pub fn directed() -> DepthFirstSolver {
        DepthFirstSolver { directed: true }
    }

    /// Extends the trail with `current` and recurses until the destination
    /// is reached or the branch is exhausted. On a dead branch the trail
    /// entry is popped again; the visited marking stays.
    fn explore(
        &self,
        area: &Area,
        current: Coord,
        destination: Coord,
        allow_diagonals: bool,
        visited: &mut FxHashSet<u64>,
        trail: &mut Vec<Coord>,
    ) -> bool {
        visited.insert(current.key());
        trail.push(current);
        if current == destination {
            return true;
        }
        let mut batch: SmallVec<[Coord; 8]> = area
            .walkable_neighbours(current, allow_diagonals)
            .into_iter()
            .filter(|neighbour| !visited.contains(&neighbour.key()))
            .collect();
        if self.directed {
            batch.sort_by_key(|neighbour| OrderedFloat(neighbour.distance(destination)));
        }
        for neighbour in batch {
            // A sibling branch may have claimed the cell since the batch was
            // filtered.
            if visited.contains(&neighbour.key()) {
                continue;
            }
            if self.explore(area, neighbour, destination, allow_diagonals, visited, trail) {
                return true;
            }
        }
        trail.pop();
        false
    }
}

impl Default for DepthFirstSolver {
    fn default() -> DepthFirstSolver {
        DepthFirstSolver::new()
    }
}

impl GridSolver for DepthFirstSolver {
    /// Runs the backtracking search. The returned interior is in
    /// source-to-destination order, unlike the cheapest-route solvers.
    fn find_path(
        &self,
        area: &Area,
        source: Coord,
        destination: Coord,
        allow_diagonals: bool,
    ) -> Vec<Coord> {
        if !area.is_walkable(source) || !area.is_walkable(destination) {
            return Vec::new();
        }
        if area.unreachable(source, destination, allow_diagonals) {
            info!("{source} and {destination} are on different components, skipping search");
            return Vec::new();
        }
        let mut visited = FxHashSet::default();
        let mut trail = Vec::new();
        if !self.explore(
            area,
            source,
            destination,
            allow_diagonals,
            &mut visited,
            &mut trail,
        ) {
            return Vec::new();
        }
        // The trail runs source..=destination; keep the strict interior.
        trail.pop();
        if !trail.is_empty() {
            trail.remove(0);
        }
        trail
    }
}
