use crate::coord::Coord;
use crate::solver::GridSolver;

/// Heuristic-directed solver: per-step cost is 1 plus the Euclidean distance
/// from the candidate neighbour to the destination.
///
/// The heuristic is folded straight into realized distance rather than kept
/// as a separate estimate, so this is an inflated-cost variant: it pulls the
/// frontier hard toward the destination and can trade away step-count
/// optimality around obstacles. That trade-off is the intended behaviour,
/// not an approximation of the classical algorithm.
#[derive(Clone, Copy, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f64,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn heuristic(&self, neighbour: &Coord, destination: &Coord) -> f64 {
        neighbour.distance(*destination) * self.heuristic_factor
    }
}
