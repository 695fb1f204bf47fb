//! The four route solvers and the label-based selection surface.
//!
//! Every solver shares one contract: given the area, a source, a destination
//! and the diagonal-movement flag, produce the interior of a route (both
//! endpoints excluded) or an empty vector when no route exists. Traversal
//! only ever enters walkable cells.
//!
//! Result ordering differs by family and is part of the contract: the
//! depth-first solvers return source-to-destination order, while
//! [Dijkstra](dijkstra::DijkstraSolver) and [A*](astar::AstarSolver) return
//! walk-back order — index 0 is the cell adjacent to the *destination*.
//! Consumers that want "the next step toward X" path from X and read index 0,
//! as the pursuit policy does.

use std::str::FromStr;

use log::info;
use ordered_float::OrderedFloat;

use crate::area::Area;
use crate::coord::Coord;
use crate::error::GridError;
use crate::search::cheapest_route;

pub mod astar;
pub mod depth_first;
pub mod dijkstra;

use astar::AstarSolver;
use depth_first::DepthFirstSolver;
use dijkstra::DijkstraSolver;

/// A route solver over the area's walkable cells.
pub trait GridSolver {
    /// Per-neighbour cost addend biasing the frontier toward the
    /// destination. The default of zero leaves edge costs uniform.
    fn heuristic(&self, _neighbour: &Coord, _destination: &Coord) -> f64 {
        0.0
    }

    /// Computes the route interior. The default body runs the shared
    /// cheapest-route frontier with per-step cost `1 + heuristic`, skipping
    /// the search outright when the component structures prove the
    /// destination unreachable.
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
        cheapest_route(
            &source,
            &destination,
            |node| {
                area.walkable_neighbours(*node, allow_diagonals)
                    .into_iter()
                    .map(|neighbour| {
                        let cost = 1.0 + self.heuristic(&neighbour, &destination);
                        (neighbour, OrderedFloat(cost))
                    })
                    .collect::<Vec<_>>()
            },
            |node| area.cell_index(*node),
        )
    }
}

/// Selectable pathfinding algorithm, one per solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    RandomDepthFirst,
    DirectionalDepthFirst,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Every selectable algorithm, in presentation order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::RandomDepthFirst,
        Algorithm::DirectionalDepthFirst,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// The literal label shown on selection surfaces; inverse of `FromStr`.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::RandomDepthFirst => "Random Depth-First",
            Algorithm::DirectionalDepthFirst => "Directional Depth-First",
            Algorithm::Dijkstra => "Djikstra's Algorithm", // sic
            Algorithm::AStar => "A*",
        }
    }

    /// Runs the selected solver.
    pub fn find_path(
        &self,
        area: &Area,
        source: Coord,
        destination: Coord,
        allow_diagonals: bool,
    ) -> Vec<Coord> {
        match self {
            Algorithm::RandomDepthFirst => {
                DepthFirstSolver::new().find_path(area, source, destination, allow_diagonals)
            }
            Algorithm::DirectionalDepthFirst => {
                DepthFirstSolver::directed().find_path(area, source, destination, allow_diagonals)
            }
            Algorithm::Dijkstra => {
                DijkstraSolver.find_path(area, source, destination, allow_diagonals)
            }
            Algorithm::AStar => {
                AstarSolver::new().find_path(area, source, destination, allow_diagonals)
            }
        }
    }
}

impl FromStr for Algorithm {
    type Err = GridError;

    fn from_str(label: &str) -> Result<Algorithm, GridError> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.label() == label)
            .ok_or_else(|| GridError::InvalidSelection(label.to_owned()))
    }
}
