//! # grid_pursuit
//!
//! A grid pathfinding sandbox: a fixed-size entity grid (walls, an agent,
//! enemies, a destination marker) with four interchangeable route solvers —
//! plain and directed depth-first backtracking, Dijkstra, and an
//! inflated-cost A* — plus a pursuit policy that reuses the Dijkstra solver
//! to walk enemies toward the agent one cell per tick. Levels load from
//! character grids and every visual change flows through a pluggable
//! [TileRenderer] seam. Connected components over the walkable cells are
//! tracked with a [petgraph::unionfind::UnionFind] so hopeless searches are
//! skipped without flood-filling.
//!
//! The grid is 4-connected, optionally 8-connected per call, with unit edge
//! weights throughout; this is deliberately not a general graph library.

pub mod area;
pub mod coord;
pub mod error;
pub mod level;
pub mod pursuit;
mod search;
pub mod solver;

pub use crate::area::{Area, EntityKind, MoveOutcome, NullRenderer, TileRenderer};
pub use crate::coord::{Coord, Direction};
pub use crate::error::GridError;
pub use crate::level::Level;
pub use crate::pursuit::{PursuitOutcome, DETECTION_RADIUS};
pub use crate::solver::{Algorithm, GridSolver};
