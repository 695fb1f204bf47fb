use crate::solver::GridSolver;

/// Uniform-cost solver: unit edge weight, no heuristic. Routes are shortest
/// in step count; cost ties fall to the lower row-major cell index.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::{Area, EntityKind};
    use crate::coord::Coord;

    /// Open 5×5 grid, corner to corner without diagonals: an 8-step route,
    /// so 7 interior cells.
    #[test]
    fn open_grid_route_is_manhattan_optimal() {
        let area = Area::new(5, 5);
        let route = DijkstraSolver.find_path(&area, Coord::new(0, 0), Coord::new(4, 4), false);
        assert_eq!(route.len(), 7);
    }

    /// The interior comes back in walk-back order: index 0 borders the
    /// destination and the last element borders the source.
    #[test]
    fn route_is_destination_first() {
        let area = Area::new(5, 5);
        let source = Coord::new(0, 0);
        let destination = Coord::new(4, 4);
        let route = DijkstraSolver.find_path(&area, source, destination, false);
        assert_eq!(route[0].difference(destination).magnitude(), 1.0);
        assert_eq!(route[route.len() - 1].difference(source).magnitude(), 1.0);
    }

    #[test]
    fn routes_detour_around_walls() {
        //  O#.
        //  .#.
        //  .#X  with a gap at the bottom
        let mut area = Area::new(3, 4);
        for y in 0..3 {
            area.add_entity(Coord::new(1, y), EntityKind::Wall).unwrap();
        }
        area.update();
        let route = DijkstraSolver.find_path(&area, Coord::new(0, 0), Coord::new(2, 2), false);
        assert!(!route.is_empty());
        for cell in &route {
            assert!(area.is_walkable(*cell));
        }
        // Down the left column, across the gap row, back up: 6 steps, so 5
        // interior cells.
        assert_eq!(route.len(), 5);
    }

    #[test]
    fn adjacent_cells_give_an_empty_interior() {
        let area = Area::new(3, 3);
        let route = DijkstraSolver.find_path(&area, Coord::new(0, 0), Coord::new(0, 1), false);
        assert!(route.is_empty());
    }

    #[test]
    fn diagonals_shorten_the_route() {
        let area = Area::new(5, 5);
        let straight = DijkstraSolver.find_path(&area, Coord::new(0, 0), Coord::new(4, 4), false);
        let diagonal = DijkstraSolver.find_path(&area, Coord::new(0, 0), Coord::new(4, 4), true);
        assert_eq!(straight.len(), 7);
        assert_eq!(diagonal.len(), 3);
    }

    /// Equal-cost frontier ties resolve by ascending row-major index, so the
    /// same query always yields the same route.
    #[test]
    fn tie_breaking_is_deterministic() {
        let area = Area::new(4, 4);
        let first = DijkstraSolver.find_path(&area, Coord::new(0, 0), Coord::new(3, 3), false);
        for _ in 0..10 {
            let again = DijkstraSolver.find_path(&area, Coord::new(0, 0), Coord::new(3, 3), false);
            assert_eq!(first, again);
        }
    }
}
