use grid_pursuit::solver::dijkstra::DijkstraSolver;
use grid_pursuit::{Area, Coord, EntityKind, GridSolver};

// In this demo a route is found on a grid with shape
// #####
// #S  #
// # # #
// #  E#
// #####
// S marks the start
// E marks the end
fn main() {
    let mut area = Area::new(5, 5);
    for x in 0..5 {
        area.add_entity(Coord::new(x, 0), EntityKind::Wall).unwrap();
        area.add_entity(Coord::new(x, 4), EntityKind::Wall).unwrap();
    }
    for y in 1..4 {
        area.add_entity(Coord::new(0, y), EntityKind::Wall).unwrap();
        area.add_entity(Coord::new(4, y), EntityKind::Wall).unwrap();
    }
    area.add_entity(Coord::new(2, 2), EntityKind::Wall).unwrap();
    area.update();
    let start = Coord::new(1, 1);
    let end = Coord::new(3, 3);
    let route = DijkstraSolver.find_path(&area, start, end, false);
    if route.is_empty() {
        println!("No route exists");
    } else {
        println!("A route has been found (walk-back order):");
        for cell in route {
            println!("{cell}");
        }
    }
}
