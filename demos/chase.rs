use grid_pursuit::{pursuit, Area, Coord, EntityKind};

// A single enemy chases a stationary agent across an open field until it
// stands next to it (adjacent enemies hold position rather than stepping
// onto the agent).
fn main() {
    let mut area = Area::new(12, 8);
    let agent = Coord::new(2, 4);
    let mut enemies = vec![Coord::new(7, 2)];
    area.add_entity(agent, EntityKind::Agent).unwrap();
    area.add_entity(enemies[0], EntityKind::Enemy).unwrap();
    area.update();

    for tick in 1..=10 {
        let caught = pursuit::tick(&mut area, agent, &mut enemies, false).unwrap();
        println!("tick {tick}: enemy at {}", enemies[0]);
        if caught {
            println!("the agent has been caught");
            break;
        }
        if enemies[0].within_proximity(1.0, agent) {
            println!("the enemy is adjacent and holds position");
            break;
        }
    }
    println!("{area}");
}
