//! Per-tick enemy pursuit.
//!
//! Enemies chase by borrowing the agent's own shortest route: the policy
//! runs Dijkstra from the *agent* to the enemy and advances the enemy into
//! the route's index 0, the cell adjacent to the enemy itself. Walking the
//! agent's route backwards works because shortest distance is symmetric on
//! an undirected unit grid.

use log::debug;

use crate::area::{Area, EntityKind};
use crate::coord::Coord;
use crate::error::GridError;
use crate::solver::dijkstra::DijkstraSolver;
use crate::solver::GridSolver;

/// Euclidean radius within which an enemy notices the agent.
pub const DETECTION_RADIUS: f64 = 6.0;

/// What a single enemy did with its tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PursuitOutcome {
    /// The enemy already occupies the agent's cell; the agent is dead and
    /// the caller resets the level.
    Caught,
    /// The enemy advanced into the given cell.
    Advanced(Coord),
    /// The enemy held position: agent out of range, no route, or the step
    /// cell is taken by another enemy or the destination marker.
    Held,
}

/// Advances one enemy by at most one cell toward the agent. Relocation goes
/// through the same add/delete calls every caller uses; the policy has no
/// privileged access to the store.
pub fn pursue(
    area: &mut Area,
    enemy: Coord,
    agent: Coord,
    allow_diagonals: bool,
) -> Result<PursuitOutcome, GridError> {
    if enemy == agent {
        return Ok(PursuitOutcome::Caught);
    }
    if !enemy.within_proximity(DETECTION_RADIUS, agent) {
        return Ok(PursuitOutcome::Held);
    }
    let route = DijkstraSolver.find_path(area, agent, enemy, allow_diagonals);
    let Some(&step) = route.first() else {
        // Adjacent to the agent (empty interior) or walled off entirely.
        return Ok(PursuitOutcome::Held);
    };
    match area.entity_at(step) {
        Some(EntityKind::Enemy) | Some(EntityKind::Destination) => {
            debug!("enemy at {enemy} holds, {step} is taken");
            Ok(PursuitOutcome::Held)
        }
        _ => {
            area.delete_entity(enemy);
            area.add_entity(step, EntityKind::Enemy)?;
            debug!("enemy advanced {enemy} -> {step}");
            Ok(PursuitOutcome::Advanced(step))
        }
    }
}

/// Runs the pursuit policy over every enemy for one agent-movement tick,
/// rewriting advanced positions in place. Returns `true` if the agent was
/// caught; catching is terminal, so remaining enemies are not processed.
pub fn tick(
    area: &mut Area,
    agent: Coord,
    enemies: &mut [Coord],
    allow_diagonals: bool,
) -> Result<bool, GridError> {
    for slot in enemies.iter_mut() {
        match pursue(area, *slot, agent, allow_diagonals)? {
            PursuitOutcome::Caught => return Ok(true),
            PursuitOutcome::Advanced(step) => *slot = step,
            PursuitOutcome::Held => {}
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_with(entities: &[(Coord, EntityKind)]) -> Area {
        let mut area = Area::new(10, 10);
        for &(coord, kind) in entities {
            area.add_entity(coord, kind).unwrap();
        }
        area.update();
        area
    }

    #[test]
    fn enemy_in_range_closes_the_gap() {
        let agent = Coord::new(2, 2);
        let enemy = Coord::new(5, 2);
        let mut area = area_with(&[(agent, EntityKind::Agent), (enemy, EntityKind::Enemy)]);
        let outcome = pursue(&mut area, enemy, agent, false).unwrap();
        let PursuitOutcome::Advanced(step) = outcome else {
            panic!("expected an advance, got {outcome:?}");
        };
        assert!(step.distance(agent) < enemy.distance(agent));
        assert_eq!(area.entity_at(enemy), None);
        assert_eq!(area.entity_at(step), Some(EntityKind::Enemy));
    }

    #[test]
    fn enemy_out_of_range_holds() {
        let agent = Coord::new(0, 0);
        let enemy = Coord::new(9, 9); // distance ~12.7
        let mut area = area_with(&[(agent, EntityKind::Agent), (enemy, EntityKind::Enemy)]);
        assert_eq!(
            pursue(&mut area, enemy, agent, false).unwrap(),
            PursuitOutcome::Held
        );
        assert_eq!(area.entity_at(enemy), Some(EntityKind::Enemy));
    }

    #[test]
    fn blocked_step_holds() {
        let agent = Coord::new(2, 2);
        let enemy = Coord::new(5, 2);
        // The only shortest first hop for the enemy is (4, 2); occupy it.
        let blocker = Coord::new(4, 2);
        let mut area = area_with(&[
            (agent, EntityKind::Agent),
            (enemy, EntityKind::Enemy),
            (blocker, EntityKind::Enemy),
        ]);
        assert_eq!(
            pursue(&mut area, enemy, agent, false).unwrap(),
            PursuitOutcome::Held
        );
        assert_eq!(area.entity_at(enemy), Some(EntityKind::Enemy));
        assert_eq!(area.entity_at(blocker), Some(EntityKind::Enemy));
    }

    #[test]
    fn destination_marker_blocks_the_step() {
        let agent = Coord::new(2, 2);
        let enemy = Coord::new(5, 2);
        let marker = Coord::new(4, 2);
        let mut area = area_with(&[
            (agent, EntityKind::Agent),
            (enemy, EntityKind::Enemy),
            (marker, EntityKind::Destination),
        ]);
        assert_eq!(
            pursue(&mut area, enemy, agent, false).unwrap(),
            PursuitOutcome::Held
        );
    }

    #[test]
    fn co_located_enemy_catches_the_agent() {
        let agent = Coord::new(3, 3);
        let mut area = area_with(&[(agent, EntityKind::Agent)]);
        assert_eq!(
            pursue(&mut area, agent, agent, false).unwrap(),
            PursuitOutcome::Caught
        );
    }

    #[test]
    fn adjacent_enemy_holds() {
        let agent = Coord::new(2, 2);
        let enemy = Coord::new(3, 2);
        let mut area = area_with(&[(agent, EntityKind::Agent), (enemy, EntityKind::Enemy)]);
        assert_eq!(
            pursue(&mut area, enemy, agent, false).unwrap(),
            PursuitOutcome::Held
        );
    }

    #[test]
    fn tick_sweeps_every_enemy_and_stops_on_a_catch() {
        let agent = Coord::new(4, 4);
        let near = Coord::new(4, 7);
        let far = Coord::new(9, 9);
        let mut area = area_with(&[
            (agent, EntityKind::Agent),
            (near, EntityKind::Enemy),
            (far, EntityKind::Enemy),
        ]);
        let mut enemies = vec![near, far];
        assert!(!tick(&mut area, agent, &mut enemies, false).unwrap());
        assert!(enemies[0].distance(agent) < near.distance(agent));
        assert_eq!(enemies[1], far);

        // A co-located enemy ends the tick immediately.
        let mut enemies = vec![agent, far];
        assert!(tick(&mut area, agent, &mut enemies, false).unwrap());
        assert_eq!(enemies[1], far);
    }

    /// An enemy at Euclidean distance 3 is well inside the radius and must
    /// end its tick strictly closer.
    #[test]
    fn distance_three_enemy_advances() {
        let agent = Coord::new(2, 5);
        let enemy = Coord::new(2, 8);
        let mut area = area_with(&[(agent, EntityKind::Agent), (enemy, EntityKind::Enemy)]);
        let outcome = pursue(&mut area, enemy, agent, false).unwrap();
        assert_eq!(outcome, PursuitOutcome::Advanced(Coord::new(2, 7)));
    }
}
