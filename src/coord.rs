use core::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::GridError;

/// An integer cell position on the grid, in screen-space convention:
/// x grows rightward, y grows downward. Values are plain data; positions
/// outside any particular grid are representable and callers filter them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// Orthogonal offsets in the canonical order: up, left, right, down.
/// This order seeds every neighbour batch and therefore decides which of
/// several equally good routes a solver commits to first.
const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Diagonal offsets, appended after the orthogonal four when enabled:
/// up-left, up-right, down-left, down-right.
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

impl Coord {
    pub fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }

    /// The 4 orthogonal neighbours, plus the 4 diagonal neighbours appended
    /// after them when `include_diagonals` is set. No bounds checking is done
    /// here; out-of-grid positions are valid values for the caller to filter.
    pub fn neighbours(&self, include_diagonals: bool) -> SmallVec<[Coord; 8]> {
        let mut batch: SmallVec<[Coord; 8]> = ORTHOGONAL
            .iter()
            .map(|(dx, dy)| Coord::new(self.x + dx, self.y + dy))
            .collect();
        if include_diagonals {
            batch.extend(
                DIAGONAL
                    .iter()
                    .map(|(dx, dy)| Coord::new(self.x + dx, self.y + dy)),
            );
        }
        batch
    }

    /// Component-wise absolute difference, itself a coordinate value.
    pub fn difference(&self, other: Coord) -> Coord {
        Coord::new((self.x - other.x).abs(), (self.y - other.y).abs())
    }

    /// Euclidean norm of the coordinate treated as a vector.
    pub fn magnitude(&self) -> f64 {
        let x = f64::from(self.x);
        let y = f64::from(self.y);
        (x * x + y * y).sqrt()
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: Coord) -> f64 {
        self.difference(other).magnitude()
    }

    /// Whether `other` lies within `radius` (Euclidean, inclusive).
    pub fn within_proximity(&self, radius: f64, other: Coord) -> bool {
        self.distance(other) <= radius
    }

    /// The cell one unit away in `direction`. Up decreases y and down
    /// increases it (screen space).
    pub fn step(&self, direction: Direction) -> Coord {
        let (dx, dy) = direction.offset();
        Coord::new(self.x + dx, self.y + dy)
    }

    /// Packed cell identity: x in the high 32 bits, y in the low 32.
    /// Inverse of [`Coord::from_key`] for every coordinate, negative
    /// components included.
    pub fn key(&self) -> u64 {
        (u64::from(self.x as u32) << 32) | u64::from(self.y as u32)
    }

    /// Unpacks a key produced by [`Coord::key`].
    pub fn from_key(key: u64) -> Coord {
        Coord::new((key >> 32) as u32 as i32, key as u32 as i32)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four orthogonal movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The (dx, dy) offset of a single step, screen space.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl FromStr for Direction {
    type Err = GridError;

    /// Parses a movement token as dispatched by input handlers. Unrecognized
    /// tokens are an [`GridError::InvalidDirection`] error.
    fn from_str(token: &str) -> Result<Direction, GridError> {
        if token.eq_ignore_ascii_case("up") {
            Ok(Direction::Up)
        } else if token.eq_ignore_ascii_case("down") {
            Ok(Direction::Down)
        } else if token.eq_ignore_ascii_case("left") {
            Ok(Direction::Left)
        } else if token.eq_ignore_ascii_case("right") {
            Ok(Direction::Right)
        } else {
            Err(GridError::InvalidDirection(token.to_owned()))
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trips() {
        for coord in [
            Coord::new(0, 0),
            Coord::new(4, 7),
            Coord::new(-3, 12),
            Coord::new(250, -9),
            Coord::new(i32::MIN, i32::MAX),
        ] {
            assert_eq!(Coord::from_key(coord.key()), coord);
        }
    }

    #[test]
    fn orthogonal_neighbours_in_order() {
        let c = Coord::new(3, 3);
        let batch = c.neighbours(false);
        assert_eq!(
            batch.as_slice(),
            [
                Coord::new(3, 2),
                Coord::new(2, 3),
                Coord::new(4, 3),
                Coord::new(3, 4),
            ]
        );
    }

    #[test]
    fn diagonal_neighbours_appended() {
        let c = Coord::new(0, 0);
        let four = c.neighbours(false);
        let eight = c.neighbours(true);
        assert_eq!(four.len(), 4);
        assert_eq!(eight.len(), 8);
        assert_eq!(&eight[..4], four.as_slice());
        assert_eq!(
            &eight[4..],
            [
                Coord::new(-1, -1),
                Coord::new(1, -1),
                Coord::new(-1, 1),
                Coord::new(1, 1),
            ]
        );
    }

    #[test]
    fn step_and_back() {
        let c = Coord::new(5, 5);
        for d in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(c.step(d).step(d.opposite()), c);
        }
        assert_eq!(c.step(Direction::Up), Coord::new(5, 4));
        assert_eq!(c.step(Direction::Down), Coord::new(5, 6));
    }

    #[test]
    fn proximity_is_euclidean() {
        let origin = Coord::new(0, 0);
        assert!(origin.within_proximity(5.0, Coord::new(3, 4)));
        assert!(!origin.within_proximity(4.9, Coord::new(3, 4)));
        assert_eq!(Coord::new(2, 5).difference(Coord::new(5, 1)), Coord::new(3, 4));
    }

    #[test]
    fn direction_tokens() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("Right".parse::<Direction>().unwrap(), Direction::Right);
        assert!(matches!(
            "north".parse::<Direction>(),
            Err(GridError::InvalidDirection(_))
        ));
    }
}
