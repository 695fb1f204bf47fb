use log::info;

use crate::area::{Area, EntityKind};
use crate::coord::Coord;
use crate::error::GridError;

/// A decoded level layout.
///
/// Levels arrive as rows of tile characters, row-major (row index = y,
/// column index = x), over the alphabet `'#'` wall, `' '` empty, `'O'`
/// agent, `'!'` enemy, `'X'` destination. Decoding also captures the
/// starting coordinates: the first agent, the first destination and every
/// enemy.
#[derive(Clone, Debug)]
pub struct Level {
    width: usize,
    height: usize,
    cells: Vec<(Coord, EntityKind)>,
    agent: Option<Coord>,
    destination: Option<Coord>,
    enemies: Vec<Coord>,
}

impl Level {
    /// Decodes a level from newline-separated rows. Rows shorter than the
    /// widest are padded with empty cells; a character outside the alphabet
    /// fails with [`GridError::DecodeError`].
    pub fn parse(text: &str) -> Result<Level, GridError> {
        let rows: Vec<&str> = text.lines().collect();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        let mut agent = None;
        let mut destination = None;
        let mut enemies = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            let mut x = 0;
            for glyph in row.chars() {
                let coord = Coord::new(x, y as i32);
                let kind = EntityKind::from_glyph(glyph)
                    .ok_or(GridError::DecodeError(glyph, coord))?;
                match kind {
                    EntityKind::Agent if agent.is_none() => agent = Some(coord),
                    EntityKind::Destination if destination.is_none() => {
                        destination = Some(coord)
                    }
                    EntityKind::Enemy => enemies.push(coord),
                    _ => {}
                }
                cells.push((coord, kind));
                x += 1;
            }
            while (x as usize) < width {
                cells.push((Coord::new(x, y as i32), EntityKind::Empty));
                x += 1;
            }
        }
        info!("decoded a {width}x{height} level with {} enemies", enemies.len());
        Ok(Level {
            width,
            height,
            cells,
            agent,
            destination,
            enemies,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Starting coordinate of the agent: the first `'O'` in row-major order.
    pub fn agent(&self) -> Option<Coord> {
        self.agent
    }

    /// Coordinate of the destination marker: the first `'X'`.
    pub fn destination(&self) -> Option<Coord> {
        self.destination
    }

    /// Every enemy starting coordinate, row-major.
    pub fn enemies(&self) -> &[Coord] {
        &self.enemies
    }

    /// Populates `area` with one placement call per decoded character,
    /// row-major. The area is expected to be freshly cleared; a leftover
    /// occupant surfaces as an occupancy conflict.
    pub fn apply(&self, area: &mut Area) -> Result<(), GridError> {
        for &(coord, kind) in &self.cells {
            area.add_entity(coord, kind)?;
        }
        area.update();
        Ok(())
    }

    /// Bootstraps a fresh area of the level's dimensions.
    pub fn to_area(&self) -> Result<Area, GridError> {
        let mut area = Area::new(self.width, self.height);
        self.apply(&mut area)?;
        Ok(area)
    }
}
