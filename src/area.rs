use core::fmt;

use fxhash::FxHashMap;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::coord::{Coord, Direction};
use crate::error::GridError;

/// The semantic occupant of a cell. Empty cells are never stored in the
/// occupancy map; absence means empty. Navigated is visualization-only and
/// flows to renderers rather than into the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Empty,
    Wall,
    Agent,
    Destination,
    Enemy,
    Navigated,
}

impl EntityKind {
    /// Display glyph; inverse of [`EntityKind::from_glyph`] for the level
    /// alphabet. Navigated renders as `'*'` in dumps only.
    pub fn glyph(&self) -> char {
        match self {
            EntityKind::Empty => ' ',
            EntityKind::Wall => '#',
            EntityKind::Agent => 'O',
            EntityKind::Destination => 'X',
            EntityKind::Enemy => '!',
            EntityKind::Navigated => '*',
        }
    }

    /// Decodes a level character. `None` for anything outside the alphabet.
    pub fn from_glyph(glyph: char) -> Option<EntityKind> {
        match glyph {
            ' ' => Some(EntityKind::Empty),
            '#' => Some(EntityKind::Wall),
            'O' => Some(EntityKind::Agent),
            'X' => Some(EntityKind::Destination),
            '!' => Some(EntityKind::Enemy),
            _ => None,
        }
    }
}

/// Tile-paint surface for the rendering layer. The store calls this on every
/// entity add, delete and move, and on route highlight/clear.
pub trait TileRenderer {
    fn paint(&mut self, cell: Coord, kind: EntityKind);
}

/// Renderer that ignores every paint request.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl TileRenderer for NullRenderer {
    fn paint(&mut self, _cell: Coord, _kind: EntityKind) {}
}

/// Result of [`Area::move_entity`]. A displaced occupant is reported to the
/// caller rather than silently dropped; the store ends holding the mover
/// either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved {
        to: Coord,
        displaced: Option<EntityKind>,
    },
    Blocked,
}

/// Fixed-size entity grid: W×H bounds, a sparse coordinate→entity map, and
/// connected-component bookkeeping over the walkable cells.
///
/// Components mirror the occupancy map using a [UnionFind] per connectivity
/// (cardinal and diagonal, since callers pick diagonal movement per search).
/// Placing a wall marks them dirty; removing one reunions the freed cell in
/// place, so a rebuild is only ever needed after wall placement.
pub struct Area {
    width: usize,
    height: usize,
    entities: FxHashMap<Coord, EntityKind>,
    cardinal: UnionFind<usize>,
    diagonal: UnionFind<usize>,
    components_dirty: bool,
    renderer: Box<dyn TileRenderer>,
}

impl Area {
    pub fn new(width: usize, height: usize) -> Area {
        Area::with_renderer(width, height, Box::new(NullRenderer))
    }

    pub fn with_renderer(width: usize, height: usize, renderer: Box<dyn TileRenderer>) -> Area {
        // The component structures start empty, so they are born dirty and
        // answer conservatively until the first regeneration.
        Area {
            width,
            height,
            entities: FxHashMap::default(),
            cardinal: UnionFind::new(width * height),
            diagonal: UnionFind::new(width * height),
            components_dirty: true,
            renderer,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounds check only; ignores occupancy.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// In bounds and not a wall. Cells holding the agent, an enemy or the
    /// destination marker are still walkable: this predicate gates traversal
    /// and movement, not entity placement.
    pub fn is_walkable(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && self.entities.get(&coord) != Some(&EntityKind::Wall)
    }

    pub fn entity_at(&self, coord: Coord) -> Option<EntityKind> {
        self.entities.get(&coord).copied()
    }

    /// Row-major cell index, used as the component id and the deterministic
    /// frontier tie-break. Callers check bounds first.
    pub fn cell_index(&self, coord: Coord) -> usize {
        coord.y as usize * self.width + coord.x as usize
    }

    /// Records `kind` at `coord` and notifies the renderer. Fails if the cell
    /// already holds any entity. Empty is accepted (level rows contain it)
    /// but never stored.
    pub fn add_entity(&mut self, coord: Coord, kind: EntityKind) -> Result<(), GridError> {
        if !self.in_bounds(coord) {
            return Err(GridError::OutOfBounds(coord));
        }
        if let Some(&occupant) = self.entities.get(&coord) {
            return Err(GridError::OccupancyConflict(coord, occupant));
        }
        if kind != EntityKind::Empty {
            debug!("placing {kind:?} at {coord}");
            self.entities.insert(coord, kind);
            if kind == EntityKind::Wall {
                self.components_dirty = true;
            }
        }
        self.renderer.paint(coord, kind);
        Ok(())
    }

    /// Removes the entry at `coord` if present; silently tolerant of absence.
    /// The renderer is told the cell is now empty either way.
    pub fn delete_entity(&mut self, coord: Coord) {
        if let Some(kind) = self.entities.remove(&coord) {
            debug!("removing {kind:?} from {coord}");
            if kind == EntityKind::Wall {
                self.reconnect(coord);
            }
        }
        self.renderer.paint(coord, EntityKind::Empty);
    }

    /// Relocates whatever entity occupies `coord` one step in `direction`,
    /// provided the target cell is walkable. Anything already at the target
    /// (another entity on a non-wall cell) is overwritten in the store and
    /// reported as displaced. Blocked moves leave state untouched.
    pub fn move_entity(&mut self, coord: Coord, direction: Direction) -> MoveOutcome {
        let target = coord.step(direction);
        if !self.is_walkable(target) {
            return MoveOutcome::Blocked;
        }
        let Some(kind) = self.entities.remove(&coord) else {
            return MoveOutcome::Blocked;
        };
        let displaced = self.entities.insert(target, kind);
        if kind == EntityKind::Wall {
            self.components_dirty = true;
        }
        self.renderer.paint(coord, EntityKind::Empty);
        self.renderer.paint(target, kind);
        debug!("moved {kind:?} {direction} from {coord} to {target}");
        MoveOutcome::Moved {
            to: target,
            displaced,
        }
    }

    /// Neighbours of `coord` in the canonical order, filtered to walkable
    /// cells.
    pub fn walkable_neighbours(
        &self,
        coord: Coord,
        allow_diagonals: bool,
    ) -> SmallVec<[Coord; 8]> {
        coord
            .neighbours(allow_diagonals)
            .into_iter()
            .filter(|n| self.is_walkable(*n))
            .collect()
    }

    /// Discards the whole occupancy map; used on level change and agent
    /// death. Components reset to the fully connected state.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.components_dirty = true;
        self.generate_components();
    }

    pub fn set_renderer(&mut self, renderer: Box<dyn TileRenderer>) {
        self.renderer = renderer;
    }

    /// Paints every cell of `route` as navigated. Highlight only; the store
    /// is untouched.
    pub fn paint_route(&mut self, route: &[Coord]) {
        for &cell in route {
            self.renderer.paint(cell, EntityKind::Navigated);
        }
    }

    /// Clears a highlight by repainting each cell with its actual occupant.
    pub fn clear_route(&mut self, route: &[Coord]) {
        for &cell in route {
            let kind = self.entity_at(cell).unwrap_or(EntityKind::Empty);
            self.renderer.paint(cell, kind);
        }
    }

    /// Regenerates the components if wall placement has invalidated them.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Rebuilds both component structures by linking each walkable cell to
    /// its forward neighbours (right and down; the two down diagonals extend
    /// the diagonal structure).
    pub fn generate_components(&mut self) {
        info!("generating connected components over {}x{}", self.width, self.height);
        self.cardinal = UnionFind::new(self.width * self.height);
        self.diagonal = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let cell = Coord::new(x, y);
                if !self.is_walkable(cell) {
                    continue;
                }
                let here = self.cell_index(cell);
                for link in [Coord::new(x + 1, y), Coord::new(x, y + 1)] {
                    if self.is_walkable(link) {
                        let there = self.cell_index(link);
                        self.cardinal.union(here, there);
                        self.diagonal.union(here, there);
                    }
                }
                for link in [Coord::new(x + 1, y + 1), Coord::new(x - 1, y + 1)] {
                    if self.is_walkable(link) {
                        let there = self.cell_index(link);
                        self.diagonal.union(here, there);
                    }
                }
            }
        }
    }

    /// Whether `a` and `b` are provably on different components under the
    /// given connectivity. Conservative: answers `false` while the
    /// structures are dirty, so a stale answer can only cost search time.
    pub fn unreachable(&self, a: Coord, b: Coord, allow_diagonals: bool) -> bool {
        if !self.in_bounds(a) || !self.in_bounds(b) {
            return true;
        }
        if self.components_dirty {
            return false;
        }
        let components = if allow_diagonals {
            &self.diagonal
        } else {
            &self.cardinal
        };
        !components.equiv(self.cell_index(a), self.cell_index(b))
    }

    /// Reunions a freshly cleared cell with its walkable neighbours, keeping
    /// the components exact through wall removal.
    fn reconnect(&mut self, coord: Coord) {
        let here = self.cell_index(coord);
        for neighbour in coord.neighbours(true) {
            if !self.is_walkable(neighbour) {
                continue;
            }
            let there = self.cell_index(neighbour);
            self.diagonal.union(here, there);
            let delta = coord.difference(neighbour);
            if delta.x + delta.y == 1 {
                self.cardinal.union(here, there);
            }
        }
    }
}

impl fmt::Debug for Area {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Area")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("entities", &self.entities.len())
            .field("components_dirty", &self.components_dirty)
            .finish()
    }
}

impl fmt::Display for Area {
    /// Renders the grid in the level alphabet, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let kind = self
                    .entity_at(Coord::new(x, y))
                    .unwrap_or(EntityKind::Empty);
                write!(f, "{}", kind.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
