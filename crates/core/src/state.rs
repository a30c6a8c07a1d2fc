//! World aggregate: the immutable tile grid plus the mutable player and
//! guard collection that every subsystem receives by reference.

use slotmap::SlotMap;

use crate::types::{Cell, GuardId, TileKind, Vec2};

/// Tile matrix fixed at generation time. There is no mutation surface;
/// regenerating a level replaces the grid wholesale.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    tile_size: f32,
    tiles: Vec<TileKind>,
}

impl Grid {
    /// Builds a grid from a prepared row-major tile vector. Generation goes
    /// through `mapgen`; this constructor exists for fixtures and tools.
    pub fn from_tiles(width: usize, height: usize, tile_size: f32, tiles: Vec<TileKind>) -> Self {
        debug_assert_eq!(tiles.len(), width * height, "tile vector must fill the matrix");
        debug_assert!(tile_size > 0.0);
        Self { width, height, tile_size, tiles }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.height
            && (cell.col as usize) < self.width
    }

    /// Out-of-bounds cells read as `Wall`: impassable and vision-blocking.
    pub fn tile_at(&self, cell: Cell) -> TileKind {
        if !self.in_bounds(cell) {
            return TileKind::Wall;
        }
        self.tiles[(cell.row as usize) * self.width + (cell.col as usize)]
    }

    /// Classifies a continuous world coordinate by flooring into tile space.
    pub fn tile_at_world(&self, x: f32, y: f32) -> TileKind {
        self.tile_at(self.cell_of(x, y))
    }

    pub fn cell_of(&self, x: f32, y: f32) -> Cell {
        Cell { row: (y / self.tile_size).floor() as i32, col: (x / self.tile_size).floor() as i32 }
    }

    pub fn cell_center(&self, cell: Cell) -> Vec2 {
        Vec2::new(
            (cell.col as f32 + 0.5) * self.tile_size,
            (cell.row as f32 + 0.5) * self.tile_size,
        )
    }
}

/// The four footprint corners of an axis-aligned square entity, inset by
/// one unit so a body flush against a tile edge does not read the
/// neighboring tile.
pub fn footprint_corners(pos: Vec2, size: f32) -> [Vec2; 4] {
    [
        Vec2::new(pos.x, pos.y),
        Vec2::new(pos.x + size - 1.0, pos.y),
        Vec2::new(pos.x, pos.y + size - 1.0),
        Vec2::new(pos.x + size - 1.0, pos.y + size - 1.0),
    ]
}

#[derive(Clone, Debug)]
pub struct Player {
    /// Top-left corner of the footprint.
    pub pos: Vec2,
    pub size: f32,
    pub crouching: bool,
    pub sprinting: bool,
    /// 0 silent, 1 walking, 3 sprinting; derived each tick from intent.
    pub noise_level: u8,
}

impl Player {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self { pos, size, crouching: false, sprinting: false, noise_level: 0 }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size / 2.0, self.pos.y + self.size / 2.0)
    }

    /// Perception sample points: center plus the four inset corners.
    pub fn detection_samples(&self) -> [Vec2; 5] {
        let [a, b, c, d] = footprint_corners(self.pos, self.size);
        [self.center(), a, b, c, d]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStage {
    /// Returning to the last known location.
    Move,
    /// Rotating in place before giving up.
    Spin,
}

/// Behavioral state; each variant carries exactly the data that state
/// needs, so stale cross-state fields cannot exist.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardState {
    Patrol { path: Vec<Cell>, cursor: usize },
    Investigate { target: Vec2 },
    Chase { target: Vec2 },
    Search { stage: SearchStage, target: Vec2, timer: f32 },
}

impl GuardState {
    pub fn idle_patrol() -> Self {
        GuardState::Patrol { path: Vec::new(), cursor: 0 }
    }

    pub fn tag(&self) -> crate::types::GuardStateTag {
        use crate::types::GuardStateTag;
        match self {
            GuardState::Patrol { .. } => GuardStateTag::Patrol,
            GuardState::Investigate { .. } => GuardStateTag::Investigate,
            GuardState::Chase { .. } => GuardStateTag::Chase,
            GuardState::Search { .. } => GuardStateTag::Search,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Guard {
    pub id: GuardId,
    /// Top-left corner of the footprint.
    pub pos: Vec2,
    pub size: f32,
    /// Radians, kept wrapped to (-pi, pi].
    pub facing: f32,
    /// Sustained-visibility accumulator, clamped to [0, detection_threshold].
    pub detection: f32,
    pub state: GuardState,
}

impl Guard {
    pub fn new(pos: Vec2, size: f32, facing: f32) -> Self {
        Self {
            id: GuardId::default(),
            pos,
            size,
            facing,
            detection: 0.0,
            state: GuardState::idle_patrol(),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size / 2.0, self.pos.y + self.size / 2.0)
    }
}

pub struct World {
    pub grid: Grid,
    pub player: Player,
    pub guards: SlotMap<GuardId, Guard>,
}
