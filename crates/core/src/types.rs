use slotmap::new_key_type;

new_key_type! {
    pub struct GuardId;
}

/// Tile-grid cell address, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

/// Continuous world-space point or displacement, in the same units as
/// tile edge length (pixels in the desktop shell).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Vec2) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle of the ray from `self` to `other`, in radians.
    pub fn bearing_to(self, other: Vec2) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Floor,
    Wall,
    Shadow,
    Safe,
}

impl TileKind {
    /// Pathfinding only routes over lit floor.
    pub fn is_walkable(self) -> bool {
        self == TileKind::Floor
    }

    /// Walls stop both movement and sight lines.
    pub fn blocks_movement(self) -> bool {
        self == TileKind::Wall
    }
}

/// One-tick signal emitted when the player moves audibly. Consumed only by
/// patrolling guards within hearing radius; never persisted across ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseEvent {
    pub pos: Vec2,
}

/// Host-supplied movement intent for one tick. The direction does not have
/// to be normalized; the simulation normalizes nonzero vectors.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveIntent {
    pub dir: Vec2,
    pub crouch: bool,
    pub sprint: bool,
}

impl MoveIntent {
    pub fn idle() -> Self {
        Self::default()
    }
}

/// Discriminant-only view of a guard's behavioral state, used for logging
/// and snapshot hashing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardStateTag {
    Patrol,
    Investigate,
    Chase,
    Search,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimEvent {
    GuardStateChanged { guard: GuardId, from: GuardStateTag, to: GuardStateTag },
    NoiseHeard { guard: GuardId, at: Vec2 },
    GuardBlocked { guard: GuardId },
}
