// Core types shared across the gateway library.
//
// Defines grid coordinates (`VoxelCoord`), the five scan directions plus up
// (`Face`), material identifiers (`MaterialId`), the world's `Environment`,
// and the floating-point arrival position handed back to callers
// (`SpawnPoint`). All types derive `Serialize` and `Deserialize` so that
// configs and demo reports can carry them as JSON.
//
// Material ids follow the classic numeric block ids (0 = air, 1 = stone,
// 49 = obsidian, 90 = portal, ...). Only the ids the classifier tables and
// the builder need are named; any other `u8` is still a valid material.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Spatial types
// ---------------------------------------------------------------------------

/// A position in the voxel grid. Each component is in voxel units.
///
/// - X: east  (positive) / west  (negative)
/// - Y: up    (positive) / down  (negative)
/// - Z: south (positive) / north (negative)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// This coordinate shifted by `(dx, dy, dz)`.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// The neighboring coordinate one step toward `face`.
    pub const fn step(self, face: Face) -> Self {
        let (dx, dy, dz) = face.offset();
        self.offset(dx, dy, dz)
    }

    /// The cell directly above.
    pub const fn above(self) -> Self {
        self.offset(0, 1, 0)
    }

    /// The cell `n` steps below.
    pub const fn below(self, n: i32) -> Self {
        self.offset(0, -n, 0)
    }

    /// Same column, different height.
    pub const fn with_y(self, y: i32) -> Self {
        Self::new(self.x, y, self.z)
    }

    /// Squared horizontal (x/z) distance, ignoring height.
    pub fn column_distance_sq(self, other: Self) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dz = i64::from(self.z - other.z);
        dx * dx + dz * dz
    }
}

impl fmt::Display for VoxelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the six axis directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Up,
    Down,
    North,
    East,
    South,
    West,
}

impl Face {
    /// Every direction except `Up`, in the order the surface scan visits them.
    pub const NON_UPWARD: [Face; 5] = [
        Face::Down,
        Face::North,
        Face::East,
        Face::South,
        Face::West,
    ];

    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Face::Up => (0, 1, 0),
            Face::Down => (0, -1, 0),
            Face::North => (0, 0, -1),
            Face::East => (1, 0, 0),
            Face::South => (0, 0, 1),
            Face::West => (-1, 0, 0),
        }
    }
}

/// Final arrival position in world units. Horizontally centered on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SpawnPoint {
    /// The standing position for a landing cell: centered in x/z, 0.75 below
    /// the cell's base so the entity rests on the floor of the air pocket.
    pub fn standing_in(cell: VoxelCoord) -> Self {
        Self {
            x: f64::from(cell.x) + 0.5,
            y: f64::from(cell.y) - 0.75,
            z: f64::from(cell.z) + 0.5,
        }
    }

    /// The grid cell this position sits over.
    pub fn cell(self) -> VoxelCoord {
        VoxelCoord::new(
            self.x.floor() as i32,
            (self.y + 0.75).floor() as i32,
            self.z.floor() as i32,
        )
    }
}

impl fmt::Display for SpawnPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// World classification
// ---------------------------------------------------------------------------

/// Which kind of world a grid belongs to.
///
/// `Alternate` worlds (the nether-like dimension) have a hard ceiling on the
/// usable build height and a different fill material.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    #[default]
    Normal,
    Alternate,
}

// ---------------------------------------------------------------------------
// Materials
// ---------------------------------------------------------------------------

/// The material of a single voxel, as a small opaque id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub u8);

impl MaterialId {
    pub const AIR: Self = Self(0);
    pub const STONE: Self = Self(1);
    pub const GRASS: Self = Self(2);
    pub const DIRT: Self = Self(3);
    pub const SAPLING: Self = Self(6);
    pub const WATER: Self = Self(8);
    pub const STILL_WATER: Self = Self(9);
    pub const LAVA: Self = Self(10);
    pub const STILL_LAVA: Self = Self(11);
    pub const SAND: Self = Self(12);
    pub const GRAVEL: Self = Self(13);
    pub const YELLOW_FLOWER: Self = Self(37);
    pub const RED_ROSE: Self = Self(38);
    pub const BROWN_MUSHROOM: Self = Self(39);
    pub const RED_MUSHROOM: Self = Self(40);
    pub const OBSIDIAN: Self = Self(49);
    pub const TORCH: Self = Self(50);
    pub const FIRE: Self = Self(51);
    pub const REDSTONE_WIRE: Self = Self(55);
    pub const CROPS: Self = Self(59);
    pub const SIGN_POST: Self = Self(63);
    pub const WOODEN_DOOR: Self = Self(64);
    pub const LADDER: Self = Self(65);
    pub const RAILS: Self = Self(66);
    pub const WALL_SIGN: Self = Self(68);
    pub const LEVER: Self = Self(69);
    pub const STONE_PLATE: Self = Self(70);
    pub const IRON_DOOR: Self = Self(71);
    pub const WOODEN_PLATE: Self = Self(72);
    pub const REDSTONE_TORCH_OFF: Self = Self(75);
    pub const REDSTONE_TORCH_ON: Self = Self(76);
    pub const STONE_BUTTON: Self = Self(77);
    pub const SUGAR_CANE: Self = Self(83);
    pub const FENCE: Self = Self(85);
    pub const NETHERRACK: Self = Self(87);
    pub const PORTAL: Self = Self(90);
    pub const REPEATER_OFF: Self = Self(93);
    pub const REPEATER_ON: Self = Self(94);

    pub const fn id(self) -> u8 {
        self.0
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
