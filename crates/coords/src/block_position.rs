//! Absolute block positions and their chunk-local view.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::chunk_position::ChunkPosition;
use crate::direction::Direction;
use crate::error::PositionError;
use crate::wire;

/// The absolute position of a block within a named world.
///
/// The companion value to [`ChunkPosition`]: same structural equality and
/// hashing over its fields, same nullable-world rules, same wrapping
/// arithmetic, and the wire shape `{"x", "y", "z", "world"}` with every
/// field required. Unlike the chunk grid, blocks move on all three axes,
/// so the relative-offset operations here accept every [`Direction`]
/// member and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPosition {
    x: i32,
    y: i32,
    z: i32,
    #[serde(deserialize_with = "wire::world_field")]
    world: Option<String>,
}

impl BlockPosition {
    /// Absolute position (x, y, z) in the named world.
    pub fn new(x: i32, y: i32, z: i32, world: impl Into<String>) -> Self {
        Self {
            x,
            y,
            z,
            world: Some(world.into()),
        }
    }

    /// Absolute position (x, y, z) bound to no world.
    pub const fn without_world(x: i32, y: i32, z: i32) -> Self {
        Self {
            x,
            y,
            z,
            world: None,
        }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    pub const fn z(&self) -> i32 {
        self.z
    }

    /// Name of the owning world, if any.
    pub fn world(&self) -> Option<&str> {
        self.world.as_deref()
    }

    // ── Chunk-local view ─────────────────────────────────────────────────

    /// The chunk column this block belongs to, same world.
    pub fn chunk(&self) -> ChunkPosition {
        match &self.world {
            Some(world) => ChunkPosition::new(self.x >> 4, self.z >> 4, world.clone()),
            None => ChunkPosition::without_world(self.x >> 4, self.z >> 4),
        }
    }

    /// X coordinate within the chunk's 16x16 footprint (0..16).
    pub const fn local_x(&self) -> i32 {
        self.x & 0xF
    }

    /// Z coordinate within the chunk's 16x16 footprint (0..16).
    pub const fn local_z(&self) -> i32 {
        self.z & 0xF
    }

    // ── Wire encoding ────────────────────────────────────────────────────

    /// Decode from an already-parsed JSON node.
    ///
    /// Fails when the node is not an object or lacks any of `x`, `y`, `z`,
    /// `world`. `world` may be JSON `null`; unknown fields are ignored.
    pub fn from_json(value: &Value) -> Result<Self, PositionError> {
        wire::decode(value)
    }

    /// Encode to a JSON object node carrying `x`, `y`, `z`, `world`, in
    /// that order. Decoding the result yields an equal value.
    pub fn to_json(&self) -> Value {
        json!({ "x": self.x, "y": self.y, "z": self.z, "world": &self.world })
    }

    // ── Arithmetic ───────────────────────────────────────────────────────

    /// One block step along any direction, same world.
    pub fn relative(&self, direction: Direction) -> Self {
        self.relative_by(direction, 1)
    }

    /// `distance` block steps along any direction, same world.
    ///
    /// `distance` may be negative or zero; coordinates wrap on overflow.
    pub fn relative_by(&self, direction: Direction, distance: i32) -> Self {
        self.add(
            direction.delta_x().wrapping_mul(distance),
            direction.delta_y().wrapping_mul(distance),
            direction.delta_z().wrapping_mul(distance),
        )
    }

    /// Componentwise offset, same world. Wraps on overflow.
    pub fn add(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
            z: self.z.wrapping_add(dz),
            world: self.world.clone(),
        }
    }

    /// Inverse of [`BlockPosition::add`]. Wraps on overflow.
    pub fn subtract(&self, dx: i32, dy: i32, dz: i32) -> Self {
        self.add(dx.wrapping_neg(), dy.wrapping_neg(), dz.wrapping_neg())
    }
}

/// Lexicographic on (world, x, y, z), detached positions first.
///
/// A deterministic-iteration aid; the wire format does not depend on it.
impl Ord for BlockPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.world
            .cmp(&other.world)
            .then_with(|| self.x.cmp(&other.x))
            .then_with(|| self.y.cmp(&other.y))
            .then_with(|| self.z.cmp(&other.z))
    }
}

impl PartialOrd for BlockPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BlockPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BlockPosition(x={}, y={}, z={}, world={})",
            self.x,
            self.y,
            self.z,
            self.world.as_deref().unwrap_or("null"),
        )
    }
}
