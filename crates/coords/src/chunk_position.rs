//! The position of a chunk column on a world's chunk grid.
//!
//! A [`ChunkPosition`] is an immutable value: grid x, grid z, and the name of
//! the owning world. Every derivation returns a fresh value; the one
//! operation that touches live state is [`ChunkPosition::to_chunk`], which
//! resolves the value against an explicit [`WorldRegistry`] capability.
//!
//! The canonical wire shape is `{"x": <int>, "z": <int>, "world": <string|null>}`,
//! all three fields required, emitted in exactly that order.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::block_position::BlockPosition;
use crate::direction::Direction;
use crate::error::PositionError;
use crate::registry::WorldRegistry;
use crate::wire;

/// The position of a chunk within a named world.
///
/// Equality, hashing, and the wire encoding are all structural over
/// `(x, z, world)`; two positions without a world compare equal whenever
/// their grid coordinates match. Coordinate arithmetic wraps on overflow,
/// two's-complement style, so [`ChunkPosition::add`] and
/// [`ChunkPosition::subtract`] stay exact inverses across the whole i32
/// range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkPosition {
    x: i32,
    z: i32,
    #[serde(deserialize_with = "wire::world_field")]
    world: Option<String>,
}

impl ChunkPosition {
    /// Position (x, z) on the chunk grid of the named world.
    pub fn new(x: i32, z: i32, world: impl Into<String>) -> Self {
        Self {
            x,
            z,
            world: Some(world.into()),
        }
    }

    /// Position (x, z) bound to no world.
    ///
    /// Detached positions take part in arithmetic and encoding (`world` is
    /// `null` on the wire) but never resolve to a live chunk.
    pub const fn without_world(x: i32, z: i32) -> Self {
        Self { x, z, world: None }
    }

    /// Grid x coordinate.
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Grid z coordinate.
    pub const fn z(&self) -> i32 {
        self.z
    }

    /// Name of the owning world, if any.
    pub fn world(&self) -> Option<&str> {
        self.world.as_deref()
    }

    // ── Wire encoding ────────────────────────────────────────────────────

    /// Decode from an already-parsed JSON node.
    ///
    /// Fails when the node is not an object or lacks any of `x`, `z`,
    /// `world`. `world` may be JSON `null`; unknown fields are ignored.
    pub fn from_json(value: &Value) -> Result<Self, PositionError> {
        wire::decode(value)
    }

    /// Encode to a JSON object node carrying `x`, `z`, `world`, in that
    /// order. Decoding the result yields an equal value.
    pub fn to_json(&self) -> Value {
        json!({ "x": self.x, "z": self.z, "world": &self.world })
    }

    // ── Grid arithmetic ──────────────────────────────────────────────────

    /// One chunk step along a horizontal direction, same world.
    ///
    /// Chunk columns span the full height of a world, so [`Direction::Up`]
    /// and [`Direction::Down`] are rejected.
    pub fn relative(&self, direction: Direction) -> Result<Self, PositionError> {
        self.relative_by(direction, 1)
    }

    /// `distance` chunk steps along a horizontal direction, same world.
    ///
    /// `distance` may be negative (steps the opposite way) or zero (yields
    /// an equal value). Rejects vertical directions like
    /// [`ChunkPosition::relative`]; coordinates wrap on overflow.
    pub fn relative_by(&self, direction: Direction, distance: i32) -> Result<Self, PositionError> {
        if !direction.is_horizontal() {
            return Err(PositionError::VerticalOffset(direction));
        }
        Ok(self.add(
            direction.delta_x().wrapping_mul(distance),
            direction.delta_z().wrapping_mul(distance),
        ))
    }

    /// Componentwise offset on the chunk grid, same world. Wraps on
    /// overflow.
    pub fn add(&self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            z: self.z.wrapping_add(dz),
            world: self.world.clone(),
        }
    }

    /// Inverse of [`ChunkPosition::add`]. Wraps on overflow.
    pub fn subtract(&self, dx: i32, dz: i32) -> Self {
        self.add(dx.wrapping_neg(), dz.wrapping_neg())
    }

    /// Absolute position of a block within this chunk's 16x16 footprint.
    ///
    /// Only the low four bits of `local_x` and `local_z` are used, so any
    /// integer is a valid local coordinate: 17 addresses the same column as
    /// 1, and -1 the same as 15. `y` passes through unchanged and the world
    /// name carries over. Never fails.
    pub fn block(&self, local_x: i32, y: i32, local_z: i32) -> BlockPosition {
        let x = (self.x << 4) | (local_x & 0xF);
        let z = (self.z << 4) | (local_z & 0xF);
        match &self.world {
            Some(world) => BlockPosition::new(x, y, z, world.clone()),
            None => BlockPosition::without_world(x, y, z),
        }
    }

    // ── Resolution ───────────────────────────────────────────────────────

    /// Resolve this value into the live chunk it names.
    ///
    /// The registry is an explicit capability: pass whatever world host the
    /// application runs on. Resolution may block while the host loads or
    /// generates the chunk, so keep it off latency-sensitive paths. Returns
    /// `None` when the position carries no world name or the registry knows
    /// no world under that name; callers must check.
    pub fn to_chunk<R: WorldRegistry>(&self, registry: &R) -> Option<R::Chunk> {
        let world = registry.world(self.world.as_deref()?)?;
        Some(registry.chunk_at(&world, self.x, self.z))
    }
}

/// Lexicographic on (world, x, z), detached positions first.
///
/// Provided as a deterministic-iteration aid (sorted chunk lists, ordered
/// map keys); the wire format does not depend on it.
impl Ord for ChunkPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.world
            .cmp(&other.world)
            .then_with(|| self.x.cmp(&other.x))
            .then_with(|| self.z.cmp(&other.z))
    }
}

impl PartialOrd for ChunkPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ChunkPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChunkPosition(x={}, z={}, world={})",
            self.x,
            self.z,
            self.world.as_deref().unwrap_or("null"),
        )
    }
}
