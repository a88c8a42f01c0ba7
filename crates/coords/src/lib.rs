//! Immutable, serializable positions for chunked voxel worlds.
//!
//! The crate centers on two value types: [`ChunkPosition`], a column on a
//! world's 16x16 chunk grid, and [`BlockPosition`], an absolute block
//! coordinate. Both are plain data -- structural equality and hashing,
//! a canonical JSON encoding, wrapping coordinate arithmetic -- and every
//! operation is a pure function except [`ChunkPosition::to_chunk`], which
//! resolves a position against an explicit [`WorldRegistry`] capability
//! supplied by the caller.
//!
//! [`Direction`] provides the ten unit directions of the grid; the chunk
//! grid accepts only the horizontal eight and rejects [`Direction::Up`]
//! and [`Direction::Down`] with [`PositionError::VerticalOffset`].

pub mod block_position;
pub mod chunk_position;
pub mod direction;
pub mod error;
pub mod registry;

mod wire;

pub use block_position::BlockPosition;
pub use chunk_position::ChunkPosition;
pub use direction::Direction;
pub use error::PositionError;
pub use registry::WorldRegistry;
