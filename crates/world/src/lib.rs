//! Reference in-memory world host for the chunkspace position values.
//!
//! A [`Universe`] holds named [`World`]s; each world lazily materializes
//! live [`Chunk`]s on first access and hands out `Arc` handles. The
//! universe implements the
//! [`WorldRegistry`](chunkspace_coords::WorldRegistry) capability, so a
//! serialized `ChunkPosition` resolves into a live chunk end-to-end, and
//! routes block reads and writes through `BlockPosition` values across
//! chunk borders.
//!
//! Chunks store blocks sparsely: 16x16x16 sections keyed by `y >> 4`,
//! with all-air sections never retained.

pub mod block;
pub mod chunk;
pub mod universe;
pub mod world;

pub use block::BlockId;
pub use chunk::Chunk;
pub use universe::Universe;
pub use world::World;
