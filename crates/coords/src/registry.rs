//! The boundary between position values and live world state.

/// A host that can turn a world name into a live world and a live world
/// plus grid coordinates into a live chunk.
///
/// This is the one capability the position values need from their
/// environment, modeled as an explicit argument to
/// [`ChunkPosition::to_chunk`](crate::ChunkPosition::to_chunk) rather than
/// a hidden global, so the values themselves stay lock-free and pure.
///
/// An unknown or unloaded world is reported as `None`; chunk access on a
/// live world is infallible because hosts are expected to load or generate
/// the chunk on demand. That load may block, and implementations define
/// their own synchronization -- the trait promises nothing about either.
pub trait WorldRegistry {
    /// Live handle to a named world.
    type World;
    /// Live handle to a chunk within a world.
    type Chunk;

    /// Look up a world by name. `None` when no such world is loaded.
    fn world(&self, name: &str) -> Option<Self::World>;

    /// The chunk at grid (x, z) of a live world, loading it if needed.
    fn chunk_at(&self, world: &Self::World, x: i32, z: i32) -> Self::Chunk;
}
