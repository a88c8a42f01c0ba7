//! The universe: every loaded world, keyed by name.

use std::sync::Arc;

use chunkspace_coords::{BlockPosition, WorldRegistry};
use dashmap::DashMap;

use crate::block::BlockId;
use crate::chunk::Chunk;
use crate::world::World;

/// The set of loaded worlds, keyed by name.
///
/// This is the reference implementation of the [`WorldRegistry`]
/// capability: applications hold one `Universe` and pass it to
/// [`ChunkPosition::to_chunk`](chunkspace_coords::ChunkPosition::to_chunk)
/// wherever a position needs resolving. Thread-safe the same way
/// [`World`] is, via sharded maps and `Arc` handles.
pub struct Universe {
    worlds: DashMap<String, Arc<World>>,
}

impl Universe {
    pub fn new() -> Self {
        Self {
            worlds: DashMap::new(),
        }
    }

    /// Register a world under `name`, or return the existing one.
    pub fn create_world(&self, name: impl Into<String>) -> Arc<World> {
        let name = name.into();
        if let Some(world) = self.worlds.get(&name) {
            return Arc::clone(&world);
        }
        let world = self.worlds.entry(name.clone()).or_insert_with(|| {
            tracing::info!("Creating world {}", name);
            Arc::new(World::new(name.clone()))
        });
        Arc::clone(&world)
    }

    /// Look up a loaded world by name.
    pub fn world(&self, name: &str) -> Option<Arc<World>> {
        self.worlds.get(name).map(|world| Arc::clone(&world))
    }

    /// Number of loaded worlds.
    pub fn world_count(&self) -> usize {
        self.worlds.len()
    }

    // ── Block routing ────────────────────────────────────────────────────

    /// Read the block a [`BlockPosition`] names.
    ///
    /// `None` when the position carries no world name or names a world
    /// this universe does not hold. Reads never load chunks: a block in an
    /// unloaded chunk is air.
    pub fn block_at(&self, position: &BlockPosition) -> Option<BlockId> {
        let world = self.world(position.world()?)?;
        let chunk = position.chunk();
        match world.loaded_chunk(chunk.x(), chunk.z()) {
            Some(chunk) => Some(chunk.block(
                position.local_x(),
                position.y(),
                position.local_z(),
            )),
            None => Some(BlockId::AIR),
        }
    }

    /// Write the block a [`BlockPosition`] names, loading the containing
    /// chunk if needed.
    ///
    /// Returns `false` when the position carries no world name or names a
    /// world this universe does not hold; the write lands otherwise.
    pub fn set_block(&self, position: &BlockPosition, block: BlockId) -> bool {
        let Some(name) = position.world() else {
            return false;
        };
        let Some(world) = self.world(name) else {
            return false;
        };
        let chunk = position.chunk();
        world.chunk_at(chunk.x(), chunk.z()).set_block(
            position.local_x(),
            position.y(),
            position.local_z(),
            block,
        );
        true
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldRegistry for Universe {
    type World = Arc<World>;
    type Chunk = Arc<Chunk>;

    fn world(&self, name: &str) -> Option<Arc<World>> {
        Universe::world(self, name)
    }

    fn chunk_at(&self, world: &Arc<World>, x: i32, z: i32) -> Arc<Chunk> {
        world.chunk_at(x, z)
    }
}
