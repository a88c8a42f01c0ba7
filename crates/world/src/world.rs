//! A single named world: a lazily-populated grid of live chunks.

use std::sync::Arc;

use chunkspace_coords::ChunkPosition;
use dashmap::DashMap;

use crate::chunk::Chunk;

/// A named world holding its own grid of live chunks.
///
/// Thread-safe, lock-sharded by chunk: every accessor takes `&self`
/// because `DashMap` provides interior mutability via per-shard locking.
/// Chunks materialize on first access and stay resident for the lifetime
/// of the world; handles out are `Arc`s, so a chunk obtained once remains
/// valid regardless of what the map does afterwards.
pub struct World {
    name: String,
    chunks: DashMap<(i32, i32), Arc<Chunk>>,
}

impl World {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            chunks: DashMap::new(),
        }
    }

    /// The name this world is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The chunk at grid (x, z), loading it on first access.
    ///
    /// The load is the side effect chunk resolution is documented to carry:
    /// first access allocates the chunk (and under a generating host would
    /// run generation). Subsequent calls return the same live handle.
    pub fn chunk_at(&self, x: i32, z: i32) -> Arc<Chunk> {
        if let Some(chunk) = self.chunks.get(&(x, z)) {
            return Arc::clone(&chunk);
        }
        let chunk = self.chunks.entry((x, z)).or_insert_with(|| {
            tracing::debug!("Loading chunk ({}, {}) in {}", x, z, self.name);
            Arc::new(Chunk::new(ChunkPosition::new(x, z, self.name.clone())))
        });
        Arc::clone(&chunk)
    }

    /// The chunk at grid (x, z) if it is already loaded. Never loads.
    pub fn loaded_chunk(&self, x: i32, z: i32) -> Option<Arc<Chunk>> {
        self.chunks.get(&(x, z)).map(|chunk| Arc::clone(&chunk))
    }

    /// Number of chunks currently loaded.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}
