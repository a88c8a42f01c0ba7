//! Live chunks: the handles a [`ChunkPosition`] resolves into.

use std::collections::HashMap;
use std::sync::RwLock;

use chunkspace_coords::ChunkPosition;

use crate::block::BlockId;

/// Blocks per axis of a section.
pub const SECTION_SIZE: usize = 16;
/// Blocks in a whole section.
const SECTION_VOLUME: usize = SECTION_SIZE * SECTION_SIZE * SECTION_SIZE;

/// One 16-block-tall slice of a chunk column.
///
/// Blocks sit in a single flat array, x varying fastest and y slowest, so
/// each horizontal layer is one contiguous 256-entry run. The owning
/// [`Chunk`] drops any section left holding nothing but air instead of
/// keeping it allocated.
#[derive(Clone)]
struct ChunkSection {
    blocks: Box<[BlockId; SECTION_VOLUME]>,
}

impl ChunkSection {
    fn new_empty() -> Self {
        Self {
            blocks: Box::new([BlockId::AIR; SECTION_VOLUME]),
        }
    }

    #[inline]
    const fn index(x: usize, y: usize, z: usize) -> usize {
        y * SECTION_SIZE * SECTION_SIZE + z * SECTION_SIZE + x
    }

    #[inline]
    fn get(&self, x: usize, y: usize, z: usize) -> BlockId {
        self.blocks[Self::index(x, y, z)]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, z: usize, block: BlockId) {
        self.blocks[Self::index(x, y, z)] = block;
    }

    fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| *b == BlockId::AIR)
    }
}

/// Split a block y into (section index, y within the section).
///
/// The section index is a floored division by 16, so y = -1 lands in
/// section -1 at local y 15.
#[inline]
const fn split_y(y: i32) -> (i32, usize) {
    (y >> 4, (y & 0xF) as usize)
}

/// A live chunk: a column of sparse 16x16x16 sections that knows its own
/// position on the world grid.
///
/// Block access takes chunk-local coordinates under the same convention as
/// [`ChunkPosition::block`]: only the low four bits of the horizontal
/// locals are used. Sections are stored behind an `RwLock` so handles can
/// be shared across threads; only non-empty sections are kept.
pub struct Chunk {
    position: ChunkPosition,
    sections: RwLock<HashMap<i32, ChunkSection>>,
}

impl Chunk {
    pub(crate) fn new(position: ChunkPosition) -> Self {
        Self {
            position,
            sections: RwLock::new(HashMap::new()),
        }
    }

    /// Where this chunk sits: grid coordinates plus owning world name.
    ///
    /// This is the inverse of resolution -- a detached value can always be
    /// recovered from a live handle.
    pub fn position(&self) -> &ChunkPosition {
        &self.position
    }

    /// Read the block at a chunk-local coordinate. Air where nothing was
    /// ever set.
    pub fn block(&self, local_x: i32, y: i32, local_z: i32) -> BlockId {
        let (section_idx, section_y) = split_y(y);
        let sections = self.sections.read().expect("chunk sections poisoned");
        match sections.get(&section_idx) {
            Some(section) => section.get(
                (local_x & 0xF) as usize,
                section_y,
                (local_z & 0xF) as usize,
            ),
            None => BlockId::AIR,
        }
    }

    /// Write the block at a chunk-local coordinate.
    ///
    /// Writing AIR into a section that becomes all air drops the section,
    /// keeping the column sparse.
    pub fn set_block(&self, local_x: i32, y: i32, local_z: i32, block: BlockId) {
        let (section_idx, section_y) = split_y(y);
        let x = (local_x & 0xF) as usize;
        let z = (local_z & 0xF) as usize;
        let mut sections = self.sections.write().expect("chunk sections poisoned");

        if block == BlockId::AIR {
            if let Some(section) = sections.get_mut(&section_idx) {
                section.set(x, section_y, z, block);
                if section.is_empty() {
                    sections.remove(&section_idx);
                }
            }
        } else {
            sections
                .entry(section_idx)
                .or_insert_with(ChunkSection::new_empty)
                .set(x, section_y, z, block);
        }
    }

    /// Number of non-empty sections currently allocated.
    pub fn section_count(&self) -> usize {
        self.sections
            .read()
            .expect("chunk sections poisoned")
            .len()
    }
}
