//! Owner of all chunks, addressed by [`ChunkCoord`] and by stable [`ChunkId`] handles.
//!
//! Chunks live in an arena (`Vec<Chunk>`); an [`FxHashMap`](rustc_hash::FxHashMap)
//! maps each chunk coordinate to its arena slot. Chunks are never removed, so a
//! [`ChunkId`] stays valid for the lifetime of the world.

use glam::IVec3;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::chunk::Chunk;
use crate::coords::{ChunkCoord, chunk_coord_of};

/// Handle to a chunk inside a [`World`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkId(u32);

impl ChunkId {
    /// Arena slot of this chunk.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Errors returned by world construction and block writes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    /// A chunk with this coordinate is already part of the world.
    #[error("duplicate chunk coordinate {0}")]
    DuplicateChunk(ChunkCoord),
    /// The world was created with a chunk limit and it has been reached.
    #[error("world is full ({limit} chunks)")]
    CapacityExceeded { limit: usize },
    /// No chunk owns the requested block.
    #[error("no chunk loaded for block {0}")]
    ChunkNotLoaded(IVec3),
    /// A flat preset radius whose outer chunks would not have `i32` block coordinates.
    #[error("flat world radius {radius} exceeds the maximum of {max}")]
    RadiusOutOfRange { radius: u32, max: u32 },
}

/// The block world: every chunk, keyed by chunk coordinate.
#[derive(Clone, Debug, Default)]
pub struct World {
    chunks: Vec<Chunk>,
    by_coord: FxHashMap<ChunkCoord, ChunkId>,
    limit: Option<usize>,
}

impl World {
    /// Creates an empty world with no chunk limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty world that accepts at most `limit` chunks.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            chunks: Vec::with_capacity(limit),
            by_coord: FxHashMap::default(),
            limit: Some(limit),
        }
    }

    /// Adds `chunk` to the world and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateChunk`] if a chunk with the same
    /// coordinate exists, or [`WorldError::CapacityExceeded`] if the world
    /// already holds its maximum number of chunks.
    pub fn insert_chunk(&mut self, chunk: Chunk) -> Result<ChunkId, WorldError> {
        let coord = chunk.coord();
        if self.by_coord.contains_key(&coord) {
            return Err(WorldError::DuplicateChunk(coord));
        }
        if let Some(limit) = self.limit
            && self.chunks.len() >= limit
        {
            return Err(WorldError::CapacityExceeded { limit });
        }

        let id = ChunkId(self.chunks.len() as u32);
        self.chunks.push(chunk);
        self.by_coord.insert(coord, id);
        tracing::debug!("Inserted {} as chunk #{}", coord, id.0);
        Ok(id)
    }

    /// Handle of the chunk at `coord`, if loaded.
    pub fn find_chunk(&self, coord: ChunkCoord) -> Option<ChunkId> {
        self.by_coord.get(&coord).copied()
    }

    /// Handle of the chunk that owns `block`, if loaded.
    pub fn chunk_for_block(&self, block: IVec3) -> Option<ChunkId> {
        self.find_chunk(chunk_coord_of(block))
    }

    /// Immutable access to a chunk by handle.
    pub fn chunk(&self, id: ChunkId) -> Option<&Chunk> {
        self.chunks.get(id.index())
    }

    /// Mutable access to a chunk by handle.
    pub fn chunk_mut(&mut self, id: ChunkId) -> Option<&mut Chunk> {
        self.chunks.get_mut(id.index())
    }

    /// Returns `true` if `block` is solid. Blocks in unloaded chunks read as empty.
    pub fn is_occupied(&self, block: IVec3) -> bool {
        self.chunk_for_block(block)
            .and_then(|id| self.chunk(id))
            .is_some_and(|chunk| chunk.is_occupied(block))
    }

    /// Writes `value` at `block`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ChunkNotLoaded`] if no chunk owns `block`.
    pub fn set_block(&mut self, block: IVec3, value: u8) -> Result<(), WorldError> {
        let id = self
            .chunk_for_block(block)
            .ok_or(WorldError::ChunkNotLoaded(block))?;
        self.chunks[id.index()].set(block, value);
        Ok(())
    }

    /// Number of chunks in the world.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Chunk limit, if the world was created with one.
    pub fn capacity_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Iterates over all `(handle, chunk)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ChunkId, &Chunk)> {
        self.chunks
            .iter()
            .enumerate()
            .map(|(i, chunk)| (ChunkId(i as u32), chunk))
    }

    /// Handles of chunks changed since their dirty flag was last cleared.
    pub fn dirty_chunks(&self) -> impl Iterator<Item = ChunkId> + '_ {
        self.iter()
            .filter(|(_, chunk)| chunk.is_dirty())
            .map(|(id, _)| id)
    }

    /// Clears the dirty flag on every chunk.
    pub fn clear_dirty(&mut self) {
        for chunk in &mut self.chunks {
            chunk.clear_dirty();
        }
    }

    /// World coordinates of every solid block across all chunks.
    pub fn solid_blocks(&self) -> impl Iterator<Item = IVec3> + '_ {
        self.chunks.iter().flat_map(Chunk::solid_blocks)
    }
}
