//! Dense occupancy storage for one 16×16×16 chunk.
//!
//! Every block is one byte: [`AIR`] (zero) is empty, any other value is solid.
//! Accessors take world block coordinates and reduce them to an in-chunk index
//! with a Euclidean remainder, so every access lands inside the array.

use std::ops::Range;

use glam::{IVec3, UVec3};

use crate::coords::{
    CHUNK_DIM, CHUNK_VOLUME, ChunkCoord, local_coords_from_index, local_index_of,
};

/// Empty block.
pub const AIR: u8 = 0;

/// Default solid block value.
pub const SOLID: u8 = 1;

/// One chunk of the world: its chunk coordinate plus `CHUNK_VOLUME` occupancy bytes.
#[derive(Clone, Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    blocks: Box<[u8]>,
    /// Set on every occupancy change; cleared by the consumer once it has re-read the chunk.
    dirty: bool,
    /// Monotonically increasing version counter, incremented on each mutation.
    version: u64,
}

impl Chunk {
    /// Creates an empty (all air) chunk at `coord`.
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            blocks: vec![AIR; CHUNK_VOLUME].into_boxed_slice(),
            dirty: false,
            version: 0,
        }
    }

    /// Creates a chunk at `coord` with every block set to `value`.
    pub fn new_filled(coord: ChunkCoord, value: u8) -> Self {
        let mut chunk = Self::new(coord);
        chunk.blocks.fill(value);
        chunk
    }

    /// The chunk coordinate this chunk was created with.
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// Raw block value at world block coordinate `block`.
    pub fn get(&self, block: IVec3) -> u8 {
        self.blocks[local_index_of(block)]
    }

    /// Returns `true` if the block at `block` is solid.
    pub fn is_occupied(&self, block: IVec3) -> bool {
        self.get(block) != AIR
    }

    /// Writes `value` at `block`. Marks the chunk dirty if the value changed.
    pub fn set(&mut self, block: IVec3, value: u8) {
        self.write(local_index_of(block), value);
    }

    /// Empties the block at `block`.
    pub fn clear(&mut self, block: IVec3) {
        self.set(block, AIR);
    }

    /// Raw block value at in-chunk coordinates. Each component must be below `CHUNK_DIM`.
    pub fn get_local(&self, local: UVec3) -> u8 {
        self.blocks[Self::flat_local(local)]
    }

    /// Writes `value` at in-chunk coordinates. Each component must be below `CHUNK_DIM`.
    pub fn set_local(&mut self, local: UVec3, value: u8) {
        self.write(Self::flat_local(local), value);
    }

    /// Sets every block in the horizontal layers `layers` (local y) to `value`.
    pub fn fill_layers(&mut self, layers: Range<u32>, value: u8) {
        let dim = CHUNK_DIM as u32;
        for y in layers.start..layers.end.min(dim) {
            for z in 0..dim {
                for x in 0..dim {
                    self.set_local(UVec3::new(x, y, z), value);
                }
            }
        }
    }

    /// Number of solid blocks.
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|&&b| b != AIR).count()
    }

    /// Returns `true` if no block in the chunk is solid.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&b| b == AIR)
    }

    /// World block coordinates of every solid block, in storage order.
    ///
    /// This is what a renderer walks to decide which cubes to draw.
    pub fn solid_blocks(&self) -> impl Iterator<Item = IVec3> + '_ {
        let origin = self.coord.origin_block();
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| **b != AIR)
            .map(move |(i, _)| origin + local_coords_from_index(i).as_ivec3())
    }

    /// Returns `true` if the chunk changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Acknowledges all pending changes.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Current version counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn write(&mut self, index: usize, value: u8) {
        let slot = &mut self.blocks[index];
        if *slot != value {
            *slot = value;
            self.dirty = true;
            self.version += 1;
        }
    }

    fn flat_local(local: UVec3) -> usize {
        debug_assert!(local.max_element() < CHUNK_DIM as u32);
        let dim = CHUNK_DIM as usize;
        local.z as usize * dim * dim + local.y as usize * dim + local.x as usize
    }
}
