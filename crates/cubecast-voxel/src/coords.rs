//! Mapping between world block coordinates, chunk coordinates, and in-chunk indices.
//!
//! All divisions round toward negative infinity, so block `-1` lives in chunk
//! `-1` at local offset `CHUNK_DIM - 1`, not in chunk `0`.

use std::fmt;

use glam::{IVec3, UVec3};
use serde::{Deserialize, Serialize};

/// log₂ of the chunk side length.
pub const CHUNK_DIM_LOG2: u32 = 4;

/// Side length of a chunk in blocks.
pub const CHUNK_DIM: i32 = 1 << CHUNK_DIM_LOG2;

/// Total number of blocks in a chunk (16³).
pub const CHUNK_VOLUME: usize = (CHUNK_DIM * CHUNK_DIM * CHUNK_DIM) as usize;

/// Identifies a chunk's position in chunk-index space.
///
/// A chunk coordinate is the block coordinate floor-divided by [`CHUNK_DIM`]
/// on each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ChunkCoord {
    /// Chunk-grid X coordinate.
    pub x: i32,
    /// Chunk-grid Y coordinate.
    pub y: i32,
    /// Chunk-grid Z coordinate.
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// World block coordinate of this chunk's local `(0, 0, 0)` corner.
    pub fn origin_block(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z) * CHUNK_DIM
    }

    /// Returns `true` if `block` maps into this chunk.
    pub fn contains_block(self, block: IVec3) -> bool {
        chunk_coord_of(block) == self
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chunk({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Chunk coordinate of the chunk containing `block`.
///
/// Euclidean division floors toward negative infinity, matching an arithmetic
/// right shift by [`CHUNK_DIM_LOG2`] on two's-complement integers.
pub fn chunk_coord_of(block: IVec3) -> ChunkCoord {
    ChunkCoord::new(
        block.x.div_euclid(CHUNK_DIM),
        block.y.div_euclid(CHUNK_DIM),
        block.z.div_euclid(CHUNK_DIM),
    )
}

/// In-chunk coordinates of `block`, each in `[0, CHUNK_DIM)`.
pub fn local_coords_of(block: IVec3) -> UVec3 {
    UVec3::new(
        block.x.rem_euclid(CHUNK_DIM) as u32,
        block.y.rem_euclid(CHUNK_DIM) as u32,
        block.z.rem_euclid(CHUNK_DIM) as u32,
    )
}

/// Flat index of `block` inside its chunk: `z * DIM² + y * DIM + x`.
///
/// Always in `[0, CHUNK_VOLUME)`.
pub fn local_index_of(block: IVec3) -> usize {
    let local = local_coords_of(block);
    let dim = CHUNK_DIM as usize;
    local.z as usize * dim * dim + local.y as usize * dim + local.x as usize
}

/// Inverse of [`local_index_of`] for a given index.
pub(crate) fn local_coords_from_index(index: usize) -> UVec3 {
    let dim = CHUNK_DIM as usize;
    UVec3::new(
        (index % dim) as u32,
        ((index / dim) % dim) as u32,
        (index / (dim * dim)) as u32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_dim_constants() {
        assert_eq!(CHUNK_DIM, 16);
        assert_eq!(CHUNK_VOLUME, 4096);
    }

    #[test]
    fn test_negative_one_maps_to_negative_chunk() {
        let block = IVec3::new(-1, -1, -1);
        assert_eq!(chunk_coord_of(block), ChunkCoord::new(-1, -1, -1));
        assert_eq!(local_coords_of(block), UVec3::new(15, 15, 15));
        assert_eq!(local_index_of(block), 15 * 256 + 15 * 16 + 15);
    }

    #[test]
    fn test_floor_division_matches_arithmetic_shift() {
        for v in -100..100 {
            let block = IVec3::new(v, -v, v * 3);
            let coord = chunk_coord_of(block);
            assert_eq!(coord.x, block.x >> CHUNK_DIM_LOG2);
            assert_eq!(coord.y, block.y >> CHUNK_DIM_LOG2);
            assert_eq!(coord.z, block.z >> CHUNK_DIM_LOG2);

            let local = local_coords_of(block);
            assert_eq!(local.x as i32, block.x & (CHUNK_DIM - 1));
            assert_eq!(local.y as i32, block.y & (CHUNK_DIM - 1));
        }
    }

    #[test]
    fn test_chunk_boundaries() {
        assert_eq!(chunk_coord_of(IVec3::new(15, 0, 0)).x, 0);
        assert_eq!(chunk_coord_of(IVec3::new(16, 0, 0)).x, 1);
        assert_eq!(chunk_coord_of(IVec3::new(-16, 0, 0)).x, -1);
        assert_eq!(chunk_coord_of(IVec3::new(-17, 0, 0)).x, -2);
    }

    #[test]
    fn test_local_index_layout() {
        assert_eq!(local_index_of(IVec3::new(1, 0, 0)), 1);
        assert_eq!(local_index_of(IVec3::new(0, 1, 0)), 16);
        assert_eq!(local_index_of(IVec3::new(0, 0, 1)), 256);
        assert_eq!(local_index_of(IVec3::new(17, 33, 49)), 256 + 16 + 1);
    }

    #[test]
    fn test_index_roundtrip_covers_volume() {
        for index in 0..CHUNK_VOLUME {
            let local = local_coords_from_index(index);
            assert_eq!(local_index_of(local.as_ivec3()), index);
        }
    }

    #[test]
    fn test_origin_block_maps_back() {
        let coord = ChunkCoord::new(-1, 0, 2);
        let origin = coord.origin_block();
        assert_eq!(origin, IVec3::new(-16, 0, 32));
        assert!(coord.contains_block(origin));
        assert!(coord.contains_block(origin + IVec3::splat(CHUNK_DIM - 1)));
        assert!(!coord.contains_block(origin - IVec3::X));
    }
}
