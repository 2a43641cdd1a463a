//! Chunked block grid: chunk/local coordinate mapping, occupancy storage, and the world that owns all chunks.

pub mod chunk;
pub mod coords;
pub mod preset;
pub mod world;

pub use chunk::{AIR, Chunk, SOLID};
pub use coords::{
    CHUNK_DIM, CHUNK_DIM_LOG2, CHUNK_VOLUME, ChunkCoord, chunk_coord_of, local_coords_of,
    local_index_of,
};
pub use preset::{MAX_FLAT_RADIUS, WorldPreset, build_world};
pub use world::{ChunkId, World, WorldError};
