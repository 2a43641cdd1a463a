//! Initial world layouts the session can start from.

use glam::UVec3;
use serde::{Deserialize, Serialize};

use crate::chunk::{Chunk, SOLID};
use crate::coords::{CHUNK_DIM, ChunkCoord};
use crate::world::{World, WorldError};

/// Largest flat preset radius whose chunks still have `i32` block coordinates.
pub const MAX_FLAT_RADIUS: u32 = (i32::MAX / CHUNK_DIM) as u32;

/// Which initial world to build.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorldPreset {
    /// Two chunks: a four-layer solid floor at chunk (0, 0, 0) and a sparse
    /// six-layer field (every third block) at chunk (-1, 0, -1).
    #[default]
    Reference,
    /// A square of chunks spanning `-radius..radius` on X and Z (at least one
    /// chunk), each solid in its bottom `layers` layers.
    Flat { radius: u32, layers: u32 },
    /// A single empty chunk at the origin.
    Empty,
}

impl WorldPreset {
    /// Number of chunks [`build_world`] inserts for this preset, saturating at
    /// `u64::MAX`.
    pub fn chunk_count(&self) -> u64 {
        match self {
            WorldPreset::Reference => 2,
            WorldPreset::Flat { radius, .. } => {
                let side = (u64::from(*radius) * 2).max(1);
                side.saturating_mul(side)
            }
            WorldPreset::Empty => 1,
        }
    }
}

/// Builds a world for `preset`, honouring an optional chunk limit.
///
/// # Errors
///
/// Returns [`WorldError::CapacityExceeded`] if the preset needs more chunks
/// than `limit` allows (checked before any chunk is allocated) and
/// [`WorldError::RadiusOutOfRange`] for a flat radius above [`MAX_FLAT_RADIUS`].
pub fn build_world(preset: &WorldPreset, limit: Option<usize>) -> Result<World, WorldError> {
    if let Some(limit) = limit
        && preset.chunk_count() > limit as u64
    {
        return Err(WorldError::CapacityExceeded { limit });
    }

    let mut world = match limit {
        Some(limit) => World::with_capacity_limit(limit),
        None => World::new(),
    };

    match preset {
        WorldPreset::Reference => {
            let mut floor = Chunk::new(ChunkCoord::new(0, 0, 0));
            floor.fill_layers(0..4, SOLID);
            world.insert_chunk(floor)?;
            world.insert_chunk(sparse_field(ChunkCoord::new(-1, 0, -1), 6))?;
        }
        WorldPreset::Flat { radius, layers } => {
            let r = i32::try_from(*radius)
                .ok()
                .filter(|_| *radius <= MAX_FLAT_RADIUS)
                .ok_or(WorldError::RadiusOutOfRange {
                    radius: *radius,
                    max: MAX_FLAT_RADIUS,
                })?;
            for cz in -r..r.max(1) {
                for cx in -r..r.max(1) {
                    let mut chunk = Chunk::new(ChunkCoord::new(cx, 0, cz));
                    chunk.fill_layers(0..*layers, SOLID);
                    world.insert_chunk(chunk)?;
                }
            }
        }
        WorldPreset::Empty => {
            world.insert_chunk(Chunk::new(ChunkCoord::new(0, 0, 0)))?;
        }
    }

    for (_, chunk) in world.iter() {
        tracing::debug!("{}: {} solid blocks", chunk.coord(), chunk.solid_count());
    }
    world.clear_dirty();
    tracing::info!(
        "Built {:?} world with {} chunks",
        preset,
        world.chunk_count()
    );
    Ok(world)
}

/// Every third block of the bottom `layers` layers, counting y, then z, then x.
fn sparse_field(coord: ChunkCoord, layers: u32) -> Chunk {
    let dim = CHUNK_DIM as u32;
    let mut chunk = Chunk::new(coord);
    let mut counter = 0u32;
    for y in 0..layers.min(dim) {
        for z in 0..dim {
            for x in 0..dim {
                if counter % 3 == 0 {
                    chunk.set_local(UVec3::new(x, y, z), SOLID);
                }
                counter += 1;
            }
        }
    }
    chunk
}
