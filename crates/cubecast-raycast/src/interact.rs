//! Break and place interactions applied to the block a raycast targeted.

use cubecast_voxel::{ChunkId, World, WorldError};
use glam::IVec3;
use thiserror::Error;

use crate::raycast::RaycastResult;

/// Reasons a block interaction cannot be applied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InteractError {
    /// The raycast did not hit anything.
    #[error("raycast result has no collision")]
    NoCollision,
    /// The result's chunk handle does not own the hit cell in this world.
    #[error("chunk {0:?} does not own the hit cell in this world")]
    UnknownChunk(ChunkId),
    /// The ray started inside the hit block, so there is no adjacent empty cell.
    #[error("ray started inside the hit block")]
    NoAdjacentCell,
    /// The placement target is already solid.
    #[error("block {0} is already occupied")]
    Occupied(IVec3),
    /// The placement target lies in a chunk that is not loaded.
    #[error(transparent)]
    World(#[from] WorldError),
}

/// Clears the block hit by `result`.
///
/// Calling this again with the same result succeeds and leaves the block empty.
///
/// # Errors
///
/// Returns [`InteractError::NoCollision`] if `result` did not hit anything and
/// [`InteractError::UnknownChunk`] if its chunk handle does not belong to `world`.
pub fn remove_block(world: &mut World, result: &RaycastResult) -> Result<(), InteractError> {
    let id = result.hit_chunk.ok_or(InteractError::NoCollision)?;
    let chunk = world
        .chunk_mut(id)
        .filter(|chunk| chunk.coord().contains_block(result.hit_cell))
        .ok_or(InteractError::UnknownChunk(id))?;

    chunk.clear(result.hit_cell);
    tracing::info!("Removed block {} in {}", result.hit_cell, chunk.coord());
    Ok(())
}

/// Writes `value` into the empty cell in front of the face `result` hit.
///
/// Returns the cell that was filled.
///
/// # Errors
///
/// Returns [`InteractError::NoCollision`] without a hit,
/// [`InteractError::NoAdjacentCell`] if the ray started inside the hit block,
/// [`InteractError::Occupied`] if the target has been filled since the raycast,
/// and [`InteractError::World`] if no chunk owns the target cell.
pub fn place_block(
    world: &mut World,
    result: &RaycastResult,
    value: u8,
) -> Result<IVec3, InteractError> {
    if !result.collision() {
        return Err(InteractError::NoCollision);
    }
    if result.last_step == IVec3::ZERO {
        return Err(InteractError::NoAdjacentCell);
    }

    let target = result.last_empty_cell();
    if world.is_occupied(target) {
        return Err(InteractError::Occupied(target));
    }
    world.set_block(target, value)?;
    tracing::info!("Placed block {} against {}", target, result.hit_cell);
    Ok(target)
}
