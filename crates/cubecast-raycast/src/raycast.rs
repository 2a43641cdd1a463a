//! First-solid-block queries against a [`World`].

use cubecast_math::Vec3f;
use cubecast_voxel::{ChunkId, World};
use glam::IVec3;

use crate::walk::GridWalk;

/// A bounded ray through the block grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3f,
    /// Unit direction. Not re-normalized by the traversal.
    pub direction: Vec3f,
    /// Maximum travel distance in world units (blocks).
    pub max_length: f32,
}

impl Ray {
    /// Creates a ray. `direction` must already be unit length.
    pub fn new(origin: Vec3f, direction: Vec3f, max_length: f32) -> Self {
        Self {
            origin,
            direction,
            max_length,
        }
    }

    /// Far end of the ray: `origin + max_length * direction`.
    pub fn end(&self) -> Vec3f {
        self.origin + self.max_length * self.direction
    }

    /// Point `distance` units along the ray.
    pub fn point_at(&self, distance: f32) -> Vec3f {
        self.origin + self.direction * distance
    }
}

/// Outcome of [`raycast`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastResult {
    /// Chunk owning the hit block; `None` when nothing was hit.
    pub hit_chunk: Option<ChunkId>,
    /// The solid block hit, or the ray's end cell when nothing was hit.
    pub hit_cell: IVec3,
    /// Unit step taken to enter `hit_cell` (zero if the ray never left its start cell).
    pub last_step: IVec3,
    /// World distance from the origin to where the ray entered `hit_cell`.
    pub distance: f32,
}

impl RaycastResult {
    /// Whether a solid block was hit.
    pub fn collision(&self) -> bool {
        self.hit_chunk.is_some()
    }

    /// The empty cell the ray passed through just before `hit_cell`.
    ///
    /// Equal to `hit_cell` when the ray started inside it.
    pub fn last_empty_cell(&self) -> IVec3 {
        self.hit_cell - self.last_step
    }

    /// Outward normal of the face the ray entered through (zero if it started inside).
    pub fn face_normal(&self) -> IVec3 {
        -self.last_step
    }
}

/// Walks `ray` through `world` and reports the first solid block.
///
/// The walk stops at the first occupied cell or at the ray's end cell, so it
/// takes at most `|Δi| + |Δj| + |Δk|` steps. Cells in chunks that are not
/// loaded read as empty.
pub fn raycast(world: &World, ray: &Ray) -> RaycastResult {
    let end = ray.end();
    let segment_length = (end - ray.origin).length();

    let mut result = RaycastResult {
        hit_chunk: None,
        hit_cell: ray.origin.floor_to_cell(),
        last_step: IVec3::ZERO,
        distance: 0.0,
    };
    let mut last_t = 0.0;

    for visit in GridWalk::new(ray.origin, end) {
        result.hit_cell = visit.cell;
        result.last_step = visit.step;
        last_t = visit.t;

        if let Some(id) = world.chunk_for_block(visit.cell)
            && world
                .chunk(id)
                .is_some_and(|chunk| chunk.is_occupied(visit.cell))
        {
            result.hit_chunk = Some(id);
            break;
        }
    }

    result.distance = last_t * segment_length;
    tracing::trace!(
        origin = %ray.origin,
        hit = result.collision(),
        cell = %result.hit_cell,
        distance = result.distance,
        "raycast"
    );
    result
}
