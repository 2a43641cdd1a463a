//! f32 vector type and the small set of vector operations the voxel raycaster needs.

mod vector;

pub use vector::{NORMALIZE_EPSILON, Vec3f};
