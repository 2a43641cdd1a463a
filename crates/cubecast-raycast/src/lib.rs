//! Block targeting: grid traversal along a ray, first-solid-block queries, and
//! the break/place interactions driven by their results.

mod interact;
mod raycast;
mod walk;

pub use interact::{InteractError, place_block, remove_block};
pub use raycast::{Ray, RaycastResult, raycast};
pub use walk::{AXIS_TOLERANCE, GridWalk, WalkStep};
