//! Grid traversal (Amanatides & Woo style DDA) over unit block cells.
//!
//! [`GridWalk`] visits every cell the segment `start → end` passes through, in
//! order of increasing distance from `start`. Ray parameters are normalized to
//! the segment: `t = 0` at `start`, `t = 1` at `end`.

use std::iter::FusedIterator;

use cubecast_math::Vec3f;
use glam::IVec3;

/// Per-axis segment extents at or below this never cross a cell boundary.
pub const AXIS_TOLERANCE: f32 = 1e-3;

/// One cell visited by a [`GridWalk`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalkStep {
    /// The cell entered.
    pub cell: IVec3,
    /// Unit step taken to enter `cell` (zero for the start cell).
    pub step: IVec3,
    /// Normalized ray parameter at which `cell` was entered.
    pub t: f32,
}

/// Iterator over the cells crossed by a segment.
///
/// The first item is always the start cell with `t = 0`. Each following item
/// moves exactly one unit along the axis whose next boundary is nearest; ties
/// go to X, then Y, then Z. The walk ends on the end cell after exactly
/// `|Δi| + |Δj| + |Δk|` steps.
#[derive(Clone, Debug)]
pub struct GridWalk {
    cell: IVec3,
    end: IVec3,
    step: IVec3,
    /// Ray parameter of the next boundary crossing per axis.
    t_max: [f32; 3],
    /// Ray parameter needed to cross one whole cell per axis.
    t_delta: [f32; 3],
    remaining: u64,
    started: bool,
}

impl GridWalk {
    /// Prepares a walk over the segment from `start` to `end`.
    ///
    /// Axes whose extent is within [`AXIS_TOLERANCE`] never step: their end
    /// cell index is taken to be the start cell index.
    pub fn new(start: Vec3f, end: Vec3f) -> Self {
        let cell = start.floor_to_cell();
        let mut end_cell = end.floor_to_cell();
        let mut step = IVec3::ZERO;
        let mut t_max = [f32::INFINITY; 3];
        let mut t_delta = [f32::INFINITY; 3];

        for axis in 0..3 {
            let (from, to) = (start[axis], end[axis]);
            step[axis] = if from < to {
                1
            } else if from > to {
                -1
            } else {
                0
            };

            let extent = (to - from).abs();
            if extent > AXIS_TOLERANCE {
                let min = from.floor();
                let to_boundary = if from < to { min + 1.0 - from } else { from - min };
                t_max[axis] = to_boundary / extent;
                t_delta[axis] = 1.0 / extent;
            } else {
                // Unlike a plain floor of `end`, a sub-tolerance crossing keeps the start index.
                end_cell[axis] = cell[axis];
            }
        }

        let remaining = (0..3)
            .map(|axis| (i64::from(end_cell[axis]) - i64::from(cell[axis])).unsigned_abs())
            .sum();

        Self {
            cell,
            end: end_cell,
            step,
            t_max,
            t_delta,
            remaining,
            started: false,
        }
    }

    /// The cell the walk will finish on.
    pub fn end_cell(&self) -> IVec3 {
        self.end
    }

    /// Picks the stepping axis among those not yet at their end index.
    fn next_axis(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for axis in 0..3 {
            // Nearest boundary alone would let an axis overshoot its end index.
            if self.cell[axis] == self.end[axis] {
                continue;
            }
            match best {
                Some(b) if self.t_max[b] <= self.t_max[axis] => {}
                _ => best = Some(axis),
            }
        }
        best
    }
}

impl Iterator for GridWalk {
    type Item = WalkStep;

    fn next(&mut self) -> Option<WalkStep> {
        if !self.started {
            self.started = true;
            return Some(WalkStep {
                cell: self.cell,
                step: IVec3::ZERO,
                t: 0.0,
            });
        }
        if self.remaining == 0 {
            return None;
        }

        let axis = self.next_axis()?;
        let t = self.t_max[axis];
        self.t_max[axis] += self.t_delta[axis];

        let mut step = IVec3::ZERO;
        step[axis] = self.step[axis];
        self.cell += step;
        self.remaining -= 1;

        Some(WalkStep {
            cell: self.cell,
            step,
            t,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.remaining as usize + usize::from(!self.started);
        (left, Some(left))
    }
}

impl FusedIterator for GridWalk {}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32, z: f32) -> Vec3f {
        Vec3f::new(x, y, z)
    }

    fn cells(walk: GridWalk) -> Vec<IVec3> {
        walk.map(|s| s.cell).collect()
    }

    #[test]
    fn test_straight_walk_along_x() {
        let steps: Vec<WalkStep> = GridWalk::new(v(0.5, 0.5, 0.5), v(3.5, 0.5, 0.5)).collect();
        let visited: Vec<i32> = steps.iter().map(|s| s.cell.x).collect();
        assert_eq!(visited, vec![0, 1, 2, 3]);
        assert_eq!(steps[0].t, 0.0);
        assert!((steps[1].t - 0.5 / 3.0).abs() < 1e-6);
        assert!((steps[3].t - 2.5 / 3.0).abs() < 1e-6);
        assert!(steps[1..].iter().all(|s| s.step == IVec3::X));
    }

    #[test]
    fn test_negative_direction() {
        let walk = GridWalk::new(v(0.5, 0.5, 0.5), v(-1.5, 0.5, 0.5));
        assert_eq!(
            cells(walk),
            vec![IVec3::ZERO, IVec3::new(-1, 0, 0), IVec3::new(-2, 0, 0)]
        );
    }

    #[test]
    fn test_tie_between_x_and_y_steps_x_first() {
        let steps: Vec<WalkStep> = GridWalk::new(v(0.5, 0.5, 0.5), v(2.5, 2.5, 0.5)).collect();
        let order: Vec<IVec3> = steps[1..].iter().map(|s| s.step).collect();
        assert_eq!(order, vec![IVec3::X, IVec3::Y, IVec3::X, IVec3::Y]);
        assert_eq!(steps[1].t, steps[2].t);
    }

    #[test]
    fn test_three_way_tie_orders_x_y_z() {
        let steps: Vec<IVec3> = GridWalk::new(v(0.5, 0.5, 0.5), v(1.5, 1.5, 1.5))
            .skip(1)
            .map(|s| s.step)
            .collect();
        assert_eq!(steps, vec![IVec3::X, IVec3::Y, IVec3::Z]);
    }

    #[test]
    fn test_tie_between_y_and_z_steps_y_first() {
        let steps: Vec<IVec3> = GridWalk::new(v(0.9, 0.5, 0.5), v(1.5, 2.5, 2.5))
            .skip(1)
            .map(|s| s.step)
            .collect();
        assert_eq!(
            steps,
            vec![IVec3::X, IVec3::Y, IVec3::Z, IVec3::Y, IVec3::Z]
        );
    }

    #[test]
    fn test_zero_length_visits_only_start() {
        let walk = GridWalk::new(v(3.2, -1.5, 7.9), v(3.2, -1.5, 7.9));
        assert_eq!(walk.size_hint(), (1, Some(1)));
        assert_eq!(cells(walk), vec![IVec3::new(3, -2, 7)]);
    }

    #[test]
    fn test_flat_axis_never_steps() {
        let walk = GridWalk::new(v(0.5, 0.5, 0.5), v(0.5004, 3.5, 0.5));
        let steps: Vec<WalkStep> = walk.collect();
        assert_eq!(steps.len(), 4);
        assert!(steps[1..].iter().all(|s| s.step == IVec3::Y));
    }

    #[test]
    fn test_near_zero_extent_across_boundary_terminates() {
        let walk = GridWalk::new(v(0.9999, 0.5, 0.5), v(1.0004, 2.5, 0.5));
        assert_eq!(walk.end_cell(), IVec3::new(0, 2, 0));
        let visited = cells(walk);
        assert_eq!(visited.last(), Some(&IVec3::new(0, 2, 0)));
        assert_eq!(visited.len(), 3);
    }

    #[test]
    fn test_short_segment_from_cell_boundary_stays_put() {
        // Floor of the end point would be x = -5; the walk keeps x = -4.
        let walk = GridWalk::new(v(-4.0, 0.5, 15.5), v(-4.0008, 0.5, 15.5));
        assert_eq!(walk.end_cell(), IVec3::new(-4, 0, 15));
        let steps: Vec<WalkStep> = walk.collect();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].t, 0.0);
    }

    #[test]
    fn test_walk_is_contiguous_and_reaches_end() {
        let origin = v(0.3, 5.7, -2.2);
        for yaw_step in 0..24 {
            for pitch_step in 0..12 {
                let yaw = yaw_step as f32 * 15f32.to_radians();
                let pitch = (pitch_step as f32 * 15.0 - 82.5).to_radians();
                let dir = v(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos());
                let end = origin + dir * 7.5;

                let walk = GridWalk::new(origin, end);
                let end_cell = walk.end_cell();
                let expected_len = walk.size_hint().0;
                let steps: Vec<WalkStep> = walk.collect();

                assert_eq!(steps.len(), expected_len);
                assert_eq!(steps[0].cell, origin.floor_to_cell());
                assert_eq!(steps.last().map(|s| s.cell), Some(end_cell));

                for pair in steps.windows(2) {
                    let diff = pair[1].cell - pair[0].cell;
                    assert_eq!(diff, pair[1].step);
                    assert_eq!(diff.abs().element_sum(), 1, "non-unit step {diff}");
                    assert!(pair[1].t >= pair[0].t);
                }
            }
        }
    }
}
