use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, Mul, MulAssign, Neg, Sub, SubAssign};

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Lengths at or below this value normalize to the zero vector.
pub const NORMALIZE_EPSILON: f32 = 1e-4;

/// 3D vector in world space (one unit = one block edge).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3f {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Vec3f = Vec3f::new(0.0, 0.0, 0.0);
    /// Unit vector in the X direction.
    pub const X: Vec3f = Vec3f::new(1.0, 0.0, 0.0);
    /// Unit vector in the Y direction.
    pub const Y: Vec3f = Vec3f::new(0.0, 1.0, 0.0);
    /// Unit vector in the Z direction.
    pub const Z: Vec3f = Vec3f::new(0.0, 0.0, 1.0);
    /// Negative Y, "straight down".
    pub const NEG_Y: Vec3f = Vec3f::new(0.0, -1.0, 0.0);

    /// Create a new vector with the given components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the dot product: x₁x₂ + y₁y₂ + z₁z₂
    pub fn dot(self, rhs: Vec3f) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Returns the right-handed cross product self × rhs.
    ///
    ///   result.x = self.y * rhs.z - self.z * rhs.y
    ///   result.y = self.z * rhs.x - self.x * rhs.z
    ///   result.z = self.x * rhs.y - self.y * rhs.x
    pub fn cross(self, rhs: Vec3f) -> Vec3f {
        Vec3f::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Returns x² + y² + z².
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length √(x² + y² + z²).
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a unit vector pointing the same way.
    ///
    /// Vectors no longer than [`NORMALIZE_EPSILON`] come back as
    /// [`Vec3f::ZERO`] instead of dividing by a near-zero length.
    pub fn normalize(self) -> Vec3f {
        let len = self.length();
        if len > NORMALIZE_EPSILON {
            self / len
        } else {
            Vec3f::ZERO
        }
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Vec3f {
        Vec3f::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// The integer cell containing this point (floor of each component).
    pub fn floor_to_cell(self) -> IVec3 {
        IVec3::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }

    /// Components as an array, indexed X=0, Y=1, Z=2.
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for Vec3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

impl Index<usize> for Vec3f {
    type Output = f32;

    fn index(&self, axis: usize) -> &f32 {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3f axis index out of range: {axis}"),
        }
    }
}

impl From<Vec3> for Vec3f {
    fn from(v: Vec3) -> Self {
        Vec3f::new(v.x, v.y, v.z)
    }
}

impl From<Vec3f> for Vec3 {
    fn from(v: Vec3f) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl Add for Vec3f {
    type Output = Vec3f;

    fn add(self, rhs: Vec3f) -> Self::Output {
        Vec3f::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3f {
    type Output = Vec3f;

    fn sub(self, rhs: Vec3f) -> Self::Output {
        Vec3f::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3f {
    type Output = Vec3f;

    fn neg(self) -> Self::Output {
        Vec3f::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3f {
    type Output = Vec3f;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec3f::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3f> for f32 {
    type Output = Vec3f;

    fn mul(self, rhs: Vec3f) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Vec3f {
    type Output = Vec3f;

    fn div(self, rhs: f32) -> Self::Output {
        Vec3f::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AddAssign for Vec3f {
    fn add_assign(&mut self, rhs: Vec3f) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vec3f {
    fn sub_assign(&mut self, rhs: Vec3f) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl MulAssign<f32> for Vec3f {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}
