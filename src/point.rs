use glam::DVec3;
use std::ops::{Add, Sub};

/// Free direction or displacement in 3-space.
pub type Vector3 = DVec3;

/// Affine position in 3-space.
///
/// Only three mixed operations exist: `Point3 + Vector3 -> Point3`,
/// `Point3 - Point3 -> Vector3` and `Point3 - Vector3 -> Vector3`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Self = Self { x: 0., y: 0., z: 0. };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        return Self { x, y, z };
    }

    /// Displacement of this point from the origin.
    pub fn to_vector(self) -> Vector3 {
        return DVec3::new(self.x, self.y, self.z);
    }
}

impl From<Vector3> for Point3 {
    fn from(v: Vector3) -> Self {
        return Self::new(v.x, v.y, v.z);
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(self, v: Vector3) -> Point3 {
        return Point3::new(self.x + v.x, self.y + v.y, self.z + v.z);
    }
}

impl Sub<Point3> for Point3 {
    type Output = Vector3;

    fn sub(self, p: Point3) -> Vector3 {
        return DVec3::new(self.x - p.x, self.y - p.y, self.z - p.z);
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Vector3;

    fn sub(self, v: Vector3) -> Vector3 {
        return DVec3::new(self.x - v.x, self.y - v.y, self.z - v.z);
    }
}
