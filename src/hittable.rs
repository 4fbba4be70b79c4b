use crate::point::{Point3, Vector3};
use crate::ray::Ray;

/// Returned by [`Sphere::hit`] when the ray's line misses the sphere.
pub const NO_HIT: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Self {
        return Self { center, radius };
    }

    /// Ray parameter of the nearer intersection with this sphere, or
    /// [`NO_HIT`].
    ///
    /// Only the nearer root is computed, so the result may be negative when
    /// the sphere is behind the ray origin or the origin lies inside it.
    /// Callers reject those by checking `t > 0`. A tangent ray
    /// (discriminant exactly zero) counts as a hit.
    pub fn hit(&self, ray: &Ray) -> f64 {
        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = h * h - a * c;

        if discriminant < 0. {
            return NO_HIT;
        }
        return (h - discriminant.sqrt()) / a;
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Point3) -> Vector3 {
        return (point - self.center).normalize();
    }
}
