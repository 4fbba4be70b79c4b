use crate::color::Color;
use crate::point::{Point3, Vector3};
use crate::scene::Scene;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3,
    // not guaranteed to be unit length
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        return Self { origin, direction };
    }

    pub fn at(&self, t: f64) -> Point3 {
        return self.origin + t * self.direction;
    }

    /// Shades this ray against the scene.
    ///
    /// Only forward hits (`t > 0`) are lit; everything else, including the
    /// negative root returned when the origin lies inside the sphere, is
    /// black.
    pub fn color(&self, scene: &Scene) -> Color {
        let t = scene.sphere.hit(self);
        if t > 0. {
            let normal = scene.sphere.normal_at(self.at(t));
            return scene.shade(normal);
        }

        return Color::BLACK;
    }
}
