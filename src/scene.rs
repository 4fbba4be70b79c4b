use crate::color::Color;
use crate::hittable::Sphere;
use crate::point::{Point3, Vector3};
use glam::DVec3;

/// The fixed scene: one diffuse sphere under a directional light, with
/// nothing behind it.
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub sphere: Sphere,
    /// Direction the light travels in. Not normalised.
    pub light: Vector3,
    pub base_color: Color,
    pub attenuation: f64,
}

impl Default for Scene {
    fn default() -> Self {
        return Self {
            sphere: Sphere::new(Point3::new(0., 0., -1.), 0.5),
            light: DVec3::new(-1., -1., -1.),
            base_color: Color::new(0.7, 0.4, 0.3),
            attenuation: 0.5,
        };
    }
}

impl Scene {
    /// Diffuse shading for a surface with unit normal `normal`.
    pub fn shade(&self, normal: Vector3) -> Color {
        let d = normal.dot(-self.light).max(0.);
        return d * self.attenuation * self.base_color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_turned_from_the_light_are_black() {
        let scene = Scene::default();
        let away = DVec3::new(-1., -1., -1.).normalize();
        assert_eq!(scene.shade(away), Color::BLACK);
    }

    #[test]
    fn shading_scales_with_incidence() {
        let scene = Scene::default();
        let facing = DVec3::new(1., 1., 1.).normalize();

        // dot((1,1,1)/sqrt(3), (1,1,1)) = sqrt(3)
        let expected = 3f64.sqrt() * 0.5;
        let color = scene.shade(facing);
        assert!((color.r - expected * 0.7).abs() < 1e-12);
        assert!((color.g - expected * 0.4).abs() < 1e-12);
        assert!((color.b - expected * 0.3).abs() < 1e-12);
    }
}
