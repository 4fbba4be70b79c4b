use crate::error::{RenderError, Result};
use crate::point::{Point3, Vector3};
use crate::ray::Ray;
use crate::{FOCAL_LENGTH, IMAGE_HEIGHT, IMAGE_WIDTH, VIEWPORT_HEIGHT};
use glam::DVec3;

/// Inputs to [`Camera::new`].
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    pub image_width: u32,
    pub image_height: u32,
    /// Height of the viewport in world units.
    pub viewport_height: f64,
    /// Distance from the camera center to the viewport plane.
    pub focal_length: f64,
    pub center: Point3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        return Self {
            image_width: IMAGE_WIDTH,
            image_height: IMAGE_HEIGHT,
            viewport_height: VIEWPORT_HEIGHT,
            focal_length: FOCAL_LENGTH,
            center: Point3::ORIGIN,
        };
    }
}

/// Precomputed pixel to ray mapping. Immutable once built.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    image_width: u32,
    image_height: u32,
    center: Point3,
    pixel_delta_u: Vector3,
    pixel_delta_v: Vector3,
    pixel_00_loc: Point3,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Result<Self> {
        let CameraConfig {
            image_width,
            image_height,
            viewport_height,
            focal_length,
            center,
        } = config;

        if image_width == 0 || image_height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: image_width,
                height: image_height,
            });
        }

        let aspect_ratio = image_width as f64 / image_height as f64;
        let viewport_width = viewport_height * aspect_ratio;

        // calculate the vectors across the horizontal and down the vertical viewport edges.
        // v points down so that image rows grow downwards while world y grows upwards.
        let viewport_u = DVec3::new(viewport_width, 0., 0.);
        let viewport_v = DVec3::new(0., -viewport_height, 0.);

        // calculate the pixel deltas
        let pixel_delta_u = viewport_u / image_width as f64;
        let pixel_delta_v = viewport_v / image_height as f64;

        let viewport_upper_left = Point3::from(
            center - DVec3::new(0., 0., focal_length) - viewport_u / 2. - viewport_v / 2.,
        );
        // sample from the middle of pixel (0, 0), not its corner
        let pixel_00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        log::debug!(
            "camera basis for {}x{}: pixel00 {:?}, du {:?}, dv {:?}",
            image_width,
            image_height,
            pixel_00_loc,
            pixel_delta_u,
            pixel_delta_v
        );

        return Ok(Self {
            image_width,
            image_height,
            center,
            pixel_delta_u,
            pixel_delta_v,
            pixel_00_loc,
        });
    }

    /// Ray from the camera center through the middle of pixel `(x, y)`.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let pixel_center = self.pixel_00_loc
            + (x as f64 * self.pixel_delta_u)
            + (y as f64 * self.pixel_delta_v);
        let ray_direction = pixel_center - self.center;

        return Ray::new(self.center, ray_direction);
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn pixel_00_loc(&self) -> Point3 {
        self.pixel_00_loc
    }

    pub fn pixel_delta_u(&self) -> Vector3 {
        self.pixel_delta_u
    }

    pub fn pixel_delta_v(&self) -> Vector3 {
        self.pixel_delta_v
    }
}
