pub mod camera;
pub mod color;
pub mod error;
pub mod framebuffer;
pub mod hittable;
pub mod point;
pub mod present;
pub mod ray;
pub mod render;
pub mod scene;

use camera::{Camera, CameraConfig};
use error::Result;
use framebuffer::Framebuffer;
use scene::Scene;

pub const IMAGE_WIDTH: u32 = 1280;
pub const IMAGE_HEIGHT: u32 = 720;
pub const VIEWPORT_HEIGHT: f64 = 2.0;
pub const FOCAL_LENGTH: f64 = 1.0;

/// Renders the fixed scene through the default camera into a fresh
/// 1280x720 buffer.
pub fn render_default_frame() -> Result<Framebuffer> {
    let camera = Camera::new(CameraConfig::default())?;
    let mut frame = Framebuffer::new(IMAGE_WIDTH, IMAGE_HEIGHT)?;
    render::render_frame(&camera, &Scene::default(), &mut frame)?;
    return Ok(frame);
}
