use glam::DVec3;
use raycaster::camera::{Camera, CameraConfig};
use raycaster::framebuffer::Framebuffer;
use raycaster::hittable::NO_HIT;
use raycaster::render::{render_frame, render_frame_sequential};
use raycaster::scene::Scene;
use raycaster::{render_default_frame, IMAGE_HEIGHT, IMAGE_WIDTH};

fn default_camera() -> Camera {
    return Camera::new(CameraConfig::default()).unwrap();
}

#[test]
fn center_ray_passes_through_sphere_depth() {
    let camera = default_camera();
    let ray = camera.get_ray(IMAGE_WIDTH / 2, IMAGE_HEIGHT / 2);

    // the viewport sits at z = -1, so t = 1 lands on it
    let point = ray.at(1.0).to_vector();
    let tolerance = camera.pixel_delta_u().length();
    assert!(point.abs_diff_eq(DVec3::new(0., 0., -1.), tolerance), "{point:?}");
}

#[test]
fn center_pixel_shows_the_sphere() {
    let camera = default_camera();
    let scene = Scene::default();
    let frame = render_default_frame().unwrap();

    let (x, y) = (640, 360);
    let ray = camera.get_ray(x, y);
    assert!(scene.sphere.hit(&ray) > 0.);

    let pixel = frame.pixel(x, y);
    assert_eq!(pixel, ray.color(&scene).to_packed_pixel());
    assert_ne!(pixel, 0x000000);
}

#[test]
fn corner_pixels_are_background() {
    let camera = default_camera();
    let scene = Scene::default();
    let frame = render_default_frame().unwrap();

    let corners = [
        (0, 0),
        (IMAGE_WIDTH - 1, 0),
        (0, IMAGE_HEIGHT - 1),
        (IMAGE_WIDTH - 1, IMAGE_HEIGHT - 1),
    ];
    for (x, y) in corners {
        assert_eq!(scene.sphere.hit(&camera.get_ray(x, y)), NO_HIT);
        assert_eq!(frame.pixel(x, y), 0x000000, "pixel ({x}, {y})");
    }
}

#[test]
fn rendering_is_idempotent() {
    let first = render_default_frame().unwrap();
    let second = render_default_frame().unwrap();
    assert_eq!(first.to_bytes(), second.to_bytes());
}

#[test]
fn full_frame_parallel_matches_sequential() {
    let camera = default_camera();
    let scene = Scene::default();

    let mut parallel = Framebuffer::new(IMAGE_WIDTH, IMAGE_HEIGHT).unwrap();
    let mut sequential = Framebuffer::new(IMAGE_WIDTH, IMAGE_HEIGHT).unwrap();
    render_frame(&camera, &scene, &mut parallel).unwrap();
    render_frame_sequential(&camera, &scene, &mut sequential).unwrap();

    assert_eq!(parallel.to_bytes(), sequential.to_bytes());
}
