use criterion::{criterion_group, criterion_main, Criterion};
use raycaster::camera::{Camera, CameraConfig};
use raycaster::framebuffer::Framebuffer;
use raycaster::render::{render_frame, render_frame_sequential};
use raycaster::scene::Scene;
use raycaster::{IMAGE_HEIGHT, IMAGE_WIDTH};

fn bench_render_frame(c: &mut Criterion) {
    let camera = Camera::new(CameraConfig::default()).unwrap();
    let scene = Scene::default();
    let mut frame = Framebuffer::new(IMAGE_WIDTH, IMAGE_HEIGHT).unwrap();

    c.bench_function("render_frame", |b| {
        b.iter(|| render_frame(&camera, &scene, &mut frame).unwrap())
    });
    c.bench_function("render_frame_sequential", |b| {
        b.iter(|| render_frame_sequential(&camera, &scene, &mut frame).unwrap())
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_render_frame
);
criterion_main!(benches);
