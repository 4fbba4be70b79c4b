use crate::camera::Camera;
use crate::error::{RenderError, Result};
use crate::framebuffer::Framebuffer;
use crate::scene::Scene;
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use std::time::Instant;

/// Renders every pixel of `frame`, rows in parallel.
pub fn render_frame(camera: &Camera, scene: &Scene, frame: &mut Framebuffer) -> Result<()> {
    return render_frame_with_progress(camera, scene, frame, ProgressBar::hidden());
}

/// Same as [`render_frame`], ticking `progress` once per finished row.
pub fn render_frame_with_progress(
    camera: &Camera,
    scene: &Scene,
    frame: &mut Framebuffer,
    progress: ProgressBar,
) -> Result<()> {
    check_dimensions(camera, frame)?;
    progress.set_length(frame.height() as u64);

    let start = Instant::now();
    // rows are disjoint, so they can be shaded in parallel
    frame
        .par_rows_mut()
        .enumerate()
        .progress_with(progress.clone())
        .for_each(|(y, row)| render_row(camera, scene, y as u32, row));
    progress.finish_and_clear();

    log::info!("Raytracing took: {} seconds", start.elapsed().as_secs_f64());
    Ok(())
}

/// Single-threaded reference pass, left to right, top to bottom.
pub fn render_frame_sequential(
    camera: &Camera,
    scene: &Scene,
    frame: &mut Framebuffer,
) -> Result<()> {
    check_dimensions(camera, frame)?;

    let start = Instant::now();
    for (y, row) in frame.rows_mut().enumerate() {
        render_row(camera, scene, y as u32, row);
    }

    log::info!("Raytracing took: {} seconds", start.elapsed().as_secs_f64());
    Ok(())
}

fn render_row(camera: &Camera, scene: &Scene, y: u32, row: &mut [u32]) {
    for (x, pixel) in row.iter_mut().enumerate() {
        *pixel = camera.get_ray(x as u32, y).color(scene).to_packed_pixel();
    }
}

fn check_dimensions(camera: &Camera, frame: &Framebuffer) -> Result<()> {
    let expected = (camera.image_width(), camera.image_height());
    let actual = (frame.width(), frame.height());
    if expected != actual {
        return Err(RenderError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
