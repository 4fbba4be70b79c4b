mod cli;
mod logger;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use raycaster::camera::{Camera, CameraConfig};
use raycaster::framebuffer::Framebuffer;
use raycaster::present::{PpmPresenter, Present};
use raycaster::render::render_frame_with_progress;
use raycaster::scene::Scene;
use raycaster::{IMAGE_HEIGHT, IMAGE_WIDTH};

use cli::Args;
use logger::init_logger;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let threads = args.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("failed to start render threads")?;
    log::info!(
        "rendering {}x{} on {} threads",
        IMAGE_WIDTH,
        IMAGE_HEIGHT,
        rayon::current_num_threads()
    );

    let camera = Camera::new(CameraConfig::default())?;
    let scene = Scene::default();
    let mut frame = Framebuffer::new(IMAGE_WIDTH, IMAGE_HEIGHT)?;

    let progress = ProgressBar::new(IMAGE_HEIGHT as u64).with_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} rows ({eta})")
            .context("invalid progress template")?,
    );
    render_frame_with_progress(&camera, &scene, &mut frame, progress)?;

    let mut presenter = PpmPresenter::new(&args.output);
    presenter
        .present(&frame)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}
