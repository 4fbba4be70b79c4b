use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Renders a single lit sphere at 1280x720 and writes it out as a PPM image.
#[derive(Debug, Parser)]
#[command(name = "raycaster")]
pub struct Args {
    /// Where to write the rendered image
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    /// Worker threads for the render pass (defaults to the number of CPUs)
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub threads: Option<usize>,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
