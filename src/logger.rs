use log::LevelFilter;

/// Initialize the logger; `RUST_LOG` can still refine per-module levels.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
