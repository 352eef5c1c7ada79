//! A crate for creating a window and rendering a point cloud with wgpu.
//!
//! This crate also initializes logging to a file and stderr.
//!
//! # Example
//! ```no_run
//! use sphview_viz::{Camera, PointCloudScene, Vec3};
//!
//! let config = sphview_window::Config::new().with_title("Minimal example");
//! sphview_window::init_logging(&config);
//!
//! sphview_window::run(&config, move |env| {
//!     let camera = Camera::perspective(45.0, 1.0, 0.01, 100.0)
//!         .look_at(Vec3::new(0.0, 0.0, 20.0), Vec3::zero());
//!     env.draw(PointCloudScene::new(camera));
//! });
//! ```

#![warn(rust_2018_idioms, missing_debug_implementations, missing_docs)]

pub use app_env::*;
pub use config::*;
pub use input::*;
pub use winit::{event::MouseButton, keyboard::KeyCode};

mod app_env;
mod config;
mod container;
mod frame_clock;
mod input;
mod logging;
mod wgpu_util;
mod window;

/// Initializes logging to stderr and the config's log file, and installs a
/// panic hook that records panics there.
///
/// Call this once, before [run], so that failures during data loading are
/// logged too.
pub fn init_logging(config: &Config) {
    logging::init(&config.log_file_path());

    logging::print_to_log_file(&"-".repeat(80));
    if !config.title().is_empty() {
        tracing::info!("{}", config.title());
    }
    tracing::info!(
        "Platform: {} {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
}

/// Opens a window and runs the application.
///
/// The `draw` callback runs once per frame; it samples input through
/// [AppEnv] and submits the frame's scene with [AppEnv::draw]. This function
/// does not return until the window is closed.
pub fn run(config: &Config, draw: impl FnMut(&dyn AppEnv) + 'static) {
    window::open_window_and_run(config, draw);
}
