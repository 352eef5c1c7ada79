//! sphview: a point cloud viewer for SPH simulation output.
//!
//! Loads a fixed range of timestep files at startup, then renders the
//! particles of the current timestep every frame. Left/right arrows step
//! through time, the mouse orbits the camera, and `+`/`-` adjust the point
//! size.

use std::process;

use sphview_data::TimeSeriesStore;
use sphview_window::Config;

use crate::frame::FrameDriver;

mod camera;
mod config;
mod frame;
mod playback;

fn main() {
    let window_config = Config::new()
        .with_title("sphview")
        .with_inner_size(500, 500);
    sphview_window::init_logging(&window_config);

    let dataset = config::DatasetConfig::default();
    let data_dir = dataset.data_dir(window_config.root_dir());
    let labels = dataset.step_labels();

    // All timesteps are loaded before the render loop starts; a failed load
    // means the viewer never opens a window.
    let store = match TimeSeriesStore::load(&data_dir, &labels) {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("failed to load dataset: {}", error);
            process::exit(1);
        }
    };

    let mut driver = FrameDriver::new(store);
    sphview_window::run(&window_config, move |env| driver.frame(env));
}
