use sphview_viz::PointCloudScene;

use crate::{Config, Input};

/// Trait defining the interaction between the application and the window.
pub trait AppEnv {
    /// The config that was used when running the application.
    fn config(&self) -> &Config;

    /// True if this is the first time that the app callback has been called.
    fn first_run(&self) -> bool;

    /// A recent fps measurement.
    fn fps(&self) -> f32;

    /// A recent mspf measurement.
    fn mspf(&self) -> f32;

    /// Seconds elapsed since the previous frame began.
    fn delta_seconds(&self) -> f32;

    /// The current window size in logical pixels.
    fn window_size(&self) -> [f32; 2];

    /// The keyboard/mouse input state.
    fn input(&self) -> &Input;

    /// Submits the scene to render this frame.
    fn draw(&self, scene: PointCloudScene);
}
