use sphview_data::TimeSeriesStore;
use sphview_viz::{CloudSlice, PointCloudScene};
use sphview_window::{AppEnv, Input, KeyCode};

use crate::{
    camera::OrbitCamera,
    playback::{PlaybackCursor, StepDirection},
};

const POINT_SIZE_PER_SECOND: f32 = 10.0;
const MIN_POINT_SIZE: f32 = 0.5;
const MAX_POINT_SIZE: f32 = 30.0;

/// Owns the per-frame sequencing: poll input, apply one cursor transition,
/// decide whether the GPU attribute buffers need new contents, and submit the
/// frame's scene.
#[derive(Debug)]
pub struct FrameDriver {
    store: TimeSeriesStore,
    cursor: PlaybackCursor,
    camera: OrbitCamera,
    point_size: f32,
    last_fps: f32,
}

impl FrameDriver {
    pub fn new(store: TimeSeriesStore) -> Self {
        let cursor = PlaybackCursor::new(store.timestep_count());
        Self {
            store,
            cursor,
            camera: OrbitCamera::new(),
            point_size: 2.0,
            last_fps: 0.0,
        }
    }

    /// Runs one frame of the application.
    pub fn frame(&mut self, env: &dyn AppEnv) {
        let input = env.input();

        // The fps measurement updates about once per second.
        let fps = env.fps();
        if fps != self.last_fps {
            tracing::debug!("{:.0} fps ({:.2} ms/frame)", fps, env.mspf());
            self.last_fps = fps;
        }

        self.camera.update(input);
        self.update_point_size(input, env.delta_seconds());

        let direction = StepDirection::from_input(input);
        let aspect = aspect_ratio(env.window_size());

        let scene = self.tick(direction, env.first_run(), aspect);
        env.draw(scene);
    }

    fn update_point_size(&mut self, input: &Input, delta_seconds: f32) {
        let mut size = self.point_size;
        if input.key_down(KeyCode::Equal) {
            size += POINT_SIZE_PER_SECOND * delta_seconds;
        }
        if input.key_down(KeyCode::Minus) {
            size -= POINT_SIZE_PER_SECOND * delta_seconds;
        }
        self.point_size = size.clamp(MIN_POINT_SIZE, MAX_POINT_SIZE);
    }

    /// Applies this frame's cursor transition and builds the scene.
    ///
    /// The scene carries an attribute upload only on the first frame and on
    /// frames where the cursor actually moved, so the GPU transfer cost is
    /// paid on timestep transitions rather than once per frame.
    fn tick(&mut self, direction: StepDirection, first_run: bool, aspect: f32) -> PointCloudScene {
        self.cursor.apply(direction);

        let upload = if first_run || self.cursor.changed() {
            let slice = self.store.slice(self.cursor.index());
            tracing::debug!("displaying timestep {}", slice.label);
            Some(CloudSlice::new(
                slice.positions.to_vec(),
                slice.density.to_vec(),
            ))
        } else {
            None
        };

        PointCloudScene::new(self.camera.camera(aspect))
            .with_point_size(self.point_size)
            .with_density_range(self.store.density_range())
            .with_upload(upload)
    }
}

/// The window's aspect ratio, falling back to 1.0 while either dimension is
/// zero (e.g. a minimized window).
fn aspect_ratio([width, height]: [f32; 2]) -> f32 {
    if width > 0.0 && height > 0.0 {
        width / height
    } else {
        1.0
    }
}

#[cfg(test)]
mod test {
    use sphview_data::Timestep;

    use super::*;

    fn timestep(label: &str, base: f32) -> Timestep {
        let positions = vec![base, base, base, base + 1.0, base + 1.0, base + 1.0];
        let density = vec![base, base + 0.5];
        Timestep::new(label.to_string(), positions, density).unwrap()
    }

    fn driver() -> FrameDriver {
        let store = TimeSeriesStore::from_timesteps(vec![
            timestep("050", 0.0),
            timestep("100", 10.0),
            timestep("150", 20.0),
        ])
        .unwrap();
        FrameDriver::new(store)
    }

    fn expected_slice(driver: &FrameDriver, index: usize) -> CloudSlice {
        let slice = driver.store.slice(index);
        CloudSlice::new(slice.positions.to_vec(), slice.density.to_vec())
    }

    #[test]
    fn first_frame_uploads_timestep_zero() {
        let mut driver = driver();
        let scene = driver.tick(StepDirection::None, true, 1.0);
        assert_eq!(scene.upload, Some(expected_slice(&driver, 0)));
    }

    #[test]
    fn steady_frames_upload_nothing() {
        let mut driver = driver();
        driver.tick(StepDirection::None, true, 1.0);

        let scene = driver.tick(StepDirection::None, false, 1.0);
        assert_eq!(scene.upload, None);
    }

    #[test]
    fn uploads_follow_transitions_not_requests() {
        let mut driver = driver();
        driver.tick(StepDirection::None, true, 1.0);

        // Three forwards from index 0 in a 3-step store: the third is clamped.
        let transitions = [
            (StepDirection::Forward, Some(1)),
            (StepDirection::Forward, Some(2)),
            (StepDirection::Forward, None),
            (StepDirection::Backward, Some(1)),
        ];

        for (direction, expected) in transitions {
            let scene = driver.tick(direction, false, 1.0);
            match expected {
                Some(index) => {
                    assert_eq!(driver.cursor.index(), index);
                    assert_eq!(scene.upload, Some(expected_slice(&driver, index)));
                }
                None => assert_eq!(scene.upload, None),
            }
        }
    }

    #[test]
    fn buffer_mirror_keeps_contents_across_no_change_frames() {
        // Emulates the GPU buffer: rewritten only when a scene carries an
        // upload, otherwise left untouched.
        let mut driver = driver();
        let mut mirror: Vec<f32> = Vec::new();

        let mut apply = |mirror: &mut Vec<f32>, scene: &PointCloudScene| {
            if let Some(upload) = &scene.upload {
                *mirror = upload.positions.clone();
            }
        };

        let scene = driver.tick(StepDirection::None, true, 1.0);
        apply(&mut mirror, &scene);
        assert_eq!(mirror, driver.store.slice(0).positions);

        // Sentinel write; a no-change frame must leave it alone.
        mirror[0] = f32::NAN;
        let scene = driver.tick(StepDirection::None, false, 1.0);
        apply(&mut mirror, &scene);
        assert!(mirror[0].is_nan());

        let scene = driver.tick(StepDirection::Forward, false, 1.0);
        apply(&mut mirror, &scene);
        assert_eq!(mirror, driver.store.slice(1).positions);
    }

    #[test]
    fn degenerate_window_sizes_fall_back_to_square_aspect() {
        assert_eq!(aspect_ratio([800.0, 600.0]), 800.0 / 600.0);
        assert_eq!(aspect_ratio([800.0, 0.0]), 1.0);
        assert_eq!(aspect_ratio([0.0, 600.0]), 1.0);
        assert_eq!(aspect_ratio([0.0, 0.0]), 1.0);
    }

    #[test]
    fn scene_carries_point_size_and_density_range() {
        let mut driver = driver();
        let scene = driver.tick(StepDirection::None, true, 1.0);
        assert_eq!(scene.point_size, 2.0);
        assert_eq!(scene.density_range, [0.0, 20.5]);
    }
}
