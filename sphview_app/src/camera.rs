use std::f32::consts::FRAC_PI_2;

use sphview_viz::{Camera, Vec3};
use sphview_window::{DragState, Input};

const RADIANS_PER_PIXEL: f32 = 0.01;
const ZOOM_PER_LINE: f32 = 0.9;

/// Orbit control: drag to rotate around the focus point, scroll to zoom.
#[derive(Debug)]
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    focus: Vec3,
    drag: DragState,
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 20.0,
            focus: Vec3::zero(),
            drag: DragState::new(),
        }
    }

    pub fn update(&mut self, input: &Input) {
        self.drag.update(input);
        if self.drag.is_dragging() {
            let delta = self.drag.drag_delta();
            self.yaw -= delta.x * RADIANS_PER_PIXEL;
            self.pitch += delta.y * RADIANS_PER_PIXEL;

            let limit = FRAC_PI_2 - 0.01;
            self.pitch = self.pitch.clamp(-limit, limit);
        }

        let scroll = input.mouse_wheel_delta().y;
        if scroll != 0.0 {
            self.distance = (self.distance * ZOOM_PER_LINE.powf(scroll)).clamp(1.0, 200.0);
        }
    }

    /// The world-space camera position implied by the current orbit state.
    pub fn position(&self) -> Vec3 {
        let direction = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        );
        self.focus + direction * self.distance
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera::perspective(45.0, aspect, 0.01, 500.0).look_at(self.position(), self.focus)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_position_matches_initial_distance() {
        let camera = OrbitCamera::new();
        let pos = camera.position();
        assert!((pos - Vec3::new(0.0, 0.0, 20.0)).mag() < 1e-5);
    }
}
