use ultraviolet::{projection::rh_yup::perspective_wgpu_dx, Mat4, Vec3, Vec4};

/// Defines the projection and view matrices for a scene.
///
/// We assume that NDC space is `[-1, 1]` in x and y and `[0, 1]` in z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// The projection matrix from view space to NDC.
    pub proj_mtx: Mat4,
    /// The view matrix from world space to view space.
    pub view_mtx: Mat4,
}

impl Camera {
    /// Creates a new camera with the given projection and view matrices.
    pub fn new(proj_mtx: Mat4, view_mtx: Mat4) -> Self {
        Self { proj_mtx, view_mtx }
    }

    /// Creates a perspective camera, which by default looks from the origin
    /// down the negative z axis, from z = `-near` to z = `-far`.
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        assert!(fov_y_degrees > 0.0);
        assert!(aspect > 0.0);
        assert!(near > 0.0);
        assert!(far > near);

        Self {
            proj_mtx: perspective_wgpu_dx(fov_y_degrees.to_radians(), aspect, near, far),
            view_mtx: Mat4::identity(),
        }
    }

    /// Moves the camera to the given position and faces it toward the given
    /// point, keeping the world y axis upward.
    pub fn look_at(mut self, camera_pos: Vec3, focus: Vec3) -> Self {
        let translation = Mat4::from_translation(-camera_pos);

        let mut forward = focus - camera_pos;
        let mag = forward.mag();
        if mag < 0.0001 {
            self.view_mtx = translation;
            return self;
        }
        forward /= mag;

        let mut rightward = forward.cross(Vec3::unit_y());
        let mag = rightward.mag();
        if mag < 0.0001 {
            rightward = Vec3::unit_x();
        }
        rightward /= rightward.mag();

        let upward = rightward.cross(forward);

        let rotation = Mat4::new(
            rightward.into_homogeneous_vector(),
            upward.into_homogeneous_vector(),
            -forward.into_homogeneous_vector(),
            Vec4::unit_w(),
        )
        .transposed();

        self.view_mtx = rotation * translation;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn look_at_moves_focus_onto_negative_z() {
        let camera = Camera::perspective(45.0, 1.0, 0.01, 100.0)
            .look_at(Vec3::new(0.0, 0.0, 20.0), Vec3::zero());

        let focus_view = camera.view_mtx * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(focus_view.x.abs() < 1e-5);
        assert!(focus_view.y.abs() < 1e-5);
        assert!((focus_view.z + 20.0).abs() < 1e-4);
    }

    #[test]
    fn camera_position_maps_to_view_origin() {
        let pos = Vec3::new(3.0, 4.0, 5.0);
        let camera = Camera::perspective(45.0, 1.5, 0.01, 100.0).look_at(pos, Vec3::zero());

        let pos_view = camera.view_mtx * pos.into_homogeneous_point();
        assert!(pos_view.x.abs() < 1e-4);
        assert!(pos_view.y.abs() < 1e-4);
        assert!(pos_view.z.abs() < 1e-4);
    }
}
