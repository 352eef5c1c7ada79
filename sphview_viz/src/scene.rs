use crate::Camera;

/// An owned copy of one timestep's particle attributes, ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudSlice {
    /// Flattened xyz triples, three floats per particle.
    pub positions: Vec<f32>,
    /// One density scalar per particle.
    pub density: Vec<f32>,
}

impl CloudSlice {
    /// Creates a slice, checking that `positions` holds three floats per
    /// density value.
    pub fn new(positions: Vec<f32>, density: Vec<f32>) -> Self {
        assert_eq!(positions.len(), 3 * density.len());
        Self { positions, density }
    }

    /// Number of particles in the slice.
    pub fn particle_count(&self) -> usize {
        self.density.len()
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct PointCloudScene {
    /// The camera, which determines the projection and view matrices.
    pub camera: Camera,
    /// Point diameter in logical pixels.
    pub point_size: f32,
    /// Dataset-wide density min and max, used for coloring.
    pub density_range: [f32; 2],
    /// New attribute contents to upload before drawing, if the displayed
    /// timestep changed this frame. `None` leaves the GPU buffers untouched.
    pub upload: Option<CloudSlice>,
}

impl PointCloudScene {
    /// Creates a scene with default point size and no pending upload.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            point_size: 1.0,
            density_range: [0.0, 1.0],
            upload: None,
        }
    }

    /// Sets the point diameter in logical pixels.
    pub fn with_point_size(mut self, point_size: f32) -> Self {
        self.point_size = point_size;
        self
    }

    /// Sets the density range used for coloring.
    pub fn with_density_range(mut self, density_range: [f32; 2]) -> Self {
        self.density_range = density_range;
        self
    }

    /// Sets the attribute contents to upload this frame.
    pub fn with_upload(mut self, upload: Option<CloudSlice>) -> Self {
        self.upload = upload;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    #[should_panic]
    fn mismatched_slice_shape_panics() {
        CloudSlice::new(vec![0.0; 5], vec![0.0; 2]);
    }

    #[test]
    fn slice_particle_count() {
        let slice = CloudSlice::new(vec![0.0; 6], vec![0.0; 2]);
        assert_eq!(slice.particle_count(), 2);
    }
}
