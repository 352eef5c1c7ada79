use bytemuck::cast_slice;
use sphview_viz::CloudSlice;
use wgpu::util::DeviceExt;

/// Device-resident per-particle attribute buffers.
///
/// Allocated once, sized to the session's fixed particle count; contents are
/// replaced in place on timestep transitions and never resized.
#[derive(Debug)]
pub struct CloudBuffers {
    particle_count: u32,
    position: wgpu::Buffer,
    density: wgpu::Buffer,
}

impl CloudBuffers {
    /// Allocates the attribute buffers and uploads the initial slice.
    pub fn new(device: &wgpu::Device, slice: &CloudSlice) -> Self {
        let position = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cloud-position"),
            contents: cast_slice(&slice.positions),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let density = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cloud-density"),
            contents: cast_slice(&slice.density),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            particle_count: slice.particle_count() as u32,
            position,
            density,
        }
    }

    /// Overwrites the buffer contents with a new timestep's attributes.
    ///
    /// The slice must have the same particle count the buffers were created
    /// with; the count is fixed for the whole session.
    pub fn upload(&self, queue: &wgpu::Queue, slice: &CloudSlice) {
        assert_eq!(
            slice.particle_count() as u32,
            self.particle_count,
            "attribute buffers are never resized"
        );
        queue.write_buffer(&self.position, 0, cast_slice(&slice.positions));
        queue.write_buffer(&self.density, 0, cast_slice(&slice.density));
    }

    /// Number of particles the buffers were sized for.
    pub fn particle_count(&self) -> u32 {
        self.particle_count
    }

    pub(crate) fn position(&self) -> &wgpu::Buffer {
        &self.position
    }

    pub(crate) fn density(&self) -> &wgpu::Buffer {
        &self.density
    }
}
