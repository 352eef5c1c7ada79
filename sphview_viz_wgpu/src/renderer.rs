use bytemuck::cast_slice;
use sphview_viz::{Mat4, PointCloudScene};
use wgpu::util::DeviceExt;

use crate::{
    buffers::CloudBuffers,
    data::{StaticData, Uniforms},
    pipelines::create_point_pipeline,
};

/// A wgpu renderer for [PointCloudScene].
#[derive(Debug)]
pub struct PointCloudRenderer {
    static_data: StaticData,
    pipeline: wgpu::RenderPipeline,
    buffers: Option<CloudBuffers>,
    per_frame_data: Option<PerFrameData>,
}

#[derive(Debug)]
struct PerFrameData {
    uniform_bind_group: wgpu::BindGroup,
}

impl PointCloudRenderer {
    /// Constructs a new [PointCloudRenderer].
    pub fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        msaa_samples: u32,
    ) -> Self {
        let static_data = StaticData::create(device);
        let pipeline = create_point_pipeline(
            device,
            &static_data.uniform_bind_group_layout,
            output_format,
            msaa_samples,
        );

        Self {
            static_data,
            pipeline,
            buffers: None,
            per_frame_data: None,
        }
    }

    /// This should be called with a [PointCloudScene] before [Self::render]
    /// is called.
    ///
    /// If the scene carries an upload, the attribute buffers are (re)written
    /// here; otherwise they keep their previous contents and no GPU transfer
    /// occurs.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        output_size_physical: [u32; 2],
        scale_factor: f32,
        scene: &PointCloudScene,
    ) {
        self.per_frame_data = None;

        if let Some(slice) = &scene.upload {
            match &self.buffers {
                Some(buffers) => buffers.upload(queue, slice),
                None => self.buffers = Some(CloudBuffers::new(device, slice)),
            }
        }

        let output_size_logical = [
            output_size_physical[0] as f32 / scale_factor,
            output_size_physical[1] as f32 / scale_factor,
        ];
        let point_radius = [
            scene.point_size * 2.0 / output_size_logical[0].max(1.0),
            scene.point_size * 2.0 / output_size_logical[1].max(1.0),
        ];

        let uniforms = Uniforms {
            proj: mat4_to_array(&scene.camera.proj_mtx),
            view: mat4_to_array(&scene.camera.view_mtx),
            point_radius,
            density_range: scene.density_range,
        };
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: None,
            contents: cast_slice(&[uniforms]),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: None,
            layout: &self.static_data.uniform_bind_group_layout,
            entries: &[
                // u
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                        buffer: &uniform_buffer,
                        offset: 0,
                        size: None,
                    }),
                },
            ],
        });

        self.per_frame_data = Some(PerFrameData { uniform_bind_group });
    }

    /// Renders the point cloud using the scene provided to [Self::prepare].
    ///
    /// Draws once per particle instance; a no-op until the first upload has
    /// populated the attribute buffers.
    pub fn render<'r>(&'r self, rp: &mut wgpu::RenderPass<'r>) {
        let per_frame_data = self
            .per_frame_data
            .as_ref()
            .expect("missing call to PointCloudRenderer::prepare");

        let buffers = match &self.buffers {
            Some(buffers) => buffers,
            None => return,
        };

        let (disc_vertex_count, disc_vertex_buffer) = &self.static_data.disc_vertex_buffer;

        rp.set_pipeline(&self.pipeline);
        rp.set_bind_group(0, &per_frame_data.uniform_bind_group, &[]);
        rp.set_vertex_buffer(0, buffers.position().slice(..));
        rp.set_vertex_buffer(1, buffers.density().slice(..));
        rp.set_vertex_buffer(2, disc_vertex_buffer.slice(..));
        rp.draw(0..*disc_vertex_count, 0..buffers.particle_count());
    }
}

fn mat4_to_array(mtx: &Mat4) -> [[f32; 4]; 4] {
    let c = &mtx.cols;
    [
        [c[0].x, c[0].y, c[0].z, c[0].w],
        [c[1].x, c[1].y, c[1].z, c[1].w],
        [c[2].x, c[2].y, c[2].z, c[2].w],
        [c[3].x, c[3].y, c[3].z, c[3].w],
    ]
}
