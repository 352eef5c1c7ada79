use std::{f32::consts::PI, mem::size_of};

use bytemuck::{cast_slice, offset_of, Pod, Zeroable};
use wgpu::util::DeviceExt;

/// Per-instance particle position, mirrored from the store's flattened
/// position array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Zeroable, Pod)]
#[repr(C)]
pub struct ParticlePosition {
    pub pos: [f32; 3],
}

impl ParticlePosition {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: vec![
                // pos
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: offset_of!(Self, pos) as u64,
                    shader_location: 0,
                },
            ]
            .leak(),
        }
    }
}

/// Per-instance particle density.
#[derive(Debug, Clone, Copy, PartialEq, Default, Zeroable, Pod)]
#[repr(C)]
pub struct ParticleDensity {
    pub density: f32,
}

impl ParticleDensity {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: vec![
                // density
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: offset_of!(Self, density) as u64,
                    shader_location: 1,
                },
            ]
            .leak(),
        }
    }
}

/// One corner of the disc fan that every particle instance is expanded into.
#[derive(Debug, Clone, Copy, PartialEq, Default, Zeroable, Pod)]
#[repr(C)]
pub struct DiscVertex {
    pub offset: [f32; 2],
}

impl DiscVertex {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: vec![
                // offset
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: offset_of!(Self, offset) as u64,
                    shader_location: 2,
                },
            ]
            .leak(),
        }
    }
}

/// Per-frame shader uniforms. Must match `Uniforms` in point.wgsl.
#[derive(Debug, Clone, Copy, PartialEq, Default, Zeroable, Pod)]
#[repr(C)]
pub struct Uniforms {
    pub proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    /// Point radius in NDC units per axis.
    pub point_radius: [f32; 2],
    /// Dataset-wide density min and max.
    pub density_range: [f32; 2],
}

#[derive(Debug)]
pub struct StaticData {
    pub uniform_bind_group_layout: wgpu::BindGroupLayout,
    pub disc_vertex_buffer: (u32, wgpu::Buffer),
}

impl StaticData {
    pub fn create(device: &wgpu::Device) -> Self {
        Self {
            uniform_bind_group_layout: create_uniform_bind_group_layout(device),
            disc_vertex_buffer: create_disc_vertex_buffer(device),
        }
    }
}

fn create_uniform_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: None,
        entries: &[
            // u
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    })
}

fn create_disc_vertex_buffer(device: &wgpu::Device) -> (u32, wgpu::Buffer) {
    let mut vertices: Vec<DiscVertex> = Vec::new();

    let num_edges = 12;
    for i in 0..num_edges {
        let a0 = i as f32 / num_edges as f32 * 2.0 * PI;
        let a1 = (i + 1) as f32 / num_edges as f32 * 2.0 * PI;

        vertices.extend(&[
            DiscVertex { offset: [0.0, 0.0] },
            DiscVertex {
                offset: [a0.cos(), a0.sin()],
            },
            DiscVertex {
                offset: [a1.cos(), a1.sin()],
            },
        ]);
    }

    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: None,
        contents: cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });

    (vertices.len() as u32, buffer)
}
