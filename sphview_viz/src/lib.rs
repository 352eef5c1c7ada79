//! Scene-level types shared between the application and the wgpu renderer.
//!
//! A [PointCloudScene] describes everything the renderer needs for one frame:
//! the camera, the point size, and optionally a fresh [CloudSlice] to upload
//! into the GPU attribute buffers.

#![warn(rust_2018_idioms, missing_debug_implementations, missing_docs)]

pub use camera::*;
pub use scene::*;
pub use ultraviolet::{Mat4, Vec2, Vec3, Vec4};

mod camera;
mod scene;
