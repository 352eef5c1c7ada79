//! A wgpu renderer for [sphview_viz::PointCloudScene].
//!
//! Particles are drawn as instanced screen-space discs (wgpu has no
//! controllable point size), colored by density. The per-particle attribute
//! buffers are device resident and only rewritten when a frame's scene
//! carries a new [sphview_viz::CloudSlice].

#![warn(rust_2018_idioms, missing_debug_implementations)]

pub use buffers::CloudBuffers;
pub use renderer::PointCloudRenderer;

mod buffers;
mod data;
mod pipelines;
mod renderer;
