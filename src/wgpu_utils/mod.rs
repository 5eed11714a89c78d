// src/wgpu_utils/mod.rs
//! Small wgpu helpers shared by the camera and material bindings

pub mod binding_types;
pub mod uniform_buffer;

pub use uniform_buffer::UniformBuffer;
