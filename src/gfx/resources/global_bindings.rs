//! Global uniform bindings for camera data
//!
//! Manages the per-frame camera uniform buffer and its bind group, bound to
//! slot 0 in the plane pipeline.

use crate::{
    gfx::camera::camera_utils::CameraUniform,
    wgpu_utils::{binding_types, uniform_buffer::UniformBuffer},
};

/// Type alias for the global uniform buffer.
/// MUST match the CameraUniform struct in the vertex shader exactly.
pub type GlobalUBO = UniformBuffer<CameraUniform>;

/// Owns the global uniform buffer together with its layout and bind group
pub struct GlobalBindings {
    ubo: GlobalUBO,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let ubo = GlobalUBO::new_with_data(device, &CameraUniform::default());
        let bind_group_layout = binding_types::uniform_layout(
            device,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            "Globals Bind Group Layout",
        );
        let bind_group = binding_types::uniform_bind_group(
            device,
            &bind_group_layout,
            ubo.binding_resource(),
            "Global Bind Group",
        );

        GlobalBindings {
            ubo,
            bind_group_layout,
            bind_group,
        }
    }

    /// Uploads the camera uniform; unchanged data is not rewritten
    pub fn update(&mut self, queue: &wgpu::Queue, camera: CameraUniform) {
        self.ubo.update_content(queue, camera);
    }

    /// Used when creating render pipelines that need access to global uniforms.
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
