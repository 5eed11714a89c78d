//! GPU side of the shader material
//!
//! One uniform buffer at group 1 carries the material's uniform bag to both
//! shader stages.

use crate::{
    gfx::material::{MaterialUniform, ShaderMaterial},
    wgpu_utils::{binding_types, uniform_buffer::UniformBuffer},
};

pub struct MaterialBindings {
    ubo: UniformBuffer<MaterialUniform>,
    bind_group: wgpu::BindGroup,
}

impl MaterialBindings {
    /// Layout shared by every material; bound at group 1
    pub fn create_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        binding_types::uniform_layout(
            device,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            "Material Bind Group Layout",
        )
    }

    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        material: &ShaderMaterial,
    ) -> Self {
        let ubo = UniformBuffer::new_with_data(device, &material.to_uniform());
        let bind_group = binding_types::uniform_bind_group(
            device,
            layout,
            ubo.binding_resource(),
            &format!("{} Bind Group", material.name),
        );
        Self { ubo, bind_group }
    }

    pub fn update(&mut self, queue: &wgpu::Queue, material: &ShaderMaterial) {
        self.ubo.update_content(queue, material.to_uniform());
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
