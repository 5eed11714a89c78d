use wgpu::util::DeviceExt;

use super::vertex::Vertex3D;
use crate::gfx::{
    geometry::GeometryData, material::ShaderMaterial, resources::material::MaterialBindings,
};

/// GPU buffers owned by a [`Mesh`] once the device exists
pub struct MeshGpuResources {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub material_bindings: MaterialBindings,
}

/// Geometry plus the shader material that draws it
pub struct Mesh {
    pub name: String,
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    index_count: u32,
    pub material: ShaderMaterial,
    pub gpu_resources: Option<MeshGpuResources>, // None until init_gpu_resources called
}

impl Mesh {
    pub fn new(name: &str, geometry: &GeometryData, material: ShaderMaterial) -> Self {
        let indices = geometry.indices.clone();
        Self {
            name: name.to_owned(),
            vertices: geometry.to_vertices(),
            index_count: indices.len() as u32,
            indices,
            material,
            gpu_resources: None,
        }
    }

    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Uploads vertex/index data and creates the material bind group
    pub fn init_gpu_resources(
        &mut self,
        device: &wgpu::Device,
        material_layout: &wgpu::BindGroupLayout,
    ) {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", self.name)),
            contents: bytemuck::cast_slice(&self.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", self.name)),
            contents: bytemuck::cast_slice(&self.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let material_bindings = MaterialBindings::new(device, material_layout, &self.material);

        self.gpu_resources = Some(MeshGpuResources {
            vertex_buffer,
            index_buffer,
            material_bindings,
        });
    }

    /// Pushes the current uniform bag to the GPU
    pub fn write_uniforms(&mut self, queue: &wgpu::Queue) {
        if let Some(gpu) = self.gpu_resources.as_mut() {
            gpu.material_bindings.update(queue, &self.material);
        }
    }
}
