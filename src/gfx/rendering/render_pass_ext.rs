//! Render pass extension for drawing scene meshes

use wgpu::RenderPass;

use crate::gfx::scene::mesh::Mesh;

pub trait DrawMesh {
    /// Binds the mesh's material at group 1 and issues one indexed draw.
    /// Meshes without GPU resources are skipped.
    fn draw_mesh(&mut self, mesh: &Mesh);
}

impl DrawMesh for RenderPass<'_> {
    fn draw_mesh(&mut self, mesh: &Mesh) {
        let Some(gpu) = mesh.gpu_resources.as_ref() else {
            log::warn!("Skipping '{}' - no GPU resources", mesh.name);
            return;
        };

        self.set_bind_group(1, gpu.material_bindings.bind_group(), &[]);
        self.set_vertex_buffer(0, gpu.vertex_buffer.slice(..));
        self.set_index_buffer(gpu.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count(), 0, 0..1);
    }
}
