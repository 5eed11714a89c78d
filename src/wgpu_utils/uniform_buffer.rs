// src/wgpu_utils/uniform_buffer.rs
use std::marker::PhantomData;
use wgpu::util::DeviceExt;

/// Typed uniform buffer that remembers the last upload and skips
/// identical writes
pub struct UniformBuffer<Content> {
    buffer: wgpu::Buffer,
    last_upload: Vec<u8>,
    _content: PhantomData<Content>,
}

impl<Content: bytemuck::Pod> UniformBuffer<Content> {
    /// Short type name used in the buffer label, e.g. `CameraUniform`
    fn label() -> String {
        let type_name = std::any::type_name::<Content>();
        let short = type_name.rsplit("::").next().unwrap_or(type_name);
        format!("{} Uniform Buffer", short)
    }

    pub fn new_with_data(device: &wgpu::Device, initial_content: &Content) -> Self {
        let bytes = bytemuck::bytes_of(initial_content);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&Self::label()),
            contents: bytes,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            buffer,
            last_upload: bytes.to_vec(),
            _content: PhantomData,
        }
    }

    /// Queues a write of `content`. Returns false when it matched the last
    /// upload and nothing was written.
    pub fn update_content(&mut self, queue: &wgpu::Queue, content: Content) -> bool {
        let bytes = bytemuck::bytes_of(&content);
        if self.last_upload == bytes {
            return false;
        }
        queue.write_buffer(&self.buffer, 0, bytes);
        self.last_upload.clear();
        self.last_upload.extend_from_slice(bytes);
        true
    }

    pub fn binding_resource(&self) -> wgpu::BindingResource {
        self.buffer.as_entire_binding()
    }
}
