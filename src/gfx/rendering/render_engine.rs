//! WGPU-based rendering engine
//!
//! Owns the surface, device and queue, the depth buffer, and the single
//! pipeline that draws the shader plane. A UI overlay can be recorded into
//! the same encoder after the scene pass.

use std::sync::Arc;
use wgpu::{Device, TextureFormat};

use crate::{
    context::RenderSurface,
    error::{Result, ViewportError},
    gfx::{
        material::ShaderMaterial,
        resources::{
            global_bindings::GlobalBindings, material::MaterialBindings,
            texture_resource::TextureResource,
        },
        scene::Scene,
    },
};

use super::pipeline_manager::{PipelineConfig, PipelineManager};
use super::render_pass_ext::DrawMesh;

const PLANE_PIPELINE: &str = "Plane";
const PLANE_VERTEX: &str = "plane_vertex";
const PLANE_FRAGMENT: &str = "plane_fragment";

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    format: TextureFormat,
    pub pipeline_manager: PipelineManager,
    global_bindings: GlobalBindings,
    material_layout: wgpu::BindGroupLayout,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// Initializes wgpu, configures the surface, creates the depth buffer,
    /// and compiles `material`'s shader pair into the plane pipeline.
    ///
    /// # Arguments
    /// * `window` - Window surface target for rendering
    /// * `width` - Initial surface width in pixels
    /// * `height` - Initial surface height in pixels
    /// * `vsync` - Present in step with the display refresh
    /// * `material` - Material whose shaders the plane pipeline runs
    ///
    /// # Errors
    /// Fails if no adapter or device is available, or if either shader
    /// does not compile.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        vsync: bool,
        material: &ShaderMaterial,
    ) -> Result<RenderEngine> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or(ViewportError::NoSurfaceFormat)?;

        let present_mode = if !vsync
            && surface_capabilities
                .present_modes
                .contains(&wgpu::PresentMode::Immediate)
        {
            wgpu::PresentMode::Immediate
        } else {
            wgpu::PresentMode::Fifo
        };

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode,
            alpha_mode: surface_capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let global_bindings = GlobalBindings::new(&device);
        let material_layout = MaterialBindings::create_layout(&device);

        let device_handle: Arc<Device> = device.into();
        let queue_handle: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device_handle.clone());

        pipeline_manager.load_shader(PLANE_VERTEX, material.vertex_shader)?;
        pipeline_manager.load_shader(PLANE_FRAGMENT, material.fragment_shader)?;
        pipeline_manager.register_pipeline(
            PLANE_PIPELINE,
            PipelineConfig::default()
                .with_label(PLANE_PIPELINE)
                .with_shaders(PLANE_VERTEX, PLANE_FRAGMENT)
                .with_bind_group_layouts(vec![
                    global_bindings.bind_group_layout().clone(),
                    material_layout.clone(),
                ])
                .with_cull_mode(material.side.cull_mode())
                .with_depth_format(TextureResource::DEPTH_FORMAT)
                .with_color_format(format),
        );
        pipeline_manager.create_all_pipelines()?;

        log::info!(
            "Render engine ready: {}x{} {:?} {:?}",
            config.width,
            config.height,
            format,
            present_mode
        );

        Ok(RenderEngine {
            surface,
            device: device_handle,
            queue: queue_handle,
            config,
            depth_texture,
            format,
            pipeline_manager,
            global_bindings,
            material_layout,
        })
    }

    /// Layout the scene's material bind groups must be created with
    pub fn material_layout(&self) -> &wgpu::BindGroupLayout {
        &self.material_layout
    }

    /// Uploads the camera and material uniforms for this frame
    pub fn update(&mut self, scene: &mut Scene) {
        self.global_bindings
            .update(&self.queue, scene.camera_manager.camera.uniform);
        scene.mesh.write_uniforms(&self.queue);
    }

    /// Renders one frame, then lets `ui_callback` record an overlay into
    /// the same encoder before submission.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped; a
    /// timeout skips the frame. Any other surface error is returned.
    pub fn render_frame<F>(&mut self, scene: &Scene, ui_callback: Option<F>) -> Result<()>
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Timed out acquiring surface texture, skipping frame");
                return Ok(());
            }
            Err(error) => return Err(error.into()),
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(scene.background.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);

            if let Some(pipeline) = self.pipeline_manager.get_pipeline(PLANE_PIPELINE) {
                render_pass.set_pipeline(pipeline);
                render_pass.draw_mesh(&scene.mesh);
            }
        }

        if let Some(ui_callback) = ui_callback {
            ui_callback(
                &self.device,
                &self.queue,
                &mut encoder,
                &surface_texture_view,
            );
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }

    /// Resizes the surface and recreates the depth buffer
    ///
    /// Zero-sized requests (a minimised window) are ignored since a surface
    /// cannot be configured with an empty extent.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);

        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
        log::debug!("Surface and depth buffer now {:?}", self.depth_texture.size());
    }

    /// Returns current surface dimensions as (width, height) in pixels
    pub fn get_surface_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Used for creating GPU resources like buffers and textures.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Used for creating compatible render targets and UI systems.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.format
    }
}

impl RenderSurface for RenderEngine {
    fn resize_surface(&mut self, width: u32, height: u32) {
        self.resize(width, height);
    }

    fn surface_size(&self) -> (u32, u32) {
        self.get_surface_size()
    }
}
