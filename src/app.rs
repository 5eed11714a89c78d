use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    config::ViewportConfig,
    context::{handle_resize, ViewportContext},
    error::{Result, ViewportError},
    gfx::{rendering::RenderEngine, ui::UiManager},
    render_loop::{LoopState, RenderLoop, ShutdownToken},
};

/// Window, GPU and event loop around a [`ViewportContext`]
pub struct ViewportApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: ViewportConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    context: ViewportContext,
    render_loop: RenderLoop,
    error: Option<ViewportError>,
}

impl ViewportApp {
    pub fn new(config: ViewportConfig) -> Result<Self> {
        let event_loop = EventLoop::new()?;

        let (width, height) = config.window_size;
        let context = ViewportContext::new(&config, width, height);
        let render_loop = RenderLoop::new(config.time_step);

        Ok(Self {
            event_loop,
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                ui_manager: None,
                context,
                render_loop,
                error: None,
            },
        })
    }

    /// Token that stops the app at the next frame when cancelled
    pub fn shutdown_token(&self) -> ShutdownToken {
        self.app_state.render_loop.shutdown_token()
    }

    /// Runs until the window closes, Escape is pressed or the shutdown token
    /// is cancelled. Returns the error that stopped the app, if any.
    pub fn run(mut self) -> Result<()> {
        self.event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop.run_app(&mut self.app_state)?;

        log::info!(
            "Viewport closed after {} frames",
            self.app_state.render_loop.frames()
        );
        match self.app_state.error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.config.window_size;
        let window = event_loop.create_window(
            WindowAttributes::default()
                .with_title(self.config.title.clone())
                .with_inner_size(LogicalSize::new(width, height)),
        )?;
        let window_handle = Arc::new(window);

        let PhysicalSize { width, height } = window_handle.inner_size();
        self.context.resize(width, height);

        let renderer = pollster::block_on(RenderEngine::new(
            window_handle.clone(),
            width,
            height,
            self.config.vsync,
            &self.context.scene.mesh.material,
        ))?;

        self.context
            .scene
            .init_gpu_resources(renderer.device(), renderer.material_layout());

        let ui_manager = UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            &window_handle,
        );

        self.window = Some(window_handle);
        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(renderer);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: ViewportError) {
        log::error!("{}", error);
        self.error = Some(error);
        self.render_loop.shutdown_token().cancel();
        event_loop.exit();
    }

    fn redraw(&mut self) -> Result<LoopState> {
        let (Some(window), Some(render_engine), Some(ui_manager)) = (
            self.window.clone(),
            self.render_engine.as_mut(),
            self.ui_manager.as_mut(),
        ) else {
            return Err(ViewportError::NotInitialized);
        };

        self.render_loop.tick(&mut self.context, |context| {
            render_engine.update(&mut context.scene);

            let mut edits = Vec::new();
            {
                let panel = &context.panel;
                let camera = &context.scene.camera_manager.camera;
                render_engine.render_frame(
                    &context.scene,
                    Some(
                        |device: &wgpu::Device,
                         queue: &wgpu::Queue,
                         encoder: &mut wgpu::CommandEncoder,
                         view: &wgpu::TextureView| {
                            ui_manager.draw(device, queue, encoder, &window, view, |ui| {
                                edits = panel.draw(ui, camera);
                            });
                        },
                    ),
                )?;
            }

            for edit in edits {
                context
                    .panel
                    .apply(&mut context.scene.camera_manager.camera, edit);
            }
            Ok(())
        })
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(error) = self.init(event_loop) {
            self.fail(event_loop, error);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // UI gets first look at pointer and key input; see `ui_consumes`
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
                window_id,
                event: event.clone(),
            };
            if ui_manager.handle_input(&window, &ui_event) {
                window.request_redraw();
                return;
            }
        }

        let camera_manager = &mut self.context.scene.camera_manager;
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.render_loop.shutdown_token().cancel();
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                camera_manager.process_keyboard_event(&event);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                camera_manager.process_mouse_button(button, state);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                camera_manager.process_scroll(&delta);
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(render_engine) = self.render_engine.as_mut() {
                    handle_resize(&mut self.context, render_engine, width, height);
                }
            }
            WindowEvent::RedrawRequested => match self.redraw() {
                Ok(LoopState::Running) => (),
                Ok(LoopState::Stopped) => event_loop.exit(),
                Err(error) => self.fail(event_loop, error),
            },
            _ => (),
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        let DeviceEvent::MouseMotion { delta } = event else {
            return;
        };

        if self
            .ui_manager
            .as_ref()
            .is_some_and(|ui_manager| ui_manager.wants_pointer())
        {
            return;
        }

        let height = self.context.size.height;
        self.context
            .scene
            .camera_manager
            .process_mouse_motion(delta, height);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.render_loop.shutdown_token().is_cancelled() {
            event_loop.exit();
            return;
        }
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
