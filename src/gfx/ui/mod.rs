//! imgui integration: platform glue, frame building and overlay rendering

pub mod panel;

use imgui::{Context, FontConfig, FontSource, MouseCursor};
use imgui_wgpu::{Renderer, RendererConfig};
use imgui_winit_support::{HiDpiMode, WinitPlatform};
use std::time::Instant;
use wgpu::{CommandEncoder, Device, Queue, TextureFormat, TextureView};
use winit::{
    event::{ElementState, Event, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

pub use panel::{DebugPanel, PanelControl, PanelEdit};

/// How a window event relates to imgui's input capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Pointer motion, wheel or button press
    Pointer,
    /// Button release; always reaches the controls so drags cannot stick
    PointerRelease,
    Keyboard,
    /// Shift state, tracked by the controls regardless of focus
    Modifier,
    /// Resize, close, redraw and anything else owned by the app
    Window,
}

impl InputKind {
    pub fn of(event: &WindowEvent) -> Self {
        match event {
            WindowEvent::MouseInput { state, .. } => Self::of_button(*state),
            WindowEvent::MouseWheel { .. }
            | WindowEvent::CursorMoved { .. }
            | WindowEvent::CursorLeft { .. }
            | WindowEvent::CursorEntered { .. } => Self::Pointer,
            WindowEvent::KeyboardInput { event, .. } => Self::of_key(event.physical_key),
            WindowEvent::ModifiersChanged(_) => Self::Modifier,
            _ => Self::Window,
        }
    }

    pub fn of_button(state: ElementState) -> Self {
        match state {
            ElementState::Pressed => Self::Pointer,
            ElementState::Released => Self::PointerRelease,
        }
    }

    pub fn of_key(key: PhysicalKey) -> Self {
        match key {
            PhysicalKey::Code(KeyCode::ShiftLeft | KeyCode::ShiftRight) => Self::Modifier,
            _ => Self::Keyboard,
        }
    }
}

/// Whether imgui keeps an event of `kind` from the camera and the app.
/// Only pointer input is gated on the mouse and only keys on the keyboard.
pub fn ui_consumes(kind: InputKind, wants_mouse: bool, wants_keyboard: bool) -> bool {
    match kind {
        InputKind::Pointer => wants_mouse,
        InputKind::Keyboard => wants_keyboard,
        InputKind::PointerRelease | InputKind::Modifier | InputKind::Window => false,
    }
}

pub struct UiManager {
    pub context: Context,
    platform: WinitPlatform,
    renderer: Renderer,
    last_frame: Instant,
    last_cursor: Option<MouseCursor>,
}

impl UiManager {
    pub fn new(
        device: &Device,
        queue: &Queue,
        output_color_format: TextureFormat,
        window: &Window,
    ) -> Self {
        let mut context = Context::create();
        context.set_ini_filename(None);

        // Locked scale: display size is driven in physical pixels to match
        // the surface
        let mut platform = WinitPlatform::new(&mut context);
        platform.attach_window(context.io_mut(), window, HiDpiMode::Locked(1.0));

        log::debug!("Window scale factor: {}", window.scale_factor());

        let font_size = (16.0 * window.scale_factor()) as f32;
        context.fonts().add_font(&[FontSource::DefaultFontData {
            config: Some(FontConfig {
                oversample_h: 1,
                pixel_snap_h: true,
                size_pixels: font_size,
                ..Default::default()
            }),
        }]);

        let renderer_config = RendererConfig {
            texture_format: output_color_format,
            ..Default::default()
        };
        let renderer = Renderer::new(&mut context, device, queue, renderer_config);

        Self {
            context,
            platform,
            renderer,
            last_frame: Instant::now(),
            last_cursor: None,
        }
    }

    /// Feeds a window event to imgui. Returns true if imgui keeps the event
    /// for itself, see [`ui_consumes`].
    pub fn handle_input<T>(&mut self, window: &Window, event: &Event<T>) -> bool {
        let Event::WindowEvent {
            event: window_event,
            ..
        } = event
        else {
            return false;
        };

        match window_event {
            WindowEvent::CursorMoved { .. }
            | WindowEvent::MouseInput { .. }
            | WindowEvent::MouseWheel { .. }
            | WindowEvent::KeyboardInput { .. }
            | WindowEvent::ModifiersChanged(_)
            | WindowEvent::Resized(_)
            | WindowEvent::Focused(_) => {
                self.platform
                    .handle_event(self.context.io_mut(), window, event);
            }
            _ => return false,
        }

        let io = self.context.io();
        ui_consumes(
            InputKind::of(window_event),
            io.want_capture_mouse,
            io.want_capture_keyboard,
        )
    }

    /// True while the pointer is over a panel or a widget is active
    pub fn wants_pointer(&self) -> bool {
        self.context.io().want_capture_mouse
    }

    /// Builds this frame's widgets
    fn update_logic<F>(&mut self, window: &Window, run_ui: F)
    where
        F: FnOnce(&imgui::Ui),
    {
        let now = Instant::now();
        self.context
            .io_mut()
            .update_delta_time(now - self.last_frame);
        self.last_frame = now;

        if let Err(error) = self.platform.prepare_frame(self.context.io_mut(), window) {
            log::warn!("Failed to prepare UI frame: {}", error);
        }

        let ui = self.context.frame();
        run_ui(ui);

        if self.last_cursor != ui.mouse_cursor() {
            self.last_cursor = ui.mouse_cursor();
            self.platform.prepare_render(ui, window);
        }
    }

    pub fn render_display_only(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        color_attachment: &TextureView,
    ) {
        let draw_data = self.context.render();

        // An empty display would produce an invalid scissor rect
        if draw_data.display_size[0] <= 0.0 || draw_data.display_size[1] <= 0.0 {
            log::debug!(
                "Skipping UI draw for display size [{}, {}]",
                draw_data.display_size[0],
                draw_data.display_size[1]
            );
            return;
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("imgui_render_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_attachment,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load, // Load existing 3D scene
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if let Err(error) = self
            .renderer
            .render(draw_data, queue, device, &mut render_pass)
        {
            log::error!("Failed to render UI: {:?}", error);
        }
    }

    pub fn draw<F>(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        window: &Window,
        color_attachment: &TextureView,
        run_ui: F,
    ) where
        F: FnOnce(&imgui::Ui),
    {
        self.update_logic(window, run_ui);
        self.render_display_only(device, queue, encoder, color_attachment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn resize_reaches_the_app_while_ui_has_the_pointer() {
        let kind = InputKind::of(&WindowEvent::Resized(PhysicalSize::new(1920, 1080)));
        assert_eq!(kind, InputKind::Window);
        assert!(!ui_consumes(kind, true, true));
        assert!(!ui_consumes(kind, false, false));
    }

    #[test]
    fn close_and_redraw_are_never_consumed() {
        for event in [WindowEvent::CloseRequested, WindowEvent::RedrawRequested] {
            let kind = InputKind::of(&event);
            assert_eq!(kind, InputKind::Window);
            assert!(!ui_consumes(kind, true, true));
        }
    }

    #[test]
    fn escape_is_gated_on_keyboard_capture_only() {
        let kind = InputKind::of_key(PhysicalKey::Code(KeyCode::Escape));
        assert_eq!(kind, InputKind::Keyboard);
        assert!(!ui_consumes(kind, true, false));
        assert!(!ui_consumes(kind, false, false));
        assert!(ui_consumes(kind, false, true));
    }

    #[test]
    fn shift_always_reaches_the_controls() {
        for code in [KeyCode::ShiftLeft, KeyCode::ShiftRight] {
            let kind = InputKind::of_key(PhysicalKey::Code(code));
            assert_eq!(kind, InputKind::Modifier);
            assert!(!ui_consumes(kind, true, true));
            assert!(!ui_consumes(kind, false, false));
        }
    }

    #[test]
    fn mouse_press_is_gated_on_pointer_capture() {
        let press = InputKind::of_button(ElementState::Pressed);
        assert_eq!(press, InputKind::Pointer);
        assert!(ui_consumes(press, true, false));
        assert!(!ui_consumes(press, false, true));

        let release = InputKind::of_button(ElementState::Released);
        assert_eq!(release, InputKind::PointerRelease);
        assert!(!ui_consumes(release, true, true));
        assert!(!ui_consumes(release, false, false));
    }
}
