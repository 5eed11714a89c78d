//! Viewport state shared by the event handlers and the render loop
//!
//! Everything a frame needs lives in one [`ViewportContext`] that is passed
//! explicitly to whoever needs it.

use crate::{
    config::ViewportConfig,
    gfx::{scene::Scene, ui::DebugPanel},
};

/// Drawable size in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

pub struct ViewportContext {
    pub scene: Scene,
    pub size: ViewportSize,
    pub panel: DebugPanel,
}

impl ViewportContext {
    pub fn new(config: &ViewportConfig, width: u32, height: u32) -> Self {
        let size = ViewportSize::new(width, height);
        Self {
            scene: Scene::new(config, size.aspect()),
            size,
            panel: DebugPanel::new(&config.panel),
        }
    }

    /// Records the new size and refits the camera projection to it.
    /// Returns false, changing nothing, for an empty size.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let size = ViewportSize::new(width, height);
        if size.is_empty() {
            log::debug!("Ignoring resize to {}x{}", width, height);
            return false;
        }

        self.size = size;
        self.scene
            .camera_manager
            .camera
            .resize_projection(width, height);
        true
    }
}

/// Anything that presents frames at a pixel size
pub trait RenderSurface {
    fn resize_surface(&mut self, width: u32, height: u32);
    fn surface_size(&self) -> (u32, u32);
}

/// Keeps camera and drawing surface in step with the window size
pub fn handle_resize(
    context: &mut ViewportContext,
    surface: &mut impl RenderSurface,
    width: u32,
    height: u32,
) {
    if context.resize(width, height) {
        surface.resize_surface(width, height);
        log::debug!("Viewport resized to {}x{}", width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeSurface {
        size: (u32, u32),
        resizes: usize,
    }

    impl RenderSurface for FakeSurface {
        fn resize_surface(&mut self, width: u32, height: u32) {
            self.size = (width, height);
            self.resizes += 1;
        }

        fn surface_size(&self) -> (u32, u32) {
            self.size
        }
    }

    fn context() -> ViewportContext {
        ViewportContext::new(&ViewportConfig::default(), 1200, 800)
    }

    #[test]
    fn resize_updates_camera_and_surface() {
        let mut context = context();
        let mut surface = FakeSurface::default();

        handle_resize(&mut context, &mut surface, 800, 600);

        assert_eq!(context.scene.camera_manager.camera.aspect, 800.0 / 600.0);
        assert_eq!(surface.surface_size(), (800, 600));
        assert_eq!(context.size, ViewportSize::new(800, 600));
    }

    #[test]
    fn repeated_resize_is_idempotent() {
        let mut context = context();
        let mut surface = FakeSurface::default();

        handle_resize(&mut context, &mut surface, 1024, 512);
        let projection = context.scene.camera_manager.camera.projection_matrix();
        handle_resize(&mut context, &mut surface, 1024, 512);

        assert_eq!(context.scene.camera_manager.camera.aspect, 2.0);
        assert_eq!(
            context.scene.camera_manager.camera.projection_matrix(),
            projection
        );
        assert_eq!(surface.surface_size(), (1024, 512));
    }

    #[test]
    fn zero_size_is_ignored() {
        let mut context = context();
        let mut surface = FakeSurface::default();

        handle_resize(&mut context, &mut surface, 0, 600);

        assert_eq!(surface.resizes, 0);
        assert_eq!(context.size, ViewportSize::new(1200, 800));
        assert_eq!(context.scene.camera_manager.camera.aspect, 1.5);
    }

    #[test]
    fn context_starts_with_window_aspect() {
        let context = context();
        assert_eq!(context.scene.camera_manager.camera.aspect, 1.5);
        assert_eq!(context.panel.controls().len(), 1);
    }
}
