// src/lib.rs
//! Shaderplane
//!
//! A single animated plane drawn by a custom shader pair, viewed through an
//! orbiting perspective camera with a small debug panel. Built on wgpu,
//! winit and imgui.

pub mod app;
pub mod config;
pub mod context;
pub mod error;
pub mod gfx;
pub mod render_loop;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::ViewportApp;
pub use config::ViewportConfig;
pub use context::{handle_resize, RenderSurface, ViewportContext};
pub use error::{Result, ViewportError};
pub use render_loop::{LoopState, RenderLoop, ShutdownToken};

/// Creates a viewport with the stock configuration
pub fn default() -> Result<ViewportApp> {
    ViewportApp::new(ViewportConfig::default())
}
