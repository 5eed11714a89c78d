//! Error types for the viewport
//!
//! Every fallible startup step (window, surface, adapter, device, shader
//! compilation) and the per-frame surface acquisition report through
//! [`ViewportError`].

use thiserror::Error;

/// Errors surfaced while building or driving the viewport
#[derive(Debug, Error)]
pub enum ViewportError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create render surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to request graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,

    #[error("shader '{name}' failed to compile: {message}")]
    ShaderCompile { name: String, message: String },

    #[error("render pipeline '{name}' could not be created: {message}")]
    Pipeline { name: String, message: String },

    #[error("failed to acquire surface texture: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("viewport used before the window was initialised")]
    NotInitialized,
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ViewportError>;
