// src/gfx/rendering/mod.rs
//! Core rendering functionality
//!
//! Handles the surface, the plane pipeline, and frame rendering.

pub mod pipeline_manager;
pub mod render_engine;
pub mod render_pass_ext;

// Re-export main types
pub use pipeline_manager::{PipelineConfig, PipelineManager};
pub use render_engine::RenderEngine;
