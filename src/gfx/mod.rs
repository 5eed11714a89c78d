//! # Graphics Module
//!
//! Everything between the scene description and the pixels:
//!
//! - **Camera** ([`camera`]) - Perspective camera driven by orbit controls
//! - **Geometry** ([`geometry`]) - Procedural plane mesh data
//! - **Material** ([`material`]) - Shader pair plus named float uniforms
//! - **Rendering** ([`rendering`]) - Device setup, pipelines and frame submission
//! - **Resources** ([`resources`]) - Uniform buffers, bind groups and depth texture
//! - **Scene** ([`scene`]) - Background, mesh, lights and camera
//! - **UI** ([`ui`]) - imgui overlay and the debug panel

pub mod camera;
pub mod geometry;
pub mod material;
pub mod rendering;
pub mod resources;
pub mod scene;
pub mod ui;

// Re-export commonly used types
pub use camera::PerspectiveCamera;
pub use rendering::render_engine::RenderEngine;
