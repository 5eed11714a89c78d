//! # Scene Management Module
//!
//! The viewport's scene is a flat set of nodes: one plane [`Mesh`] with its
//! shader material, three fixed [`Light`]s, and the camera with its orbit
//! controls. It is created once and lives until the window closes.

pub mod color;
pub mod light;
pub mod mesh;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use color::Color;
pub use light::{Light, LightKind};
pub use mesh::Mesh;
pub use scene::Scene;
pub use vertex::Vertex3D;
