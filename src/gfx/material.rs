//! Shader material and its uniform bag
//!
//! A [`ShaderMaterial`] pairs a vertex and a fragment program with a bag of
//! named float uniforms. The bag is packed into [`MaterialUniform`] by name
//! before upload, so the names here must match the field names declared in
//! both shaders.

use std::collections::BTreeMap;

/// Name of the time uniform in the material block of both shaders
pub const TIME_UNIFORM: &str = "uTime";

pub const PLANE_VERTEX_SHADER: &str = include_str!("rendering/shaders/plane.vert.wgsl");
pub const PLANE_FRAGMENT_SHADER: &str = include_str!("rendering/shaders/plane.frag.wgsl");

/// Mapping from uniform name to value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformBag {
    values: BTreeMap<String, f32>,
}

impl UniformBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_float(mut self, name: &str, value: f32) -> Self {
        self.set_float(name, value);
        self
    }

    pub fn get_float(&self, name: &str) -> Option<f32> {
        self.values.get(name).copied()
    }

    pub fn set_float(&mut self, name: &str, value: f32) {
        self.values.insert(name.to_owned(), value);
    }

    /// Adds `delta` to an existing uniform and returns the new value.
    /// Unknown names are left alone and yield `None`.
    pub fn advance_float(&mut self, name: &str, delta: f32) -> Option<f32> {
        let value = self.values.get_mut(name)?;
        *value += delta;
        Some(*value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

/// Which faces of the mesh are rasterized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
    Double,
}

impl Side {
    pub fn cull_mode(self) -> Option<wgpu::Face> {
        match self {
            Side::Front => Some(wgpu::Face::Back),
            Side::Back => Some(wgpu::Face::Front),
            Side::Double => None,
        }
    }
}

/// GPU layout of the material uniform block.
/// MUST match `MaterialUniform` in both plane shaders.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub u_time: f32,
    _padding: [f32; 3],
}

#[derive(Debug, Clone)]
pub struct ShaderMaterial {
    pub name: String,
    pub vertex_shader: &'static str,
    pub fragment_shader: &'static str,
    pub side: Side,
    pub uniforms: UniformBag,
}

impl ShaderMaterial {
    pub fn new(name: &str, vertex_shader: &'static str, fragment_shader: &'static str) -> Self {
        Self {
            name: name.to_owned(),
            vertex_shader,
            fragment_shader,
            side: Side::Front,
            uniforms: UniformBag::new(),
        }
    }

    /// The animated plane material: double sided, `uTime` starting at 0
    pub fn plane() -> Self {
        let mut material = Self::new("Plane Material", PLANE_VERTEX_SHADER, PLANE_FRAGMENT_SHADER)
            .with_side(Side::Double);
        material.uniforms.set_float(TIME_UNIFORM, 0.0);
        material
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn time(&self) -> f32 {
        self.uniforms.get_float(TIME_UNIFORM).unwrap_or(0.0)
    }

    /// Packs the bag into the GPU block; missing names upload as zero
    pub fn to_uniform(&self) -> MaterialUniform {
        MaterialUniform {
            u_time: self.time(),
            _padding: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_material_starts_at_zero_time() {
        let material = ShaderMaterial::plane();
        assert_eq!(material.uniforms.len(), 1);
        assert_eq!(material.uniforms.get_float(TIME_UNIFORM), Some(0.0));
        assert_eq!(material.side, Side::Double);
        assert_eq!(material.side.cull_mode(), None);
    }

    #[test]
    fn advance_only_touches_known_uniforms() {
        let mut bag = UniformBag::new().with_float("uTime", 1.0);
        assert_eq!(bag.advance_float("uTime", 0.5), Some(1.5));
        assert_eq!(bag.advance_float("uTim", 0.5), None);
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn uniform_block_is_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<MaterialUniform>(), 16);
        let mut material = ShaderMaterial::plane();
        material.uniforms.set_float(TIME_UNIFORM, 2.25);
        assert_eq!(material.to_uniform().u_time, 2.25);
    }

    #[test]
    fn shaders_declare_the_time_uniform() {
        assert!(PLANE_VERTEX_SHADER.contains(TIME_UNIFORM));
        assert!(PLANE_FRAGMENT_SHADER.contains(TIME_UNIFORM));
        assert!(PLANE_VERTEX_SHADER.contains("fn vs_main"));
        assert!(PLANE_FRAGMENT_SHADER.contains("fn fs_main"));
    }
}
