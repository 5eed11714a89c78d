//! Scene lights
//!
//! Lights are fixed at startup and never mutated afterwards. The plane's
//! shader material does not sample them; they are carried as scene nodes.

use cgmath::Vector3;

use super::color::Color;

/// Light color used by all three rig lights. This is a 16-bit value and
/// decodes to cyan (0x00ffff); it is probably a truncated 0xffffff but is
/// kept as written.
pub const RIG_LIGHT_COLOR: u32 = 0xffff;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Omnidirectional light with range `distance` (0 = unlimited) and
    /// physical falloff exponent `decay`
    Point { distance: f32, decay: f32 },
    /// Parallel light shining from `position` toward the origin
    Directional,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Color,
    pub intensity: f32,
    pub position: Vector3<f32>,
}

impl Light {
    pub fn point(hex: u32, intensity: f32, distance: f32, decay: f32) -> Self {
        Self {
            kind: LightKind::Point { distance, decay },
            color: Color::from_hex(hex),
            intensity,
            position: Vector3::new(0.0, 0.0, 0.0),
        }
    }

    pub fn directional(hex: u32, intensity: f32) -> Self {
        Self {
            kind: LightKind::Directional,
            color: Color::from_hex(hex),
            intensity,
            position: Vector3::new(0.0, 1.0, 0.0),
        }
    }

    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vector3::new(x, y, z);
        self
    }
}

/// The three lights the scene is built with: a key point light, a faint
/// sun, and a short-range fill.
pub fn default_rig() -> Vec<Light> {
    vec![
        Light::point(RIG_LIGHT_COLOR, 1.0, 100.0, 2.0).with_position(0.0, 10.0, 10.0),
        Light::directional(RIG_LIGHT_COLOR, 0.08).with_position(-100.0, 0.0, -100.0),
        Light::point(RIG_LIGHT_COLOR, 2.7, 4.0, 3.0).with_position(30.0, 3.0, 1.8),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rig_has_three_fixed_lights() {
        let rig = default_rig();
        assert_eq!(rig.len(), 3);
        assert_eq!(rig[0].position, Vector3::new(0.0, 10.0, 10.0));
        assert_eq!(rig[1].kind, LightKind::Directional);
        assert_eq!(rig[1].intensity, 0.08);
        assert_eq!(
            rig[2].kind,
            LightKind::Point {
                distance: 4.0,
                decay: 3.0
            }
        );
        assert!(rig.iter().all(|l| l.color == Color::from_hex(0xffff)));
    }
}
