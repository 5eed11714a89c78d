use cgmath::Vector3;

use super::{
    color::Color,
    light::{default_rig, Light},
    mesh::Mesh,
};
use crate::{
    config::ViewportConfig,
    gfx::{
        camera::{
            camera_controller::OrbitControls, camera_utils::CameraManager,
            perspective_camera::PerspectiveCamera,
        },
        geometry::generate_plane,
        material::{ShaderMaterial, TIME_UNIFORM},
    },
};

/// The whole viewport scene: background, the plane, its lights and the camera
pub struct Scene {
    pub background: Color,
    pub mesh: Mesh,
    pub lights: Vec<Light>,
    pub camera_manager: CameraManager,
}

impl Scene {
    /// Builds the scene from configuration. `aspect` is the initial
    /// viewport width / height.
    pub fn new(config: &ViewportConfig, aspect: f32) -> Self {
        let plane = generate_plane(
            config.plane.width,
            config.plane.height,
            config.plane.width_segments,
            config.plane.height_segments,
        );
        let mesh = Mesh::new("Plane", &plane, ShaderMaterial::plane());

        let [px, py, pz] = config.camera.position;
        let [tx, ty, tz] = config.camera.target;
        let camera = PerspectiveCamera::new(
            config.camera.fov_degrees,
            aspect,
            config.camera.znear,
            config.camera.zfar,
        )
        .with_position(Vector3::new(px, py, pz))
        .with_target(Vector3::new(tx, ty, tz));
        let controls = OrbitControls::new(config.controls);

        let mut scene = Self {
            background: Color::from_hex(config.background),
            mesh,
            lights: default_rig(),
            camera_manager: CameraManager::new(camera, controls),
        };
        scene.update();
        scene
    }

    /// Creates GPU buffers for everything the scene draws
    pub fn init_gpu_resources(
        &mut self,
        device: &wgpu::Device,
        material_layout: &wgpu::BindGroupLayout,
    ) {
        self.mesh.init_gpu_resources(device, material_layout);
    }

    /// Current value of the time uniform
    pub fn time(&self) -> f32 {
        self.mesh.material.time()
    }

    /// Advances the time uniform by `step` and returns the new value
    pub fn advance_time(&mut self, step: f32) -> f32 {
        self.mesh
            .material
            .uniforms
            .advance_float(TIME_UNIFORM, step)
            .unwrap_or_default()
    }

    /// Applies orbit controls and refreshes the camera uniform
    pub fn update(&mut self) -> bool {
        self.camera_manager.update()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_holds_one_plane_three_lights() {
        let scene = Scene::new(&ViewportConfig::default(), 1.5);
        assert_eq!(scene.lights.len(), 3);
        assert_eq!(scene.mesh.vertices().len(), 33 * 33);
        assert_eq!(scene.mesh.index_count(), 2048 * 3);
        assert_eq!(scene.background, Color::WHITE);
        assert_eq!(scene.time(), 0.0);
        assert!(scene.mesh.gpu_resources.is_none());
    }

    #[test]
    fn camera_starts_at_configured_position() {
        let scene = Scene::new(&ViewportConfig::default(), 1.5);
        let camera = &scene.camera_manager.camera;
        assert!(camera.position.x.abs() < 1e-5);
        assert!((camera.position.z - 1.5).abs() < 1e-5);
        assert_eq!(camera.aspect, 1.5);
    }

    #[test]
    fn advance_time_accumulates() {
        let mut scene = Scene::new(&ViewportConfig::default(), 1.0);
        scene.advance_time(0.25);
        assert_eq!(scene.advance_time(0.25), 0.5);
        assert_eq!(scene.time(), 0.5);
    }
}
