use cgmath::{Matrix4, SquareMatrix};
use winit::{
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta},
    keyboard::{KeyCode, PhysicalKey},
};

use super::{camera_controller::OrbitControls, perspective_camera::PerspectiveCamera};

/// Camera plus the orbit controls that drive it
pub struct CameraManager {
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
}

impl CameraManager {
    pub fn new(camera: PerspectiveCamera, mut controls: OrbitControls) -> Self {
        controls.save_state(&camera);
        Self { camera, controls }
    }

    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.controls.set_button(button, state == ElementState::Pressed);
    }

    /// Raw pointer motion in pixels; `viewport_height` scales it to angles
    pub fn process_mouse_motion(&mut self, delta: (f64, f64), viewport_height: u32) {
        self.controls
            .drag(delta.0 as f32, delta.1 as f32, viewport_height, &self.camera);
    }

    pub fn process_scroll(&mut self, delta: &MouseScrollDelta) {
        let steps = match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            MouseScrollDelta::PixelDelta(pos) => (pos.y / 100.0) as f32,
        };
        if steps > 0.0 {
            self.controls.zoom_in();
        } else if steps < 0.0 {
            self.controls.zoom_out();
        }
    }

    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        match event {
            KeyEvent {
                physical_key: PhysicalKey::Code(KeyCode::ShiftLeft | KeyCode::ShiftRight),
                state,
                ..
            } => {
                self.controls.set_shift(*state == ElementState::Pressed);
            }
            KeyEvent {
                physical_key: PhysicalKey::Code(KeyCode::KeyC),
                state: ElementState::Pressed,
                ..
            } if self.controls.is_shift_held() => {
                log::info!("Resetting camera to its initial pose");
                self.controls.reset(&mut self.camera);
            }
            _ => (),
        }
    }

    /// Applies one frame of control state to the camera and refreshes its uniform
    pub fn update(&mut self) -> bool {
        let changed = self.controls.update(&mut self.camera);
        self.camera.update_view_proj();
        changed
    }

    /// Get the view projection matrix from the camera
    pub fn get_view_proj_matrix(&self) -> Matrix4<f32> {
        self.camera.build_view_projection_matrix()
    }
}

pub trait Camera: Sized {
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: convert_matrix4_to_array(Matrix4::identity()),
        }
    }
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    matrix4.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControlsConfig;
    use cgmath::{InnerSpace, Vector3};

    fn manager() -> CameraManager {
        let camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 2000.0)
            .with_position(Vector3::new(0.0, 0.0, 1.5));
        CameraManager::new(camera, OrbitControls::new(ControlsConfig::default()))
    }

    #[test]
    fn scroll_up_moves_camera_closer() {
        let mut manager = manager();
        manager.process_scroll(&MouseScrollDelta::LineDelta(0.0, 1.0));
        manager.update();
        assert!(manager.camera.position.magnitude() < 1.5);
    }

    #[test]
    fn motion_without_button_is_ignored() {
        let mut manager = manager();
        manager.process_mouse_motion((40.0, 10.0), 800);
        for _ in 0..10 {
            manager.update();
        }
        assert!((manager.camera.position - Vector3::new(0.0, 0.0, 1.5)).magnitude() < 1e-6);
    }

    #[test]
    fn left_drag_orbits() {
        let mut manager = manager();
        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        manager.process_mouse_motion((40.0, 0.0), 800);
        manager.update();
        assert!(manager.camera.position.x.abs() > 1e-4);
        assert!((manager.camera.position.magnitude() - 1.5).abs() < 1e-4);
    }
}
