//! Orbit controls
//!
//! Pointer input accumulates into a spherical delta (rotation), a pan offset
//! and a dolly scale. [`OrbitControls::update`] re-derives the spherical
//! coordinates from the camera's current position every frame, applies the
//! accumulated input and writes the result back, so anything else that moves
//! the camera between frames (the debug panel) is respected.

use std::f32::consts::PI;

use cgmath::{InnerSpace, Rad, Vector3, Zero};
use winit::event::MouseButton;

use super::perspective_camera::PerspectiveCamera;
use crate::config::ControlsConfig;

const EPS: f32 = 0.000001;

/// Spherical coordinates around a target, Y up.
///
/// `phi` is the polar angle from +Y, `theta` the azimuth around Y measured
/// from +Z toward +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(offset: Vector3<f32>) -> Self {
        let radius = offset.magnitude();
        if radius == 0.0 {
            return Self {
                radius,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_offset(&self) -> Vector3<f32> {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vector3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Keeps `phi` off the poles where the view basis degenerates
    pub fn make_safe(&mut self) {
        self.phi = self.phi.clamp(EPS, PI - EPS);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    None,
    Rotate,
    Pan,
}

#[derive(Debug, Clone, Copy)]
struct SavedState {
    position: Vector3<f32>,
    target: Vector3<f32>,
}

pub struct OrbitControls {
    pub config: ControlsConfig,
    theta_delta: f32,
    phi_delta: f32,
    pan_offset: Vector3<f32>,
    scale: f32,
    saved: Option<SavedState>,
    is_left_pressed: bool,
    is_right_pressed: bool,
    is_shift_held: bool,
}

impl OrbitControls {
    pub fn new(config: ControlsConfig) -> Self {
        Self {
            config,
            theta_delta: 0.0,
            phi_delta: 0.0,
            pan_offset: Vector3::zero(),
            scale: 1.0,
            saved: None,
            is_left_pressed: false,
            is_right_pressed: false,
            is_shift_held: false,
        }
    }

    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.is_left_pressed = pressed,
            MouseButton::Right => self.is_right_pressed = pressed,
            _ => (),
        }
    }

    pub fn set_shift(&mut self, held: bool) {
        if held != self.is_shift_held {
            log::debug!("Shift state changed: {}", held);
        }
        self.is_shift_held = held;
    }

    pub fn is_shift_held(&self) -> bool {
        self.is_shift_held
    }

    /// Right drag or Shift + left drag pans; plain left drag rotates
    pub fn drag_mode(&self) -> DragMode {
        if self.is_right_pressed || (self.is_left_pressed && self.is_shift_held) {
            DragMode::Pan
        } else if self.is_left_pressed {
            DragMode::Rotate
        } else {
            DragMode::None
        }
    }

    /// Routes a pointer delta to rotate or pan depending on the held buttons
    pub fn drag(&mut self, dx: f32, dy: f32, viewport_height: u32, camera: &PerspectiveCamera) {
        match self.drag_mode() {
            DragMode::Rotate => self.rotate(dx, dy, viewport_height),
            DragMode::Pan => self.pan(dx, dy, viewport_height, camera),
            DragMode::None => (),
        }
    }

    /// A drag across the full viewport height is one full turn
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: u32) {
        if !self.config.enable_rotate {
            return;
        }
        let height = viewport_height.max(1) as f32;
        self.rotate_left(2.0 * PI * dx / height * self.config.rotate_speed);
        self.rotate_up(2.0 * PI * dy / height * self.config.rotate_speed);
    }

    /// Moves the target in the camera's screen plane. The scale keeps the
    /// point under the cursor fixed at the target's depth.
    pub fn pan(&mut self, dx: f32, dy: f32, viewport_height: u32, camera: &PerspectiveCamera) {
        if !self.config.enable_pan {
            return;
        }
        let offset = camera.position - camera.target;
        let distance = offset.magnitude();
        if distance < EPS {
            return;
        }

        let height = viewport_height.max(1) as f32;
        let half_fov = Rad::from(camera.fovy).0 / 2.0;
        let target_distance = distance * half_fov.tan();

        let left = 2.0 * dx * self.config.pan_speed * target_distance / height;
        let up = 2.0 * dy * self.config.pan_speed * target_distance / height;

        self.pan_offset += camera.right() * -left;
        self.pan_offset += camera.camera_up() * up;
    }

    pub fn zoom_in(&mut self) {
        if !self.config.enable_zoom {
            return;
        }
        self.scale *= self.zoom_scale();
    }

    pub fn zoom_out(&mut self) {
        if !self.config.enable_zoom {
            return;
        }
        self.scale /= self.zoom_scale();
    }

    fn zoom_scale(&self) -> f32 {
        0.95_f32.powf(self.config.zoom_speed)
    }

    fn rotate_left(&mut self, angle: f32) {
        self.theta_delta -= angle;
    }

    fn rotate_up(&mut self, angle: f32) {
        self.phi_delta -= angle;
    }

    fn auto_rotation_angle(&self) -> f32 {
        2.0 * PI / 60.0 / 60.0 * self.config.auto_rotate_speed
    }

    /// Integrates one frame of accumulated input into `camera`.
    ///
    /// With damping, only `damping_factor` of the pending rotation and pan
    /// is applied and the remainder decays geometrically over the following
    /// frames. Without damping everything pending is applied at once.
    /// Zoom is never damped. Returns true if the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let mut spherical = Spherical::from_offset(camera.position - camera.target);

        if self.config.auto_rotate && self.drag_mode() == DragMode::None {
            self.rotate_left(self.auto_rotation_angle());
        }

        let factor = if self.config.enable_damping {
            self.config.damping_factor
        } else {
            1.0
        };

        spherical.theta += self.theta_delta * factor;
        spherical.phi += self.phi_delta * factor;
        spherical.phi = spherical
            .phi
            .clamp(self.config.min_polar_angle, self.config.max_polar_angle);
        spherical.make_safe();

        spherical.radius = (spherical.radius * self.scale)
            .clamp(self.config.min_distance, self.config.max_distance);

        let target = camera.target + self.pan_offset * factor;
        let position = target + spherical.to_offset();

        if self.config.enable_damping {
            let decay = 1.0 - self.config.damping_factor;
            self.theta_delta *= decay;
            self.phi_delta *= decay;
            self.pan_offset *= decay;
        } else {
            self.theta_delta = 0.0;
            self.phi_delta = 0.0;
            self.pan_offset = Vector3::zero();
        }
        self.scale = 1.0;

        let moved = (position - camera.position).magnitude2() > EPS
            || (target - camera.target).magnitude2() > EPS;

        camera.position = position;
        camera.target = target;
        moved
    }

    /// Remembers the camera pose that [`OrbitControls::reset`] restores
    pub fn save_state(&mut self, camera: &PerspectiveCamera) {
        self.saved = Some(SavedState {
            position: camera.position,
            target: camera.target,
        });
    }

    pub fn reset(&mut self, camera: &mut PerspectiveCamera) {
        if let Some(saved) = self.saved {
            camera.position = saved.position;
            camera.target = saved.target;
        }
        self.theta_delta = 0.0;
        self.phi_delta = 0.0;
        self.pan_offset = Vector3::zero();
        self.scale = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT: u32 = 800;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(75.0, 1.5, 0.1, 2000.0).with_position(Vector3::new(0.0, 0.0, 1.5))
    }

    fn close(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < 1e-4
    }

    #[test]
    fn spherical_round_trip_of_axis_offset() {
        let s = Spherical::from_offset(Vector3::new(0.0, 0.0, 2.0));
        assert!((s.radius - 2.0).abs() < 1e-6);
        assert!(s.theta.abs() < 1e-6);
        assert!((s.phi - PI / 2.0).abs() < 1e-6);
        assert!(close(s.to_offset(), Vector3::new(0.0, 0.0, 2.0)));
    }

    #[test]
    fn undamped_rotation_applies_at_once() {
        let mut controls = OrbitControls::new(ControlsConfig::default().with_damping(false));
        let mut camera = camera();

        // A quarter of the viewport height is a quarter turn
        controls.rotate(HEIGHT as f32 / 4.0, 0.0, HEIGHT);
        assert!(controls.update(&mut camera));
        assert!(close(camera.position, Vector3::new(-1.5, 0.0, 0.0)));

        assert!(!controls.update(&mut camera));
        assert!(close(camera.position, Vector3::new(-1.5, 0.0, 0.0)));
    }

    #[test]
    fn damped_rotation_converges_over_frames() {
        let mut controls = OrbitControls::new(ControlsConfig::default());
        let mut camera = camera();

        controls.rotate(HEIGHT as f32 / 4.0, 0.0, HEIGHT);
        controls.update(&mut camera);
        let first = Spherical::from_offset(camera.position - camera.target);
        assert!((first.theta - (-PI / 2.0 * 0.05)).abs() < 1e-4);

        for _ in 0..400 {
            controls.update(&mut camera);
        }
        assert!(close(camera.position, Vector3::new(-1.5, 0.0, 0.0)));
    }

    #[test]
    fn zoom_is_instant_even_with_damping() {
        let mut controls = OrbitControls::new(ControlsConfig::default());
        let mut camera = camera();

        controls.zoom_in();
        controls.update(&mut camera);
        assert!((camera.position.magnitude() - 1.5 * 0.95).abs() < 1e-5);

        controls.zoom_out();
        controls.update(&mut camera);
        assert!((camera.position.magnitude() - 1.5).abs() < 1e-5);
    }

    #[test]
    fn pan_moves_target_and_position_together() {
        let mut controls = OrbitControls::new(ControlsConfig::default().with_damping(false));
        let mut camera = camera();

        controls.pan(100.0, 0.0, HEIGHT, &camera);
        controls.update(&mut camera);

        assert!(camera.target.x < 0.0);
        assert!(close(camera.position - camera.target, Vector3::new(0.0, 0.0, 1.5)));
    }

    #[test]
    fn disabled_pan_leaves_camera_but_rotate_works() {
        let mut controls = OrbitControls::new(ControlsConfig::default().with_pan(false));
        let mut camera = camera();
        let start = camera.position;

        controls.pan(100.0, 50.0, HEIGHT, &camera);
        for _ in 0..50 {
            controls.update(&mut camera);
        }
        assert!(close(camera.position, start));
        assert!(close(camera.target, Vector3::zero()));

        controls.rotate(100.0, 0.0, HEIGHT);
        controls.update(&mut camera);
        assert!(!close(camera.position, start));
    }

    #[test]
    fn disabled_zoom_leaves_camera_but_pan_works() {
        let mut controls = OrbitControls::new(ControlsConfig::default().with_zoom(false));
        let mut camera = camera();

        controls.zoom_in();
        controls.zoom_in();
        controls.update(&mut camera);
        assert!((camera.position.magnitude() - 1.5).abs() < 1e-5);

        controls.pan(100.0, 0.0, HEIGHT, &camera);
        controls.update(&mut camera);
        assert!(camera.target.x < 0.0);
    }

    #[test]
    fn disabled_rotate_ignores_drag() {
        let mut controls = OrbitControls::new(ControlsConfig::default().with_rotate(false));
        let mut camera = camera();

        controls.rotate(300.0, 200.0, HEIGHT);
        for _ in 0..20 {
            controls.update(&mut camera);
        }
        assert!(close(camera.position, Vector3::new(0.0, 0.0, 1.5)));
    }

    #[test]
    fn polar_angle_stays_off_the_pole() {
        let mut controls = OrbitControls::new(ControlsConfig::default().with_damping(false));
        let mut camera = camera();

        controls.rotate(0.0, 10.0 * HEIGHT as f32, HEIGHT);
        controls.update(&mut camera);

        assert!(camera.position.y > 1.49);
        assert!(camera.position.x.is_finite() && camera.position.z.is_finite());
    }

    #[test]
    fn external_position_edit_is_kept() {
        let mut controls = OrbitControls::new(ControlsConfig::default());
        let mut camera = camera();

        camera.position.z = 4.0;
        controls.update(&mut camera);
        assert!(close(camera.position, Vector3::new(0.0, 0.0, 4.0)));
    }

    #[test]
    fn auto_rotate_turns_without_input() {
        let mut controls = OrbitControls::new(
            ControlsConfig::default()
                .with_damping(false)
                .with_auto_rotate(true, 1.0),
        );
        let mut camera = camera();

        assert!(controls.update(&mut camera));
        assert!(camera.position.x < 0.0);
    }

    #[test]
    fn reset_restores_saved_pose() {
        let mut controls = OrbitControls::new(ControlsConfig::default().with_damping(false));
        let mut camera = camera();
        controls.save_state(&camera);

        controls.rotate(200.0, 100.0, HEIGHT);
        controls.pan(50.0, 50.0, HEIGHT, &camera);
        controls.update(&mut camera);
        controls.reset(&mut camera);

        assert_eq!(camera.position, Vector3::new(0.0, 0.0, 1.5));
        assert_eq!(camera.target, Vector3::zero());
    }

    #[test]
    fn drag_mode_follows_buttons() {
        let mut controls = OrbitControls::new(ControlsConfig::default());
        assert_eq!(controls.drag_mode(), DragMode::None);
        controls.set_button(MouseButton::Left, true);
        assert_eq!(controls.drag_mode(), DragMode::Rotate);
        controls.set_shift(true);
        assert_eq!(controls.drag_mode(), DragMode::Pan);
        controls.set_shift(false);
        controls.set_button(MouseButton::Left, false);
        controls.set_button(MouseButton::Right, true);
        assert_eq!(controls.drag_mode(), DragMode::Pan);
    }
}
