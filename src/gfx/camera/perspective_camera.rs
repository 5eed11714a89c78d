use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform};
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Perspective camera looking from `position` at `target`, Y up.
///
/// The projection matrix is cached and only rebuilt by
/// [`PerspectiveCamera::update_projection_matrix`], so changing `aspect` or
/// `fovy` directly has no effect until that is called.
#[derive(Debug, Clone, Copy)]
pub struct PerspectiveCamera {
    pub position: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
    projection: Matrix4<f32>,
    pub uniform: CameraUniform,
}

impl Camera for PerspectiveCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection * self.view_matrix()
    }
}

impl PerspectiveCamera {
    pub fn new(fovy_degrees: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        let mut camera = Self {
            position: Vector3::new(0.0, 0.0, 1.0),
            target: Vector3::zero(),
            up: Vector3::unit_y(),
            aspect,
            fovy: Deg(fovy_degrees),
            znear,
            zfar,
            projection: Matrix4::identity(),
            uniform: CameraUniform::default(),
        };
        camera.update_projection_matrix();
        camera
    }

    pub fn with_position(mut self, position: Vector3<f32>) -> Self {
        self.position = position;
        self
    }

    pub fn with_target(mut self, target: Vector3<f32>) -> Self {
        self.target = target;
        self
    }

    /// Recomputes the cached projection from `fovy`, `aspect` and the clip planes
    pub fn update_projection_matrix(&mut self) {
        self.projection =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
        self.update_projection_matrix();
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            Point3::from_vec(self.position),
            Point3::from_vec(self.target),
            self.up,
        )
    }

    /// Camera-local +X in world space
    pub fn right(&self) -> Vector3<f32> {
        let forward = (self.target - self.position).normalize();
        forward.cross(self.up).normalize()
    }

    /// Camera-local +Y in world space
    pub fn camera_up(&self) -> Vector3<f32> {
        let forward = (self.target - self.position).normalize();
        self.right().cross(forward).normalize()
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.position.x, self.position.y, self.position.z, 1.0];
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_sets_aspect_and_projection() {
        let mut camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 2000.0);
        camera.resize_projection(1600, 900);
        assert!((camera.aspect - 1600.0 / 900.0).abs() < 1e-6);

        let expected =
            OPENGL_TO_WGPU_MATRIX * perspective(Deg(75.0), 1600.0 / 900.0, 0.1, 2000.0);
        assert_eq!(camera.projection_matrix(), expected);
    }

    #[test]
    fn basis_for_camera_on_positive_z() {
        let camera =
            PerspectiveCamera::new(75.0, 1.0, 0.1, 2000.0).with_position(Vector3::new(0.0, 0.0, 5.0));
        let right = camera.right();
        let up = camera.camera_up();
        assert!((right - Vector3::unit_x()).magnitude() < 1e-6);
        assert!((up - Vector3::unit_y()).magnitude() < 1e-6);
    }

    #[test]
    fn uniform_tracks_position() {
        let mut camera =
            PerspectiveCamera::new(75.0, 1.0, 0.1, 2000.0).with_position(Vector3::new(1.0, 2.0, 3.0));
        camera.update_view_proj();
        assert_eq!(camera.uniform.view_position, [1.0, 2.0, 3.0, 1.0]);
        assert!(camera.uniform.view_proj.iter().flatten().all(|v| v.is_finite()));
    }
}
