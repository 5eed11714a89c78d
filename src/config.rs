//! Viewport configuration
//!
//! All tunables live in [`ViewportConfig`]. Defaults reproduce the stock
//! scene: a 2x2 plane with 32x32 segments, a 75 degree camera at z = 1.5,
//! orbit controls with damping, pan and zoom enabled, and a time uniform
//! advanced by 0.005 every frame.

/// Orbit control flags and tuning, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlsConfig {
    pub enable_damping: bool,
    /// Fraction of the accumulated input applied per frame when damping
    pub damping_factor: f32,
    pub enable_rotate: bool,
    pub rotate_speed: f32,
    pub enable_pan: bool,
    pub pan_speed: f32,
    pub enable_zoom: bool,
    pub zoom_speed: f32,
    pub auto_rotate: bool,
    /// Full turns per 60 seconds at 60 fps
    pub auto_rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            enable_rotate: true,
            rotate_speed: 1.0,
            enable_pan: true,
            pan_speed: 1.0,
            enable_zoom: true,
            zoom_speed: 1.0,
            auto_rotate: false,
            auto_rotate_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: std::f32::consts::PI,
        }
    }
}

impl ControlsConfig {
    pub fn with_damping(mut self, enable: bool) -> Self {
        self.enable_damping = enable;
        self
    }

    pub fn with_rotate(mut self, enable: bool) -> Self {
        self.enable_rotate = enable;
        self
    }

    pub fn with_pan(mut self, enable: bool) -> Self {
        self.enable_pan = enable;
        self
    }

    pub fn with_zoom(mut self, enable: bool) -> Self {
        self.enable_zoom = enable;
        self
    }

    pub fn with_auto_rotate(mut self, enable: bool, speed: f32) -> Self {
        self.auto_rotate = enable;
        self.auto_rotate_speed = speed;
        self
    }
}

/// Perspective camera parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            znear: 0.1,
            zfar: 2000.0,
            position: [0.0, 0.0, 1.5],
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Plane geometry dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneConfig {
    pub width: f32,
    pub height: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            width: 2.0,
            height: 2.0,
            width_segments: 32,
            height_segments: 32,
        }
    }
}

/// Debug panel slider range for the camera depth control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConfig {
    pub depth_min: f32,
    pub depth_max: f32,
    pub open_by_default: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            depth_min: 0.0,
            depth_max: 10.0,
            open_by_default: true,
        }
    }
}

/// Top-level configuration for a [`crate::ViewportApp`]
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportConfig {
    pub title: String,
    /// Initial window size in logical pixels
    pub window_size: (u32, u32),
    /// Background color as 0xRRGGBB
    pub background: u32,
    /// Amount added to the time uniform every frame
    pub time_step: f32,
    pub vsync: bool,
    pub plane: PlaneConfig,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    pub panel: PanelConfig,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            title: "shaderplane".to_string(),
            window_size: (1200, 800),
            background: 0xffffff,
            time_step: 0.005,
            vsync: true,
            plane: PlaneConfig::default(),
            camera: CameraConfig::default(),
            controls: ControlsConfig::default(),
            panel: PanelConfig::default(),
        }
    }
}

impl ViewportConfig {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    pub fn with_background(mut self, hex: u32) -> Self {
        self.background = hex;
        self
    }

    pub fn with_time_step(mut self, step: f32) -> Self {
        self.time_step = step;
        self
    }

    pub fn with_vsync(mut self, enable: bool) -> Self {
        self.vsync = enable;
        self
    }

    pub fn with_plane(mut self, plane: PlaneConfig) -> Self {
        self.plane = plane;
        self
    }

    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_controls(mut self, controls: ControlsConfig) -> Self {
        self.controls = controls;
        self
    }

    pub fn with_panel(mut self, panel: PanelConfig) -> Self {
        self.panel = panel;
        self
    }
}
