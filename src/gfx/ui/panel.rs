//! Debug panel
//!
//! Each slider is bound to scene state through a [`PanelControl`]: a getter
//! used to show the current value and a setter invoked when the user edits
//! it. The panel never holds a reference into the scene.

use imgui::{TreeNodeFlags, Ui};

use crate::{config::PanelConfig, gfx::camera::perspective_camera::PerspectiveCamera};

/// A ranged float slider bound to one camera property
#[derive(Clone, Copy)]
pub struct PanelControl {
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    read: fn(&PerspectiveCamera) -> f32,
    write: fn(&mut PerspectiveCamera, f32),
}

impl PanelControl {
    pub fn new(
        label: &'static str,
        min: f32,
        max: f32,
        read: fn(&PerspectiveCamera) -> f32,
        write: fn(&mut PerspectiveCamera, f32),
    ) -> Self {
        Self {
            label,
            min,
            max,
            read,
            write,
        }
    }

    /// Slider over the camera's z position
    pub fn camera_depth(min: f32, max: f32) -> Self {
        Self::new(
            "z",
            min,
            max,
            |camera| camera.position.z,
            |camera, z| camera.position.z = z,
        )
    }

    pub fn value(&self, camera: &PerspectiveCamera) -> f32 {
        (self.read)(camera)
    }

    /// Clamps `value` into range, writes it and returns what was written
    pub fn apply(&self, camera: &mut PerspectiveCamera, value: f32) -> f32 {
        let clamped = value.clamp(self.min, self.max);
        (self.write)(camera, clamped);
        clamped
    }
}

/// A slider change reported by [`DebugPanel::draw`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelEdit {
    pub control: usize,
    pub value: f32,
}

/// One window holding a single collapsible folder of sliders
pub struct DebugPanel {
    pub folder: &'static str,
    pub open_by_default: bool,
    controls: Vec<PanelControl>,
}

impl DebugPanel {
    /// The `camera` folder with a depth slider
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            folder: "camera",
            open_by_default: config.open_by_default,
            controls: vec![PanelControl::camera_depth(
                config.depth_min,
                config.depth_max,
            )],
        }
    }

    pub fn controls(&self) -> &[PanelControl] {
        &self.controls
    }

    /// Draws the panel against the camera's current values and returns the
    /// edits the user made this frame
    pub fn draw(&self, ui: &Ui, camera: &PerspectiveCamera) -> Vec<PanelEdit> {
        let mut edits = Vec::new();
        let flags = if self.open_by_default {
            TreeNodeFlags::DEFAULT_OPEN
        } else {
            TreeNodeFlags::empty()
        };

        ui.window("Debug")
            .size([280.0, 0.0], imgui::Condition::FirstUseEver)
            .position([10.0, 10.0], imgui::Condition::FirstUseEver)
            .always_auto_resize(true)
            .build(|| {
                if ui.collapsing_header(self.folder, flags) {
                    for (index, control) in self.controls.iter().enumerate() {
                        let mut value = control.value(camera);
                        if ui.slider(control.label, control.min, control.max, &mut value) {
                            edits.push(PanelEdit {
                                control: index,
                                value,
                            });
                        }
                    }
                }
            });

        edits
    }

    /// Runs the edited control's setter. Unknown control indices are ignored.
    pub fn apply(&self, camera: &mut PerspectiveCamera, edit: PanelEdit) -> Option<f32> {
        let control = self.controls.get(edit.control)?;
        let written = control.apply(camera, edit.value);
        log::debug!("Panel '{}/{}' set to {}", self.folder, control.label, written);
        Some(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(75.0, 1.0, 0.1, 2000.0).with_position(Vector3::new(0.0, 0.0, 1.5))
    }

    #[test]
    fn panel_exposes_one_camera_depth_slider() {
        let panel = DebugPanel::new(&PanelConfig::default());
        assert_eq!(panel.folder, "camera");
        assert!(panel.open_by_default);
        assert_eq!(panel.controls().len(), 1);
        let control = panel.controls()[0];
        assert_eq!((control.label, control.min, control.max), ("z", 0.0, 10.0));
        assert_eq!(control.value(&camera()), 1.5);
    }

    #[test]
    fn edit_writes_camera_depth_immediately() {
        let panel = DebugPanel::new(&PanelConfig::default());
        let mut camera = camera();

        let written = panel.apply(
            &mut camera,
            PanelEdit {
                control: 0,
                value: 3.5,
            },
        );

        assert_eq!(written, Some(3.5));
        assert_eq!(camera.position.z, 3.5);
        assert_eq!(camera.position.x, 0.0);
    }

    #[test]
    fn edit_is_clamped_to_range() {
        let panel = DebugPanel::new(&PanelConfig::default());
        let mut camera = camera();

        panel.apply(&mut camera, PanelEdit { control: 0, value: 12.0 });
        assert_eq!(camera.position.z, 10.0);
        panel.apply(&mut camera, PanelEdit { control: 0, value: -1.0 });
        assert_eq!(camera.position.z, 0.0);
    }

    #[test]
    fn unknown_control_is_ignored() {
        let panel = DebugPanel::new(&PanelConfig::default());
        let mut camera = camera();
        assert_eq!(panel.apply(&mut camera, PanelEdit { control: 5, value: 2.0 }), None);
        assert_eq!(camera.position.z, 1.5);
    }
}
