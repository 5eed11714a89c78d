//! Per-frame driver
//!
//! [`RenderLoop::tick`] runs one frame: advance the time uniform, step the
//! orbit controls, then draw. A [`ShutdownToken`] is checked first so the
//! loop stops cleanly once anyone cancels it.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::{context::ViewportContext, error::Result};

/// Cloneable stop flag shared between the loop and whoever wants it stopped
#[derive(Debug, Clone, Default)]
pub struct ShutdownToken {
    cancelled: Arc<AtomicBool>,
}

impl ShutdownToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

pub struct RenderLoop {
    time_step: f32,
    frames: u64,
    shutdown: ShutdownToken,
}

impl RenderLoop {
    pub fn new(time_step: f32) -> Self {
        Self {
            time_step,
            frames: 0,
            shutdown: ShutdownToken::new(),
        }
    }

    pub fn with_shutdown(mut self, shutdown: ShutdownToken) -> Self {
        self.shutdown = shutdown;
        self
    }

    pub fn shutdown_token(&self) -> ShutdownToken {
        self.shutdown.clone()
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one frame. `draw` receives the context after time and camera
    /// have been advanced; its error aborts the frame and is returned.
    pub fn tick<F>(&mut self, context: &mut ViewportContext, draw: F) -> Result<LoopState>
    where
        F: FnOnce(&mut ViewportContext) -> Result<()>,
    {
        if self.shutdown.is_cancelled() {
            return Ok(LoopState::Stopped);
        }

        let time = context.scene.advance_time(self.time_step);
        context.scene.update();
        draw(context)?;

        self.frames += 1;
        if self.frames % 600 == 0 {
            log::trace!("Frame {} at time {:.3}", self.frames, time);
        }
        Ok(LoopState::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::ViewportConfig, error::ViewportError, gfx::ui::PanelEdit};

    fn context() -> ViewportContext {
        ViewportContext::new(&ViewportConfig::default(), 1200, 800)
    }

    #[test]
    fn time_advances_by_step_per_tick() {
        let mut context = context();
        let mut render_loop = RenderLoop::new(0.005);

        for _ in 0..10 {
            render_loop.tick(&mut context, |_| Ok(())).unwrap();
        }

        assert_eq!(render_loop.frames(), 10);
        assert!((context.scene.time() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn two_hundred_frames_reach_one_second_of_shader_time() {
        let mut context = context();
        let mut render_loop = RenderLoop::new(0.005);
        let mut draws = 0;

        for _ in 0..200 {
            let state = render_loop
                .tick(&mut context, |context| {
                    assert_eq!(context.scene.mesh.material.to_uniform().u_time, context.scene.time());
                    draws += 1;
                    Ok(())
                })
                .unwrap();
            assert_eq!(state, LoopState::Running);
        }

        assert_eq!(draws, 200);
        assert!((context.scene.time() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn cancelled_token_stops_the_loop() {
        let mut context = context();
        let token = ShutdownToken::new();
        let mut render_loop = RenderLoop::new(0.005).with_shutdown(token.clone());

        assert_eq!(
            render_loop.tick(&mut context, |_| Ok(())).unwrap(),
            LoopState::Running
        );
        token.cancel();
        assert_eq!(
            render_loop.tick(&mut context, |_| Ok(())).unwrap(),
            LoopState::Stopped
        );
        assert_eq!(render_loop.frames(), 1);
        assert!(render_loop.shutdown_token().is_cancelled());
    }

    #[test]
    fn draw_error_is_returned() {
        let mut context = context();
        let mut render_loop = RenderLoop::new(0.005);

        let result = render_loop.tick(&mut context, |_| Err(ViewportError::NotInitialized));

        assert!(matches!(result, Err(ViewportError::NotInitialized)));
        assert_eq!(render_loop.frames(), 0);
    }

    #[test]
    fn panel_edit_survives_the_next_tick() {
        let mut context = context();
        let mut render_loop = RenderLoop::new(0.005);

        let edit = PanelEdit {
            control: 0,
            value: 3.5,
        };
        context
            .panel
            .apply(&mut context.scene.camera_manager.camera, edit);
        assert_eq!(context.scene.camera_manager.camera.position.z, 3.5);

        render_loop.tick(&mut context, |_| Ok(())).unwrap();
        assert!((context.scene.camera_manager.camera.position.z - 3.5).abs() < 1e-4);
    }
}
