//! Viewer session state
//!
//! A [`Session`] owns the pose, the camera and a renderer, and redraws the
//! whole figure after every change. Core logic only needs a
//! [`CubeRenderer`], so it is tested here with a recording renderer.
//!
//! In the browser a single session lives in a thread-local and WASM
//! bindings reach it through [`with_app_state`] / [`with_app_state_mut`].

use crate::camera::Camera;
use crate::draw::{render_figure, CubeRenderer};
use crate::error::InputError;
use crate::input;
use crate::pose::{PoseField, PoseSnapshot, PoseState};
use crate::rig::compose_figure;

pub struct Session<R: CubeRenderer> {
    pub pose: PoseState,
    pub camera: Camera,
    pub renderer: R,
}

impl<R: CubeRenderer> Session<R> {
    /// New session in the rest pose. Nothing is drawn until [`Session::redraw`].
    pub fn new(renderer: R, camera: Camera) -> Self {
        Self {
            pose: PoseState::rest_pose(),
            camera,
            renderer,
        }
    }

    /// Compose every part from the current pose and draw them all
    pub fn redraw(&mut self) {
        let figure = compose_figure(&self.pose);
        render_figure(&mut self.renderer, &self.camera, &figure);
    }

    /// Apply one numeric slider value, then redraw
    pub fn apply_control(&mut self, id: &str, value: f32) -> Result<PoseField, InputError> {
        let field = input::apply_control(&mut self.pose, id, value)?;
        self.redraw();
        Ok(field)
    }

    /// Apply the raw string value of an `<input>` element, then redraw
    pub fn apply_raw_control(&mut self, id: &str, raw: &str) -> Result<PoseField, InputError> {
        let value = input::parse_control_value(id, raw)?;
        self.apply_control(id, value)
    }

    pub fn reset_pose(&mut self) {
        self.set_pose(PoseState::rest_pose());
    }

    /// Replace the whole pose, then redraw
    pub fn set_pose(&mut self, pose: PoseState) {
        self.pose = pose;
        self.redraw();
    }

    /// Load a snapshot on top of the rest pose. On error the pose is untouched.
    pub fn import_snapshot(&mut self, snapshot: &PoseSnapshot) -> Result<(), InputError> {
        let pose = snapshot.to_pose()?;
        self.set_pose(pose);
        Ok(())
    }

    pub fn export_snapshot(&self) -> PoseSnapshot {
        PoseSnapshot::from_pose(&self.pose)
    }

    /// Match the camera to a new viewport size, then redraw
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera = self.camera.with_viewport(width, height);
        self.renderer
            .resize_viewport(width, height, self.camera.projection_matrix());
        self.redraw();
    }
}

#[cfg(target_arch = "wasm32")]
pub use app::*;

#[cfg(target_arch = "wasm32")]
mod app {
    use super::Session;
    use crate::gpu::Renderer;
    use std::cell::RefCell;

    /// The browser session
    pub type AppState = Session<Renderer>;

    // Global state access, thin wrapper for WASM bindings only
    thread_local! {
        static APP_STATE: RefCell<Option<AppState>> = const { RefCell::new(None) };
    }

    /// Execute a closure with immutable access to AppState
    ///
    /// Returns None if the viewer has not started
    pub fn with_app_state<F, T>(f: F) -> Option<T>
    where
        F: FnOnce(&AppState) -> T,
    {
        APP_STATE.with(|state| {
            let borrowed = state.borrow();
            borrowed.as_ref().map(f)
        })
    }

    /// Execute a closure with mutable access to AppState
    ///
    /// Returns None if the viewer has not started
    pub fn with_app_state_mut<F, T>(f: F) -> Option<T>
    where
        F: FnOnce(&mut AppState) -> T,
    {
        APP_STATE.with(|state| {
            let mut borrowed = state.borrow_mut();
            borrowed.as_mut().map(f)
        })
    }

    /// Install the session once the renderer exists. Replaces any previous one.
    pub fn initialize_app_state(session: AppState) {
        APP_STATE.with(|state| {
            *state.borrow_mut() = Some(session);
        });
    }
}
