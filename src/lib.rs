//! Cube Robot Viewer - Wasm Core
//!
//! An articulated figure built from eight scaled cubes, posed with HTML
//! sliders and drawn with wgpu on a WebGL2 canvas.

pub mod camera;
pub mod config;
pub mod draw;
pub mod error;
pub mod figure_constants;
#[cfg(target_arch = "wasm32")]
pub mod gpu;
pub mod input;
mod math;
pub mod mesh;
pub mod pose;
pub mod rig;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod viewer;

pub use camera::Camera;
pub use config::ViewerConfig;
pub use draw::{draw_figure, render_figure, CubeRenderer};
pub use error::{InputError, SetupError};
pub use math::{rotate_about_pivot, Mat4, TransformExt, Vec3};
pub use pose::{PoseField, PoseSnapshot, PoseState};
pub use rig::{compose_figure, BodyPart, FigureTransforms, PartTransform};
pub use state::Session;

// Re-exports for WASM API
#[cfg(target_arch = "wasm32")]
pub use viewer::{
    control_ids, export_pose_json, import_pose_json, reset_pose, resize_viewer, set_control,
    start_viewer,
};
