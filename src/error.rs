//! Error types for viewer setup and slider input.
//!
//! The rig itself never fails; only the browser/GPU boundary and untrusted
//! control values can.

use thiserror::Error;

/// Fatal problems while bringing up the viewer. Setup stops at the first one.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("browser environment unavailable: no {0}")]
    Environment(&'static str),

    #[error("no element with id `{0}`")]
    CanvasNotFound(String),

    #[error("element `{0}` is not a <canvas>")]
    NotACanvas(String),

    #[error("invalid viewer config: {0}")]
    Config(String),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface is not supported by the adapter")]
    UnsupportedSurface,

    /// Shader module or render pipeline rejected by validation
    #[error("shader program failed to build: {0}")]
    Program(String),

    #[error("GPU resource allocation failed: {0}")]
    Resource(String),
}

/// A slider event that could not be applied. The pose is left unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("unknown control `{0}`")]
    UnknownControl(String),

    #[error("control `{id}` sent `{value}`, expected a finite number")]
    InvalidValue { id: String, value: String },
}
