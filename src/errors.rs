//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! All failure modes here are setup-time conditions: GPU initialization,
//! resource upload, and asset decoding. Once the frame loop is running the
//! steady-state path performs no fallible I/O, so there is no runtime error
//! surface beyond losing the window surface (which the renderer handles by
//! reconfiguring, not by reporting).

use thiserror::Error;

/// The main error type for the whirl engine.
#[derive(Error, Debug)]
pub enum WhirlError {
    // ========================================================================
    // GPU & Rendering Errors
    // ========================================================================
    /// Failed to request a compatible GPU adapter or surface.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// Window system error.
    #[error("Window system error: {0}")]
    WindowError(#[from] raw_window_handle::HandleError),

    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),

    // ========================================================================
    // Resource Errors
    // ========================================================================
    /// Mesh data failed validation (out-of-range indices, mismatched
    /// attribute counts, or a material that the mesh cannot support).
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// A mesh file could not be loaded or parsed.
    #[error("Mesh load error: {0}")]
    MeshLoadFailed(String),

    /// Image decoding error.
    #[error("Image decode error: {0}")]
    ImageDecodeError(String),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<image::ImageError> for WhirlError {
    fn from(err: image::ImageError) -> Self {
        WhirlError::ImageDecodeError(err.to_string())
    }
}

impl From<tobj::LoadError> for WhirlError {
    fn from(err: tobj::LoadError) -> Self {
        WhirlError::MeshLoadFailed(err.to_string())
    }
}

/// Alias for `Result<T, WhirlError>`.
pub type Result<T> = std::result::Result<T, WhirlError>;
