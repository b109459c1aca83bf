//! Error types for stipple.
//!
//! Renderer setup and the event loop can fail; the simulation itself
//! cannot. Source-image decode failures are deliberately *not* routed
//! through these types when the effect is running: the effect logs a
//! warning and keeps going with an empty particle set. [`SourceError`]
//! exists for callers that decode eagerly and want the failure.

use std::fmt;

/// Errors that can occur while initializing the GPU renderer.
#[derive(Debug)]
pub enum RenderError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            RenderError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with Vulkan/Metal/DX12 support."),
            RenderError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::SurfaceCreation(e) => Some(e),
            RenderError::DeviceCreation(e) => Some(e),
            RenderError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for RenderError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        RenderError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for RenderError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RenderError::DeviceCreation(e)
    }
}

/// Errors that can occur when eagerly decoding a source image.
///
/// Only [`crate::ImageSource::open`] reports these. The lazy
/// constructors defer decoding into the effect loop, where a failure
/// degrades to an empty particle set instead of surfacing.
#[derive(Debug)]
pub enum SourceError {
    /// The image could not be read or decoded.
    Decode(image::ImageError),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Decode(e) => write!(f, "Failed to decode source image: {}", e),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Decode(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for SourceError {
    fn from(e: image::ImageError) -> Self {
        SourceError::Decode(e)
    }
}

/// Errors that can occur when running the effect.
#[derive(Debug)]
pub enum EffectError {
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// Renderer initialization failed.
    Render(RenderError),
}

impl fmt::Display for EffectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            EffectError::Window(e) => write!(f, "Failed to create window: {}", e),
            EffectError::Render(e) => write!(f, "Renderer error: {}", e),
        }
    }
}

impl std::error::Error for EffectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EffectError::EventLoop(e) => Some(e),
            EffectError::Window(e) => Some(e),
            EffectError::Render(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for EffectError {
    fn from(e: winit::error::EventLoopError) -> Self {
        EffectError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for EffectError {
    fn from(e: winit::error::OsError) -> Self {
        EffectError::Window(e)
    }
}

impl From<RenderError> for EffectError {
    fn from(e: RenderError) -> Self {
        EffectError::Render(e)
    }
}
