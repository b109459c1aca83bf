//! # stipple
//!
//! An image-to-particle scatter effect: a source image is sampled into
//! colored point particles that spring back toward their home pixel,
//! sag under a constant gravity, scatter away from the cursor, and
//! flicker between a dim and an opaque phase.
//!
//! ## Quick Start
//!
//! ```ignore
//! use stipple::{Effect, ImageSource};
//!
//! fn main() -> Result<(), stipple::EffectError> {
//!     Effect::new(ImageSource::from_path("logo.png"))
//!         .with_gap(3)
//!         .with_cursor_radius(80.0)
//!         .run()
//! }
//! ```
//!
//! ## How it works
//!
//! - The **sampler** walks the decoded image on a fixed-stride grid and
//!   emits one particle per non-transparent pixel, homed at the pixel's
//!   position centered on the surface.
//! - The **physics** step advances every particle once per frame:
//!   spring acceleration toward home, a per-axis speed clamp, damping,
//!   integration, gravity, cursor repulsion, and a Bernoulli opacity
//!   flicker. The simulation is frame-based and CPU-side.
//! - The **renderer** draws the set as instanced circle-cut quads with
//!   per-particle alpha, re-uploading the instance buffer each frame.
//!
//! Resizing the window re-samples the image for the new dimensions and
//! replaces the particle set wholesale. A source image that fails to
//! decode is logged and leaves the effect empty - there is no error
//! path out of the running loop for it.
//!
//! The simulation pieces ([`sampler`], [`physics`], [`Particle`],
//! [`ImageSource`]) are plain functions and data, usable without a
//! window; [`Effect`] is the batteries-included runner that wires them
//! to winit and wgpu.

pub mod config;
pub mod cursor;
mod effect;
pub mod error;
pub mod particle;
pub mod physics;
mod render;
pub mod sampler;
mod shader;
pub mod source;
pub mod time;

pub use config::EffectConfig;
pub use effect::Effect;
pub use error::{EffectError, RenderError, SourceError};
pub use glam::Vec2;
pub use particle::{Particle, DIM_ALPHA};
pub use source::ImageSource;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use stipple::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::EffectConfig;
    pub use crate::cursor::Cursor;
    pub use crate::effect::Effect;
    pub use crate::error::{EffectError, RenderError, SourceError};
    pub use crate::particle::{Particle, DIM_ALPHA};
    pub use crate::physics;
    pub use crate::sampler;
    pub use crate::source::ImageSource;
    pub use crate::time::FrameClock;
    pub use crate::Vec2;
}
