//! The particle record.
//!
//! Particles are plain data; everything that moves them lives in
//! [`crate::physics`] as free functions over slices. This keeps the hot
//! loop a straight pass over a contiguous `Vec` with no per-object
//! dispatch.

use glam::Vec2;

/// Draw alpha while a particle is in its dim phase.
pub const DIM_ALPHA: f32 = 0.15;

/// One image-sampled particle.
///
/// `home` is fixed at creation and never changes; `position` is
/// unconstrained and may leave the surface transiently while the spring
/// pulls it back. Particles are created in a batch by the sampler and
/// replaced wholesale on re-sampling, never removed individually.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current position in surface pixel space.
    pub position: Vec2,
    /// Anchor the spring pulls toward.
    pub home: Vec2,
    /// Velocity in pixels per tick.
    pub velocity: Vec2,
    /// Sampled source color, 8-bit RGB. Immutable for the particle's
    /// lifetime; the sampled alpha is discarded.
    pub color: [u8; 3],
    /// Whether the particle currently draws at [`DIM_ALPHA`].
    pub dim: bool,
}

impl Particle {
    /// Create a particle anchored at `home`, spawned at `position`.
    ///
    /// New particles start in the dim phase and flicker opaque later.
    pub fn new(position: Vec2, home: Vec2, color: [u8; 3]) -> Self {
        Self {
            position,
            home,
            velocity: Vec2::ZERO,
            color,
            dim: true,
        }
    }

    /// Draw alpha for the current opacity phase.
    #[inline]
    pub fn alpha(&self) -> f32 {
        if self.dim {
            DIM_ALPHA
        } else {
            1.0
        }
    }
}
