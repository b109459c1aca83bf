//! Tuning knobs for the effect.

/// All simulation tuning parameters, with the defaults the effect ships
/// with. Every knob has a matching `with_*` builder method on
/// [`crate::Effect`].
///
/// The units are surface pixels and ticks: the simulation is advanced
/// once per rendered frame and does not scale by wall-clock delta time,
/// so `max_speed` is "pixels per frame", `gravity` is "pixels per frame
/// added to vertical velocity each frame", and so on.
#[derive(Debug, Clone)]
pub struct EffectConfig {
    /// Drawn particle radius in pixels.
    pub particle_size: f32,
    /// Sampling stride in pixels, applied on both axes. Larger gaps
    /// produce fewer, sparser particles.
    pub gap: u32,
    /// Per-axis velocity cap. Each axis is clamped independently.
    pub max_speed: f32,
    /// Added to vertical velocity every tick.
    pub gravity: f32,
    /// Factor converting displacement-from-home into acceleration.
    pub spring: f32,
    /// Fraction of velocity retained each tick.
    pub damping: f32,
    /// Magnitude of the cursor repulsion at zero distance.
    pub repel_force: f32,
    /// Radius around the cursor within which particles are repelled.
    pub cursor_radius: f32,
    /// Per-tick probability that a particle toggles between its dim
    /// and opaque phase.
    pub flicker_chance: f64,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            particle_size: 1.0,
            gap: 3,
            max_speed: 15.0,
            gravity: 0.3,
            spring: 0.025,
            damping: 0.9,
            repel_force: 10.0,
            cursor_radius: 80.0,
            flicker_chance: 0.03,
        }
    }
}
