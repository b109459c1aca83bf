//! Per-tick particle physics.
//!
//! One call to [`step`] advances the whole particle set by exactly one
//! animation tick. The update order inside [`step_particle`] is
//! load-bearing: acceleration reads the pre-update position, the speed
//! clamp runs before damping, and gravity lands *after* position
//! integration, so a tick's gravity only moves the particle on the
//! following tick. Reordering any of these changes the motion.

use glam::Vec2;
use rand::Rng;

use crate::config::EffectConfig;
use crate::particle::Particle;

/// Advance a single particle by one tick.
///
/// `cursor` is the pointer position in surface pixels, or `None` when
/// the pointer has not entered the surface; `None` disables repulsion
/// entirely.
pub fn step_particle(
    particle: &mut Particle,
    cursor: Option<Vec2>,
    config: &EffectConfig,
    rng: &mut impl Rng,
) {
    // Spring toward home, proportional to displacement.
    let displacement = particle.home - particle.position;
    let acceleration = displacement * config.spring;
    particle.velocity += acceleration;

    particle.velocity.x = clamp_axis(particle.velocity.x, config.max_speed);
    particle.velocity.y = clamp_axis(particle.velocity.y, config.max_speed);

    // Damping runs after the clamp, so a capped axis still loses speed.
    particle.velocity *= config.damping;
    particle.position += particle.velocity;

    // Gravity lands after integration: it moves the particle on the
    // next tick, not this one.
    particle.velocity.y += config.gravity;

    if let Some(cursor) = cursor {
        let offset = cursor - particle.position;
        let distance = offset.length();
        // distance == 0.0 would divide to NaN; skip the push entirely.
        if distance > 0.0 && distance < config.cursor_radius {
            let direction = offset / distance;
            let force =
                (config.cursor_radius - distance) / config.cursor_radius * config.repel_force;
            particle.velocity -= direction * force;
        }
    }

    if rng.gen_bool(config.flicker_chance) {
        particle.dim = !particle.dim;
    }
}

/// Advance every particle in the batch by one tick.
///
/// Sequential by design: the whole simulation runs on the event loop
/// thread, once per rendered frame.
pub fn step(
    particles: &mut [Particle],
    cursor: Option<Vec2>,
    config: &EffectConfig,
    rng: &mut impl Rng,
) {
    for particle in particles.iter_mut() {
        step_particle(particle, cursor, config, rng);
    }
}

/// Sign-preserving per-axis truncation to `±max`.
#[inline]
fn clamp_axis(value: f32, max: f32) -> f32 {
    if value.abs() > max {
        max * value.signum()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn quiet_config() -> EffectConfig {
        // No gravity or flicker so individual forces are observable.
        EffectConfig {
            gravity: 0.0,
            flicker_chance: 0.0,
            ..EffectConfig::default()
        }
    }

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5717_9b1e)
    }

    #[test]
    fn particle_at_home_stays_put() {
        let mut p = Particle::new(Vec2::new(50.0, 50.0), Vec2::new(50.0, 50.0), [10, 20, 30]);
        let config = quiet_config();

        step_particle(&mut p, None, &config, &mut rng());

        assert_eq!(p.position, Vec2::new(50.0, 50.0));
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn displaced_particle_moves_toward_home() {
        let mut p = Particle::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), [0, 0, 0]);
        let config = quiet_config();

        step_particle(&mut p, None, &config, &mut rng());

        assert!(p.position.x > 0.0);
        assert_eq!(p.position.y, 0.0);
    }

    #[test]
    fn velocity_axes_never_exceed_cap() {
        // Damping of 1.0 keeps the post-clamp value observable after
        // the step returns.
        let config = EffectConfig {
            damping: 1.0,
            ..quiet_config()
        };
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(10_000.0, -10_000.0), [0, 0, 0]);
        let mut rng = rng();

        for _ in 0..200 {
            step_particle(&mut p, None, &config, &mut rng);
            assert!(p.velocity.x.abs() <= config.max_speed);
            assert!(p.velocity.y.abs() <= config.max_speed);
        }
    }

    #[test]
    fn gravity_is_felt_one_tick_late() {
        let config = EffectConfig {
            gravity: 0.5,
            spring: 0.0,
            damping: 1.0,
            flicker_chance: 0.0,
            ..EffectConfig::default()
        };
        let mut p = Particle::new(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0), [0, 0, 0]);
        let mut rng = rng();

        // First tick: gravity is added after integration, so the
        // position has not moved yet.
        step_particle(&mut p, None, &config, &mut rng);
        assert_eq!(p.position.y, 10.0);
        assert_eq!(p.velocity.y, 0.5);

        // Second tick: last tick's gravity finally moves the particle.
        step_particle(&mut p, None, &config, &mut rng);
        assert_eq!(p.position.y, 10.5);
    }

    #[test]
    fn no_cursor_means_no_repulsion() {
        let config = quiet_config();
        let mut without_cursor =
            Particle::new(Vec2::new(40.0, 40.0), Vec2::new(60.0, 60.0), [0, 0, 0]);
        let mut far_cursor = without_cursor.clone();

        // A cursor outside the interaction radius must be equivalent to
        // no cursor at all.
        let far = Some(Vec2::new(40.0 + config.cursor_radius * 2.0, 40.0));
        for _ in 0..50 {
            step_particle(&mut without_cursor, None, &config, &mut rng());
            step_particle(&mut far_cursor, far, &config, &mut rng());
        }

        assert_eq!(without_cursor.position, far_cursor.position);
        assert_eq!(without_cursor.velocity, far_cursor.velocity);
    }

    #[test]
    fn cursor_pushes_particle_away() {
        let config = quiet_config();
        let mut p = Particle::new(Vec2::new(50.0, 50.0), Vec2::new(50.0, 50.0), [0, 0, 0]);

        // Cursor just left of the particle: the push must point right.
        let cursor = Some(Vec2::new(40.0, 50.0));
        step_particle(&mut p, cursor, &config, &mut rng());

        assert!(p.velocity.x > 0.0);
        assert_eq!(p.velocity.y, 0.0);
    }

    #[test]
    fn repulsion_scales_with_proximity() {
        let config = quiet_config();
        let mut near = Particle::new(Vec2::new(50.0, 50.0), Vec2::new(50.0, 50.0), [0, 0, 0]);
        let mut far = near.clone();

        step_particle(&mut near, Some(Vec2::new(45.0, 50.0)), &config, &mut rng());
        step_particle(&mut far, Some(Vec2::new(120.0, 50.0)), &config, &mut rng());

        assert!(near.velocity.length() > far.velocity.length());
    }

    #[test]
    fn cursor_on_top_of_particle_is_guarded() {
        let config = quiet_config();
        let mut p = Particle::new(Vec2::new(50.0, 50.0), Vec2::new(50.0, 50.0), [0, 0, 0]);

        step_particle(&mut p, Some(Vec2::new(50.0, 50.0)), &config, &mut rng());

        assert!(p.velocity.x.is_finite());
        assert!(p.velocity.y.is_finite());
        assert!(p.position.x.is_finite());
        assert!(p.position.y.is_finite());
    }

    #[test]
    fn flicker_rate_matches_probability() {
        let config = EffectConfig {
            gravity: 0.0,
            ..EffectConfig::default()
        };
        let mut p = Particle::new(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), [0, 0, 0]);
        let mut rng = rng();

        let mut toggles = 0u32;
        let mut last = p.dim;
        for _ in 0..10_000 {
            step_particle(&mut p, None, &config, &mut rng);
            if p.dim != last {
                toggles += 1;
                last = p.dim;
            }
        }

        // Expected 300 at p = 0.03; allow a generous band for the
        // seeded sequence.
        assert!((200..=400).contains(&toggles), "got {} toggles", toggles);
    }

    #[test]
    fn batch_step_advances_every_particle() {
        let config = quiet_config();
        let mut particles = vec![
            Particle::new(Vec2::ZERO, Vec2::new(30.0, 0.0), [1, 2, 3]),
            Particle::new(Vec2::ZERO, Vec2::new(0.0, 30.0), [4, 5, 6]),
        ];

        step(&mut particles, None, &config, &mut rng());

        assert!(particles[0].position.x > 0.0);
        assert!(particles[1].position.y > 0.0);
    }

    #[test]
    fn clamp_axis_truncates_preserving_sign() {
        assert_eq!(clamp_axis(20.0, 15.0), 15.0);
        assert_eq!(clamp_axis(-20.0, 15.0), -15.0);
        assert_eq!(clamp_axis(3.0, 15.0), 3.0);
        assert_eq!(clamp_axis(-3.0, 15.0), -3.0);
    }
}
