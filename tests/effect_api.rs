//! Integration tests for the public simulation API.
//!
//! These drive the sampler, the source state machine, and the physics
//! step the way the effect loop does, without opening a window.

use image::{Rgba, RgbaImage};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use stipple::prelude::*;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0xface)
}

// ============================================================================
// Sampling
// ============================================================================

#[test]
fn sampled_particles_mirror_the_image() {
    // Opaque left half, transparent right half.
    let mut image = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 0]));
    for y in 0..10 {
        for x in 0..5 {
            image.put_pixel(x, y, Rgba([x as u8 * 10, y as u8 * 10, 200, 255]));
        }
    }
    let config = EffectConfig {
        gap: 1,
        ..EffectConfig::default()
    };

    let particles = sampler::sample(&image, 10, 10, &config, &mut rng());

    // Exactly one particle per opaque pixel, none for transparent ones.
    assert_eq!(particles.len(), 50);
    for p in &particles {
        // Homes sit where the opaque pixels are (offset is zero here).
        assert!(p.home.x < 5.0);
        let x = p.home.x as u8;
        let y = p.home.y as u8;
        assert_eq!(p.color, [x * 10, y * 10, 200]);
    }
}

#[test]
fn two_by_two_square_centers_in_hundred_square_surface() {
    let image = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
    let config = EffectConfig {
        gap: 1,
        ..EffectConfig::default()
    };

    let particles = sampler::sample(&image, 100, 100, &config, &mut rng());

    assert_eq!(particles.len(), 4);
    let mut homes: Vec<(i32, i32)> = particles
        .iter()
        .map(|p| (p.home.x as i32, p.home.y as i32))
        .collect();
    homes.sort();
    assert_eq!(homes, vec![(49, 49), (49, 50), (50, 49), (50, 50)]);
}

// ============================================================================
// Source protocol
// ============================================================================

#[test]
fn resize_replaces_the_batch_from_scratch() {
    let image = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));
    let mut source = ImageSource::from_image(image.clone());
    let config = EffectConfig {
        gap: 1,
        ..EffectConfig::default()
    };

    let first = source
        .resample(40, 40, &config, &mut SmallRng::seed_from_u64(1))
        .unwrap();
    let second = source
        .resample(200, 100, &config, &mut SmallRng::seed_from_u64(2))
        .unwrap();

    // Same count (the image did not change), new homes from the new
    // centering offset only.
    assert_eq!(first.len(), second.len());
    let fresh = sampler::sample(&image, 200, 100, &config, &mut SmallRng::seed_from_u64(2));
    assert_eq!(second, fresh);
}

#[test]
fn unchanged_dimensions_yield_no_second_batch() {
    let mut source = ImageSource::from_image(RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255])));
    let config = EffectConfig::default();

    assert!(source.resample(64, 64, &config, &mut rng()).is_some());
    assert!(source.resample(64, 64, &config, &mut rng()).is_none());
}

#[test]
fn undecodable_source_never_produces_particles() {
    let mut source = ImageSource::from_bytes(b"not an image".to_vec());
    let config = EffectConfig::default();

    for dims in [(100, 100), (50, 50), (100, 100)] {
        assert!(source
            .resample(dims.0, dims.1, &config, &mut rng())
            .is_none());
    }
    assert!(source.is_failed());
}

// ============================================================================
// Physics scenarios
// ============================================================================

#[test]
fn settled_particle_without_gravity_stays_settled() {
    let config = EffectConfig {
        gravity: 0.0,
        flicker_chance: 0.0,
        ..EffectConfig::default()
    };
    let mut particles = vec![Particle::new(
        Vec2::new(33.0, 44.0),
        Vec2::new(33.0, 44.0),
        [7, 7, 7],
    )];

    for _ in 0..100 {
        physics::step(&mut particles, None, &config, &mut rng());
    }

    assert_eq!(particles[0].position, Vec2::new(33.0, 44.0));
}

#[test]
fn scattered_batch_converges_toward_homes() {
    let image = RgbaImage::from_pixel(6, 6, Rgba([100, 150, 200, 255]));
    let config = EffectConfig {
        gap: 1,
        gravity: 0.0,
        flicker_chance: 0.0,
        ..EffectConfig::default()
    };
    let mut rng = rng();
    let mut particles = sampler::sample(&image, 300, 300, &config, &mut rng);

    let initial_spread: f32 = particles
        .iter()
        .map(|p| (p.home - p.position).length())
        .sum();

    for _ in 0..300 {
        physics::step(&mut particles, None, &config, &mut rng);
    }

    let final_spread: f32 = particles
        .iter()
        .map(|p| (p.home - p.position).length())
        .sum();

    assert!(final_spread < initial_spread / 100.0);
}

#[test]
fn cursor_within_radius_displaces_particles() {
    let config = EffectConfig {
        gravity: 0.0,
        flicker_chance: 0.0,
        ..EffectConfig::default()
    };
    let home = Vec2::new(50.0, 50.0);
    let mut particles = vec![Particle::new(home, home, [0, 0, 0])];

    // Park the cursor right next to the settled particle.
    let cursor = Some(Vec2::new(52.0, 50.0));
    physics::step(&mut particles, cursor, &config, &mut rng());

    assert!(particles[0].velocity.x < 0.0, "pushed away from cursor");
}

#[test]
fn cursor_at_particle_position_keeps_state_finite() {
    let config = EffectConfig::default();
    let spot = Vec2::new(10.0, 10.0);
    let mut particles = vec![Particle::new(spot, spot, [0, 0, 0])];

    for _ in 0..10 {
        let cursor = Some(particles[0].position);
        physics::step(&mut particles, cursor, &config, &mut rng());
        assert!(particles[0].position.is_finite());
        assert!(particles[0].velocity.is_finite());
    }
}
