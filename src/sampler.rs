//! Image-to-particle sampling.
//!
//! Walks a decoded image on a fixed-stride grid and turns every
//! non-transparent sample into one particle whose home is the sampled
//! pixel, shifted so the image sits centered on the surface.

use glam::Vec2;
use image::RgbaImage;
use rand::Rng;

use crate::config::EffectConfig;
use crate::particle::Particle;

/// Sample `image` into a particle batch for a surface of the given
/// pixel dimensions.
///
/// The image is placed centered; the offset may be negative when the
/// image is larger than the surface, which is allowed and not clamped.
/// A sampled pixel with any alpha at all becomes exactly one particle
/// carrying the pixel's RGB (the alpha itself is discarded - the cutoff
/// is hard, not blended). Spawn positions are scattered uniformly over
/// the surface so fresh batches visibly fly in toward their homes.
///
/// The returned batch is a full replacement for whatever particle set
/// the caller held before.
pub fn sample(
    image: &RgbaImage,
    surface_width: u32,
    surface_height: u32,
    config: &EffectConfig,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    let offset_x = (surface_width as f32 - image.width() as f32) / 2.0;
    let offset_y = (surface_height as f32 - image.height() as f32) / 2.0;

    let stride = config.gap.max(1) as usize;
    let mut particles = Vec::new();

    for y in (0..image.height()).step_by(stride) {
        for x in (0..image.width()).step_by(stride) {
            let [r, g, b, a] = image.get_pixel(x, y).0;
            if a == 0 {
                continue;
            }
            let home = Vec2::new(x as f32 + offset_x, y as f32 + offset_y);
            let spawn = Vec2::new(
                rng.gen::<f32>() * surface_width as f32,
                rng.gen::<f32>() * surface_height as f32,
            );
            particles.push(Particle::new(spawn, home, [r, g, b]));
        }
    }

    particles
}
