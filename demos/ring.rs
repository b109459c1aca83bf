//! # Ring Demo
//!
//! A procedurally drawn ring scattered into particles, so the demo
//! needs no asset files. Move the cursor through the ring to scatter
//! it; particles spring back and flicker while they settle.
//!
//! Run with: `cargo run --example ring`

use image::{Rgba, RgbaImage};
use stipple::{Effect, ImageSource};

fn main() {
    env_logger::init();

    let size = 320u32;
    let center = size as f32 / 2.0;
    let mut image = RgbaImage::new(size, size);

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let radius = (dx * dx + dy * dy).sqrt();

        if (90.0..140.0).contains(&radius) {
            // Hue varies around the ring.
            let angle = dy.atan2(dx);
            let red = (127.0 + 127.0 * angle.cos()) as u8;
            let blue = (127.0 + 127.0 * angle.sin()) as u8;
            *pixel = Rgba([red, 90, blue, 255]);
        }
    }

    Effect::new(ImageSource::from_image(image))
        .with_gap(2)
        .with_flicker_chance(0.05)
        .with_cursor_radius(100.0)
        .with_title("stipple - ring")
        .run()
        .expect("effect failed to start");
}
