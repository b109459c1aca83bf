//! Deferred image decoding and the decode-then-sample protocol.
//!
//! An [`ImageSource`] moves through three phases: pending (encoded
//! input not yet decoded), loaded (decoded pixels in hand), failed
//! (decode error, stays empty forever). Sampling runs exactly once per
//! (image, surface dimensions) pair; asking again with unchanged
//! dimensions yields nothing, asking after a dimension change produces
//! a fresh batch computed purely from the new dimensions.
//!
//! Decode failure is silent degradation: a warning is logged and the
//! effect simply never shows particles. Callers that want the error
//! instead can decode eagerly with [`ImageSource::open`].

use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbaImage};
use rand::Rng;

use crate::config::EffectConfig;
use crate::error::SourceError;
use crate::particle::Particle;
use crate::sampler;

enum State {
    /// Encoded input we have not tried to decode yet.
    Pending(Input),
    /// Decoded and ready to sample.
    Loaded(RgbaImage),
    /// Decode failed once; never retried.
    Failed,
}

enum Input {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// A source image for the effect, decoded on first demand.
pub struct ImageSource {
    state: State,
    sampled_for: Option<(u32, u32)>,
}

impl ImageSource {
    /// Decode lazily from a file path when first sampled.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            state: State::Pending(Input::Path(path.into())),
            sampled_for: None,
        }
    }

    /// Decode lazily from encoded image bytes (PNG, JPEG, WebP).
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            state: State::Pending(Input::Bytes(bytes)),
            sampled_for: None,
        }
    }

    /// Use an already-decoded image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            state: State::Loaded(image),
            sampled_for: None,
        }
    }

    /// Decode a file eagerly, surfacing the failure.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let image = image::open(path.as_ref())?.into_rgba8();
        Ok(Self::from_image(image))
    }

    /// Dimensions of the decoded image, if decoding has happened.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match &self.state {
            State::Loaded(image) => Some(image.dimensions()),
            _ => None,
        }
    }

    /// Whether decoding was attempted and failed.
    pub fn is_failed(&self) -> bool {
        matches!(self.state, State::Failed)
    }

    /// Produce the particle batch for the given surface dimensions.
    ///
    /// Returns `Some` exactly once per (image, dimensions) pair: the
    /// first request after load, and the first request after the
    /// dimensions change. `None` means the caller's current set is
    /// already up to date, or the source failed to decode.
    pub fn resample(
        &mut self,
        width: u32,
        height: u32,
        config: &EffectConfig,
        rng: &mut impl Rng,
    ) -> Option<Vec<Particle>> {
        if self.sampled_for == Some((width, height)) {
            return None;
        }

        self.ensure_loaded();
        let image = match &self.state {
            State::Loaded(image) => image,
            _ => return None,
        };

        let batch = sampler::sample(image, width, height, config, rng);
        self.sampled_for = Some((width, height));
        Some(batch)
    }

    fn ensure_loaded(&mut self) {
        let decoded = match &self.state {
            State::Pending(Input::Path(path)) => image::open(path),
            State::Pending(Input::Bytes(bytes)) => image::load_from_memory(bytes),
            _ => return,
        };

        self.state = match decoded.map(DynamicImage::into_rgba8) {
            Ok(image) => {
                log::debug!(
                    "decoded source image ({}x{})",
                    image.width(),
                    image.height()
                );
                State::Loaded(image)
            }
            Err(err) => {
                log::warn!("source image failed to decode, effect will stay empty: {err}");
                State::Failed
            }
        };
    }
}
