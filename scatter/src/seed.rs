use alloc::vec::Vec;

use rand::Rng;

use crate::{CharacterSeed, Error, Result};

/// Symmetric ranges that character seeds are drawn from.
///
/// `dx` and `dy` are drawn uniformly from `[-translate, translate]`, `drotate` from
/// `[-rotate, rotate]` (degrees). Both bounds must lie in `[0, SeedRange::MAX_BOUND]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedRange {
    pub translate: f32,
    pub rotate: f32,
}

impl SeedRange {
    pub const DEFAULT_TRANSLATE: f32 = 200.0;
    pub const DEFAULT_ROTATE: f32 = 180.0;
    /// Largest accepted bound. Uniform float sampling overflows once the span `2 * bound`
    /// (scaled up slightly internally) leaves the finite range.
    pub const MAX_BOUND: f32 = f32::MAX / 4.0;

    pub fn new(translate: f32, rotate: f32) -> Self {
        Self { translate, rotate }
    }

    pub fn validate(&self) -> Result<()> {
        let ok = |v: f32| (0.0..=Self::MAX_BOUND).contains(&v);
        if ok(self.translate) && ok(self.rotate) {
            Ok(())
        } else {
            Err(Error::InvalidSeedRange {
                translate: self.translate,
                rotate: self.rotate,
            })
        }
    }

    pub fn contains(&self, seed: &CharacterSeed) -> bool {
        seed.dx.abs() <= self.translate
            && seed.dy.abs() <= self.translate
            && seed.drotate.abs() <= self.rotate
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CharacterSeed {
        CharacterSeed {
            dx: rng.gen_range(-self.translate..=self.translate),
            dy: rng.gen_range(-self.translate..=self.translate),
            drotate: rng.gen_range(-self.rotate..=self.rotate),
        }
    }

    /// Draws exactly `count` seeds. Call once per mount: the result is meant to be cached for
    /// the lifetime of the text, never regenerated per frame.
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<CharacterSeed> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}

impl Default for SeedRange {
    fn default() -> Self {
        Self {
            translate: Self::DEFAULT_TRANSLATE,
            rotate: Self::DEFAULT_ROTATE,
        }
    }
}

/// Draws `count` seeds from the default range using the thread-local RNG.
#[cfg(feature = "std")]
pub fn generate_seeds(count: usize) -> Vec<CharacterSeed> {
    SeedRange::default().generate(count, &mut rand::thread_rng())
}
