//! A headless engine for scroll-driven text scatter effects.
//!
//! Each character of a text starts from its own random offset (translation + rotation) and
//! moves toward its resting place as the tracked region scrolls through the viewport. For smooth
//! frame-rate rendering the engine:
//! - segments the text and draws the per-character seeds once, at construction
//! - derives every transform as a pure function of `(progress, seed, policy)`
//! - exposes zero-allocation iteration over the current frame
//!
//! It is UI-agnostic. A host/adapter layer is expected to provide the normalized scroll
//! progress in `[0, 1]`. For progress measurement, subscriptions and the translation cycler,
//! see the `scatter-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod error;
mod glyph;
mod options;
mod policy;
mod seed;
mod stops;
mod types;

#[cfg(test)]
mod tests;

pub use engine::{OnChangeCallback, ScatterText};
pub use error::{Error, Result};
pub use glyph::{Glyph, NBSP, segment};
pub use options::ScatterOptions;
pub use policy::{DEFAULT_SPEED_FACTOR, InterpolationPolicy};
#[cfg(feature = "std")]
pub use seed::generate_seeds;
pub use seed::SeedRange;
pub use stops::interpolate;
pub use types::{CharacterSeed, CharacterTransform, GlyphFrame, ScrollProgress};
