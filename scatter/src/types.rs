use alloc::format;
use alloc::string::String;

use crate::Glyph;

/// Normalized scroll progress of the tracked region through the viewport.
///
/// Always within `[0, 1]`: [`ScrollProgress::new`] clamps, and `NaN` maps to `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f32", into = "f32"))]
pub struct ScrollProgress(f32);

impl ScrollProgress {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl From<f32> for ScrollProgress {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<ScrollProgress> for f32 {
    fn from(value: ScrollProgress) -> Self {
        value.0
    }
}

/// Per-character random displacement: the offset a character starts from before it settles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSeed {
    pub dx: f32,
    pub dy: f32,
    /// Rotation offset in degrees.
    pub drotate: f32,
}

impl CharacterSeed {
    /// The seed used for characters that have none; such characters are always settled.
    pub const ZERO: Self = Self {
        dx: 0.0,
        dy: 0.0,
        drotate: 0.0,
    };

    pub fn new(dx: f32, dy: f32, drotate: f32) -> Self {
        Self { dx, dy, drotate }
    }
}

/// The live visual transform of one character for the current progress.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotate_deg: f32,
    /// In `[0, 1]`.
    pub opacity: f32,
}

impl CharacterTransform {
    /// Zero offset, zero rotation, fully opaque.
    pub const SETTLED: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        rotate_deg: 0.0,
        opacity: 1.0,
    };

    pub fn is_settled(&self) -> bool {
        *self == Self::SETTLED
    }

    /// Formats the geometric part as a CSS transform, e.g. `translate(50px, -25px) rotate(15deg)`.
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) rotate({}deg)",
            self.translate_x, self.translate_y, self.rotate_deg
        )
    }
}

impl Default for CharacterTransform {
    fn default() -> Self {
        Self::SETTLED
    }
}

/// One rendered character of a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphFrame {
    pub index: usize,
    pub glyph: Glyph,
    pub transform: CharacterTransform,
}
