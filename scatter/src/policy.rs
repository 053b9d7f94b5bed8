use core::fmt;
use core::str::FromStr;

use crate::stops::{interpolate, lerp};
use crate::{CharacterSeed, CharacterTransform, Error, Result, ScrollProgress};

/// Default `speed_factor` for [`InterpolationPolicy::LinearConvergeFast`].
pub const DEFAULT_SPEED_FACTOR: f32 = 2.0;

/// Opacity stops of [`InterpolationPolicy::WindowedPeak`].
///
/// Both stops are `1`, so opacity is flat at `1` everywhere. Suspect (a fade window was likely
/// intended), but kept as-is.
const WINDOWED_PEAK_OPACITY: [(f32, f32); 2] = [(0.1, 1.0), (0.3, 1.0)];

const CONVERGE_FROM_START_OPACITY: [(f32, f32); 2] = [(0.1, 0.0), (0.5, 1.0)];

/// How scroll progress maps onto a character's transform.
///
/// Every policy is a pure function of `(progress, seed)`: the same arguments always produce the
/// same transform, and progress is clamped to `[0, 1]` before evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum InterpolationPolicy {
    /// Converges linearly from the seed offset to zero, reaching it at
    /// `progress = 1 / speed_factor`. Opacity ramps in lockstep.
    LinearConvergeFast { speed_factor: f32 },
    /// Starts settled, peaks at the full seed offset at `progress = 0.25`, and is settled again
    /// from `progress = 0.5` on.
    WindowedPeak,
    /// Starts at the full seed offset and settles at `progress = 0.5`. Opacity ramps `0 -> 1`
    /// over `progress` in `[0.1, 0.5]`.
    ConvergeFromStart,
}

impl InterpolationPolicy {
    pub fn linear_converge_fast(speed_factor: f32) -> Self {
        Self::LinearConvergeFast { speed_factor }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::LinearConvergeFast { .. } => "linear-converge-fast",
            Self::WindowedPeak => "windowed-peak",
            Self::ConvergeFromStart => "converge-from-start",
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Self::LinearConvergeFast { speed_factor } = *self {
            if !speed_factor.is_finite() || speed_factor < 1.0 {
                return Err(Error::InvalidSpeedFactor(speed_factor));
            }
        }
        Ok(())
    }

    /// The smallest progress from which every character is settled.
    pub fn settle_progress(&self) -> ScrollProgress {
        match *self {
            Self::LinearConvergeFast { speed_factor } => {
                ScrollProgress::new(1.0 / effective_speed_factor(speed_factor))
            }
            Self::WindowedPeak | Self::ConvergeFromStart => ScrollProgress::new(0.5),
        }
    }

    /// Computes the transform of a character with `seed` at `progress`.
    pub fn map(
        &self,
        progress: impl Into<ScrollProgress>,
        seed: CharacterSeed,
    ) -> CharacterTransform {
        let p = progress.into().get();
        match *self {
            Self::LinearConvergeFast { speed_factor } => {
                let t = (p * effective_speed_factor(speed_factor)).min(1.0);
                CharacterTransform {
                    translate_x: lerp(seed.dx, 0.0, t),
                    translate_y: lerp(seed.dy, 0.0, t),
                    rotate_deg: lerp(seed.drotate, 0.0, t),
                    opacity: t,
                }
            }
            Self::WindowedPeak => {
                let peak = |v: f32| interpolate(p, &[(0.0, 0.0), (0.25, v), (0.5, 0.0)]);
                CharacterTransform {
                    translate_x: peak(seed.dx),
                    translate_y: peak(seed.dy),
                    rotate_deg: peak(seed.drotate),
                    opacity: interpolate(p, &WINDOWED_PEAK_OPACITY),
                }
            }
            Self::ConvergeFromStart => {
                let converge = |v: f32| interpolate(p, &[(0.0, v), (0.5, 0.0), (1.0, 0.0)]);
                CharacterTransform {
                    translate_x: converge(seed.dx),
                    translate_y: converge(seed.dy),
                    rotate_deg: converge(seed.drotate),
                    opacity: interpolate(p, &CONVERGE_FROM_START_OPACITY),
                }
            }
        }
    }
}

impl Default for InterpolationPolicy {
    fn default() -> Self {
        Self::LinearConvergeFast {
            speed_factor: DEFAULT_SPEED_FACTOR,
        }
    }
}

impl fmt::Display for InterpolationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a policy name (`linear-converge-fast`, `windowed-peak`, `converge-from-start`).
///
/// Matching ignores ASCII case and treats `_` like `-`, so `LINEAR_CONVERGE_FAST` also parses.
/// `linear-converge-fast` gets [`DEFAULT_SPEED_FACTOR`].
impl FromStr for InterpolationPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if same_name(s, "linear-converge-fast") {
            Ok(Self::default())
        } else if same_name(s, "windowed-peak") {
            Ok(Self::WindowedPeak)
        } else if same_name(s, "converge-from-start") {
            Ok(Self::ConvergeFromStart)
        } else {
            Err(Error::unknown_policy(s))
        }
    }
}

fn same_name(input: &str, canonical: &str) -> bool {
    input.len() == canonical.len()
        && input.bytes().zip(canonical.bytes()).all(|(a, b)| {
            let a = if a == b'_' { b'-' } else { a.to_ascii_lowercase() };
            a == b
        })
}

// Unvalidated policies still map sanely: anything below 1 (or non-finite) behaves like 1.
fn effective_speed_factor(speed_factor: f32) -> f32 {
    if speed_factor.is_finite() {
        speed_factor.max(1.0)
    } else {
        1.0
    }
}
