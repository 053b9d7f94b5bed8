use alloc::string::String;

use crate::{InterpolationPolicy, Result, SeedRange};

/// Configuration for [`crate::ScatterText`].
///
/// The text is segmented once when the engine is built; changing it means building a new engine
/// (a new mount), which also draws fresh seeds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScatterOptions {
    pub text: String,
    pub policy: InterpolationPolicy,
    pub seed_range: SeedRange,
}

impl ScatterOptions {
    /// Options for `text` with the default policy (`LinearConvergeFast`, speed factor 2) and
    /// seed ranges of ±200px / ±180°.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            policy: InterpolationPolicy::default(),
            seed_range: SeedRange::default(),
        }
    }

    pub fn with_policy(mut self, policy: InterpolationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shorthand for `with_policy(InterpolationPolicy::LinearConvergeFast { speed_factor })`.
    pub fn with_speed_factor(self, speed_factor: f32) -> Self {
        self.with_policy(InterpolationPolicy::linear_converge_fast(speed_factor))
    }

    pub fn with_seed_range(mut self, seed_range: SeedRange) -> Self {
        self.seed_range = seed_range;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.policy.validate()?;
        self.seed_range.validate()
    }
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self::new(String::new())
    }
}
