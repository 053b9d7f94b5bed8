use alloc::string::String;

/// Convenience result type used across the scatter crates.
pub type Result<T> = core::result::Result<T, Error>;

/// Configuration errors.
///
/// Only construction and reconfiguration can fail. Per-frame work (mapping, frame production,
/// cycler ticks, teardown) degrades instead of erroring.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum Error {
    /// `speed_factor` must be finite and at least 1.
    #[error("invalid speed factor {0}: must be finite and >= 1")]
    InvalidSpeedFactor(f32),

    /// Seed ranges must be finite and non-negative.
    #[error("invalid seed range (translate={translate}, rotate={rotate})")]
    InvalidSeedRange { translate: f32, rotate: f32 },

    /// A translation table needs at least one entry.
    #[error("translation table has no entries")]
    EmptyTranslationTable,

    /// The cycle period must be non-zero.
    #[error("cycle period must be greater than 0 ms")]
    InvalidCyclePeriod,

    /// An unknown interpolation policy name.
    #[error("unknown interpolation policy: {0}")]
    UnknownPolicy(String),

    /// An unparsable scroll offset such as `"top end"`.
    #[error("invalid scroll offset: {0}")]
    InvalidScrollOffset(String),
}

impl Error {
    /// Build an [`Error::UnknownPolicy`] value.
    pub fn unknown_policy(name: impl Into<String>) -> Self {
        Self::UnknownPolicy(name.into())
    }

    /// Build an [`Error::InvalidScrollOffset`] value.
    pub fn invalid_scroll_offset(msg: impl Into<String>) -> Self {
        Self::InvalidScrollOffset(msg.into())
    }
}
