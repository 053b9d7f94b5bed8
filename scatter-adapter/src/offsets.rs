use core::fmt;
use core::str::FromStr;

use scatter::{Error, Result, ScrollProgress};

/// A point along the scroll axis of a box, as a fraction of its size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    /// The leading edge (`0`).
    Start,
    /// The midpoint (`0.5`).
    Center,
    /// The trailing edge (`1`).
    End,
    /// Any point in `[0, 1]`.
    Fraction(f32),
}

impl Edge {
    pub fn fraction(self) -> f32 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
            Self::Fraction(f) => f,
        }
    }
}

impl FromStr for Edge {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            _ => match s.parse::<f32>() {
                Ok(f) if (0.0..=1.0).contains(&f) => Ok(Self::Fraction(f)),
                _ => Err(Error::invalid_scroll_offset(s)),
            },
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Center => f.write_str("center"),
            Self::End => f.write_str("end"),
            Self::Fraction(v) => write!(f, "{v}"),
        }
    }
}

/// "When `target`'s edge meets `viewport`'s edge", written `"<target> <viewport>"`.
///
/// `"start end"` means the region's leading edge meets the viewport's trailing edge, i.e. the
/// region is just about to enter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOffset {
    pub target: Edge,
    pub viewport: Edge,
}

impl ScrollOffset {
    pub const fn new(target: Edge, viewport: Edge) -> Self {
        Self { target, viewport }
    }

    /// The region position (leading edge relative to the viewport's leading edge) at which this
    /// offset is reached.
    fn region_start_at(self, region_size: f32, viewport_size: f32) -> f32 {
        self.viewport.fraction() * viewport_size - self.target.fraction() * region_size
    }
}

impl FromStr for ScrollOffset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let (Some(target), Some(viewport), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::invalid_scroll_offset(s));
        };
        Ok(Self {
            target: target.parse()?,
            viewport: viewport.parse()?,
        })
    }
}

impl fmt::Display for ScrollOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.viewport)
    }
}

/// The tracked region's geometry along the scroll axis, relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Leading edge of the region minus leading edge of the viewport (e.g. a bounding rect's
    /// `top` for vertical scrolling). Decreases as the user scrolls forward.
    pub start: f32,
    pub size: f32,
}

impl Region {
    pub fn new(start: f32, size: f32) -> Self {
        Self { start, size }
    }
}

/// The pair of offsets at which progress is `0` and `1`.
///
/// The default, `["start end", "end start"]`, runs from the region's leading edge reaching the
/// viewport's trailing edge to the region's trailing edge leaving past the viewport's leading
/// edge.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOffsets {
    pub enter: ScrollOffset,
    pub leave: ScrollOffset,
}

impl ScrollOffsets {
    pub const fn new(enter: ScrollOffset, leave: ScrollOffset) -> Self {
        Self { enter, leave }
    }

    /// Normalized progress of `region` through a viewport of `viewport_size`.
    ///
    /// The result is clamped to `[0, 1]`; non-finite geometry yields `0`.
    pub fn progress(&self, region: Region, viewport_size: f32) -> ScrollProgress {
        let from = self.enter.region_start_at(region.size, viewport_size);
        let to = self.leave.region_start_at(region.size, viewport_size);
        let span = from - to;
        if span == 0.0 {
            return if region.start <= to {
                ScrollProgress::END
            } else {
                ScrollProgress::START
            };
        }
        ScrollProgress::new((from - region.start) / span)
    }
}

impl Default for ScrollOffsets {
    fn default() -> Self {
        Self {
            enter: ScrollOffset::new(Edge::Start, Edge::End),
            leave: ScrollOffset::new(Edge::End, Edge::Start),
        }
    }
}
