use alloc::vec::Vec;

/// Rendered in place of a plain space so layout keeps it as a visible box.
pub const NBSP: char = '\u{00A0}';

/// One atomic display unit of the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph(pub char);

impl Glyph {
    pub fn char(self) -> char {
        self.0
    }

    pub fn is_space(self) -> bool {
        self.0 == ' '
    }

    /// The character to render: spaces become [`NBSP`], everything else is unchanged.
    pub fn display(self) -> char {
        if self.is_space() { NBSP } else { self.0 }
    }
}

/// Splits `text` into one glyph per `char`, spaces included.
pub fn segment(text: &str) -> Vec<Glyph> {
    text.chars().map(Glyph).collect()
}
