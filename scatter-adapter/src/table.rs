use alloc::borrow::Cow;
use alloc::vec::Vec;

use scatter::{Error, Result};

/// One display string of a [`TranslationTable`], keyed by language code.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Translation {
    pub code: Cow<'static, str>,
    pub text: Cow<'static, str>,
}

impl Translation {
    pub fn new(code: impl Into<Cow<'static, str>>, text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            text: text.into(),
        }
    }
}

const HELLO: [(&str, &str); 10] = [
    ("en", "Hello"),
    ("hi", "नमस्ते"),
    ("es", "Hola"),
    ("fr", "Bonjour"),
    ("de", "Hallo"),
    ("zh", "你好"),
    ("ja", "こんにちは"),
    ("ru", "Здравствуйте"),
    ("gu", "હેલો"),
    ("th", "สวัสดี"),
];

/// An ordered, non-empty mapping from language code to display string.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Translation>", into = "Vec<Translation>"))]
pub struct TranslationTable {
    entries: Vec<Translation>,
}

impl TranslationTable {
    /// Builds a table, preserving entry order. Fails on an empty table.
    pub fn new(entries: impl IntoIterator<Item = Translation>) -> Result<Self> {
        let entries: Vec<_> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(Error::EmptyTranslationTable);
        }
        Ok(Self { entries })
    }

    /// "Hello" in ten languages, starting with English.
    pub fn hello() -> Self {
        Self {
            entries: HELLO
                .iter()
                .map(|&(code, text)| Translation::new(code, text))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: empty tables are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&Translation> {
        self.entries.get(index)
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|t| t.code == code)
            .map(|t| t.text.as_ref())
    }

    pub fn position(&self, code: &str) -> Option<usize> {
        self.entries.iter().position(|t| t.code == code)
    }

    pub fn as_slice(&self) -> &[Translation] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Translation> {
        self.entries.iter()
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::hello()
    }
}

impl TryFrom<Vec<Translation>> for TranslationTable {
    type Error = Error;

    fn try_from(entries: Vec<Translation>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<TranslationTable> for Vec<Translation> {
    fn from(table: TranslationTable) -> Self {
        table.entries
    }
}
