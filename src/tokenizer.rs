pub mod character_tokenizer;
pub mod line_tokenizer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use character_tokenizer::character_tokenizer;
use line_tokenizer::line_tokenizer;

/// The atomic unit at which two sources are compared.
///
/// Character granularity splits a source into Unicode scalar values; line
/// granularity splits it into lines with each line's own terminator kept
/// attached. Either way, concatenating the units reproduces the source
/// byte-for-byte.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Character,
    Line,
}

impl Granularity {
    /// Split `text` into units at this granularity.
    #[must_use]
    pub fn split(self, text: &str) -> Vec<String> {
        match self {
            Granularity::Character => character_tokenizer(text),
            Granularity::Line => line_tokenizer(text),
        }
    }
}
