use serde::{Deserialize, Serialize};

/// Position of a romanized syllable within its word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WordPosition {
    /// First syllable of a word.
    #[default]
    Head,
    /// Continuation joined by a single hyphen.
    Linked,
    /// Toneless continuation joined by a double hyphen.
    LightTone,
}

/// One atomic symbol of either input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedUnit {
    pub text: String,
    pub tag: WordPosition,
}

impl TaggedUnit {
    pub fn new(text: impl Into<String>, tag: WordPosition) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }

    /// A Han unit; the tag is never consulted.
    pub fn hanji(text: impl Into<String>) -> Self {
        Self::new(text, WordPosition::Head)
    }
}

/// One position of an alignment.
///
/// `han` or `roman` is empty when the position is a one-sided skip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedUnit {
    pub han: String,
    pub roman: String,
    pub tag: WordPosition,
    pub matched: bool,
}

impl AlignedUnit {
    pub fn is_paired(&self) -> bool {
        !self.han.is_empty() && !self.roman.is_empty()
    }
}
