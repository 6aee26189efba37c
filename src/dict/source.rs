//! Plain-text dictionary source.
//!
//! One entry per line: `hanji<TAB>lomaji`. The Han side may be a whole word
//! as long as it has exactly one character per romanized syllable; each
//! character/syllable pair becomes one reading. Blank lines and lines
//! starting with `#` are ignored.

use std::fs;
use std::path::Path;

use super::{DictError, ReadingDictionary};
use crate::segment::{segment_hanji, segment_lomaji};

pub fn parse_tsv(text: &str) -> Result<ReadingDictionary, DictError> {
    let mut dict = ReadingDictionary::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((hanji, lomaji)) = line.split_once('\t') else {
            return Err(DictError::Parse {
                line: line_no,
                reason: "expected hanji<TAB>lomaji".to_string(),
            });
        };

        let chars = segment_hanji(hanji.trim());
        let syllables = segment_lomaji(lomaji.trim());
        if chars.is_empty() || chars.len() != syllables.len() {
            return Err(DictError::Parse {
                line: line_no,
                reason: format!(
                    "{} characters but {} syllables in {:?}",
                    chars.len(),
                    syllables.len(),
                    line
                ),
            });
        }

        for (ch, syllable) in chars.iter().zip(&syllables) {
            dict.insert(ch.text.as_str(), syllable.text.to_lowercase());
        }
    }

    Ok(dict)
}

pub fn read_tsv(path: &Path) -> Result<ReadingDictionary, DictError> {
    let text = fs::read_to_string(path)?;
    parse_tsv(&text)
}
