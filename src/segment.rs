//! Default segmentation of raw strings into tagged units.
//!
//! Han text is split per character. Romanized text is split into words on
//! whitespace and into syllables on hyphens; a syllable after a double
//! hyphen is a light-tone continuation. Punctuation is split off as its own
//! word in both scripts so it can pair with itself.

use crate::types::{TaggedUnit, WordPosition};
use crate::unicode::{is_hanji, is_punctuation};

/// One unit per non-whitespace character. Runs of romanization letters or
/// digits embedded in Han text (e.g. "3") stay together as one unit.
pub fn segment_hanji(text: &str) -> Vec<TaggedUnit> {
    let mut units = Vec::new();
    let mut run = String::new();

    for ch in text.chars() {
        if ch.is_whitespace() || is_hanji(ch) || is_punctuation(ch) || ch == '-' {
            if !run.is_empty() {
                units.push(TaggedUnit::hanji(std::mem::take(&mut run)));
            }
            if !ch.is_whitespace() && ch != '-' {
                units.push(TaggedUnit::hanji(ch.to_string()));
            }
        } else {
            run.push(ch);
        }
    }
    if !run.is_empty() {
        units.push(TaggedUnit::hanji(run));
    }
    units
}

/// Split romanized text into syllables tagged with their word position.
pub fn segment_lomaji(text: &str) -> Vec<TaggedUnit> {
    let mut units = Vec::new();
    for word in text.split_whitespace() {
        segment_word(word, &mut units);
    }
    units
}

fn segment_word(word: &str, units: &mut Vec<TaggedUnit>) {
    let mut pending = PendingSyllable::default();

    for ch in word.chars() {
        if ch == '-' {
            pending.flush(units);
            pending.hyphens += 1;
        } else if is_punctuation(ch) {
            pending.flush(units);
            units.push(TaggedUnit::new(ch.to_string(), WordPosition::Head));
            pending = PendingSyllable::default();
        } else {
            pending.text.push(ch);
        }
    }
    pending.flush(units);
}

struct PendingSyllable {
    text: String,
    /// Hyphens seen since the last emitted syllable.
    hyphens: usize,
    at_word_start: bool,
}

impl Default for PendingSyllable {
    fn default() -> Self {
        Self {
            text: String::new(),
            hyphens: 0,
            at_word_start: true,
        }
    }
}

impl PendingSyllable {
    fn flush(&mut self, units: &mut Vec<TaggedUnit>) {
        if self.text.is_empty() {
            return;
        }
        let tag = if self.hyphens >= 2 {
            WordPosition::LightTone
        } else if self.at_word_start {
            WordPosition::Head
        } else {
            WordPosition::Linked
        };
        units.push(TaggedUnit::new(std::mem::take(&mut self.text), tag));
        self.hyphens = 0;
        self.at_word_start = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WordPosition::*;

    fn tags(units: &[TaggedUnit]) -> Vec<(&str, WordPosition)> {
        units.iter().map(|u| (u.text.as_str(), u.tag)).collect()
    }

    #[test]
    fn test_segment_hanji_per_char() {
        let units = segment_hanji("我愛 台灣");
        let texts: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(texts, vec!["我", "愛", "台", "灣"]);
    }

    #[test]
    fn test_segment_hanji_keeps_latin_runs() {
        let units = segment_hanji("3點khah早");
        let texts: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(texts, vec!["3", "點", "khah", "早"]);
    }

    #[test]
    fn test_segment_hanji_punctuation() {
        let units = segment_hanji("好，");
        let texts: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(texts, vec!["好", "，"]);
    }

    #[test]
    fn test_segment_lomaji_words_and_links() {
        let units = segment_lomaji("guá ài koo-niû");
        assert_eq!(
            tags(&units),
            vec![
                ("guá", Head),
                ("ài", Head),
                ("koo", Head),
                ("niû", Linked)
            ]
        );
    }

    #[test]
    fn test_segment_lomaji_light_tone() {
        let units = segment_lomaji("tsáu--tshut-khì");
        assert_eq!(
            tags(&units),
            vec![("tsáu", Head), ("tshut", LightTone), ("khì", Linked)]
        );
    }

    #[test]
    fn test_segment_lomaji_leading_double_hyphen() {
        let units = segment_lomaji("khì --ah");
        assert_eq!(tags(&units), vec![("khì", Head), ("ah", LightTone)]);
    }

    #[test]
    fn test_segment_lomaji_punctuation() {
        let units = segment_lomaji("Hó, lí-hó.");
        assert_eq!(
            tags(&units),
            vec![
                ("Hó", Head),
                (",", Head),
                ("lí", Head),
                ("hó", Linked),
                (".", Head)
            ]
        );
    }

    #[test]
    fn test_segment_empty() {
        assert!(segment_hanji("").is_empty());
        assert!(segment_lomaji("   ").is_empty());
    }
}
