//! Character-level Unicode classification for Han text and its romanization.

/// CJK Unified Ideographs plus the extension blocks that show up in
/// Taiwanese Hokkien writing (本字 such as 𪜶 live in Extension B).
pub fn is_hanji(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{20000}'..='\u{2A6DF}'
        | '\u{2A700}'..='\u{2B73F}'
        | '\u{2B740}'..='\u{2B81F}'
        | '\u{2B820}'..='\u{2CEAF}'
        | '\u{F900}'..='\u{FAFF}'
    )
}

/// Combining diacritics used for tone marks in decomposed POJ / Tâi-lô
/// (e.g. the vertical line above in "a̍").
pub fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// A character that belongs to the romanization alphabet: Latin letters
/// (accented ones included), tone digits, combining tone marks and the
/// POJ nasal marker ⁿ.
pub fn is_lomaji_char(c: char) -> bool {
    is_latin_letter(c) || c.is_ascii_digit() || is_combining_mark(c) || c == 'ⁿ'
}

/// Letters of the Latin blocks: Basic Latin, Latin-1, Extended-A/B and
/// Latin Extended Additional (precomposed forms such as "ṳ" or "ō").
fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || (matches!(c, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}')
            && c != '×'
            && c != '÷')
}

/// A plain Arabic-numeral string ("3", "2024").
pub fn is_numeral(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// True if `s` is non-empty and its last character is a romanization
/// character. Used to decide whether a hyphen is shown at a junction.
pub fn ends_with_lomaji(s: &str) -> bool {
    s.chars().last().is_some_and(is_lomaji_char)
}

/// Punctuation that stands on its own in both scripts.
pub fn is_punctuation(c: char) -> bool {
    (c.is_ascii_punctuation() && c != '-')
        || matches!(
            c,
            '，' | '。' | '、' | '；' | '：' | '？' | '！' | '「' | '」' | '『' | '』' | '（'
                | '）' | '《' | '》' | '…' | '─' | '—'
        )
}
