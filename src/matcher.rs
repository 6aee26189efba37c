//! Correspondence check: may this Han character be read as this syllable?
//!
//! A pair is first turned into a [`TrialPairing`]. Pairs whose character
//! classes cannot go together never reach the rules; they are reported and
//! treated as non-matching. Valid pairings run through an ordered list of
//! [`MatchRule`]s and are accepted as soon as one rule says yes.

use tracing::warn;
use unicode_normalization::UnicodeNormalization;

use crate::dict::{self, CorrespondenceDictionary};
use crate::settings::settings;
use crate::unicode::is_numeral;

/// Caller-supplied extra acceptance rule.
pub type CustomAccept<'a> = &'a (dyn Fn(&TrialPairing) -> bool + Sync);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairingError {
    #[error("empty unit in pairing ({hanji:?}, {lomaji:?})")]
    Empty { hanji: String, lomaji: String },
    #[error("{hanji:?} cannot be read as {lomaji:?}: {reason}")]
    Incompatible {
        hanji: String,
        lomaji: String,
        reason: &'static str,
    },
}

/// A candidate (Han character, pronunciation) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialPairing {
    pub hanji: String,
    pub lomaji: String,
    /// `lomaji` in the form used for dictionary lookup: NFC, and lowercased
    /// unless case is significant.
    pub pronunciation: String,
}

impl TrialPairing {
    pub fn new(hanji: &str, lomaji: &str, ignore_case: bool) -> Result<Self, PairingError> {
        if hanji.is_empty() || lomaji.is_empty() {
            return Err(PairingError::Empty {
                hanji: hanji.to_string(),
                lomaji: lomaji.to_string(),
            });
        }
        let incompatible = |reason| PairingError::Incompatible {
            hanji: hanji.to_string(),
            lomaji: lomaji.to_string(),
            reason,
        };
        if is_numeral(lomaji) && !is_numeral(hanji) {
            return Err(incompatible("bare digits are not a pronunciation"));
        }
        if is_numeral(hanji) && !lomaji.chars().any(char::is_alphanumeric) {
            return Err(incompatible("numeral paired with a symbol"));
        }

        let composed: String = lomaji.nfc().collect();
        let pronunciation = if ignore_case {
            composed.to_lowercase()
        } else {
            composed
        };
        Ok(Self {
            hanji: hanji.to_string(),
            lomaji: lomaji.to_string(),
            pronunciation,
        })
    }
}

/// One independent acceptance rule.
pub trait MatchRule: Send + Sync {
    fn accepts(&self, pairing: &TrialPairing) -> bool;
}

/// Accepts pairings the correspondence dictionary knows.
pub struct DictionaryRule<'a> {
    dict: &'a dyn CorrespondenceDictionary,
}

impl<'a> DictionaryRule<'a> {
    pub fn new(dict: &'a dyn CorrespondenceDictionary) -> Self {
        Self { dict }
    }
}

impl MatchRule for DictionaryRule<'_> {
    fn accepts(&self, pairing: &TrialPairing) -> bool {
        self.dict.contains(&pairing.hanji, &pairing.pronunciation)
    }
}

/// Accepts textually identical units (punctuation, embedded Latin words),
/// except two identical digit strings.
pub struct IdentityRule;

impl MatchRule for IdentityRule {
    fn accepts(&self, pairing: &TrialPairing) -> bool {
        pairing.hanji == pairing.lomaji
            && !(is_numeral(&pairing.hanji) && is_numeral(&pairing.lomaji))
    }
}

/// Wraps a caller-supplied predicate.
pub struct CustomRule<'a> {
    accept: CustomAccept<'a>,
}

impl<'a> CustomRule<'a> {
    pub fn new(accept: CustomAccept<'a>) -> Self {
        Self { accept }
    }
}

impl MatchRule for CustomRule<'_> {
    fn accepts(&self, pairing: &TrialPairing) -> bool {
        (self.accept)(pairing)
    }
}

/// An ordered list of match rules applied with short-circuit OR.
pub struct Matcher<'a> {
    rules: Vec<Box<dyn MatchRule + 'a>>,
    ignore_case: bool,
}

impl<'a> Matcher<'a> {
    /// Dictionary rule followed by the identity rule, optionally followed
    /// by `custom`.
    pub fn new(dict: &'a dyn CorrespondenceDictionary, custom: Option<CustomAccept<'a>>) -> Self {
        let mut rules: Vec<Box<dyn MatchRule + 'a>> =
            vec![Box::new(DictionaryRule::new(dict)), Box::new(IdentityRule)];
        if let Some(accept) = custom {
            rules.push(Box::new(CustomRule::new(accept)));
        }
        Self {
            rules,
            ignore_case: settings().matching.ignore_case,
        }
    }

    /// A matcher backed by the built-in dictionary.
    pub fn builtin(custom: Option<CustomAccept<'a>>) -> Self {
        Self::new(dict::builtin(), custom)
    }

    /// A matcher with no rules at all; useful as a base for `with_rule`.
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            ignore_case: settings().matching.ignore_case,
        }
    }

    pub fn with_rule(mut self, rule: impl MatchRule + 'a) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn matches(&self, hanji: &str, lomaji: &str) -> bool {
        match TrialPairing::new(hanji, lomaji, self.ignore_case) {
            Ok(pairing) => self.rules.iter().any(|rule| rule.accepts(&pairing)),
            Err(e) => {
                warn!(error = %e, "incompatible trial pairing");
                false
            }
        }
    }
}

/// Check one pair against the built-in dictionary.
pub fn matches(hanji: &str, lomaji: &str, custom: Option<CustomAccept<'_>>) -> bool {
    Matcher::builtin(custom).matches(hanji, lomaji)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::ReadingDictionary;

    #[test]
    fn test_dictionary_match() {
        assert!(matches("我", "guá", None));
        assert!(matches("姑", "koo", None));
        assert!(!matches("好", "bái", None));
    }

    #[test]
    fn test_ignore_case_by_default() {
        assert!(matches("我", "Guá", None));
        let dict = ReadingDictionary::from_entries([("我", "guá")]);
        let strict = Matcher::new(&dict, None).ignore_case(false);
        assert!(!strict.matches("我", "Guá"));
        assert!(strict.matches("我", "guá"));
    }

    #[test]
    fn test_identity_rule() {
        assert!(matches("，", "，", None));
        assert!(matches("khah", "khah", None));
        assert!(!matches("3", "3", None), "identical numerals are not a reading");
    }

    #[test]
    fn test_incompatible_pairing_is_non_match() {
        assert!(!matches("好", "3", None));
        assert!(!matches("3", ",", None));
        assert!(!matches("", "guá", None));
        // Even a permissive custom rule never sees an invalid pairing.
        let always = |_: &TrialPairing| true;
        assert!(!matches("好", "3", Some(&always)));
    }

    #[test]
    fn test_identical_ideographs_match() {
        assert!(matches("好", "好", None));
        assert!(matches("𪜶", "𪜶", None));
        assert!(!matches("好", "我", None));
    }

    #[test]
    fn test_pronunciation_is_composed() {
        let pairing = TrialPairing::new("五", "Go\u{0304}o", true).unwrap();
        assert_eq!(pairing.pronunciation, "gōo");
        assert!(matches("五", "go\u{0304}o", None));
        assert!(matches("五", "gōo", None));
    }

    #[test]
    fn test_trial_pairing_errors() {
        assert!(matches!(
            TrialPairing::new("", "a", true),
            Err(PairingError::Empty { .. })
        ));
        assert!(matches!(
            TrialPairing::new("好", "12", true),
            Err(PairingError::Incompatible { .. })
        ));
        let pairing = TrialPairing::new("3", "sann", true).unwrap();
        assert_eq!(pairing.pronunciation, "sann");
    }

    #[test]
    fn test_custom_rule() {
        let accept_bai = |p: &TrialPairing| p.hanji == "好" && p.pronunciation == "bái";
        assert!(matches("好", "bái", Some(&accept_bai)));
        assert!(!matches("我", "bái", Some(&accept_bai)));
    }

    #[test]
    fn test_rules_are_ordered_and_short_circuit() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct Counting<'c>(&'c AtomicUsize);
        impl MatchRule for Counting<'_> {
            fn accepts(&self, _: &TrialPairing) -> bool {
                self.0.fetch_add(1, Ordering::SeqCst);
                false
            }
        }

        let calls = AtomicUsize::new(0);
        let matcher = Matcher::empty()
            .with_rule(IdentityRule)
            .with_rule(Counting(&calls));
        assert!(matcher.matches("khah", "khah"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!matcher.matches("我", "guá"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
