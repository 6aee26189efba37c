//! Regroup a flat alignment into displayed words.
//!
//! A new word starts at every `Head` unit. Between syllables of one word a
//! filler cell carries the hyphen, shown on a side only when the syllables
//! on both sides of the junction are romanized there; ideograph junctions
//! get the placeholder instead.

use serde::Serialize;

use crate::settings::{settings, GroupingSettings};
use crate::types::{AlignedUnit, WordPosition};
use crate::unicode::ends_with_lomaji;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CellKind {
    Syllable,
    Filler,
}

/// One display cell: a Han text over its romanization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub han: String,
    pub roman: String,
    pub tag: WordPosition,
    pub matched: bool,
    pub kind: CellKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordGroup {
    pub cells: Vec<Cell>,
}

impl WordGroup {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn syllables(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.kind == CellKind::Syllable)
    }
}

/// Group with the global grouping settings.
pub fn group(units: &[AlignedUnit]) -> Vec<WordGroup> {
    group_with(units, &settings().grouping)
}

pub fn group_with(units: &[AlignedUnit], config: &GroupingSettings) -> Vec<WordGroup> {
    let mut groups = Vec::new();
    let mut current = WordGroup::default();
    let mut prev_han_is_latin = false;
    let mut prev_roman_is_latin = false;

    let or_placeholder = |text: &str| -> String {
        if text.is_empty() {
            config.placeholder.clone()
        } else {
            text.to_string()
        }
    };

    for unit in units {
        let han_is_latin = ends_with_lomaji(&unit.han);
        let roman_is_latin = ends_with_lomaji(&unit.roman);

        match config.separator(unit.tag) {
            None => {
                if !current.is_empty() {
                    groups.push(std::mem::take(&mut current));
                }
            }
            Some(separator) => {
                let side = |show: bool| {
                    if show {
                        separator.to_string()
                    } else {
                        config.placeholder.clone()
                    }
                };
                current.cells.push(Cell {
                    han: side(han_is_latin && prev_han_is_latin),
                    roman: side(roman_is_latin && prev_roman_is_latin),
                    tag: unit.tag,
                    matched: true,
                    kind: CellKind::Filler,
                });
            }
        }

        current.cells.push(Cell {
            han: or_placeholder(&unit.han),
            roman: or_placeholder(&unit.roman),
            tag: unit.tag,
            matched: unit.matched,
            kind: CellKind::Syllable,
        });

        prev_han_is_latin = han_is_latin;
        prev_roman_is_latin = roman_is_latin;
    }

    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aligner::align;
    use crate::segment::{segment_hanji, segment_lomaji};
    use WordPosition::*;

    const NBSP: &str = "\u{00A0}";

    fn unit(han: &str, roman: &str, tag: WordPosition) -> AlignedUnit {
        AlignedUnit {
            han: han.to_string(),
            roman: roman.to_string(),
            tag,
            matched: true,
        }
    }

    fn pairs(group: &WordGroup) -> Vec<(&str, &str)> {
        group
            .cells
            .iter()
            .map(|c| (c.han.as_str(), c.roman.as_str()))
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(group(&[]).is_empty());
    }

    #[test]
    fn test_single_unit() {
        let groups = group(&align(&segment_hanji("我"), &segment_lomaji("guá"), None));
        assert_eq!(groups.len(), 1);
        assert_eq!(pairs(&groups[0]), vec![("我", "guá")]);
        assert!(groups[0].cells[0].matched);
    }

    #[test]
    fn test_han_side_never_hyphenated() {
        let groups = group(&[unit("姑", "koo", Head), unit("娘", "niû", Linked)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(
            pairs(&groups[0]),
            vec![("姑", "koo"), (NBSP, "-"), ("娘", "niû")]
        );
        assert_eq!(groups[0].cells[1].kind, CellKind::Filler);
        assert!(groups[0].cells[1].matched);
    }

    #[test]
    fn test_latin_on_both_sides() {
        let groups = group(&[unit("khah", "khah", Head), unit("kín", "kín", Linked)]);
        assert_eq!(
            pairs(&groups[0]),
            vec![("khah", "khah"), ("-", "-"), ("kín", "kín")]
        );
    }

    #[test]
    fn test_mixed_junction_uses_placeholder() {
        let groups = group(&[unit("khah", "khah", Head), unit("早", "tsá", Linked)]);
        assert_eq!(
            pairs(&groups[0]),
            vec![("khah", "khah"), (NBSP, "-"), ("早", "tsá")]
        );
    }

    #[test]
    fn test_light_tone_separator() {
        let groups = group(&[unit("走", "tsáu", Head), unit("出", "tshut", LightTone)]);
        assert_eq!(
            pairs(&groups[0]),
            vec![("走", "tsáu"), (NBSP, "--"), ("出", "tshut")]
        );
    }

    #[test]
    fn test_empty_fields_get_placeholder() {
        let units = align(&segment_hanji("姑"), &segment_lomaji("koo-niû"), None);
        let groups = group(&units);
        assert_eq!(groups.len(), 1);
        // No Han on the right of the junction, so no hyphen on the Han side.
        assert_eq!(
            pairs(&groups[0]),
            vec![("姑", "koo"), (NBSP, "-"), (NBSP, "niû")]
        );
        assert!(!groups[0].cells[2].matched);
    }

    #[test]
    fn test_one_group_per_head() {
        let units = align(
            &segment_hanji("阮阿媽真愛食飯"),
            &segment_lomaji("Guán a-má tsin ài tsia\u{030D}h-pn\u{0304}g"),
            None,
        );
        let heads = units.iter().filter(|u| u.tag == Head).count();
        let groups = group(&units);
        assert_eq!(groups.len(), heads);
        assert_eq!(groups.len(), 5);
        let syllables: usize = groups.iter().map(|g| g.syllables().count()).sum();
        assert_eq!(syllables, units.len());
    }

    #[test]
    fn test_leading_continuation_does_not_start_group() {
        let groups = group(&[
            unit("仔", "á", LightTone),
            unit("好", "hó", Linked),
            unit("我", "guá", Head),
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(
            pairs(&groups[0]),
            vec![(NBSP, NBSP), ("仔", "á"), (NBSP, "-"), ("好", "hó")]
        );
        assert_eq!(pairs(&groups[1]), vec![("我", "guá")]);
    }

    #[test]
    fn test_custom_separators() {
        let config = GroupingSettings {
            placeholder: "_".to_string(),
            linked_separator: "~".to_string(),
            light_tone_separator: "~~".to_string(),
        };
        let groups = group_with(
            &[unit("姑", "koo", Head), unit("娘", "niû", Linked)],
            &config,
        );
        assert_eq!(
            pairs(&groups[0]),
            vec![("姑", "koo"), ("_", "~"), ("娘", "niû")]
        );
    }
}
