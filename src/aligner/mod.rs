//! Global alignment of a Han sequence against its romanization.
//!
//! A dynamic-programming table over (romanization position, Han position)
//! scores every prefix pair with a [`Score`]; each cell also records the
//! move that produced it. The backtrace replays those moves from the far
//! corner and emits one [`AlignedUnit`] per step.

mod score;

pub use score::Score;

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::matcher::{CustomAccept, Matcher};
use crate::types::{AlignedUnit, TaggedUnit, WordPosition};

/// How a table cell was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    /// From the cell above: a romanization unit with no Han partner.
    RomanOnly,
    /// From the cell to the left: a Han unit with no romanization partner.
    HanOnly,
    /// Diagonal, accepted by the correspondence check.
    Match,
    /// Diagonal, rejected but paired anyway.
    Mismatch,
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    score: Score,
    step: Move,
}

/// Result of one alignment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment {
    pub units: Vec<AlignedUnit>,
    pub score: Score,
}

impl Alignment {
    /// True when every position is a genuine correspondence.
    pub fn is_all_matched(&self) -> bool {
        self.units.iter().all(|u| u.matched)
    }
}

/// Align two tagged sequences with the built-in dictionary.
pub fn align(
    hanji: &[TaggedUnit],
    lomaji: &[TaggedUnit],
    custom: Option<CustomAccept<'_>>,
) -> Vec<AlignedUnit> {
    let matcher = Matcher::builtin(custom);
    align_with(&matcher, hanji, lomaji).units
}

/// Align two tagged sequences using `matcher` as the correspondence check.
pub fn align_with(matcher: &Matcher<'_>, hanji: &[TaggedUnit], lomaji: &[TaggedUnit]) -> Alignment {
    let table = fill_table(matcher, hanji, lomaji);
    let score = table[lomaji.len()][hanji.len()].score;
    let units = backtrace(&table, hanji, lomaji);
    debug!(
        hanji = hanji.len(),
        lomaji = lomaji.len(),
        matches = score.match_count,
        forced = score.forced_pair_count,
        "aligned"
    );
    Alignment { units, score }
}

/// Keep the first of `candidates` holding the greatest score; later
/// candidates only win when strictly greater.
fn pick(candidates: [(Score, Move); 3]) -> Cell {
    let mut best = Cell {
        score: candidates[0].0,
        step: candidates[0].1,
    };
    for &(score, step) in &candidates[1..] {
        if score > best.score {
            best = Cell { score, step };
        }
    }
    best
}

fn fill_table(matcher: &Matcher<'_>, hanji: &[TaggedUnit], lomaji: &[TaggedUnit]) -> Vec<Vec<Cell>> {
    let rows = lomaji.len();
    let cols = hanji.len();

    // Row 0 can only drain Han units, column 0 only romanization units.
    let mut table: Vec<Vec<Cell>> = (0..=rows)
        .map(|row| {
            let step = if row == 0 { Move::HanOnly } else { Move::RomanOnly };
            vec![
                Cell {
                    score: Score::ZERO,
                    step,
                };
                cols + 1
            ]
        })
        .collect();

    let mut memo: HashMap<(&str, &str), bool> = HashMap::new();

    for row in 1..=rows {
        let roman = &lomaji[row - 1];
        for col in 1..=cols {
            let han = &hanji[col - 1];
            let top = table[row - 1][col].score;
            let left = table[row][col - 1].score;
            let diag = table[row - 1][col - 1].score;

            let is_match = *memo
                .entry((han.text.as_str(), roman.text.as_str()))
                .or_insert_with(|| matcher.matches(&han.text, &roman.text));

            // On a match prefer keeping the Han side in place; otherwise
            // prefer keeping the romanization side in place.
            table[row][col] = if is_match {
                pick([
                    (top, Move::RomanOnly),
                    (left, Move::HanOnly),
                    (diag.with_match(), Move::Match),
                ])
            } else {
                pick([
                    (left, Move::HanOnly),
                    (top, Move::RomanOnly),
                    (diag.with_forced_pair(), Move::Mismatch),
                ])
            };
        }
    }

    table
}

fn backtrace(table: &[Vec<Cell>], hanji: &[TaggedUnit], lomaji: &[TaggedUnit]) -> Vec<AlignedUnit> {
    let mut row = lomaji.len();
    let mut col = hanji.len();
    let mut last_tag = WordPosition::Head;
    let mut units = Vec::with_capacity(row + col);

    while row > 0 || col > 0 {
        match table[row][col].step {
            Move::HanOnly => {
                col -= 1;
                units.push(AlignedUnit {
                    han: hanji[col].text.clone(),
                    roman: String::new(),
                    tag: last_tag,
                    matched: false,
                });
            }
            Move::RomanOnly => {
                row -= 1;
                last_tag = lomaji[row].tag;
                units.push(AlignedUnit {
                    han: String::new(),
                    roman: lomaji[row].text.clone(),
                    tag: last_tag,
                    matched: false,
                });
            }
            step @ (Move::Match | Move::Mismatch) => {
                row -= 1;
                col -= 1;
                last_tag = lomaji[row].tag;
                units.push(AlignedUnit {
                    han: hanji[col].text.clone(),
                    roman: lomaji[row].text.clone(),
                    tag: last_tag,
                    matched: step == Move::Match,
                });
            }
        }
    }

    units.reverse();
    units
}
