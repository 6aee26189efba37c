//! Presentation of grouped alignments: verdict, ruby markup and a plain
//! text report.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

use crate::grouping::{CellKind, WordGroup};
use crate::types::AlignedUnit;

/// CSS class put on cells whose pairing failed.
pub const FAIL_CLASS: &str = "kiamtsa-fail";

/// The text passes when every aligned position is a genuine correspondence.
pub fn verdict(units: &[AlignedUnit]) -> bool {
    units.iter().all(|u| u.matched)
}

/// Same judgement over grouped output; fillers always pass.
pub fn groups_pass(groups: &[WordGroup]) -> bool {
    groups.iter().flat_map(|g| &g.cells).all(|c| c.matched)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// One `<ruby>` element per word, Han text as the base and the
/// romanization as the annotation.
pub fn to_ruby_html(groups: &[WordGroup]) -> String {
    let mut html = String::new();
    for group in groups {
        html.push_str("<ruby>");
        for cell in &group.cells {
            let class = if cell.matched {
                String::new()
            } else {
                format!(" class=\"{FAIL_CLASS}\"")
            };
            let _ = write!(
                html,
                "<rb{class}>{}</rb><rt{class}>{}</rt>",
                escape_html(&cell.han),
                escape_html(&cell.roman)
            );
        }
        html.push_str("</ruby>");
    }
    html
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

/// Two aligned rows (Han over romanization) and a marker row pointing at
/// failed cells. Words are separated by two spaces.
pub fn to_text(groups: &[WordGroup]) -> String {
    let mut han_row = String::new();
    let mut roman_row = String::new();
    let mut mark_row = String::new();

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            han_row.push_str("  ");
            roman_row.push_str("  ");
            mark_row.push_str("  ");
        }
        for cell in &group.cells {
            let width = UnicodeWidthStr::width(cell.han.as_str())
                .max(UnicodeWidthStr::width(cell.roman.as_str()));
            han_row.push_str(&pad(&cell.han, width));
            roman_row.push_str(&pad(&cell.roman, width));
            let mark = if cell.matched || cell.kind == CellKind::Filler {
                " "
            } else {
                "!"
            };
            mark_row.push_str(&pad(mark, width));
        }
    }

    let mut out = String::new();
    for row in [han_row, roman_row, mark_row] {
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}
