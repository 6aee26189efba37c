//! Independent alignments fanned out over a rayon thread pool.

use rayon::prelude::*;

use crate::aligner::{align_with, Alignment};
use crate::matcher::Matcher;
use crate::types::TaggedUnit;

/// Align every (hanji, lomaji) pair, preserving input order.
pub fn align_many(pairs: &[(Vec<TaggedUnit>, Vec<TaggedUnit>)], matcher: &Matcher<'_>) -> Vec<Alignment> {
    pairs
        .par_iter()
        .map(|(hanji, lomaji)| align_with(matcher, hanji, lomaji))
        .collect()
}
