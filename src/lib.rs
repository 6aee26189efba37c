//! Alignment of Taiwanese Hokkien Han text against its romanization.
//!
//! ```
//! use kiamtsa::{align, group, segment_hanji, segment_lomaji, verdict};
//!
//! let units = align(&segment_hanji("我"), &segment_lomaji("guá"), None);
//! assert!(verdict(&units));
//! assert_eq!(group(&units).len(), 1);
//! ```

pub mod aligner;
#[cfg(feature = "parallel")]
pub mod batch;
pub mod dict;
pub mod grouping;
pub mod matcher;
pub mod render;
pub mod segment;
pub mod settings;
pub mod trace_init;
pub mod types;
pub mod unicode;

pub use aligner::{align, align_with, Alignment, Score};
pub use dict::{CorrespondenceDictionary, ReadingDictionary};
pub use grouping::{group, group_with, Cell, CellKind, WordGroup};
pub use matcher::{matches, Matcher, TrialPairing};
pub use render::verdict;
pub use segment::{segment_hanji, segment_lomaji};
pub use types::{AlignedUnit, TaggedUnit, WordPosition};

/// Segment, align and group one sentence pair in a single call.
pub fn check(hanji: &str, lomaji: &str, matcher: &Matcher<'_>) -> (Alignment, Vec<WordGroup>) {
    let alignment = align_with(matcher, &segment_hanji(hanji), &segment_lomaji(lomaji));
    let groups = group(&alignment.units);
    (alignment, groups)
}
