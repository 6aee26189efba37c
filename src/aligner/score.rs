use serde::{Deserialize, Serialize};

/// Value of one alignment table cell.
///
/// Ordered lexicographically: genuine correspondences first, then paired
/// positions (fewer one-sided skips) as the tie-break. Field order matters
/// for the derived `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Score {
    pub match_count: u32,
    pub forced_pair_count: u32,
}

impl Score {
    pub const ZERO: Score = Score {
        match_count: 0,
        forced_pair_count: 0,
    };

    pub fn new(match_count: u32, forced_pair_count: u32) -> Self {
        Self {
            match_count,
            forced_pair_count,
        }
    }

    pub fn with_match(self) -> Self {
        Self {
            match_count: self.match_count + 1,
            ..self
        }
    }

    pub fn with_forced_pair(self) -> Self {
        Self {
            forced_pair_count: self.forced_pair_count + 1,
            ..self
        }
    }
}
