mod reading_dict;
pub mod source;

pub use reading_dict::ReadingDictionary;

use std::io;
use std::sync::OnceLock;

/// Embedded character/pronunciation table backing [`builtin`].
pub const BUILTIN_TSV: &str = include_str!("builtin.tsv");

/// Unified error type for dictionary loading, saving and source parsing.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected KMDX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Answers whether a Han character may be read with a given pronunciation.
///
/// The aligner only ever asks this one question, so any phonetic resource
/// can stand in for the built-in table.
pub trait CorrespondenceDictionary: Send + Sync {
    fn contains(&self, hanji: &str, pronunciation: &str) -> bool;
}

/// Get or initialize the built-in dictionary singleton.
pub fn builtin() -> &'static ReadingDictionary {
    static INSTANCE: OnceLock<ReadingDictionary> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        source::parse_tsv(BUILTIN_TSV).expect("built-in dictionary TSV must be valid")
    })
}
