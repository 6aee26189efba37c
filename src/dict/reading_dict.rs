use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::{CorrespondenceDictionary, DictError};

const MAGIC: &[u8; 4] = b"KMDX";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 5; // 4 bytes magic + 1 byte version

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct ReadingData {
    /// Han character → sorted, deduplicated pronunciations.
    readings: BTreeMap<String, Vec<String>>,
}

/// In-memory character → pronunciations table.
#[derive(Debug, Default, Clone)]
pub struct ReadingDictionary {
    data: ReadingData,
}

impl ReadingDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut dict = Self::new();
        for (hanji, pronunciation) in entries {
            dict.insert(hanji, pronunciation);
        }
        dict
    }

    /// Add one reading. Pronunciations are stored in NFC.
    pub fn insert(&mut self, hanji: impl Into<String>, pronunciation: impl Into<String>) {
        let list = self.data.readings.entry(hanji.into()).or_default();
        let pronunciation: String = pronunciation.into().nfc().collect();
        if let Err(pos) = list.binary_search(&pronunciation) {
            list.insert(pos, pronunciation);
        }
    }

    /// Merge every reading of `other` into `self`.
    pub fn extend(&mut self, other: &ReadingDictionary) {
        for (hanji, list) in &other.data.readings {
            for pronunciation in list {
                self.insert(hanji.as_str(), pronunciation.as_str());
            }
        }
    }

    pub fn readings(&self, hanji: &str) -> Option<&[String]> {
        self.data.readings.get(hanji).map(|v| v.as_slice())
    }

    /// Returns (character_count, reading_count).
    pub fn stats(&self) -> (usize, usize) {
        let readings = self.data.readings.values().map(Vec::len).sum();
        (self.data.readings.len(), readings)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let mut buf = Vec::new();
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        let encoded = bincode::serialize(&self.data).map_err(DictError::Serialize)?;
        buf.extend_from_slice(&encoded);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }
        let data: ReadingData =
            bincode::deserialize(&data[HEADER_SIZE..]).map_err(DictError::Deserialize)?;
        Ok(Self { data })
    }

    pub fn open(path: &Path) -> Result<Self, DictError> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        fs::write(path, self.to_bytes()?)?;
        Ok(())
    }
}

impl CorrespondenceDictionary for ReadingDictionary {
    fn contains(&self, hanji: &str, pronunciation: &str) -> bool {
        self.data
            .readings
            .get(hanji)
            .is_some_and(|list| list.binary_search_by(|p| p.as_str().cmp(pronunciation)).is_ok())
    }
}
