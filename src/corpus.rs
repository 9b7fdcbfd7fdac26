//! The couplet corpus: 1,330 numbered Thirukkural records.
//!
//! Built once at startup and read-only afterwards, so it can be shared
//! across arbitrarily many concurrent resolutions without locking. Loading
//! never takes the process down: [`Corpus::load_or_empty`] degrades to an
//! empty corpus on any failure, and the resolver keeps serving keyword and
//! fallback answers.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a corpus file.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse corpus JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single couplet: two lines, a unique number in `[1, 1330]`, and an
/// optional explanatory gloss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoupletRecord {
    #[serde(rename = "Number")]
    pub number: u32,
    #[serde(rename = "Line1")]
    pub line1: String,
    #[serde(rename = "Line2")]
    pub line2: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl CoupletRecord {
    /// The answer passage: both lines, plus the gloss when present and
    /// non-empty, separated by line breaks.
    pub fn passage(&self) -> String {
        let mut text = format!("{}\n{}", self.line1, self.line2);
        if let Some(explanation) = self.explanation.as_deref().filter(|e| !e.is_empty()) {
            text.push('\n');
            text.push_str(explanation);
        }
        text
    }

    /// The text a fuzzy query is matched against: `line1 + " " + line2`.
    pub(crate) fn match_text(&self) -> String {
        format!("{} {}", self.line1, self.line2)
    }
}

/// On-disk shape: a top-level key mapping to the ordered record list.
#[derive(Deserialize)]
struct CorpusFile {
    #[serde(rename = "kural")]
    records: Vec<CoupletRecord>,
}

/// Ordered, immutable couplet collection with O(1) lookup by number.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<CoupletRecord>,
    by_number: HashMap<u32, usize>,
}

impl Corpus {
    /// Build a corpus from records, preserving order for fuzzy iteration.
    ///
    /// Records with a number outside `[1, 1330]` or duplicating an earlier
    /// number are dropped with a warning; the invariants (unique, in-range
    /// numbers) hold for whatever remains.
    pub fn new(records: Vec<CoupletRecord>) -> Self {
        let mut kept = Vec::with_capacity(records.len());
        let mut by_number = HashMap::with_capacity(records.len());

        for record in records {
            if !(1..=1330).contains(&record.number) {
                log::warn!("dropping couplet with out-of-range number {}", record.number);
                continue;
            }
            if by_number.contains_key(&record.number) {
                log::warn!("dropping duplicate couplet number {}", record.number);
                continue;
            }
            by_number.insert(record.number, kept.len());
            kept.push(record);
        }

        Self { records: kept, by_number }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a corpus from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let file: CorpusFile = serde_json::from_str(json)?;
        Ok(Self::new(file.records))
    }

    /// Load a corpus from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Load a corpus, degrading to an empty one (with a warning) on any
    /// I/O or parse failure so the caller keeps running.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(corpus) => {
                log::info!("loaded {} couplets from {}", corpus.len(), path.display());
                corpus
            }
            Err(err) => {
                log::warn!("could not load corpus from {}: {err}; continuing with an empty corpus", path.display());
                Self::empty()
            }
        }
    }

    /// Exact lookup by couplet number.
    pub fn get(&self, number: u32) -> Option<&CoupletRecord> {
        self.by_number.get(&number).map(|&i| &self.records[i])
    }

    /// Records in corpus order.
    pub fn records(&self) -> &[CoupletRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
