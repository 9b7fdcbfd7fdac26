//! Tamil literary query resolution and speech-ready text normalization.
//!
//! The crate answers free-form natural-language questions against a fixed
//! corpus of 1,330 numbered Thirukkural couplets plus a small table of
//! literary-topic summaries, and rewrites the chosen passage so a
//! text-to-speech engine paces it correctly.
//!
//! Two cooperating pieces:
//!
//! - [`Normalizer`]: a pure, three-stage rewrite pipeline (numeral
//!   substitution, then sandhi splitting, then discourse-pause insertion).
//! - [`Resolver`]: a fixed-priority query engine (numeric reference, fuzzy
//!   match, topic keyword, fallback) producing a [`Resolution`] of
//!   `{text, method, confidence}`.
//!
//! Everything is deterministic, synchronous, and read-only after startup:
//! the [`Corpus`] and the lookup tables are built once and may be shared
//! freely across calls.

mod api;
mod corpus;
mod normalizer;
mod resolver;
mod topics;
mod tts;

pub use api::{
    Method, Resolution, ResolveDetails, StageTrace, VerboseResolution, normalize, normalize_with,
};
pub use corpus::{Corpus, CorpusError, CoupletRecord};
pub use normalizer::tables::{NormalizerTables, NumeralTable, PauseTable, SandhiTable};
pub use normalizer::{NO_TEXT_NOTICE, Normalizer};
pub use resolver::{NO_INPUT_NOTICE, Resolver};
pub use topics::{TopicEntry, TopicTable};
pub use tts::{AudioArtifact, NullSink, SpeechSink, Spoken, SynthesisError, speak};
