//! Query resolution engine.
//!
//! Turns a free-form query into an answer passage plus a method tag and a
//! confidence score, trying the stages in a fixed priority order:
//!
//! ```text
//! query ── validation ──▶ Stage A: numeric reference   (Thirukkural marker
//!          (empty query)                                + digit run)
//!                  │                   │ no marker
//!                  │                   v
//!                  │          Stage B: fuzzy match     (best sequence ratio
//!                  │                   │ below cutoff   over the corpus)
//!                  │                   v
//!                  │          Stage C: topic keyword   (synonym containment,
//!                  │                   │ no synonym     table order)
//!                  │                   v
//!                  │          Stage D: fallback        (fixed guidance text)
//!                  │                   │
//!                  v                   v
//!          fixed "no input"    answer ──▶ Normalizer ──▶ Resolution
//! ```
//!
//! The first stage to produce an answer wins; Stage A always answers once
//! the marker is present (hit, miss, or "specify a number"). The chosen
//! answer text is normalized with the raw query as context before it is
//! returned; the validation path is the one exception and returns its fixed
//! notice verbatim.
//!
//! ## Responsibilities by module
//!
//! - `numeric.rs`: marker detection and digit-run extraction as explicit
//!   scanners with documented boundary rules.
//! - `fuzzy.rs`: the longest-matching-block similarity ratio and the
//!   best-candidate scan with its corpus-order tie-break.
//!
//! Keyword matching lives with the topic table in `crate::topics`.

#[path = "resolver/fuzzy.rs"]
mod fuzzy;
#[path = "resolver/numeric.rs"]
mod numeric;


use std::time::Instant;

use crate::api::{Method, ResolveDetails, Resolution, StageTrace, VerboseResolution};
use crate::corpus::Corpus;
use crate::normalizer::Normalizer;
use crate::topics::TopicTable;

/// Fixed notice for the empty-query validation path.
pub const NO_INPUT_NOTICE: &str = "⚠️ உரை இல்லை (No input provided).";

const SPECIFY_NUMBER_NOTICE: &str = "திருக்குறள் எண் குறிப்பிடவும் (1-1330).";

const FALLBACK_NOTICE: &str = "மன்னிக்கவும், இந்த கேள்விக்கு தகவல் இல்லை. திருக்குறள் எண், சிலப்பதிகாரம், சங்க இலக்கியம், கம்பர் ஆகியவற்றைப் பற்றி கேளுங்கள்.";

// Confidence policy per method (see the stage functions for the fuzzy
// stage's recomputed confidence).
const CONFIDENCE_NUMBER_HIT: f64 = 0.95;
const CONFIDENCE_NUMBER_MISS: f64 = 0.8;
const CONFIDENCE_NUMBER_UNSPECIFIED: f64 = 0.3;
const CONFIDENCE_FALLBACK: f64 = 0.2;

/// A stage's raw answer, before normalization.
struct Answer {
    text: String,
    method: Method,
    confidence: f64,
}

/// The query resolution engine: a read-only corpus, the topic table, and
/// the normalizer every answer passes through.
#[derive(Debug, Clone)]
pub struct Resolver {
    corpus: Corpus,
    topics: TopicTable,
    normalizer: Normalizer,
}

impl Resolver {
    /// Resolver with the default topic table and normalizer tables.
    pub fn new(corpus: Corpus) -> Self {
        Self::with_tables(corpus, TopicTable::default(), Normalizer::default())
    }

    /// Resolver with injected tables, for testing and alternate corpora.
    pub fn with_tables(corpus: Corpus, topics: TopicTable, normalizer: Normalizer) -> Self {
        Self { corpus, topics, normalizer }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Resolve `query` to a normalized answer, a method tag, and a
    /// confidence score. Never fails; every branch terminates in a
    /// well-formed [`Resolution`].
    pub fn resolve(&self, query: &str) -> Resolution {
        self.run(query, None)
    }

    /// Like [`Resolver::resolve`], but also returns a compact stage trace
    /// and timing details. The plain path does not allocate these.
    pub fn resolve_verbose(&self, query: &str) -> VerboseResolution {
        let started = Instant::now();
        let mut details = ResolveDetails::default();
        let resolution = self.run(query, Some(&mut details));
        details.total = started.elapsed();
        VerboseResolution { resolution, details }
    }

    fn run(&self, query: &str, mut details: Option<&mut ResolveDetails>) -> Resolution {
        // Validation: a distinct error path, not routed through the stages
        // and not normalized. Only the zero-length query counts; a
        // whitespace-only query runs the stages (and misses all of them).
        if query.is_empty() {
            trace(&mut details, "validation", true, "empty query");
            return Resolution {
                text: NO_INPUT_NOTICE.to_string(),
                method: Method::None,
                confidence: 0.0,
            };
        }

        // Keyword and marker tests use the lowercased, trimmed key; digit
        // extraction sees the original query.
        let key = query.trim().to_lowercase();

        let answer = if let Some(answer) = self.stage_number(query, &key, &mut details) {
            answer
        } else if let Some(answer) = self.stage_fuzzy(query, &mut details) {
            answer
        } else if let Some(answer) = self.stage_keyword(&key, &mut details) {
            answer
        } else {
            trace(&mut details, "fallback", true, "fixed guidance message");
            Answer {
                text: FALLBACK_NOTICE.to_string(),
                method: Method::Fallback,
                confidence: CONFIDENCE_FALLBACK,
            }
        };

        log::debug!("query resolved via {} (confidence {:.2})", answer.method, answer.confidence);

        if let Some(details) = details.as_deref_mut() {
            details.raw_answer = answer.text.clone();
        }

        Resolution {
            text: self.normalizer.normalize(&answer.text, query),
            method: answer.method,
            confidence: answer.confidence,
        }
    }

    /// Stage A: explicit numeric reference. Once the Thirukkural marker is
    /// present this stage always answers: with the couplet, a "not found"
    /// notice, or a "specify a number" prompt.
    fn stage_number(
        &self,
        query: &str,
        key: &str,
        details: &mut Option<&mut ResolveDetails>,
    ) -> Option<Answer> {
        if !numeric::has_kural_marker(key) {
            trace(details, "number", false, "no Thirukkural marker in query");
            return None;
        }

        let answer = match numeric::first_digit_run(query) {
            Some(number) => match self.corpus.get(number) {
                Some(couplet) => {
                    trace(details, "number", true, format!("couplet {number} found"));
                    Answer {
                        text: couplet.passage(),
                        method: Method::Number,
                        confidence: CONFIDENCE_NUMBER_HIT,
                    }
                }
                None => {
                    trace(details, "number", true, format!("couplet {number} not in corpus"));
                    Answer {
                        text: format!("திருக்குறள் எண் {number} கிடைக்கவில்லை."),
                        method: Method::Number,
                        confidence: CONFIDENCE_NUMBER_MISS,
                    }
                }
            },
            None => {
                trace(details, "number", true, "marker present but no digit run");
                Answer {
                    text: SPECIFY_NUMBER_NOTICE.to_string(),
                    method: Method::Number,
                    confidence: CONFIDENCE_NUMBER_UNSPECIFIED,
                }
            }
        };

        Some(answer)
    }

    /// Stage B: best approximate match over the corpus.
    fn stage_fuzzy(&self, query: &str, details: &mut Option<&mut ResolveDetails>) -> Option<Answer> {
        if self.corpus.is_empty() {
            trace(details, "fuzzy", false, "corpus is empty, stage skipped");
            return None;
        }

        let started = Instant::now();
        let hit = fuzzy::best_match(query, &self.corpus, fuzzy::FUZZY_CUTOFF);
        if let Some(details) = details.as_deref_mut() {
            details.fuzzy_scan = started.elapsed();
        }

        let Some(hit) = hit else {
            trace(details, "fuzzy", false, format!("no candidate reached cutoff {}", fuzzy::FUZZY_CUTOFF));
            return None;
        };

        let couplet = &self.corpus.records()[hit.index];

        // The reported confidence is recomputed between the raw query and
        // the matched text. This is a separate computation from the
        // match-time score that cleared the cutoff; both are kept distinct
        // on purpose.
        let confidence = fuzzy::sequence_ratio(query, &couplet.match_text());

        trace(
            details,
            "fuzzy",
            true,
            format!("couplet {} (match-time score {:.3})", couplet.number, hit.score),
        );

        Some(Answer { text: couplet.passage(), method: Method::Fuzzy, confidence })
    }

    /// Stage C: topic keyword containment, in table order.
    fn stage_keyword(&self, key: &str, details: &mut Option<&mut ResolveDetails>) -> Option<Answer> {
        let Some(entry) = self.topics.find(key) else {
            trace(details, "keyword", false, "no topic synonym in query");
            return None;
        };

        trace(details, "keyword", true, format!("matched topic entry (confidence {})", entry.confidence));

        Some(Answer {
            text: entry.summary.clone(),
            method: Method::Keyword,
            confidence: entry.confidence,
        })
    }
}

fn trace(
    details: &mut Option<&mut ResolveDetails>,
    stage: &'static str,
    matched: bool,
    note: impl Into<String>,
) {
    if let Some(details) = details.as_deref_mut() {
        details.stages.push(StageTrace { stage, matched, note: note.into() });
    }
}
