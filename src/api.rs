//! Public surface: result types and convenience normalization functions.

use std::fmt;
use std::time::Duration;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::normalizer::Normalizer;

static DEFAULT_NORMALIZER: Lazy<Normalizer> = Lazy::new(Normalizer::default);

/// How an answer was produced.
///
/// `None` is reserved for the empty-query validation path and carries no
/// further meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Number,
    Fuzzy,
    Keyword,
    Fallback,
    None,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Number => "number",
            Method::Fuzzy => "fuzzy",
            Method::Keyword => "keyword",
            Method::Fallback => "fallback",
            Method::None => "none",
        };
        f.write_str(name)
    }
}

/// A resolved answer.
///
/// `text` is already normalized for speech synthesis and is handed verbatim
/// to the downstream sink. `confidence` is policy-determined per method,
/// in `[0, 1]`; it is a self-report, not a calibrated probability.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub text: String,
    pub method: Method,
    pub confidence: f64,
}

/// One attempted stage in a verbose run.
#[derive(Debug, Clone)]
pub struct StageTrace {
    /// Stage name: `validation`, `number`, `fuzzy`, `keyword`, `fallback`.
    pub stage: &'static str,
    /// Whether the stage produced the answer.
    pub matched: bool,
    /// Short human-readable outcome.
    pub note: String,
}

/// Extra details returned by [`crate::Resolver::resolve_verbose`].
///
/// Intentionally compact: meant for debugging and inspection, not for
/// dumping internal state. The plain resolve path allocates none of this.
#[derive(Debug, Clone, Default)]
pub struct ResolveDetails {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Time spent scanning the corpus in the fuzzy stage (zero when the
    /// stage was not attempted).
    pub fuzzy_scan: Duration,
    /// Stages in the order they were attempted.
    pub stages: Vec<StageTrace>,
    /// The chosen answer before normalization.
    pub raw_answer: String,
}

/// Result from [`crate::Resolver::resolve_verbose`].
#[derive(Debug, Clone)]
pub struct VerboseResolution {
    pub resolution: Resolution,
    pub details: ResolveDetails,
}

/// Normalize `text` for speech synthesis using the default tables and an
/// empty query context.
///
/// # Example
/// ```
/// use kuralosai::normalize;
///
/// assert_eq!(normalize("நான் 100 பக்கங்கள்"), "நான் நூறு பக்கங்கள்");
/// ```
pub fn normalize(text: &str) -> String {
    DEFAULT_NORMALIZER.normalize(text, "")
}

/// Normalize `text` with an explicit normalizer and the originating query
/// as context.
///
/// The context is currently inert but part of the contract; pass the raw
/// user query when one exists.
pub fn normalize_with(text: &str, query: &str, normalizer: &Normalizer) -> String {
    normalizer.normalize(text, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::NO_TEXT_NOTICE;

    #[test]
    fn normalize_substitutes_blank_input_with_the_sentinel() {
        assert_eq!(normalize(""), NO_TEXT_NOTICE);
        assert_eq!(normalize("  \n "), NO_TEXT_NOTICE);
    }

    #[test]
    fn normalize_with_accepts_an_inert_query_context() {
        let normalizer = Normalizer::default();
        let with_context = normalize_with("நான் 100 பக்கங்கள்", "ஏதோ கேள்வி", &normalizer);
        assert_eq!(with_context, normalize("நான் 100 பக்கங்கள்"));
    }

    #[test]
    fn method_names_are_stable() {
        assert_eq!(Method::Number.to_string(), "number");
        assert_eq!(Method::None.to_string(), "none");
    }

    #[test]
    fn resolution_serializes_with_lowercase_method_tags() {
        let resolution = Resolution {
            text: "உலகு".to_string(),
            method: Method::Fuzzy,
            confidence: 0.75,
        };
        let value = serde_json::to_value(&resolution).unwrap();
        assert_eq!(value["method"], "fuzzy");
        assert_eq!(value["confidence"], 0.75);
        assert_eq!(value["text"], "உலகு");
    }
}
