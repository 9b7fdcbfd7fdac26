//! Lookup tables driving the normalization pipeline.
//!
//! The tables are plain data, injected into [`crate::Normalizer`] rather than
//! referenced as ambient globals, so tests can substitute alternate tables.
//! The defaults reproduce the fixed tables of the reference behavior.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Map of literal decimal numerals (a closed set, not a general converter)
/// to their Tamil word forms.
static TAMIL_NUMERALS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("0", "பூஜ்யம்"),
        ("1", "ஒன்று"),
        ("2", "இரண்டு"),
        ("3", "மூன்று"),
        ("4", "நான்கு"),
        ("5", "ஐந்து"),
        ("6", "ஆறு"),
        ("7", "ஏழு"),
        ("8", "எட்டு"),
        ("9", "ஒன்பது"),
        ("10", "பத்து"),
        ("100", "நூறு"),
        ("1000", "ஆயிரம்"),
    ])
});

/// The 18 Tamil base consonants. Together with the pulli (virama) they form
/// the mei letters (க், ங், ...), pure consonant sounds without an inherent
/// vowel.
const MEI_BASES: [char; 18] = [
    'க', 'ங', 'ச', 'ஞ', 'ட', 'ண', 'த', 'ந', 'ப', 'ம', 'ய', 'ர', 'ல', 'வ', 'ழ', 'ள', 'ற', 'ன',
];

/// The pulli sign that turns a consonant letter into a mei.
const PULLI: char = '\u{0BCD}';

/// The 12 independent (uyir) vowels.
const UYIR_VOWELS: [char; 12] = ['அ', 'ஆ', 'இ', 'ஈ', 'உ', 'ஊ', 'எ', 'ஏ', 'ஐ', 'ஒ', 'ஓ', 'ஔ'];

/// Connective words that get a trailing comma so the synthesizer pauses.
const PAUSE_WORDS: [&str; 4] = ["ஆனால்", "எனவே", "அதனால்", "அல்லது"];

/// Numeral-to-word substitution table.
#[derive(Debug, Clone)]
pub struct NumeralTable {
    entries: HashMap<String, String>,
}

impl NumeralTable {
    /// Build a table from `(numeral, word)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: pairs.into_iter().map(|(n, w)| (n.to_string(), w.to_string())).collect(),
        }
    }

    /// Word form for a digit run, if the run is one of the table's numerals.
    pub fn word_for(&self, run: &str) -> Option<&str> {
        self.entries.get(run).map(String::as_str)
    }
}

impl Default for NumeralTable {
    fn default() -> Self {
        Self::from_pairs(TAMIL_NUMERALS.iter().map(|(&n, &w)| (n, w)))
    }
}

/// Symbol classes for sandhi splitting: a consonant marker is one of the
/// `consonants` followed by the `virama`; a boundary is inserted before any
/// of the `vowels` that immediately follows such a marker.
#[derive(Debug, Clone)]
pub struct SandhiTable {
    consonants: HashSet<char>,
    virama: char,
    vowels: HashSet<char>,
}

impl SandhiTable {
    pub fn new(
        consonants: impl IntoIterator<Item = char>,
        virama: char,
        vowels: impl IntoIterator<Item = char>,
    ) -> Self {
        Self {
            consonants: consonants.into_iter().collect(),
            virama,
            vowels: vowels.into_iter().collect(),
        }
    }

    pub fn is_consonant(&self, c: char) -> bool {
        self.consonants.contains(&c)
    }

    pub fn virama(&self) -> char {
        self.virama
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }
}

impl Default for SandhiTable {
    fn default() -> Self {
        Self::new(MEI_BASES, PULLI, UYIR_VOWELS)
    }
}

/// Connective words that receive a trailing comma.
#[derive(Debug, Clone)]
pub struct PauseTable {
    words: Vec<String>,
}

impl PauseTable {
    pub fn new<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self { words: words.into_iter().map(str::to_string).collect() }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for PauseTable {
    fn default() -> Self {
        Self::new(PAUSE_WORDS)
    }
}

/// The full set of tables a [`crate::Normalizer`] runs with.
#[derive(Debug, Clone, Default)]
pub struct NormalizerTables {
    pub numerals: NumeralTable,
    pub sandhi: SandhiTable,
    pub pauses: PauseTable,
}
