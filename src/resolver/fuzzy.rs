//! Approximate matching of a query against couplet texts.
//!
//! The similarity measure is the classic longest-matching-block sequence
//! ratio (Ratcliff/Obershelp): find the longest contiguous block of
//! characters common to both strings, recurse on the pieces to its left and
//! right, and report `2 * M / (len_a + len_b)` where `M` is the total
//! matched character count. The ratio is symmetric, ranges over `[0, 1]`,
//! and is computed over `char`s, not bytes, so Tamil text measures
//! correctly.
//!
//! Complexity: one ratio costs O(|a| * |b|) in the worst case; scanning the
//! corpus is O(corpus_size * average_text_length * query_length). Couplets
//! are short, so a full scan per query is well within budget.

use std::collections::HashMap;

use crate::corpus::Corpus;

/// Candidates scoring below this (against the match-time ratio) are
/// discarded.
pub(crate) const FUZZY_CUTOFF: f64 = 0.4;

/// A winning candidate: its position in corpus order and its match-time
/// score.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FuzzyMatch {
    pub index: usize,
    pub score: f64,
}

/// Scan the corpus for the single best approximate match to `query`.
///
/// Tie-break is deterministic: the first candidate in corpus order to reach
/// the best score wins (later candidates must score strictly higher to take
/// over).
pub(crate) fn best_match(query: &str, corpus: &Corpus, cutoff: f64) -> Option<FuzzyMatch> {
    let mut best: Option<FuzzyMatch> = None;

    for (index, record) in corpus.records().iter().enumerate() {
        let score = sequence_ratio(&record.match_text(), query);
        if score < cutoff {
            continue;
        }
        if best.map_or(true, |b| score > b.score) {
            best = Some(FuzzyMatch { index, score });
        }
    }

    best
}

/// Longest-matching-block similarity ratio between two strings, in `[0, 1]`.
///
/// Two empty strings are identical (`1.0`).
pub(crate) fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    // Positions of every char of `b`, ascending.
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }

    let matched = matching_total(&a, &b2j, 0, a.len(), 0, b.len());
    2.0 * matched as f64 / total as f64
}

/// Total matched characters: longest block in the window, plus recursion on
/// the unmatched pieces to its left and right.
fn matching_total(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> usize {
    let (i, j, size) = longest_block(a, b2j, alo, ahi, blo, bhi);
    if size == 0 {
        return 0;
    }
    size + matching_total(a, b2j, alo, i, blo, j)
        + matching_total(a, b2j, i + size, ahi, j + size, bhi)
}

/// Longest contiguous block common to `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, size)` with the block starting at `a[i]` / `b[j]`. On
/// equal sizes the earliest block in `a` (then in `b`) wins, which keeps the
/// recursion deterministic.
fn longest_block(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0usize);
    // j2len[j] = length of the longest block ending at a[i-1] / b[j].
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for i in alo..ahi {
        let mut next_j2len: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(&a[i]) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let len = if j > blo { j2len.get(&(j - 1)).copied().unwrap_or(0) + 1 } else { 1 };
                next_j2len.insert(j, len);
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        j2len = next_j2len;
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Corpus, CoupletRecord};

    fn record(number: u32, line1: &str, line2: &str) -> CoupletRecord {
        CoupletRecord {
            number,
            line1: line1.to_string(),
            line2: line2.to_string(),
            explanation: None,
        }
    }

    #[test]
    fn ratio_reference_values() {
        assert_eq!(sequence_ratio("abcd", "abcd"), 1.0);
        assert_eq!(sequence_ratio("abcd", "wxyz"), 0.0);
        // Longest block "bcd", nothing else matches: 2*3 / 8.
        assert!((sequence_ratio("abcd", "bcde") - 0.75).abs() < 1e-12);
        // Blocks "ab" and "cd": 2*4 / 9.
        assert!((sequence_ratio("abxcd", "abcd") - 8.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn ratio_handles_empty_inputs() {
        assert_eq!(sequence_ratio("", ""), 1.0);
        assert_eq!(sequence_ratio("abc", ""), 0.0);
        assert_eq!(sequence_ratio("", "abc"), 0.0);
    }

    #[test]
    fn ratio_is_symmetric() {
        for (a, b) in [("abcd", "bcde"), ("abxcd", "abcd"), ("அறம் செய்ய", "அறம் செய")] {
            assert!((sequence_ratio(a, b) - sequence_ratio(b, a)).abs() < 1e-12);
        }
    }

    #[test]
    fn ratio_counts_chars_not_bytes() {
        // One char differs out of four; Tamil chars are multi-byte.
        let r = sequence_ratio("அஆஇஈ", "அஆஇஉ");
        assert!((r - 0.75).abs() < 1e-12);
    }

    #[test]
    fn best_match_respects_the_cutoff() {
        let corpus = Corpus::new(vec![record(1, "abcdefghij", "klmnopqrst")]);
        assert!(best_match("zzzz", &corpus, FUZZY_CUTOFF).is_none());

        let hit = best_match("abcdefghij klmnopqrst", &corpus, FUZZY_CUTOFF).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.score, 1.0);
    }

    #[test]
    fn ties_go_to_the_first_candidate_in_corpus_order() {
        let corpus = Corpus::new(vec![
            record(10, "same text", "either way"),
            record(20, "same text", "either way"),
        ]);
        let hit = best_match("same text either way", &corpus, FUZZY_CUTOFF).unwrap();
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn a_strictly_better_later_candidate_takes_over() {
        let corpus = Corpus::new(vec![
            record(1, "partial overlap", "here"),
            record(2, "exact query text", "match"),
        ]);
        let hit = best_match("exact query text match", &corpus, 0.1).unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.score, 1.0);
    }
}
