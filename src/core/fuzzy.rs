//! Typo-tolerant matching for "did you mean" suggestions.
//!
//! Scores are Levenshtein-based similarities in `[0, 1]`, raised for queries
//! that appear verbatim inside a candidate so that short prefixes such as
//! `proj` still rank `projects` highly.

use std::cmp::min;
use std::collections::HashSet;

/// Candidate that cleared the similarity threshold
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub value: String,
    pub similarity: f64,
}

/// Levenshtein distance over the lowercased strings
///
/// Insert, delete and substitute all cost 1. Adjacent transpositions are not
/// special-cased, so swapping two characters costs 2.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = min(min(prev[j] + 1, curr[j - 1] + 1), prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Similarity between 0.0 (nothing in common) and 1.0 (case-insensitive match)
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();

    if a_lower == b_lower {
        return 1.0;
    }

    let max_len = a_lower.chars().count().max(b_lower.chars().count());
    let distance = levenshtein_distance(&a_lower, &b_lower);
    (1.0 - distance as f64 / max_len as f64).clamp(0.0, 1.0)
}

/// Check if query occurs in candidate, ignoring case
pub fn is_substring(query: &str, candidate: &str) -> bool {
    candidate.to_lowercase().contains(&query.to_lowercase())
}

/// Similarity with the substring boost applied
pub fn score(query: &str, candidate: &str) -> f64 {
    let raw = similarity(query, candidate);
    if !is_substring(query, candidate) {
        return raw;
    }

    let candidate_len = candidate.to_lowercase().chars().count();
    if candidate_len == 0 {
        return raw;
    }

    let query_len = query.to_lowercase().chars().count();
    raw.max(0.5 + 0.5 * query_len as f64 / candidate_len as f64)
}

/// Rank candidates against a query
///
/// Duplicate candidates are scored once. Survivors have a score of at least
/// `threshold` and come back best first, ties broken alphabetically.
pub fn find_similar<S: AsRef<str>>(query: &str, candidates: &[S], threshold: f64) -> Vec<Match> {
    let mut seen = HashSet::new();
    let mut matches: Vec<Match> = candidates
        .iter()
        .map(|candidate| candidate.as_ref())
        .filter(|candidate| seen.insert(*candidate))
        .filter_map(|candidate| {
            let similarity = score(query, candidate);
            (similarity >= threshold).then(|| Match {
                value: candidate.to_string(),
                similarity,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.similarity
            .total_cmp(&a.similarity)
            .then_with(|| a.value.cmp(&b.value))
    });

    matches
}

/// Same as [`find_similar`] but returns only the names
pub fn find_similar_names<S: AsRef<str>>(query: &str, candidates: &[S], threshold: f64) -> Vec<String> {
    find_similar(query, candidates, threshold)
        .into_iter()
        .map(|m| m.value)
        .collect()
}
