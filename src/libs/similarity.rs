//! Fuzzy string matching for task names.
//!
//! Task suggestions and report search rank candidate task names by a
//! normalized Levenshtein similarity. Matching is case-insensitive and the
//! distance computation keeps a single rolling row, so auxiliary space is
//! bounded by the shorter string.

use std::cmp::Ordering;

/// Case-insensitive Levenshtein distance between two strings.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    distance(&a, &b)
}

/// Normalized similarity in `[0.0, 1.0]`.
///
/// An empty (or absent) input on either side scores 0: an empty search
/// matches nothing, even though the raw distance between two empty strings
/// is zero.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let longer = a.len().max(b.len());
    (longer - distance(&a, &b)) as f64 / longer as f64
}

/// A task name with its similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTask {
    pub task: String,
    pub score: f64,
}

/// Ranks candidate task names against a query, best match first.
///
/// Candidates scoring below `min_score` are dropped.
pub fn rank_matches<'a, I>(query: &str, candidates: I, min_score: f64) -> Vec<ScoredTask>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<ScoredTask> = candidates
        .into_iter()
        .map(|candidate| ScoredTask {
            task: candidate.to_string(),
            score: similarity(query, candidate),
        })
        .filter(|entry| entry.score >= min_score)
        .collect();
    scored.sort_by(|left, right| right.score.partial_cmp(&left.score).unwrap_or(Ordering::Equal));
    scored
}

fn distance(a: &[char], b: &[char]) -> usize {
    // Keep the shorter string along the row to bound the buffer.
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if shorter.is_empty() {
        return longer.len();
    }

    let mut row: Vec<usize> = (0..=shorter.len()).collect();
    for (i, long_char) in longer.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, short_char) in shorter.iter().enumerate() {
            let substitution = if long_char == short_char { diagonal } else { diagonal + 1 };
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }
    row[shorter.len()]
}
