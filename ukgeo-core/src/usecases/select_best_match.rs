use super::prelude::*;
use crate::{similarity::similarity, text::normalize_address};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("No candidate reached the match threshold")]
pub struct NoMatch {
    /// Score of the best candidate, if there was any
    pub best_score: Option<f64>,
}

/// Score a record by its best matching address text.
///
/// The query is expected to be normalized already.
pub fn score_candidate(record: &AddressRecord, normalized_query: &str) -> f64 {
    record
        .match_texts()
        .map(|text| similarity(&normalize_address(text), normalized_query))
        .fold(0.0, f64::max)
}

/// Pick the candidate that matches the query best.
///
/// Among equally scored candidates the first one wins.
/// A score equal to the threshold is accepted.
pub fn select_best_match<I>(
    candidates: I,
    query: &str,
    threshold: f64,
) -> std::result::Result<ScoredCandidate, NoMatch>
where
    I: IntoIterator<Item = AddressRecord>,
{
    let query = normalize_address(query);
    let mut best: Option<ScoredCandidate> = None;
    for record in candidates {
        let score = score_candidate(&record, &query);
        if best.as_ref().is_some_and(|best| score <= best.score) {
            continue;
        }
        best = Some(ScoredCandidate { record, score });
        if score >= 1.0 {
            // Nothing can beat a perfect match
            break;
        }
    }
    match best {
        Some(best) if best.score >= threshold => Ok(best),
        best => Err(NoMatch {
            best_score: best.map(|c| c.score),
        }),
    }
}
