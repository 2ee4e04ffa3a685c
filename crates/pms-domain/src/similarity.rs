//! Similarity Ranking
//!
//! Pure cosine-similarity ranking of stored project embeddings against a
//! query embedding. No I/O and no shared state, so it is safe to call from
//! any number of concurrent searches.

use crate::entities::ProjectId;
use crate::value_objects::ScoredProject;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::warn;

/// Euclidean magnitude of a vector, accumulated in `f64`
pub fn magnitude(v: &[f32]) -> f64 {
    v.iter()
        .map(|x| f64::from(*x) * f64::from(*x))
        .sum::<f64>()
        .sqrt()
}

fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum()
}

/// Cosine similarity of two vectors of equal length
///
/// Returns 0 when either vector has zero magnitude. The result is symmetric
/// in its arguments.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    cosine_similarity_with_norm(a, b, magnitude(a))
}

/// Cosine similarity with a precomputed norm for `a`
fn cosine_similarity_with_norm(a: &[f32], b: &[f32], norm_a: f64) -> f64 {
    let norm_b = magnitude(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    // Adding +0.0 folds -0.0 into +0.0 so equal scores tie under total_cmp
    (dot(a, b) / (norm_a * norm_b)).clamp(-1.0, 1.0) + 0.0
}

/// Descending score, ascending identifier on ties
fn rank_order(a: &ScoredProject, b: &ScoredProject) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id))
}

/// Similarity ranker over a candidate set
///
/// Stateless; exists so the ranking strategy has a name at the seams where
/// services hold one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityRanker;

impl SimilarityRanker {
    /// Create a ranker
    pub fn new() -> Self {
        Self
    }

    /// Rank `candidates` by cosine similarity to `query`
    ///
    /// See [`rank`].
    pub fn rank(
        &self,
        query: &[f32],
        candidates: &HashMap<ProjectId, Vec<f32>>,
        limit: usize,
    ) -> Vec<ScoredProject> {
        rank(query, candidates, limit)
    }
}

/// Rank `candidates` by cosine similarity to `query`
///
/// - Candidates whose length differs from the query are skipped
/// - Candidates whose score is not finite are skipped
/// - Output is sorted by descending score, ties broken by ascending id
/// - Output holds `min(limit, valid candidates)` entries
pub fn rank(
    query: &[f32],
    candidates: &HashMap<ProjectId, Vec<f32>>,
    limit: usize,
) -> Vec<ScoredProject> {
    if limit == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let query_norm = magnitude(query);
    let mut scored: Vec<ScoredProject> = Vec::with_capacity(candidates.len());

    for (id, vector) in candidates {
        if vector.len() != query.len() {
            warn!(
                project_id = %id,
                expected = query.len(),
                actual = vector.len(),
                "Skipping candidate with mismatched dimension"
            );
            continue;
        }
        let score = cosine_similarity_with_norm(query, vector, query_norm);
        if !score.is_finite() {
            warn!(project_id = %id, "Skipping candidate with non-finite similarity");
            continue;
        }
        scored.push(ScoredProject { id: *id, score });
    }

    if scored.len() > limit {
        scored.select_nth_unstable_by(limit - 1, rank_order);
        scored.truncate(limit);
    }
    scored.sort_by(rank_order);
    scored
}
