//! Search-Related Value Objects
//!
//! Value objects representing ranked search output.

use crate::entities::{Project, ProjectId};
use serde::{Deserialize, Serialize};

/// Value Object: Ranked Candidate
///
/// One entry of a similarity ranking: the project identifier whose stored
/// embedding was compared against the query, and the cosine similarity.
///
/// ## Business Rules
///
/// - Score is the cosine similarity in [-1, 1] (higher is better)
/// - Zero-magnitude vectors score exactly 0
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoredProject {
    /// Identifier of the ranked project
    pub id: ProjectId,
    /// Cosine similarity between query and project embedding
    pub score: f64,
}

/// Value Object: Search Hit
///
/// A resolved project together with the score that placed it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    /// The matched project
    pub project: Project,
    /// Cosine similarity between query and project embedding
    pub score: f64,
}
