//! Project entity
//!
//! A project listed on the marketplace. Projects are owned by the
//! catalog; the search core only reads them.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a project, assigned by the catalog on creation
///
/// Identifiers are positive integers. The same identifier keys the
/// project's embedding in the vector store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

impl ProjectId {
    /// Wrap a raw identifier
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw integer value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProjectId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Entity: Marketplace Project
///
/// ## Business Rules
///
/// - Identifier is positive and never changes after creation
/// - Owner never changes after creation
/// - Budget is a non-negative, finite amount
/// - Tags form a set; their order carries no meaning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Catalog-assigned identifier
    pub id: ProjectId,
    /// Short project title
    pub title: String,
    /// Budget offered for the project
    pub budget: f64,
    /// Free-text description, the main input to the project's embedding
    pub description: String,
    /// Skill or topic tags
    pub tags: BTreeSet<String>,
    /// Identifier of the owning user
    pub owner_id: u64,
}

impl Project {
    /// Create a project, checking the entity rules
    pub fn new(
        id: ProjectId,
        title: impl Into<String>,
        budget: f64,
        description: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
        owner_id: u64,
    ) -> Result<Self> {
        let project = Self {
            id,
            title: title.into(),
            budget,
            description: description.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            owner_id,
        };
        project.validate()?;
        Ok(project)
    }

    /// Check the entity rules on an existing value
    pub fn validate(&self) -> Result<()> {
        if self.id.get() == 0 {
            return Err(Error::invalid_argument("project id must be positive"));
        }
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(Error::invalid_argument(format!(
                "project {} has invalid budget {}",
                self.id, self.budget
            )));
        }
        Ok(())
    }

    /// Text the project's embedding is derived from
    ///
    /// Description first, then the tags in sorted order, so that equal
    /// projects always produce the same provider input.
    pub fn embedding_text(&self) -> String {
        if self.tags.is_empty() {
            return self.description.clone();
        }
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        format!("{}\nTags: {}", self.description, tags.join(", "))
    }
}
