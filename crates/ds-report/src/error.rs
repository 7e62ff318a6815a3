//! Error types for report generation.

use std::fmt;

use thiserror::Error;

/// The entity holding a broken attribute link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOwner {
    Category(String),
    Attribute(String),
}

impl fmt::Display for LinkOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkOwner::Category(id) => write!(f, "category '{id}'"),
            LinkOwner::Attribute(id) => write!(f, "attribute '{id}'"),
        }
    }
}

/// Errors that can occur while building a report.
///
/// A missing start category is not an error; it yields an empty report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// An attribute link points at an id with no attribute.
    #[error("attribute '{attribute_id}' linked from {owner} does not exist")]
    AttributeNotFound {
        attribute_id: String,
        owner: LinkOwner,
    },

    /// A composite type reaches itself through its nested links.
    #[error("cyclic type reference: {}", .path.join(" -> "))]
    CyclicTypeReference { path: Vec<String> },

    /// A category is its own ancestor.
    #[error("cyclic category hierarchy: {}", .path.join(" -> "))]
    CyclicCategoryHierarchy { path: Vec<String> },

    /// Type nesting went deeper than the configured limit.
    #[error("type of attribute '{attribute_id}' is nested deeper than {limit} levels")]
    DepthLimitExceeded { attribute_id: String, limit: usize },
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
