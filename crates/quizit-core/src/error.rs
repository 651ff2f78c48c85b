//! Error taxonomy for ordering generation.

use thiserror::Error;

/// Errors produced while validating components or generating orderings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    /// A prerequisite references an id that is not in the component set.
    #[error("Component \"{component}\" has prerequisite \"{missing}\" which is not a valid component ID")]
    MissingPrerequisite { component: String, missing: String },

    /// An id is empty or contains whitespace, so it cannot be written in the
    /// space-joined wire form.
    #[error("Component ID {id:?} must be non-empty and contain no whitespace")]
    InvalidComponentId { id: String },

    /// Two components share the same id.
    #[error("Component ID \"{id}\" is used by more than one component")]
    DuplicateComponent { id: String },

    /// The prerequisite graph is not a DAG.
    ///
    /// `cycle` is a closed path (first id repeated at the end).
    #[error("Circular dependency detected")]
    CircularDependency { cycle: Vec<String> },

    /// The permutation limit must be a positive integer.
    #[error("maxPermutations must be a positive integer, got {value}")]
    InvalidLimit { value: usize },

    /// A configuration override could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The pipeline reached a state its preconditions rule out.
    #[error("Error generating orderings: {0}")]
    Internal(String),
}

impl OrderingError {
    /// Short machine-readable tag, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            OrderingError::MissingPrerequisite { .. } => "missing_prerequisite",
            OrderingError::InvalidComponentId { .. } => "invalid_component_id",
            OrderingError::DuplicateComponent { .. } => "duplicate_component",
            OrderingError::CircularDependency { .. } => "circular_dependency",
            OrderingError::InvalidLimit { .. } => "invalid_limit",
            OrderingError::InvalidConfig(_) => "invalid_config",
            OrderingError::Internal(_) => "internal",
        }
    }
}

/// Convenience result alias.
pub type OrderingResult<T> = std::result::Result<T, OrderingError>;
