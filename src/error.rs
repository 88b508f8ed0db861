//! Error types for the RBAC data model.

use thiserror::Error;

/// The main error type for data-model operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Node with the given name was not found in the hierarchy.
    #[error("Node '{0}' not found")]
    NodeNotFound(String),

    /// Node with the given name already exists in the hierarchy.
    #[error("Node '{0}' already exists")]
    NodeAlreadyExists(String),

    /// Adding an edge would make a node its own ascendant.
    #[error("Circular dependency detected in hierarchy involving '{0}'")]
    CircularDependency(String),

    /// Maximum hierarchy depth exceeded.
    #[error("Maximum hierarchy depth exceeded (max: {0})")]
    MaxDepthExceeded(usize),

    /// A traversal visited more nodes than allowed.
    #[error("Hierarchy traversal limit exceeded (max: {0})")]
    TraversalLimitExceeded(usize),

    /// A relationship is missing its child or parent name.
    #[error("Invalid relationship: {0}")]
    InvalidRelationship(String),

    /// A field contains the reserved constraint delimiter.
    #[error("Field '{field}' contains reserved delimiter '{delimiter}'")]
    ReservedDelimiter {
        /// Name of the offending field.
        field: &'static str,
        /// The configured delimiter.
        delimiter: char,
    },

    /// An encoded constraint did not have the expected field layout.
    #[error("Malformed constraint record: {0}")]
    MalformedConstraint(String),

    /// The constraint type token is not registered.
    #[error("Unknown constraint type '{0}'")]
    UnknownConstraintType(String),

    /// The record's kind marker is not one this codec understands.
    #[error("Unknown constraint marker '{0}'")]
    UnknownConstraintMarker(String),

    /// The comparison operator token is not registered.
    #[error("Unknown comparison operator '{0}'")]
    UnknownOperator(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The process-wide configuration was already installed.
    #[error("Model configuration has already been installed")]
    ConfigAlreadyInstalled,

    /// Serialization error.
    #[cfg(feature = "persistence")]
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for data-model operations.
pub type Result<T> = std::result::Result<T, Error>;
