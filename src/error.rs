//! Error types for the element tree and thumb construction.

use crate::dom::NodeId;

/// Errors raised by element tree operations and direction parsing.
///
/// Geometry itself never fails: degenerate sizes flow through as NaN or
/// infinite values instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScrollbarError {
    #[error("Unknown track direction: {0}")]
    UnknownDirection(String),

    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Cannot insert node {child} into {parent}: the parent is inside the child")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}

/// Result alias for element tree operations.
pub type Result<T> = std::result::Result<T, ScrollbarError>;
