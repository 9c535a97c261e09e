//! Error types
//!
//! Every failure is local to one `convert` or `restore_attribute` call.
//! Nothing is retried: conversions are deterministic, so a retry cannot
//! change the outcome.

use crate::dom::NodeId;

/// Errors raised while configuring, converting or restoring
#[derive(Debug, thiserror::Error)]
pub enum EmmetError {
    /// An option is out of range and cannot be coerced
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The pool holds something the converter cannot render
    #[error("Structural error at node {node}: {reason}")]
    Structural { node: NodeId, reason: String },

    /// The token vocabulary ran dry mid-conversion
    #[error("Token vocabulary exhausted after {issued} placeholders")]
    AllocatorExhausted { issued: usize },

    /// An XPath predicate matcher failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl EmmetError {
    pub(crate) fn structural(node: NodeId, reason: impl Into<String>) -> Self {
        EmmetError::Structural {
            node,
            reason: reason.into(),
        }
    }

    pub(crate) fn missing_node(node: NodeId) -> Self {
        Self::structural(node, "node id is not present in the pool")
    }
}

pub type Result<T> = std::result::Result<T, EmmetError>;
