use thiserror::Error;

use crate::core::node::NodeId;

#[derive(Debug, Error)]
pub enum ProvisError {
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),
    #[error("duplicate node: {0}")]
    DuplicateNode(NodeId),
    #[error("dangling {field} reference from {from} to {to}")]
    DanglingReference {
        from: NodeId,
        to: NodeId,
        field: &'static str,
    },
    #[error("parent/child mismatch between {parent} and {child}")]
    ParentChildMismatch { parent: NodeId, child: NodeId },
    #[error("cycle in parent chain at {0}")]
    ParentCycle(NodeId),
}

pub type Result<T> = std::result::Result<T, ProvisError>;
