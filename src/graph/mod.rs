use std::collections::HashMap;

use crate::core::node::{Node, NodeId};
use crate::error::{ProvisError, Result};

pub mod builder;
pub mod hierarchy;
pub mod traverse;

#[derive(Debug, Default)]
pub struct ProvenanceGraph {
    pub nodes: HashMap<NodeId, Node>,
}

impl ProvenanceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: &NodeId) -> Result<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| ProvisError::UnknownNode(id.clone()))
    }

    pub(crate) fn node_mut(&mut self, id: &NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| ProvisError::UnknownNode(id.clone()))
    }

    pub fn has_children(&self, id: &NodeId) -> Result<bool> {
        Ok(self.node(id)?.has_children())
    }

    pub fn children(&self, id: &NodeId) -> Result<&[NodeId]> {
        Ok(self.node(id)?.children.as_slice())
    }

    pub fn successors(&self, id: &NodeId) -> Result<&[NodeId]> {
        Ok(self.node(id)?.succs.as_slice())
    }

    pub fn set_hidden(&mut self, id: &NodeId, hidden: bool) -> Result<()> {
        self.node_mut(id)?.hidden = hidden;
        Ok(())
    }

    pub fn set_selected(&mut self, id: &NodeId, selected: bool) -> Result<()> {
        self.node_mut(id)?.selected = selected;
        Ok(())
    }
}
