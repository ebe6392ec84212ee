use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::node::{Node, NodeId, NodeKind};
use crate::error::{ProvisError, Result};
use crate::graph::ProvenanceGraph;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub kind: NodeKind,
    #[serde(default)]
    pub parent: Option<NodeId>,
    #[serde(default)]
    pub children: Vec<NodeId>,
    #[serde(default)]
    pub succs: Vec<NodeId>,
}

pub fn build_graph(records: Vec<NodeRecord>) -> Result<ProvenanceGraph> {
    let mut nodes: HashMap<NodeId, Node> = HashMap::new();

    for record in records {
        let node = Node {
            id: record.id.clone(),
            kind: record.kind,
            parent: record.parent,
            children: record.children,
            succs: record.succs,
            hidden: false,
            selected: false,
        };
        if nodes.insert(record.id.clone(), node).is_some() {
            return Err(ProvisError::DuplicateNode(record.id));
        }
    }

    check_references(&nodes)?;
    check_linkage(&nodes)?;
    check_parent_cycles(&nodes)?;

    Ok(ProvenanceGraph { nodes })
}

fn check_references(nodes: &HashMap<NodeId, Node>) -> Result<()> {
    for node in nodes.values() {
        if let Some(parent) = node.parent.as_ref() {
            if !nodes.contains_key(parent) {
                return Err(dangling(node, parent, "parent"));
            }
        }
        for child in &node.children {
            if !nodes.contains_key(child) {
                return Err(dangling(node, child, "child"));
            }
        }
        for succ in &node.succs {
            if !nodes.contains_key(succ) {
                return Err(dangling(node, succ, "successor"));
            }
        }
    }
    Ok(())
}

fn check_linkage(nodes: &HashMap<NodeId, Node>) -> Result<()> {
    for node in nodes.values() {
        if let Some(parent) = node.parent.as_ref().and_then(|id| nodes.get(id)) {
            if !parent.children.contains(&node.id) {
                return Err(ProvisError::ParentChildMismatch {
                    parent: parent.id.clone(),
                    child: node.id.clone(),
                });
            }
        }
        for child in node.children.iter().filter_map(|id| nodes.get(id)) {
            if child.parent.as_ref() != Some(&node.id) {
                return Err(ProvisError::ParentChildMismatch {
                    parent: node.id.clone(),
                    child: child.id.clone(),
                });
            }
        }
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Visiting,
    Visited,
}

fn check_parent_cycles(nodes: &HashMap<NodeId, Node>) -> Result<()> {
    let mut state: HashMap<NodeId, VisitState> = HashMap::new();

    for id in nodes.keys() {
        if state.contains_key(id) {
            continue;
        }
        let mut chain = Vec::new();
        let mut current = id.clone();
        loop {
            match state.get(&current) {
                Some(VisitState::Visited) => break,
                Some(VisitState::Visiting) => {
                    return Err(ProvisError::ParentCycle(current));
                }
                None => {}
            }
            state.insert(current.clone(), VisitState::Visiting);
            chain.push(current.clone());
            match nodes.get(&current).and_then(|node| node.parent.clone()) {
                Some(parent) => current = parent,
                None => break,
            }
        }
        for visited in chain {
            state.insert(visited, VisitState::Visited);
        }
    }
    Ok(())
}

fn dangling(node: &Node, to: &NodeId, field: &'static str) -> ProvisError {
    ProvisError::DanglingReference {
        from: node.id.clone(),
        to: to.clone(),
        field,
    }
}
