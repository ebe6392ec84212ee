use std::collections::{HashSet, VecDeque};

use crate::core::node::{Node, NodeId, NodeKind};
use crate::error::Result;
use crate::graph::ProvenanceGraph;

// Successors that sit two levels deep inside a group are reported as their
// enclosing group, so the caller sees the graph at group granularity.
pub fn grouped_bfs(graph: &ProvenanceGraph, start: &NodeId) -> Result<Vec<NodeId>> {
    graph.node(start)?;

    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut order: Vec<NodeId> = Vec::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    seen.insert(start.clone());
    order.push(start.clone());
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        for succ in graph.successors(&current)? {
            let node = graph.node(succ)?;
            let substitute = match node.kind {
                NodeKind::Leaf => grandparent_of(graph, node)?,
                NodeKind::Group => None,
            };
            let next = match substitute {
                Some(grandparent) if !seen.contains(&grandparent) => grandparent,
                _ => succ.clone(),
            };
            if seen.insert(next.clone()) {
                order.push(next.clone());
                queue.push_back(next);
            }
        }
    }

    Ok(order)
}

fn grandparent_of(graph: &ProvenanceGraph, node: &Node) -> Result<Option<NodeId>> {
    let parent = match node.parent.as_ref() {
        Some(parent) => graph.node(parent)?,
        None => return Ok(None),
    };
    Ok(parent.parent.clone())
}
