use crate::core::node::{Node, NodeId};
use crate::error::Result;
use crate::graph::ProvenanceGraph;

pub fn cascade_hide<F>(graph: &mut ProvenanceGraph, id: &NodeId, mut on_hide: F) -> Result<()>
where
    F: FnMut(&NodeId),
{
    let mut stack = graph.node(id)?.children.clone();

    while let Some(current) = stack.pop() {
        let node = graph.node_mut(&current)?;
        node.hidden = true;
        stack.extend(node.children.iter().cloned());
        on_hide(&current);
    }
    Ok(())
}

pub fn cascade_select<F>(
    graph: &mut ProvenanceGraph,
    id: &NodeId,
    selected: bool,
    mut on_change: F,
) -> Result<()>
where
    F: FnMut(&Node),
{
    let mut stack = graph.node(id)?.children.clone();

    while let Some(current) = stack.pop() {
        let node = graph.node_mut(&current)?;
        node.selected = selected;
        stack.extend(node.children.iter().cloned());
        on_change(graph.node(&current)?);
    }
    Ok(())
}
