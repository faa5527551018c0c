use std::collections::{HashMap, VecDeque};

use log::trace;
use petgraph::graph::{DiGraph, NodeIndex};

use super::graph::Node;

/// Finds a shortest `source -> sink` path by breadth-first search. Returns
/// the path's element keys, in traversal order, with the virtual
/// source/sink endpoints stripped. `None` if no augmenting path exists,
/// the signal that the current common independent set is already maximum.
pub(crate) fn shortest_augmenting_path(
    graph: &DiGraph<Node, ()>,
    source: NodeIndex,
    sink: NodeIndex,
) -> Option<Vec<String>> {
    let mut parent: HashMap<NodeIndex, Option<NodeIndex>> = HashMap::new();
    let mut queue = VecDeque::new();

    parent.insert(source, None);
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        trace!("BFS visiting node {:?}", graph[node]);
        if node == sink {
            let mut path = Vec::new();
            let mut cur = Some(node);
            while let Some(n) = cur {
                path.push(n);
                cur = parent[&n];
            }
            path.reverse();

            return Some(
                path.into_iter()
                    .filter_map(|idx| match &graph[idx] {
                        Node::Elem(key) => Some(key.clone()),
                        Node::Source | Node::Sink => None,
                    })
                    .collect(),
            );
        }

        for neighbor in graph.neighbors(node) {
            if !parent.contains_key(&neighbor) {
                parent.insert(neighbor, Some(node));
                queue.push_back(neighbor);
            }
        }
    }

    None
}
