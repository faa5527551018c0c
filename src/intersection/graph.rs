use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use rayon::prelude::*;

use crate::matroid::Matroid;
use crate::set::Set;

/// A node of the exchange graph: the two virtual endpoints BFS searches
/// between, plus one node per ground-set element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Node {
    Source,
    Sink,
    Elem(String),
}

pub(crate) struct ExchangeGraph {
    pub graph: DiGraph<Node, ()>,
    pub source: NodeIndex,
    pub sink: NodeIndex,
}

/// Builds the exchange graph `D_S` for the common independent set `s`.
///
/// Nodes are the elements of the ground set, plus a virtual source and
/// sink collecting the (possibly many) true sources and sinks into the
/// single pair a shortest-path search expects:
///   * a virtual edge `source -> y` for `y ∉ S` with `S + y` independent in
///     `m1` (`y` is a true source);
///   * a virtual edge `y -> sink` for `y ∉ S` with `S + y` independent in
///     `m2` (`y` is a true sink);
///   * an edge `x -> y` for `x ∈ S`, `y ∉ S` when the single-element
///     exchange `S - x + y` is independent in `m1`;
///   * an edge `y -> x` for the same pair when `S - x + y` is independent
///     in `m2`.
pub(crate) fn build<M1, M2>(m1: &M1, m2: &M2, s: &Set) -> ExchangeGraph
where
    M1: Matroid + Sync,
    M2: Matroid + Sync,
{
    let mut graph = DiGraph::new();
    let source = graph.add_node(Node::Source);
    let sink = graph.add_node(Node::Sink);

    let mut index_of: HashMap<String, NodeIndex> = HashMap::new();
    for e in m1.ground_set().iter() {
        let idx = graph.add_node(Node::Elem(e.key().to_string()));
        index_of.insert(e.key().to_string(), idx);
    }

    let in_s = s.to_slice();
    let out_s: Vec<_> = m1
        .ground_set()
        .iter()
        .filter(|e| !s.contains_key(e.key()))
        .collect();

    for y in &out_s {
        let mut grown = s.clone();
        grown.add((*y).clone()).expect("ground set shares one ElementType");

        if m1.independent(&grown) {
            graph.add_edge(source, index_of[y.key()], ());
        }
        if m2.independent(&grown) {
            graph.add_edge(index_of[y.key()], sink, ());
        }
    }

    // The single-element exchange tests (one per (x, y) pair) are the
    // expensive part of building the graph and are independent of one
    // another, so they run in parallel before the graph mutation, which
    // has to happen sequentially.
    let exchange_edges: Vec<(NodeIndex, NodeIndex)> = in_s
        .par_iter()
        .flat_map_iter(|x| {
            out_s.iter().flat_map(move |y| {
                let mut exchanged = s.clone();
                exchanged.remove_key(x.key());
                exchanged.add((*y).clone()).expect("ground set shares one ElementType");

                let mut edges = Vec::with_capacity(2);
                if m1.independent(&exchanged) {
                    edges.push((index_of[x.key()], index_of[y.key()]));
                }
                if m2.independent(&exchanged) {
                    edges.push((index_of[y.key()], index_of[x.key()]));
                }
                edges
            })
        })
        .collect();

    for (from, to) in exchange_edges {
        graph.add_edge(from, to, ());
    }

    ExchangeGraph { graph, source, sink }
}
