// Breadth-first shortest paths between labeled nodes
use crate::graph::NodeIdx;
use crate::{Error, GraphStore, Result};
use ahash::AHashSet;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

/// A simple path: consecutive labels are adjacent, no label repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<String>);

impl Path {
    pub fn new(nodes: Vec<String>) -> Self {
        Self(nodes)
    }

    #[inline]
    pub fn nodes(&self) -> &[String] {
        &self.0
    }

    #[inline]
    pub fn into_nodes(self) -> Vec<String> {
        self.0
    }

    /// Number of edges walked. A single-node path has zero hops.
    #[inline]
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn target(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Consecutive label pairs, in walking order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.windows(2).map(|w| (w[0].as_str(), w[1].as_str()))
    }

    /// Whether this is a non-empty simple path in `graph`.
    pub fn is_valid_in(&self, graph: &GraphStore) -> bool {
        if self.0.is_empty() || !self.0.iter().all(|n| graph.has_node(n)) {
            return false;
        }
        let mut seen = AHashSet::with_capacity(self.0.len());
        if !self.0.iter().all(|n| seen.insert(n)) {
            return false;
        }
        self.edges().all(|(a, b)| graph.has_edge(a, b))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" -> "))
    }
}

/// Minimum-hop path from `source` to `target`.
///
/// Breadth-first search over the adjacency lists. When several shortest paths
/// exist the one returned depends on neighbor insertion order, so callers
/// should only rely on its length and validity.
///
/// Fails with [`Error::NodeNotFound`] listing every missing endpoint, or
/// [`Error::NoPathExists`] when the endpoints are in different components.
pub fn shortest_path(graph: &GraphStore, source: &str, target: &str) -> Result<Path> {
    let (src, dst) = match (graph.index_of(source), graph.index_of(target)) {
        (Some(src), Some(dst)) => (src, dst),
        (src, dst) => {
            let mut missing = Vec::with_capacity(2);
            if src.is_none() {
                missing.push(source.to_string());
            }
            if dst.is_none() && (target != source || src.is_some()) {
                missing.push(target.to_string());
            }
            return Err(Error::NodeNotFound { missing });
        }
    };

    if src == dst {
        return Ok(Path(vec![source.to_string()]));
    }

    // parent[n] == Some(p): n was discovered from p
    let mut parent: Vec<Option<NodeIdx>> = vec![None; graph.node_count()];
    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();
    visited[src] = true;
    queue.push_back(src);

    while let Some(current) = queue.pop_front() {
        for &next in graph.neighbor_indices(current) {
            if visited[next] {
                continue;
            }
            visited[next] = true;
            parent[next] = Some(current);
            if next == dst {
                return Ok(reconstruct(graph, &parent, dst));
            }
            queue.push_back(next);
        }
    }

    Err(Error::NoPathExists {
        source_label: source.to_string(),
        target_label: target.to_string(),
    })
}

fn reconstruct(graph: &GraphStore, parent: &[Option<NodeIdx>], dst: NodeIdx) -> Path {
    let mut nodes = vec![graph.label(dst).to_string()];
    let mut current = dst;
    while let Some(prev) = parent[current] {
        nodes.push(graph.label(prev).to_string());
        current = prev;
    }
    nodes.reverse();
    Path(nodes)
}
