// Undirected graph keyed by string labels
use ahash::{AHashMap, AHashSet};
use serde::Serialize;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Dense index of a node inside a [`GraphStore`], assigned in insertion order.
pub(crate) type NodeIdx = usize;

#[inline]
fn edge_key(a: NodeIdx, b: NodeIdx) -> (NodeIdx, NodeIdx) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// An unordered pair of node labels.
///
/// `Edge::new("a", "b") == Edge::new("b", "a")`; hashing follows the same rule,
/// so edges from different graphs can be compared as sets.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    pub a: String,
    pub b: String,
}

impl Edge {
    #[inline]
    #[must_use]
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Endpoints ordered lexically, independent of construction order.
    #[inline]
    pub fn canonical(&self) -> (&str, &str) {
        if self.a <= self.b {
            (&self.a, &self.b)
        } else {
            (&self.b, &self.a)
        }
    }

    #[inline]
    pub fn contains(&self, label: &str) -> bool {
        self.a == label || self.b == label
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

/// In-memory undirected graph with unique string labels.
///
/// Nodes keep their insertion order, and each adjacency list keeps the order
/// in which its edges were added. Both orders are observable through
/// [`nodes`](Self::nodes) and [`neighbors`](Self::neighbors) and drive the
/// layout of encoded files.
///
/// Invariants:
/// - every edge endpoint is a node;
/// - `b` is in the adjacency of `a` iff `a` is in the adjacency of `b` iff the
///   pair is in the edge set;
/// - no self-loops, no parallel edges.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    labels: Vec<String>,
    index: AHashMap<String, NodeIdx>,
    adjacency: Vec<Vec<NodeIdx>>,
    edges: AHashSet<(NodeIdx, NodeIdx)>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            labels: Vec::with_capacity(nodes),
            index: AHashMap::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edges: AHashSet::new(),
        }
    }

    /// Build a graph from a list of label pairs using [`add_edge`](Self::add_edge).
    pub fn from_edges<I, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(a.as_ref(), b.as_ref());
        }
        graph
    }

    fn intern(&mut self, label: &str) -> (NodeIdx, bool) {
        if let Some(&idx) = self.index.get(label) {
            return (idx, false);
        }
        let idx = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), idx);
        self.adjacency.push(Vec::new());
        (idx, true)
    }

    /// Insert a node. Returns `false` if the label was already present.
    pub fn add_node(&mut self, label: &str) -> bool {
        self.intern(label).1
    }

    /// Connect `a` and `b`.
    ///
    /// Endpoints that are not yet nodes are created first, in argument order,
    /// so callers may reference labels that were never passed to
    /// [`add_node`](Self::add_node). Returns `true` only if a new edge was
    /// inserted. Existing edges are left untouched, and a self-loop request
    /// (`a == b`) is ignored without creating anything.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            debug!(label = a, "ignoring self-loop");
            return false;
        }
        let (ia, _) = self.intern(a);
        let (ib, _) = self.intern(b);
        self.connect(ia, ib)
    }

    pub(crate) fn connect(&mut self, ia: NodeIdx, ib: NodeIdx) -> bool {
        if ia == ib || !self.edges.insert(edge_key(ia, ib)) {
            return false;
        }
        self.adjacency[ia].push(ib);
        self.adjacency[ib].push(ia);
        true
    }

    #[inline]
    pub fn has_node(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(ia), Some(ib)) => self.edges.contains(&edge_key(ia, ib)),
            _ => false,
        }
    }

    /// Neighbors of `label` in the order their edges were added.
    /// Unknown labels have no neighbors.
    pub fn neighbors(&self, label: &str) -> Vec<&str> {
        self.index_of(label)
            .map(|idx| {
                self.adjacency[idx]
                    .iter()
                    .map(|&n| self.labels[n].as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Node labels in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Every edge exactly once, ordered by the earlier-inserted endpoint and
    /// then by that endpoint's adjacency order.
    pub fn edges(&self) -> Vec<Edge> {
        let mut out = Vec::with_capacity(self.edges.len());
        for (i, neighbors) in self.adjacency.iter().enumerate() {
            for &j in neighbors {
                if i < j {
                    out.push(Edge::new(self.labels[i].as_str(), self.labels[j].as_str()));
                }
            }
        }
        out
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn degree(&self, label: &str) -> usize {
        self.index_of(label)
            .map(|idx| self.adjacency[idx].len())
            .unwrap_or(0)
    }

    /// Disconnect `a` and `b`. Both nodes stay in the graph.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> bool {
        let (Some(ia), Some(ib)) = (self.index_of(a), self.index_of(b)) else {
            return false;
        };
        if !self.edges.remove(&edge_key(ia, ib)) {
            return false;
        }
        self.adjacency[ia].retain(|&n| n != ib);
        self.adjacency[ib].retain(|&n| n != ia);
        true
    }

    /// Remove a node and every edge touching it.
    ///
    /// Remaining nodes keep their relative insertion order.
    pub fn remove_node(&mut self, label: &str) -> bool {
        let Some(removed) = self.index.remove(label) else {
            return false;
        };
        self.labels.remove(removed);
        self.adjacency.remove(removed);

        let shift = |n: NodeIdx| if n > removed { n - 1 } else { n };
        for neighbors in &mut self.adjacency {
            neighbors.retain(|&n| n != removed);
            for n in neighbors.iter_mut() {
                *n = shift(*n);
            }
        }
        for idx in self.index.values_mut() {
            *idx = shift(*idx);
        }
        self.edges = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, neighbors)| neighbors.iter().map(move |&j| edge_key(i, j)))
            .collect();
        debug!(label, "removed node");
        true
    }

    #[inline]
    pub(crate) fn index_of(&self, label: &str) -> Option<NodeIdx> {
        self.index.get(label).copied()
    }

    #[inline]
    pub(crate) fn label(&self, idx: NodeIdx) -> &str {
        &self.labels[idx]
    }

    #[inline]
    pub(crate) fn neighbor_indices(&self, idx: NodeIdx) -> &[NodeIdx] {
        &self.adjacency[idx]
    }
}
