//! # ergraph Core
//!
//! Core library for ergraph.
//!
//! This crate provides the in-memory graph and the algorithms that run on it:
//!
//! - [`GraphStore`] - Undirected graph keyed by unique string labels
//! - [`RandomGraphGenerator`] - Erdős–Rényi G(n, p) generation
//! - [`shortest_path`] - Unweighted shortest path via breadth-first search
//! - [`RenderSink`] - Display sinks (Graphviz DOT, JSON)
//!
//! ## Example
//!
//! ```rust
//! use ergraph_core::{GeneratorConfig, GraphStore, IndexedLabels, RandomGraphGenerator, shortest_path};
//!
//! // A path graph by hand
//! let mut graph = GraphStore::new();
//! graph.add_edge("A", "B");
//! graph.add_edge("B", "C");
//! let path = shortest_path(&graph, "A", "C").unwrap();
//! assert_eq!(path.nodes(), ["A", "B", "C"]);
//!
//! // A complete graph on four nodes
//! let generator = RandomGraphGenerator::new(GeneratorConfig::new(4, 1.0).with_seed(7));
//! let complete = generator.generate(&mut IndexedLabels::default()).unwrap();
//! assert_eq!(complete.edge_count(), 6);
//! ```

pub mod error;
pub mod graph;
pub mod generator;
pub mod path;
pub mod render;

pub use error::{Error, Result};
pub use graph::{Edge, GraphStore};
pub use generator::{
    generate, GeneratorConfig, IndexedLabels, LabelProvider, ListLabels, RandomGraphGenerator,
};
pub use path::{shortest_path, Path};
pub use render::{circular_layout, DotRenderer, GraphSnapshot, JsonRenderer, Position, RenderSink};
