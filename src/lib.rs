//! # ergraph
//!
//! Labeled undirected graphs: random generation, shortest paths and a plain
//! adjacency-list file format.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install ergraph
//! ergraph generate --nodes 8 --probability 0.3 --seed 42 --output graph.txt
//! ergraph path --input graph.txt --from n0 --to n5
//! ergraph            # interactive menu
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use ergraph::prelude::*;
//!
//! let config = GeneratorConfig::new(8, 0.3).with_seed(42);
//! let graph = RandomGraphGenerator::new(config)
//!     .generate(&mut IndexedLabels::default())
//!     .unwrap();
//!
//! save_graph(&graph, "graph.txt").unwrap();
//! let restored = load_graph("graph.txt").unwrap();
//! match shortest_path(&restored, "n0", "n5") {
//!     Ok(path) => println!("{}", path),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - [`ergraph-core`](https://docs.rs/ergraph-core) - Graph store, G(n, p) generator, BFS, render sinks
//! - [`ergraph-storage`](https://docs.rs/ergraph-storage) - Adjacency-list codec, atomic persistence, sessions

pub mod menu;

// Re-export core types
pub use ergraph_core::{
    shortest_path, DotRenderer, Edge, Error, GeneratorConfig, GraphSnapshot, GraphStore,
    IndexedLabels, JsonRenderer, LabelProvider, ListLabels, Path, RandomGraphGenerator,
    RenderSink, Result,
};

// Re-export storage
pub use ergraph_storage::{codec, load_graph, save_graph, GraphSession};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_graph, save_graph, shortest_path, DotRenderer, Edge, Error, GeneratorConfig,
        GraphSession, GraphStore, IndexedLabels, JsonRenderer, LabelProvider, ListLabels, Path,
        RandomGraphGenerator, RenderSink, Result,
    };
}
