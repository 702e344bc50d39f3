// Erdős–Rényi G(n, p) random graphs
use crate::{Error, GraphStore, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

/// Supplies the label of the node created at a given index.
///
/// Any `FnMut(usize) -> String` is a label provider.
pub trait LabelProvider {
    fn label(&mut self, index: usize) -> String;
}

impl<F> LabelProvider for F
where
    F: FnMut(usize) -> String,
{
    fn label(&mut self, index: usize) -> String {
        self(index)
    }
}

/// Labels of the form `<prefix><index>`, e.g. `n0`, `n1`, ...
#[derive(Debug, Clone)]
pub struct IndexedLabels {
    prefix: String,
}

impl IndexedLabels {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for IndexedLabels {
    fn default() -> Self {
        Self::new("n")
    }
}

impl LabelProvider for IndexedLabels {
    fn label(&mut self, index: usize) -> String {
        format!("{}{}", self.prefix, index)
    }
}

/// A fixed list of labels. Indexes past the end of the list fall back to the
/// decimal index.
#[derive(Debug, Clone)]
pub struct ListLabels {
    labels: Vec<String>,
}

impl ListLabels {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

impl LabelProvider for ListLabels {
    fn label(&mut self, index: usize) -> String {
        self.labels
            .get(index)
            .cloned()
            .unwrap_or_else(|| index.to_string())
    }
}

/// Parameters for [`RandomGraphGenerator`]
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub node_count: usize,
    pub probability: f64,
    /// Fixed RNG seed for reproducible graphs. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            node_count: 10,
            probability: 0.5,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new(node_count: usize, probability: f64) -> Self {
        Self {
            node_count,
            probability,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.node_count == 0 {
            return Err(Error::InvalidParameter(
                "number of nodes must be a positive integer".to_string(),
            ));
        }
        // NaN fails the range check too
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(Error::InvalidParameter(format!(
                "probability must be between 0 and 1, got {}",
                self.probability
            )));
        }
        Ok(())
    }
}

/// Builds G(n, p) graphs: `n` labeled nodes, each unordered pair of distinct
/// nodes joined independently with probability `p`.
pub struct RandomGraphGenerator {
    config: GeneratorConfig,
}

impl RandomGraphGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a graph, seeding from the config or from the thread RNG.
    pub fn generate<L>(&self, labels: &mut L) -> Result<GraphStore>
    where
        L: LabelProvider + ?Sized,
    {
        match self.config.seed {
            Some(seed) => self.generate_with_rng(&mut StdRng::seed_from_u64(seed), labels),
            None => self.generate_with_rng(&mut rand::rng(), labels),
        }
    }

    /// Generate a graph drawing every pair decision from `rng`.
    ///
    /// Parameters are validated before the label provider is called. Labels
    /// returned more than once collapse into a single node, so the result can
    /// hold fewer than `node_count` nodes.
    pub fn generate_with_rng<R, L>(&self, rng: &mut R, labels: &mut L) -> Result<GraphStore>
    where
        R: Rng,
        L: LabelProvider + ?Sized,
    {
        self.config.validate()?;
        let GeneratorConfig {
            node_count,
            probability,
            ..
        } = self.config;

        let mut graph = GraphStore::with_capacity(node_count);
        for index in 0..node_count {
            let label = labels.label(index);
            if !graph.add_node(&label) {
                warn!(index, label = %label, "duplicate label collapsed into an existing node");
            }
        }

        let count = graph.node_count();
        for i in 0..count {
            for j in (i + 1)..count {
                if rng.random::<f64>() < probability {
                    graph.connect(i, j);
                }
            }
        }

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            probability,
            "generated random graph"
        );
        Ok(graph)
    }
}

/// Shorthand for a one-off unseeded [`RandomGraphGenerator`] run.
pub fn generate<L>(node_count: usize, probability: f64, labels: &mut L) -> Result<GraphStore>
where
    L: LabelProvider + ?Sized,
{
    RandomGraphGenerator::new(GeneratorConfig::new(node_count, probability)).generate(labels)
}
