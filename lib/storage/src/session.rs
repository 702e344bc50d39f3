use crate::persistence::{load_graph, save_graph};
use ergraph_core::{
    shortest_path, Error, GeneratorConfig, GraphStore, LabelProvider, Path, RandomGraphGenerator,
    RenderSink, Result,
};
use std::path::Path as FsPath;
use tracing::info;

/// Owns the single active graph of an interactive session.
///
/// Creating or importing a graph replaces the active one wholesale, and only
/// once the new graph has been fully built; a failed attempt leaves the
/// previous graph in place.
#[derive(Debug, Default)]
pub struct GraphSession {
    active: Option<GraphStore>,
}

impl GraphSession {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn graph(&self) -> Option<&GraphStore> {
        self.active.as_ref()
    }

    /// The active graph, or [`Error::NoActiveGraph`].
    pub fn require(&self) -> Result<&GraphStore> {
        self.active.as_ref().ok_or(Error::NoActiveGraph)
    }

    /// Install `graph`, returning the one it replaces.
    pub fn replace(&mut self, graph: GraphStore) -> Option<GraphStore> {
        self.active.replace(graph)
    }

    pub fn create_random<L>(&mut self, config: GeneratorConfig, labels: &mut L) -> Result<&GraphStore>
    where
        L: LabelProvider + ?Sized,
    {
        let graph = RandomGraphGenerator::new(config).generate(labels)?;
        let active: &GraphStore = self.active.insert(graph);
        Ok(active)
    }

    pub fn import<P: AsRef<FsPath>>(&mut self, path: P) -> Result<&GraphStore> {
        let graph = load_graph(path.as_ref())?;
        info!(path = %path.as_ref().display(), "imported graph replaces active graph");
        let active: &GraphStore = self.active.insert(graph);
        Ok(active)
    }

    pub fn save<P: AsRef<FsPath>>(&self, path: P) -> Result<()> {
        save_graph(self.require()?, path)
    }

    pub fn shortest_path(&self, source: &str, target: &str) -> Result<Path> {
        shortest_path(self.require()?, source, target)
    }

    pub fn render<S>(&self, sink: &mut S, highlighted: Option<&Path>) -> Result<()>
    where
        S: RenderSink + ?Sized,
    {
        sink.render(&self.require()?.snapshot(), highlighted)
    }
}
