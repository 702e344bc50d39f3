// Display sinks: a graph snapshot plus an optional highlighted path
use crate::{Edge, GraphStore, Path, Result};
use ahash::AHashSet;
use serde::Serialize;
use std::f64::consts::TAU;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Read-only copy of a graph for display. `positions[i]` belongs to `nodes[i]`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<String>,
    pub edges: Vec<Edge>,
    pub positions: Vec<Position>,
}

impl GraphStore {
    /// Copy nodes and edges out of the store and lay them out on a circle.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes().map(str::to_string).collect(),
            edges: self.edges(),
            positions: circular_layout(self.node_count()),
        }
    }
}

/// Evenly spaced points on a circle, first node at angle zero. The radius
/// grows with the node count so labels do not overlap.
pub fn circular_layout(count: usize) -> Vec<Position> {
    if count == 1 {
        return vec![Position { x: 0.0, y: 0.0 }];
    }
    let radius = 1.0 + count as f64 / 6.0;
    (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64;
            Position {
                x: radius * angle.cos(),
                y: radius * angle.sin(),
            }
        })
        .collect()
}

/// Something that can display a graph. Sinks never feed back into the store.
pub trait RenderSink {
    fn render(&mut self, snapshot: &GraphSnapshot, highlighted: Option<&Path>) -> Result<()>;
}

fn highlighted_edges(path: Option<&Path>) -> AHashSet<Edge> {
    path.map(|p| p.edges().map(|(a, b)| Edge::new(a, b)).collect())
        .unwrap_or_default()
}

fn dot_id(label: &str) -> String {
    format!("\"{}\"", label.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Graphviz output with pinned positions (render with `neato -n` or `fdp`).
/// Path edges are drawn red at double width.
pub struct DotRenderer<W: Write> {
    writer: W,
}

impl<W: Write> DotRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderSink for DotRenderer<W> {
    fn render(&mut self, snapshot: &GraphSnapshot, highlighted: Option<&Path>) -> Result<()> {
        let on_path = highlighted_edges(highlighted);
        let w = &mut self.writer;

        writeln!(w, "graph G {{")?;
        writeln!(w, "  node [shape=circle, fontsize=10];")?;
        for (label, pos) in snapshot.nodes.iter().zip(&snapshot.positions) {
            writeln!(w, "  {} [pos=\"{:.3},{:.3}!\"];", dot_id(label), pos.x, pos.y)?;
        }
        for edge in &snapshot.edges {
            if on_path.contains(edge) {
                writeln!(
                    w,
                    "  {} -- {} [color=red, penwidth=2];",
                    dot_id(&edge.a),
                    dot_id(&edge.b)
                )?;
            } else {
                writeln!(w, "  {} -- {};", dot_id(&edge.a), dot_id(&edge.b))?;
            }
        }
        writeln!(w, "}}")?;
        w.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    #[serde(flatten)]
    snapshot: &'a GraphSnapshot,
    highlighted_path: Option<&'a Path>,
}

/// Pretty-printed JSON of the snapshot plus a `highlighted_path` field.
pub struct JsonRenderer<W: Write> {
    writer: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderSink for JsonRenderer<W> {
    fn render(&mut self, snapshot: &GraphSnapshot, highlighted: Option<&Path>) -> Result<()> {
        let doc = JsonDocument {
            snapshot,
            highlighted_path: highlighted,
        };
        serde_json::to_writer_pretty(&mut self.writer, &doc)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortest_path;

    #[test]
    fn test_snapshot_matches_store() {
        let graph = GraphStore::from_edges([("A", "B"), ("B", "C")]);
        let snapshot = graph.snapshot();
        assert_eq!(snapshot.nodes, vec!["A", "B", "C"]);
        assert_eq!(snapshot.edges.len(), 2);
        assert_eq!(snapshot.positions.len(), 3);
    }

    #[test]
    fn test_circular_layout() {
        assert!(circular_layout(0).is_empty());
        assert_eq!(circular_layout(1), vec![Position { x: 0.0, y: 0.0 }]);
        let points = circular_layout(4);
        let radius = (points[0].x.powi(2) + points[0].y.powi(2)).sqrt();
        for p in &points {
            assert!(((p.x.powi(2) + p.y.powi(2)).sqrt() - radius).abs() < 1e-9);
        }
    }

    #[test]
    fn test_dot_highlights_path_edges() {
        let graph = GraphStore::from_edges([("A", "B"), ("B", "C"), ("A", "D")]);
        let path = shortest_path(&graph, "C", "A").unwrap();
        let mut sink = DotRenderer::new(Vec::new());
        sink.render(&graph.snapshot(), Some(&path)).unwrap();
        let dot = String::from_utf8(sink.into_inner()).unwrap();

        assert!(dot.starts_with("graph G {"));
        assert!(dot.contains("\"A\" -- \"B\" [color=red, penwidth=2];"));
        assert!(dot.contains("\"B\" -- \"C\" [color=red, penwidth=2];"));
        assert!(dot.contains("\"A\" -- \"D\";"));
    }

    #[test]
    fn test_dot_escapes_quotes() {
        let mut graph = GraphStore::new();
        graph.add_node("say\"hi\"");
        let mut sink = DotRenderer::new(Vec::new());
        sink.render(&graph.snapshot(), None).unwrap();
        let dot = String::from_utf8(sink.into_inner()).unwrap();
        assert!(dot.contains("\"say\\\"hi\\\"\""));
    }

    #[test]
    fn test_json_document() {
        let graph = GraphStore::from_edges([("A", "B")]);
        let path = shortest_path(&graph, "A", "B").unwrap();
        let mut sink = JsonRenderer::new(Vec::new());
        sink.render(&graph.snapshot(), Some(&path)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();

        assert_eq!(value["nodes"], serde_json::json!(["A", "B"]));
        assert_eq!(value["edges"][0]["a"], "A");
        assert_eq!(value["highlighted_path"], serde_json::json!(["A", "B"]));
        assert_eq!(value["positions"].as_array().unwrap().len(), 2);
    }
}
