// Adjacency-list text format
//
// One line per node, in node insertion order:
//
//     <label> <neighbor1> <neighbor2> ... <neighborN>
//
// Isolated nodes are written as the bare label. Every edge appears on the
// lines of both endpoints; decoding collapses the duplicate.
use ergraph_core::{Error, GraphStore, Result};
use std::io::{BufRead, Write};
use tracing::debug;

fn check_label(label: &str) -> Result<()> {
    if label.is_empty() || label.chars().any(char::is_whitespace) {
        return Err(Error::InvalidParameter(format!(
            "label {:?} cannot be encoded: labels must be non-empty and contain no whitespace",
            label
        )));
    }
    Ok(())
}

/// Reject graphs whose labels would not survive an encode/decode round trip.
pub fn validate_labels(graph: &GraphStore) -> Result<()> {
    graph.nodes().try_for_each(check_label)
}

/// Write `graph` to `writer`. Nothing is written if any label is unencodable.
pub fn encode<W: Write>(graph: &GraphStore, mut writer: W) -> Result<()> {
    validate_labels(graph)?;
    for node in graph.nodes() {
        writer.write_all(node.as_bytes())?;
        for neighbor in graph.neighbors(node) {
            writer.write_all(b" ")?;
            writer.write_all(neighbor.as_bytes())?;
        }
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn encode_to_string(graph: &GraphStore) -> Result<String> {
    let mut buf = Vec::new();
    encode(graph, &mut buf)?;
    // Labels are &str, so the buffer is valid UTF-8
    String::from_utf8(buf).map_err(|e| Error::Serialization(e.to_string()))
}

/// Parse the adjacency format into a fresh graph.
///
/// Blank lines are skipped. The first token of a line is always added as a
/// node, the rest are connected to it. Tokens equal to the first one are
/// ignored, as are repeated edges.
pub fn decode<R: BufRead>(reader: R) -> Result<GraphStore> {
    let mut graph = GraphStore::new();
    for line in reader.lines() {
        decode_line(&mut graph, &line?);
    }
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "decoded adjacency list"
    );
    Ok(graph)
}

pub fn decode_str(text: &str) -> GraphStore {
    let mut graph = GraphStore::new();
    for line in text.lines() {
        decode_line(&mut graph, line);
    }
    graph
}

fn decode_line(graph: &mut GraphStore, line: &str) {
    let mut tokens = line.split_whitespace();
    let Some(source) = tokens.next() else {
        return;
    };
    graph.add_node(source);
    for neighbor in tokens {
        graph.add_edge(source, neighbor);
    }
}
