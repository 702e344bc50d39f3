// Integration tests for ergraph
use ergraph::codec::{decode_str, encode_to_string};
use ergraph::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tempfile::tempdir;

fn edge_set(graph: &GraphStore) -> HashSet<Edge> {
    graph.edges().into_iter().collect()
}

fn node_set(graph: &GraphStore) -> HashSet<String> {
    graph.nodes().map(str::to_string).collect()
}

/// Random edge lists over a small label alphabet, including self-loops and
/// repeats, built through the public mutation API.
fn random_graph(rng: &mut StdRng) -> GraphStore {
    let mut graph = GraphStore::new();
    let labels: Vec<String> = (0..12).map(|i| format!("v{}", i)).collect();
    for _ in 0..rng.random_range(0..8) {
        graph.add_node(&labels[rng.random_range(0..labels.len())]);
    }
    for _ in 0..rng.random_range(0..30) {
        let a = &labels[rng.random_range(0..labels.len())];
        let b = &labels[rng.random_range(0..labels.len())];
        graph.add_edge(a, b);
    }
    graph
}

#[test]
fn test_add_node_idempotence() {
    let mut graph = GraphStore::new();
    for label in ["a", "b", "c"] {
        graph.add_node(label);
    }
    let before = graph.node_count();
    for label in ["a", "b", "c"] {
        graph.add_node(label);
    }
    assert_eq!(graph.node_count(), before);
}

#[test]
fn test_edge_symmetry() {
    let mut graph = GraphStore::new();
    graph.add_edge("a", "b");
    graph.add_edge("b", "a");
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.neighbors("a").contains(&"b"));
    assert!(graph.neighbors("b").contains(&"a"));
}

#[test]
fn test_round_trip_random_graphs() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..50 {
        let graph = random_graph(&mut rng);
        let decoded = decode_str(&encode_to_string(&graph).unwrap());
        assert_eq!(node_set(&decoded), node_set(&graph));
        assert_eq!(edge_set(&decoded), edge_set(&graph));
    }
}

#[test]
fn test_round_trip_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    let graph = RandomGraphGenerator::new(GeneratorConfig::new(25, 0.2).with_seed(9))
        .generate(&mut IndexedLabels::default())
        .unwrap();

    save_graph(&graph, &path).unwrap();
    let loaded = load_graph(&path).unwrap();
    assert_eq!(node_set(&loaded), node_set(&graph));
    assert_eq!(edge_set(&loaded), edge_set(&graph));
}

#[test]
fn test_self_path_for_every_node() {
    let graph = GraphStore::from_edges([("A", "B"), ("C", "D")]);
    for node in graph.nodes() {
        assert_eq!(shortest_path(&graph, node, node).unwrap().nodes(), [node]);
    }
}

#[test]
fn test_components_have_no_path() {
    let graph = GraphStore::from_edges([("A", "B"), ("C", "D")]);
    assert!(matches!(
        shortest_path(&graph, "A", "D"),
        Err(Error::NoPathExists { .. })
    ));
}

#[test]
fn test_absent_endpoint_is_node_not_found() {
    let graph = GraphStore::from_edges([("A", "B")]);
    assert!(matches!(
        shortest_path(&graph, "A", "Z"),
        Err(Error::NodeNotFound { .. })
    ));
    assert!(matches!(
        shortest_path(&graph, "Z", "A"),
        Err(Error::NodeNotFound { .. })
    ));
}

#[test]
fn test_generation_extremes() {
    let empty = RandomGraphGenerator::new(GeneratorConfig::new(5, 0.0))
        .generate(&mut IndexedLabels::default())
        .unwrap();
    assert_eq!(empty.node_count(), 5);
    assert_eq!(empty.edge_count(), 0);

    let complete = RandomGraphGenerator::new(GeneratorConfig::new(4, 1.0))
        .generate(&mut IndexedLabels::default())
        .unwrap();
    assert_eq!(complete.edge_count(), 6);
}

#[test]
fn test_chain_scenario() {
    let graph = GraphStore::from_edges([("A", "B"), ("B", "C"), ("C", "D")]);
    assert_eq!(shortest_path(&graph, "A", "D").unwrap().nodes(), ["A", "B", "C", "D"]);
}

#[test]
fn test_single_isolated_node_file() {
    let mut graph = GraphStore::new();
    graph.add_node("X");
    let text = encode_to_string(&graph).unwrap();
    assert_eq!(text.trim_end_matches('\n'), "X");

    let decoded = decode_str(&text);
    assert_eq!(decoded.node_count(), 1);
    assert_eq!(decoded.edge_count(), 0);
}

#[test]
fn test_bfs_paths_are_shortest_and_valid() {
    let graph = RandomGraphGenerator::new(GeneratorConfig::new(40, 0.08).with_seed(5))
        .generate(&mut IndexedLabels::default())
        .unwrap();
    let nodes: Vec<&str> = graph.nodes().collect();

    for &source in &nodes {
        // Reference hop counts from a plain level-by-level expansion
        let mut level = vec![source];
        let mut seen: HashSet<&str> = HashSet::from([source]);
        let mut distance = std::collections::HashMap::from([(source, 0usize)]);
        let mut depth = 0;
        while !level.is_empty() {
            depth += 1;
            let mut next = Vec::new();
            for node in level {
                for neighbor in graph.neighbors(node) {
                    if seen.insert(neighbor) {
                        distance.insert(neighbor, depth);
                        next.push(neighbor);
                    }
                }
            }
            level = next;
        }

        for &target in &nodes {
            match shortest_path(&graph, source, target) {
                Ok(path) => {
                    assert!(path.is_valid_in(&graph));
                    assert_eq!(Some(&path.hops()), distance.get(target));
                }
                Err(Error::NoPathExists { .. }) => assert!(!distance.contains_key(target)),
                Err(e) => panic!("unexpected error: {}", e),
            }
        }
    }
}

#[test]
fn test_session_workflow() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.txt");

    let mut session = GraphSession::new();
    let mut labels = |i: usize| ["A", "B", "C"][i].to_string();
    session
        .create_random(GeneratorConfig::new(3, 1.0), &mut labels)
        .unwrap();
    session.save(&path).unwrap();

    let mut other = GraphSession::new();
    other.import(&path).unwrap();
    assert_eq!(other.shortest_path("A", "C").unwrap().hops(), 1);

    let mut sink = JsonRenderer::new(Vec::new());
    other.render(&mut sink, None).unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();
    assert_eq!(doc["edges"].as_array().unwrap().len(), 3);
    assert!(doc["highlighted_path"].is_null());
}
