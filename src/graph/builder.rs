//! Pairwise graph construction over the input entries.

use serde::Deserialize;

use super::{classify, Entry, Graph, GraphLink, GraphNode};

/// How node indices are assigned to keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NodeOrder {
    /// Lexicographic (byte) order of the keys.
    #[default]
    Sorted,
    /// Order in which keys appear in the input document.
    Document,
}

/// Options for [`build_graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    pub order: NodeOrder,
    /// Keep the link every node has to itself.
    pub self_loops: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            order: NodeOrder::Sorted,
            self_loops: true,
        }
    }
}

/// Build the graph with default options (sorted keys, self-loops kept).
pub fn build(entries: &[Entry]) -> Graph {
    build_graph(entries, &BuildOptions::default())
}

/// Build the relation graph for `entries`.
///
/// Every ordered pair `(i, j)` is classified, including `i == j`. A link
/// `i -> j` is emitted when value `i` equals or contains value `j`; links
/// come out in row-major `(i, j)` order.
pub fn build_graph(entries: &[Entry], options: &BuildOptions) -> Graph {
    let mut ordered: Vec<&Entry> = entries.iter().collect();
    if options.order == NodeOrder::Sorted {
        ordered.sort_by(|a, b| a.key.cmp(&b.key));
    }

    let nodes: Vec<GraphNode> = ordered
        .iter()
        .map(|entry| GraphNode {
            name: entry.key.clone(),
        })
        .collect();

    let mut links = Vec::new();
    for (source, left) in ordered.iter().enumerate() {
        for (target, right) in ordered.iter().enumerate() {
            if source == target && !options.self_loops {
                continue;
            }
            let relation = classify(&left.value, &right.value);
            if relation.links_left_to_right() {
                links.push(GraphLink { source, target });
            }
        }
    }

    log::debug!(
        "Built graph: {} nodes, {} links ({} pairs compared)",
        nodes.len(),
        links.len(),
        ordered.len() * ordered.len()
    );

    Graph { nodes, links }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn entries(pairs: &[(&str, &str)]) -> Vec<Entry> {
        pairs.iter().map(|(k, v)| Entry::new(*k, *v)).collect()
    }

    fn link_pairs(graph: &Graph) -> Vec<(usize, usize)> {
        graph.links.iter().map(|l| (l.source, l.target)).collect()
    }

    #[test]
    fn test_build_hello_world_scenario() {
        let graph = build(&entries(&[
            ("a", "hello"),
            ("b", "hello world"),
            ("c", "bye"),
        ]));

        let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(link_pairs(&graph), vec![(0, 0), (1, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_build_empty() {
        let graph = build(&[]);
        assert!(graph.nodes.is_empty());
        assert!(graph.links.is_empty());
    }

    #[test]
    fn test_build_equal_values_link_both_ways() {
        let graph = build(&entries(&[("x", "same"), ("y", "same")]));
        assert_eq!(graph.links.len(), 4);
        assert!(graph.has_link(0, 1));
        assert!(graph.has_link(1, 0));
        assert!(graph.has_link(0, 0));
        assert!(graph.has_link(1, 1));
    }

    #[test]
    fn test_build_sorts_keys() {
        let graph = build(&entries(&[("zeta", "1"), ("alpha", "2"), ("Mid", "3")]));
        let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
        // Byte order: uppercase before lowercase
        assert_eq!(names, vec!["Mid", "alpha", "zeta"]);
    }

    #[test]
    fn test_build_document_order() {
        let options = BuildOptions {
            order: NodeOrder::Document,
            ..BuildOptions::default()
        };
        let graph = build_graph(&entries(&[("zeta", "ab"), ("alpha", "a")]), &options);
        assert_eq!(graph.node_index("zeta"), Some(0));
        assert_eq!(graph.node_index("alpha"), Some(1));
        assert!(graph.has_link(0, 1));
        assert!(!graph.has_link(1, 0));
    }

    #[test]
    fn test_build_without_self_loops() {
        let options = BuildOptions {
            self_loops: false,
            ..BuildOptions::default()
        };
        let graph = build_graph(&entries(&[("a", "hello"), ("b", "hello world")]), &options);
        assert_eq!(link_pairs(&graph), vec![(1, 0)]);
    }

    #[test]
    fn test_build_empty_value_is_contained_by_all() {
        let graph = build(&entries(&[("blank", ""), ("full", "text")]));
        let blank = graph.node_index("blank").unwrap();
        let full = graph.node_index("full").unwrap();
        assert!(graph.has_link(full, blank));
        assert!(!graph.has_link(blank, full));
    }

    #[test]
    fn test_build_containment_is_single_directed_edge() {
        let graph = build(&entries(&[("short", "abc"), ("long", "xabcx")]));
        let short = graph.node_index("short").unwrap();
        let long = graph.node_index("long").unwrap();
        assert!(graph.has_link(long, short));
        assert!(!graph.has_link(short, long));
    }

    #[test]
    fn test_build_is_deterministic() {
        let input = entries(&[("b", "xy"), ("a", "x"), ("c", "y")]);
        let mut reversed = input.clone();
        reversed.reverse();
        assert_eq!(build(&input), build(&reversed));
    }

    proptest! {
        #[test]
        fn prop_one_node_per_key_with_self_loop(
            map in proptest::collection::btree_map("[a-z]{1,4}", "[ab]{0,4}", 0..12)
        ) {
            let input: Vec<Entry> = map.iter().map(|(k, v)| Entry::new(k.clone(), v.clone())).collect();
            let graph = build(&input);

            prop_assert_eq!(graph.nodes.len(), map.len());
            let names: BTreeSet<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
            let keys: BTreeSet<&str> = map.keys().map(String::as_str).collect();
            prop_assert_eq!(names, keys);

            for index in 0..graph.nodes.len() {
                prop_assert!(graph.has_link(index, index));
            }
            prop_assert_eq!(graph.summary().self_loops, map.len());
        }

        #[test]
        fn prop_links_match_containment(
            map in proptest::collection::btree_map("[a-z]{1,4}", "[ab]{0,4}", 0..10)
        ) {
            let input: Vec<Entry> = map.iter().map(|(k, v)| Entry::new(k.clone(), v.clone())).collect();
            let graph = build(&input);
            for link in &graph.links {
                let source = &map[&graph.nodes[link.source].name];
                let target = &map[&graph.nodes[link.target].name];
                prop_assert!(source.contains(target.as_str()));
            }
        }

        #[test]
        fn prop_json_roundtrip(
            map in proptest::collection::btree_map("[a-z]{1,4}", "[ab]{0,4}", 0..10)
        ) {
            let input: Vec<Entry> = map.iter().map(|(k, v)| Entry::new(k.clone(), v.clone())).collect();
            let graph = build(&input);
            let decoded = Graph::from_json(&graph.to_json().unwrap()).unwrap();
            prop_assert_eq!(decoded, graph);
        }
    }
}
