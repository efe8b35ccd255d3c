//! Value graph module: relation classification and graph construction.
//!
//! Every ordered pair of entries is classified by substring containment of
//! their values; equal and containing pairs become directed links from the
//! containing value to the contained one.

mod builder;
mod classify;

pub use builder::{build, build_graph, BuildOptions, NodeOrder};
pub use classify::classify;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One key of the input mapping and the value it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Relation between an ordered pair of values (left, right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Unrelated,
    /// Left contains right.
    LeftDerivedFromRight,
    /// Right contains left.
    RightDerivedFromLeft,
    IsEqualTo,
}

impl Relation {
    /// Whether the pair produces a link from left to right.
    pub fn links_left_to_right(self) -> bool {
        matches!(self, Relation::IsEqualTo | Relation::LeftDerivedFromRight)
    }

    /// Relation of the same pair seen from the other side.
    pub fn reversed(self) -> Self {
        match self {
            Relation::LeftDerivedFromRight => Relation::RightDerivedFromLeft,
            Relation::RightDerivedFromLeft => Relation::LeftDerivedFromRight,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Unrelated => "unrelated",
            Relation::LeftDerivedFromRight => "left_derived_from_right",
            Relation::RightDerivedFromLeft => "right_derived_from_left",
            Relation::IsEqualTo => "is_equal_to",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Graph vertex for one input key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub name: String,
}

/// Directed edge between node indices (source value equals or contains target value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: usize,
    pub target: usize,
}

impl GraphLink {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Node and link lists in the shape the visualization template consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// Counts reported after a graph is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSummary {
    pub nodes: usize,
    pub links: usize,
    pub self_loops: usize,
}

impl Graph {
    /// Index of the node with the given name, if any.
    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.name == name)
    }

    pub fn has_link(&self, source: usize, target: usize) -> bool {
        self.links.contains(&GraphLink { source, target })
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            nodes: self.nodes.len(),
            links: self.links.len(),
            self_loops: self.links.iter().filter(|l| l.is_self_loop()).count(),
        }
    }

    /// Compact JSON: `{"nodes":[{"name":..}],"links":[{"source":..,"target":..}]}`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
