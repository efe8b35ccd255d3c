pub mod config;
pub mod error;
pub mod graph;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod render;

pub use config::Config;
pub use error::{Result, ValueGraphError};
pub use graph::{build, build_graph, classify, Entry, Graph, GraphLink, GraphNode, Relation};
