//! End-to-end run: load entries, build the graph, render and present it.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::graph::{build_graph, BuildOptions, Graph, GraphSummary};
use crate::input::load_entries;
use crate::output::{present, OutputSink, Presentation, Viewer};
use crate::render::{Template, DEFAULT_PLACEHOLDER};

/// Everything a run needs besides its I/O capabilities.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub build: BuildOptions,
    pub template: Option<PathBuf>,
    pub placeholder: String,
}

impl RunOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            build: BuildOptions::default(),
            template: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub summary: GraphSummary,
    pub presentation: Presentation,
}

/// Load `input` and build its graph.
pub fn graph_from_path(input: &Path, options: &BuildOptions) -> Result<Graph> {
    let entries = load_entries(input)
        .with_context(|| format!("Failed to load input {}", input.display()))?;
    Ok(build_graph(&entries, options))
}

/// Run the whole pipeline, writing through `sink` and opening with `viewer`.
pub fn run(options: &RunOptions, sink: &mut dyn OutputSink, viewer: &dyn Viewer) -> Result<RunReport> {
    let graph = graph_from_path(&options.input, &options.build)?;
    let summary = graph.summary();
    log::info!(
        "Graph: {} nodes, {} links ({} self-loops)",
        summary.nodes,
        summary.links,
        summary.self_loops
    );

    let graph_json = graph.to_json().context("Failed to marshal graph to JSON")?;

    let template = Template::load(options.template.as_deref(), &options.placeholder)
        .context("Failed to read template")?;
    let html = template
        .render(&graph_json)
        .context("Failed to render template")?;

    let location = sink
        .write(html.as_bytes())
        .context("Failed to write generated file")?;
    log::info!("Wrote {}", location.display());

    let presentation = present(&location, viewer);
    Ok(RunReport {
        summary,
        presentation,
    })
}
