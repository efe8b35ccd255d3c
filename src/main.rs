use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use valuegraph::graph::{BuildOptions, NodeOrder};
use valuegraph::output::{FileSink, NoViewer, OutputSink, SystemViewer, TempFileSink, Viewer};
use valuegraph::pipeline::{self, RunOptions};
use valuegraph::Config;

#[derive(Parser, Debug)]
#[command(name = "valuegraph")]
#[command(about = "Graph which values of a YAML/JSON mapping equal or contain one another")]
struct Args {
    /// File to parse (YAML or JSON mapping of keys to values)
    #[arg(short, long)]
    input: PathBuf,

    /// Write the HTML here instead of a temporary file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTML template to render into
    #[arg(long)]
    template: Option<PathBuf>,

    /// Node numbering order
    #[arg(long, value_enum)]
    order: Option<NodeOrder>,

    /// Drop the link every node has to itself
    #[arg(long)]
    no_self_loops: bool,

    /// Do not open the result in a browser
    #[arg(long)]
    no_open: bool,

    /// Print the graph JSON to stdout instead of rendering HTML
    #[arg(long)]
    print_json: bool,
}

/// Graph options from config, with command-line flags taking precedence
fn build_options(args: &Args, config: &Config) -> BuildOptions {
    let mut build = config.build_options();
    if let Some(order) = args.order {
        build.order = order;
    }
    if args.no_self_loops {
        build.self_loops = false;
    }
    build
}

fn opens_viewer(no_open: bool, config: &Config) -> bool {
    !no_open && config.output.open_viewer
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", &config.valuegraph.log_level)
    ).init();

    log::debug!("Starting valuegraph v{}", env!("CARGO_PKG_VERSION"));

    let build = build_options(&args, &config);

    if args.print_json {
        let graph = pipeline::graph_from_path(&args.input, &build)?;
        let json = graph.to_json_pretty().context("Failed to marshal graph to JSON")?;
        println!("{}", json);
        return Ok(());
    }

    let options = RunOptions {
        input: args.input,
        build,
        template: args.template.or(config.render.template.clone()),
        placeholder: config.render.placeholder.clone(),
    };

    let mut sink: Box<dyn OutputSink> = match args.output {
        Some(path) => Box::new(FileSink::new(path)),
        None => {
            let sink = TempFileSink::new(config.output.prefix.clone());
            match &config.output.dir {
                Some(dir) => Box::new(sink.in_dir(dir)),
                None => Box::new(sink),
            }
        }
    };

    let viewer: Box<dyn Viewer> = if opens_viewer(args.no_open, &config) {
        Box::new(SystemViewer)
    } else {
        Box::new(NoViewer)
    };

    let report = pipeline::run(&options, sink.as_mut(), viewer.as_ref())?;
    log::debug!("Artifact at {}", report.presentation.location().display());

    Ok(())
}
