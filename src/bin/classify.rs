//! Print the relation between two values, as the graph builder sees it.

use clap::Parser;
use valuegraph::classify;

#[derive(Parser, Debug)]
#[command(name = "classify")]
#[command(about = "Classify how two values relate by equality or substring containment")]
struct Args {
    /// Left value
    left: String,

    /// Right value
    right: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", "info"),
    )
    .init();

    let args = Args::parse();
    let relation = classify(&args.left, &args.right);
    log::debug!("{:?} vs {:?}", args.left, args.right);

    println!("{}", relation);
    if relation.links_left_to_right() {
        println!("link: left -> right");
    }
    Ok(())
}
