use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use indexed_tree::{IndexedTree, RenderConfig, Renderer, SearchStrategy, Side, TreeConfig};
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "indexed-tree",
    about = "Fixed-height binary tree stored as a flat array: lookups, search and rendering"
)]
struct Cli {
    /// Number of tree levels (capacity is 2^height - 1).
    #[arg(long, default_value_t = indexed_tree::DEFAULT_HEIGHT)]
    height: u32,
    /// Maximum characters kept per node label.
    #[arg(long, default_value_t = indexed_tree::DEFAULT_LABEL_WIDTH)]
    label_width: usize,
    /// Row width used when printing the tree.
    #[arg(long, default_value_t = indexed_tree::render::DEFAULT_ROW_WIDTH)]
    width: usize,
    /// Label to search for.
    #[arg(long, default_value = "14")]
    target: String,
    /// Search strategy to run.
    #[arg(long, value_enum, default_value_t = StrategyArg::Both)]
    strategy: StrategyArg,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Bfs,
    Dfs,
    Both,
}

impl StrategyArg {
    fn strategies(self) -> &'static [SearchStrategy] {
        match self {
            StrategyArg::Bfs => &[SearchStrategy::BreadthFirst],
            StrategyArg::Dfs => &[SearchStrategy::DepthFirst],
            StrategyArg::Both => &SearchStrategy::ALL,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = TreeConfig::new(cli.height).with_label_width(cli.label_width);
    let renderer =
        Renderer::new(RenderConfig::with_width(cli.width)).context("invalid render settings")?;

    let tree = IndexedTree::new(config)
        .with_context(|| format!("failed to build binary tree of height {}", cli.height))?;
    println!("binary tree initialized ({} nodes)", tree.capacity());

    print_neighbours(&tree);
    run_searches(&tree, &cli.target, cli.strategy);

    print!("{}", renderer.render(&tree));

    tree.destroy();
    Ok(())
}

fn print_neighbours(tree: &IndexedTree) {
    for line in neighbour_lines(tree) {
        println!("{line}");
    }
}

/// `<label>` lines for the root's children, then for their parents
fn neighbour_lines(tree: &IndexedTree) -> Vec<String> {
    let mut lines = Vec::new();
    for side in Side::BOTH {
        match tree.get_child(0, side) {
            Ok(label) => lines.push(format!("<{label}>")),
            Err(err) => warn!("{err}"),
        }
    }

    // Parents of the root's children, where those children exist
    for child in (1..=2).filter(|&child| child < tree.capacity()) {
        match tree.get_parent(child) {
            Ok(label) => lines.push(format!("<{label}>")),
            Err(err) => warn!("{err}"),
        }
    }
    lines
}

fn run_searches(tree: &IndexedTree, target: &str, strategy: StrategyArg) {
    for &strategy in strategy.strategies() {
        match strategy.search(tree, target) {
            Some(index) => {
                info!(%strategy, index, "match");
                println!("A match was found! ({strategy} search, index {index})");
            }
            None => println!("No match found. ({strategy} search)"),
        }
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .init();
}
