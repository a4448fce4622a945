use bipartite_matching::BipartiteMatcher;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    /// Path to the graph file.
    #[arg(short, long)]
    graph_path: std::path::PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("BIPARTITE_MATCHING_LOG")
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    let mut matcher = BipartiteMatcher::from_path(&cli.graph_path)?;
    let matching = matcher.solve()?;

    let instance = matcher.instance();
    for &(left, right) in &matching.pairs {
        println!("{} / {}", instance.name(left), instance.name(right));
    }
    println!("{} total matches", matching.len());

    Ok(())
}
