//! Shuffle Sample Application Entry Point
//!
//! Builds a tree from a shuffled range and prints its diagram.

use shuffle::{ShuffleConfig, build, permutation, summarize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,shuffle=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ShuffleConfig::from_env() {
        Ok(config) => {
            tracing::info!(count = config.count, seed = ?config.seed, "Configuration loaded");
            config
        }
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
            ShuffleConfig::default()
        }
    };

    let elements = permutation(&config);
    tracing::info!(?elements, "Inserting shuffled elements");

    let tree = build(&elements);
    match summarize(&tree) {
        Ok(summary) => tracing::info!(
            count = summary.count,
            height = summary.height,
            black_height = summary.black_height,
            min = ?tree.min(),
            max = ?tree.max(),
            "Tree built"
        ),
        Err(violation) => {
            tracing::error!("Tree failed validation: {violation}");
            std::process::exit(1);
        }
    }

    print!("{tree}");
}
