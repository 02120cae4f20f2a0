mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "compass_heading=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            azimuth,
            order,
            format,
        } => {
            cli::resolve(azimuth, order, &format)?;
        }
        Commands::Table { order, format } => {
            cli::print_table(order, &format)?;
        }
    }

    Ok(())
}
