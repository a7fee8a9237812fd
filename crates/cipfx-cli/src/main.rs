//! cipfx CLI - implied interest rates from FX swap quotes.
//!
//! # Usage
//!
//! ```bash
//! # Implied SGD rates for a file of 3M quotes
//! cipfx compute quotes.csv --tenor 3M
//!
//! # Value dates for a trade date, with the holidays that moved them
//! cipfx dates 2026-02-13
//!
//! # Is a date a joint business day?
//! cipfx check 2026-04-03
//!
//! # Fair forward points from both rates
//! cipfx forward-points --trade-date 2026-01-02 --spot 1.345 -r 3.67738 -l 1.5
//! ```
//!
//! Logs go to stderr. `RUST_LOG` overrides `-v`/`-q`.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod columns;
mod commands;
mod config;
mod error;
mod input;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = cli.log_directive();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,cipfx={level},cipfx_core={level},cipfx_engine={level}"
        ))
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = AppConfig::discover(cli.config.as_deref())?;
    let ctx = Context::new(config, cli.format, cli.quiet);

    // Execute command
    match cli.command {
        Commands::Compute(args) => commands::compute::execute(args, &ctx)?,
        Commands::Dates(args) => commands::dates::execute(args, &ctx)?,
        Commands::Check(args) => commands::check::execute(args, &ctx)?,
        Commands::ForwardPoints(args) => commands::forward_points::execute(args, &ctx)?,
    }

    Ok(())
}
