use crate::estimator::convention::Convention;
use crate::report::emitter::emit;
use crate::sweep::grid::{MAX_SERVERS, UtilizationGrid};
use crate::sweep::sweep::Sweep;
use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::{Level, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod estimator;
mod report;
mod sweep;

/// Expected M/M/m queue length: Erlang C against the Gunther and Sakasegawa approximations
#[derive(Parser)]
#[command(name = "queuelen")]
#[command(version)]
struct Cli {
    /// Utilization grid to sweep
    #[arg(long, value_enum, default_value_t = UtilizationGrid::Fine)]
    grid: UtilizationGrid,

    /// Scale of the Erlang C and Gunther columns
    #[arg(long, value_enum, default_value_t = Convention::Plain)]
    convention: Convention,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = clap::value_parser!(Level))]
    log_level: Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level, cli.verbose);

    let sweep = Sweep::new(MAX_SERVERS, cli.grid);
    info!(
        "evaluating {} points with the {:?} convention",
        sweep.len(),
        cli.convention
    );

    let stdout = io::stdout();
    let rows = emit(&mut stdout.lock(), &sweep, cli.convention)?;
    info!("wrote {} rows", rows);
    Ok(())
}

fn init_tracing(log_level: Level, verbose: bool) {
    let level = if verbose { Level::DEBUG } else { log_level };

    // stdout carries the report, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("queuelen={}", level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
