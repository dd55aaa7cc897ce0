use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::FmtSubscriber;

use bank_cards::config::SimulationConfig;
use bank_cards::simulation;

fn main() -> Result<()> {
    // Logs go to stderr, stdout only carries the card report.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = SimulationConfig::default();
    let summary = simulation::run(&config, Arc::new(Mutex::new(std::io::stdout())))?;

    tracing::info!(
        total_balance = %summary.total_balance,
        completed = summary.withdrawals.completed().count(),
        "simulation finished"
    );

    Ok(())
}
