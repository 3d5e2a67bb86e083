//! rPunchclock main entrypoint.

use rpunchclock::run;
use tracing_subscriber::EnvFilter;

/// Diagnostics filter, e.g. `RPUNCHCLOCK_LOG=debug`.
const LOG_ENV: &str = "RPUNCHCLOCK_LOG";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        if !e.is_recoverable() {
            eprintln!("The stored ledger could not be opened; nothing was changed.");
        }
        std::process::exit(1);
    }
}
