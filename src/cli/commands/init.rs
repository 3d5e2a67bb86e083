use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::store::open_ledger;
use crate::errors::AppResult;
use crate::ledger::Origin;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::ensure_dir;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the snapshot directory
///  - the ledger itself, loaded once to prove the snapshot is usable
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing rPunchclock…");

    if cli.test {
        info("Test mode: configuration file left untouched.");
    } else {
        let path = cfg.save()?;
        success(format!("Config file : {}", path.display()));
    }

    let store = cfg.store_path();
    ensure_dir(&store)?;
    success(format!("Snapshot dir: {}", store.display()));

    let ledger = open_ledger(cfg).await?;
    match ledger.origin() {
        Origin::Snapshot => success(format!(
            "Ledger '{}' loaded: {} record(s).",
            ledger.key(),
            ledger.record_count()?
        )),
        Origin::Fresh => warning(format!(
            "Ledger '{}' is empty; its snapshot is written on the first punch.",
            ledger.key()
        )),
    }

    Ok(())
}
