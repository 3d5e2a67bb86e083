use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::store::open_ledger;
use crate::errors::AppResult;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let ledger = open_ledger(cfg).await?;
        BackupLogic::backup(&ledger, file, *compress)?;
    }

    Ok(())
}
