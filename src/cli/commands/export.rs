use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::open_ledger;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::Record;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        actor,
        force,
    } = cmd
    {
        let ledger = open_ledger(cfg).await?;
        let records: Vec<Record> = ledger
            .query_all()?
            .into_iter()
            .filter(|r| r.matches_actor(actor.as_deref()))
            .collect();
        ExportLogic::export(&records, format, file, *force)?;
    }
    Ok(())
}
