use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::core::store::open_ledger;
use crate::errors::{AppError, AppResult};
use crate::models::RecordKind;
use crate::ui::messages::{error, success, warning};

/// Handle `in` and `out`.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (kind, actor, at) = match cmd {
        Commands::In { actor, at } => (RecordKind::CheckIn, actor, at),
        Commands::Out { actor, at } => (RecordKind::CheckOut, actor, at),
        _ => return Ok(()),
    };

    let mut ledger = open_ledger(cfg).await?;

    match PunchLogic::punch(&mut ledger, cfg, kind, actor.as_deref(), at.as_deref()).await {
        Ok(Some(record)) => {
            success(format!(
                "{} recorded for '{}' at {} (#{})",
                match record.kind {
                    RecordKind::CheckIn => "Check-in",
                    RecordKind::CheckOut => "Check-out",
                },
                record.actor,
                record.timestamp,
                record.id
            ));
            Ok(())
        }
        Ok(None) => {
            warning("No actor given and no default_actor configured: nothing recorded.");
            Ok(())
        }
        Err(e @ AppError::Persist { .. }) => {
            error("The event could not be saved to disk and will be lost on exit.");
            Err(e)
        }
        Err(e) => Err(e),
    }
}
