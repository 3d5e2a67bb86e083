use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::open_ledger;
use crate::errors::{AppError, AppResult};
use crate::models::Record;
use crate::utils::colors::{colorize_kind, colorize_optional};
use crate::utils::table::{Column, Table};

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { actor, json } = cmd {
        let ledger = open_ledger(cfg).await?;

        let records: Vec<Record> = ledger
            .query_all()?
            .into_iter()
            .filter(|r| r.matches_actor(actor.as_deref()))
            .collect();

        if *json {
            let out = serde_json::to_string_pretty(&records)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{out}");
            return Ok(());
        }

        if records.is_empty() {
            println!("No records yet.");
            return Ok(());
        }

        print!("{}", render_records(&records));
    }
    Ok(())
}

pub fn render_records(records: &[Record]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("Actor"),
        Column::new("Kind"),
        Column::new("Timestamp"),
    ]);

    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            colorize_optional(&r.actor),
            colorize_kind(r.kind),
            r.timestamp.clone(),
        ]);
    }

    table.render()
}
