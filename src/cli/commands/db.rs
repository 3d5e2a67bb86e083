use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::open_ledger;
use crate::errors::AppResult;
use crate::ledger::Origin;
use crate::ui::messages::field;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET};
use crate::utils::human_bytes;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { info, check } = cmd {
        let ledger = open_ledger(cfg).await?;

        //
        // 1) INFO
        //
        if *info {
            let details = ledger.info()?;
            let file = ledger.blob_store().path_for(ledger.key())?;

            println!();
            field("Snapshot file", file.display());
            field("Key", &details.key);
            field(
                "Stored",
                match details.origin {
                    Origin::Snapshot => "yes".to_string(),
                    Origin::Fresh => format!("{GREY}no (nothing recorded yet){RESET}"),
                },
            );
            field("Image size", human_bytes(details.snapshot_bytes));
            field("Records", format!("{GREEN}{}{RESET}", details.records));
            match details.id_range {
                Some((first, last)) => field("Id range", format!("{first}..{last}")),
                None => field("Id range", format!("{GREY}--{RESET}")),
            }
            println!();
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{CYAN}▶ Running integrity check…{RESET}");

            let integrity = ledger.integrity_check()?;

            if integrity == "ok" {
                println!("{GREEN}✔ Integrity check passed.{RESET}\n");
            } else {
                println!("{RED}✘ Integrity check failed:{RESET} {integrity}\n");
            }
        }
    }

    Ok(())
}
