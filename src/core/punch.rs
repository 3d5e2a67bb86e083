use crate::blob::BlobStore;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ledger::LedgerHandle;
use crate::models::{Record, RecordKind};
use chrono::Local;
use std::fmt::Write;

/// High-level logic behind the `in` / `out` commands.
pub struct PunchLogic;

impl PunchLogic {
    /// Actor from the command line, else the configured default.
    /// Blank names count as missing.
    pub fn resolve_actor(arg: Option<&str>, cfg: &Config) -> Option<String> {
        match arg {
            Some(a) if !a.trim().is_empty() => Some(a.to_string()),
            _ => cfg.default_actor().map(str::to_string),
        }
    }

    /// `--at` verbatim, or the local time rendered with the configured format.
    pub fn capture_timestamp(at: Option<&str>, cfg: &Config) -> AppResult<String> {
        if let Some(ts) = at {
            return Ok(ts.to_string());
        }

        let mut out = String::new();
        write!(out, "{}", Local::now().format(&cfg.timestamp_format)).map_err(|_| {
            AppError::Config(format!(
                "invalid timestamp_format '{}'",
                cfg.timestamp_format
            ))
        })?;
        Ok(out)
    }

    /// Record one event. Returns `Ok(None)` when no actor is available, in
    /// which case the ledger is not touched.
    pub async fn punch<B: BlobStore>(
        ledger: &mut LedgerHandle<B>,
        cfg: &Config,
        kind: RecordKind,
        actor: Option<&str>,
        at: Option<&str>,
    ) -> AppResult<Option<Record>> {
        let Some(actor) = Self::resolve_actor(actor, cfg) else {
            return Ok(None);
        };

        let timestamp = Self::capture_timestamp(at, cfg)?;
        let record = ledger.append(&actor, kind, &timestamp).await?;
        Ok(Some(record))
    }
}
