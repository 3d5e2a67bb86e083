// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, RecordExport};
use crate::models::Record;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` to `file` in the requested format.
    pub fn export(
        records: &[Record],
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;
        ensure_parent(path)?;

        if records.is_empty() {
            warning("The ledger is empty: the export will contain no records.");
        }

        debug!(format = format.as_str(), records = records.len(), file, "exporting ledger");

        let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
        }
    }
}
