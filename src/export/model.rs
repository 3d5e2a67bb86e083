// src/export/model.rs

use crate::models::Record;
use serde::Serialize;

/// Flat row written by the CSV / JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    pub id: i64,
    pub actor: String,
    pub kind: String,
    pub timestamp: String,
}

impl From<&Record> for RecordExport {
    fn from(r: &Record) -> Self {
        Self {
            id: r.id,
            actor: r.actor.clone(),
            kind: r.kind.to_db_str().to_string(),
            timestamp: r.timestamp.clone(),
        }
    }
}
