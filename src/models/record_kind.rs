use serde::{Deserialize, Serialize};
use std::fmt;

/// The two clock events a ledger row can carry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RecordKind {
    CheckIn,
    CheckOut,
}

impl RecordKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RecordKind::CheckIn => "CheckIn",
            RecordKind::CheckOut => "CheckOut",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "CheckIn" => Some(RecordKind::CheckIn),
            "CheckOut" => Some(RecordKind::CheckOut),
            _ => None,
        }
    }

    /// Short label used by the CLI table.
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::CheckIn => "in",
            RecordKind::CheckOut => "out",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
