use super::record_kind::RecordKind;
use serde::Serialize;

/// One clock event as stored in the `ledger` table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Record {
    pub id: i64,           // ⇔ ledger.id (INTEGER PRIMARY KEY AUTOINCREMENT)
    pub actor: String,     // ⇔ ledger.actor (TEXT, may be empty)
    pub kind: RecordKind,  // ⇔ ledger.kind ('CheckIn' | 'CheckOut')
    pub timestamp: String, // ⇔ ledger.timestamp (TEXT, stored verbatim)
}

impl Record {
    /// `None` matches everything; otherwise an exact actor match.
    pub fn matches_actor(&self, actor: Option<&str>) -> bool {
        actor.is_none_or(|a| self.actor == a)
    }
}
