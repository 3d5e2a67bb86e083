//! The one table a snapshot carries. This DDL is a durable contract: every
//! snapshot ever written must stay loadable, so it never changes shape.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

pub const LEDGER_TABLE: &str = "ledger";

pub const CREATE_LEDGER: &str = "CREATE TABLE IF NOT EXISTS ledger (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    actor TEXT,
    kind TEXT,
    timestamp TEXT
)";

/// Column names and declared types, in table order.
const EXPECTED_COLUMNS: [(&str, &str); 4] = [
    ("id", "INTEGER"),
    ("actor", "TEXT"),
    ("kind", "TEXT"),
    ("timestamp", "TEXT"),
];

/// Create the ledger table if it is missing. Safe to run any number of times.
pub fn apply_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(CREATE_LEDGER)?;
    Ok(())
}

/// Check that an existing `ledger` table has the expected layout.
///
/// Returns `Ok(false)` when the table does not exist at all.
pub fn verify_schema(conn: &Connection) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT name, type FROM pragma_table_info(?1) ORDER BY cid")?;
    let columns: Vec<(String, String)> = stmt
        .query_map([LEDGER_TABLE], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<rusqlite::Result<_>>()?;

    if columns.is_empty() {
        return Ok(false);
    }

    let matches = columns.len() == EXPECTED_COLUMNS.len()
        && columns
            .iter()
            .zip(EXPECTED_COLUMNS.iter())
            .all(|((name, ty), (exp_name, exp_ty))| {
                name == exp_name && ty.eq_ignore_ascii_case(exp_ty)
            });

    if !matches {
        let found: Vec<String> = columns.iter().map(|(n, t)| format!("{n} {t}")).collect();
        return Err(AppError::EngineInit(format!(
            "snapshot has an incompatible '{LEDGER_TABLE}' table: ({})",
            found.join(", ")
        )));
    }

    Ok(true)
}
