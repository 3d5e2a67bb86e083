use crate::errors::{AppError, AppResult};
use crate::models::{Record, RecordKind};
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Record> {
    let kind_str: String = row.get("kind")?;
    let kind = RecordKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidKind(kind_str.clone())),
        )
    })?;

    Ok(Record {
        id: row.get("id")?,
        actor: row.get::<_, Option<String>>("actor")?.unwrap_or_default(),
        kind,
        timestamp: row.get::<_, Option<String>>("timestamp")?.unwrap_or_default(),
    })
}

/// Insert one row and return the id the engine assigned to it.
pub fn insert_record(
    conn: &Connection,
    actor: &str,
    kind: RecordKind,
    timestamp: &str,
) -> Result<i64> {
    let mut stmt =
        conn.prepare_cached("INSERT INTO ledger (actor, kind, timestamp) VALUES (?1, ?2, ?3)")?;
    stmt.execute(params![actor, kind.to_db_str(), timestamp])?;
    Ok(conn.last_insert_rowid())
}

/// Full scan, ascending id. Never relies on the engine's natural row order.
pub fn load_all(conn: &Connection) -> AppResult<Vec<Record>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, actor, kind, timestamp FROM ledger ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_records(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM ledger", [], |row| row.get(0))
}

/// Lowest and highest id, if any rows exist.
pub fn id_range(conn: &Connection) -> Result<Option<(i64, i64)>> {
    let (min, max): (Option<i64>, Option<i64>) =
        conn.query_row("SELECT MIN(id), MAX(id) FROM ledger", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })?;
    Ok(min.zip(max))
}
