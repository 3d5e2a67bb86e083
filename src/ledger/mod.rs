//! The embedded ledger store.
//!
//! A [`LedgerHandle`] owns an in-memory SQLite connection holding the whole
//! check-in/check-out history. The durable copy lives in a [`BlobStore`] as a
//! single serialized database image (the *snapshot*) under one fixed key:
//!
//! - [`LedgerHandle::initialize`] loads that image, or starts an empty ledger
//!   with the schema applied when none exists;
//! - [`LedgerHandle::append`] inserts one row, then serializes the whole
//!   database and writes it back, awaiting the write;
//! - [`LedgerHandle::query_all`] reads straight from memory.

mod persist;
pub mod queries;
pub mod schema;

pub use persist::PersistPolicy;

use crate::blob::{BlobStore, validate_key};
use crate::errors::{AppError, AppResult};
use crate::models::{Record, RecordKind};
use rusqlite::{Connection, MAIN_DB};
use std::io::Cursor;
use tracing::{debug, info};

/// Default key under which the snapshot is stored.
pub const DEFAULT_SNAPSHOT_KEY: &str = "ledger-db";

/// Where the ledger came from when it was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Materialized from an existing snapshot.
    Snapshot,
    /// No snapshot was found; a fresh schema was applied.
    Fresh,
}

/// Summary used by `db --info`.
#[derive(Debug, Clone)]
pub struct LedgerInfo {
    pub key: String,
    pub origin: Origin,
    pub snapshot_bytes: usize,
    pub records: i64,
    pub id_range: Option<(i64, i64)>,
    pub dirty: bool,
}

pub struct LedgerHandle<B: BlobStore> {
    conn: Connection,
    blobs: B,
    key: String,
    policy: PersistPolicy,
    origin: Origin,
    dirty: bool,
}

impl<B: BlobStore> LedgerHandle<B> {
    /// Open the ledger stored under `key` with the default persist policy.
    pub async fn initialize(blobs: B, key: impl Into<String>) -> AppResult<Self> {
        Self::initialize_with(blobs, key, PersistPolicy::default()).await
    }

    /// Open the ledger stored under `key`.
    ///
    /// Nothing is written on the fresh path: a crash before the first append
    /// leaves no snapshot behind.
    pub async fn initialize_with(
        blobs: B,
        key: impl Into<String>,
        policy: PersistPolicy,
    ) -> AppResult<Self> {
        let key = key.into();
        validate_key(&key)?;

        let (conn, origin) = match blobs.get(&key).await? {
            Some(bytes) => {
                info!(key = %key, bytes = bytes.len(), "loading ledger snapshot");
                (open_snapshot(&bytes)?, Origin::Snapshot)
            }
            None => {
                info!(key = %key, "no snapshot found, starting an empty ledger");
                (open_fresh()?, Origin::Fresh)
            }
        };

        Ok(Self {
            conn,
            blobs,
            key,
            policy,
            origin,
            dirty: false,
        })
    }

    /// Record one clock event and persist the new state.
    ///
    /// On [`AppError::Insert`] nothing changed. On [`AppError::Persist`] the
    /// row is in memory (and visible to [`query_all`](Self::query_all)) but not
    /// yet durable; the handle stays dirty until a later persist succeeds.
    pub async fn append(
        &mut self,
        actor: &str,
        kind: RecordKind,
        timestamp: &str,
    ) -> AppResult<Record> {
        let id = queries::insert_record(&self.conn, actor, kind, timestamp)
            .map_err(AppError::Insert)?;
        self.dirty = true;

        debug!(id, actor, kind = %kind, "record inserted");

        self.persist().await?;

        Ok(Record {
            id,
            actor: actor.to_string(),
            kind,
            timestamp: timestamp.to_string(),
        })
    }

    /// All records, ascending id. Freshly read on every call.
    pub fn query_all(&self) -> AppResult<Vec<Record>> {
        queries::load_all(&self.conn)
    }

    /// Serialize the whole engine state.
    pub fn snapshot(&self) -> AppResult<Vec<u8>> {
        let data = self.conn.serialize(MAIN_DB)?;
        Ok(data.to_vec())
    }

    /// Write the current snapshot to the blob store, retrying per policy.
    pub async fn persist(&mut self) -> AppResult<()> {
        let blob = self.snapshot()?;
        let len = blob.len();
        let attempts = persist::put_with_retry(&self.blobs, &self.key, blob, &self.policy).await?;
        self.dirty = false;
        debug!(key = %self.key, bytes = len, attempts, "snapshot persisted");
        Ok(())
    }

    /// True when memory holds changes the blob store has not seen.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn blob_store(&self) -> &B {
        &self.blobs
    }

    pub fn record_count(&self) -> AppResult<i64> {
        Ok(queries::count_records(&self.conn)?)
    }

    /// Result of `PRAGMA integrity_check` (`"ok"` when healthy).
    pub fn integrity_check(&self) -> AppResult<String> {
        let rows: Vec<String> = {
            let mut stmt = self.conn.prepare("PRAGMA integrity_check")?;
            stmt.query_map([], |row| row.get::<_, String>(0))?
                .collect::<rusqlite::Result<_>>()?
        };
        Ok(rows.join("\n"))
    }

    pub fn info(&self) -> AppResult<LedgerInfo> {
        Ok(LedgerInfo {
            key: self.key.clone(),
            origin: self.origin,
            snapshot_bytes: self.snapshot()?.len(),
            records: self.record_count()?,
            id_range: queries::id_range(&self.conn)?,
            dirty: self.dirty,
        })
    }
}

fn open_fresh() -> AppResult<Connection> {
    let conn = Connection::open_in_memory()
        .map_err(|e| AppError::EngineInit(format!("cannot open in-memory database: {e}")))?;
    schema::apply_schema(&conn).map_err(|e| AppError::EngineInit(e.to_string()))?;
    Ok(conn)
}

/// Materialize a connection from a snapshot image and make sure it really is
/// a ledger before handing it out.
fn open_snapshot(bytes: &[u8]) -> AppResult<Connection> {
    if bytes.is_empty() {
        return Err(AppError::EngineInit("snapshot is empty".into()));
    }

    let mut conn = Connection::open_in_memory()
        .map_err(|e| AppError::EngineInit(format!("cannot open in-memory database: {e}")))?;

    conn.deserialize_read_exact(MAIN_DB, Cursor::new(bytes), bytes.len(), false)
        .map_err(|e| AppError::EngineInit(format!("cannot deserialize snapshot: {e}")))?;

    // sqlite only notices a bad image on first access.
    conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
        row.get::<_, i64>(0)
    })
    .map_err(|e| AppError::EngineInit(format!("snapshot is not a valid database: {e}")))?;

    let present = schema::verify_schema(&conn).map_err(|e| match e {
        AppError::EngineInit(_) => e,
        other => AppError::EngineInit(other.to_string()),
    })?;
    if !present {
        schema::apply_schema(&conn).map_err(|e| AppError::EngineInit(e.to_string()))?;
    }

    // Every stored row must map back to a record, or query_all would fail later.
    queries::load_all(&conn)
        .map_err(|e| AppError::EngineInit(format!("snapshot holds unreadable records: {e}")))?;

    Ok(conn)
}
