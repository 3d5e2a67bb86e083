use rpunchclock::blob::{BlobStore, FsBlobStore, MemoryBlobStore, validate_key};
use rpunchclock::errors::AppError;
use rpunchclock::ledger::LedgerHandle;
use rpunchclock::models::RecordKind;
use tempfile::TempDir;

#[test]
fn key_validation() {
    assert!(validate_key("ledger-db").is_ok());
    assert!(validate_key("team_a.v2").is_ok());

    for bad in ["", ".hidden", "a/b", "..", "with space", "ü"] {
        assert!(
            matches!(validate_key(bad), Err(AppError::Blob(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[tokio::test]
async fn fs_missing_key_is_none() {
    let dir = TempDir::new().unwrap();
    let store = FsBlobStore::new(dir.path().join("not-created-yet"));

    assert!(store.get("ledger-db").await.unwrap().is_none());
}

#[tokio::test]
async fn fs_put_creates_root_and_replaces_wholesale() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("store");
    let store = FsBlobStore::new(&root);

    store.put("ledger-db", vec![1u8; 4096]).await.unwrap();
    store.put("ledger-db", vec![2, 3]).await.unwrap();

    assert_eq!(store.get("ledger-db").await.unwrap(), Some(vec![2, 3]));

    let path = store.path_for("ledger-db").unwrap();
    assert_eq!(path, root.join("ledger-db.blob"));
    assert!(path.exists());
    assert!(!root.join("ledger-db.blob.tmp").exists());
}

#[tokio::test]
async fn fs_rejects_bad_keys() {
    let dir = TempDir::new().unwrap();
    let store = FsBlobStore::new(dir.path());

    assert!(store.put("../outside", vec![0]).await.is_err());
    assert!(store.get("../outside").await.is_err());
}

#[tokio::test]
async fn memory_store_overwrites() {
    let store = MemoryBlobStore::new();
    assert!(store.is_empty());

    store.put("k", b"one".to_vec()).await.unwrap();
    store.put("k", b"two".to_vec()).await.unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("k").await.unwrap(), Some(b"two".to_vec()));
}

#[tokio::test]
async fn ledger_survives_restart_on_disk() {
    let dir = TempDir::new().unwrap();

    {
        let mut ledger = LedgerHandle::initialize(FsBlobStore::new(dir.path()), "ledger-db")
            .await
            .unwrap();
        ledger
            .append("Alice", RecordKind::CheckIn, "02/03/2025, 08:30:00")
            .await
            .unwrap();
    }

    let ledger = LedgerHandle::initialize(FsBlobStore::new(dir.path()), "ledger-db")
        .await
        .unwrap();
    let records = ledger.query_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].actor, "Alice");
    assert_eq!(records[0].kind, RecordKind::CheckIn);

    // The snapshot is a plain SQLite file.
    let conn = rusqlite::Connection::open(dir.path().join("ledger-db.blob")).unwrap();
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM ledger", [], |r| r.get(0))
        .unwrap();
    assert_eq!(n, 1);
}
