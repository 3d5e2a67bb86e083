use crate::blob::FsBlobStore;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ledger::LedgerHandle;
use tracing::debug;

/// The ledger as the CLI uses it: snapshots on the local filesystem.
pub type FsLedger = LedgerHandle<FsBlobStore>;

/// Open the ledger described by `cfg`.
pub async fn open_ledger(cfg: &Config) -> AppResult<FsLedger> {
    let store = FsBlobStore::new(cfg.store_path());
    debug!(root = %store.root().display(), key = %cfg.snapshot_key, "opening ledger");
    LedgerHandle::initialize_with(store, cfg.snapshot_key.clone(), cfg.persist_policy()).await
}
