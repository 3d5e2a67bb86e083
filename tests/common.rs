#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use async_trait::async_trait;
use rpunchclock::blob::{BlobStore, MemoryBlobStore};
use rpunchclock::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use tempfile::TempDir;

/// Binary under test, isolated from the real home directory.
pub fn rpc(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rpunchclock");
    cmd.env("HOME", home).env_remove("RPUNCHCLOCK_LOG");
    cmd
}

/// A scratch home plus a snapshot directory inside it.
pub struct Sandbox {
    pub home: TempDir,
    pub store: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let home = TempDir::new().expect("create temp home");
        let store = home.path().join("store");
        Self { home, store }
    }

    pub fn store_arg(&self) -> String {
        self.store.to_string_lossy().to_string()
    }

    /// `rpunchclock --store <dir> <args...>`
    pub fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = rpc(self.home.path());
        cmd.args(["--store", &self.store_arg()]).args(args);
        cmd
    }

    pub fn snapshot_file(&self) -> PathBuf {
        self.store.join("ledger-db.blob")
    }

    pub fn out(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }
}

/// Punch a few events through the CLI.
pub fn seed(sb: &Sandbox) {
    sb.cmd(&["in", "Alice", "--at", "01/03/2025, 09:00:00"])
        .assert()
        .success();
    sb.cmd(&["in", "Bob", "--at", "01/03/2025, 09:05:00"])
        .assert()
        .success();
    sb.cmd(&["out", "Alice", "--at", "01/03/2025, 17:30:00"])
        .assert()
        .success();
}

/// Memory store whose `put` fails a fixed number of times before working.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryBlobStore,
    failures_left: AtomicU32,
    pub puts: AtomicU32,
}

impl FlakyStore {
    pub fn failing(times: u32) -> Self {
        Self {
            inner: MemoryBlobStore::new(),
            failures_left: AtomicU32::new(times),
            puts: AtomicU32::new(0),
        }
    }

    pub fn set_failures(&self, times: u32) {
        self.failures_left.store(times, Ordering::SeqCst);
    }

    pub fn put_calls(&self) -> u32 {
        self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlobStore for FlakyStore {
    async fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, blob: Vec<u8>) -> AppResult<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        let left = self.failures_left.load(Ordering::SeqCst);
        if left > 0 {
            self.failures_left.store(left - 1, Ordering::SeqCst);
            return Err(AppError::Io(std::io::Error::other("disk full")));
        }
        self.inner.put(key, blob).await
    }
}
