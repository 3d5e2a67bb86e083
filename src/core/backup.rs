use crate::blob::BlobStore;
use crate::errors::{AppError, AppResult};
use crate::ledger::LedgerHandle;
use crate::ui::messages::{success, warning};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Write the current snapshot image to `dest_file`.
    ///
    /// The image is a plain SQLite database, so the copy can be opened with
    /// any SQLite tool. With `compress` it is wrapped in a `.zip` instead.
    pub fn backup<B: BlobStore>(
        ledger: &LedgerHandle<B>,
        dest_file: &str,
        compress: bool,
    ) -> AppResult<PathBuf> {
        let dest = Path::new(dest_file);

        if ledger.record_count()? == 0 {
            warning("The ledger is empty: the backup holds only the schema.");
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let image = ledger.snapshot()?;

        let final_path = if compress {
            compress_image(dest, &image)?
        } else {
            fs::write(dest, &image)?;
            dest.to_path_buf()
        };

        success(format!("Backup created: {}", final_path.display()));
        Ok(final_path)
    }
}

/// Store the image as the single entry of `<dest>.zip`.
fn compress_image(dest: &Path, image: &[u8]) -> AppResult<PathBuf> {
    let zip_path = dest.with_extension("zip");
    let entry_name = dest
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", dest.display())))?;

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;
    zip.write_all(image)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}
