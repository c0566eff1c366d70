use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::error::{EscapeError, Result};

/// Reads the whole file and decodes it as UTF-8.
pub async fn read_file_safe(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| EscapeError::io(path, e))?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|source| EscapeError::Encoding {
        path: path.to_path_buf(),
        source,
    })
}

pub async fn write_file_safe(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .await
        .map_err(|e| EscapeError::io(path, e))?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Copies `path` to `<path>.backup` and returns the backup location.
pub async fn create_backup(path: &Path) -> Result<PathBuf> {
    let backup_path = PathBuf::from(format!("{}.backup", path.display()));
    fs::copy(path, &backup_path)
        .await
        .map_err(|e| EscapeError::io(path, e))?;
    debug!("Created backup: {}", backup_path.display());
    Ok(backup_path)
}
