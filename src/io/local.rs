use std::path::Path;

use crate::error::Result;
use crate::model::ArchiveInput;

/// Load a ZIP archive from the local filesystem into memory.
pub async fn read_archive_file(path: &Path) -> Result<ArchiveInput> {
    let bytes = tokio::fs::read(path).await?;
    tracing::debug!(path = %path.display(), size = bytes.len(), "Loaded archive");
    Ok(ArchiveInput::from(bytes))
}
