use tracing::{debug, warn};

use crate::error::{EntryError, Error, Result};
use crate::filter::EntryFilter;
use crate::model::{ArchiveInput, DecodedEntry, EntryFailure, ExtractionResult};

use super::parser::ZipParser;
use super::structures::ArchiveEntry;

/// Settings for an [`ArchiveExtractor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Which file entries to decode
    pub filter: EntryFilter,
    /// Compare each entry against its recorded CRC-32
    pub verify_crc: bool,
    /// Entries declaring a larger uncompressed size are reported as read failures
    pub max_entry_size: Option<u64>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            filter: EntryFilter::default(),
            verify_crc: true,
            max_entry_size: None,
        }
    }
}

/// Turns an in-memory ZIP archive into decoded text entries.
///
/// Per-entry problems are collected into the [`ExtractionResult`]; only an
/// archive whose container cannot be parsed fails the call.
#[derive(Debug, Clone, Default)]
pub struct ArchiveExtractor {
    options: ExtractOptions,
}

impl ArchiveExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// List every entry of the archive, directories included.
    pub fn list_entries(&self, archive_bytes: &[u8]) -> Result<Vec<ArchiveEntry>> {
        ZipParser::new(archive_bytes).list_entries()
    }

    /// Extract and decode all selected file entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArchiveCorrupt`] if the container itself cannot be
    /// parsed. In that case no entries are returned.
    pub fn extract(&self, archive_bytes: &[u8]) -> Result<ExtractionResult> {
        let parser = ZipParser::new(archive_bytes);
        let entries = parser.list_entries()?;

        debug!(
            size = parser.size(),
            entries = entries.len(),
            "Extracting archive"
        );

        let mut result = ExtractionResult::default();

        for entry in &entries {
            if entry.is_directory {
                debug!(name = %entry.name, "Skipping directory");
                continue;
            }

            if !self.options.filter.matches(&entry.name) {
                debug!(name = %entry.name, "Skipping filtered entry");
                continue;
            }

            match self.read_text(&parser, entry) {
                Ok(text) => {
                    debug!(name = %entry.name, bytes = text.len(), "Decoded entry");
                    result.entries.push(DecodedEntry {
                        name: entry.name.clone(),
                        text,
                    });
                }
                Err(e) => {
                    warn!(name = %entry.name, kind = ?e.kind(), "Failed to extract entry: {}", e);
                    result.failures.push(EntryFailure::new(entry.name.clone(), &e));
                }
            }
        }

        Ok(result)
    }

    fn read_text(
        &self,
        parser: &ZipParser<'_>,
        entry: &ArchiveEntry,
    ) -> std::result::Result<String, EntryError> {
        if let Some(max) = self.options.max_entry_size
            && entry.uncompressed_size > max
        {
            return Err(EntryError::read(format!(
                "Entry is {} bytes, larger than the {} byte limit",
                entry.uncompressed_size, max
            )));
        }

        let bytes = parser.read_entry(entry, self.options.verify_crc)?;
        decode_text(bytes)
    }
}

/// Decode a fully buffered entry as UTF-8.
pub fn decode_text(bytes: Vec<u8>) -> std::result::Result<String, EntryError> {
    String::from_utf8(bytes).map_err(|e| EntryError::Decode {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

/// Extract an archive with the default options.
pub fn extract(archive_bytes: &[u8]) -> Result<ExtractionResult> {
    ArchiveExtractor::default().extract(archive_bytes)
}

/// Run [`ArchiveExtractor::extract`] on a blocking worker thread.
///
/// The whole buffer is processed as one unit of work; the result only
/// becomes visible once the extraction has finished.
pub async fn extract_in_background(
    input: ArchiveInput,
    options: ExtractOptions,
) -> Result<ExtractionResult> {
    tokio::task::spawn_blocking(move || ArchiveExtractor::new(options).extract(input.as_bytes()))
        .await
        .map_err(|e| Error::Internal(format!("Extraction task failed: {e}")))?
}
