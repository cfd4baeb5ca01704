//! Input and output types of an extraction.

use serde::Serialize;

use crate::error::{EntryError, EntryErrorKind};

/// A complete ZIP archive held in memory.
///
/// The buffer is never handed out mutably; every view derived from it is
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveInput {
    bytes: Vec<u8>,
}

impl ArchiveInput {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for ArchiveInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl AsRef<[u8]> for ArchiveInput {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// A file entry whose bytes decoded to UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedEntry {
    pub name: String,
    pub text: String,
}

/// A file entry that could not be read or decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryFailure {
    pub name: String,
    pub error_kind: EntryErrorKind,
    pub message: String,
}

impl EntryFailure {
    pub fn new(name: impl Into<String>, error: &EntryError) -> Self {
        Self {
            name: name.into(),
            error_kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// Outcome of extracting one archive.
///
/// `entries` keeps the archive's central directory order. `failures`
/// lists the entries that were skipped because of a read or decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub entries: Vec<DecodedEntry>,
    pub failures: Vec<EntryFailure>,
}

impl ExtractionResult {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of decoded text bytes.
    pub fn text_len(&self) -> u64 {
        self.entries.iter().map(|e| e.text.len() as u64).sum()
    }
}
