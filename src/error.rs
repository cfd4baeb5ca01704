//! Error types for archive ingestion.
//!
//! Two levels of failure exist. [`Error`] is returned when a whole call fails,
//! for instance when the ZIP container cannot be parsed at all. [`EntryError`]
//! describes a problem with a single entry; those are collected into the
//! extraction result instead of aborting it.

use std::io;

use serde::Serialize;
use thiserror::Error;

/// Errors that fail an entire operation.
#[derive(Error, Debug)]
pub enum Error {
    /// The archive container could not be opened or parsed.
    #[error("Archive is corrupt: {0}")]
    ArchiveCorrupt(String),

    /// No `endsong_N.json` files were present in the extracted entries.
    #[error("Could not find any streaming history files in the archive")]
    NoStreamingHistory,

    /// I/O error while loading the archive from disk.
    #[error("I/O error")]
    Io {
        #[from]
        source: io::Error,
    },

    /// A background extraction task failed to complete.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn archive_corrupt(msg: impl Into<String>) -> Self {
        Self::ArchiveCorrupt(msg.into())
    }
}

/// Result type alias for operations that can fail with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Classification of a per-entry failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryErrorKind {
    /// The entry's data could not be read or decompressed.
    ReadFailure,
    /// The entry's bytes are not valid UTF-8.
    DecodeFailure,
}

/// A problem with a single archive entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("{0}")]
    Read(String),

    #[error("invalid UTF-8 after byte {valid_up_to}")]
    Decode { valid_up_to: usize },
}

impl EntryError {
    pub fn read(msg: impl Into<String>) -> Self {
        Self::Read(msg.into())
    }

    pub fn kind(&self) -> EntryErrorKind {
        match self {
            EntryError::Read(_) => EntryErrorKind::ReadFailure,
            EntryError::Decode { .. } => EntryErrorKind::DecodeFailure,
        }
    }
}
