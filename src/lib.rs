//! # eswzip
//!
//! Archive ingestion for personal data exports.
//!
//! A data export (for example the extended streaming history of a music
//! service) arrives as a ZIP archive. This library takes the archive as an
//! in-memory byte buffer, walks its entries in central directory order and
//! decodes each file entry into UTF-8 text, ready to be handed to whatever
//! parses and aggregates it.
//!
//! A damaged entry never blocks the rest of the archive: read and decode
//! problems are collected next to the successfully decoded entries. Only an
//! archive whose container cannot be parsed fails the call.
//!
//! ## Features
//!
//! - STORED and DEFLATE entries, ZIP64, archive comments
//! - CRC-32 verification
//! - Include/exclude name patterns with `*` and `?` globs
//! - Selection of `endsong_N.json` streaming history files
//! - Extraction on a tokio blocking worker
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use eswzip::{ExtractOptions, extract_in_background, read_archive_file, streaming_history};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let input = read_archive_file(Path::new("my_spotify_data.zip")).await?;
//!     let result = extract_in_background(input, ExtractOptions::default()).await?;
//!
//!     for failure in &result.failures {
//!         eprintln!("{}: {}", failure.name, failure.message);
//!     }
//!     for entry in streaming_history(&result)? {
//!         println!("{} ({} bytes)", entry.name, entry.text.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod filter;
pub mod history;
pub mod io;
pub mod model;
pub mod zip;

pub use cli::Cli;
pub use error::{EntryError, EntryErrorKind, Error, Result};
pub use filter::EntryFilter;
pub use history::streaming_history;
pub use io::read_archive_file;
pub use model::{ArchiveInput, DecodedEntry, EntryFailure, ExtractionResult};
pub use zip::{ArchiveEntry, ArchiveExtractor, ExtractOptions, extract, extract_in_background};
