//! ZIP archive parsing and extraction.
//!
//! This module reads ZIP archives that are fully buffered in memory and
//! decodes their file entries into text.
//!
//! ## Architecture
//!
//! - [`structures`]: Data structures representing ZIP format elements (EOCD, file headers, etc.)
//! - [`parser`]: Low-level parsing of ZIP structures from raw bytes
//! - [`extractor`]: Entry-by-entry extraction into an [`ExtractionResult`](crate::ExtractionResult)
//!
//! ## ZIP Format Overview
//!
//! A ZIP file consists of:
//! 1. Local file headers and compressed data for each file
//! 2. Central Directory with metadata for all files
//! 3. End of Central Directory (EOCD) record at the end
//!
//! The EOCD is read first, then the Central Directory, and only then the
//! individual entries, each one on demand.
//!
//! ## Supported Features
//!
//! - Standard ZIP format (PKZIP APPNOTE 6.3.x compatible)
//! - ZIP64 extensions
//! - STORED (no compression) and DEFLATE methods
//! - CRC-32 verification
//!
//! ## Limitations
//!
//! - No encryption support
//! - No multi-disk archive support
//! - No BZIP2, LZMA, or other compression methods

mod extractor;
mod parser;
mod structures;

pub use extractor::{ArchiveExtractor, ExtractOptions, decode_text, extract, extract_in_background};
pub use parser::ZipParser;
pub use structures::*;
