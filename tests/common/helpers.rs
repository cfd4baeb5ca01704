//! Shared helpers for building test archives.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// One entry of a test archive.
pub enum TestEntry<'a> {
    Stored(&'a str, &'a [u8]),
    Deflated(&'a str, &'a [u8]),
    Dir(&'a str),
}

/// Build an in-memory ZIP archive with the given entries, in order.
pub fn build_archive(entries: &[TestEntry<'_>]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        match entry {
            TestEntry::Stored(name, data) => {
                zip.start_file(*name, stored).unwrap();
                zip.write_all(data).unwrap();
            }
            TestEntry::Deflated(name, data) => {
                zip.start_file(*name, deflated).unwrap();
                zip.write_all(data).unwrap();
            }
            TestEntry::Dir(name) => {
                zip.add_directory(*name, stored).unwrap();
            }
        }
    }

    zip.finish().unwrap().into_inner()
}

/// Offset of the `nth` (0-based) occurrence of `needle` in `haystack`.
pub fn find_nth(haystack: &[u8], needle: &[u8], nth: usize) -> usize {
    haystack
        .windows(needle.len())
        .enumerate()
        .filter(|(_, w)| *w == needle)
        .nth(nth)
        .map(|(i, _)| i)
        .expect("needle not found in archive")
}

/// A small streaming history payload.
pub fn sample_plays(track: &str) -> String {
    format!(
        r#"[{{"ts":"2022-06-01T12:00:00Z","ms_played":215000,"master_metadata_track_name":"{}"}}]"#,
        track
    )
}

/// Offset of an entry's data given the offset of its local file header.
pub fn data_start(archive: &[u8], lfh_offset: usize) -> usize {
    let name_len = u16::from_le_bytes([archive[lfh_offset + 26], archive[lfh_offset + 27]]);
    let extra_len = u16::from_le_bytes([archive[lfh_offset + 28], archive[lfh_offset + 29]]);
    lfh_offset + 30 + name_len as usize + extra_len as usize
}
