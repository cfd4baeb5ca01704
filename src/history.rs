//! Selection of streaming history payloads from an extracted export.
//!
//! An extended streaming history export stores its plays as
//! `endsong_0.json`, `endsong_1.json`, ... in numbered sequence inside one
//! folder. That folder may sit anywhere in the archive.

use crate::error::{Error, Result};
use crate::filter::basename;
use crate::model::{DecodedEntry, ExtractionResult};

/// Name of the `index`-th streaming history file.
pub fn history_file_name(index: usize) -> String {
    format!("endsong_{}.json", index)
}

/// Folder part of an entry name, including the trailing `/`.
fn folder_of(name: &str) -> &str {
    name.rfind('/').map_or("", |i| &name[..=i])
}

/// Collect the streaming history entries in index order.
///
/// The base folder is the one holding the first `endsong_0.json` in archive
/// order. Later indices are only looked up in that folder, from 0 until the
/// first missing one; files after a gap are ignored.
///
/// # Errors
///
/// Returns [`Error::NoStreamingHistory`] if no `endsong_0.json` is among the
/// decoded entries.
pub fn streaming_history(result: &ExtractionResult) -> Result<Vec<&DecodedEntry>> {
    let first_name = history_file_name(0);
    let first = result
        .entries
        .iter()
        .find(|e| basename(&e.name) == first_name)
        .ok_or(Error::NoStreamingHistory)?;
    let folder = folder_of(&first.name);

    let mut files = vec![first];

    loop {
        let wanted = format!("{}{}", folder, history_file_name(files.len()));
        match result.entries.iter().find(|e| e.name == wanted) {
            Some(entry) => files.push(entry),
            None => break,
        }
    }

    tracing::debug!(folder, count = files.len(), "Found streaming history files");

    Ok(files)
}
