//! Low-level ZIP archive parser.
//!
//! This module handles the binary parsing of ZIP file structures from an
//! archive that is fully buffered in memory.
//!
//! ## Parsing Strategy
//!
//! ZIP files are designed to be read from the end:
//! 1. Find the End of Central Directory (EOCD) at the buffer's end
//! 2. If ZIP64, read the ZIP64 EOCD for large file support
//! 3. Read the Central Directory to get metadata for all files
//! 4. For extraction, read each file's Local File Header and data
//!
//! Failures in steps 1-3 make the whole archive unreadable and surface as
//! [`Error::ArchiveCorrupt`]. Step 4 failures only concern one entry and are
//! reported as [`EntryError`].

use byteorder::{LittleEndian, ReadBytesExt};
use flate2::Crc;
use flate2::read::DeflateDecoder;
use std::io::{self, Cursor, Read};

use crate::error::{EntryError, Error, Result};

use super::structures::*;

/// Maximum ZIP comment size allowed by the format (65535 bytes).
///
/// This limits the search area when looking for EOCD with a comment.
const MAX_COMMENT_SIZE: usize = 65535;

/// Low-level ZIP parser over an in-memory archive.
///
/// The parser only borrows the buffer; nothing it does mutates the archive.
///
/// ## Example
///
/// ```ignore
/// let parser = ZipParser::new(&bytes);
/// for entry in parser.list_entries()? {
///     let data = parser.read_entry(&entry, true)?;
/// }
/// ```
pub struct ZipParser<'a> {
    /// The complete archive
    data: &'a [u8],
}

impl<'a> ZipParser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Total size of the archive in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Bounds-checked view of `len` bytes starting at `offset`.
    fn slice(&self, offset: u64, len: u64) -> Option<&'a [u8]> {
        let end = offset.checked_add(len)?;
        if end > self.size() {
            return None;
        }
        let data: &'a [u8] = self.data;
        Some(&data[offset as usize..end as usize])
    }

    /// Find and parse the End of Central Directory record.
    ///
    /// The EOCD is located at the end of the archive. This method handles
    /// both the simple case (no comment) and archives with comments by
    /// searching backwards for the signature.
    ///
    /// # Returns
    ///
    /// A tuple of (EOCD record, offset of EOCD in the archive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArchiveCorrupt`] if no valid EOCD can be found.
    pub fn find_eocd(&self) -> Result<(EndOfCentralDirectory, u64)> {
        let size = self.data.len();
        if size < EndOfCentralDirectory::SIZE {
            return Err(Error::archive_corrupt("Not a valid ZIP file"));
        }

        // Common case: no comment, EOCD sits in the last 22 bytes
        let offset = size - EndOfCentralDirectory::SIZE;
        let tail = &self.data[offset..];
        if &tail[0..4] == EndOfCentralDirectory::SIGNATURE && tail[20..22] == [0, 0] {
            let eocd = EndOfCentralDirectory::from_bytes(tail).map_err(corrupt)?;
            return Ok((eocd, offset as u64));
        }

        // The EOCD is followed by a comment; search backwards for it.
        let search_start = size.saturating_sub(MAX_COMMENT_SIZE + EndOfCentralDirectory::SIZE);
        let buf = &self.data[search_start..];

        for i in (0..buf.len().saturating_sub(EndOfCentralDirectory::SIZE)).rev() {
            if &buf[i..i + 4] == EndOfCentralDirectory::SIGNATURE {
                // The comment length field must account for every trailing byte
                let comment_len = u16::from_le_bytes([buf[i + 20], buf[i + 21]]) as usize;

                if comment_len == buf.len() - i - EndOfCentralDirectory::SIZE {
                    let eocd = EndOfCentralDirectory::from_bytes(
                        &buf[i..i + EndOfCentralDirectory::SIZE],
                    )
                    .map_err(corrupt)?;
                    return Ok((eocd, (search_start + i) as u64));
                }
            }
        }

        Err(Error::archive_corrupt("Not a valid ZIP file"))
    }

    /// Read the ZIP64 End of Central Directory record.
    ///
    /// Called when the regular EOCD has fields saturated to 0xFFFF or
    /// 0xFFFFFFFF. The locator sits immediately before the regular EOCD.
    pub fn read_zip64_eocd(&self, eocd_offset: u64) -> Result<Zip64EOCD> {
        let locator_offset = eocd_offset
            .checked_sub(Zip64EOCDLocator::SIZE as u64)
            .ok_or_else(|| Error::archive_corrupt("Missing ZIP64 End of Central Directory Locator"))?;
        let locator_buf = self
            .slice(locator_offset, Zip64EOCDLocator::SIZE as u64)
            .ok_or_else(|| Error::archive_corrupt("Missing ZIP64 End of Central Directory Locator"))?;
        let locator = Zip64EOCDLocator::from_bytes(locator_buf).map_err(corrupt)?;

        if locator.total_disks > 1 {
            return Err(Error::archive_corrupt("Multi-disk archives are not supported"));
        }

        let eocd64_buf = self
            .slice(locator.eocd64_offset, Zip64EOCD::MIN_SIZE as u64)
            .ok_or_else(|| Error::archive_corrupt("ZIP64 End of Central Directory lies outside the archive"))?;

        Zip64EOCD::from_bytes(eocd64_buf).map_err(corrupt)
    }

    /// List all entries of the archive in central directory order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArchiveCorrupt`] if the EOCD, the ZIP64 records or
    /// any central directory header cannot be parsed.
    pub fn list_entries(&self) -> Result<Vec<ArchiveEntry>> {
        let (eocd, eocd_offset) = self.find_eocd()?;

        if eocd.is_multi_disk() {
            return Err(Error::archive_corrupt("Multi-disk archives are not supported"));
        }

        let (cd_offset, cd_size, total_entries) = if eocd.is_zip64() {
            let eocd64 = self.read_zip64_eocd(eocd_offset)?;
            if eocd64.disk_number != eocd64.disk_with_cd
                || eocd64.disk_entries != eocd64.total_entries
            {
                return Err(Error::archive_corrupt("Multi-disk archives are not supported"));
            }
            (eocd64.cd_offset, eocd64.cd_size, eocd64.total_entries)
        } else {
            (
                eocd.cd_offset as u64,
                eocd.cd_size as u64,
                eocd.total_entries as u64,
            )
        };

        let cd_data = self
            .slice(cd_offset, cd_size)
            .ok_or_else(|| Error::archive_corrupt("Central directory lies outside the archive"))?;

        tracing::debug!(
            cd_offset,
            cd_size,
            total_entries,
            "Reading central directory"
        );

        // Never trust the declared count for preallocation
        let capacity = total_entries.min((cd_data.len() / CDFH_MIN_SIZE) as u64);
        let mut entries = Vec::with_capacity(capacity as usize);
        let mut cursor = Cursor::new(cd_data);

        for index in 0..total_entries {
            let entry = parse_cdfh(&mut cursor).map_err(|e| {
                Error::archive_corrupt(format!("Invalid central directory entry {index}: {e}"))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Get the offset at which an entry's compressed data begins.
    ///
    /// The Local File Header has variable-length fields (filename, extra
    /// field) that may differ from the Central Directory copy, so the LFH
    /// itself has to be read.
    pub fn data_offset(&self, entry: &ArchiveEntry) -> std::result::Result<u64, EntryError> {
        let lfh = self
            .slice(entry.lfh_offset, LFH_SIZE as u64)
            .ok_or_else(|| EntryError::read("Local File Header lies outside the archive"))?;

        if &lfh[0..4] != LFH_SIGNATURE {
            return Err(EntryError::read("Invalid Local File Header"));
        }

        let file_name_length = u16::from_le_bytes([lfh[26], lfh[27]]) as u64;
        let extra_field_length = u16::from_le_bytes([lfh[28], lfh[29]]) as u64;

        Ok(entry.lfh_offset + LFH_SIZE as u64 + file_name_length + extra_field_length)
    }

    /// Materialize an entry's uncompressed bytes.
    ///
    /// Supports STORED and DEFLATE entries. The result is checked against
    /// the declared uncompressed size and, if `verify_crc` is set, against
    /// the CRC-32 recorded in the central directory.
    pub fn read_entry(
        &self,
        entry: &ArchiveEntry,
        verify_crc: bool,
    ) -> std::result::Result<Vec<u8>, EntryError> {
        if entry.is_encrypted() {
            return Err(EntryError::read("Encrypted entries are not supported"));
        }

        let data_offset = self.data_offset(entry)?;
        let raw = self
            .slice(data_offset, entry.compressed_size)
            .ok_or_else(|| EntryError::read("Entry data extends past the end of the archive"))?;

        let data = match entry.compression_method {
            CompressionMethod::Stored => raw.to_vec(),
            CompressionMethod::Deflate => inflate(raw, entry.uncompressed_size)?,
            CompressionMethod::Unknown(method) => {
                return Err(EntryError::read(format!(
                    "Unsupported compression method: {method}"
                )));
            }
        };

        if data.len() as u64 != entry.uncompressed_size {
            return Err(EntryError::read(format!(
                "Size mismatch: expected {} bytes, got {}",
                entry.uncompressed_size,
                data.len()
            )));
        }

        if verify_crc {
            let mut crc = Crc::new();
            crc.update(&data);
            if crc.sum() != entry.crc32 {
                return Err(EntryError::read(format!(
                    "CRC-32 mismatch: expected {:08x}, got {:08x}",
                    entry.crc32,
                    crc.sum()
                )));
            }
        }

        Ok(data)
    }
}

fn corrupt(e: io::Error) -> Error {
    Error::archive_corrupt(e.to_string())
}

/// Decompress a raw DEFLATE stream.
///
/// Reads at most one byte past the declared size so oversized output is
/// detected without inflating the whole stream.
fn inflate(raw: &[u8], expected: u64) -> std::result::Result<Vec<u8>, EntryError> {
    let mut out = Vec::new();
    DeflateDecoder::new(raw)
        .take(expected.saturating_add(1))
        .read_to_end(&mut out)
        .map_err(|e| EntryError::read(format!("Deflate decompression failed: {e}")))?;
    Ok(out)
}

/// Parse a Central Directory File Header from a cursor.
fn parse_cdfh(cursor: &mut Cursor<&[u8]>) -> io::Result<ArchiveEntry> {
    let mut sig = [0u8; 4];
    cursor.read_exact(&mut sig)?;
    if sig != CDFH_SIGNATURE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Invalid Central Directory File Header",
        ));
    }

    let _version_made_by = cursor.read_u16::<LittleEndian>()?;
    let _version_needed = cursor.read_u16::<LittleEndian>()?;
    let flags = cursor.read_u16::<LittleEndian>()?;
    let compression_method = cursor.read_u16::<LittleEndian>()?;
    let last_mod_time = cursor.read_u16::<LittleEndian>()?;
    let last_mod_date = cursor.read_u16::<LittleEndian>()?;
    let crc32 = cursor.read_u32::<LittleEndian>()?;
    let mut compressed_size = cursor.read_u32::<LittleEndian>()? as u64;
    let mut uncompressed_size = cursor.read_u32::<LittleEndian>()? as u64;
    let file_name_length = cursor.read_u16::<LittleEndian>()?;
    let extra_field_length = cursor.read_u16::<LittleEndian>()?;
    let file_comment_length = cursor.read_u16::<LittleEndian>()?;
    let _disk_number_start = cursor.read_u16::<LittleEndian>()?;
    let _internal_attrs = cursor.read_u16::<LittleEndian>()?;
    let external_attrs = cursor.read_u32::<LittleEndian>()?;
    let mut lfh_offset = cursor.read_u32::<LittleEndian>()? as u64;

    let mut file_name_bytes = vec![0u8; file_name_length as usize];
    cursor.read_exact(&mut file_name_bytes)?;
    // Non-UTF8 names (CP437 archives) are kept readable rather than rejected
    let name = String::from_utf8_lossy(&file_name_bytes).into_owned();

    let is_directory = name.ends_with('/')
        || name.ends_with('\\')
        || external_attrs & DOS_DIRECTORY_ATTR != 0;

    // ZIP64 extended information lives in extra field 0x0001
    let extra_field_end = cursor.position() + extra_field_length as u64;

    while cursor.position() + 4 <= extra_field_end {
        let header_id = cursor.read_u16::<LittleEndian>()?;
        let field_size = cursor.read_u16::<LittleEndian>()?;
        let field_end = cursor.position() + field_size as u64;

        if header_id == 0x0001 {
            // Fields are present only if the header field is saturated
            if uncompressed_size == 0xFFFFFFFF && cursor.position() + 8 <= field_end {
                uncompressed_size = cursor.read_u64::<LittleEndian>()?;
            }
            if compressed_size == 0xFFFFFFFF && cursor.position() + 8 <= field_end {
                compressed_size = cursor.read_u64::<LittleEndian>()?;
            }
            if lfh_offset == 0xFFFFFFFF && cursor.position() + 8 <= field_end {
                lfh_offset = cursor.read_u64::<LittleEndian>()?;
            }
        }

        cursor.set_position(field_end);
    }

    cursor.set_position(extra_field_end + file_comment_length as u64);

    Ok(ArchiveEntry {
        name,
        compression_method: CompressionMethod::from_u16(compression_method),
        compressed_size,
        uncompressed_size,
        crc32,
        lfh_offset,
        flags,
        last_mod_time,
        last_mod_date,
        is_directory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-assembled single-entry STORED archive.
    fn stored_archive(name: &str, content: &[u8]) -> Vec<u8> {
        let mut crc = Crc::new();
        crc.update(content);
        let crc = crc.sum();
        let size = content.len() as u32;

        let mut out = Vec::new();
        out.extend_from_slice(LFH_SIGNATURE);
        out.extend_from_slice(&20u16.to_le_bytes()); // version needed
        out.extend_from_slice(&0u16.to_le_bytes()); // flags
        out.extend_from_slice(&0u16.to_le_bytes()); // method
        out.extend_from_slice(&0u16.to_le_bytes()); // time
        out.extend_from_slice(&0u16.to_le_bytes()); // date
        out.extend_from_slice(&crc.to_le_bytes());
        out.extend_from_slice(&size.to_le_bytes());
        out.extend_from_slice(&size.to_le_bytes());
        out.extend_from_slice(&(name.len() as u16).to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(name.as_bytes());
        out.extend_from_slice(content);

        let cd_offset = out.len() as u32;
        out.extend_from_slice(CDFH_SIGNATURE);
        out.extend_from_slice(&20u16.to_le_bytes()); // made by
        out.extend_from_slice(&20u16.to_le_bytes()); // needed
        out.extend_from_slice(&0u16.to_le_bytes()); // flags
        out.extend_from_slice(&0u16.to_le_bytes()); // method
        out.extend_from_slice(&0u16.to_le_bytes()); // time
        out.extend_from_slice(&0u16.to_le_bytes()); // date
        out.extend_from_slice(&crc.to_le_bytes());
        out.extend_from_slice(&size.to_le_bytes());
        out.extend_from_slice(&size.to_le_bytes());
        out.extend_from_slice(&(name.len() as u16).to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes()); // extra
        out.extend_from_slice(&0u16.to_le_bytes()); // comment
        out.extend_from_slice(&0u16.to_le_bytes()); // disk
        out.extend_from_slice(&0u16.to_le_bytes()); // internal
        out.extend_from_slice(&0u32.to_le_bytes()); // external
        out.extend_from_slice(&0u32.to_le_bytes()); // lfh offset
        out.extend_from_slice(name.as_bytes());
        let cd_size = out.len() as u32 - cd_offset;

        out.extend_from_slice(EndOfCentralDirectory::SIGNATURE);
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&cd_size.to_le_bytes());
        out.extend_from_slice(&cd_offset.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out
    }

    #[test]
    fn test_lists_and_reads_stored_entry() {
        let data = stored_archive("endsong_0.json", b"[]");
        let parser = ZipParser::new(&data);

        let entries = parser.list_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "endsong_0.json");
        assert!(!entries[0].is_directory);
        assert_eq!(parser.read_entry(&entries[0], true).unwrap(), b"[]");
    }

    #[test]
    fn test_finds_eocd_behind_comment() {
        let mut data = stored_archive("a.txt", b"hello");
        let comment = b"exported by a streaming service";
        let len = data.len();
        data[len - 2..].copy_from_slice(&(comment.len() as u16).to_le_bytes());
        data.extend_from_slice(comment);

        let parser = ZipParser::new(&data);
        let (eocd, offset) = parser.find_eocd().unwrap();
        assert_eq!(eocd.comment_len as usize, comment.len());
        assert_eq!(offset as usize, len - EndOfCentralDirectory::SIZE);
        assert_eq!(parser.list_entries().unwrap().len(), 1);
    }

    #[test]
    fn test_short_buffer_is_corrupt() {
        let parser = ZipParser::new(b"PK\x03\x04");
        assert!(matches!(parser.list_entries(), Err(Error::ArchiveCorrupt(_))));
    }

    #[test]
    fn test_central_directory_out_of_bounds_is_corrupt() {
        let mut data = stored_archive("a.txt", b"hello");
        let len = data.len();
        // Point the central directory past the end of the buffer
        data[len - 6..len - 2].copy_from_slice(&(len as u32).to_le_bytes());

        let parser = ZipParser::new(&data);
        assert!(matches!(parser.list_entries(), Err(Error::ArchiveCorrupt(_))));
    }

    #[test]
    fn test_bad_local_header_is_entry_error() {
        let mut data = stored_archive("a.txt", b"hello");
        data[0] = b'X';

        let parser = ZipParser::new(&data);
        let entries = parser.list_entries().unwrap();
        let err = parser.read_entry(&entries[0], true).unwrap_err();
        assert_eq!(err, EntryError::read("Invalid Local File Header"));
    }

    #[test]
    fn test_crc_mismatch_can_be_ignored() {
        let mut data = stored_archive("a.txt", b"hello");
        let pos = LFH_SIZE + "a.txt".len();
        data[pos] = b'j';

        let parser = ZipParser::new(&data);
        let entries = parser.list_entries().unwrap();
        assert!(parser.read_entry(&entries[0], true).is_err());
        assert_eq!(parser.read_entry(&entries[0], false).unwrap(), b"jello");
    }

    #[test]
    fn test_unsupported_method() {
        let data = stored_archive("a.txt", b"hello");
        let parser = ZipParser::new(&data);
        let mut entry = parser.list_entries().unwrap().remove(0);
        entry.compression_method = CompressionMethod::Unknown(14);

        let err = parser.read_entry(&entry, true).unwrap_err();
        assert!(err.to_string().contains("Unsupported compression method: 14"));
    }

    /// Single-entry archive whose end record and central directory header
    /// defer every size and offset to the ZIP64 records.
    fn zip64_archive(name: &str, content: &[u8], disk_with_cd: u32) -> Vec<u8> {
        let mut data = stored_archive(name, content);
        let cd_offset = find_signature(&data, CDFH_SIGNATURE);
        data.truncate(cd_offset);

        let mut extra = Vec::new();
        extra.extend_from_slice(&0x0001u16.to_le_bytes());
        extra.extend_from_slice(&24u16.to_le_bytes());
        extra.extend_from_slice(&(content.len() as u64).to_le_bytes());
        extra.extend_from_slice(&(content.len() as u64).to_le_bytes());
        extra.extend_from_slice(&0u64.to_le_bytes());

        let mut crc = Crc::new();
        crc.update(content);

        data.extend_from_slice(CDFH_SIGNATURE);
        data.extend_from_slice(&45u16.to_le_bytes()); // made by
        data.extend_from_slice(&45u16.to_le_bytes()); // needed
        data.extend_from_slice(&0u16.to_le_bytes()); // flags
        data.extend_from_slice(&0u16.to_le_bytes()); // method
        data.extend_from_slice(&0u16.to_le_bytes()); // time
        data.extend_from_slice(&0u16.to_le_bytes()); // date
        data.extend_from_slice(&crc.sum().to_le_bytes());
        data.extend_from_slice(&u32::MAX.to_le_bytes());
        data.extend_from_slice(&u32::MAX.to_le_bytes());
        data.extend_from_slice(&(name.len() as u16).to_le_bytes());
        data.extend_from_slice(&(extra.len() as u16).to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes()); // comment
        data.extend_from_slice(&0u16.to_le_bytes()); // disk
        data.extend_from_slice(&0u16.to_le_bytes()); // internal
        data.extend_from_slice(&0u32.to_le_bytes()); // external
        data.extend_from_slice(&u32::MAX.to_le_bytes()); // lfh offset
        data.extend_from_slice(name.as_bytes());
        data.extend_from_slice(&extra);
        let cd_size = (data.len() - cd_offset) as u64;

        let eocd64_offset = data.len() as u64;
        data.extend_from_slice(Zip64EOCD::SIGNATURE);
        data.extend_from_slice(&44u64.to_le_bytes()); // record size
        data.extend_from_slice(&45u16.to_le_bytes());
        data.extend_from_slice(&45u16.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes()); // this disk
        data.extend_from_slice(&disk_with_cd.to_le_bytes());
        data.extend_from_slice(&1u64.to_le_bytes());
        data.extend_from_slice(&1u64.to_le_bytes());
        data.extend_from_slice(&cd_size.to_le_bytes());
        data.extend_from_slice(&(cd_offset as u64).to_le_bytes());

        data.extend_from_slice(Zip64EOCDLocator::SIGNATURE);
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&eocd64_offset.to_le_bytes());
        data.extend_from_slice(&1u32.to_le_bytes());

        data.extend_from_slice(EndOfCentralDirectory::SIGNATURE);
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&u16::MAX.to_le_bytes());
        data.extend_from_slice(&u16::MAX.to_le_bytes());
        data.extend_from_slice(&u32::MAX.to_le_bytes());
        data.extend_from_slice(&u32::MAX.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data
    }

    fn find_signature(data: &[u8], signature: &[u8]) -> usize {
        data.windows(signature.len())
            .position(|w| w == signature)
            .unwrap()
    }

    #[test]
    fn test_zip64_records_and_extra_field() {
        let data = zip64_archive("MyData/endsong_0.json", b"[\"zip64\"]", 0);
        let parser = ZipParser::new(&data);

        let (eocd, _) = parser.find_eocd().unwrap();
        assert!(eocd.is_zip64());

        let entries = parser.list_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "MyData/endsong_0.json");
        assert_eq!(entries[0].uncompressed_size, 9);
        assert_eq!(entries[0].compressed_size, 9);
        assert_eq!(entries[0].lfh_offset, 0);
        assert_eq!(parser.read_entry(&entries[0], true).unwrap(), b"[\"zip64\"]");
    }

    #[test]
    fn test_zip64_multi_disk_is_corrupt() {
        let data = zip64_archive("endsong_0.json", b"[]", 1);
        let parser = ZipParser::new(&data);
        assert!(matches!(parser.list_entries(), Err(Error::ArchiveCorrupt(_))));
    }

    #[test]
    fn test_encrypted_entry_is_entry_error() {
        let data = stored_archive("a.txt", b"hello");
        let parser = ZipParser::new(&data);
        let mut entry = parser.list_entries().unwrap().remove(0);
        entry.flags |= FLAG_ENCRYPTED;

        let err = parser.read_entry(&entry, true).unwrap_err();
        assert_eq!(err, EntryError::read("Encrypted entries are not supported"));
    }
}
