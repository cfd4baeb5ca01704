//! Main entry point for the eswzip CLI application.
//!
//! Loads a data export archive from disk, decodes its entries and routes the
//! result to stdout (decoded text or JSON) and stderr (failures, summary).

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing_subscriber::EnvFilter;

use eswzip::{
    ArchiveEntry, ArchiveExtractor, Cli, DecodedEntry, ExtractionResult, extract_in_background,
    read_archive_file, streaming_history,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over the quiet flags
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let input = read_archive_file(Path::new(&cli.file))
        .await
        .with_context(|| format!("Failed to read {}", cli.file))?;
    anyhow::ensure!(!input.is_empty(), "{} is empty", cli.file);

    // List mode: display archive contents and exit
    if cli.list || cli.verbose {
        let entries = ArchiveExtractor::default().list_entries(input.as_bytes())?;
        list_files(&entries, cli.verbose);
        return Ok(());
    }

    let result = extract_in_background(input, cli.extract_options())
        .await
        .with_context(|| format!("Failed to extract {}", cli.file))?;

    let entries: Vec<DecodedEntry> = if cli.history {
        streaming_history(&result)?.into_iter().cloned().collect()
    } else {
        result.entries
    };
    let report = ExtractionResult {
        entries,
        failures: result.failures,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if cli.pipe {
        let mut stdout = tokio::io::stdout();
        write_texts(&mut stdout, &report.entries).await?;
    } else if !cli.is_quiet() {
        for entry in &report.entries {
            println!("   decoded: {}", entry.name);
        }
    }

    if !cli.is_very_quiet() {
        for failure in &report.failures {
            eprintln!(
                "    failed: {} ({:?}: {})",
                failure.name, failure.error_kind, failure.message
            );
        }
    }

    if !cli.is_quiet() {
        eprintln!(
            "\n{} entries decoded, {} failed, {} of text",
            report.entries.len(),
            report.failures.len(),
            format_size(report.text_len())
        );
        if report.is_complete() {
            eprintln!("No errors detected in {}", cli.file);
        }
    }

    Ok(())
}

/// Write decoded entries to `out`.
///
/// When more than one entry is written, each is preceded by a
/// `--- name ---` marker on its own line.
async fn write_texts<W: AsyncWrite + Unpin>(
    out: &mut W,
    entries: &[DecodedEntry],
) -> Result<()> {
    let show_names = entries.len() > 1;

    for entry in entries {
        if show_names {
            out.write_all(format!("--- {} ---\n", entry.name).as_bytes())
                .await?;
        }
        out.write_all(entry.text.as_bytes()).await?;
        if show_names && !entry.text.is_empty() && !entry.text.ends_with('\n') {
            out.write_all(b"\n").await?;
        }
    }

    out.flush().await?;
    Ok(())
}

/// List files in the archive.
///
/// Supports two output formats:
/// - Simple format (`-l`): Just file names, one per line
/// - Verbose format (`-v`): Detailed table with size, compression ratio, and timestamps
fn list_files(entries: &[ArchiveEntry], verbose: bool) {
    if !verbose {
        for entry in entries {
            println!("{}", entry.name);
        }
        return;
    }

    println!(
        "{:>10}  {:>10}  {:>5}  {:>10}  {:>5}  Name",
        "Length", "Size", "Cmpr", "Date", "Time"
    );
    println!("{}", "-".repeat(70));

    let mut total_uncompressed = 0u64;
    let mut total_compressed = 0u64;
    let mut file_count = 0usize;

    for entry in entries {
        let (year, month, day) = entry.mod_date();
        let (hour, minute, _second) = entry.mod_time();

        println!(
            "{:>10}  {:>10}  {}  {:04}-{:02}-{:02}  {:02}:{:02}  {}",
            entry.uncompressed_size,
            entry.compressed_size,
            compression_ratio(entry.compressed_size, entry.uncompressed_size),
            year,
            month,
            day,
            hour,
            minute,
            entry.name
        );

        if !entry.is_directory {
            total_uncompressed = total_uncompressed.saturating_add(entry.uncompressed_size);
            total_compressed = total_compressed.saturating_add(entry.compressed_size);
            file_count += 1;
        }
    }

    println!("{}", "-".repeat(70));
    println!(
        "{:>10}  {:>10}  {}  {:>21}  {} files",
        total_uncompressed,
        total_compressed,
        compression_ratio(total_compressed, total_uncompressed),
        "",
        file_count
    );
}

/// Percentage saved by compression, formatted for the listing table.
fn compression_ratio(compressed: u64, uncompressed: u64) -> String {
    if uncompressed > 0 && compressed <= uncompressed {
        let kept = compressed as u128 * 100 / uncompressed as u128;
        format!("{:>4}%", 100 - kept)
    } else {
        format!("{:>4}%", 0)
    }
}

/// Format a byte size into a human-readable string.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_size(500), "500 bytes");
/// assert_eq!(format_size(1536), "1.50 KB");
/// assert_eq!(format_size(1048576), "1.00 MB");
/// ```
fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
