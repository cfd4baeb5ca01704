use clap::Parser;

use crate::filter::EntryFilter;
use crate::zip::ExtractOptions;

#[derive(Parser, Debug)]
#[command(name = "eswzip")]
#[command(version)]
#[command(about = "Extract a personal data export archive into decoded text", long_about = None)]
#[command(after_help = "Examples:\n  \
  eswzip my_spotify_data.zip                  decode every file and print a summary\n  \
  eswzip -p my_spotify_data.zip '*.json'      print all JSON files to stdout\n  \
  eswzip --history --json my_spotify_data.zip send the streaming history as JSON\n  \
  eswzip -v my_spotify_data.zip               list the archive contents")]
pub struct Cli {
    /// ZIP file path
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Files to extract (default: all)
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    /// List files (short format)
    #[arg(short = 'l')]
    pub list: bool,

    /// List verbosely with sizes and timestamps
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Print decoded text to stdout, no messages
    #[arg(short = 'p')]
    pub pipe: bool,

    /// Print the extraction result as JSON
    #[arg(long)]
    pub json: bool,

    /// Only output the endsong_N.json streaming history files
    #[arg(long)]
    pub history: bool,

    /// Exclude files that follow
    #[arg(short = 'x', value_name = "FILE", num_args = 1..)]
    pub exclude: Vec<String>,

    /// Skip CRC-32 verification
    #[arg(long)]
    pub no_crc: bool,

    /// Report entries larger than this many bytes as failures
    #[arg(long, value_name = "BYTES")]
    pub max_entry_size: Option<u64>,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0 || self.pipe || self.json
    }

    pub fn is_very_quiet(&self) -> bool {
        self.quiet > 1
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            filter: EntryFilter::new(self.files.clone(), self.exclude.clone()),
            verify_crc: !self.no_crc,
            max_entry_size: self.max_entry_size,
        }
    }

    /// Default `tracing` directive for the binary.
    pub fn log_directive(&self) -> &'static str {
        if self.quiet > 0 {
            "eswzip=error"
        } else {
            "eswzip=warn"
        }
    }
}
