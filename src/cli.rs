//! Command-line interface definition for text-scrubber
//!
//! Provides argument parsing and validation for the text scrubbing tool.

use clap::Parser;
use std::path::PathBuf;

/// Regex-based text inspection and redaction
///
/// Load a text file and filter words, extract dates, normalize commas,
/// or hide sensitive data (emails, CPFs, phone numbers).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "text-scrubber",
    version,
    about = "Regex-based text inspection and redaction",
    long_about = r#"
Load a single text file and run regex-based operations over it: filter words
by letter, extract date-like substrings, replace commas with dots, and hide
sensitive data behind [EMAIL], [CPF], and [TELEFONE] markers.

Files that are not valid UTF-8 are decoded with a permissive WINDOWS-1252
fallback, so any byte sequence can be processed.

EXAMPLES:
    # Words starting with 'a'
    text-scrubber -i notes.txt -s a

    # Words containing 'u'
    text-scrubber -i notes.txt -c u

    # Extract dates (DD/MM/YYYY or DD-MM-YYYY)
    text-scrubber -i notes.txt --dates

    # Redact emails, CPFs, and phone numbers
    text-scrubber -i notes.txt --hide

    # Everything except the letter filters
    text-scrubber -i notes.txt --all

    # Full redacted text, no preview truncation
    text-scrubber -i notes.txt --hide --preview-chars 0
"#
)]
pub struct Args {
    /// Input text file
    #[arg(short, long, required = true, value_name = "FILE")]
    pub input: PathBuf,

    /// Print words starting with LETTER (case-insensitive)
    #[arg(short = 's', long, value_name = "LETTER")]
    pub starts_with: Option<char>,

    /// Print words containing LETTER (case-insensitive)
    #[arg(short = 'c', long, value_name = "LETTER")]
    pub contains: Option<char>,

    /// Extract date-like substrings (DD/MM/YYYY or DD-MM-YYYY)
    #[arg(short = 'd', long, default_value_t = false)]
    pub dates: bool,

    /// Print the text with sensitive data hidden behind markers
    #[arg(long, default_value_t = false)]
    pub hide: bool,

    /// Print the text with commas replaced by dots
    #[arg(long, default_value_t = false)]
    pub dots: bool,

    /// Run --dates, --hide, and --dots together
    #[arg(long, default_value_t = false)]
    pub all: bool,

    /// Truncate transformed text output to N characters (0 = no limit)
    #[arg(long, value_name = "N", default_value_t = 300)]
    pub preview_chars: usize,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Whether date extraction was requested
    pub fn wants_dates(&self) -> bool {
        self.dates || self.all
    }

    /// Whether redaction was requested
    pub fn wants_hide(&self) -> bool {
        self.hide || self.all
    }

    /// Whether comma replacement was requested
    pub fn wants_dots(&self) -> bool {
        self.dots || self.all
    }

    /// True when at least one operation was selected
    pub fn has_operation(&self) -> bool {
        self.starts_with.is_some()
            || self.contains.is_some()
            || self.wants_dates()
            || self.wants_hide()
            || self.wants_dots()
    }
}
