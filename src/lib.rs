//! # Text Scrubber
//!
//! Regex-based inspection and redaction for a single text file.
//!
//! ## Features
//!
//! - **Word filtering**: Find words starting with, or containing, a given letter
//! - **Date extraction**: Pull out `DD/MM/YYYY` and `DD-MM-YYYY` style dates
//! - **Redaction**: Replace emails, CPF numbers, and phone numbers with markers
//! - **Comma normalization**: Replace every comma with a dot
//! - **Encoding fallback**: Strict UTF-8 first, permissive WINDOWS-1252 second
//!
//! ## Usage
//!
//! ```bash
//! # Words starting with 'a'
//! text-scrubber -i notes.txt -s a
//!
//! # Extract dates and redact sensitive data
//! text-scrubber -i notes.txt --dates --hide
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use text_scrubber::processor::TextProcessor;
//!
//! # fn main() -> Result<(), text_scrubber::processor::ProcessorError> {
//! let mut processor = TextProcessor::new("notes.txt")?;
//! processor.read_file()?;
//!
//! println!("{}", processor.describe());
//! for word in processor.filter_words_starting_with('a')? {
//!     println!("{word}");
//! }
//! println!("{}", processor.hide_sensitive_info());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod encoding;
pub mod processor;
pub mod report;
pub mod rules;

pub use cli::Args;
pub use processor::{ProcessorError, TextProcessor};
