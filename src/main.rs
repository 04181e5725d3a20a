//! Text Scrubber - regex-based text inspection and redaction
//!
//! Main entry point for the command-line application.

use bytesize::ByteSize;
use clap::Parser;
use std::process;

use text_scrubber::cli::Args;
use text_scrubber::processor::TextProcessor;
use text_scrubber::report::{
    format_number, preview, print_banner, print_bullet, print_error, print_header, print_info,
    print_success, print_warning,
};
use text_scrubber::rules;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        print_guidance();
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    // Validate arguments
    validate_args(&args)?;

    // Construct the processor and load the file
    let mut processor = TextProcessor::new(&args.input)?;

    if !args.quiet && args.verbose {
        print_config(&args, &processor);
    }

    processor.read_file()?;

    if !args.quiet {
        print_info(&processor.describe());
    }

    // Run the selected operations
    if let Some(letter) = args.starts_with {
        print_header(&format!("Words starting with '{letter}'"));
        print_matches(&processor.filter_words_starting_with(letter)?);
    }

    if let Some(letter) = args.contains {
        print_header(&format!("Words containing '{letter}'"));
        print_matches(&processor.filter_words_containing(letter)?);
    }

    if args.wants_dates() {
        print_header("Dates found");
        print_matches(&processor.extract_dates());
    }

    if args.wants_dots() {
        print_header("Text with commas replaced by dots");
        println!("{}", preview(&processor.replace_commas_with_dots(), args.preview_chars));
    }

    if args.wants_hide() {
        print_header("Text with sensitive data hidden");
        println!("{}", preview(&processor.hide_sensitive_info(), args.preview_chars));
    }

    if !args.quiet {
        println!();
        print_success("Processing complete");
    }

    Ok(())
}

/// Validate command-line arguments
fn validate_args(args: &Args) -> anyhow::Result<()> {
    // Check that we have at least one operation
    if !args.has_operation() {
        anyhow::bail!(
            "At least one operation must be specified: \
             --starts-with, --contains, --dates, --hide, --dots, or --all"
        );
    }

    // Validate letter arguments if provided
    if let Some(letter) = args.starts_with {
        rules::validate_letter(letter)?;
    }
    if let Some(letter) = args.contains {
        rules::validate_letter(letter)?;
    }

    Ok(())
}

/// Print an ordered match list with a count, or a warning when empty
fn print_matches(matches: &[String]) {
    if matches.is_empty() {
        print_warning("No matches found");
        return;
    }

    for m in matches {
        print_bullet(m);
    }
    print_info(&format!("{} matches", format_number(matches.len() as u64)));
}

/// Print configuration summary
fn print_config(args: &Args, processor: &TextProcessor) {
    print_header("Configuration");

    print_info(&format!("Input:         {}", processor.path().display()));

    if let Ok(metadata) = std::fs::metadata(processor.path()) {
        print_info(&format!("File size:     {}", ByteSize(metadata.len())));
    }

    if let Some(letter) = args.starts_with {
        print_info(&format!("Starts with:   '{letter}'"));
    }
    if let Some(letter) = args.contains {
        print_info(&format!("Contains:      '{letter}'"));
    }

    print_info(&format!("Dates:         {}", args.wants_dates()));
    print_info(&format!("Hide:          {}", args.wants_hide()));
    print_info(&format!("Dots:          {}", args.wants_dots()));
    print_info(&format!("Preview chars: {}", args.preview_chars));
}

/// Print a short troubleshooting list after a failure
fn print_guidance() {
    print_header("Possible causes");
    print_bullet("The file was not found or the path is incorrect");
    print_bullet("The file is empty or contains no text");
    print_bullet("The file permissions do not allow reading");
    print_bullet("The letter argument is not a single alphabetic character");

    print_header("Suggested fixes");
    print_bullet("Check that the input path points at an existing file");
    print_bullet("Check that the file contains valid text");
    print_bullet("Check the file permissions");
}
