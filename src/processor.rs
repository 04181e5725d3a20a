//! Core text processing engine
//!
//! Owns a file path and its loaded content, and answers the regex-based
//! queries and transformations over that content.

use crate::encoding;
use crate::rules::{DateExtractor, LetterFilter, RedactionSet};

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by [`TextProcessor`]
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// The path did not exist at construction, or vanished before the read
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Permission or device failure while reading the file
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The letter argument was not a single ASCII alphabetic character
    #[error("expected a single alphabetic letter, got '{0}'")]
    InvalidLetter(String),
}

/// Loads one text file into memory and runs regex passes over it.
///
/// The path is fixed at construction; `content` starts empty and is
/// replaced wholesale by each [`read_file`](TextProcessor::read_file) call.
/// Every query operates on the stored content without mutating it.
#[derive(Debug)]
pub struct TextProcessor {
    path: PathBuf,
    content: String,
}

impl TextProcessor {
    /// Create a processor for the file at `path`.
    ///
    /// The path is absolutized and must exist. No content is read yet.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ProcessorError> {
        let path = path.as_ref();
        let path = std::path::absolute(path).map_err(|source| ProcessorError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if !path.exists() {
            return Err(ProcessorError::FileNotFound(path));
        }

        Ok(Self {
            path,
            content: String::new(),
        })
    }

    /// The absolute path this processor reads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The currently loaded content (empty before [`read_file`](Self::read_file))
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Read the whole file into memory, replacing any previous content.
    ///
    /// Decoding is strict UTF-8 with a permissive WINDOWS-1252 fallback.
    pub fn read_file(&mut self) -> Result<(), ProcessorError> {
        let decoded =
            encoding::read_file_text(&self.path).map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => ProcessorError::FileNotFound(self.path.clone()),
                _ => ProcessorError::Io {
                    path: self.path.clone(),
                    source,
                },
            })?;

        if decoded.used_fallback() {
            log::debug!(
                "decoded {} with fallback encoding {}",
                self.path.display(),
                decoded.encoding_name()
            );
        }

        self.content = decoded.text;
        Ok(())
    }

    /// Short human-readable summary: file name and character count
    pub fn describe(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());

        format!(
            "Processor for '{}' ({} characters)",
            name,
            self.content.chars().count()
        )
    }

    /// Words whose first character is `letter`, either case, in order of
    /// appearance, duplicates included
    pub fn filter_words_starting_with(
        &self,
        letter: char,
    ) -> Result<Vec<String>, ProcessorError> {
        let filter = LetterFilter::starting_with(letter)?;
        Ok(filter.find_all(&self.content))
    }

    /// Words containing `letter` at any position, either case
    pub fn filter_words_containing(&self, letter: char) -> Result<Vec<String>, ProcessorError> {
        let filter = LetterFilter::containing(letter)?;
        Ok(filter.find_all(&self.content))
    }

    /// A copy of the content with every comma replaced by a dot
    pub fn replace_commas_with_dots(&self) -> String {
        self.content.replace(',', ".")
    }

    /// Date-like substrings in order of appearance, duplicates included
    pub fn extract_dates(&self) -> Vec<String> {
        DateExtractor::new().extract(&self.content)
    }

    /// A copy of the content with emails, CPFs, and phone numbers replaced
    /// by their redaction markers
    pub fn hide_sensitive_info(&self) -> String {
        RedactionSet::new().apply(&self.content)
    }
}

impl fmt::Display for TextProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
