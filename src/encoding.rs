//! Encoding fallback module
//!
//! Decodes file bytes with a fixed two-step policy: strict UTF-8 first,
//! then WINDOWS-1252, which maps every byte and therefore cannot fail.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use std::fs;
use std::io;
use std::path::Path;

/// Result of decoding a byte buffer
#[derive(Debug, Clone)]
pub struct DecodedText {
    /// The decoded content
    pub text: String,
    /// The encoding that produced the content
    pub encoding: &'static Encoding,
}

impl DecodedText {
    /// Whether the permissive fallback was engaged
    pub fn used_fallback(&self) -> bool {
        self.encoding != UTF_8
    }

    /// Name of the encoding that produced the content
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }
}

/// Decode a byte buffer: strict UTF-8, falling back to WINDOWS-1252.
///
/// The fallback decodes arbitrary byte sequences without error, so this
/// function always succeeds.
pub fn decode_bytes(bytes: &[u8]) -> DecodedText {
    let bytes = strip_utf8_bom(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => DecodedText {
            text: text.to_string(),
            encoding: UTF_8,
        },
        Err(_) => {
            log::debug!("content is not valid UTF-8, falling back to WINDOWS-1252");
            let (decoded, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            DecodedText {
                text: decoded.into_owned(),
                encoding: WINDOWS_1252,
            }
        }
    }
}

/// Read a whole file and decode it with the two-step policy
pub fn read_file_text(path: &Path) -> io::Result<DecodedText> {
    let bytes = fs::read(path)?;
    Ok(decode_bytes(&bytes))
}

/// Strip a UTF-8 BOM if present
fn strip_utf8_bom(bytes: &[u8]) -> &[u8] {
    if bytes.len() >= 3 && bytes[0..3] == [0xEF, 0xBB, 0xBF] {
        &bytes[3..]
    } else {
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_utf8_passthrough() {
        let decoded = decode_bytes("Olá, mundo!".as_bytes());
        assert_eq!(decoded.text, "Olá, mundo!");
        assert!(!decoded.used_fallback());
        assert_eq!(decoded.encoding_name(), "UTF-8");
    }

    #[test]
    fn test_latin1_fallback() {
        // "café" encoded as Latin-1
        let decoded = decode_bytes(b"caf\xe9");
        assert_eq!(decoded.text, "café");
        assert!(decoded.used_fallback());
    }

    #[test]
    fn test_arbitrary_bytes_never_fail() {
        let bytes: Vec<u8> = (0..=255).collect();
        let decoded = decode_bytes(&bytes);
        assert!(!decoded.text.is_empty());
    }

    #[test]
    fn test_bom_stripped() {
        let decoded = decode_bytes(b"\xEF\xBB\xBFhello");
        assert_eq!(decoded.text, "hello");
        assert!(!decoded.used_fallback());
    }

    #[test]
    fn test_empty_input() {
        let decoded = decode_bytes(b"");
        assert_eq!(decoded.text, "");
        assert!(!decoded.used_fallback());
    }

    #[test]
    fn test_read_file_text() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "line one\nline two").unwrap();

        let decoded = read_file_text(file.path()).unwrap();
        assert_eq!(decoded.text, "line one\nline two");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file_text(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
