//! Regex rule module
//!
//! Provides the parameterized word filters and the fixed date and
//! redaction patterns applied to loaded text.

use crate::processor::ProcessorError;
use regex::Regex;

/// Raw patterns used by the filters and redaction rules
pub mod patterns {
    /// Two digits, separator, two digits, separator, four digits.
    /// The separators are matched independently, so `01/02-2020` matches too.
    pub const DATE: &str = r"\b\d{2}[/-]\d{2}[/-]\d{4}\b";

    /// Email-like: local part, `@`, domain, dot, suffix
    pub const EMAIL: &str = r"\b[\w.-]+@[\w.-]+\.\w+\b";

    /// CPF-like: 3 digits, optional dot, 3 digits, optional dot,
    /// 3 digits, optional hyphen, 2 digits
    pub const CPF: &str = r"\b\d{3}\.?\d{3}\.?\d{3}-?\d{2}\b";

    /// Phone-like: optional parenthesized area code, optional separator,
    /// 4-5 digits, optional separator, 4 digits
    pub const PHONE: &str = r"\(?\d{2}\)?[\s-]?\d{4,5}[\s-]?\d{4}\b";
}

/// Validate the letter argument: exactly one ASCII alphabetic character.
///
/// This also keeps regex metacharacters out of the composed patterns.
pub fn validate_letter(letter: char) -> Result<char, ProcessorError> {
    if letter.is_ascii_alphabetic() {
        Ok(letter)
    } else {
        Err(ProcessorError::InvalidLetter(letter.to_string()))
    }
}

/// Case-insensitive single-letter word filter
#[derive(Debug)]
pub struct LetterFilter {
    regex: Regex,
}

impl LetterFilter {
    /// Filter for words whose first character is the given letter
    pub fn starting_with(letter: char) -> Result<Self, ProcessorError> {
        let letter = validate_letter(letter)?;
        let pattern = format!(
            r"\b[{}{}]\w*\b",
            letter.to_ascii_lowercase(),
            letter.to_ascii_uppercase()
        );
        Ok(Self {
            // letter is ASCII alphabetic, so the pattern always compiles
            regex: Regex::new(&pattern).expect("letter pattern compiles"),
        })
    }

    /// Filter for words containing the given letter at any position
    pub fn containing(letter: char) -> Result<Self, ProcessorError> {
        let letter = validate_letter(letter)?;
        let pattern = format!(
            r"\b\w*[{}{}]\w*\b",
            letter.to_ascii_lowercase(),
            letter.to_ascii_uppercase()
        );
        Ok(Self {
            regex: Regex::new(&pattern).expect("letter pattern compiles"),
        })
    }

    /// Collect all matching words in order of appearance, duplicates included
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Extractor for date-like substrings
#[derive(Debug)]
pub struct DateExtractor {
    regex: Regex,
}

impl DateExtractor {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(patterns::DATE).expect("date pattern compiles"),
        }
    }

    /// Collect all date-like substrings in order of appearance
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// A single compiled redaction rule
#[derive(Debug)]
pub struct RedactionRule {
    /// Short name of the rule, for logging
    pub name: &'static str,
    regex: Regex,
    replacement: &'static str,
}

impl RedactionRule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("redaction pattern compiles"),
            replacement,
        }
    }

    /// Replace all non-overlapping matches with this rule's marker
    pub fn apply(&self, text: &str) -> String {
        self.regex.replace_all(text, self.replacement).into_owned()
    }

    /// The marker this rule substitutes in
    pub fn replacement(&self) -> &'static str {
        self.replacement
    }
}

/// The ordered redaction passes: email, then CPF, then phone.
///
/// Each pass runs on the output of the previous one, so text consumed by
/// an earlier rule is never re-matched by a later one.
#[derive(Debug)]
pub struct RedactionSet {
    rules: Vec<RedactionRule>,
}

impl RedactionSet {
    pub fn new() -> Self {
        Self {
            rules: vec![
                RedactionRule::new("email", patterns::EMAIL, "[EMAIL]"),
                RedactionRule::new("cpf", patterns::CPF, "[CPF]"),
                RedactionRule::new("phone", patterns::PHONE, "[TELEFONE]"),
            ],
        }
    }

    /// Apply every rule in order and return the fully substituted copy
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for rule in &self.rules {
            result = rule.apply(&result);
        }
        result
    }

    /// The rules in application order
    pub fn rules(&self) -> &[RedactionRule] {
        &self.rules
    }
}

impl Default for RedactionSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_with_case_insensitive() {
        let filter = LetterFilter::starting_with('a').unwrap();
        let words = filter.find_all("Apple banana avocado");

        assert_eq!(words, vec!["Apple", "avocado"]);
    }

    #[test]
    fn test_starting_with_uppercase_argument() {
        let filter = LetterFilter::starting_with('A').unwrap();
        let words = filter.find_all("Apple banana avocado");

        assert_eq!(words, vec!["Apple", "avocado"]);
    }

    #[test]
    fn test_containing_matches_anywhere() {
        let filter = LetterFilter::containing('a').unwrap();
        let words = filter.find_all("Apple banana cherry");

        assert_eq!(words, vec!["Apple", "banana"]);
    }

    #[test]
    fn test_duplicates_preserved_in_order() {
        let filter = LetterFilter::starting_with('b').unwrap();
        let words = filter.find_all("bob ate bread, bob slept");

        assert_eq!(words, vec!["bob", "bread", "bob"]);
    }

    #[test]
    fn test_invalid_letter_rejected() {
        assert!(LetterFilter::starting_with('1').is_err());
        assert!(LetterFilter::starting_with('.').is_err());
        assert!(LetterFilter::containing('é').is_err());
        assert!(LetterFilter::containing(' ').is_err());
    }

    #[test]
    fn test_extract_dates_both_separators() {
        let extractor = DateExtractor::new();
        let dates = extractor.extract("Event on 01/02/2023 and 15-03-2024.");

        assert_eq!(dates, vec!["01/02/2023", "15-03-2024"]);
    }

    #[test]
    fn test_extract_dates_mixed_separators() {
        // Separators are matched independently
        let extractor = DateExtractor::new();
        let dates = extractor.extract("logged 01/02-2020");

        assert_eq!(dates, vec!["01/02-2020"]);
    }

    #[test]
    fn test_extract_dates_rejects_wrong_widths() {
        let extractor = DateExtractor::new();

        assert!(extractor.extract("1/2/2023").is_empty());
        assert!(extractor.extract("01/02/23").is_empty());
    }

    #[test]
    fn test_redact_email() {
        let rules = RedactionSet::new();
        let redacted = rules.apply("write to joao.silva@example.com.br today");

        assert_eq!(redacted, "write to [EMAIL] today");
    }

    #[test]
    fn test_redact_cpf_with_and_without_punctuation() {
        let rules = RedactionSet::new();

        assert_eq!(rules.apply("CPF: 123.456.789-00"), "CPF: [CPF]");
        assert_eq!(rules.apply("CPF: 12345678900"), "CPF: [CPF]");
    }

    #[test]
    fn test_redact_phone_forms() {
        let rules = RedactionSet::new();

        assert_eq!(rules.apply("call (11) 91234-5678"), "call [TELEFONE]");
        assert_eq!(rules.apply("call 11 1234-5678"), "call [TELEFONE]");
    }

    #[test]
    fn test_redact_all_three_in_sequence() {
        let rules = RedactionSet::new();
        let redacted =
            rules.apply("Contact me at a@b.com or 123.456.789-00 or (11) 91234-5678");

        assert_eq!(redacted.matches("[EMAIL]").count(), 1);
        assert_eq!(redacted.matches("[CPF]").count(), 1);
        assert_eq!(redacted.matches("[TELEFONE]").count(), 1);
        assert!(!redacted.contains("a@b.com"));
        assert!(!redacted.contains("123.456.789-00"));
        assert!(!redacted.contains("91234-5678"));
    }

    #[test]
    fn test_redaction_order() {
        let rules = RedactionSet::new();
        let names: Vec<_> = rules.rules().iter().map(|r| r.name).collect();

        assert_eq!(names, vec!["email", "cpf", "phone"]);
    }

    #[test]
    fn test_validate_letter() {
        assert_eq!(validate_letter('a').unwrap(), 'a');
        assert_eq!(validate_letter('Z').unwrap(), 'Z');
        assert!(validate_letter('9').is_err());
        assert!(validate_letter('*').is_err());
    }
}
