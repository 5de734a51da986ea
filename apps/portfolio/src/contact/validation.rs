use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::contact::form::{Field, FormState};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Browser whitespace (ECMAScript WhiteSpace + LineTerminator) as a regex
/// class body. Includes U+FEFF and excludes U+0085, unlike Unicode `\s`.
const BROWSER_WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// `local@domain.tld`: three runs without whitespace or `@`, split by `@` and a dot.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let run = format!("[^{BROWSER_WHITESPACE_CLASS}@]+");
    Regex::new(&format!(r"^{run}@{run}\.{run}$")).expect("email pattern is a valid regex")
});

/// Same set as [`BROWSER_WHITESPACE_CLASS`].
pub fn is_browser_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn is_blank(value: &str) -> bool {
    value.trim_matches(is_browser_whitespace).is_empty()
}

/// Per-field error messages. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drops one field's entry and leaves the others alone.
    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks all three fields at once.
///
/// - name and message must be non-blank after trimming browser whitespace
/// - email must be non-blank, and the raw value must look like `local@domain.tld`
pub fn validate(form: &FormState) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if is_blank(&form.name) {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if is_blank(&form.email) {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&form.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if is_blank(&form.message) {
        errors.insert(Field::Message, MESSAGE_REQUIRED);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> FormState {
        FormState {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&form("Ada", "ada@example.com", "Hi")).is_empty());
    }

    #[test]
    fn test_all_empty_reports_every_field() {
        let errors = validate(&form("", "", ""));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(Field::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let errors = validate(&form("   ", "a@b.co", "\n\t "));
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(fields, vec![Field::Name, Field::Message]);
    }

    #[test]
    fn test_only_the_empty_field_is_reported() {
        let errors = validate(&form("Ada", "a@b.co", ""));
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::Message));
    }

    #[test]
    fn test_blank_email_is_required_not_invalid() {
        let errors = validate(&form("Ada", "  ", "Hi"));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
    }

    #[test]
    fn test_email_pattern_accepts() {
        for email in ["a@b.co", "first.last@sub.example.org", "x+tag@d.io", "a@b.c.d"] {
            assert!(is_valid_email(email), "{email} should pass");
        }
    }

    #[test]
    fn test_email_pattern_rejects() {
        for email in [
            "a@b",
            "plainstring",
            "@b.co",
            "a@.co",
            "a@b.",
            "a b@c.co",
            "a@@b.co",
            " a@b.co",
            "a@b.co ",
        ] {
            assert!(!is_valid_email(email), "{email} should fail");
        }
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        let errors = validate(&form("\u{FEFF}", "a@b.co", "\u{FEFF} \u{3000}"));
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Message), Some(MESSAGE_REQUIRED));
        assert!(!is_valid_email("a\u{FEFF}@b.co"));
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert!(is_valid_email("a\u{85}b@c.co"));
        let errors = validate(&form("\u{85}", "a@b.co", "\u{85}"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_browser_whitespace_set() {
        for c in ['\t', '\u{0B}', '\u{A0}', '\u{2005}', '\u{2028}', '\u{FEFF}'] {
            assert!(is_browser_whitespace(c), "{:?} should be whitespace", c);
        }
        for c in ['\u{85}', '\u{180E}', '\u{200B}', 'a'] {
            assert!(!is_browser_whitespace(c), "{:?} should not be whitespace", c);
        }
    }

    #[test]
    fn test_invalid_email_message() {
        let errors = validate(&form("Ada", "a@b", "Hi"));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_clear_field_keeps_other_errors() {
        let mut errors = validate(&form("", "nope", ""));
        errors.clear_field(Field::Email);
        assert!(!errors.contains(Field::Email));
        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::Message));
    }
}
