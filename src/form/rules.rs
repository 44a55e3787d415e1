//! Per-field validation rules
//!
//! A [`FieldRule`] is the compiled form of a descriptor's `required` flag and
//! optional pattern. Validating is a pure function of the rule and the
//! current value, called after every change.
//!
//! Patterns are read in the browser `RegExp` dialect: look-around and
//! backreferences are allowed, and `\d`/`\w` only match ASCII.

use fancy_regex::Regex;

use crate::error::{SchemaError, SchemaResult};
use crate::schema::FieldDescriptor;

/// Shown when a pattern is configured without a message
pub const DEFAULT_PATTERN_MESSAGE: &str = "Invalid format";

const ASCII_DIGIT: &str = "0-9";
const ASCII_WORD: &str = "0-9A-Za-z_";

/// `Ok(())` when the value passes, otherwise the message to show
pub type ValidationResult = Result<(), String>;

pub fn compile_pattern(field_id: &str, pattern: &str) -> SchemaResult<Regex> {
    Regex::new(&ascii_classes(pattern)).map_err(|e| SchemaError::InvalidPattern {
        field: field_id.to_string(),
        reason: e.to_string(),
    })
}

/// Rewrite `\d`, `\w`, `\D` and `\W` into explicit ASCII ranges. Inside a
/// bracket class only the positive forms can be spliced in; the negated ones
/// are left as written.
fn ascii_classes(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => match (escaped, in_class) {
                    ('d', false) => out.push_str(&format!("[{}]", ASCII_DIGIT)),
                    ('w', false) => out.push_str(&format!("[{}]", ASCII_WORD)),
                    ('D', false) => out.push_str(&format!("[^{}]", ASCII_DIGIT)),
                    ('W', false) => out.push_str(&format!("[^{}]", ASCII_WORD)),
                    ('d', true) => out.push_str(ASCII_DIGIT),
                    ('w', true) => out.push_str(ASCII_WORD),
                    (other, _) => {
                        out.push('\\');
                        out.push(other);
                    }
                },
                None => out.push('\\'),
            },
            '[' if !in_class => {
                in_class = true;
                out.push(c);
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone)]
struct PatternRule {
    regex: Regex,
    message: String,
}

#[derive(Debug, Clone)]
pub struct FieldRule {
    required_message: Option<String>,
    pattern: Option<PatternRule>,
    warning: Option<SchemaError>,
}

impl FieldRule {
    /// Build the rule for `field`. The pattern is only compiled for text and
    /// email fields; other kinds honor `required` alone. A pattern that does
    /// not compile is dropped from the rule and kept as its warning.
    pub fn for_field(field: &FieldDescriptor, required_message: &str) -> Self {
        let mut warning = None;
        let pattern = match field.pattern() {
            Some(source) if field.kind.uses_pattern() => match compile_pattern(&field.id, source) {
                Ok(regex) => Some(PatternRule {
                    regex,
                    message: field
                        .validation
                        .as_ref()
                        .and_then(|v| v.message.clone())
                        .unwrap_or_else(|| DEFAULT_PATTERN_MESSAGE.to_string()),
                }),
                Err(err) => {
                    tracing::warn!(field = %field.id, error = %err, "pattern rule skipped");
                    warning = Some(err);
                    None
                }
            },
            _ => None,
        };

        Self {
            required_message: field.required.then(|| required_message.to_string()),
            pattern,
            warning,
        }
    }

    pub fn is_required(&self) -> bool {
        self.required_message.is_some()
    }

    pub fn has_pattern(&self) -> bool {
        self.pattern.is_some()
    }

    /// Why the configured pattern is not enforced, if it was skipped
    pub fn warning(&self) -> Option<&SchemaError> {
        self.warning.as_ref()
    }

    /// Emptiness is checked first; the pattern only applies to non-empty
    /// values and uses search semantics, so anchors must be explicit.
    pub fn validate(&self, value: &str) -> ValidationResult {
        if value.is_empty() {
            return match &self.required_message {
                Some(message) => Err(message.clone()),
                None => Ok(()),
            };
        }

        let Some(rule) = &self.pattern else {
            return Ok(());
        };
        match rule.regex.is_match(value) {
            Ok(true) => Ok(()),
            Ok(false) => Err(rule.message.clone()),
            Err(e) => {
                // backtrack limit hit; treat as a mismatch
                tracing::warn!(error = %e, "pattern match aborted");
                Err(rule.message.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    const REQUIRED: &str = "This field is required";
    const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

    fn email_field(required: bool) -> FieldDescriptor {
        FieldDescriptor::new("email", FieldKind::Email, "Email")
            .with_required(required)
            .with_validation(EMAIL_PATTERN, "Please enter a valid email address")
    }

    #[test]
    fn test_required_without_pattern() {
        let field = FieldDescriptor::new("name", FieldKind::Text, "Name").with_required(true);
        let rule = FieldRule::for_field(&field, REQUIRED);

        assert_eq!(rule.validate(""), Err(REQUIRED.to_string()));
        assert_eq!(rule.validate("Alice"), Ok(()));
        // whitespace counts as a value
        assert_eq!(rule.validate(" "), Ok(()));
    }

    #[test]
    fn test_optional_accepts_empty() {
        let field = FieldDescriptor::new("notes", FieldKind::Textarea, "Notes");
        let rule = FieldRule::for_field(&field, REQUIRED);
        assert!(!rule.is_required());
        assert_eq!(rule.validate(""), Ok(()));
    }

    #[test]
    fn test_email_pattern() {
        let rule = FieldRule::for_field(&email_field(true), REQUIRED);

        assert_eq!(rule.validate("a@b.com"), Ok(()));
        assert_eq!(
            rule.validate("not-an-email"),
            Err("Please enter a valid email address".to_string())
        );
    }

    #[test]
    fn test_required_checked_before_pattern() {
        let rule = FieldRule::for_field(&email_field(true), REQUIRED);
        assert_eq!(rule.validate(""), Err(REQUIRED.to_string()));
    }

    #[test]
    fn test_optional_pattern_field_accepts_empty() {
        let rule = FieldRule::for_field(&email_field(false), REQUIRED);
        assert_eq!(rule.validate(""), Ok(()));
        assert!(rule.validate("x").is_err());
    }

    #[test]
    fn test_pattern_is_unanchored() {
        let field = FieldDescriptor::new("code", FieldKind::Text, "Code").with_validation("[0-9]", "needs a digit");
        let rule = FieldRule::for_field(&field, REQUIRED);
        assert_eq!(rule.validate("abc1def"), Ok(()));
        assert_eq!(rule.validate("abc"), Err("needs a digit".to_string()));
    }

    #[test]
    fn test_pattern_ignored_for_choice_fields() {
        let field = FieldDescriptor::new("size", FieldKind::Select, "Size")
            .with_options(&[("s", "Small")])
            .with_validation("^x$", "never shown");
        let rule = FieldRule::for_field(&field, REQUIRED);

        assert!(!rule.has_pattern());
        assert_eq!(rule.validate("s"), Ok(()));
    }

    #[test]
    fn test_missing_message_falls_back() {
        let mut field = FieldDescriptor::new("zip", FieldKind::Text, "Zip").with_validation(r"^\d{5}$", "");
        if let Some(v) = field.validation.as_mut() {
            v.message = None;
        }
        let rule = FieldRule::for_field(&field, REQUIRED);
        assert_eq!(rule.validate("12"), Err(DEFAULT_PATTERN_MESSAGE.to_string()));
    }

    #[test]
    fn test_bad_pattern_is_skipped_with_warning() {
        let field = FieldDescriptor::new("code", FieldKind::Text, "Code")
            .with_required(true)
            .with_validation("(", "x");
        let rule = FieldRule::for_field(&field, REQUIRED);

        assert!(!rule.has_pattern());
        match rule.warning() {
            Some(SchemaError::InvalidPattern { field, .. }) => assert_eq!(field, "code"),
            other => panic!("expected InvalidPattern, got {:?}", other),
        }
        // required still applies
        assert_eq!(rule.validate(""), Err(REQUIRED.to_string()));
        assert_eq!(rule.validate("anything"), Ok(()));
    }

    #[test]
    fn test_lookahead_pattern() {
        let field = FieldDescriptor::new("password", FieldKind::Text, "Password")
            .with_validation(r"^(?=.*\d).{8,}$", "8+ characters with a digit");
        let rule = FieldRule::for_field(&field, REQUIRED);

        assert!(rule.has_pattern());
        assert!(rule.warning().is_none());
        assert_eq!(rule.validate("hunter22"), Ok(()));
        assert!(rule.validate("hunterxx").is_err());
        assert!(rule.validate("a1").is_err());
    }

    #[test]
    fn test_backreference_pattern() {
        let field = FieldDescriptor::new("pin", FieldKind::Text, "PIN")
            .with_validation(r"^(\d)\1\1\1$", "four equal digits");
        let rule = FieldRule::for_field(&field, REQUIRED);

        assert_eq!(rule.validate("7777"), Ok(()));
        assert!(rule.validate("7778").is_err());
    }

    #[test]
    fn test_digit_and_word_classes_are_ascii() {
        let digits = FieldDescriptor::new("n", FieldKind::Text, "N").with_validation(r"^\d+$", "digits");
        let rule = FieldRule::for_field(&digits, REQUIRED);
        assert_eq!(rule.validate("0123"), Ok(()));
        // Arabic-Indic digits are not \d in a browser
        assert!(rule.validate("\u{0661}\u{0662}").is_err());

        let word = FieldDescriptor::new("w", FieldKind::Text, "W").with_validation(r"^[\w-]+$", "word");
        let rule = FieldRule::for_field(&word, REQUIRED);
        assert_eq!(rule.validate("a_b-9"), Ok(()));
        assert!(rule.validate("caf\u{e9}").is_err());
    }

    #[test]
    fn test_ascii_class_rewrite() {
        assert_eq!(ascii_classes(r"^\d{5}$"), "^[0-9]{5}$");
        assert_eq!(ascii_classes(r"[\d.]"), "[0-9.]");
        assert_eq!(ascii_classes(r"\W\s"), r"[^0-9A-Za-z_]\s");
        // escaped backslash followed by a plain d
        assert_eq!(ascii_classes(r"\\d"), r"\\d");
        assert_eq!(ascii_classes(r"[^\D]"), r"[^\D]");
    }
}
