//! Common validation utilities

/// Common validation functions
pub mod validators {
    use once_cell::sync::Lazy;
    use regex::Regex;

    // Pragmatic pattern; full RFC 5322 validation is not attempted
    static EMAIL_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

    /// Check if a string is not empty (ignoring surrounding whitespace)
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.len();
        len >= min && len <= max
    }

    /// Check if an email address is plausibly valid
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_RE.is_match(email)
    }
}

#[cfg(test)]
mod tests {
    use super::validators;

    #[test]
    fn test_not_empty() {
        assert!(validators::not_empty("hello"));
        assert!(!validators::not_empty(""));
        assert!(!validators::not_empty("   "));
    }

    #[test]
    fn test_length_between() {
        assert!(validators::length_between("abcd", 1, 4));
        assert!(!validators::length_between("abcd", 5, 10));
    }

    #[test]
    fn test_email_validation() {
        assert!(validators::is_valid_email("user@shopmall.io"));
        assert!(validators::is_valid_email("a.b+c@example.co.kr"));
        assert!(!validators::is_valid_email("no-at-sign.example.com"));
        assert!(!validators::is_valid_email("user@nodot"));
        assert!(!validators::is_valid_email("spaces in@mail.com"));
    }
}
