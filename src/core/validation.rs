use once_cell::sync::Lazy;
use regex::Regex;

/// Number of characters a code must have to pass validation.
///
/// This is fixed and independent of the length a generator was built with.
pub const VALID_LENGTH: usize = 7;

static JOIN_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\-]{7}$").expect("join code pattern must compile"));

/// Check whether `code` has the shape of a join code.
///
/// Accepts either a `&str` or an `Option<&str>`; absent and empty input
/// are simply invalid.
///
/// ```
/// use joincode::is_valid;
///
/// assert!(is_valid("abc12-Z"));
/// assert!(!is_valid("abc12_Z"));
/// assert!(!is_valid(None));
/// ```
pub fn is_valid<'a>(code: impl Into<Option<&'a str>>) -> bool {
    code.into()
        .map(|c| JOIN_CODE_PATTERN.is_match(c))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::{is_allowed, ALPHABET};

    #[test]
    fn test_is_valid_accepts_seven_allowed_characters() {
        assert!(is_valid("abc12-Z"));
        assert!(is_valid("AbCD124"));
        assert!(is_valid("-------"));
        assert!(is_valid("0000000"));
    }

    #[test]
    fn test_is_valid_rejects_disallowed_characters() {
        assert!(!is_valid("abc12_Z"));
        assert!(!is_valid("abc 12Z"));
        assert!(!is_valid("abc12!Z"));
        assert!(!is_valid("abcdéfg"));
    }

    #[test]
    fn test_is_valid_rejects_wrong_length() {
        assert!(!is_valid("abc12-ZZ"));
        assert!(!is_valid("abc12-"));
        assert!(!is_valid("a"));
    }

    #[test]
    fn test_is_valid_rejects_empty_and_absent() {
        assert!(!is_valid(""));
        assert!(!is_valid(None));
        assert!(is_valid(Some("abc12-Z")));
    }

    #[test]
    fn test_is_valid_rejects_surrounding_whitespace() {
        assert!(!is_valid("abc12-Z\n"));
        assert!(!is_valid(" abc12-Z"));
    }

    #[test]
    fn test_regex_agrees_with_character_check() {
        let explicit =
            |code: &str| code.chars().count() == VALID_LENGTH && code.chars().all(is_allowed);

        let samples = ["abc12-Z", "abc12_Z", "ABCDEFG", "abcdéf", "1234567", "12345678", ""];
        for code in samples {
            assert_eq!(is_valid(code), explicit(code), "disagreement on {:?}", code);
        }

        for &b in ALPHABET {
            let code = std::iter::repeat(b as char).take(VALID_LENGTH).collect::<String>();
            assert!(is_valid(code.as_str()));
        }
    }
}
