//! Slug derivation from display names.
//!
//! A slug is the lower-cased name with every run of whitespace replaced by a
//! single hyphen. Nothing else is touched: punctuation and non-ASCII letters
//! pass through, and leading/trailing whitespace is not trimmed, so a name
//! padded with spaces yields a slug that starts or ends with a hyphen.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a maximal run of Unicode whitespace.
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Derives a URL slug from a display name.
///
/// Slugs are not unique: two names differing only in case or spacing map to
/// the same slug.
///
/// # Examples
///
/// ```
/// use content_cms::utils::slug::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("Breaking News!!"), "breaking-news!!");
/// assert_eq!(slugify("  Tech  Trends "), "-tech-trends-");
/// ```
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_hyphenates() {
        assert_eq!(slugify("Getting Started With Rust"), "getting-started-with-rust");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(slugify("a  b\t\tc\n d"), "a-b-c-d");
    }

    #[test]
    fn test_leading_and_trailing_whitespace_not_trimmed() {
        assert_eq!(slugify("  Tech  Trends "), "-tech-trends-");
    }

    #[test]
    fn test_punctuation_passes_through() {
        assert_eq!(slugify("Breaking News!!"), "breaking-news!!");
        assert_eq!(slugify("C++ & Rust"), "c++-&-rust");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(slugify("Café Crème"), "café-crème");
    }

    #[test]
    fn test_non_breaking_space_is_whitespace() {
        assert_eq!(slugify("New\u{00A0}Post"), "new-post");
    }

    #[test]
    fn test_already_slugged_is_unchanged() {
        for slug in ["hello-world", "release-notes-2024", "a-b-c"] {
            assert_eq!(slugify(slug), slug);
        }
    }

    #[test]
    fn test_idempotent() {
        let names = [
            "Hello World",
            "  padded  name  ",
            "Tabs\tand\nNewlines",
            "MiXeD CaSe",
            "Breaking News!!",
        ];

        for name in names {
            let once = slugify(name);
            assert_eq!(slugify(&once), once, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn test_output_is_lowercase_without_whitespace() {
        let names = ["Some Title", "ANOTHER\tONE", " x ", "Ünïcode Wörds"];

        for name in names {
            let slug = slugify(name);
            assert!(!slug.chars().any(char::is_whitespace), "{slug:?}");
            assert_eq!(slug, slug.to_lowercase());
        }
    }

    #[test]
    fn test_ascii_alphanumeric_matches_pattern() {
        let slug = slugify("Top 10 Tips For 2025");
        assert_eq!(slug, "top-10-tips-for-2025");
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(slugify(""), "");
    }
}
