//! Slug derivation — turns a blog title into the short URL-safe identifier
//! that keys the blog in the store and appears in `/blogs/{slug}` links.
//!
//! The transform is a deliberately lossy abridgement, not a general
//! slugifier: only the leading one or two whitespace-delimited runs of word
//! characters survive; everything after the first non-word character is
//! dropped, nothing is transliterated.

use regex::Regex;

use crate::errors::AppError;

/// Leading run kept from a title: one or more word characters, optional
/// whitespace, optional trailing word characters.
const TITLE_PATTERN: &str = r"^[\w\d]+[\s]*[\w\d]*";

/// Derives the slug for a blog title.
///
/// The leading match of [`TITLE_PATTERN`] is split on single spaces, each
/// piece lower-cased, and the pieces joined with hyphens.
///
/// ```text
/// slugify("this is a sample title") == Ok("this-is")
/// ```
///
/// Fails when the title is empty or does not start with a word character.
pub fn slugify(title: &str) -> Result<String, AppError> {
    let pattern = Regex::new(TITLE_PATTERN).expect("title pattern is a valid expression");
    let abridged = pattern.find(title).map(|m| m.as_str()).ok_or_else(|| {
        AppError::Validation("title is empty, or does not start with word characters".to_string())
    })?;
    let pieces: Vec<String> = abridged.split(' ').map(|p| p.to_lowercase()).collect();
    Ok(pieces.join("-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_only_first_two_tokens() {
        assert_eq!(
            slugify("Reading LM35 with RaspberryPi using amplified RC timer").unwrap(),
            "reading-lm35"
        );
    }

    #[test]
    fn test_single_token_lowercased() {
        assert_eq!(slugify("saMPle").unwrap(), "sample");
    }

    #[test]
    fn test_two_tokens_joined_with_hyphen() {
        assert_eq!(slugify("Sample Test Blog").unwrap(), "sample-test");
    }

    #[test]
    fn test_doc_example() {
        assert_eq!(slugify("this is a sample title").unwrap(), "this-is");
    }

    #[test]
    fn test_empty_title_fails() {
        assert!(slugify("").is_err());
    }

    #[test]
    fn test_all_punctuation_fails() {
        assert!(slugify("!!!").is_err());
        assert!(slugify("...---...").is_err());
    }

    #[test]
    fn test_leading_punctuation_fails() {
        // The pattern is anchored; word characters after punctuation never match.
        assert!(slugify("'quoted title'").is_err());
    }

    #[test]
    fn test_stops_at_first_non_word_character() {
        assert_eq!(slugify("Tabby Tab Angular tab-control").unwrap(), "tabby-tab");
        assert_eq!(slugify("C3PO: a droid story").unwrap(), "c3po");
    }

    #[test]
    fn test_result_is_lowercase_and_non_empty() {
        for title in [
            "Testing Django apps live on docker containers",
            "Autoconnect WiFi on Raspbian Stretch",
            "x",
            "42",
        ] {
            let slug = slugify(title).unwrap();
            assert!(!slug.is_empty());
            assert_eq!(slug, slug.to_lowercase());
        }
    }
}
