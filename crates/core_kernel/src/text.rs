//! Diacritic-insensitive text search
//!
//! Product search matches `řízek` against `rizek` and vice versa. Folding
//! decomposes to NFD, drops combining marks, and lowercases; the search
//! itself is a stateless substring predicate over folded strings.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strips diacritics and lowercases for comparison purposes
pub fn fold_diacritics(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case- and diacritic-insensitive substring test
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_diacritics(haystack).contains(&fold_diacritics(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_czech_diacritics() {
        assert_eq!(fold_diacritics("Řízek se zelím"), "rizek se zelim");
    }

    #[test]
    fn test_contains_ignores_diacritics_and_case() {
        assert!(contains_folded("Smažený sýr", "SYR"));
        assert!(contains_folded("konzultace", "Konzultace"));
    }

    #[test]
    fn test_contains_accented_needle() {
        assert!(contains_folded("skoleni zamestnancu", "školení"));
    }

    #[test]
    fn test_no_match() {
        assert!(!contains_folded("konzultace", "faktura"));
    }
}
