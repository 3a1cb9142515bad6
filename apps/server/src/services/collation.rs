//! Locale-style title comparison.
//!
//! Compares in three levels, the way default Unicode collation does:
//! base letters first (accents and case ignored), then accents, then case
//! with lowercase before uppercase. So "apple" < "banana" < "Banana" < "cafe"
//! < "café".
//!
//! At the first level spaces, punctuation and symbols sort before digits,
//! and digits before letters, so "~todo" < "2fa" < "abc".

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compares two titles for display ordering
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
}

/// Base letters only, each tagged with its character class
fn primary_key(s: &str) -> Vec<(u8, char)> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
        .collect()
}

fn char_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

/// Base letters with their accents
fn secondary_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

/// 0 for lowercase/uncased, 1 for uppercase, per base character
fn tertiary_key(s: &str) -> Vec<u8> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| u8::from(c.is_uppercase()))
        .collect()
}
