//! Word splitters: decompose a key into ordered word parts
//!
//! Every splitter is total. Empty parts are kept as-is so callers can see
//! doubled or leading separators.

use smallvec::SmallVec;

/// Ordered fragments of a key, inline for the common short key
pub type WordParts = SmallVec<[String; 4]>;

/// Split on every underscore
///
/// `"zip_code"` → `["zip", "code"]`, `"a__b"` → `["a", "", "b"]`.
pub fn split_snake(key: &str) -> WordParts {
    split_on(key, '_')
}

/// Split on every hyphen
pub fn split_kebab(key: &str) -> WordParts {
    split_on(key, '-')
}

/// Split immediately before every upper-case letter, keeping the letter
///
/// `"fooBar"` → `["foo", "Bar"]`. A key starting with an upper-case letter
/// yields a leading empty part: `"FooBar"` → `["", "Foo", "Bar"]`.
pub fn split_boundary(key: &str) -> WordParts {
    let mut parts = WordParts::new();
    let mut start = 0;
    for (idx, ch) in key.char_indices() {
        if ch.is_uppercase() {
            parts.push(key[start..idx].to_string());
            start = idx;
        }
    }
    parts.push(key[start..].to_string());
    parts
}

fn split_on(key: &str, separator: char) -> WordParts {
    key.split(separator).map(str::to_string).collect()
}
