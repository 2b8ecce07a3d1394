//! Single-word casing helpers used by the part joiners

/// Upper-case the first character of `word`, leaving the rest unchanged
///
/// An empty word stays empty. Characters whose upper-case form is longer
/// than one character (such as `ß`) expand in place.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case every character of `word`
pub fn lower(word: &str) -> String {
    word.to_lowercase()
}
