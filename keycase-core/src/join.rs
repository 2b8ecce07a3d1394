//! Part joiners: recombine word parts into a single key

use crate::casing::{capitalize_first, lower};

/// Keep the first part, capitalize the first character of the rest, concatenate
pub fn join_camel(parts: &[String]) -> String {
    let mut out = String::new();
    let mut iter = parts.iter();
    if let Some(first) = iter.next() {
        out.push_str(first);
    }
    for part in iter {
        out.push_str(&capitalize_first(part));
    }
    out
}

/// Capitalize the first character of every part, concatenate
pub fn join_pascal(parts: &[String]) -> String {
    parts.iter().map(|part| capitalize_first(part)).collect()
}

/// Lower-case every part, join with `_`
pub fn join_snake(parts: &[String]) -> String {
    join_lower(parts, "_")
}

/// Lower-case every part, join with `-`
pub fn join_kebab(parts: &[String]) -> String {
    join_lower(parts, "-")
}

fn join_lower(parts: &[String], separator: &str) -> String {
    parts
        .iter()
        .map(|part| lower(part))
        .collect::<Vec<_>>()
        .join(separator)
}
