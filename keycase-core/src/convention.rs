//! Named naming conventions

use std::fmt;
use std::str::FromStr;

use crate::error::KeyCaseError;
use crate::join::{join_camel, join_kebab, join_pascal, join_snake};
use crate::split::{split_boundary, split_kebab, split_snake, WordParts};
use crate::transform::compose;

/// Function pointer form of a splitter
pub type SplitFn = fn(&str) -> WordParts;

/// Function pointer form of a joiner
pub type JoinFn = fn(&[String]) -> String;

/// Key naming conventions with a built-in splitter and joiner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    /// `snake_case`
    Snake,
    /// `camelCase`
    Camel,
    /// `PascalCase`
    Pascal,
    /// `kebab-case`
    Kebab,
}

impl Convention {
    /// All conventions
    pub const ALL: [Convention; 4] = [
        Convention::Snake,
        Convention::Camel,
        Convention::Pascal,
        Convention::Kebab,
    ];

    /// Splitter reading keys written in this convention
    pub fn splitter(self) -> SplitFn {
        match self {
            Convention::Snake => split_snake,
            Convention::Camel | Convention::Pascal => split_boundary,
            Convention::Kebab => split_kebab,
        }
    }

    /// Joiner writing keys in this convention
    pub fn joiner(self) -> JoinFn {
        match self {
            Convention::Snake => join_snake,
            Convention::Camel => join_camel,
            Convention::Pascal => join_pascal,
            Convention::Kebab => join_kebab,
        }
    }

    /// Key transform from this convention into `target`
    pub fn to(self, target: Convention) -> impl Fn(&str) -> String + Clone {
        compose(self.splitter(), target.joiner())
    }

    /// Lowercase name of the convention
    pub fn as_str(self) -> &'static str {
        match self {
            Convention::Snake => "snake",
            Convention::Camel => "camel",
            Convention::Pascal => "pascal",
            Convention::Kebab => "kebab",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Convention {
    type Err = KeyCaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "snake" | "snake_case" => Ok(Convention::Snake),
            "camel" | "camelcase" => Ok(Convention::Camel),
            "pascal" | "pascalcase" => Ok(Convention::Pascal),
            "kebab" | "kebab-case" => Ok(Convention::Kebab),
            other => Err(KeyCaseError::InvalidArgument(format!(
                "unknown naming convention '{}'; expected one of snake, camel, pascal, kebab",
                other
            ))),
        }
    }
}

/// Convert a single key between conventions
pub fn convert_key(from: Convention, to: Convention, key: &str) -> String {
    (to.joiner())(&(from.splitter())(key))
}
