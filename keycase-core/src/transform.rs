//! Key transform composition
//!
//! A key transform is any `Fn(&str) -> String`. The helpers here build one
//! from a splitter and a joiner, either in one call ([`compose`]) or in two
//! stages when only one half is known up front ([`with_splitter`],
//! [`with_joiner`]).

use crate::join::{join_camel, join_pascal, join_snake};
use crate::split::{split_boundary, split_snake, WordParts};

/// Build a key transform computing `join(split(key))`
pub fn compose<S, J>(split: S, join: J) -> impl Fn(&str) -> String + Clone
where
    S: Fn(&str) -> WordParts + Clone,
    J: Fn(&[String]) -> String + Clone,
{
    move |key: &str| join(split(key).as_slice())
}

/// Splitter fixed ahead of its joiner
#[derive(Debug, Clone, Copy)]
pub struct SplitStage<S> {
    split: S,
}

/// Fix the splitter now and supply the joiner later
pub fn with_splitter<S>(split: S) -> SplitStage<S>
where
    S: Fn(&str) -> WordParts + Clone,
{
    SplitStage { split }
}

impl<S> SplitStage<S>
where
    S: Fn(&str) -> WordParts + Clone,
{
    /// Complete the transform with `join`
    pub fn join_with<J>(&self, join: J) -> impl Fn(&str) -> String + Clone
    where
        J: Fn(&[String]) -> String + Clone,
    {
        compose(self.split.clone(), join)
    }

    /// Split a single key with the fixed splitter
    pub fn split(&self, key: &str) -> WordParts {
        (self.split)(key)
    }
}

/// Joiner fixed ahead of its splitter
#[derive(Debug, Clone, Copy)]
pub struct JoinStage<J> {
    join: J,
}

/// Fix the joiner now and supply the splitter later
pub fn with_joiner<J>(join: J) -> JoinStage<J>
where
    J: Fn(&[String]) -> String + Clone,
{
    JoinStage { join }
}

impl<J> JoinStage<J>
where
    J: Fn(&[String]) -> String + Clone,
{
    /// Complete the transform with `split`
    pub fn split_with<S>(&self, split: S) -> impl Fn(&str) -> String + Clone
    where
        S: Fn(&str) -> WordParts + Clone,
    {
        compose(split, self.join.clone())
    }

    /// Join already-split parts with the fixed joiner
    pub fn join(&self, parts: &[String]) -> String {
        (self.join)(parts)
    }
}

/// Convert `key` to camelCase after splitting it with `split`
pub fn to_camel_case<S>(split: S, key: &str) -> String
where
    S: Fn(&str) -> WordParts,
{
    join_camel(&split(key))
}

/// Convert `key` to PascalCase after splitting it with `split`
pub fn to_pascal_case<S>(split: S, key: &str) -> String
where
    S: Fn(&str) -> WordParts,
{
    join_pascal(&split(key))
}

/// `country_code` → `countryCode`
pub fn snake_to_camel(key: &str) -> String {
    to_camel_case(split_snake, key)
}

/// `zip_code` → `ZipCode`
pub fn snake_to_pascal(key: &str) -> String {
    to_pascal_case(split_snake, key)
}

/// `countryCode` → `country_code`
pub fn camel_to_snake(key: &str) -> String {
    join_snake(&split_boundary(key))
}
