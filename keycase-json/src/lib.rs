//! Keycase JSON - Recursive key rewriting for JSON documents
//!
//! This crate applies key transforms from `keycase-core` to every object key
//! of a `serde_json::Value`, at any depth:
//!
//! - Borrowed, owned and in-place rewriters
//! - A guarded rewriter enforcing [`RewriteLimits`] for untrusted input
//! - Whole-document conversions between naming conventions
//! - Typed entry points for `Serialize`/`Deserialize` types
//!
//! ```
//! use keycase_json::{transform_keys, snake_to_camel};
//! use serde_json::json;
//!
//! let out = transform_keys(snake_to_camel, &json!({"zip_code": "2000"}));
//! assert_eq!(out, json!({"zipCode": "2000"}));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod convert;
pub mod rewrite;

// Re-export commonly used types
pub use keycase_core::{
    camel_to_snake, compose, convert_key, join_camel, join_kebab, join_pascal, join_snake,
    snake_to_camel, snake_to_pascal, split_boundary, split_kebab, split_snake, to_camel_case,
    to_pascal_case, with_joiner, with_splitter, Convention, KeyCaseError, Result, RewriteLimits,
    WordParts,
};

// Re-export our own types
pub use convert::{
    transform_from_to, transform_into, transform_object, transform_object_camel_to_snake,
    transform_object_snake_to_camel, transform_object_snake_to_pascal, transform_value,
};
pub use rewrite::{
    transform_keys, transform_keys_in_place, transform_keys_owned, try_transform_keys,
};
