//! Keycase Core - Key naming primitives
//!
//! This crate provides the building blocks for renaming keys between naming
//! conventions, with no I/O dependencies. It includes:
//!
//! - Word splitters (snake, kebab, upper-case boundary)
//! - Part joiners (camel, pascal, snake, kebab)
//! - Key transform composition, including staged partial application
//! - Named conventions and single-key presets
//! - Error types
//! - Rewrite limits
//!
//! Recursive rewriting of whole documents lives in `keycase-json`.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod casing;
pub mod convention;
pub mod error;
pub mod join;
pub mod limits;
pub mod split;
pub mod transform;

// Re-export commonly used types
pub use convention::{convert_key, Convention, JoinFn, SplitFn};
pub use error::{KeyCaseError, Result};
pub use join::{join_camel, join_kebab, join_pascal, join_snake};
pub use limits::RewriteLimits;
pub use split::{split_boundary, split_kebab, split_snake, WordParts};
pub use transform::{
    camel_to_snake, compose, snake_to_camel, snake_to_pascal, to_camel_case, to_pascal_case,
    with_joiner, with_splitter, JoinStage, SplitStage,
};
