//! Whole-document conversions between naming conventions

use keycase_core::{
    camel_to_snake, compose, snake_to_camel, snake_to_pascal, Convention, KeyCaseError, Result,
    WordParts,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::rewrite::{transform_keys, transform_keys_in_place, transform_keys_owned};

/// Rewrite `value` with the transform composed from `split` and `join`
pub fn transform_from_to<S, J>(split: S, join: J, value: &Value) -> Value
where
    S: Fn(&str) -> WordParts + Clone,
    J: Fn(&[String]) -> String + Clone,
{
    transform_keys(compose(split, join), value)
}

/// Rewrite every key of `value` from convention `from` to convention `to`
pub fn transform_object(from: Convention, to: Convention, value: &Value) -> Value {
    transform_keys(from.to(to), value)
}

/// `snake_case` keys to `camelCase` at every depth
pub fn transform_object_snake_to_camel(value: &Value) -> Value {
    transform_keys(snake_to_camel, value)
}

/// `snake_case` keys to `PascalCase` at every depth
pub fn transform_object_snake_to_pascal(value: &Value) -> Value {
    transform_keys(snake_to_pascal, value)
}

/// `camelCase` keys to `snake_case` at every depth
pub fn transform_object_camel_to_snake(value: &Value) -> Value {
    transform_keys(camel_to_snake, value)
}

/// Serialize `value` to JSON and rename its keys
///
/// Maps whose keys do not serialize as strings fail with
/// [`KeyCaseError::InvalidArgument`].
pub fn transform_value<T, F>(transform: F, value: &T) -> Result<Value>
where
    T: Serialize + ?Sized,
    F: Fn(&str) -> String,
{
    let mut json = serde_json::to_value(value).map_err(classify_serialize_error)?;
    transform_keys_in_place(transform, &mut json);
    Ok(json)
}

/// Rename the keys of `value`, then deserialize the result into `T`
pub fn transform_into<T, F>(transform: F, value: Value) -> Result<T>
where
    T: DeserializeOwned,
    F: Fn(&str) -> String,
{
    let renamed = transform_keys_owned(transform, value);
    serde_json::from_value(renamed).map_err(|e| {
        debug!(error = %e, "renamed value does not match target type");
        KeyCaseError::Json(e)
    })
}

fn classify_serialize_error(err: serde_json::Error) -> KeyCaseError {
    let message = err.to_string();
    if message == "key must be a string" {
        KeyCaseError::InvalidArgument(message)
    } else {
        KeyCaseError::Json(err)
    }
}
