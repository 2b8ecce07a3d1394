//! Recursive key rewriting over JSON values
//!
//! Only `Value::Object` keys are renamed. Arrays are rebuilt element by
//! element and every other value is a leaf returned unchanged. When two
//! keys of one object map to the same new key, the key enumerated last
//! wins.

use keycase_core::{KeyCaseError, Result, RewriteLimits};
use serde_json::{Map, Value};
use tracing::{debug, trace, trace_span};

/// Rename every object key in `value` with `transform`, at every depth
///
/// The input is left untouched; every array and object in the output is
/// freshly allocated. Recursion is bounded only by the thread's stack, use
/// [`try_transform_keys`] for untrusted input.
pub fn transform_keys<F>(transform: F, value: &Value) -> Value
where
    F: Fn(&str) -> String,
{
    rewrite(&transform, value)
}

fn rewrite<F>(transform: &F, value: &Value) -> Value
where
    F: Fn(&str) -> String,
{
    match value {
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| rewrite(transform, item)).collect())
        }
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, child) in map {
                let new_key = transform(key);
                let new_child = rewrite(transform, child);
                out.insert(new_key, new_child);
            }
            Value::Object(out)
        }
        leaf => leaf.clone(),
    }
}

/// Rename every object key of an owned value, moving leaves instead of cloning
pub fn transform_keys_in_place<F>(transform: F, value: &mut Value)
where
    F: Fn(&str) -> String,
{
    rewrite_in_place(&transform, value);
}

/// Owned form of [`transform_keys_in_place`]
pub fn transform_keys_owned<F>(transform: F, mut value: Value) -> Value
where
    F: Fn(&str) -> String,
{
    rewrite_in_place(&transform, &mut value);
    value
}

fn rewrite_in_place<F>(transform: &F, value: &mut Value)
where
    F: Fn(&str) -> String,
{
    match value {
        Value::Array(items) => {
            for item in items.iter_mut() {
                rewrite_in_place(transform, item);
            }
        }
        Value::Object(map) => {
            let entries = std::mem::take(map);
            for (key, mut child) in entries {
                let new_key = transform(&key);
                rewrite_in_place(transform, &mut child);
                map.insert(new_key, child);
            }
        }
        _ => {}
    }
}

/// Rename every object key in `value`, enforcing `limits`
///
/// Fails with [`KeyCaseError::DepthLimitExceeded`] when containers nest
/// deeper than `limits.max_depth` (a top-level array or object is depth 1)
/// and with [`KeyCaseError::NodeLimitExceeded`] when more than
/// `limits.max_nodes` values are visited. Traversal keeps its pending
/// containers on a heap-allocated stack, so nesting up to
/// [`RewriteLimits::hard_maximums`] does not grow the thread stack.
pub fn try_transform_keys<F>(transform: F, value: &Value, limits: &RewriteLimits) -> Result<Value>
where
    F: Fn(&str) -> String,
{
    limits.validate()?;

    let _span = trace_span!(
        "try_transform_keys",
        max_depth = limits.max_depth,
        max_nodes = limits.max_nodes
    )
    .entered();

    let mut guard = Guard { limits, nodes: 0 };
    let out = guard.rewrite(&transform, value)?;
    trace!(nodes = guard.nodes, "rewrote keys");
    Ok(out)
}

/// A container whose children are still being rewritten
enum Frame<'v> {
    Array {
        items: std::slice::Iter<'v, Value>,
        out: Vec<Value>,
    },
    Object {
        entries: serde_json::map::Iter<'v>,
        out: Map<String, Value>,
        key: String,
    },
}

impl<'v> Frame<'v> {
    fn next_child<F>(&mut self, transform: &F) -> Option<&'v Value>
    where
        F: Fn(&str) -> String,
    {
        match self {
            Frame::Array { items, .. } => items.next(),
            Frame::Object { entries, key, .. } => {
                let (next_key, child) = entries.next()?;
                *key = transform(next_key);
                Some(child)
            }
        }
    }

    fn accept(&mut self, child: Value) {
        match self {
            Frame::Array { out, .. } => out.push(child),
            Frame::Object { out, key, .. } => {
                out.insert(std::mem::take(key), child);
            }
        }
    }

    fn finish(self) -> Value {
        match self {
            Frame::Array { out, .. } => Value::Array(out),
            Frame::Object { out, .. } => Value::Object(out),
        }
    }
}

struct Guard<'a> {
    limits: &'a RewriteLimits,
    nodes: usize,
}

impl Guard<'_> {
    fn rewrite<F>(&mut self, transform: &F, root: &Value) -> Result<Value>
    where
        F: Fn(&str) -> String,
    {
        let mut stack: Vec<Frame<'_>> = Vec::new();
        let mut next = Some(root);
        let mut done: Option<Value> = None;

        loop {
            if let Some(value) = next.take() {
                self.count_node()?;
                match value {
                    Value::Array(items) => {
                        self.enter(stack.len())?;
                        stack.push(Frame::Array {
                            items: items.iter(),
                            out: Vec::with_capacity(items.len()),
                        });
                    }
                    Value::Object(map) => {
                        self.enter(stack.len())?;
                        stack.push(Frame::Object {
                            entries: map.iter(),
                            out: Map::with_capacity(map.len()),
                            key: String::new(),
                        });
                    }
                    leaf => done = Some(leaf.clone()),
                }
            }

            // The root has finished once no container is pending.
            let Some(frame) = stack.last_mut() else {
                return Ok(done.unwrap_or(Value::Null));
            };
            if let Some(child) = done.take() {
                frame.accept(child);
            }
            match frame.next_child(transform) {
                Some(child) => next = Some(child),
                None => done = stack.pop().map(Frame::finish),
            }
        }
    }

    fn count_node(&mut self) -> Result<()> {
        self.nodes += 1;
        if self.nodes > self.limits.max_nodes {
            debug!(max_nodes = self.limits.max_nodes, "node limit exceeded");
            return Err(KeyCaseError::NodeLimitExceeded {
                max_nodes: self.limits.max_nodes,
            });
        }
        Ok(())
    }

    fn enter(&self, open_containers: usize) -> Result<()> {
        let depth = open_containers + 1;
        if depth > self.limits.max_depth {
            debug!(
                depth,
                max_depth = self.limits.max_depth,
                "depth limit exceeded"
            );
            return Err(KeyCaseError::DepthLimitExceeded {
                depth,
                max_depth: self.limits.max_depth,
            });
        }
        Ok(())
    }
}
