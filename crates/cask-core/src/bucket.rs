//! Key/value lookup surfaces.

use std::collections::HashMap;

use crate::value::Value;

/// A container of named configuration values.
///
/// Keys are case-sensitive, non-empty strings. Iteration order is
/// unspecified unless a concrete implementation documents one.
pub trait Bucket {
    /// Returns the value associated with `key`.
    ///
    /// If the key is not defined, the returned value is empty.
    fn get(&self, key: &str) -> Value;

    /// Returns the value associated with `key`, or a string value holding
    /// `default` if the key is not defined.
    fn get_default(&self, key: &str, default: &str) -> Value {
        let value = self.get(key);

        if value.is_empty() {
            return Value::from_string(default);
        }

        value
    }

    /// Calls `visit` for each key/value pair in the bucket.
    ///
    /// Iteration stops early if `visit` returns `false`. Returns `true` if
    /// iteration ran to completion, or `false` if it was short-circuited.
    fn each(&self, visit: &mut dyn FnMut(&str, &Value) -> bool) -> bool;
}

/// The in-memory reference implementation of [`Bucket`].
impl Bucket for HashMap<String, Value> {
    fn get(&self, key: &str) -> Value {
        self.get(key).cloned().unwrap_or_default()
    }

    fn each(&self, visit: &mut dyn FnMut(&str, &Value) -> bool) -> bool {
        for (key, value) in self {
            if !visit(key, value) {
                return false;
            }
        }

        true
    }
}
