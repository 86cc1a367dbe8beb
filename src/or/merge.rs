//! Deep merge of rendered message mappings.

use serde_json::{map::Entry, Value};

/// Merges two rendered mappings into one.
///
/// - Two objects merge recursively per key; key positions stay first-seen.
/// - Two arrays concatenate, left then right, without deduplication.
/// - Any other pairing becomes the two-element array `[old, new]`.
pub(crate) fn deep_merge(left: Value, right: Value) -> Value {
    match (left, right) {
        (Value::Object(mut left), Value::Object(right)) => {
            for (key, value) in right {
                match left.entry(key) {
                    Entry::Occupied(mut occupied) => {
                        let existing = occupied.get_mut().take();
                        *occupied.get_mut() = deep_merge(existing, value);
                    }
                    Entry::Vacant(vacant) => {
                        vacant.insert(value);
                    }
                }
            }
            Value::Object(left)
        }
        (Value::Array(mut left), Value::Array(right)) => {
            left.extend(right);
            Value::Array(left)
        }
        (left, right) => Value::Array(vec![left, right]),
    }
}
