//! Deep merging of configuration values
//!
//! Mappings are merged key by key, sequences are combined and made unique and
//! for everything else the right hand side wins.

use serde_yaml::{Mapping, Sequence, Value};

/// Merges `left` into `right` and returns the result
///
/// In case of a conflict the value from `right` is kept. Mappings are merged
/// recursively, sequences are concatenated (`right` first) with duplicates
/// removed. If the two values have different types `right` is returned as is.
///
/// # Examples
/// ```
/// use serde_yaml::Value;
/// use unameit::config::merge;
///
/// let left: Value = serde_yaml::from_str("{a: 10, b: 20}").unwrap();
/// let right: Value = serde_yaml::from_str("{b: 30, c: 40}").unwrap();
/// let expected: Value = serde_yaml::from_str("{b: 30, c: 40, a: 10}").unwrap();
///
/// assert_eq!(merge(left, right), expected);
/// ```
pub fn merge(left: Value, right: Value) -> Value {
    match (left, right) {
        (Value::Mapping(left), Value::Mapping(right)) => {
            Value::Mapping(merge_mappings(left, right))
        }
        (Value::Sequence(left), Value::Sequence(right)) => {
            Value::Sequence(merge_sequences(left, right))
        }
        (_, right) => right,
    }
}

/// Merges two mappings, keeping the keys of `right` first
///
/// Keys only present in `left` are appended after the keys of `right`.
pub fn merge_mappings(left: Mapping, mut right: Mapping) -> Mapping {
    for (key, value) in left {
        match right.get_mut(&key) {
            Some(existing) => {
                let current = std::mem::take(existing);
                *existing = merge(value, current);
            }
            None => {
                right.insert(key, value);
            }
        }
    }
    right
}

/// Concatenates `left` after `right` and drops repeated elements
///
/// The first occurrence of every element is kept. Elements are compared with
/// `Value` equality, so `1` and `1.0` count as different elements.
fn merge_sequences(left: Sequence, right: Sequence) -> Sequence {
    let mut merged = Sequence::with_capacity(left.len() + right.len());
    for item in right.into_iter().chain(left) {
        if !merged.contains(&item) {
            merged.push(item);
        }
    }
    merged
}
