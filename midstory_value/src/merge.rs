// Copyright 2025 the Midstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic deep merge of value trees.
//!
//! Overrides are partial values layered on top of a default. Merging is a
//! pure function over its inputs: neither side is mutated, and the result
//! shares no mutable structure with either.
//!
//! The rules, dispatched exhaustively on the variant pair:
//!
//! - mapping over mapping: the result has the union of keys; keys present
//!   on both sides recurse, keys present on one side are taken as-is;
//! - sequence over sequence: positional merge by index; indices present on
//!   both sides recurse, the tail of the longer side is kept unchanged, so
//!   the result length is `max(len(base), len(override))`;
//! - everything else: the override replaces the base. This covers scalar
//!   overrides (including null) and the case where the two sides disagree
//!   in kind, such as a mapping overridden by a number.
//!
//! The recursion makes the per-key and per-index behavior fall out of the
//! same three rules: two nested containers of the same kind merge, any
//! other pairing replaces.

use alloc::vec::Vec;

use crate::mapping::Mapping;
use crate::value::Value;

/// Deep-merges `over` on top of `base`, returning a fresh value.
///
/// # Example
///
/// ```rust
/// use midstory_value::{deep_merge, Value};
///
/// let base: Value = [1.0, 2.0, 3.0, 4.0].map(Value::from).into_iter().collect();
/// let over: Value = [2.0, 4.0, 6.0].map(Value::from).into_iter().collect();
///
/// let merged = deep_merge(&base, &over);
/// let expected: Value = [2.0, 4.0, 6.0, 4.0].map(Value::from).into_iter().collect();
/// assert_eq!(merged, expected);
/// ```
#[must_use]
pub fn deep_merge(base: &Value, over: &Value) -> Value {
    match (base, over) {
        (Value::Mapping(base), Value::Mapping(over)) => {
            Value::Mapping(merge_mappings(base, over))
        }
        (Value::Sequence(base), Value::Sequence(over)) => {
            Value::Sequence(merge_sequences(base, over))
        }
        (_, over) => over.clone(),
    }
}

/// Folds an ordered list of override layers onto a default value.
///
/// Layers are applied first to last, so later layers win where they
/// collide with earlier ones. An empty layer list yields a clone of the
/// default.
///
/// # Example
///
/// ```rust
/// use midstory_value::{merge_layers, Value};
///
/// let default = Value::from("default");
/// let layers = [Value::from("sm"), Value::from("md")];
///
/// assert_eq!(merge_layers(&default, &layers), Value::from("md"));
/// assert_eq!(merge_layers(&default, []), default);
/// ```
#[must_use]
pub fn merge_layers<'a, I>(default: &Value, layers: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    layers
        .into_iter()
        .fold(default.clone(), |acc, layer| deep_merge(&acc, layer))
}

/// Key-union merge of two mappings.
///
/// Both entry lists are sorted by key; the union is a single merge-join
/// pass.
fn merge_mappings(base: &Mapping, over: &Mapping) -> Mapping {
    let base = base.entries();
    let over = over.entries();
    let mut merged = Vec::with_capacity(base.len().max(over.len()));

    let (mut i, mut j) = (0, 0);
    while i < base.len() && j < over.len() {
        let (base_key, base_value) = &base[i];
        let (over_key, over_value) = &over[j];
        match base_key.cmp(over_key) {
            core::cmp::Ordering::Less => {
                merged.push((base_key.clone(), base_value.clone()));
                i += 1;
            }
            core::cmp::Ordering::Greater => {
                merged.push((over_key.clone(), over_value.clone()));
                j += 1;
            }
            core::cmp::Ordering::Equal => {
                merged.push((base_key.clone(), deep_merge(base_value, over_value)));
                i += 1;
                j += 1;
            }
        }
    }
    // At most one of these tails is non-empty.
    merged.extend(base[i..].iter().cloned());
    merged.extend(over[j..].iter().cloned());

    Mapping::from_sorted_entries(merged)
}

/// Positional merge of two sequences.
fn merge_sequences(base: &[Value], over: &[Value]) -> Vec<Value> {
    let common = base.len().min(over.len());
    let mut merged = Vec::with_capacity(base.len().max(over.len()));

    for (base_value, over_value) in base[..common].iter().zip(&over[..common]) {
        merged.push(deep_merge(base_value, over_value));
    }
    // At most one of these tails is non-empty.
    merged.extend(base[common..].iter().cloned());
    merged.extend(over[common..].iter().cloned());

    merged
}
