// Copyright 2025 the Midstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The plain data value tree.
//!
//! This module provides [`Value`], a tagged union over the shapes a
//! resolvable value can take: scalars (null, booleans, numbers, text),
//! ordered sequences, and keyed mappings.

use alloc::string::String;
use alloc::vec::Vec;

use crate::mapping::Mapping;

/// A plain, possibly nested, data value.
///
/// `Value` is the currency of the merge engine: defaults and per-class
/// overrides are both values, and resolution produces a fresh value of the
/// same shape. There is no identity beyond the data itself.
///
/// # Example
///
/// ```rust
/// use midstory_value::{Mapping, Value};
///
/// let value = Value::Mapping(
///     [
///         ("size", Value::from(14.0)),
///         ("label", Value::from("ok")),
///     ]
///     .into_iter()
///     .collect::<Mapping>(),
/// );
///
/// assert_eq!(value.get("size"), Some(&Value::Number(14.0)));
/// assert_eq!(value.get("missing"), None);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The null scalar.
    #[default]
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// A numeric scalar.
    Number(f64),
    /// A text scalar.
    Text(String),
    /// An ordered sequence of values.
    Sequence(Vec<Value>),
    /// A keyed mapping of values.
    Mapping(Mapping),
}

impl Value {
    /// Returns the kind tag for this value.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::Text(_) => ValueKind::Text,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Mapping(_) => ValueKind::Mapping,
        }
    }

    /// Returns `true` if this value is the null scalar.
    #[must_use]
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if this value is a sequence or a mapping.
    ///
    /// Containers merge structurally; scalars replace. See
    /// [`deep_merge`](crate::deep_merge).
    #[must_use]
    #[inline]
    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// Returns the boolean if this value is a `Bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the number if this value is a `Number`.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text if this value is `Text`.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the elements if this value is a `Sequence`.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the mapping if this value is a `Mapping`.
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Looks up `key` if this value is a mapping.
    ///
    /// Returns `None` for non-mappings and for absent keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|m| m.get(key))
    }

    /// Looks up `index` if this value is a sequence.
    ///
    /// Returns `None` for non-sequences and for out-of-range indices.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_sequence().and_then(|s| s.get(index))
    }
}

/// The variant tag of a [`Value`].
///
/// Merge dispatch is exhaustive over these kinds rather than relying on
/// dynamic type inspection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// The null scalar.
    Null,
    /// A boolean scalar.
    Bool,
    /// A numeric scalar.
    Number,
    /// A text scalar.
    Text,
    /// An ordered sequence.
    Sequence,
    /// A keyed mapping.
    Mapping,
}

impl ValueKind {
    /// Returns `true` for the kinds that merge structurally.
    #[must_use]
    #[inline]
    pub fn is_container(self) -> bool {
        matches!(self, Self::Sequence | Self::Mapping)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::Sequence(values)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(mapping)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}
