// Copyright 2025 the Midstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Midstory Value: Plain data values with deterministic deep merge.
//!
//! This crate provides the value model for responsive resolution: a
//! [`Value`] is a scalar (null, boolean, number, text), an ordered
//! sequence, or a keyed [`Mapping`], nested to any depth. On top of it,
//! [`deep_merge`] and [`merge_layers`] combine partial override values
//! with a default, deterministically and without mutating their inputs.
//!
//! Screen-class configuration and cascade resolution are provided by
//! `midstory_screen`; this crate knows nothing about screens or widths.
//!
//! ## Merge Rules
//!
//! | base \ override | scalar | sequence | mapping |
//! |-----------------|--------|----------|---------|
//! | **scalar**      | replace | replace | replace |
//! | **sequence**    | replace | positional merge | replace |
//! | **mapping**     | replace | replace | key union, recurse |
//!
//! Sequences merge positionally: index `i` of the override merges onto
//! index `i` of the base, and the tail of the longer side is preserved.
//!
//! ## Quick Start
//!
//! ```rust
//! use midstory_value::{deep_merge, Mapping, Value};
//!
//! let base = Value::Mapping(
//!     [
//!         ("size", Value::from(12.0)),
//!         ("label", Value::from("base")),
//!     ]
//!     .into_iter()
//!     .collect::<Mapping>(),
//! );
//! let over = Value::Mapping(
//!     [("size", Value::from(16.0))].into_iter().collect::<Mapping>(),
//! );
//!
//! let merged = deep_merge(&base, &over);
//! assert_eq!(merged.get("size"), Some(&Value::Number(16.0)));
//! assert_eq!(merged.get("label"), Some(&Value::from("base")));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod mapping;
mod merge;
mod value;

pub use mapping::Mapping;
pub use merge::{deep_merge, merge_layers};
pub use value::{Value, ValueKind};
