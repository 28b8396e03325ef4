// Copyright 2025 the Midstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Midstory Screen: Screen classes, breakpoints, and cascade resolution.
//!
//! This crate turns a breakpoint configuration into responsive value
//! resolution. A *screen class* is a named bucket of viewport widths
//! ("sm", "lg", ...); a value can carry per-class overrides; resolution
//! decides, for the current class and a [`CascadeMode`], which overrides
//! apply and merges them onto the default.
//!
//! The engine is deliberately binding-agnostic: it consumes one fact from
//! the embedder (the name of the current screen class) and produces one
//! fact (the resolved value). Viewport measurement, subscriptions, and
//! re-rendering live outside; any driver model works, from reactive
//! bindings to manual invalidation. Value representation and the merge
//! algorithm come from [`midstory_value`].
//!
//! ## Core Concepts
//!
//! ### Screen Classes
//!
//! [`ScreenClasses`] is the validated configuration: classes sorted
//! ascending by maximum width, the single unbounded class last, each with
//! a derived [`WidthRange`]. The ranges partition all widths, so
//! [`ScreenClasses::class_for_width`] is total.
//!
//! ```rust
//! use midstory_screen::{MaxWidth, ScreenClasses};
//!
//! let classes = ScreenClasses::builder()
//!     .class("xs", 500)
//!     .class("sm", 750)
//!     .class("md", 1000)
//!     .class("lg", MaxWidth::Unbounded)
//!     .build()?;
//!
//! assert_eq!(classes.class_for_width(640).name(), "sm");
//! # Ok::<(), midstory_screen::ConfigurationError>(())
//! ```
//!
//! ### Cascade
//!
//! [`ScreenClasses::cascade`] produces the eligible classes for the
//! current one, ordered lowest-to-highest precedence with the current
//! class last:
//!
//! - [`CascadeMode::None`]: the current class alone;
//! - [`CascadeMode::MobileFirst`]: every class from the smallest up to
//!   the current one;
//! - [`CascadeMode::DesktopFirst`]: every class from the largest down to
//!   the current one.
//!
//! ### Resolution
//!
//! [`ResolveCx`] bundles classes and mode; [`Responsive`] bundles a
//! default value and per-class overrides.
//!
//! ```rust
//! use midstory_screen::{CascadeMode, MaxWidth, ResolveCx, Responsive, ScreenClasses};
//! use midstory_value::Value;
//!
//! let classes = ScreenClasses::builder()
//!     .class("xs", 500)
//!     .class("sm", 750)
//!     .class("md", 1000)
//!     .class("lg", MaxWidth::Unbounded)
//!     .build()?;
//! let cx = ResolveCx::new(classes, CascadeMode::MobileFirst);
//!
//! let columns = Responsive::builder(1).set("sm", 2).set("md", 4).build();
//!
//! assert_eq!(cx.resolve("xs", &columns)?, Value::from(1));
//! assert_eq!(cx.resolve("sm", &columns)?, Value::from(2));
//! assert_eq!(cx.resolve("lg", &columns)?, Value::from(4));
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod breakpoint;
mod cascade;
mod resolve;

pub use breakpoint::{
    ConfigurationError, MaxWidth, ScreenClass, ScreenClasses, ScreenClassesBuilder, WidthRange,
};
pub use cascade::{CascadeMode, CascadePath, InvalidScreenClassError};
pub use resolve::{AppliedRecorder, ResolveCx, ResolveTrace, Responsive, ResponsiveBuilder};
