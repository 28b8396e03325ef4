// Copyright 2025 the Midstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive value resolution.
//!
//! This module composes the pieces: a [`Responsive`] bundles a default
//! value with per-class overrides, and [`ResolveCx`] bundles the screen
//! classes with a cascade mode so that resolving for the current class is
//! a single call. Resolution walks the cascade path in order and
//! deep-merges each eligible override onto the accumulated result, so the
//! class closest to the current one wins.
//!
//! Resolution is pure: nothing is cached across calls, the inputs are
//! never mutated, and the same inputs always produce the same value.

use alloc::string::String;
use alloc::vec::Vec;

use midstory_value::{Mapping, Value, deep_merge, merge_layers};

use crate::breakpoint::{ScreenClass, ScreenClasses};
use crate::cascade::{CascadeMode, CascadePath, InvalidScreenClassError};

/// A default value plus per-class overrides.
///
/// Overrides are partial values keyed by screen-class name. A `Responsive`
/// is supplied per resolution call; the engine does not retain it.
///
/// # Example
///
/// ```rust
/// use midstory_screen::Responsive;
/// use midstory_value::Value;
///
/// let responsive = Responsive::builder("default")
///     .set("sm", "small")
///     .set("md", "medium")
///     .build();
///
/// assert_eq!(responsive.default_value(), &Value::from("default"));
/// assert_eq!(responsive.override_for("sm"), Some(&Value::from("small")));
/// assert_eq!(responsive.override_for("lg"), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Responsive {
    default: Value,
    overrides: Mapping,
}

impl Responsive {
    /// Creates a responsive value with no overrides.
    ///
    /// Without overrides, resolution always yields the default.
    #[must_use]
    pub fn new(default: impl Into<Value>) -> Self {
        Self {
            default: default.into(),
            overrides: Mapping::new(),
        }
    }

    /// Creates a builder seeded with the default value.
    #[must_use]
    pub fn builder(default: impl Into<Value>) -> ResponsiveBuilder {
        ResponsiveBuilder {
            default: default.into(),
            overrides: Mapping::new(),
        }
    }

    /// Returns the default value.
    #[must_use]
    #[inline]
    pub fn default_value(&self) -> &Value {
        &self.default
    }

    /// Returns the override set.
    #[must_use]
    #[inline]
    pub fn overrides(&self) -> &Mapping {
        &self.overrides
    }

    /// Returns the override for a class, if one is defined.
    #[must_use]
    pub fn override_for(&self, class: &str) -> Option<&Value> {
        self.overrides.get(class)
    }

    /// Resolves this value along a cascade path.
    ///
    /// Eligible overrides are merged in path order on top of the default;
    /// classes without an override contribute nothing.
    #[must_use]
    pub fn resolve(&self, path: &CascadePath) -> Value {
        merge_layers(
            &self.default,
            path.iter().filter_map(|class| self.override_for(class.name())),
        )
    }

    /// Resolves this value along a cascade path, reporting each step.
    ///
    /// For every class in the path, `trace` observes whether its override
    /// was applied or the class was skipped. The result is identical to
    /// [`resolve`](Self::resolve).
    #[must_use]
    pub fn resolve_with_trace(&self, path: &CascadePath, trace: &mut dyn ResolveTrace) -> Value {
        let mut result = self.default.clone();
        for class in path.iter() {
            match self.override_for(class.name()) {
                Some(over) => {
                    trace.applied(class);
                    result = deep_merge(&result, over);
                }
                None => trace.skipped(class),
            }
        }
        result
    }
}

/// Builder for [`Responsive`] values.
#[derive(Clone, Debug)]
pub struct ResponsiveBuilder {
    default: Value,
    overrides: Mapping,
}

impl ResponsiveBuilder {
    /// Sets the override for a class.
    ///
    /// If the class already had an override, the value is replaced.
    #[must_use]
    pub fn set(mut self, class: impl Into<String>, value: impl Into<Value>) -> Self {
        self.overrides.insert(class, value);
        self
    }

    /// Builds the responsive value.
    #[must_use]
    pub fn build(self) -> Responsive {
        Responsive {
            default: self.default,
            overrides: self.overrides,
        }
    }
}

/// Resolution context bundling screen classes and cascade mode.
///
/// Both are configuration-time constants, so embedders typically create
/// one context and resolve every value through it.
///
/// # Example
///
/// ```rust
/// use midstory_screen::{CascadeMode, MaxWidth, ResolveCx, Responsive, ScreenClasses};
/// use midstory_value::Value;
///
/// let classes = ScreenClasses::builder()
///     .class("xs", 500)
///     .class("sm", 750)
///     .class("md", 1000)
///     .class("lg", MaxWidth::Unbounded)
///     .build()?;
///
/// let cx = ResolveCx::new(classes, CascadeMode::MobileFirst);
///
/// let responsive = Responsive::builder("default")
///     .set("sm", "sm")
///     .set("md", "md")
///     .build();
///
/// // The nearest smaller override wins under mobile-first.
/// assert_eq!(cx.resolve("lg", &responsive)?, Value::from("md"));
/// // No override at or below xs, so the default applies.
/// assert_eq!(cx.resolve("xs", &responsive)?, Value::from("default"));
/// # Ok::<(), Box<dyn core::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct ResolveCx {
    classes: ScreenClasses,
    mode: CascadeMode,
}

impl ResolveCx {
    /// Creates a new resolution context.
    #[must_use]
    pub fn new(classes: ScreenClasses, mode: CascadeMode) -> Self {
        Self { classes, mode }
    }

    /// Returns the screen classes.
    #[must_use]
    #[inline]
    pub fn classes(&self) -> &ScreenClasses {
        &self.classes
    }

    /// Returns the cascade mode.
    #[must_use]
    #[inline]
    pub fn mode(&self) -> CascadeMode {
        self.mode
    }

    /// Resolves a responsive value for the current class.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidScreenClassError`] if `current` is not one of the
    /// configured classes.
    pub fn resolve(
        &self,
        current: &str,
        value: &Responsive,
    ) -> Result<Value, InvalidScreenClassError> {
        let path = self.classes.cascade(current, self.mode)?;
        Ok(value.resolve(&path))
    }

    /// Resolves a responsive value, reporting each cascade step.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidScreenClassError`] if `current` is not one of the
    /// configured classes.
    pub fn resolve_with_trace(
        &self,
        current: &str,
        value: &Responsive,
        trace: &mut dyn ResolveTrace,
    ) -> Result<Value, InvalidScreenClassError> {
        let path = self.classes.cascade(current, self.mode)?;
        Ok(value.resolve_with_trace(&path, trace))
    }
}

/// A callback sink for resolution tracing.
///
/// The core resolution path stores no provenance; embedders that want to
/// answer "why is this value what it is?" pass a trace and observe the
/// cascade as it is applied.
pub trait ResolveTrace {
    /// Called when a class's override is merged into the result.
    fn applied(&mut self, class: &ScreenClass);

    /// Called when an eligible class has no override.
    fn skipped(&mut self, class: &ScreenClass);
}

/// Records the names of applied classes, in application order.
///
/// A minimal [`ResolveTrace`] sink: skipped classes are ignored.
///
/// # Example
///
/// ```rust
/// use midstory_screen::{AppliedRecorder, CascadeMode, MaxWidth, ResolveCx, Responsive, ScreenClasses};
///
/// let classes = ScreenClasses::builder()
///     .class("sm", 750)
///     .class("lg", MaxWidth::Unbounded)
///     .build()?;
/// let cx = ResolveCx::new(classes, CascadeMode::MobileFirst);
/// let responsive = Responsive::builder("default").set("sm", "sm").build();
///
/// let mut recorder = AppliedRecorder::default();
/// let _ = cx.resolve_with_trace("lg", &responsive, &mut recorder)?;
/// let applied: Vec<_> = recorder.applied().collect();
/// assert_eq!(applied, ["sm"]);
/// # Ok::<(), Box<dyn core::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct AppliedRecorder {
    applied: Vec<String>,
}

impl AppliedRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the applied class names in application order.
    pub fn applied(&self) -> impl Iterator<Item = &str> + '_ {
        self.applied.iter().map(String::as_str)
    }

    /// Clears the recorded names for reuse.
    pub fn clear(&mut self) {
        self.applied.clear();
    }
}

impl ResolveTrace for AppliedRecorder {
    fn applied(&mut self, class: &ScreenClass) {
        self.applied.push(String::from(class.name()));
    }

    fn skipped(&mut self, _class: &ScreenClass) {}
}
