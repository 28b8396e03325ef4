// Copyright 2025 the Midstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascade resolution.
//!
//! Given the sorted class list, the current screen class, and a
//! [`CascadeMode`], cascade resolution produces the ordered sequence of
//! classes whose overrides are eligible to apply. The sequence runs from
//! lowest to highest precedence and always ends with the current class,
//! so the closest override wins when layers are merged in order.

use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;

use crate::breakpoint::{ScreenClass, ScreenClasses};

/// Policy governing whether an override on one class applies to its
/// neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CascadeMode {
    /// Only the exact current class applies.
    None,
    /// A class's override applies to itself and every larger class.
    #[default]
    MobileFirst,
    /// A class's override applies to itself and every smaller class.
    DesktopFirst,
}

/// Error returned when the current class is not in the sorted list.
///
/// This indicates a caller bug, typically a mismatch between the source
/// of the current class and the breakpoint configuration. It is never
/// silently defaulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidScreenClassError {
    /// The class name that was not found.
    pub name: String,
}

impl fmt::Display for InvalidScreenClassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "screen class {:?} is not part of the breakpoint configuration",
            self.name
        )
    }
}

impl core::error::Error for InvalidScreenClassError {}

/// The ordered eligible-class sequence for one resolution.
///
/// Entries run first-to-last in application order: earlier classes are
/// overridden by later ones, and the final entry is always the current
/// class. Built by [`ScreenClasses::cascade`].
#[derive(Clone, Debug)]
pub struct CascadePath {
    classes: ScreenClasses,
    /// Sorted-list indices, lowest to highest precedence.
    indices: SmallVec<[u16; 8]>,
}

impl CascadePath {
    /// Returns the number of eligible classes.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the path has no classes.
    ///
    /// A constructed path always contains at least the current class, so
    /// this is `false` in practice.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the current class, which is always applied last.
    #[must_use]
    pub fn current(&self) -> &ScreenClass {
        let index = self.indices[self.indices.len() - 1];
        self.class_at(index)
    }

    /// Returns an iterator over eligible classes in application order.
    pub fn iter(&self) -> impl Iterator<Item = &ScreenClass> + '_ {
        self.indices.iter().map(|&index| self.class_at(index))
    }

    /// Returns an iterator over sorted-list indices in application order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().map(|&index| usize::from(index))
    }

    fn class_at(&self, index: u16) -> &ScreenClass {
        // Indices come from the same ScreenClasses, so they are in range.
        &self.classes.classes()[usize::from(index)]
    }
}

impl ScreenClasses {
    /// Resolves the cascade for `current` under `mode`.
    ///
    /// The result is ordered lowest-to-highest precedence and always ends
    /// with `current`. Same inputs always produce the same path.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidScreenClassError`] if `current` is not one of the
    /// configured classes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use midstory_screen::{CascadeMode, MaxWidth, ScreenClasses};
    ///
    /// let classes = ScreenClasses::builder()
    ///     .class("xs", 500)
    ///     .class("sm", 750)
    ///     .class("md", 1000)
    ///     .class("lg", MaxWidth::Unbounded)
    ///     .build()?;
    ///
    /// let path = classes.cascade("md", CascadeMode::MobileFirst)?;
    /// let names: Vec<_> = path.iter().map(|c| c.name()).collect();
    /// assert_eq!(names, ["xs", "sm", "md"]);
    ///
    /// let path = classes.cascade("sm", CascadeMode::DesktopFirst)?;
    /// let names: Vec<_> = path.iter().map(|c| c.name()).collect();
    /// assert_eq!(names, ["lg", "md", "sm"]);
    /// # Ok::<(), Box<dyn core::error::Error>>(())
    /// ```
    pub fn cascade(
        &self,
        current: &str,
        mode: CascadeMode,
    ) -> Result<CascadePath, InvalidScreenClassError> {
        let Some(index) = self.index_of(current) else {
            return Err(InvalidScreenClassError {
                name: String::from(current),
            });
        };
        #[expect(clippy::cast_possible_truncation, reason = "len is capped at u16::MAX")]
        let (index, len) = (index as u16, self.len() as u16);

        let indices: SmallVec<[u16; 8]> = match mode {
            CascadeMode::None => core::iter::once(index).collect(),
            CascadeMode::MobileFirst => (0..=index).collect(),
            CascadeMode::DesktopFirst => (index..len).rev().collect(),
        };

        Ok(CascadePath {
            classes: self.clone(),
            indices,
        })
    }
}
