// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orientation and text direction of the scroll axis.
//!
//! Both are owned by collaborators (the viewport and an optional
//! directionality provider) and may change at any time, so the controller
//! resolves an [`AxisView`] on every sample instead of caching one.

use core::cell::Cell;

use crate::viewport::Viewport;

/// Scroll axis of a list viewport.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Items laid out left to right (or right to left under RTL).
    #[default]
    Horizontal,
    /// Items laid out top to bottom.
    Vertical,
}

/// Text direction reported by a [`Directionality`] provider.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Source of the current text direction.
///
/// Implemented for [`TextDirection`] (a fixed direction) and for
/// `Cell<TextDirection>` so a host can share one `Rc<Cell<_>>` and flip it at
/// runtime.
pub trait Directionality {
    /// Current text direction.
    fn direction(&self) -> TextDirection;
}

impl Directionality for TextDirection {
    fn direction(&self) -> TextDirection {
        *self
    }
}

impl Directionality for Cell<TextDirection> {
    fn direction(&self) -> TextDirection {
        self.get()
    }
}

/// Orientation and direction as observed for a single sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AxisView {
    /// Active scroll axis.
    pub orientation: Orientation,
    /// Active text direction.
    pub direction: TextDirection,
}

impl AxisView {
    /// Read the axis fresh from its collaborators.
    ///
    /// A missing directionality provider means left to right.
    pub fn resolve<V: Viewport + ?Sized>(
        viewport: &V,
        directionality: Option<&dyn Directionality>,
    ) -> Self {
        Self {
            orientation: viewport.orientation(),
            direction: directionality.map_or(TextDirection::Ltr, |d| d.direction()),
        }
    }

    /// Returns `true` when the direction is right to left.
    pub fn is_rtl(&self) -> bool {
        self.direction == TextDirection::Rtl
    }

    /// `-1.0` for right to left, `+1.0` otherwise.
    pub fn direction_sign(&self) -> f64 {
        if self.is_rtl() { -1.0 } else { 1.0 }
    }
}
