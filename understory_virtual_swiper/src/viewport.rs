// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport collaborator the controller scrolls.
//!
//! The controller never virtualizes items itself. It reads and writes the
//! scroll offset, asks for index-based scrolling on release, and follows the
//! first visible index through a [`ScrolledIndex`] subscription.

use alloc::rc::Rc;
use core::cell::Cell;

use crate::axis::Orientation;

/// How an index-based scroll should be animated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollBehavior {
    /// Animate towards the target.
    #[default]
    Smooth,
    /// Jump to the target.
    Instant,
}

/// Handle returned by [`Viewport::subscribe_scrolled_index`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Shared cell receiving the viewport's scrolled-index changes.
///
/// Clones share the same cell: the viewport keeps one clone and writes to it,
/// the controller keeps another and reads from it.
#[derive(Clone, Debug, Default)]
pub struct ScrolledIndex(Rc<Cell<usize>>);

impl ScrolledIndex {
    /// Creates a cell starting at index `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last published index.
    pub fn get(&self) -> usize {
        self.0.get()
    }

    /// Publish a new index.
    pub fn set(&self, index: usize) {
        self.0.set(index);
    }

    /// Returns `true` if both handles share one cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Scrollable list viewport.
///
/// Offsets are measured along [`Viewport::orientation`] from the start of the
/// content. Implementations own clamping and any scroll animation;
/// [`Viewport::scroll_to_index`] is fire-and-forget.
pub trait Viewport {
    /// Current scroll offset.
    fn measure_scroll_offset(&self) -> f64;

    /// Set the scroll offset.
    fn scroll_to_offset(&mut self, offset: f64);

    /// Request scrolling so that `index` becomes the first visible item.
    fn scroll_to_index(&mut self, index: usize, behavior: ScrollBehavior);

    /// Number of items in the list.
    fn data_length(&self) -> usize;

    /// Scroll axis.
    fn orientation(&self) -> Orientation;

    /// Measured extent of the rendered content, if the viewport knows it.
    ///
    /// Used as the item size when none is configured.
    fn rendered_content_extent(&self) -> Option<f64>;

    /// Start publishing first-visible-index changes into `sink`.
    fn subscribe_scrolled_index(&mut self, sink: ScrolledIndex) -> SubscriptionId;

    /// Stop publishing into the sink registered under `id`.
    fn unsubscribe_scrolled_index(&mut self, id: SubscriptionId);
}

/// Total scrollable distance for `viewport`.
///
/// With items present this is `len * size`, where `size` is `item_extent`, or
/// the rendered content extent, or `1.0`, whichever is first usable (finite
/// and positive). An empty list yields the fallback size itself.
pub fn scroll_extent<V: Viewport + ?Sized>(viewport: &V, item_extent: Option<f64>) -> f64 {
    let rendered = viewport.rendered_content_extent().filter(|e| usable(*e));
    let fallback = rendered.unwrap_or(1.0);
    let len = viewport.data_length();
    if len == 0 {
        return fallback;
    }
    let size = item_extent.filter(|e| usable(*e)).unwrap_or(fallback);
    len as f64 * size
}

fn usable(extent: f64) -> bool {
    extent.is_finite() && extent > 0.0
}
