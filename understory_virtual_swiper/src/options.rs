// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use hashbrown::HashSet;

/// Configuration for a [`VirtualSwiper`](crate::VirtualSwiper).
///
/// All distances are in the viewport's offset units (typically logical
/// pixels). The defaults reproduce a plain swiper: no excluded regions, snap
/// on release, and click suppression after a real drag.
///
/// ```
/// use understory_virtual_swiper::SwiperOptions;
///
/// let options = SwiperOptions::default()
///     .with_item_extent(Some(120.0))
///     .with_threshold(40.0)
///     .with_excluded_class("no-swipe");
/// assert_eq!(options.minimum_drag_px_to_swipe, 10.0);
/// assert!(options.excluded_class_names.contains("no-swipe"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SwiperOptions {
    /// Nominal item size along the scroll axis. When `None`, the viewport's
    /// rendered content extent is used instead.
    pub item_extent: Option<f64>,
    /// Total displacement that counts as a real movement, for click
    /// suppression and for snapping forward on release.
    pub threshold: f64,
    /// Displacement a contact must reach before it may move the viewport.
    pub minimum_drag_px_to_swipe: f64,
    /// Snap to an item boundary on release.
    pub finalize: bool,
    /// Swallow the click that follows a drag.
    pub prevent_clicks: bool,
    /// The enable switch. [`VirtualSwiper::set_enabled`](crate::VirtualSwiper::set_enabled)
    /// writes here.
    pub enabled: bool,
    /// Width of the trailing-edge strip treated as a scrollbar.
    pub scrollbar_exclusion_width: f64,
    /// Class names whose elements never start a swipe.
    pub excluded_class_names: HashSet<String>,
}

impl Default for SwiperOptions {
    fn default() -> Self {
        Self {
            item_extent: None,
            threshold: 30.0,
            minimum_drag_px_to_swipe: 10.0,
            finalize: true,
            prevent_clicks: true,
            enabled: true,
            scrollbar_exclusion_width: 24.0,
            excluded_class_names: HashSet::new(),
        }
    }
}

impl SwiperOptions {
    /// Sets [`SwiperOptions::item_extent`].
    #[must_use]
    pub fn with_item_extent(mut self, item_extent: Option<f64>) -> Self {
        self.item_extent = item_extent;
        self
    }

    /// Sets [`SwiperOptions::threshold`].
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets [`SwiperOptions::minimum_drag_px_to_swipe`].
    #[must_use]
    pub fn with_minimum_drag_px_to_swipe(mut self, px: f64) -> Self {
        self.minimum_drag_px_to_swipe = px;
        self
    }

    /// Sets [`SwiperOptions::finalize`].
    #[must_use]
    pub fn with_finalize(mut self, finalize: bool) -> Self {
        self.finalize = finalize;
        self
    }

    /// Sets [`SwiperOptions::prevent_clicks`].
    #[must_use]
    pub fn with_prevent_clicks(mut self, prevent_clicks: bool) -> Self {
        self.prevent_clicks = prevent_clicks;
        self
    }

    /// Sets [`SwiperOptions::enabled`].
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets [`SwiperOptions::scrollbar_exclusion_width`].
    #[must_use]
    pub fn with_scrollbar_exclusion_width(mut self, width: f64) -> Self {
        self.scrollbar_exclusion_width = width;
        self
    }

    /// Adds one class name to [`SwiperOptions::excluded_class_names`].
    #[must_use]
    pub fn with_excluded_class(mut self, class: impl Into<String>) -> Self {
        self.excluded_class_names.insert(class.into());
        self
    }
}
