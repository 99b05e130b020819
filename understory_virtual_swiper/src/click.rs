// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click suppression after a drag.
//!
//! Platforms fire a click after a press/release pair even when the pointer
//! travelled between the two. [`ClickGuard`] remembers where the last session
//! started and where its last applied step ended, and swallows the trailing
//! click if either axis moved by at least the threshold.
//!
//! The host registers the swiper's click listener in the capture phase on the
//! list root, so suppression happens before any item handler runs.

use kurbo::Point;

use crate::session::Tracking;

/// Click event flags the guard may set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickEvent {
    /// Stop propagation to further elements.
    pub propagation_stopped: bool,
    /// Stop remaining listeners on the current element.
    pub immediate_propagation_stopped: bool,
    /// Skip the platform's default action.
    pub default_prevented: bool,
}

impl ClickEvent {
    /// Returns `true` if nothing downstream should observe the click.
    pub fn is_suppressed(&self) -> bool {
        self.propagation_stopped && self.immediate_propagation_stopped && self.default_prevented
    }

    fn suppress(&mut self) {
        self.propagation_stopped = true;
        self.immediate_propagation_stopped = true;
        self.default_prevented = true;
    }
}

/// Native drag start event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DragStartEvent {
    /// Skip the platform's default action.
    pub default_prevented: bool,
}

/// Remembers the last completed session for click suppression.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ClickGuard {
    record: Option<(Point, Point)>,
}

impl ClickGuard {
    /// Record the finished session's start and last applied positions.
    pub fn record(&mut self, tracking: &Tracking) {
        self.record = Some((tracking.prior, tracking.last));
    }

    /// Forget any recorded session.
    pub fn clear(&mut self) {
        self.record = None;
    }

    /// Returns `true` if the recorded session moved at least `threshold`
    /// along either axis.
    pub fn changed(&self, threshold: f64) -> bool {
        if !threshold.is_finite() {
            return false;
        }
        self.record.is_some_and(|(prior, last)| {
            (prior.x - last.x).abs() >= threshold || (prior.y - last.y).abs() >= threshold
        })
    }

    /// Suppress `event` if the recorded session moved and suppression is on.
    ///
    /// Returns `true` if the click was suppressed.
    pub fn on_click(&self, event: &mut ClickEvent, threshold: f64, prevent_clicks: bool) -> bool {
        if prevent_clicks && self.changed(threshold) {
            event.suppress();
            true
        } else {
            false
        }
    }
}
