// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture session state and the per-axis step arithmetic.
//!
//! A session moves through three phases:
//!
//! - [`SessionPhase::Idle`]: no contact is being tracked.
//! - [`SessionPhase::Armed`]: a contact is down but has not yet moved far
//!   enough to scroll.
//! - [`SessionPhase::Locked`]: the contact crossed the drag threshold and is
//!   driving the scroll offset.
//!
//! Tracking data only exists inside the armed and locked variants, so an idle
//! session cannot be asked for positions or deltas.
//!
//! The step functions are pure: they turn the last accepted position, a new
//! position, and the current offset into a candidate offset plus the size of
//! the step. The controller decides whether to apply the candidate.
//!
//! ```
//! use kurbo::Point;
//! use understory_virtual_swiper::axis::{AxisView, Orientation, TextDirection};
//! use understory_virtual_swiper::session::{Step, horizontal_step};
//!
//! let ltr = AxisView { orientation: Orientation::Horizontal, direction: TextDirection::Ltr };
//! // Dragging right by 12 moves the content back by 12.
//! let step = horizontal_step(Point::new(100.0, 0.0), Point::new(112.0, 0.0), 200.0, ltr);
//! assert_eq!(step, Step { candidate: 188.0, magnitude: 12.0 });
//! ```

use kurbo::Point;

use crate::axis::{AxisView, Orientation};

/// Positions tracked for one live contact.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tracking {
    /// Where the contact started. Never changes during the session.
    pub anchor: Point,
    /// Last position whose step was applied to the viewport.
    pub last: Point,
    /// Position recorded at contact start and compared against `last` on
    /// release. Never updated during movement.
    pub prior: Point,
    /// Magnitude of the most recently evaluated step.
    pub step_delta: f64,
}

impl Tracking {
    /// Start tracking a contact at `pos`.
    pub fn new(pos: Point) -> Self {
        Self {
            anchor: pos,
            last: pos,
            prior: pos,
            step_delta: 0.0,
        }
    }
}

/// Phase of the gesture session.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum SessionPhase {
    /// No contact.
    #[default]
    Idle,
    /// Contact down, below the drag threshold.
    Armed(Tracking),
    /// Contact is scrolling the viewport.
    Locked(Tracking),
}

impl SessionPhase {
    /// Returns `true` unless idle.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Returns `true` once the drag threshold was crossed.
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked(_))
    }

    /// Tracking data for an armed or locked session.
    pub fn tracking(&self) -> Option<&Tracking> {
        match self {
            Self::Idle => None,
            Self::Armed(t) | Self::Locked(t) => Some(t),
        }
    }

    /// Mutable tracking data for an armed or locked session.
    pub fn tracking_mut(&mut self) -> Option<&mut Tracking> {
        match self {
            Self::Idle => None,
            Self::Armed(t) | Self::Locked(t) => Some(t),
        }
    }
}

/// Result of evaluating one movement sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    /// Offset the viewport would scroll to if the sample is accepted.
    pub candidate: f64,
    /// Size of the step, compared against the drag threshold.
    pub magnitude: f64,
}

/// Step along the horizontal axis.
///
/// The delta is `last.x - pos.x`, negated under right to left.
pub fn horizontal_step(last: Point, pos: Point, offset: f64, axis: AxisView) -> Step {
    let delta = (last.x - pos.x) * axis.direction_sign();
    Step {
        candidate: offset + delta,
        magnitude: delta.abs(),
    }
}

/// Step along the vertical axis.
///
/// Text direction never applies here.
pub fn vertical_step(last: Point, pos: Point, offset: f64) -> Step {
    let delta = pos.y - last.y;
    Step {
        candidate: offset - delta,
        magnitude: delta.abs(),
    }
}

/// Step along whichever axis `axis` selects.
pub fn step(last: Point, pos: Point, offset: f64, axis: AxisView) -> Step {
    match axis.orientation {
        Orientation::Horizontal => horizontal_step(last, pos, offset, axis),
        Orientation::Vertical => vertical_step(last, pos, offset),
    }
}

/// Release-time displacement from `prior` to `last` along the active axis.
///
/// Positive values mean forward motion. Right to left inverts the horizontal
/// axis only.
pub fn snap_displacement(tracking: &Tracking, axis: AxisView) -> f64 {
    match axis.orientation {
        Orientation::Horizontal => (tracking.prior.x - tracking.last.x) * axis.direction_sign(),
        Orientation::Vertical => tracking.prior.y - tracking.last.y,
    }
}
