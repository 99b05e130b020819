// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position extraction: normalize mouse and touch input into one record.
//!
//! Hosts translate their platform events into a [`PointerInput`] and hand it
//! to the controller. [`PositionEvent::from_input`] is the only place that
//! looks at the shape of the raw input; everything downstream works on the
//! normalized [`PositionEvent`].
//!
//! Coordinates that are missing (a touch event with no active touch point) or
//! not finite are reported as `None`. Consumers treat `None` as "nothing to
//! do" rather than as a fault.
//!
//! ```
//! use kurbo::Point;
//! use understory_virtual_swiper::position::{PointerInput, PositionEvent, TouchPoint};
//!
//! let touches = [TouchPoint {
//!     client: Point::new(40.0, 12.0),
//!     offset: Point::new(8.0, 12.0),
//! }];
//! let input = PointerInput::Touch { touches: &touches, target: 7_u32, current_target: 1 };
//! let event = PositionEvent::from_input(&input);
//! assert_eq!(event.client, Some(Point::new(40.0, 12.0)));
//!
//! let empty = PointerInput::Touch { touches: &[], target: 7_u32, current_target: 1 };
//! assert_eq!(PositionEvent::from_input(&empty).client, None);
//! ```

use kurbo::Point;

/// One active touch contact as reported by the platform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchPoint {
    /// Position relative to the window/client area.
    pub client: Point,
    /// Position relative to the padding edge of the target element.
    pub offset: Point,
}

/// Raw pointer input, before normalization.
///
/// `K` is the host's element handle. `target` is the innermost element under
/// the contact; `current_target` is the element the listener is registered on
/// (the list root for pointer-down events).
#[derive(Copy, Clone, Debug)]
pub enum PointerInput<'a, K> {
    /// A mouse or pen event.
    Mouse {
        /// Client coordinates.
        client: Point,
        /// Offset coordinates relative to `target`.
        offset: Point,
        /// Innermost element under the pointer.
        target: K,
        /// Element the listener is attached to.
        current_target: K,
    },
    /// A touch event. Only the first touch point is considered.
    Touch {
        /// Active touch points, in platform order.
        touches: &'a [TouchPoint],
        /// Innermost element under the first touch.
        target: K,
        /// Element the listener is attached to.
        current_target: K,
    },
}

/// Normalized position record shared by every input shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionEvent<K> {
    /// Client coordinates, if present and finite.
    pub client: Option<Point>,
    /// Offset coordinates, if present and finite.
    pub offset: Option<Point>,
    /// Innermost element under the contact.
    pub target: K,
    /// Element the listener is attached to.
    pub current_target: K,
}

impl<K: Copy> PositionEvent<K> {
    /// Extract a position record from raw input.
    pub fn from_input(input: &PointerInput<'_, K>) -> Self {
        match *input {
            PointerInput::Mouse {
                client,
                offset,
                target,
                current_target,
            } => Self {
                client: finite(client),
                offset: finite(offset),
                target,
                current_target,
            },
            PointerInput::Touch {
                touches,
                target,
                current_target,
            } => {
                let first = touches.first();
                Self {
                    client: first.and_then(|t| finite(t.client)),
                    offset: first.and_then(|t| finite(t.offset)),
                    target,
                    current_target,
                }
            }
        }
    }
}

fn finite(pt: Point) -> Option<Point> {
    pt.is_finite().then_some(pt)
}
