// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle notifications emitted by the swiper.
//!
//! Every input entry point on [`VirtualSwiper`](crate::VirtualSwiper) returns
//! the notifications it produced, in emission order. A detached swiper
//! produces none. Per contact:
//!
//! - [`SwipeNotification::BeforeStart`] for every contact start.
//! - [`SwipeNotification::Start`] when the contact passed the start gate and
//!   the swiper is enabled.
//! - [`SwipeNotification::Unlocked`] at most once, when the drag threshold is
//!   crossed.
//! - [`SwipeNotification::End`] on release, only after `Unlocked`. A session
//!   superseded by a new contact start ends without it.
//! - [`SwipeNotification::AfterEnd`] on every release.

use smallvec::SmallVec;

use crate::position::PositionEvent;

/// A swiper lifecycle notification.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SwipeNotification<K> {
    /// A contact started; carries the normalized start event.
    BeforeStart(PositionEvent<K>),
    /// The contact armed a session.
    Start,
    /// The session crossed the drag threshold and began scrolling.
    Unlocked,
    /// A scrolling session was released.
    End,
    /// A contact was released.
    AfterEnd,
}

/// Notifications produced by one entry point call.
pub type Notifications<K> = SmallVec<[SwipeNotification<K>; 2]>;
