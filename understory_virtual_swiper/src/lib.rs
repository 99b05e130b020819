// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_virtual_swiper --heading-base-level=0

//! Understory Virtual Swiper: gesture-to-scroll control for virtualized lists.
//!
//! This crate turns raw pointer and touch movement into clamped scrolling of a
//! list viewport. It tells an intentional swipe apart from a tap, optionally
//! snaps to the nearest item boundary on release, and swallows the click that
//! platforms fire after a drag.
//!
//! It deliberately does **not** virtualize, render, or route events. Host
//! frameworks are responsible for:
//!
//! - Implementing [`Viewport`] over their list (offset, index scrolling,
//!   item count, orientation, scrolled-index publication).
//! - Implementing [`ElementTree`] so the start gate can walk from a contact's
//!   target up to the list root.
//! - Registering listeners through [`ListenerHost`] and forwarding each event
//!   to the matching `on_*` method of [`VirtualSwiper`].
//!
//! ## Components
//!
//! - [`position`]: normalize mouse/touch input into a [`PositionEvent`].
//! - [`axis`]: orientation and text direction, read fresh for every sample.
//! - [`gate`]: scrollbar and excluded-class checks for contact start.
//! - [`session`]: the `Idle`/`Armed`/`Locked` session and step arithmetic.
//! - [`click`]: click suppression after a drag.
//! - [`notify`]: lifecycle notifications.
//! - [`headless`]: in-memory viewport, host, and tree for tests and demos.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_virtual_swiper::headless::{HeadlessHost, HeadlessTree, HeadlessViewport};
//! use understory_virtual_swiper::{
//!     ClickEvent, Orientation, PointerInput, SwipeNotification, SwiperOptions, Viewport,
//!     VirtualSwiper,
//! };
//!
//! let mut tree = HeadlessTree::new();
//! let root = tree.insert(None, &[], Size::new(300.0, 100.0));
//!
//! // 100 items, 100 units wide, in a 300 unit wide horizontal viewport.
//! let viewport = HeadlessViewport::new(100, 100.0, Orientation::Horizontal, 300.0);
//! let options = SwiperOptions::default().with_item_extent(Some(100.0));
//! let mut swiper = VirtualSwiper::new(viewport, root, options);
//!
//! let mut host = HeadlessHost::new();
//! swiper.attach(&mut host).unwrap();
//!
//! let at = |x: f64| PointerInput::Mouse {
//!     client: Point::new(x, 50.0),
//!     offset: Point::new(x, 50.0),
//!     target: root,
//!     current_target: root,
//! };
//!
//! swiper.on_pointer_down(&at(200.0), &tree);
//! // Dragging left scrolls forward once the drag threshold is crossed.
//! let events = swiper.on_pointer_move(&at(140.0));
//! assert_eq!(events.as_slice(), &[SwipeNotification::Unlocked]);
//! assert_eq!(swiper.viewport().measure_scroll_offset(), 60.0);
//!
//! // Release snaps forward to the next item.
//! let events = swiper.on_pointer_up();
//! assert_eq!(events.as_slice(), &[SwipeNotification::End, SwipeNotification::AfterEnd]);
//! assert_eq!(swiper.viewport().measure_scroll_offset(), 100.0);
//!
//! // The click that follows the drag is swallowed.
//! let mut click = ClickEvent::default();
//! assert!(swiper.on_click(&mut click));
//!
//! swiper.detach(&mut host).unwrap();
//! assert_eq!(host.listener_count(), 0);
//! ```
//!
//! ## Single contact
//!
//! One contact is tracked at a time. A contact start while a session is live
//! replaces that session: the old one is dropped without
//! [`SwipeNotification::End`], and the new contact is gated and armed as
//! usual. A release the host never delivered therefore cannot leave the
//! swiper stuck.
//!
//! Input fed to a detached swiper is ignored.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod axis;
pub mod click;
pub mod gate;
pub mod headless;
pub mod host;
pub mod notify;
mod options;
pub mod position;
pub mod session;
mod swiper;
pub mod viewport;

pub use axis::{AxisView, Directionality, Orientation, TextDirection};
pub use click::{ClickEvent, DragStartEvent};
pub use gate::{ElementTree, GateRejection, StartGate};
pub use host::{ListenerHost, ListenerId, ListenerKind, ListenerPhase};
pub use notify::{Notifications, SwipeNotification};
pub use options::SwiperOptions;
pub use position::{PointerInput, PositionEvent, TouchPoint};
pub use session::SessionPhase;
pub use swiper::{AttachError, VirtualSwiper};
pub use viewport::{ScrollBehavior, ScrolledIndex, SubscriptionId, Viewport};
