// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless collaborators for tests, demos, and non-DOM hosts.
//!
//! - [`HeadlessViewport`]: a fixed-extent list viewport with offset clamping
//!   and scrolled-index publication.
//! - [`HeadlessHost`]: a [`ListenerHost`] that only records registrations.
//! - [`HeadlessTree`]: an [`ElementTree`] built from parent links, class
//!   names, and client sizes.
//!
//! These carry just enough behavior to drive a
//! [`VirtualSwiper`](crate::VirtualSwiper) end to end without a renderer.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Size;

use crate::axis::Orientation;
use crate::gate::ElementTree;
use crate::host::{ListenerHost, ListenerId, ListenerKind, ListenerPhase};
use crate::viewport::{ScrollBehavior, ScrolledIndex, SubscriptionId, Viewport};

/// An index-based scroll request received by a [`HeadlessViewport`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Requested first visible index, before clamping.
    pub index: usize,
    /// Requested animation.
    pub behavior: ScrollBehavior,
}

/// Fixed-extent list viewport.
///
/// All items share `item_extent`. The scroll offset is clamped to
/// `0..=max_scroll_offset()`, and the first visible index is published to
/// every subscriber whenever it changes. Index requests are recorded and
/// applied immediately; animation is left to real hosts.
#[derive(Debug)]
pub struct HeadlessViewport {
    len: usize,
    item_extent: f64,
    orientation: Orientation,
    view_extent: f64,
    offset: f64,
    rendered_extent: Option<f64>,
    published_index: usize,
    subscribers: Vec<(SubscriptionId, ScrolledIndex)>,
    next_subscription: u64,
    requests: Vec<ScrollRequest>,
}

impl HeadlessViewport {
    /// Creates a viewport over `len` items of `item_extent` each, showing
    /// `view_extent` units along `orientation`.
    ///
    /// The rendered content extent reported to the controller starts out as
    /// `item_extent`.
    pub fn new(len: usize, item_extent: f64, orientation: Orientation, view_extent: f64) -> Self {
        Self {
            len,
            item_extent,
            orientation,
            view_extent,
            offset: 0.0,
            rendered_extent: Some(item_extent),
            published_index: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
            requests: Vec::new(),
        }
    }

    /// Total content extent.
    pub fn content_extent(&self) -> f64 {
        self.len as f64 * self.item_extent
    }

    /// Largest offset that still fills the view.
    pub fn max_scroll_offset(&self) -> f64 {
        (self.content_extent() - self.view_extent).max(0.0)
    }

    /// Index of the first (partially) visible item.
    pub fn first_visible_index(&self) -> usize {
        if self.len == 0 || self.item_extent.is_nan() || self.item_extent <= 0.0 {
            return 0;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "offset is clamped non-negative; result is clamped to the item range"
        )]
        let index = (self.offset / self.item_extent) as usize;
        index.min(self.len - 1)
    }

    /// Set the scroll axis.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Change the item count, re-clamping the offset.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.set_offset_clamped(self.offset);
    }

    /// Override the rendered content extent reported to the controller.
    pub fn set_rendered_content_extent(&mut self, extent: Option<f64>) {
        self.rendered_extent = extent;
    }

    /// Index requests received so far, oldest first.
    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.requests
    }

    /// Number of live scrolled-index subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn set_offset_clamped(&mut self, offset: f64) {
        if !offset.is_finite() {
            return;
        }
        self.offset = offset.clamp(0.0, self.max_scroll_offset());
        let index = self.first_visible_index();
        if index != self.published_index {
            self.published_index = index;
            for (_, sink) in &self.subscribers {
                sink.set(index);
            }
        }
    }
}

impl Viewport for HeadlessViewport {
    fn measure_scroll_offset(&self) -> f64 {
        self.offset
    }

    fn scroll_to_offset(&mut self, offset: f64) {
        self.set_offset_clamped(offset);
    }

    fn scroll_to_index(&mut self, index: usize, behavior: ScrollBehavior) {
        self.requests.push(ScrollRequest { index, behavior });
        let index = index.min(self.len.saturating_sub(1));
        self.set_offset_clamped(index as f64 * self.item_extent);
    }

    fn data_length(&self) -> usize {
        self.len
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn rendered_content_extent(&self) -> Option<f64> {
        self.rendered_extent
    }

    fn subscribe_scrolled_index(&mut self, sink: ScrolledIndex) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        sink.set(self.published_index);
        self.subscribers.push((id, sink));
        id
    }

    fn unsubscribe_scrolled_index(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub, _)| *sub != id);
    }
}

/// Listener host that records registrations.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    listeners: Vec<(ListenerId, ListenerKind, ListenerPhase)>,
    next_id: u64,
}

impl HeadlessHost {
    /// Creates a host with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live registrations.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if a listener for `kind` is registered in `phase`.
    pub fn has_listener(&self, kind: ListenerKind, phase: ListenerPhase) -> bool {
        self.listeners
            .iter()
            .any(|(_, k, p)| *k == kind && *p == phase)
    }
}

impl ListenerHost for HeadlessHost {
    fn add_listener(&mut self, kind: ListenerKind, phase: ListenerPhase) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, kind, phase));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|(l, _, _)| *l != id);
    }
}

#[derive(Clone, Debug)]
struct HeadlessNode {
    parent: Option<u32>,
    classes: Vec<String>,
    size: Size,
}

/// Element tree keyed by insertion order.
#[derive(Clone, Debug, Default)]
pub struct HeadlessTree {
    nodes: Vec<HeadlessNode>,
}

impl HeadlessTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element and return its handle.
    pub fn insert(&mut self, parent: Option<u32>, classes: &[&str], size: Size) -> u32 {
        let id = u32::try_from(self.nodes.len()).unwrap_or(u32::MAX);
        self.nodes.push(HeadlessNode {
            parent,
            classes: classes.iter().map(|c| c.to_string()).collect(),
            size,
        });
        id
    }

    fn node(&self, id: u32) -> Option<&HeadlessNode> {
        self.nodes.get(id as usize)
    }
}

impl ElementTree<u32> for HeadlessTree {
    fn parent_of(&self, node: u32) -> Option<u32> {
        self.node(node).and_then(|n| n.parent)
    }

    fn has_class(&self, node: u32, class: &str) -> bool {
        self.node(node)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn client_size(&self, node: u32) -> Size {
        self.node(node).map_or(Size::ZERO, |n| n.size)
    }
}
