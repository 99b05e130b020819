// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture-to-scroll controller.

use alloc::rc::Rc;
use core::fmt;
use core::mem;

use smallvec::SmallVec;

use crate::axis::{AxisView, Directionality};
use crate::click::{ClickEvent, ClickGuard, DragStartEvent};
use crate::gate::{ElementTree, StartGate};
use crate::host::{ListenerHost, ListenerId, SWIPER_LISTENERS};
use crate::notify::{Notifications, SwipeNotification};
use crate::options::SwiperOptions;
use crate::position::{PointerInput, PositionEvent};
use crate::session::{self, SessionPhase, Tracking};
use crate::viewport::{self, ScrollBehavior, ScrolledIndex, SubscriptionId, Viewport};

/// Lifecycle misuse reported by [`VirtualSwiper::attach`] and
/// [`VirtualSwiper::detach`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttachError {
    /// `attach` was called on an attached swiper.
    AlreadyAttached,
    /// `detach` was called on a detached swiper.
    NotAttached,
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyAttached => write!(f, "swiper is already attached to a host"),
            Self::NotAttached => write!(f, "swiper is not attached to a host"),
        }
    }
}

impl core::error::Error for AttachError {}

#[derive(Debug)]
struct Attachment {
    listeners: SmallVec<[ListenerId; 8]>,
    index_subscription: SubscriptionId,
}

/// Turns pointer and touch movement into scrolling of a [`Viewport`].
///
/// `K` is the host's element handle; `root` is the element the swiper is
/// attached to and bounds the start gate's ancestor walk.
///
/// The host forwards its events to the `on_*` methods. Each returns the
/// [`SwipeNotification`]s it produced, in order. Only one contact is tracked
/// at a time. A contact start while a session is live replaces that session
/// without ending it, so a release the host never delivered cannot wedge the
/// swiper.
///
/// The entry points do nothing while the swiper is detached. The index used
/// for snapping is only kept current between attach and detach.
pub struct VirtualSwiper<V, K> {
    viewport: V,
    root: K,
    options: SwiperOptions,
    directionality: Option<Rc<dyn Directionality>>,
    phase: SessionPhase,
    click_guard: ClickGuard,
    index: ScrolledIndex,
    attachment: Option<Attachment>,
}

impl<V: fmt::Debug, K: fmt::Debug> fmt::Debug for VirtualSwiper<V, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualSwiper")
            .field("viewport", &self.viewport)
            .field("root", &self.root)
            .field("options", &self.options)
            .field(
                "directionality",
                &self.directionality.as_ref().map(|d| d.direction()),
            )
            .field("phase", &self.phase)
            .field("click_guard", &self.click_guard)
            .field("index", &self.index.get())
            .field("attachment", &self.attachment)
            .finish()
    }
}

impl<V: Viewport, K: Copy + Eq> VirtualSwiper<V, K> {
    /// Creates a detached swiper driving `viewport`.
    pub fn new(viewport: V, root: K, options: SwiperOptions) -> Self {
        Self {
            viewport,
            root,
            options,
            directionality: None,
            phase: SessionPhase::Idle,
            click_guard: ClickGuard::default(),
            index: ScrolledIndex::new(),
            attachment: None,
        }
    }

    /// Use `directionality` as the text direction source.
    #[must_use]
    pub fn with_directionality(mut self, directionality: Rc<dyn Directionality>) -> Self {
        self.directionality = Some(directionality);
        self
    }

    /// Replace the text direction source. `None` means left to right.
    pub fn set_directionality(&mut self, directionality: Option<Rc<dyn Directionality>>) {
        self.directionality = directionality;
    }

    /// Register every listener on `host` and follow the viewport's index.
    pub fn attach<H: ListenerHost + ?Sized>(&mut self, host: &mut H) -> Result<(), AttachError> {
        if self.attachment.is_some() {
            return Err(AttachError::AlreadyAttached);
        }
        let listeners = SWIPER_LISTENERS
            .iter()
            .map(|&(kind, phase)| host.add_listener(kind, phase))
            .collect();
        let index_subscription = self.viewport.subscribe_scrolled_index(self.index.clone());
        self.attachment = Some(Attachment {
            listeners,
            index_subscription,
        });
        log::debug!("swiper attached");
        Ok(())
    }

    /// Remove every registration made by [`VirtualSwiper::attach`].
    ///
    /// A live session is dropped without notifications.
    pub fn detach<H: ListenerHost + ?Sized>(&mut self, host: &mut H) -> Result<(), AttachError> {
        let attachment = self.attachment.take().ok_or(AttachError::NotAttached)?;
        for id in attachment.listeners {
            host.remove_listener(id);
        }
        self.viewport
            .unsubscribe_scrolled_index(attachment.index_subscription);
        self.phase = SessionPhase::Idle;
        log::debug!("swiper detached");
        Ok(())
    }

    /// Returns `true` between [`VirtualSwiper::attach`] and
    /// [`VirtualSwiper::detach`].
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Contact start (mouse down or touch start).
    ///
    /// Yields [`SwipeNotification::BeforeStart`] whenever attached. Any live
    /// session is dropped first. Then a new session is armed, yielding
    /// [`SwipeNotification::Start`], if the start gate accepts the contact and
    /// the swiper is enabled.
    pub fn on_pointer_down<T: ElementTree<K> + ?Sized>(
        &mut self,
        input: &PointerInput<'_, K>,
        tree: &T,
    ) -> Notifications<K> {
        let mut out = Notifications::new();
        if !self.is_attached() {
            return out;
        }
        let event = PositionEvent::from_input(input);
        out.push(SwipeNotification::BeforeStart(event));

        if self.phase.is_active() {
            log::debug!("contact start superseded the live session");
            self.phase = SessionPhase::Idle;
        }
        self.click_guard.clear();

        let gate = StartGate::from_options(&self.options);
        if let Err(reason) = gate.evaluate(&event, tree, self.root, self.axis()) {
            log::debug!("swipe not started: {reason}");
            return out;
        }
        if !self.options.enabled {
            return out;
        }
        let Some(client) = event.client else {
            return out;
        };

        self.phase = SessionPhase::Armed(Tracking::new(client));
        out.push(SwipeNotification::Start);
        out
    }

    /// Contact movement (mouse move or touch move).
    ///
    /// Applies the step to the viewport when the candidate offset stays
    /// within `0..=scroll_extent()` and the session is locked or the step
    /// reaches `minimum_drag_px_to_swipe`. Rejected samples leave the last
    /// position untouched, so the next sample measures from the same place.
    pub fn on_pointer_move(&mut self, input: &PointerInput<'_, K>) -> Notifications<K> {
        let mut out = Notifications::new();
        if !self.is_attached() || !self.options.enabled {
            return out;
        }
        let Some(pos) = PositionEvent::from_input(input).client else {
            return out;
        };

        let axis = self.axis();
        let offset = self.viewport.measure_scroll_offset();
        let extent = self.scroll_extent();
        let minimum_drag = self.options.minimum_drag_px_to_swipe;

        let (tracking, locked) = match &mut self.phase {
            SessionPhase::Idle => return out,
            SessionPhase::Armed(t) => (t, false),
            SessionPhase::Locked(t) => (t, true),
        };

        let step = session::step(tracking.last, pos, offset, axis);
        tracking.step_delta = step.magnitude;
        let in_range = step.candidate >= 0.0 && step.candidate <= extent;
        if !in_range || !(locked || step.magnitude >= minimum_drag) {
            log::trace!(
                "movement sample dropped: candidate {} of {extent}, step {}",
                step.candidate,
                step.magnitude
            );
            return out;
        }

        self.viewport.scroll_to_offset(step.candidate);
        tracking.last = pos;
        if !locked {
            let tracking = *tracking;
            self.phase = SessionPhase::Locked(tracking);
            log::debug!("swipe unlocked after {} units", step.magnitude);
            out.push(SwipeNotification::Unlocked);
        }
        out
    }

    /// Contact release (document mouse up or touch end).
    ///
    /// A locked session snaps (when `finalize` is set) and yields
    /// [`SwipeNotification::End`]. [`SwipeNotification::AfterEnd`] is
    /// yielded on every call made while attached.
    pub fn on_pointer_up(&mut self) -> Notifications<K> {
        let mut out = Notifications::new();
        if !self.is_attached() {
            return out;
        }
        match mem::take(&mut self.phase) {
            SessionPhase::Idle => {}
            SessionPhase::Armed(tracking) => self.click_guard.record(&tracking),
            SessionPhase::Locked(tracking) => {
                self.click_guard.record(&tracking);
                if self.options.finalize {
                    self.scroll_to_nearest_index(&tracking);
                }
                out.push(SwipeNotification::End);
            }
        }
        out.push(SwipeNotification::AfterEnd);
        out
    }

    /// Capture-phase click on the root.
    ///
    /// Returns `true` if the click was suppressed.
    pub fn on_click(&mut self, event: &mut ClickEvent) -> bool {
        self.is_attached()
            && self
                .click_guard
                .on_click(event, self.options.threshold, self.options.prevent_clicks)
    }

    /// Native drag start anywhere in the document. Prevented while
    /// attached, so images and links cannot be dragged out mid-swipe.
    pub fn on_drag_start(&mut self, event: &mut DragStartEvent) {
        if self.is_attached() {
            event.default_prevented = true;
        }
    }

    /// Returns `true` while a session is scrolling the viewport.
    pub fn is_swiping(&self) -> bool {
        self.phase.is_locked()
    }

    /// Current session phase.
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Last index published by the viewport.
    pub fn current_index(&self) -> usize {
        self.index.get()
    }

    /// Total scrollable distance accepted for movement.
    pub fn scroll_extent(&self) -> f64 {
        viewport::scroll_extent(&self.viewport, self.options.item_extent)
    }

    /// Returns the enable switch, [`SwiperOptions::enabled`].
    pub fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    /// Set the enable switch. While disabled, contacts still yield
    /// [`SwipeNotification::BeforeStart`] but never arm, and movement is
    /// ignored.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
    }

    /// Configuration.
    pub fn options(&self) -> &SwiperOptions {
        &self.options
    }

    /// The driven viewport.
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// The driven viewport, mutably.
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    fn axis(&self) -> AxisView {
        AxisView::resolve(&self.viewport, self.directionality.as_deref())
    }

    fn scroll_to_nearest_index(&mut self, tracking: &Tracking) {
        let displacement = session::snap_displacement(tracking, self.axis());
        let index = self.index.get();
        let target = if displacement > 0.0 && displacement.abs() >= self.options.threshold {
            index.saturating_add(1)
        } else {
            index
        };
        log::debug!("snapping to index {target} after {displacement} units");
        self.viewport.scroll_to_index(target, ScrollBehavior::Smooth);
    }
}

impl<V, K> Drop for VirtualSwiper<V, K> {
    fn drop(&mut self) {
        if self.attachment.is_some() {
            log::warn!("swiper dropped while attached; its host listeners were not removed");
        }
    }
}
