// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener registration on the host element.
//!
//! The controller does not route events itself. On attach it tells the host
//! which events it wants and in which phase, and the host forwards those
//! events to the matching `on_*` entry point. Every registration made on
//! attach is removed again on detach.

/// Event a listener is registered for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Mouse/pen press on the list root.
    PointerDown,
    /// Mouse/pen movement over the list root.
    PointerMove,
    /// Mouse/pen release anywhere in the document.
    DocumentPointerUp,
    /// Touch start on the list root.
    TouchStart,
    /// Touch movement on the list root.
    TouchMove,
    /// Touch end on the list root.
    TouchEnd,
    /// Native drag start anywhere in the document.
    DocumentDragStart,
    /// Click on the list root or any descendant.
    Click,
}

/// Propagation phase a listener runs in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ListenerPhase {
    /// Runs on the way down, before any descendant sees the event.
    Capture,
    /// Runs on the target and on the way up.
    #[default]
    Bubble,
}

/// Handle returned by [`ListenerHost::add_listener`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Element (or document) that accepts listener registrations.
pub trait ListenerHost {
    /// Register interest in `kind` during `phase`.
    fn add_listener(&mut self, kind: ListenerKind, phase: ListenerPhase) -> ListenerId;

    /// Remove a registration made by [`ListenerHost::add_listener`].
    fn remove_listener(&mut self, id: ListenerId);
}

/// Listeners a swiper registers on attach, in registration order.
pub(crate) const SWIPER_LISTENERS: [(ListenerKind, ListenerPhase); 8] = [
    (ListenerKind::PointerDown, ListenerPhase::Bubble),
    (ListenerKind::TouchStart, ListenerPhase::Bubble),
    (ListenerKind::PointerMove, ListenerPhase::Bubble),
    (ListenerKind::TouchMove, ListenerPhase::Bubble),
    (ListenerKind::DocumentPointerUp, ListenerPhase::Bubble),
    (ListenerKind::TouchEnd, ListenerPhase::Bubble),
    (ListenerKind::DocumentDragStart, ListenerPhase::Bubble),
    // Capture so suppression runs before any item handler.
    (ListenerKind::Click, ListenerPhase::Capture),
];
