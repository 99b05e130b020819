// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for `VirtualSwiper`.
//!
//! Each test drives the swiper through the headless viewport, host, and tree,
//! the same way a host framework forwards its input events.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Size};
use understory_virtual_swiper::headless::{HeadlessHost, HeadlessTree, HeadlessViewport, ScrollRequest};
use understory_virtual_swiper::{
    ClickEvent, ListenerKind, ListenerPhase, Orientation, PointerInput, ScrollBehavior,
    SessionPhase, SwipeNotification, SwiperOptions, TextDirection, TouchPoint, Viewport,
    VirtualSwiper,
};

struct Rig {
    swiper: VirtualSwiper<HeadlessViewport, u32>,
    tree: HeadlessTree,
    host: HeadlessHost,
    root: u32,
}

/// 100 items of 100 units in a 300 unit view, scrolled to item 5.
fn rig_with(orientation: Orientation, options: SwiperOptions) -> Rig {
    let mut tree = HeadlessTree::new();
    let root = tree.insert(None, &["viewport"], Size::new(300.0, 400.0));
    let mut viewport = HeadlessViewport::new(100, 100.0, orientation, 300.0);
    viewport.scroll_to_offset(500.0);
    let mut swiper = VirtualSwiper::new(viewport, root, options);
    let mut host = HeadlessHost::new();
    swiper.attach(&mut host).unwrap();
    Rig {
        swiper,
        tree,
        host,
        root,
    }
}

fn rig(orientation: Orientation) -> Rig {
    rig_with(orientation, SwiperOptions::default().with_item_extent(Some(100.0)))
}

impl Rig {
    fn at(&self, x: f64, y: f64) -> PointerInput<'static, u32> {
        PointerInput::Mouse {
            client: Point::new(x, y),
            offset: Point::new(x, y),
            target: self.root,
            current_target: self.root,
        }
    }

    fn down(&mut self, x: f64, y: f64) -> Vec<SwipeNotification<u32>> {
        let input = self.at(x, y);
        self.swiper.on_pointer_down(&input, &self.tree).into_vec()
    }

    fn move_to(&mut self, x: f64, y: f64) -> Vec<SwipeNotification<u32>> {
        let input = self.at(x, y);
        self.swiper.on_pointer_move(&input).into_vec()
    }

    fn up(&mut self) -> Vec<SwipeNotification<u32>> {
        self.swiper.on_pointer_up().into_vec()
    }

    fn offset(&self) -> f64 {
        self.swiper.viewport().measure_scroll_offset()
    }

    fn click(&mut self) -> bool {
        let mut ev = ClickEvent::default();
        let suppressed = self.swiper.on_click(&mut ev);
        assert_eq!(suppressed, ev.is_suppressed(), "return value matches flags");
        suppressed
    }

    fn last_request(&self) -> Option<ScrollRequest> {
        self.swiper.viewport().scroll_requests().last().copied()
    }

    fn tear_down(mut self) {
        self.swiper.detach(&mut self.host).unwrap();
    }
}

fn unlocked_count(events: &[SwipeNotification<u32>]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SwipeNotification::Unlocked))
        .count()
}

#[test]
fn small_movement_stays_armed_then_locks_on_cumulative_delta() {
    let mut rig = rig(Orientation::Horizontal);
    let events = rig.down(100.0, 50.0);
    assert!(matches!(events[0], SwipeNotification::BeforeStart(ev) if ev.client == Some(Point::new(100.0, 50.0))));
    assert_eq!(events[1], SwipeNotification::Start);

    assert!(rig.move_to(105.0, 50.0).is_empty());
    assert_eq!(rig.offset(), 500.0);
    assert!(matches!(rig.swiper.phase(), SessionPhase::Armed(_)));
    assert!(!rig.swiper.is_swiping());

    assert_eq!(rig.move_to(112.0, 50.0), vec![SwipeNotification::Unlocked]);
    assert_eq!(rig.offset(), 488.0);
    assert!(rig.swiper.is_swiping());
    rig.tear_down();
}

#[test]
fn rtl_inverts_horizontal_movement() {
    let mut rig = rig(Orientation::Horizontal);
    rig.swiper
        .set_directionality(Some(Rc::new(TextDirection::Rtl)));
    rig.down(100.0, 50.0);
    rig.move_to(105.0, 50.0);
    assert_eq!(rig.move_to(112.0, 50.0), vec![SwipeNotification::Unlocked]);
    assert_eq!(rig.offset(), 512.0);
    rig.tear_down();
}

#[test]
fn rejected_samples_accumulate_until_threshold() {
    let mut rig = rig(Orientation::Horizontal);
    rig.down(100.0, 50.0);
    for x in [104.0, 108.0, 96.0, 92.0] {
        assert!(rig.move_to(x, 50.0).is_empty());
    }
    assert_eq!(rig.offset(), 500.0);
    rig.move_to(89.0, 50.0);
    assert_eq!(rig.offset(), 511.0);
    let tracking = rig.swiper.phase().tracking().copied().unwrap();
    assert_eq!(tracking.last, Point::new(89.0, 50.0));
    assert_eq!(tracking.prior, Point::new(100.0, 50.0));
    assert_eq!(tracking.anchor, Point::new(100.0, 50.0));
    rig.tear_down();
}

#[test]
fn tap_never_scrolls_or_suppresses_click() {
    let mut rig = rig(Orientation::Horizontal);
    rig.down(100.0, 50.0);
    rig.move_to(103.0, 52.0);
    assert_eq!(rig.up(), vec![SwipeNotification::AfterEnd]);
    assert_eq!(rig.offset(), 500.0);
    assert!(rig.swiper.viewport().scroll_requests().is_empty());
    assert!(!rig.click());
    rig.tear_down();
}

#[test]
fn forward_drag_snaps_to_next_index() {
    let mut rig = rig(Orientation::Horizontal);
    rig.down(200.0, 50.0);
    rig.move_to(150.0, 50.0);
    assert_eq!(rig.offset(), 550.0);
    assert_eq!(rig.swiper.current_index(), 5);

    assert_eq!(
        rig.up(),
        vec![SwipeNotification::End, SwipeNotification::AfterEnd]
    );
    assert_eq!(
        rig.last_request(),
        Some(ScrollRequest {
            index: 6,
            behavior: ScrollBehavior::Smooth
        })
    );
    assert_eq!(rig.offset(), 600.0);
    assert_eq!(rig.swiper.current_index(), 6);
    assert!(rig.click());
    rig.tear_down();
}

#[test]
fn backward_drag_settles_on_current_index() {
    let mut rig = rig(Orientation::Horizontal);
    rig.down(150.0, 50.0);
    rig.move_to(200.0, 50.0);
    assert_eq!(rig.offset(), 450.0);
    assert_eq!(rig.swiper.current_index(), 4);
    rig.up();
    assert_eq!(
        rig.last_request(),
        Some(ScrollRequest {
            index: 4,
            behavior: ScrollBehavior::Smooth
        })
    );
    assert_eq!(rig.offset(), 400.0);
    rig.tear_down();
}

#[test]
fn short_forward_drag_settles_back() {
    let mut rig = rig(Orientation::Horizontal);
    rig.down(200.0, 50.0);
    rig.move_to(180.0, 50.0);
    assert_eq!(rig.offset(), 520.0);
    rig.up();
    assert_eq!(rig.last_request().map(|r| r.index), Some(5));
    assert_eq!(rig.offset(), 500.0);
    // 20 units is below the 30 unit threshold on both axes.
    assert!(!rig.click());
    rig.tear_down();
}

#[test]
fn rtl_snap_treats_rightward_drag_as_forward() {
    let mut rig = rig(Orientation::Horizontal);
    rig.swiper
        .set_directionality(Some(Rc::new(TextDirection::Rtl)));
    rig.down(150.0, 50.0);
    rig.move_to(200.0, 50.0);
    assert_eq!(rig.offset(), 550.0);
    rig.up();
    assert_eq!(rig.last_request().map(|r| r.index), Some(6));
    rig.tear_down();
}

#[test]
fn finalize_off_skips_snap_but_still_ends() {
    let options = SwiperOptions::default()
        .with_item_extent(Some(100.0))
        .with_finalize(false);
    let mut rig = rig_with(Orientation::Horizontal, options);
    rig.down(200.0, 50.0);
    rig.move_to(150.0, 50.0);
    assert_eq!(
        rig.up(),
        vec![SwipeNotification::End, SwipeNotification::AfterEnd]
    );
    assert!(rig.swiper.viewport().scroll_requests().is_empty());
    assert_eq!(rig.offset(), 550.0);
    rig.tear_down();
}

#[test]
fn contact_on_scrollbar_strip_is_rejected() {
    let mut rig = rig(Orientation::Horizontal);
    let events = rig.down(290.0, 50.0);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], SwipeNotification::BeforeStart(_)));
    assert_eq!(*rig.swiper.phase(), SessionPhase::Idle);

    assert!(rig.move_to(200.0, 50.0).is_empty());
    assert_eq!(rig.offset(), 500.0);
    assert_eq!(rig.up(), vec![SwipeNotification::AfterEnd]);
    rig.tear_down();
}

#[test]
fn excluded_class_blocks_start() {
    let options = SwiperOptions::default()
        .with_item_extent(Some(100.0))
        .with_excluded_class("no-swipe");
    let mut rig = rig_with(Orientation::Horizontal, options);
    let slider = rig
        .tree
        .insert(Some(rig.root), &["no-swipe"], Size::new(100.0, 40.0));
    let thumb = rig.tree.insert(Some(slider), &["thumb"], Size::new(10.0, 10.0));

    let input = PointerInput::Mouse {
        client: Point::new(100.0, 50.0),
        offset: Point::new(100.0, 50.0),
        target: thumb,
        current_target: rig.root,
    };
    let events = rig.swiper.on_pointer_down(&input, &rig.tree);
    assert_eq!(events.len(), 1);
    assert!(!rig.swiper.phase().is_active());
    rig.tear_down();
}

#[test]
fn offsets_outside_extent_are_dropped_not_clamped() {
    let mut rig = rig(Orientation::Horizontal);
    rig.swiper.viewport_mut().scroll_to_offset(0.0);
    rig.down(100.0, 50.0);
    rig.move_to(50.0, 50.0);
    assert_eq!(rig.offset(), 50.0);

    // Would land at -100: dropped, and the last position stays at x = 50.
    assert!(rig.move_to(200.0, 50.0).is_empty());
    assert_eq!(rig.offset(), 50.0);
    assert_eq!(
        rig.swiper.phase().tracking().map(|t| t.last),
        Some(Point::new(50.0, 50.0))
    );

    rig.move_to(100.0, 50.0);
    assert_eq!(rig.offset(), 0.0);
    rig.tear_down();
}

#[test]
fn locked_session_keeps_offset_within_extent() {
    let mut rig = rig(Orientation::Horizontal);
    let extent = rig.swiper.scroll_extent();
    assert_eq!(extent, 10_000.0);
    rig.down(200.0, 50.0);
    let mut x = 200.0;
    for step in [30.0, -80.0, 120.0, -400.0, 7.0, 900.0, -3.0] {
        x -= step;
        rig.move_to(x, 50.0);
        let offset = rig.offset();
        assert!((0.0..=extent).contains(&offset), "offset {offset} left the extent");
    }
    rig.tear_down();
}

#[test]
fn unlocked_fires_at_most_once_per_session() {
    let mut rig = rig(Orientation::Horizontal);
    let mut seen = rig.down(200.0, 50.0);
    for x in [195.0, 180.0, 160.0, 170.0, 120.0] {
        seen.extend(rig.move_to(x, 50.0));
    }
    seen.extend(rig.up());
    assert_eq!(unlocked_count(&seen), 1);
    assert_eq!(
        seen.iter()
            .filter(|e| matches!(e, SwipeNotification::End))
            .count(),
        1
    );
    assert_eq!(seen.last(), Some(&SwipeNotification::AfterEnd));

    // A second session unlocks again.
    let mut seen = rig.down(200.0, 50.0);
    seen.extend(rig.move_to(150.0, 50.0));
    assert_eq!(unlocked_count(&seen), 1);
    rig.up();
    rig.tear_down();
}

#[test]
fn release_without_contact_still_reports_after_end() {
    let mut rig = rig(Orientation::Horizontal);
    assert_eq!(rig.up(), vec![SwipeNotification::AfterEnd]);
    assert_eq!(rig.up(), vec![SwipeNotification::AfterEnd]);
    rig.tear_down();
}

#[test]
fn vertical_drag_up_scrolls_forward_regardless_of_direction() {
    for direction in [TextDirection::Ltr, TextDirection::Rtl] {
        let mut rig = rig(Orientation::Vertical);
        rig.swiper.set_directionality(Some(Rc::new(direction)));
        rig.down(50.0, 200.0);
        assert_eq!(rig.move_to(50.0, 150.0), vec![SwipeNotification::Unlocked]);
        assert_eq!(rig.offset(), 550.0);
        rig.move_to(50.0, 170.0);
        assert_eq!(rig.offset(), 530.0);
        rig.up();
        assert_eq!(rig.last_request().map(|r| r.index), Some(6));
        rig.tear_down();
    }
}

#[test]
fn vertical_drag_down_settles() {
    let mut rig = rig(Orientation::Vertical);
    rig.down(50.0, 150.0);
    rig.move_to(50.0, 210.0);
    assert_eq!(rig.offset(), 440.0);
    rig.up();
    assert_eq!(rig.last_request().map(|r| r.index), Some(4));
    rig.tear_down();
}

#[test]
fn direction_is_reread_for_every_sample() {
    let mut rig = rig(Orientation::Horizontal);
    let dir = Rc::new(Cell::new(TextDirection::Ltr));
    rig.swiper.set_directionality(Some(dir.clone()));
    rig.down(100.0, 50.0);
    rig.move_to(80.0, 50.0);
    assert_eq!(rig.offset(), 520.0);
    dir.set(TextDirection::Rtl);
    rig.move_to(70.0, 50.0);
    assert_eq!(rig.offset(), 510.0);
    rig.tear_down();
}

#[test]
fn orientation_is_reread_for_every_sample() {
    let mut rig = rig(Orientation::Horizontal);
    rig.down(100.0, 100.0);
    rig.move_to(80.0, 100.0);
    assert_eq!(rig.offset(), 520.0);
    rig.swiper
        .viewport_mut()
        .set_orientation(Orientation::Vertical);
    rig.move_to(80.0, 60.0);
    assert_eq!(rig.offset(), 560.0);
    rig.tear_down();
}

#[test]
fn disabled_swiper_reports_before_start_only() {
    let options = SwiperOptions::default()
        .with_item_extent(Some(100.0))
        .with_enabled(false);
    let mut rig = rig_with(Orientation::Horizontal, options);
    assert!(!rig.swiper.is_enabled());
    let events = rig.down(100.0, 50.0);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], SwipeNotification::BeforeStart(_)));
    assert!(rig.move_to(40.0, 50.0).is_empty());
    assert_eq!(rig.offset(), 500.0);
    assert_eq!(rig.up(), vec![SwipeNotification::AfterEnd]);

    rig.swiper.set_enabled(true);
    assert_eq!(rig.down(100.0, 50.0).len(), 2);
    rig.tear_down();
}

#[test]
fn disabling_mid_session_freezes_movement() {
    let mut rig = rig(Orientation::Horizontal);
    rig.down(100.0, 50.0);
    rig.move_to(80.0, 50.0);
    rig.swiper.set_enabled(false);
    rig.move_to(20.0, 50.0);
    assert_eq!(rig.offset(), 520.0);
    assert_eq!(
        rig.up(),
        vec![SwipeNotification::End, SwipeNotification::AfterEnd]
    );
    rig.tear_down();
}

#[test]
fn new_contact_supersedes_session_whose_release_was_lost() {
    let mut rig = rig(Orientation::Horizontal);
    rig.down(250.0, 50.0);
    rig.move_to(200.0, 50.0);
    assert!(rig.swiper.is_swiping());
    assert_eq!(rig.offset(), 550.0);

    // No release arrives; the next contact starts somewhere else.
    let events = rig.down(20.0, 50.0);
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], SwipeNotification::BeforeStart(_)));
    assert_eq!(events[1], SwipeNotification::Start);
    assert!(matches!(rig.swiper.phase(), SessionPhase::Armed(_)));
    assert_eq!(
        rig.swiper.phase().tracking().map(|t| t.anchor),
        Some(Point::new(20.0, 50.0))
    );

    // Measured from the new contact, not the stale one.
    assert!(rig.move_to(25.0, 50.0).is_empty());
    assert_eq!(rig.offset(), 550.0);
    assert_eq!(rig.move_to(60.0, 50.0), vec![SwipeNotification::Unlocked]);
    assert_eq!(rig.offset(), 510.0);
    assert_eq!(
        rig.up(),
        vec![SwipeNotification::End, SwipeNotification::AfterEnd]
    );
    assert_eq!(rig.offset(), 500.0);
    rig.tear_down();
}

#[test]
fn rejected_contact_still_drops_live_session() {
    let mut rig = rig(Orientation::Horizontal);
    rig.down(200.0, 50.0);
    rig.move_to(150.0, 50.0);
    assert!(rig.swiper.is_swiping());

    // Lands on the scrollbar strip.
    assert_eq!(rig.down(295.0, 50.0).len(), 1);
    assert!(!rig.swiper.phase().is_active());
    assert!(rig.move_to(100.0, 50.0).is_empty());
    assert_eq!(rig.offset(), 550.0);
    assert_eq!(rig.up(), vec![SwipeNotification::AfterEnd]);
    assert!(!rig.click());
    rig.tear_down();
}

#[test]
fn touch_without_points_is_a_no_op() {
    let mut rig = rig(Orientation::Horizontal);
    let empty = PointerInput::Touch {
        touches: &[],
        target: rig.root,
        current_target: rig.root,
    };
    let events = rig.swiper.on_pointer_down(&empty, &rig.tree);
    assert_eq!(events.len(), 1);
    assert!(!rig.swiper.phase().is_active());

    let touches = [TouchPoint {
        client: Point::new(100.0, 50.0),
        offset: Point::new(100.0, 50.0),
    }];
    let start = PointerInput::Touch {
        touches: &touches,
        target: rig.root,
        current_target: rig.root,
    };
    assert_eq!(rig.swiper.on_pointer_down(&start, &rig.tree).len(), 2);
    assert!(rig.swiper.on_pointer_move(&empty).is_empty());
    assert_eq!(rig.offset(), 500.0);

    let moved = [TouchPoint {
        client: Point::new(60.0, 50.0),
        offset: Point::new(60.0, 50.0),
    }];
    let drag = PointerInput::Touch {
        touches: &moved,
        target: rig.root,
        current_target: rig.root,
    };
    assert_eq!(
        rig.swiper.on_pointer_move(&drag).into_vec(),
        vec![SwipeNotification::Unlocked]
    );
    assert_eq!(rig.offset(), 540.0);
    rig.tear_down();
}

#[test]
fn click_suppression_respects_option() {
    let options = SwiperOptions::default()
        .with_item_extent(Some(100.0))
        .with_prevent_clicks(false);
    let mut rig = rig_with(Orientation::Horizontal, options);
    rig.down(200.0, 50.0);
    rig.move_to(100.0, 50.0);
    rig.up();
    assert!(!rig.click());
    rig.tear_down();
}

#[test]
fn click_after_rejected_contact_is_not_suppressed() {
    let mut rig = rig(Orientation::Horizontal);
    rig.down(200.0, 50.0);
    rig.move_to(100.0, 50.0);
    rig.up();
    assert!(rig.click());

    // Next contact lands on the scrollbar strip and never arms.
    rig.down(295.0, 50.0);
    rig.up();
    assert!(!rig.click());
    rig.tear_down();
}

#[test]
fn attach_and_detach_balance_every_registration() {
    let mut tree = HeadlessTree::new();
    let root = tree.insert(None, &[], Size::new(300.0, 100.0));
    let viewport = HeadlessViewport::new(10, 100.0, Orientation::Horizontal, 300.0);
    let mut swiper = VirtualSwiper::new(viewport, root, SwiperOptions::default());
    let mut host = HeadlessHost::new();

    for _ in 0..3 {
        swiper.attach(&mut host).unwrap();
        assert!(swiper.is_attached());
        assert_eq!(host.listener_count(), 8);
        assert!(host.has_listener(ListenerKind::Click, ListenerPhase::Capture));
        assert!(host.has_listener(ListenerKind::DocumentPointerUp, ListenerPhase::Bubble));
        assert!(host.has_listener(ListenerKind::DocumentDragStart, ListenerPhase::Bubble));
        assert_eq!(swiper.viewport().subscriber_count(), 1);

        swiper.detach(&mut host).unwrap();
        assert!(!swiper.is_attached());
        assert_eq!(host.listener_count(), 0);
        assert_eq!(swiper.viewport().subscriber_count(), 0);
    }
}

#[test]
fn detached_swiper_stops_following_index() {
    let mut rig = rig(Orientation::Horizontal);
    assert_eq!(rig.swiper.current_index(), 5);
    rig.swiper.detach(&mut rig.host).unwrap();
    rig.swiper.viewport_mut().scroll_to_offset(900.0);
    assert_eq!(rig.swiper.current_index(), 5);
}

#[test]
fn rendered_extent_is_used_without_item_extent() {
    let mut rig = rig_with(Orientation::Horizontal, SwiperOptions::default());
    assert_eq!(rig.swiper.scroll_extent(), 10_000.0);
    rig.swiper
        .viewport_mut()
        .set_rendered_content_extent(None);
    assert_eq!(rig.swiper.scroll_extent(), 100.0);
    rig.tear_down();
}
