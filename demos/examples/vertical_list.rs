// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical list with excluded regions.
//!
//! Rows carry a slider marked `no-swipe`; contacts that land on it, or on the
//! scrollbar strip along the right edge, never start a swipe. Right-to-left
//! direction is switched on halfway to show that it leaves vertical
//! scrolling untouched.
//!
//! Run:
//! - `cargo run -p understory_swiper_demos --example vertical_list`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Size};
use understory_swiper_demos::{Gesture, init_logging, play};
use understory_virtual_swiper::headless::{HeadlessHost, HeadlessTree, HeadlessViewport};
use understory_virtual_swiper::{Orientation, SwiperOptions, TextDirection, VirtualSwiper};

fn main() {
    init_logging();

    let mut tree = HeadlessTree::new();
    let root = tree.insert(None, &["viewport"], Size::new(320.0, 480.0));
    let slider = tree.insert(Some(root), &["row", "no-swipe"], Size::new(200.0, 40.0));

    let viewport = HeadlessViewport::new(500, 80.0, Orientation::Vertical, 480.0);
    let options = SwiperOptions::default()
        .with_item_extent(Some(80.0))
        .with_excluded_class("no-swipe");
    let direction = Rc::new(Cell::new(TextDirection::Ltr));
    let mut swiper = VirtualSwiper::new(viewport, root, options).with_directionality(direction.clone());

    let mut host = HeadlessHost::new();
    swiper.attach(&mut host).expect("fresh swiper attaches");

    let up_swipe: &[Point] = &[
        Point::new(100.0, 400.0),
        Point::new(100.0, 380.0),
        Point::new(100.0, 300.0),
    ];

    play(
        &mut swiper,
        &tree,
        root,
        &Gesture {
            label: "swipe up",
            target: root,
            path: up_swipe,
        },
    );
    play(
        &mut swiper,
        &tree,
        root,
        &Gesture {
            label: "drag on the slider",
            target: slider,
            path: up_swipe,
        },
    );
    play(
        &mut swiper,
        &tree,
        root,
        &Gesture {
            label: "drag on the scrollbar",
            target: root,
            path: &[Point::new(310.0, 400.0), Point::new(310.0, 300.0)],
        },
    );

    direction.set(TextDirection::Rtl);
    play(
        &mut swiper,
        &tree,
        root,
        &Gesture {
            label: "swipe up, right to left",
            target: root,
            path: up_swipe,
        },
    );

    swiper.detach(&mut host).expect("attached swiper detaches");
}
