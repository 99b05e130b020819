// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal list.
//!
//! Swipe through 100 000 items, each 300 units wide, in a 300 unit wide
//! viewport. Shows a tap passing through, a swipe that snaps forward, a drag
//! back to the first item, and click suppression.
//!
//! Run:
//! - `cargo run -p understory_swiper_demos --example horizontal_list`

use kurbo::{Point, Size};
use understory_swiper_demos::{Gesture, init_logging, play};
use understory_virtual_swiper::headless::{HeadlessHost, HeadlessTree, HeadlessViewport};
use understory_virtual_swiper::{ClickEvent, Orientation, SwiperOptions, VirtualSwiper};

fn main() {
    init_logging();

    let items: Vec<String> = (0..100_000).map(|i| format!("Item #{i}")).collect();

    let mut tree = HeadlessTree::new();
    let root = tree.insert(None, &["viewport"], Size::new(300.0, 200.0));
    let viewport = HeadlessViewport::new(items.len(), 300.0, Orientation::Horizontal, 300.0);
    let options = SwiperOptions::default().with_item_extent(Some(300.0));
    let mut swiper = VirtualSwiper::new(viewport, root, options);

    let mut host = HeadlessHost::new();
    swiper.attach(&mut host).expect("fresh swiper attaches");
    println!("attached with {} listeners", host.listener_count());

    let gestures = [
        Gesture {
            label: "tap",
            target: root,
            path: &[Point::new(150.0, 100.0), Point::new(153.0, 101.0)],
        },
        Gesture {
            label: "swipe left",
            target: root,
            path: &[
                Point::new(250.0, 100.0),
                Point::new(240.0, 100.0),
                Point::new(180.0, 102.0),
                Point::new(120.0, 104.0),
            ],
        },
        Gesture {
            label: "drag right",
            target: root,
            path: &[Point::new(100.0, 100.0), Point::new(120.0, 100.0)],
        },
    ];

    for gesture in &gestures {
        play(&mut swiper, &tree, root, gesture);
        let mut click = ClickEvent::default();
        let suppressed = swiper.on_click(&mut click);
        println!("   trailing click suppressed: {suppressed}");
        let index = swiper.current_index();
        println!("   showing {}", items[index]);
    }

    swiper.detach(&mut host).expect("attached swiper detaches");
    println!("detached, {} listeners left", host.listener_count());
}
