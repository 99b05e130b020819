// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the swiper demos.

use kurbo::Point;
use understory_virtual_swiper::headless::{HeadlessTree, HeadlessViewport};
use understory_virtual_swiper::{PointerInput, SwipeNotification, Viewport, VirtualSwiper};

/// Install a logger that shows the swiper's debug output.
///
/// Respects `RUST_LOG` when set.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format_timestamp_millis()
        .try_init();
}

/// A recorded contact: press, a list of moves, release.
#[derive(Debug)]
pub struct Gesture<'a> {
    /// Short label printed before the gesture runs.
    pub label: &'a str,
    /// Element the contact lands on.
    pub target: u32,
    /// Client positions, the first being the press.
    pub path: &'a [Point],
}

/// Play `gesture` through `swiper` and print what happened.
pub fn play(
    swiper: &mut VirtualSwiper<HeadlessViewport, u32>,
    tree: &HeadlessTree,
    root: u32,
    gesture: &Gesture<'_>,
) {
    println!("-- {}", gesture.label);
    let Some((first, rest)) = gesture.path.split_first() else {
        return;
    };
    let input = |pt: Point| PointerInput::Mouse {
        client: pt,
        offset: pt,
        target: gesture.target,
        current_target: root,
    };

    report("down", &swiper.on_pointer_down(&input(*first), tree));
    for pt in rest {
        report("move", &swiper.on_pointer_move(&input(*pt)));
    }
    report("up", &swiper.on_pointer_up());
    println!(
        "   offset {:.1}, first visible index {}",
        swiper.viewport().measure_scroll_offset(),
        swiper.viewport().first_visible_index()
    );
}

fn report(stage: &str, events: &[SwipeNotification<u32>]) {
    for event in events {
        match event {
            SwipeNotification::BeforeStart(ev) => println!("   {stage}: before-start at {:?}", ev.client),
            other => println!("   {stage}: {other:?}"),
        }
    }
}
