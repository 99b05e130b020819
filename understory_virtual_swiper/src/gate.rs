// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Start gate: decide whether a contact may begin a swipe.
//!
//! Two checks run, once per contact start:
//!
//! 1) Scrollbar exclusion. A contact within `scrollbar_exclusion_width` of
//!    the listening element's far edge is assumed to be on the scrollbar.
//! 2) Class exclusion. Walking from the contact's target up to (but not
//!    including) the swiper's root, any element carrying one of the
//!    excluded class names vetoes the swipe.
//!
//! The ancestor walk goes through [`ElementTree`], so hosts can back it with
//! a DOM, a widget tree, or anything else with parent links.
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_virtual_swiper::axis::{AxisView, Orientation, TextDirection};
//! use understory_virtual_swiper::gate::{GateRejection, StartGate};
//! use understory_virtual_swiper::headless::HeadlessTree;
//! use understory_virtual_swiper::position::PositionEvent;
//! use understory_virtual_swiper::SwiperOptions;
//!
//! let mut tree = HeadlessTree::new();
//! let root = tree.insert(None, &[], Size::new(400.0, 100.0));
//! let button = tree.insert(Some(root), &["no-swipe"], Size::new(40.0, 20.0));
//!
//! let options = SwiperOptions::default().with_excluded_class("no-swipe");
//! let gate = StartGate::from_options(&options);
//! let axis = AxisView { orientation: Orientation::Horizontal, direction: TextDirection::Ltr };
//!
//! let on_button = PositionEvent {
//!     client: Some(Point::new(50.0, 10.0)),
//!     offset: Some(Point::new(50.0, 10.0)),
//!     target: button,
//!     current_target: root,
//! };
//! assert_eq!(gate.evaluate(&on_button, &tree, root, axis), Err(GateRejection::ExcludedClass));
//! ```

use alloc::string::String;
use core::fmt;

use hashbrown::HashSet;
use kurbo::Size;

use crate::axis::{AxisView, Orientation};
use crate::options::SwiperOptions;
use crate::position::PositionEvent;

/// Element hierarchy the gate walks.
pub trait ElementTree<K> {
    /// Parent of `node`, or `None` at the top of the tree.
    fn parent_of(&self, node: K) -> Option<K>;

    /// Returns `true` if `node` carries `class`.
    fn has_class(&self, node: K, class: &str) -> bool;

    /// Client (padding box) size of `node`.
    fn client_size(&self, node: K) -> Size;
}

/// Why a contact was not allowed to start a swipe.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GateRejection {
    /// The contact carried no usable offset coordinates.
    MissingPosition,
    /// The contact landed on the scrollbar strip.
    OnScrollbar {
        /// Distance from the contact to the far edge.
        distance: f64,
    },
    /// The target or one of its ancestors below the root is excluded.
    ExcludedClass,
}

impl fmt::Display for GateRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPosition => write!(f, "contact has no offset coordinates"),
            Self::OnScrollbar { distance } => {
                write!(f, "contact is {distance} from the far edge, inside the scrollbar strip")
            }
            Self::ExcludedClass => write!(f, "contact target is inside an excluded element"),
        }
    }
}

impl core::error::Error for GateRejection {}

/// Start-gate policy borrowed from a [`SwiperOptions`].
#[derive(Copy, Clone, Debug)]
pub struct StartGate<'a> {
    /// Width of the trailing-edge strip treated as a scrollbar.
    pub scrollbar_exclusion_width: f64,
    /// Class names that veto a swipe.
    pub excluded_class_names: &'a HashSet<String>,
}

impl<'a> StartGate<'a> {
    /// Borrow the gate settings from `options`.
    pub fn from_options(options: &'a SwiperOptions) -> Self {
        Self {
            scrollbar_exclusion_width: options.scrollbar_exclusion_width,
            excluded_class_names: &options.excluded_class_names,
        }
    }

    /// Run both checks, reporting the first that fails.
    pub fn evaluate<K, T>(
        &self,
        event: &PositionEvent<K>,
        tree: &T,
        root: K,
        axis: AxisView,
    ) -> Result<(), GateRejection>
    where
        K: Copy + Eq,
        T: ElementTree<K> + ?Sized,
    {
        let offset = event.offset.ok_or(GateRejection::MissingPosition)?;
        let size = tree.client_size(event.current_target);
        let distance = if axis.orientation == Orientation::Horizontal && axis.is_rtl() {
            size.height - offset.y
        } else {
            size.width - offset.x
        };
        if distance <= self.scrollbar_exclusion_width {
            return Err(GateRejection::OnScrollbar { distance });
        }

        if self.excluded_class_names.is_empty() {
            return Ok(());
        }
        let mut node = Some(event.target);
        while let Some(current) = node {
            if current == root {
                break;
            }
            if self
                .excluded_class_names
                .iter()
                .any(|class| tree.has_class(current, class))
            {
                return Err(GateRejection::ExcludedClass);
            }
            node = tree.parent_of(current);
        }
        Ok(())
    }

    /// Returns `true` if [`StartGate::evaluate`] accepts the contact.
    pub fn can_start<K, T>(&self, event: &PositionEvent<K>, tree: &T, root: K, axis: AxisView) -> bool
    where
        K: Copy + Eq,
        T: ElementTree<K> + ?Sized,
    {
        self.evaluate(event, tree, root, axis).is_ok()
    }
}
